use sea_orm::entity::prelude::*;

use crate::models::FavoritesList;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub owner_id: String,
    pub component_ids: Vec<String>,
    pub product_ids: Vec<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FavoritesList {
    fn from(model: Model) -> Self {
        Self {
            owner_id: model.owner_id,
            component_ids: model.component_ids,
            product_ids: model.product_ids,
        }
    }
}
