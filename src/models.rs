use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category of a favorited item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Component,
    Product,
}

impl ItemType {
    /// Column holding this category in the `favorites` table.
    pub fn column(self) -> &'static str {
        match self {
            ItemType::Component => "component_ids",
            ItemType::Product => "product_ids",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesList {
    pub owner_id: String,
    pub component_ids: Vec<String>,
    pub product_ids: Vec<String>,
}

impl FavoritesList {
    pub fn empty(owner_id: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            component_ids: Vec::new(),
            product_ids: Vec::new(),
        }
    }

    pub fn items(&self, kind: ItemType) -> &[String] {
        match kind {
            ItemType::Component => &self.component_ids,
            ItemType::Product => &self.product_ids,
        }
    }

    pub fn items_mut(&mut self, kind: ItemType) -> &mut Vec<String> {
        match kind {
            ItemType::Component => &mut self.component_ids,
            ItemType::Product => &mut self.product_ids,
        }
    }

    pub fn contains(&self, kind: ItemType, item_id: &str) -> bool {
        self.items(kind).iter().any(|id| id == item_id)
    }
}
