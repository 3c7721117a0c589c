use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::ItemType;

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerRequest {
    pub owner_id: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemRequest {
    pub id: String,
    pub item_type: ItemType,
}
