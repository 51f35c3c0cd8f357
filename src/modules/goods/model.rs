use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A goods record: one top-level category with nested sub-categories.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoodsDoc {
    pub category: String,
    #[serde(rename = "subCategory", default)]
    pub sub_category: Vec<GoodsSubCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoodsSubCategory {
    pub name: String,
    #[serde(default)]
    pub goods: Vec<GoodsItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GoodsItem {
    /// Base64-encoded image bytes.
    pub img: String,
    pub title: String,
    pub desc: String,
}

/// Create request wrapper: `{"goods": {...}}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GoodsCreateRequest {
    pub goods: GoodsDoc,
}

/// Update request wrapper: `{"values": {...}}`, a partial document.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GoodsUpdateRequest {
    pub values: Value,
}
