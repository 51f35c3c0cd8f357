use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// A product record: a typed category tree with introduction pairs.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductDoc {
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    #[serde(rename = "subCategorys", default)]
    pub sub_categorys: Vec<ProductSubCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductSubCategory {
    pub name: String,
    #[serde(default)]
    pub pairs: Vec<ProductIntroduce>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProductIntroduce {
    pub introduce: String,
    /// Base64-encoded image bytes.
    pub img: String,
}

/// Create request wrapper: `{"product": {...}}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductCreateRequest {
    pub product: ProductDoc,
}

/// Update request wrapper: `{"values": {...}}`, a partial document.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductUpdateRequest {
    pub values: Value,
}
