use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{Identity, LoginData, LoginRequest};
use crate::modules::goods::model::{
    GoodsCreateRequest, GoodsDoc, GoodsItem, GoodsSubCategory, GoodsUpdateRequest,
};
use crate::modules::products::model::{
    ProductCreateRequest, ProductDoc, ProductIntroduce, ProductSubCategory, ProductUpdateRequest,
};
use crate::modules::users::model::UserDoc;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::admin_login,
        crate::modules::auth::controller::register,
        crate::modules::users::controller::get_all_users,
        crate::modules::users::controller::get_user_by_id,
        crate::modules::users::controller::update_user_by_id,
        crate::modules::users::controller::delete_user_by_id,
        crate::modules::goods::controller::new_goods,
        crate::modules::goods::controller::get_all_goods,
        crate::modules::goods::controller::get_goods_by_id,
        crate::modules::goods::controller::update_goods_by_id,
        crate::modules::goods::controller::delete_goods_by_id,
        crate::modules::products::controller::new_product,
        crate::modules::products::controller::get_all_products,
        crate::modules::products::controller::get_product_by_id,
        crate::modules::products::controller::update_product_by_id,
        crate::modules::products::controller::delete_product_by_id,
    ),
    components(schemas(
        Identity,
        LoginRequest,
        LoginData,
        UserDoc,
        GoodsDoc,
        GoodsSubCategory,
        GoodsItem,
        GoodsCreateRequest,
        GoodsUpdateRequest,
        ProductDoc,
        ProductSubCategory,
        ProductIntroduce,
        ProductCreateRequest,
        ProductUpdateRequest,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Admin login and the register stub"),
        (name = "Users", description = "User collection CRUD"),
        (name = "Goods", description = "Goods collection CRUD"),
        (name = "Products", description = "Product collection CRUD"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
