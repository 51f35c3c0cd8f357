pub mod auth;
pub mod goods;
pub mod products;
pub mod users;

pub use self::auth::model::Identity;
