//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod items;
pub mod login;
pub mod products;
pub mod root;

pub use items::{create_item_handler, owned_items_handler};
pub use login::login_handler;
pub use products::{
    create_product_handler, delete_product_handler, get_product_handler, list_products_handler,
    update_product_handler,
};
pub use root::root_handler;
