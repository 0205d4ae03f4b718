//! API route configuration.

use crate::api::handlers::{
    create_item_handler, create_product_handler, delete_product_handler, get_product_handler,
    list_products_handler, login_handler, owned_items_handler, root_handler,
    update_product_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes open to every caller.
///
/// # Endpoints
///
/// - `GET    /`              - Liveness message
/// - `POST   /login`         - Issue a session token
/// - `GET    /products`      - List products (query parameters filter by equality)
/// - `POST   /productUp`     - Create a product
/// - `GET    /product/{id}`  - Fetch a product (`null` if absent)
/// - `PUT    /product/{id}`  - Set fields on a product, upserting if absent
/// - `DELETE /product/{id}`  - Delete a product
/// - `POST   /item`          - Create an owner-scoped item
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/login", post(login_handler))
        .route("/products", get(list_products_handler))
        .route("/productUp", post(create_product_handler))
        .route(
            "/product/{id}",
            get(get_product_handler)
                .put(update_product_handler)
                .delete(delete_product_handler),
        )
        .route("/item", post(create_item_handler))
}

/// Routes requiring a session token via [`crate::api::middleware::auth`].
///
/// # Endpoints
///
/// - `GET    /items?email=`  - List items owned by the session subject
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/items", get(owned_items_handler))
}
