//! Entity CRUD routes. Paths are literal (fixed entity set), matching the
//! original API surface: list at /{entity}/all, create at /{entity}/add,
//! update at /{entity}/:id, delete at /{entity}/delete/:id. Products also
//! expose a single-entity GET.

use crate::handlers::{accounts, customers, orders, products};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/customers/all", get(customers::list))
        .route("/customers/add", post(customers::create))
        .route("/customers/:id", put(customers::update))
        .route("/customers/delete/:id", delete(customers::remove))
        .route("/customer_accounts/all", get(accounts::list))
        .route("/customer_accounts/add", post(accounts::create))
        .route("/customer_accounts/:id", put(accounts::update))
        .route("/customer_accounts/delete/:id", delete(accounts::remove))
        .route("/products/all", get(products::list))
        .route("/products/add", post(products::create))
        .route("/products/:id", get(products::read).put(products::update))
        .route("/products/delete/:id", delete(products::remove))
        .route("/orders/all", get(orders::list))
        .route("/orders/add", post(orders::create))
        .route("/orders/:id", put(orders::update))
        .route("/orders/delete/:id", delete(orders::remove))
        .with_state(state)
}
