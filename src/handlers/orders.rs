use super::body_to_map;
use crate::error::AppError;
use crate::repo::{accounts, orders, products};
use crate::response;
use crate::state::AppState;
use crate::validation::{new_order_payload, order_patch};
use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::Value;

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = orders::list_all(&state.pool).await?;
    Ok(response::ok_many(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let payload = new_order_payload(&body).map_err(AppError::Validation)?;
    accounts::get_by_id(&state.pool, payload.account_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer account {}", payload.account_id)))?;
    products::get_by_id(&state.pool, payload.product_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("product {}", payload.product_id)))?;
    let row = orders::insert(&state.pool, &payload, Utc::now()).await?;
    Ok(response::created(row))
}

/// Partial update: only fields present in the payload change. Supplied
/// references are existence-checked like on create. The id lookup runs before
/// body validation: a missing row is 404 even when the body is also invalid.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    orders::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    let body = body_to_map(body)?;
    let patch = order_patch(&body).map_err(AppError::Validation)?;
    if let Some(account_id) = patch.account_id {
        accounts::get_by_id(&state.pool, account_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("customer account {}", account_id)))?;
    }
    if let Some(product_id) = patch.product_id {
        products::get_by_id(&state.pool, product_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("product {}", product_id)))?;
    }
    let row = orders::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("order {}", id)))?;
    Ok(response::ok(row))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !orders::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("order {}", id)));
    }
    Ok(response::no_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::unreachable_pool;
    use serde_json::json;

    // The id lookup runs before validation, so a missing row beats a bad body.
    #[tokio::test]
    async fn update_looks_up_row_before_validating_body() {
        let state = AppState {
            pool: unreachable_pool(),
        };
        let result = update(State(state), Path(999), Json(json!({"account_id": "x"}))).await;
        match result {
            Err(AppError::Db(_)) => {}
            Err(other) => panic!("expected the id lookup to run first, got {:?}", other),
            Ok(_) => panic!("expected an error"),
        }
    }
}
