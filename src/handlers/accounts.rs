use super::body_to_map;
use crate::error::AppError;
use crate::repo::{accounts, customers};
use crate::response;
use crate::state::AppState;
use crate::validation::account_payload;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = accounts::list_all(&state.pool).await?;
    Ok(response::ok_many(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let payload = account_payload(&body).map_err(AppError::Validation)?;
    customers::get_by_id(&state.pool, payload.customer_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", payload.customer_id)))?;
    let row = accounts::insert(&state.pool, &payload).await?;
    Ok(response::created(row))
}

/// The id lookup runs before body validation: a missing row is 404 even when
/// the body is also invalid.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    accounts::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer account {}", id)))?;
    let body = body_to_map(body)?;
    let payload = account_payload(&body).map_err(AppError::Validation)?;
    let row = accounts::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer account {}", id)))?;
    Ok(response::ok(row))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !accounts::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("customer account {}", id)));
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
        let result = update(State(state), Path(999), Json(json!({"customer_id": "x"}))).await;
        match result {
            Err(AppError::Db(_)) => {}
            Err(other) => panic!("expected the id lookup to run first, got {:?}", other),
            Ok(_) => panic!("expected an error"),
        }
    }
}
