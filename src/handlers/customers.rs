use super::body_to_map;
use crate::error::AppError;
use crate::repo::customers;
use crate::response;
use crate::state::AppState;
use crate::validation::customer_payload;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let rows = customers::list_all(&state.pool).await?;
    Ok(response::ok_many(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let body = body_to_map(body)?;
    let payload = customer_payload(&body).map_err(AppError::Validation)?;
    let row = customers::insert(&state.pool, &payload).await?;
    Ok(response::created(row))
}

/// The id lookup runs before body validation: a missing row is 404 even when
/// the body is also invalid.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    customers::get_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    let body = body_to_map(body)?;
    let payload = customer_payload(&body).map_err(AppError::Validation)?;
    let row = customers::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("customer {}", id)))?;
    Ok(response::ok(row))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !customers::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(format!("customer {}", id)));
    }
    Ok(response::no_content())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::unreachable_pool;
    use serde_json::json;

    // Against an unreachable pool the first statement a handler issues fails
    // with a Db error. An invalid body must still surface that error: the id
    // lookup runs before validation, so a missing row beats a bad body.
    #[tokio::test]
    async fn update_looks_up_row_before_validating_body() {
        let state = AppState {
            pool: unreachable_pool(),
        };
        let result = update(State(state), Path(999), Json(json!({"name": 42}))).await;
        match result {
            Err(AppError::Db(_)) => {}
            Err(other) => panic!("expected the id lookup to run first, got {:?}", other),
            Ok(_) => panic!("expected an error"),
        }
    }
}
