//! HTTP handlers: validate, check referenced rows exist, call the repo,
//! serialize the response.

pub mod accounts;
pub mod customers;
pub mod orders;
pub mod products;

use crate::error::AppError;
use serde_json::{Map, Value};

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

/// Pool pointing at an address nothing listens on, connected lazily: the
/// first statement a handler issues fails with a database error. Lets tests
/// observe which step of a handler runs first without a live server.
#[cfg(test)]
pub(crate) fn unreachable_pool() -> sqlx::PgPool {
    sqlx::postgres::PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy("postgres://127.0.0.1:1/marketplace")
        .unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_non_object_body() {
        assert!(body_to_map(json!([1, 2])).is_err());
        assert!(body_to_map(json!("text")).is_err());
        assert!(body_to_map(json!({"a": 1})).is_ok());
    }
}
