//! Response helpers: status code + plain JSON body pairs.
//! Bodies are bare entities/arrays; errors carry their own envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}
