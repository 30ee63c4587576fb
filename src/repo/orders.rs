use crate::error::AppError;
use crate::models::Order;
use crate::validation::{NewOrderPayload, OrderPatch};
use chrono::{DateTime, Utc};
use sqlx::PgPool;

const COLUMNS: &str = "order_id, account_id, product_id, order_date, expected_delivery";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Order>, AppError> {
    tracing::debug!("list orders");
    let rows = sqlx::query_as::<_, Order>(&format!("SELECT {} FROM orders", COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Option<Order>, AppError> {
    tracing::debug!(id, "get order");
    let row = sqlx::query_as::<_, Order>(&format!(
        "SELECT {} FROM orders WHERE order_id = $1",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert(
    pool: &PgPool,
    payload: &NewOrderPayload,
    order_date: DateTime<Utc>,
) -> Result<Order, AppError> {
    tracing::debug!(
        account_id = payload.account_id,
        product_id = payload.product_id,
        "insert order"
    );
    let row = sqlx::query_as::<_, Order>(&format!(
        "INSERT INTO orders (account_id, product_id, order_date, expected_delivery) \
         VALUES ($1, $2, $3, $4) RETURNING {}",
        COLUMNS
    ))
    .bind(payload.account_id)
    .bind(payload.product_id)
    .bind(order_date)
    .bind(payload.expected_delivery)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Partial update: NULL binds leave the column unchanged via COALESCE.
pub async fn update(pool: &PgPool, id: i32, patch: &OrderPatch) -> Result<Option<Order>, AppError> {
    tracing::debug!(id, "update order");
    let row = sqlx::query_as::<_, Order>(&format!(
        "UPDATE orders SET \
            account_id = COALESCE($2, account_id), \
            product_id = COALESCE($3, product_id), \
            order_date = COALESCE($4, order_date), \
            expected_delivery = COALESCE($5, expected_delivery) \
         WHERE order_id = $1 RETURNING {}",
        COLUMNS
    ))
    .bind(id)
    .bind(patch.account_id)
    .bind(patch.product_id)
    .bind(patch.order_date)
    .bind(patch.expected_delivery)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    tracing::debug!(id, "delete order");
    let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
