use crate::error::AppError;
use crate::models::Customer;
use crate::validation::CustomerPayload;
use sqlx::PgPool;

pub async fn list_all(pool: &PgPool) -> Result<Vec<Customer>, AppError> {
    tracing::debug!("list customers");
    let rows = sqlx::query_as::<_, Customer>("SELECT id, name FROM customers")
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Option<Customer>, AppError> {
    tracing::debug!(id, "get customer");
    let row = sqlx::query_as::<_, Customer>("SELECT id, name FROM customers WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn insert(pool: &PgPool, payload: &CustomerPayload) -> Result<Customer, AppError> {
    tracing::debug!(name = %payload.name, "insert customer");
    let row = sqlx::query_as::<_, Customer>(
        "INSERT INTO customers (name) VALUES ($1) RETURNING id, name",
    )
    .bind(&payload.name)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    payload: &CustomerPayload,
) -> Result<Option<Customer>, AppError> {
    tracing::debug!(id, "update customer");
    let row = sqlx::query_as::<_, Customer>(
        "UPDATE customers SET name = $2 WHERE id = $1 RETURNING id, name",
    )
    .bind(id)
    .bind(&payload.name)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    tracing::debug!(id, "delete customer");
    let result = sqlx::query("DELETE FROM customers WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
