use crate::error::AppError;
use crate::models::Product;
use crate::validation::ProductPayload;
use sqlx::PgPool;

const COLUMNS: &str = "product_id, product_name, product_brand";

pub async fn list_all(pool: &PgPool) -> Result<Vec<Product>, AppError> {
    tracing::debug!("list products");
    let rows = sqlx::query_as::<_, Product>(&format!("SELECT {} FROM products", COLUMNS))
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Option<Product>, AppError> {
    tracing::debug!(id, "get product");
    let row = sqlx::query_as::<_, Product>(&format!(
        "SELECT {} FROM products WHERE product_id = $1",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert(pool: &PgPool, payload: &ProductPayload) -> Result<Product, AppError> {
    tracing::debug!(name = %payload.product_name, "insert product");
    let row = sqlx::query_as::<_, Product>(&format!(
        "INSERT INTO products (product_name, product_brand) VALUES ($1, $2) RETURNING {}",
        COLUMNS
    ))
    .bind(&payload.product_name)
    .bind(&payload.product_brand)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

pub async fn update(
    pool: &PgPool,
    id: i32,
    payload: &ProductPayload,
) -> Result<Option<Product>, AppError> {
    tracing::debug!(id, "update product");
    let row = sqlx::query_as::<_, Product>(&format!(
        "UPDATE products SET product_name = $2, product_brand = $3 \
         WHERE product_id = $1 RETURNING {}",
        COLUMNS
    ))
    .bind(id)
    .bind(&payload.product_name)
    .bind(&payload.product_brand)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    tracing::debug!(id, "delete product");
    let result = sqlx::query("DELETE FROM products WHERE product_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
