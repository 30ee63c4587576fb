use crate::error::AppError;
use crate::models::CustomerAccount;
use crate::validation::AccountPayload;
use sqlx::PgPool;

const COLUMNS: &str = "account_id, customer_id, name, email, password";

pub async fn list_all(pool: &PgPool) -> Result<Vec<CustomerAccount>, AppError> {
    tracing::debug!("list customer accounts");
    let rows = sqlx::query_as::<_, CustomerAccount>(&format!(
        "SELECT {} FROM customer_accounts",
        COLUMNS
    ))
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

pub async fn get_by_id(pool: &PgPool, id: i32) -> Result<Option<CustomerAccount>, AppError> {
    tracing::debug!(id, "get customer account");
    let row = sqlx::query_as::<_, CustomerAccount>(&format!(
        "SELECT {} FROM customer_accounts WHERE account_id = $1",
        COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn insert(pool: &PgPool, payload: &AccountPayload) -> Result<CustomerAccount, AppError> {
    tracing::debug!(customer_id = payload.customer_id, "insert customer account");
    let row = sqlx::query_as::<_, CustomerAccount>(&format!(
        "INSERT INTO customer_accounts (customer_id, name, email, password) \
         VALUES ($1, $2, $3, $4) RETURNING {}",
        COLUMNS
    ))
    .bind(payload.customer_id)
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.password)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// `customer_id` is not updatable: an account stays with its customer.
pub async fn update(
    pool: &PgPool,
    id: i32,
    payload: &AccountPayload,
) -> Result<Option<CustomerAccount>, AppError> {
    tracing::debug!(id, "update customer account");
    let row = sqlx::query_as::<_, CustomerAccount>(&format!(
        "UPDATE customer_accounts SET name = $2, email = $3, password = $4 \
         WHERE account_id = $1 RETURNING {}",
        COLUMNS
    ))
    .bind(id)
    .bind(&payload.name)
    .bind(&payload.email)
    .bind(&payload.password)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
    tracing::debug!(id, "delete customer account");
    let result = sqlx::query("DELETE FROM customer_accounts WHERE account_id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}
