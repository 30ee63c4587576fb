//! Database bootstrap: ensure the database exists, open the pool, apply DDL.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Idempotent schema for the four tables. Foreign keys are ON DELETE RESTRICT:
/// deleting a row that is still referenced fails (surfaced as HTTP 409).
const SCHEMA_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS customers (
        id SERIAL PRIMARY KEY,
        name VARCHAR(100) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS customer_accounts (
        account_id SERIAL PRIMARY KEY,
        customer_id INTEGER NOT NULL REFERENCES customers(id) ON DELETE RESTRICT,
        name VARCHAR(100) NOT NULL,
        email VARCHAR(50) NOT NULL,
        password VARCHAR(100) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS products (
        product_id SERIAL PRIMARY KEY,
        product_name VARCHAR(100) NOT NULL,
        product_brand VARCHAR(50) NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS orders (
        order_id SERIAL PRIMARY KEY,
        account_id INTEGER NOT NULL REFERENCES customer_accounts(account_id) ON DELETE RESTRICT,
        product_id INTEGER NOT NULL REFERENCES products(product_id) ON DELETE RESTRICT,
        order_date TIMESTAMPTZ NOT NULL,
        expected_delivery TIMESTAMPTZ
    )
    "#,
];

/// Open the process-wide pool.
pub async fn connect(config: &AppConfig) -> Result<PgPool, AppError> {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;
    Ok(pool)
}

/// Create the four tables if they do not exist.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    for ddl in SCHEMA_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("schema ready");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to
/// the default `postgres` database to run CREATE DATABASE. Call before
/// creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_admin_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await.map_err(AppError::Db)?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await
            .map_err(AppError::Db)?;
    if !exists.0 {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await
            .map_err(AppError::Db)?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

fn split_admin_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{}postgres", base), db_name.to_string()))
}

// Quoted identifiers escape embedded quotes by doubling them.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_db_name_from_url() {
        let (admin, db) = split_admin_url("postgres://localhost:5432/marketplace").unwrap();
        assert_eq!(admin, "postgres://localhost:5432/postgres");
        assert_eq!(db, "marketplace");
    }

    #[test]
    fn splits_db_name_with_query_params() {
        let (_, db) = split_admin_url("postgres://localhost/marketplace?sslmode=disable").unwrap();
        assert_eq!(db, "marketplace");
    }

    #[test]
    fn quotes_identifiers_by_doubling() {
        assert_eq!(quote_ident("marketplace"), "\"marketplace\"");
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
        assert_eq!(quote_ident("back\\slash"), "\"back\\slash\"");
    }
}
