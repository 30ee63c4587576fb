//! Typed row structs for the four entities. Field sets are the public JSON
//! shapes; rows map 1:1 via `sqlx::FromRow`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CustomerAccount {
    pub account_id: i32,
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub product_name: String,
    pub product_brand: String,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub account_id: i32,
    pub product_id: i32,
    pub order_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn order_without_delivery_omits_the_field() {
        let order = Order {
            order_id: 1,
            account_id: 2,
            product_id: 3,
            order_date: Utc.with_ymd_and_hms(2026, 8, 29, 10, 0, 0).unwrap(),
            expected_delivery: None,
        };
        let v = serde_json::to_value(&order).unwrap();
        assert!(v.get("expected_delivery").is_none());
        assert_eq!(v["order_id"], json!(1));
    }

    #[test]
    fn product_serializes_public_field_set() {
        let product = Product {
            product_id: 7,
            product_name: "Widget".into(),
            product_brand: "Acme".into(),
        };
        let v = serde_json::to_value(&product).unwrap();
        assert_eq!(
            v,
            json!({"product_id": 7, "product_name": "Widget", "product_brand": "Acme"})
        );
    }
}
