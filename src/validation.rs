//! Structural payload validation: required fields, primitive types, and
//! non-emptiness for required strings. Purely shape checking; business rules
//! such as email format are out of scope.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Field name -> human-readable messages. Serialized verbatim as the 400 body.
#[derive(Debug, Default, Serialize)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

#[derive(Debug, Clone)]
pub struct CustomerPayload {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct AccountPayload {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct ProductPayload {
    pub product_name: String,
    pub product_brand: String,
}

#[derive(Debug, Clone)]
pub struct NewOrderPayload {
    pub account_id: i32,
    pub product_id: i32,
    pub expected_delivery: Option<DateTime<Utc>>,
}

/// Partial update for orders: only supplied fields are applied.
#[derive(Debug, Clone, Default)]
pub struct OrderPatch {
    pub account_id: Option<i32>,
    pub product_id: Option<i32>,
    pub order_date: Option<DateTime<Utc>>,
    pub expected_delivery: Option<DateTime<Utc>>,
}

pub fn customer_payload(body: &Map<String, Value>) -> Result<CustomerPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    let name = required_string(body, "name", &mut errors);
    errors.into_result(CustomerPayload {
        name: name.unwrap_or_default(),
    })
}

pub fn account_payload(body: &Map<String, Value>) -> Result<AccountPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    let customer_id = required_integer(body, "customer_id", &mut errors);
    let name = required_string(body, "name", &mut errors);
    let email = required_string(body, "email", &mut errors);
    let password = required_string(body, "password", &mut errors);
    errors.into_result(AccountPayload {
        customer_id: customer_id.unwrap_or_default(),
        name: name.unwrap_or_default(),
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
    })
}

pub fn product_payload(body: &Map<String, Value>) -> Result<ProductPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    let product_name = required_string(body, "product_name", &mut errors);
    let product_brand = required_string(body, "product_brand", &mut errors);
    errors.into_result(ProductPayload {
        product_name: product_name.unwrap_or_default(),
        product_brand: product_brand.unwrap_or_default(),
    })
}

/// `order_date` is server-assigned on create and not accepted from the client.
pub fn new_order_payload(body: &Map<String, Value>) -> Result<NewOrderPayload, FieldErrors> {
    let mut errors = FieldErrors::new();
    let account_id = required_integer(body, "account_id", &mut errors);
    let product_id = required_integer(body, "product_id", &mut errors);
    let expected_delivery = optional_timestamp(body, "expected_delivery", &mut errors);
    errors.into_result(NewOrderPayload {
        account_id: account_id.unwrap_or_default(),
        product_id: product_id.unwrap_or_default(),
        expected_delivery,
    })
}

pub fn order_patch(body: &Map<String, Value>) -> Result<OrderPatch, FieldErrors> {
    let mut errors = FieldErrors::new();
    let patch = OrderPatch {
        account_id: optional_integer(body, "account_id", &mut errors),
        product_id: optional_integer(body, "product_id", &mut errors),
        order_date: optional_timestamp(body, "order_date", &mut errors),
        expected_delivery: optional_timestamp(body, "expected_delivery", &mut errors),
    };
    errors.into_result(patch)
}

fn required_string(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, &format!("{} is required", field));
            None
        }
        Some(Value::String(s)) if s.is_empty() => {
            errors.push(field, &format!("{} must not be empty", field));
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.push(field, &format!("{} must be a string", field));
            None
        }
    }
}

fn required_integer(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<i32> {
    match body.get(field) {
        None | Some(Value::Null) => {
            errors.push(field, &format!("{} is required", field));
            None
        }
        Some(v) => integer_value(v, field, errors),
    }
}

fn optional_integer(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<i32> {
    match body.get(field) {
        None | Some(Value::Null) => None,
        Some(v) => integer_value(v, field, errors),
    }
}

fn integer_value(v: &Value, field: &str, errors: &mut FieldErrors) -> Option<i32> {
    let n = v.as_i64().and_then(|n| i32::try_from(n).ok());
    if n.is_none() {
        errors.push(field, &format!("{} must be an integer", field));
    }
    n
}

fn optional_timestamp(
    body: &Map<String, Value>,
    field: &str,
    errors: &mut FieldErrors,
) -> Option<DateTime<Utc>> {
    let v = match body.get(field) {
        None | Some(Value::Null) => return None,
        Some(v) => v,
    };
    let parsed = v
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc));
    if parsed.is_none() {
        errors.push(field, &format!("{} must be an RFC 3339 timestamp", field));
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn customer_requires_name() {
        let err = customer_payload(&obj(json!({}))).unwrap_err();
        assert_eq!(err.messages("name"), Some(&["name is required".to_string()][..]));
    }

    #[test]
    fn customer_rejects_empty_name() {
        let err = customer_payload(&obj(json!({"name": ""}))).unwrap_err();
        assert_eq!(
            err.messages("name"),
            Some(&["name must not be empty".to_string()][..])
        );
    }

    #[test]
    fn customer_rejects_non_string_name() {
        let err = customer_payload(&obj(json!({"name": 42}))).unwrap_err();
        assert_eq!(
            err.messages("name"),
            Some(&["name must be a string".to_string()][..])
        );
    }

    #[test]
    fn customer_ignores_unknown_fields() {
        let payload = customer_payload(&obj(json!({"id": 3, "name": "Ada"}))).unwrap();
        assert_eq!(payload.name, "Ada");
    }

    #[test]
    fn account_collects_all_errors() {
        let err = account_payload(&obj(json!({"customer_id": "one"}))).unwrap_err();
        assert_eq!(
            err.messages("customer_id"),
            Some(&["customer_id must be an integer".to_string()][..])
        );
        assert!(err.messages("name").is_some());
        assert!(err.messages("email").is_some());
        assert!(err.messages("password").is_some());
    }

    #[test]
    fn account_accepts_full_payload() {
        let payload = account_payload(&obj(json!({
            "customer_id": 5,
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter2"
        })))
        .unwrap();
        assert_eq!(payload.customer_id, 5);
        assert_eq!(payload.email, "ada@example.com");
    }

    #[test]
    fn product_requires_both_fields() {
        let err = product_payload(&obj(json!({"product_name": "Widget"}))).unwrap_err();
        assert!(err.messages("product_brand").is_some());
        assert!(err.messages("product_name").is_none());
    }

    #[test]
    fn new_order_requires_ids_and_parses_delivery() {
        let payload = new_order_payload(&obj(json!({
            "account_id": 1,
            "product_id": 2,
            "expected_delivery": "2026-09-01T12:00:00Z"
        })))
        .unwrap();
        assert_eq!(payload.account_id, 1);
        assert_eq!(payload.product_id, 2);
        assert!(payload.expected_delivery.is_some());
    }

    #[test]
    fn new_order_delivery_is_optional() {
        let payload =
            new_order_payload(&obj(json!({"account_id": 1, "product_id": 2}))).unwrap();
        assert!(payload.expected_delivery.is_none());
    }

    #[test]
    fn new_order_rejects_bad_timestamp() {
        let err = new_order_payload(&obj(json!({
            "account_id": 1,
            "product_id": 2,
            "expected_delivery": "tomorrow"
        })))
        .unwrap_err();
        assert_eq!(
            err.messages("expected_delivery"),
            Some(&["expected_delivery must be an RFC 3339 timestamp".to_string()][..])
        );
    }

    #[test]
    fn order_patch_allows_empty_body() {
        let patch = order_patch(&obj(json!({}))).unwrap();
        assert!(patch.account_id.is_none());
        assert!(patch.product_id.is_none());
        assert!(patch.order_date.is_none());
        assert!(patch.expected_delivery.is_none());
    }

    #[test]
    fn order_patch_takes_only_supplied_fields() {
        let patch =
            order_patch(&obj(json!({"expected_delivery": "2026-09-01T00:00:00Z"}))).unwrap();
        assert!(patch.account_id.is_none());
        assert!(patch.expected_delivery.is_some());
    }

    #[test]
    fn order_patch_type_checks_supplied_fields() {
        let err = order_patch(&obj(json!({"account_id": 1.5}))).unwrap_err();
        assert_eq!(
            err.messages("account_id"),
            Some(&["account_id must be an integer".to_string()][..])
        );
    }

    #[test]
    fn integer_out_of_i32_range_is_rejected() {
        let err = order_patch(&obj(json!({"product_id": 9_000_000_000i64}))).unwrap_err();
        assert!(err.messages("product_id").is_some());
    }

    #[test]
    fn field_errors_serialize_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.push("name", "name is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, json!({"name": ["name is required"]}));
    }
}
