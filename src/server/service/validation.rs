use derive_more::{Display, Error};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use crate::server::model::order::{NewOrder, RESERVED_FIELDS};

const REQUIRED_FIELDS: [&str; 7] = ["name", "phone", "city", "address", "items", "total", "payment"];
const TEXT_FIELDS: [&str; 5] = ["name", "phone", "city", "address", "payment"];

/// Optional country or trunk prefix followed by a 10 digit subscriber number.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+92|92|0)?[0-9]{10}$").expect("phone pattern compiles"));

#[derive(Debug, PartialEq, Display, Error)]
pub(crate) enum ValidationError {
    #[display("Missing required fields: {}", fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },
    #[display("Order must contain at least one item")]
    NoItems,
    #[display("Fields must be text: {}", fields.join(", "))]
    NotText { fields: Vec<&'static str> },
    #[display("Invalid phone number format")]
    InvalidPhone,
}

/// Check a raw submission and split it into a `NewOrder`.
pub(crate) fn validate(mut data: Map<String, Value>) -> Result<NewOrder, ValidationError> {
    let missing = REQUIRED_FIELDS
        .into_iter()
        .filter(|field| !data.get(*field).is_some_and(is_truthy))
        .collect::<Vec<_>>();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields { fields: missing });
    }

    if !matches!(data.get("items"), Some(Value::Array(items)) if !items.is_empty()) {
        return Err(ValidationError::NoItems);
    }

    let not_text = TEXT_FIELDS
        .into_iter()
        .filter(|field| !matches!(data.get(*field), Some(Value::String(_))))
        .collect::<Vec<_>>();
    if !not_text.is_empty() {
        return Err(ValidationError::NotText { fields: not_text });
    }

    let mut text = |field: &str| match data.remove(field) {
        Some(Value::String(s)) => s,
        _ => String::new(), // checked above
    };
    let (name, phone, city, address, payment) = (
        text("name"),
        text("phone"),
        text("city"),
        text("address"),
        text("payment"),
    );
    if !is_valid_phone(&phone) {
        return Err(ValidationError::InvalidPhone);
    }

    let items = match data.remove("items") {
        Some(Value::Array(items)) => items,
        _ => vec![],
    };
    let total = data.remove("total").unwrap_or(Value::Null);
    for reserved in RESERVED_FIELDS {
        data.remove(reserved);
    }

    Ok(NewOrder {
        name,
        phone,
        city,
        address,
        items,
        total,
        payment,
        extra: data,
    })
}

/// Whitespace and hyphens are ignored, so `0300-123 4567` is accepted.
pub(crate) fn is_valid_phone(phone: &str) -> bool {
    let compact = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>();
    PHONE_PATTERN.is_match(&compact)
}

/// JSON truthiness: null, false, 0 and "" are falsy; arrays and objects never are.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission() -> Map<String, Value> {
        match json!({
            "name": "Ali",
            "phone": "03001234567",
            "city": "Lahore",
            "address": "St 1",
            "items": [{"name": "Pizza", "qty": 1}],
            "total": 500,
            "payment": "cash",
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn accepts_complete_submission() {
        let order = validate(submission()).unwrap();
        assert_eq!(order.name, "Ali");
        assert_eq!(order.phone, "03001234567");
        assert_eq!(order.items, vec![json!({"name": "Pizza", "qty": 1})]);
        assert_eq!(order.total, json!(500));
        assert!(order.extra.is_empty());
    }

    #[test]
    fn empty_submission_names_every_field() {
        let err = validate(Map::new()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required fields: name, phone, city, address, items, total, payment"
        );
    }

    #[test]
    fn falsy_values_count_as_missing() {
        let mut data = submission();
        data.insert("name".into(), json!(""));
        data.insert("total".into(), json!(0));
        data.insert("payment".into(), Value::Null);
        assert_eq!(
            validate(data).unwrap_err(),
            ValidationError::MissingFields { fields: vec!["name", "total", "payment"] }
        );
    }

    #[test]
    fn items_must_be_non_empty_list() {
        let mut data = submission();
        data.insert("items".into(), json!([]));
        assert_eq!(validate(data).unwrap_err(), ValidationError::NoItems);

        let mut data = submission();
        data.insert("items".into(), json!("pizza"));
        assert_eq!(validate(data).unwrap_err().to_string(), "Order must contain at least one item");
    }

    #[test]
    fn text_fields_must_be_strings() {
        let mut data = submission();
        data.insert("phone".into(), json!(3001234567_u64));
        data.insert("city".into(), json!(["Lahore"]));
        assert_eq!(validate(data).unwrap_err().to_string(), "Fields must be text: phone, city");
    }

    #[test]
    fn phone_formats() {
        for ok in ["03001234567", "+923001234567", "923001234567", "3001234567", "0300-123 4567"] {
            assert!(is_valid_phone(ok), "{ok}");
        }
        for bad in ["12345", "abcdefghij", "+9230012345678", "0300123456a"] {
            assert!(!is_valid_phone(bad), "{bad}");
        }

        let mut data = submission();
        data.insert("phone".into(), json!("12345"));
        assert_eq!(validate(data).unwrap_err().to_string(), "Invalid phone number format");
    }

    #[test]
    fn total_is_not_format_checked() {
        let mut data = submission();
        data.insert("total".into(), json!("-12 rupees"));
        assert_eq!(validate(data).unwrap().total, json!("-12 rupees"));
    }

    #[test]
    fn extra_fields_kept_reserved_dropped() {
        let mut data = submission();
        data.insert("notes".into(), json!("ring twice"));
        data.insert("id".into(), json!("ORD-forged"));
        data.insert("status".into(), json!("delivered"));
        let order = validate(data).unwrap();
        assert_eq!(order.extra.get("notes"), Some(&json!("ring twice")));
        assert!(!order.extra.contains_key("id"));
        assert!(!order.extra.contains_key("status"));
    }
}
