//! Entry points for decoding wire-format payloads into typed resources.
//!
//! Decoding either yields a fully populated record or a typed [`Error`];
//! a failed decode never yields a partially populated record.

use serde::de::DeserializeOwned;
use serde_json::error::Category;
use tracing::debug;

use crate::{Error, Result};

/// Decodes a resource from a JSON payload.
pub fn from_str<T: DeserializeOwned>(json: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let resource = serde_path_to_error::deserialize(&mut deserializer).map_err(classify)?;
    deserializer.end()?;
    Ok(resource)
}

/// Decodes a resource from an already-parsed JSON value.
pub fn from_value<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    serde_path_to_error::deserialize(value).map_err(classify)
}

fn classify(err: serde_path_to_error::Error<serde_json::Error>) -> Error {
    let path = err.path().to_string();
    let source = err.into_inner();
    if source.classify() != Category::Data {
        return Error::Json(source);
    }

    // serde reports an absent field against its containing object, and
    // flattens token failures raised inside nested deserializers into
    // text; recover the field and token names from the message.
    let message = source.to_string();
    let error = if let Some(token) = backticked(&message, "unknown variant `")
        .or_else(|| backticked(&message, "unrecognized enumeration token `"))
    {
        Error::UnrecognizedToken {
            token: token.to_owned(),
        }
    } else if let Some(field) = backticked(&message, "missing field `") {
        let field = match path.as_str() {
            "." => field.to_owned(),
            parent => format!("{parent}.{field}"),
        };
        Error::MissingOrInvalidField { field, source }
    } else {
        Error::MissingOrInvalidField {
            field: path,
            source,
        }
    };

    debug!("failed to decode resource: {error}");
    error
}

fn backticked<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    message.strip_prefix(prefix)?.split('`').next()
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{model::Customer, Error};

    #[test]
    fn malformed_payload() {
        let err = super::from_str::<Customer>("{not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn trailing_garbage() {
        let payload = r#"{"id": "cus_4QFJOjw2pOmAGJ", "object": "customer", "created": 1} }"#;
        let err = super::from_str::<Customer>(payload).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn nested_field_path() {
        let payload = serde_json::json!({
            "id": "sub_FSDjf0A4A12SAS",
            "object": "subscription",
            "created": 1_563_455_880,
            "customer": "cus_4QFJOjw2pOmAGJ",
            "livemode": false,
            "status": "active",
            "plan": {
                "id": "plan_FSDjyHWis0QVwl",
                "object": "plan",
                "currency": "aud",
                "created": 1_563_455_880,
                "interval": "month",
                "amount": "fifteen"
            }
        });

        let err = super::from_value::<crate::model::Subscription>(payload).unwrap_err();
        match err {
            Error::MissingOrInvalidField { field, .. } => assert_eq!("plan.amount", field),
            other => panic!("expected field error, got {other:?}"),
        }
    }

    #[test]
    fn nested_missing_field() {
        let payload = serde_json::json!({
            "id": "sub_FSDjf0A4A12SAS",
            "object": "subscription",
            "created": 1_563_455_880,
            "customer": "cus_4QFJOjw2pOmAGJ",
            "livemode": false,
            "status": "active",
            "plan": {
                "id": "plan_FSDjyHWis0QVwl",
                "object": "plan",
                "currency": "aud",
                "created": 1_563_455_880
            }
        });

        let err = super::from_value::<crate::model::Subscription>(payload).unwrap_err();
        match err {
            Error::MissingOrInvalidField { field, .. } => assert_eq!("plan.interval", field),
            other => panic!("expected field error, got {other:?}"),
        }
    }
}
