use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::{self, Currency};

/// A customer of the account, as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the object.
    pub id: String,
    /// The type of this resource: `customer`.
    pub object: String,
    /// Current balance stored on the customer, in the smallest currency
    /// unit. A negative value represents credit, a positive value an amount
    /// owed that will be added to the next invoice.
    pub balance: Option<i64>,
    /// Time at which the object was created, in seconds since the Unix
    /// epoch.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// The currency the customer can be charged in for recurring billing.
    #[serde(default, with = "currency::code_option")]
    pub currency: Option<Currency>,
    /// Whether the customer's most recent invoice payment failed.
    pub delinquent: Option<bool>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub livemode: Option<bool>,
    pub metadata: Option<BTreeMap<String, String>>,
    pub name: Option<String>,
}
