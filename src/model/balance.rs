use std::{collections::BTreeMap, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize};

use super::currency::{self, Currency};
use crate::{Error, Result};

/// The kind of payment source a balance amount originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    BankAccount,
    Card,
    Fpx,
}

impl FromStr for SourceType {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self> {
        // The enum's serde renames are the single source of truth for the
        // wire tokens.
        Self::deserialize(serde_json::Value::from(token)).map_err(|_| Error::UnrecognizedToken {
            token: token.to_owned(),
        })
    }
}

/// Re-keys a raw string-to-amount map by the source type enumeration.
/// Every key must parse as a recognized token; an unrecognized token fails
/// the decode rather than dropping the entry.
pub fn source_types_from_raw(raw: BTreeMap<String, i64>) -> Result<BTreeMap<SourceType, i64>> {
    raw.into_iter()
        .map(|(token, amount)| Ok((token.parse()?, amount)))
        .collect()
}

fn source_types<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<BTreeMap<SourceType, i64>, D::Error> {
    let raw = BTreeMap::<String, i64>::deserialize(deserializer)?;
    source_types_from_raw(raw).map_err(de::Error::custom)
}

/// Funds held in a single currency within one bucket of the balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransfer {
    /// The amount of funds, in the smallest currency unit.
    pub amount: i64,
    #[serde(with = "currency::code")]
    pub currency: Currency,
    /// Breakdown of the amount by the kind of payment source it came from.
    #[serde(default, deserialize_with = "source_types")]
    pub source_types: BTreeMap<SourceType, i64>,
}

/// The account's current funds, as returned by the balance endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// The type of this resource: `balance`.
    pub object: String,
    /// Funds available to be paid out or transferred, broken down by
    /// currency.
    pub available: Vec<BalanceTransfer>,
    /// Funds held back from connected accounts, broken down by currency.
    pub connect_reserved: Option<Vec<BalanceTransfer>>,
    pub livemode: bool,
    /// Funds not yet available, broken down by currency.
    pub pending: Vec<BalanceTransfer>,
}
