use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    currency::{self, Currency},
    Customer, Expandable,
};

/// How an invoice is collected: charged to the default payment source, or
/// emailed to the customer with payment instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMethod {
    ChargeAutomatically,
    SendInvoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Draft,
    Open,
    Paid,
    Uncollectible,
    Void,
}

/// An invoice generated for a customer, usually by a subscription cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for the object.
    pub id: String,
    /// The type of this resource: `invoice`.
    pub object: String,
    /// Final amount due, in the smallest currency unit. Zero if the starting
    /// customer balance covered the invoice.
    pub amount_due: Option<i64>,
    /// Amount paid so far, in the smallest currency unit.
    pub amount_paid: Option<i64>,
    /// `amount_due` minus `amount_paid`, in the smallest currency unit.
    pub amount_remaining: Option<i64>,
    /// Number of payment attempts made, counted from the first attempt after
    /// the invoice was finalized.
    pub attempt_count: Option<u64>,
    /// Whether an attempt has been made to pay the invoice.
    pub attempted: Option<bool>,
    pub collection_method: Option<CollectionMethod>,
    /// Time at which the object was created, in seconds since the Unix
    /// epoch.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    #[serde(with = "currency::code")]
    pub currency: Currency,
    /// The customer this invoice belongs to.
    pub customer: Option<Expandable<Customer>>,
    pub livemode: Option<bool>,
    /// A unique, identifying string that appears on emails sent to the
    /// customer for this invoice.
    pub number: Option<String>,
    /// Whether payment was successfully collected, either by charging or
    /// by being marked paid out of band.
    pub paid: Option<bool>,
    /// End of the usage period the invoice covers, in seconds since the
    /// Unix epoch.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub period_end: Option<DateTime<Utc>>,
    /// Start of the usage period the invoice covers, in seconds since the
    /// Unix epoch.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub period_start: Option<DateTime<Utc>>,
    pub status: Option<InvoiceStatus>,
    /// Identifier of the subscription this invoice was prepared for, if any.
    pub subscription: Option<String>,
    /// Total of all line items before discounts, in the smallest currency
    /// unit.
    pub subtotal: Option<i64>,
    /// Total after discounts and taxes, in the smallest currency unit.
    pub total: Option<i64>,
}
