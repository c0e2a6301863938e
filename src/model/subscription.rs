use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CollectionMethod, Customer, Expandable, Invoice, List, Plan, PlanInterval};

/// Where a subscription sits in its billing lifecycle.
///
/// A subscription starts `incomplete` when the initial payment attempt
/// fails and moves to `active` once the first invoice is paid; if the first
/// invoice is not paid within 23 hours it transitions to the terminal
/// `incomplete_expired`. A trialing subscription becomes `active` when the
/// trial period is over. Failed renewals move a subscription through
/// `past_due` into `canceled` or `unpaid` depending on the account's
/// retry settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Incomplete,
    IncompleteExpired,
    Trialing,
    Active,
    PastDue,
    Canceled,
    Unpaid,
}

/// Thresholds at which an invoice is sent and the subscription advanced to
/// a new billing period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionBillingThresholds {
    /// Monetary threshold that triggers the subscription to create an
    /// invoice, in the smallest currency unit.
    pub amount_gte: Option<i64>,
    /// Whether `billing_cycle_anchor` is reset to the time the threshold
    /// was last reached.
    pub reset_billing_cycle_anchor: Option<bool>,
}

/// Interval at which pending invoice items are billed, analogous to
/// invoicing the subscription at that frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPendingInvoiceInterval {
    pub interval: Option<PlanInterval>,
    /// The number of intervals between invoices. Maximum of one year (1
    /// year, 12 months, or 52 weeks).
    pub interval_count: Option<u64>,
}

/// Settings controlling how customer balances applied to invoices generated
/// by this subscription behave.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionInvoiceCustomerBalanceSettings {
    /// Whether a customer balance applied to an invoice is consumed and not
    /// credited back to the customer if the invoice is voided.
    pub consume_applied_balance_on_void: Option<bool>,
}

/// One entry of a subscription's items list, pairing a plan with a
/// quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionItem {
    /// Unique identifier for the object.
    pub id: String,
    /// The type of this resource: `subscription_item`.
    pub object: String,
    /// Time at which the object was created, in seconds since the Unix
    /// epoch.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    pub metadata: Option<BTreeMap<String, String>>,
    pub plan: Option<Plan>,
    pub quantity: Option<u64>,
    /// Identifier of the subscription this item belongs to.
    pub subscription: Option<String>,
}

/// Changes queued against a subscription that apply once its latest invoice
/// is paid, and are discarded after `expires_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionPendingUpdate {
    /// Billing cycle anchor that takes effect if the update is applied, in
    /// seconds since the Unix epoch.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub billing_cycle_anchor: Option<DateTime<Utc>>,
    /// The point after which the update is discarded and no longer applied,
    /// in seconds since the Unix epoch.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub expires_at: Option<DateTime<Utc>>,
    /// Items that will be set on the subscription if the update is applied.
    pub subscription_items: Option<Vec<SubscriptionItem>>,
    /// End of the trial the customer gets before being charged for the
    /// first time, if the update is applied.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_end: Option<DateTime<Utc>>,
    /// Whether the plan's `trial_period_days` is applied to the
    /// subscription.
    pub trial_from_plan: Option<bool>,
}

/// An active agreement to bill a customer on a recurring schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for the object.
    pub id: String,
    /// The type of this resource: `subscription`.
    pub object: String,
    /// Percentage of the subscription invoice subtotal transferred to the
    /// application owner's account. A non-negative decimal between 0 and
    /// 100 with at most two decimal places.
    pub application_fee_percent: Option<Decimal>,
    /// Determines the date of the first full invoice and, for plans with
    /// `month` or `year` intervals, the day of the month for subsequent
    /// invoices. In seconds since the Unix epoch.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub billing_cycle_anchor: Option<DateTime<Utc>>,
    pub billing_thresholds: Option<SubscriptionBillingThresholds>,
    /// Whether the subscription has been scheduled to cancel at the end of
    /// the current period.
    pub cancel_at_period_end: Option<bool>,
    /// If the subscription has been canceled, the date of that cancellation
    /// request. The subscription may still be live until the period ends.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub canceled_at: Option<DateTime<Utc>>,
    pub collection_method: Option<CollectionMethod>,
    /// Time at which the object was created, in seconds since the Unix
    /// epoch.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// End of the period the subscription has been invoiced for. A new
    /// invoice is created at the end of this period.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub current_period_end: Option<DateTime<Utc>>,
    /// Start of the period the subscription has been invoiced for.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub current_period_start: Option<DateTime<Utc>>,
    /// The customer who owns the subscription.
    pub customer: Expandable<Customer>,
    /// Number of days a customer has to pay invoices generated by this
    /// subscription. Only set for `collection_method=send_invoice`.
    pub days_until_due: Option<u32>,
    /// Identifier of the default payment method for the subscription. If
    /// unset, invoices use the customer's invoice settings default.
    pub default_payment_method: Option<String>,
    /// Identifier of the default payment source for the subscription.
    pub default_source: Option<String>,
    /// If the subscription has ended, the date it ended.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub ended_at: Option<DateTime<Utc>>,
    pub invoice_customer_balance_settings: Option<SubscriptionInvoiceCustomerBalanceSettings>,
    /// List of subscription items, each with an attached plan.
    pub items: Option<List<SubscriptionItem>>,
    /// The most recent invoice this subscription has generated.
    pub latest_invoice: Option<Expandable<Invoice>>,
    pub livemode: bool,
    pub metadata: Option<BTreeMap<String, String>>,
    /// Approximate time at which any pending invoice items will be billed
    /// according to `pending_invoice_item_interval`.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub next_pending_invoice_item_invoice: Option<DateTime<Utc>>,
    pub pending_invoice_item_interval: Option<SubscriptionPendingInvoiceInterval>,
    /// Identifier of a setup intent that collects user authentication when
    /// creating the subscription without immediate payment.
    pub pending_setup_intent: Option<String>,
    /// Pending changes that apply once `latest_invoice` has been paid.
    pub pending_update: Option<SubscriptionPendingUpdate>,
    /// The plan the customer is subscribed to. Only set if the subscription
    /// contains a single plan.
    pub plan: Option<Plan>,
    /// The quantity of the plan the customer is subscribed to.
    pub quantity: Option<u64>,
    /// Identifier of the schedule attached to the subscription.
    pub schedule: Option<String>,
    /// Date when the subscription was first created; may differ from
    /// `created` due to backdating.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub start_date: Option<DateTime<Utc>>,
    pub status: SubscriptionStatus,
    /// If the subscription has a trial, the end of that trial.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_end: Option<DateTime<Utc>>,
    /// If the subscription has a trial, the beginning of that trial.
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub trial_start: Option<DateTime<Utc>>,
}

impl Subscription {
    /// Whether the subscription currently entitles the customer to the
    /// product, including trial periods.
    pub fn is_active(&self) -> bool {
        matches!(
            self.status,
            SubscriptionStatus::Active | SubscriptionStatus::Trialing
        )
    }
}
