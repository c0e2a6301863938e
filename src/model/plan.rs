use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::currency::{self, Currency};

/// How often a plan bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanInterval {
    Day,
    Week,
    Month,
    Year,
}

/// The pricing plan a subscription charges against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier for the object.
    pub id: String,
    /// The type of this resource: `plan`.
    pub object: String,
    /// Whether the plan can currently be used for new purchases.
    pub active: Option<bool>,
    /// The amount to charge per period, in the smallest currency unit.
    pub amount: Option<i64>,
    #[serde(with = "currency::code")]
    pub currency: Currency,
    /// Time at which the object was created, in seconds since the Unix
    /// epoch.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
    /// The frequency at which a subscription on this plan is billed.
    pub interval: PlanInterval,
    /// The number of intervals between billings. For example
    /// `interval=month` and `interval_count=3` bills every 3 months.
    pub interval_count: Option<u64>,
    pub livemode: Option<bool>,
    pub metadata: Option<BTreeMap<String, String>>,
    /// A brief description of the plan, hidden from customers.
    pub nickname: Option<String>,
    /// Identifier of the product this plan belongs to.
    pub product: Option<String>,
    /// Default number of trial days granted when subscribing a customer to
    /// this plan.
    pub trial_period_days: Option<u32>,
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn monthly_plan() -> crate::Result<()> {
        let payload = r#"
        {
          "id": "plan_FSDjyHWis0QVwl",
          "object": "plan",
          "active": true,
          "amount": 1500,
          "currency": "aud",
          "created": 1563455880,
          "interval": "month",
          "interval_count": 1,
          "livemode": false,
          "nickname": "Standard",
          "product": "prod_FSDjAVG3A7ZE4y"
        }
        "#;

        let plan = crate::decode::from_str::<Plan>(payload)?;
        let expected = Plan {
            id: "plan_FSDjyHWis0QVwl".to_owned(),
            object: "plan".to_owned(),
            active: Some(true),
            amount: Some(1500),
            currency: Currency::AUD,
            created: DateTime::from_timestamp(1_563_455_880, 0).unwrap(),
            interval: PlanInterval::Month,
            interval_count: Some(1),
            livemode: Some(false),
            metadata: None,
            nickname: Some("Standard".to_owned()),
            product: Some("prod_FSDjAVG3A7ZE4y".to_owned()),
            trial_period_days: None,
        };

        assert_eq!(expected, plan);
        Ok(())
    }

    #[test]
    fn unknown_interval_token() {
        let payload = r#"
        {
          "id": "plan_FSDjyHWis0QVwl",
          "object": "plan",
          "currency": "aud",
          "created": 1563455880,
          "interval": "fortnight"
        }
        "#;

        let err = crate::decode::from_str::<Plan>(payload).unwrap_err();
        assert!(matches!(
            err,
            crate::Error::UnrecognizedToken { token } if token == "fortnight"
        ));
    }
}
