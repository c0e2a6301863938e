//! Serde bridges between [`iso_currency::Currency`] and the lowercase
//! ISO 4217 codes the API uses on the wire.

pub use iso_currency::Currency;

pub(crate) mod code {
    use iso_currency::Currency;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::Error;

    pub fn serialize<S: Serializer>(currency: &Currency, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&currency.code().to_lowercase())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Currency, D::Error> {
        let token = String::deserialize(deserializer)?;
        Currency::from_code(&token.to_uppercase())
            .ok_or_else(|| de::Error::custom(Error::UnrecognizedToken { token }))
    }
}

pub(crate) mod code_option {
    use iso_currency::Currency;
    use serde::{de, Deserialize, Deserializer, Serializer};

    use crate::Error;

    pub fn serialize<S: Serializer>(
        currency: &Option<Currency>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match currency {
            Some(currency) => serializer.serialize_str(&currency.code().to_lowercase()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Currency>, D::Error> {
        let token = Option::<String>::deserialize(deserializer)?;
        token
            .map(|token| {
                Currency::from_code(&token.to_uppercase())
                    .ok_or_else(|| de::Error::custom(Error::UnrecognizedToken { token }))
            })
            .transpose()
    }
}
