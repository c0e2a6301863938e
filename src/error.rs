use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure raised while decoding a wire-format payload into a typed
/// resource. Decoding is all-or-nothing: a failed decode never yields a
/// partially populated record.
#[derive(Debug, Error)]
pub enum Error {
    /// A required field was absent, or a field (required or optional) held a
    /// JSON value incompatible with its declared type. `field` is the path
    /// of the offending field within the payload.
    #[error("missing or invalid field `{field}`")]
    MissingOrInvalidField {
        field: String,
        #[source]
        source: serde_json::Error,
    },

    /// A string token did not match any known variant of its target
    /// enumeration, whether it appeared as a plain field value or as a key
    /// of an enumeration-keyed map.
    #[error("unrecognized enumeration token `{token}`")]
    UnrecognizedToken { token: String },

    /// The payload was not well-formed JSON.
    #[error("malformed json payload")]
    Json(#[from] serde_json::Error),
}
