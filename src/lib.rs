//! Typed data models for the Stripe API wire format.
//!
//! Each resource is an immutable value snapshot decoded from the JSON the
//! API returns; [`decode::from_str`] and [`decode::from_value`] convert a
//! payload into a typed record or a typed [`Error`]. Issuing requests and
//! feeding responses into the decoders is the calling layer's concern.

pub mod decode;
pub mod error;
pub mod model;

pub use crate::{
    error::{Error, Result},
    model::*,
};
