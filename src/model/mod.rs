pub mod balance;
pub mod currency;
pub mod customer;
pub mod expandable;
pub mod invoice;
pub mod list;
pub mod plan;
pub mod subscription;

pub use self::{
    balance::*, currency::Currency, customer::*, expandable::*, invoice::*, list::*, plan::*,
    subscription::*,
};
