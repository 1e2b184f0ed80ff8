pub mod domain;
pub mod invariant;

pub use domain::{home_slot, value_at, Domain, DomainBase};
