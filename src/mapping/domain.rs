//! Value <-> slot translation for bounded domains.
//!
//! Variables:
//!   b : i64    — domain base, 0 or 1
//!   N : usize  — buffer length
//!
//! Equations:
//!   home(v)   = v - b          defined iff 0 <= v - b < N
//!   value(s)  = s + b
//!   domain    = [b, b + N - 1]

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainBase {
    Zero,
    One,
}

impl DomainBase {
    pub fn offset(self) -> i64 {
        match self {
            DomainBase::Zero => 0,
            DomainBase::One => 1,
        }
    }
}

/// Declared value range of a buffer: `[base, base + len - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub base: DomainBase,
    pub len: usize,
}

impl Domain {
    pub fn new(base: DomainBase, len: usize) -> Self {
        Self { base, len }
    }

    /// Domain `[1, n]` over a buffer of length `n`.
    pub fn one_based(len: usize) -> Self {
        Self::new(DomainBase::One, len)
    }

    /// Domain `[0, n-1]` over a buffer of length `n`.
    pub fn zero_based(len: usize) -> Self {
        Self::new(DomainBase::Zero, len)
    }

    pub fn home_slot(&self, value: i64) -> Result<usize, DomainError> {
        home_slot(value, self.base, self.len)
    }

    pub fn value_at(&self, slot: usize) -> i64 {
        value_at(slot, self.base)
    }

    pub fn contains(&self, value: i64) -> bool {
        self.home_slot(value).is_ok()
    }

    /// Largest value of the domain, `None` for an empty buffer.
    pub fn max_value(&self) -> Option<i64> {
        self.len.checked_sub(1).map(|last| self.value_at(last))
    }
}

pub fn home_slot(value: i64, base: DomainBase, len: usize) -> Result<usize, DomainError> {
    let out_of_domain = || DomainError::OutOfDomain { value, base: base.offset(), len };
    let slot = value.checked_sub(base.offset()).ok_or_else(out_of_domain)?;
    match usize::try_from(slot) {
        Ok(slot) if slot < len => Ok(slot),
        _ => Err(out_of_domain()),
    }
}

pub fn value_at(slot: usize, base: DomainBase) -> i64 {
    slot as i64 + base.offset()
}
