//! Cyclic placement: move every value to its home slot in place.
//!
//! Variables:
//!   buf : &mut [i64] — caller buffer, length N
//!   i   : usize      — cursor, 0 <= i <= N
//!   t   : usize      — home(buf[i])
//!
//! Equations:
//!   buf[i] out of domain     => i' = i + 1                   (Skipped)
//!   buf[t] == buf[i], t == i => i' = i + 1                   (Placed)
//!   buf[t] == buf[i], t != i => i' = i + 1                   (Skipped, duplicate)
//!   otherwise                => swap(buf[i], buf[t]), i' = i  (Swapped)
//!
//!   Every swap fixes buf[t] = value(t) for good, so swaps <= N and the
//!   loop runs at most 2N steps.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mapping::invariant::{HomePlaced, Invariant};
use crate::mapping::{Domain, DomainBase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    OutOfDomain,
    /// The home slot already holds an equal value.
    Duplicate,
}

/// Outcome of evaluating the cursor once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Placed,
    Skipped(SkipReason),
    /// The cursor value went to `to`; the cursor must not move.
    Swapped { to: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub swaps: usize,
    pub placed: usize,
    pub out_of_domain: usize,
    /// Duplicate sightings; a surplus copy swapped back to the cursor is seen again.
    pub duplicates: usize,
}

/// Evaluates `buffer[cursor]` and performs the swap when one is due.
pub fn step(buffer: &mut [i64], cursor: usize, domain: Domain) -> Step {
    let value = buffer[cursor];
    let target = match domain.home_slot(value) {
        Ok(target) => target,
        Err(_) => return Step::Skipped(SkipReason::OutOfDomain),
    };
    if buffer[target] == value {
        if target == cursor {
            Step::Placed
        } else {
            Step::Skipped(SkipReason::Duplicate)
        }
    } else {
        buffer.swap(cursor, target);
        Step::Swapped { to: target }
    }
}

pub fn place(buffer: &mut [i64], base: DomainBase) -> PlacementReport {
    place_with(buffer, base, |_, _| {})
}

/// Places every value and calls `on_duplicate(index, value)` for each
/// value whose home slot was already taken by an equal value.
pub fn place_with<F>(buffer: &mut [i64], base: DomainBase, mut on_duplicate: F) -> PlacementReport
where
    F: FnMut(usize, i64),
{
    let domain = Domain::new(base, buffer.len());
    let mut report = PlacementReport::default();
    let mut i = 0;
    while i < buffer.len() {
        match step(buffer, i, domain) {
            Step::Swapped { .. } => report.swaps += 1,
            Step::Placed => {
                report.placed += 1;
                i += 1;
            }
            Step::Skipped(SkipReason::OutOfDomain) => {
                report.out_of_domain += 1;
                i += 1;
            }
            Step::Skipped(SkipReason::Duplicate) => {
                report.duplicates += 1;
                on_duplicate(i, buffer[i]);
                i += 1;
            }
        }
    }

    debug_assert!(report.swaps <= buffer.len());
    debug_assert!(HomePlaced(domain).check(buffer));
    debug!(
        len = buffer.len(),
        swaps = report.swaps,
        duplicates = report.duplicates,
        out_of_domain = report.out_of_domain,
        "cyclic placement finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_keeps_cursor_value_pending() {
        let mut buf = [3, 1, 2];
        let domain = Domain::one_based(3);
        assert_eq!(step(&mut buf, 0, domain), Step::Swapped { to: 2 });
        assert_eq!(buf, [2, 1, 3]);
        assert_eq!(step(&mut buf, 0, domain), Step::Swapped { to: 1 });
        assert_eq!(step(&mut buf, 0, domain), Step::Placed);
        assert_eq!(buf, [1, 2, 3]);
    }

    #[test]
    fn duplicate_is_skipped_only_away_from_home() {
        let mut buf = [2, 2];
        let domain = Domain::one_based(2);
        assert_eq!(step(&mut buf, 0, domain), Step::Skipped(SkipReason::Duplicate));
        assert_eq!(step(&mut buf, 1, domain), Step::Placed);
    }

    #[test]
    fn out_of_domain_values_stay_put() {
        let mut buf = [0, 7, -1];
        let report = place(&mut buf, DomainBase::One);
        assert_eq!(buf, [0, 7, -1]);
        assert_eq!(report.out_of_domain, 3);
        assert_eq!(report.swaps, 0);
    }

    #[test]
    fn zero_base_places_value_at_its_own_index() {
        let mut buf = [2, 0, 1];
        place(&mut buf, DomainBase::Zero);
        assert_eq!(buf, [0, 1, 2]);
    }

    #[test]
    fn empty_buffer_is_a_no_op() {
        let mut buf: [i64; 0] = [];
        assert_eq!(place(&mut buf, DomainBase::One), PlacementReport::default());
    }
}
