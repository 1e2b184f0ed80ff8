//! Presence marking through the sign bit of the home slot.
//!
//! Variables:
//!   buf : &mut [i64] — values in [1, N] on entry, length N
//!   t   : usize      — |buf[i]| - 1
//!
//! Equations:
//!   buf[t] > 0  => buf[t] = -buf[t]        first sighting of t + 1
//!   buf[t] < 0  => repeat sighting of t + 1
//!   buf[t] == 0 => out of domain, t cannot carry a flag
//!   restore     => buf[j] = |buf[j]|       for all j
//!
//! A negative slot only ever means "seen"; magnitudes never change, so a
//! restore pass gives back the exact input. Values outside [1, N] are
//! skipped and counted; a slot holding one never reads as flagged.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::mapping::invariant::{Invariant, Unflagged};
use crate::mapping::Domain;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkReport {
    /// Distinct home slots flagged.
    pub marked: usize,
    pub repeats: usize,
    pub out_of_domain: usize,
}

pub fn mark(buffer: &mut [i64]) -> MarkReport {
    mark_with(buffer, |_, _| {})
}

/// Flags the home slot of every value and calls `on_repeat(index, value)`
/// whenever the slot was already flagged. The buffer is left dirty; callers
/// that need the original values back must call [`restore`] or use [`Marked`].
pub fn mark_with<F>(buffer: &mut [i64], mut on_repeat: F) -> MarkReport
where
    F: FnMut(usize, i64),
{
    debug_assert!(Unflagged.check(&*buffer), "presence marking needs a clean buffer");
    let domain = Domain::one_based(buffer.len());
    let mut report = MarkReport::default();
    for i in 0..buffer.len() {
        // an earlier step may have flagged this very slot
        let Some(value) = buffer[i].checked_abs() else {
            report.out_of_domain += 1;
            continue;
        };
        let Ok(target) = domain.home_slot(value) else {
            report.out_of_domain += 1;
            continue;
        };
        match buffer[target].signum() {
            1 => {
                buffer[target] = -buffer[target];
                report.marked += 1;
            }
            -1 => {
                report.repeats += 1;
                on_repeat(i, value);
            }
            _ => report.out_of_domain += 1,
        }
    }
    debug!(
        len = buffer.len(),
        marked = report.marked,
        repeats = report.repeats,
        "presence marking finished"
    );
    report
}

/// Clears every presence flag. `i64::MIN` is never a flag and stays as is.
pub fn restore(buffer: &mut [i64]) {
    for v in buffer.iter_mut() {
        if let Some(magnitude) = v.checked_abs() {
            *v = magnitude;
        }
    }
}

/// Whether `value`'s home slot carries a presence flag.
pub fn is_marked(buffer: &[i64], value: i64) -> bool {
    match Domain::one_based(buffer.len()).home_slot(value) {
        Ok(slot) => buffer[slot] < 0,
        Err(_) => false,
    }
}

/// A marked buffer that is restored when dropped.
///
/// The flags are readable for as long as the guard lives. Keeping them past
/// the guard is an explicit choice made with [`Marked::into_dirty`].
pub struct Marked<'a> {
    buffer: &'a mut [i64],
    report: MarkReport,
    restore_on_drop: bool,
}

impl<'a> Marked<'a> {
    pub fn new(buffer: &'a mut [i64]) -> Self {
        Self::with(buffer, |_, _| {})
    }

    pub fn with<F>(buffer: &'a mut [i64], on_repeat: F) -> Self
    where
        F: FnMut(usize, i64),
    {
        let report = mark_with(buffer, on_repeat);
        Self { buffer, report, restore_on_drop: true }
    }

    pub fn report(&self) -> MarkReport {
        self.report
    }

    pub fn is_present(&self, value: i64) -> bool {
        is_marked(&*self.buffer, value)
    }

    /// Domain values whose home slot was never flagged, ascending.
    pub fn absent(&self) -> impl Iterator<Item = i64> + '_ {
        self.buffer
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v > 0)
            .map(|(slot, _)| slot as i64 + 1)
    }

    /// Flagged view of the buffer.
    pub fn flags(&self) -> &[i64] {
        &*self.buffer
    }

    /// Releases the buffer without restoring it.
    pub fn into_dirty(mut self) -> &'a mut [i64] {
        self.restore_on_drop = false;
        std::mem::take(&mut self.buffer)
    }
}

impl Drop for Marked<'_> {
    fn drop(&mut self) {
        if self.restore_on_drop {
            restore(&mut *self.buffer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_magnitude_of_already_flagged_slot() {
        // slot 0 is flagged by value 1 before the cursor reaches it
        let mut buf = [2, 1];
        let report = mark(&mut buf);
        assert_eq!(buf, [-2, -1]);
        assert_eq!(report.marked, 2);
        assert_eq!(report.repeats, 0);
    }

    #[test]
    fn repeat_sightings_are_reported() {
        let mut buf = [1, 1, 3];
        let mut seen = Vec::new();
        let report = mark_with(&mut buf, |i, v| seen.push((i, v)));
        assert_eq!(seen, vec![(1, 1)]);
        assert_eq!(report.repeats, 1);
        assert!(is_marked(&buf, 1));
        assert!(!is_marked(&buf, 2));
        assert!(is_marked(&buf, 3));
    }

    #[test]
    fn guard_restores_on_drop() {
        let mut buf = [3, 3, 1];
        {
            let marked = Marked::new(&mut buf);
            assert_eq!(marked.absent().collect::<Vec<_>>(), vec![2]);
            assert!(marked.flags().iter().any(|&v| v < 0));
        }
        assert_eq!(buf, [3, 3, 1]);
    }

    #[test]
    fn dirty_release_keeps_flags() {
        let mut buf = [2, 2];
        let dirty = Marked::new(&mut buf).into_dirty();
        assert_eq!(dirty, &[2, -2]);
        restore(dirty);
        assert_eq!(buf, [2, 2]);
    }

    #[test]
    fn zero_at_home_slot_is_not_a_repeat() {
        let mut buf = [0, 1];
        let mut seen = Vec::new();
        let report = mark_with(&mut buf, |i, v| seen.push((i, v)));
        assert_eq!(report, MarkReport { marked: 0, repeats: 0, out_of_domain: 2 });
        assert!(seen.is_empty());
        assert_eq!(buf, [0, 1]);
    }

    #[test]
    fn restore_leaves_min_value_alone() {
        let mut buf = [i64::MIN, -2, 3];
        restore(&mut buf);
        assert_eq!(buf, [i64::MIN, 2, 3]);
    }

    #[test]
    fn out_of_domain_values_are_counted_not_marked() {
        let mut buf = [5, 1];
        let report = mark(&mut buf);
        assert_eq!(report.out_of_domain, 1);
        assert_eq!(buf, [-5, 1]);
    }
}
