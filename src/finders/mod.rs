//! Missing/duplicate finders composed from the placement, marking and
//! cycle primitives.
//!
//! Functions taking `&mut` either leave the buffer permuted (placement) or
//! restore it before returning (`*_preserving`, marking). Read-only finders
//! take `&[i64]`.

pub mod duplicates;
pub mod missing;
pub mod ordering;

pub use crate::cycle::find_duplicate;
pub use duplicates::{all_duplicates, all_duplicates_preserving, set_mismatch};
pub use missing::{
    disappeared_numbers, disappeared_numbers_preserving, first_missing_positive, missing_number,
    missing_number_xor,
};
pub use ordering::{sort_by_placement, sort_colors};

/// Slots whose value is not the slot's own one-based value, after placement.
pub(crate) fn misplaced(buffer: &[i64]) -> impl Iterator<Item = (usize, i64)> + '_ {
    buffer
        .iter()
        .enumerate()
        .filter(|&(i, &v)| v != i as i64 + 1)
        .map(|(i, &v)| (i, v))
}
