use crate::mapping::DomainBase;
use crate::marking::Marked;
use crate::placement::place;

use super::misplaced;

/// The one value of `[0, n]` absent from a buffer of length `n`.
/// Leaves the buffer permuted.
pub fn missing_number(buffer: &mut [i64]) -> i64 {
    place(buffer, DomainBase::Zero);
    buffer
        .iter()
        .enumerate()
        .find(|&(i, &v)| v != i as i64)
        .map_or(buffer.len() as i64, |(i, _)| i as i64)
}

/// Same contract as [`missing_number`] without touching the buffer.
pub fn missing_number_xor(buffer: &[i64]) -> i64 {
    buffer
        .iter()
        .enumerate()
        .fold(buffer.len() as i64, |acc, (i, &v)| acc ^ i as i64 ^ v)
}

/// Values of `[1, n]` absent from the buffer, ascending. Leaves the buffer
/// permuted.
pub fn disappeared_numbers(buffer: &mut [i64]) -> Vec<i64> {
    place(buffer, DomainBase::One);
    misplaced(buffer).map(|(i, _)| i as i64 + 1).collect()
}

/// Same result as [`disappeared_numbers`]; the buffer is unchanged on return.
pub fn disappeared_numbers_preserving(buffer: &mut [i64]) -> Vec<i64> {
    let marked = Marked::new(buffer);
    let absent = marked.absent().collect();
    absent
}

/// Smallest positive value not present. Any `i64` is accepted; values
/// outside `[1, n]` cannot affect the answer. Leaves the buffer permuted.
pub fn first_missing_positive(buffer: &mut [i64]) -> i64 {
    place(buffer, DomainBase::One);
    misplaced(buffer)
        .next()
        .map_or(buffer.len() as i64 + 1, |(i, _)| i as i64 + 1)
}
