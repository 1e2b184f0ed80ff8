use crate::mapping::DomainBase;
use crate::partitioning::{partition_around, Regions};
use crate::placement::{place, PlacementReport};

/// Sorts a permutation of `[1, n]` in O(n) by placing every value home.
pub fn sort_by_placement(buffer: &mut [i64]) -> PlacementReport {
    place(buffer, DomainBase::One)
}

/// Orders a buffer of 0s, 1s and 2s in one pass. Values below 0 group with
/// the 0s and values above 2 with the 2s.
pub fn sort_colors(buffer: &mut [i64]) -> Regions {
    partition_around(buffer, &1)
}
