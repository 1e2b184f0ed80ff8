//! Three-way partitioning (Dutch national flag).
//!
//! Variables:
//!   buf       : &mut [T] — length N
//!   lo, mi, hi: usize    — cursors, 0 <= lo <= mi <= hi <= N
//!
//! Regions:
//!   [0, lo)   Low
//!   [lo, mi)  Mid
//!   [mi, hi)  unexamined
//!   [hi, N)   High
//!
//! Equations:
//!   class(buf[mi]) = Low  => swap(lo, mi), lo' = lo + 1, mi' = mi + 1
//!   class(buf[mi]) = Mid  => mi' = mi + 1
//!   class(buf[mi]) = High => hi' = hi - 1, swap(mi, hi')   (mi stays)
//!
//!   hi - mi shrinks by one every step, so the loop runs exactly N times.

use std::cmp::Ordering;
use std::ops::Range;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Class {
    Low,
    Mid,
    High,
}

impl Class {
    pub fn around<T: Ord>(value: &T, pivot: &T) -> Self {
        match value.cmp(pivot) {
            Ordering::Less => Class::Low,
            Ordering::Equal => Class::Mid,
            Ordering::Greater => Class::High,
        }
    }
}

impl TryFrom<i64> for Class {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Class::Low),
            1 => Ok(Class::Mid),
            2 => Ok(Class::High),
            _ => Err(DomainError::OutOfDomain { value, base: 0, len: 3 }),
        }
    }
}

/// Cursor movement chosen for one examined element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    GrowLow,
    GrowMid,
    /// The element swapped in from the high end is unexamined.
    ShrinkHigh,
}

/// Boundaries after partitioning: `[0, low)`, `[low, high)`, `[high, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Regions {
    pub low: usize,
    pub high: usize,
    pub len: usize,
}

impl Regions {
    pub fn low_range(&self) -> Range<usize> {
        0..self.low
    }

    pub fn mid_range(&self) -> Range<usize> {
        self.low..self.high
    }

    pub fn high_range(&self) -> Range<usize> {
        self.high..self.len
    }
}

struct Cursors {
    low: usize,
    mid: usize,
    high: usize,
    swaps: usize,
}

impl Cursors {
    fn new(len: usize) -> Self {
        Self { low: 0, mid: 0, high: len, swaps: 0 }
    }

    fn apply<T>(&mut self, buffer: &mut [T], class: Class) -> Move {
        match class {
            Class::Low => {
                buffer.swap(self.low, self.mid);
                self.low += 1;
                self.mid += 1;
                Move::GrowLow
            }
            Class::Mid => {
                self.mid += 1;
                Move::GrowMid
            }
            Class::High => {
                self.high -= 1;
                buffer.swap(self.mid, self.high);
                Move::ShrinkHigh
            }
        }
    }

    fn step<T>(&mut self, buffer: &mut [T], class: Class) {
        if self.apply(buffer, class) != Move::GrowMid {
            self.swaps += 1;
        }
    }

    fn finish(self, len: usize) -> Regions {
        debug!(
            len,
            low = self.low,
            high = self.high,
            swaps = self.swaps,
            "three-way partition finished"
        );
        Regions { low: self.low, high: self.high, len }
    }
}

pub fn partition_by<T, F>(buffer: &mut [T], mut classify: F) -> Regions
where
    F: FnMut(&T) -> Class,
{
    let mut cursors = Cursors::new(buffer.len());
    while cursors.mid < cursors.high {
        let class = classify(&buffer[cursors.mid]);
        cursors.step(buffer, class);
    }
    cursors.finish(buffer.len())
}

/// Like [`partition_by`] but stops at the first classifier error. The
/// buffer is then a permutation of the input with no ordering guarantee.
pub fn try_partition_by<T, E, F>(buffer: &mut [T], mut classify: F) -> Result<Regions, E>
where
    F: FnMut(&T) -> Result<Class, E>,
{
    let mut cursors = Cursors::new(buffer.len());
    while cursors.mid < cursors.high {
        let class = classify(&buffer[cursors.mid])?;
        cursors.step(buffer, class);
    }
    Ok(cursors.finish(buffer.len()))
}

/// Partitions into `< pivot`, `== pivot`, `> pivot`.
pub fn partition_around<T: Ord>(buffer: &mut [T], pivot: &T) -> Regions {
    partition_by(buffer, |v| Class::around(v, pivot))
}
