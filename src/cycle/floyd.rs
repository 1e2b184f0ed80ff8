//! Duplicate detection by tortoise and hare over the implicit graph
//! `i -> buf[i]`.
//!
//! Variables:
//!   buf  : &[i64] — length N + 1, values in [1, N], read only
//!   s, f : usize  — slow and fast node
//!
//! Equations:
//!   Race:      s' = buf[s],  f' = buf[buf[f]]   until s == f
//!   Entrance:  s  = buf[0];  s' = buf[s], f' = buf[f]  until s == f
//!   Found:     s is the cycle entrance, the only node with in-degree >= 2
//!
//! Node 0 has in-degree 0 (no value is 0), so the walk from 0 always has a
//! tail and the entrance is a repeated value.

use tracing::debug;

use crate::error::DomainError;
use crate::mapping::Domain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Race { slow: usize, fast: usize },
    Entrance { slow: usize, fast: usize },
    Found(i64),
}

impl Phase {
    pub fn start(buffer: &[i64]) -> Self {
        let head = successor(buffer, 0);
        Phase::Race { slow: head, fast: head }
    }

    pub fn advance(self, buffer: &[i64]) -> Self {
        match self {
            Phase::Race { slow, fast } => {
                let slow = successor(buffer, slow);
                let fast = successor(buffer, successor(buffer, fast));
                if slow == fast {
                    Phase::Entrance { slow: successor(buffer, 0), fast }
                } else {
                    Phase::Race { slow, fast }
                }
            }
            Phase::Entrance { slow, fast } if slow == fast => Phase::Found(slow as i64),
            Phase::Entrance { slow, fast } => Phase::Entrance {
                slow: successor(buffer, slow),
                fast: successor(buffer, fast),
            },
            found @ Phase::Found(_) => found,
        }
    }
}

#[inline]
fn successor(buffer: &[i64], node: usize) -> usize {
    buffer[node] as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub duplicate: i64,
    /// Phase transitions taken, bounded by `2 * len + 1`.
    pub steps: usize,
}

/// Runs both phases and returns the cycle entrance.
///
/// The buffer must have length `n + 1` with every value in `[1, n]`. Those
/// conditions are not checked; a value outside `[0, len)` panics on indexing
/// and more than one repeated value yields one of them.
pub fn detect(buffer: &[i64]) -> Detection {
    debug_assert!(buffer.len() >= 2, "duplicate detection needs at least two values");
    let mut phase = Phase::start(buffer);
    let mut steps = 0;
    loop {
        if let Phase::Found(duplicate) = phase {
            debug!(len = buffer.len(), steps, duplicate, "cycle entrance found");
            return Detection { duplicate, steps };
        }
        phase = phase.advance(buffer);
        steps += 1;
    }
}

pub fn find_duplicate(buffer: &[i64]) -> i64 {
    detect(buffer).duplicate
}

/// Validates length and value range before running [`find_duplicate`].
pub fn try_find_duplicate(buffer: &[i64]) -> Result<i64, DomainError> {
    if buffer.len() < 2 {
        return Err(DomainError::LengthTooShort { len: buffer.len(), min: 2 });
    }
    let domain = Domain::one_based(buffer.len() - 1);
    for &value in buffer {
        domain.home_slot(value)?;
    }
    Ok(find_duplicate(buffer))
}
