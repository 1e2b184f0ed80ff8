//! # Index Mapping Crate
//!
//! In-place algorithms for buffers whose values lie in a bounded domain
//! `[1, n]` or `[0, n - 1]`, where a value names a slot of the same buffer.
//!
//! ## Modules
//!
//! - `mapping` – Home slot translation, domain declarations, invariants
//! - `placement` – Cyclic placement (every value swapped to its home slot)
//! - `marking` – Presence flags in the sign bit, with a restoring guard
//! - `cycle` – Tortoise and hare over the buffer as a functional graph
//! - `partitioning` – Three-way (Dutch national flag) partitioning
//! - `finders` – Missing and duplicate value searches built on the above
//!
//! ---
//!
//! ## Usage Example
//!
//! ```rust
//! use index_mapping::cycle::find_duplicate;
//! use index_mapping::mapping::DomainBase;
//! use index_mapping::placement::place;
//!
//! let mut buf = [3, 1, 5, 4, 2];
//! place(&mut buf, DomainBase::One);
//! assert_eq!(buf, [1, 2, 3, 4, 5]);
//!
//! assert_eq!(find_duplicate(&[1, 3, 4, 2, 2]), 2);
//! ```
//!
//! ---
//!
//! Every primitive borrows the buffer for one call and keeps nothing.

pub mod computation_map;
pub mod cycle;
pub mod error;
pub mod finders;
pub mod mapping;
pub mod marking;
pub mod partitioning;
pub mod placement;

pub use error::DomainError;
