use crate::mapping::Domain;
use crate::partitioning::Class;

/// Predicate over a buffer state checked after a primitive has run.
pub trait Invariant<T: ?Sized> {
    fn check(&self, value: &T) -> bool;
}

/// Every in-domain value present in the buffer sits at its home slot,
/// or its home slot already holds an equal value.
pub struct HomePlaced(pub Domain);

impl Invariant<[i64]> for HomePlaced {
    fn check(&self, buffer: &[i64]) -> bool {
        buffer.iter().all(|&v| match self.0.home_slot(v) {
            Ok(slot) => buffer[slot] == v,
            Err(_) => true,
        })
    }
}

/// No value carries a presence flag.
pub struct Unflagged;

impl Invariant<[i64]> for Unflagged {
    fn check(&self, buffer: &[i64]) -> bool {
        buffer.iter().all(|&v| v >= 0)
    }
}

/// Classes are non-decreasing from left to right.
pub struct ClassOrdered<F>(pub F);

impl<T, F> Invariant<[T]> for ClassOrdered<F>
where
    F: Fn(&T) -> Class,
{
    fn check(&self, buffer: &[T]) -> bool {
        buffer.windows(2).all(|w| (self.0)(&w[0]) <= (self.0)(&w[1]))
    }
}
