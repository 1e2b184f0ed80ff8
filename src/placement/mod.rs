pub mod cyclic;

pub use cyclic::{place, place_with, step, PlacementReport, SkipReason, Step};
