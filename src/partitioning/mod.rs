pub mod dutch_flag;

pub use dutch_flag::{partition_around, partition_by, try_partition_by, Class, Move, Regions};
