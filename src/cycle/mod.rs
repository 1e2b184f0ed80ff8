pub mod floyd;

pub use floyd::{detect, find_duplicate, try_find_duplicate, Detection, Phase};
