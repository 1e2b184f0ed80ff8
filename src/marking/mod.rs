pub mod presence;

pub use presence::{is_marked, mark, mark_with, restore, MarkReport, Marked};
