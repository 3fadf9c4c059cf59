pub mod split_before;

pub use split_before::{SplitBefore, SplitBeforeExt};
