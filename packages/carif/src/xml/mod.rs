//! XML utilities for navigating `roxmltree` DOM trees.

mod utils;

pub use utils::*;
