//! Kernels module: the six search loop designs.
//!
//! Depends on `oracle` and `tally`. Does not import from `registry`.

pub mod classic;
pub mod exclusion;
pub mod leftmost;
pub mod wiki;

pub use classic::{classic_find_search, classic_search};
pub use exclusion::{new_search, new_unsigned_search};
pub use leftmost::leftmost_search;
pub use wiki::wiki_search;
