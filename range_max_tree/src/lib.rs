//! Static segment tree answering range-maximum queries.

mod brute_force;
mod error;
mod max_tree;
mod query_tree;
mod traits;
mod tree;

pub use brute_force::brute_force_max;
pub use error::RangeError;
pub use max_tree::{MaxQuery, RangeMaxTree};
pub use query_tree::{Query, QueryTree};
pub use traits::NegativeInfinity;
