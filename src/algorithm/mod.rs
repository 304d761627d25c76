//! Comparison-based sorting and searching over slices.
//!
//! Every function takes its ordering as a comparator, see [`compare`] for the contract and some
//! ready-made comparators. Slices are sorted in place.
//!
//! | Function | Time | Extra Space | Stable |
//! |-|-|-|-|
//! | [`bubble_sort`] | `O(n^2)`, `O(n)` when sorted | `O(1)` | Yes |
//! | [`selection_sort`] | `O(n^2)` | `O(1)` | No |
//! | [`insertion_sort`] | `O(n^2)`, `O(n)` when sorted | `O(1)` | Yes |
//! | [`shell_sort`] | `O(n^1.5)` | `O(1)` | No |
//! | [`quick_sort`] | `O(n log n)` average | `O(log n)` | No |
//! | [`merge_sort`] | `O(n log n)` | `O(n)` | Yes |
//! | [`binary_search`] | `O(log n)` | `O(1)` | - |

mod advanced;
mod basic;
pub mod compare;
mod search;
mod tests;

pub use advanced::*;
pub use basic::*;
pub use search::*;
