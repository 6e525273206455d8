//! # Pivot Kernel
//!
//! A pivot of a sequence is an index whose left-hand elements sum to the same
//! value as its right-hand elements. The kernel finds the lowest such index in
//! one left-to-right prefix-sum scan.
//!
//! The scan is pure: it never allocates, never logs, and is total over every
//! finite slice of integers up to 64 bits wide. Sums are carried in `i128`.
//!
//! ## Architecture
//!
//! ```text
//! sequence              ← Text / file / stdin → Vec<i64>
//!     │
//! scan                  ← find_pivot, find_pivot_index (sentinel -1)
//!     │
//! balance               ← Balance at an index, every balancing index
//! ```

pub mod balance;
pub mod error;
pub mod scan;
pub mod sequence;

pub use balance::{Balance, balance_at, pivot_indices, total};
pub use error::PivotError;
pub use scan::{NO_PIVOT, Pivot, find_pivot, find_pivot_index};
pub use sequence::{parse_sequence, read_sequence};
