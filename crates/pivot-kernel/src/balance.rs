//! Balance inspection around the scan.
//!
//! Where [`crate::scan`] stops at the first pivot, these helpers report the
//! sums at an arbitrary index or collect every balancing index.

use crate::error::PivotError;
use crate::scan::Pivot;

/// Sum of a slice, widened so that 64-bit inputs cannot overflow.
pub fn total<T>(nums: &[T]) -> i128
where
    T: Copy + Into<i128>,
{
    nums.iter().map(|&v| v.into()).sum()
}

/// The sums on either side of one index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Balance {
    pub index: usize,
    pub left_sum: i128,
    pub right_sum: i128,
}

impl Balance {
    /// True when `index` is a pivot.
    pub fn is_balanced(&self) -> bool {
        self.left_sum == self.right_sum
    }

    /// `left_sum - right_sum`; zero exactly at a pivot.
    pub fn difference(&self) -> i128 {
        self.left_sum - self.right_sum
    }
}

impl From<Pivot> for Balance {
    fn from(p: Pivot) -> Self {
        Self {
            index: p.index,
            left_sum: p.left_sum,
            right_sum: p.right_sum,
        }
    }
}

/// Left and right sums around `index`.
pub fn balance_at<T>(nums: &[T], index: usize) -> Result<Balance, PivotError>
where
    T: Copy + Into<i128>,
{
    if index >= nums.len() {
        return Err(PivotError::IndexOutOfRange {
            index,
            len: nums.len(),
        });
    }
    Ok(Balance {
        index,
        left_sum: total(&nums[..index]),
        right_sum: total(&nums[index + 1..]),
    })
}

/// Every balancing index, ascending. Same single pass as the scan, but it
/// keeps going after the first match.
pub fn pivot_indices<T>(nums: &[T]) -> Vec<usize>
where
    T: Copy + Into<i128>,
{
    let total = total(nums);
    let mut left: i128 = 0;
    let mut found = Vec::new();
    for (index, &value) in nums.iter().enumerate() {
        let value: i128 = value.into();
        if left == total - left - value {
            found.push(index);
        }
        left += value;
    }
    found
}
