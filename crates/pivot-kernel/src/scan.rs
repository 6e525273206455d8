//! The pivot scan.
//!
//! One left-to-right pass over the sequence. At index `i` the right-hand sum
//! is `total - left - nums[i]`, so only the running left sum is carried.
//! The first balancing index wins.

use crate::balance::total;

/// Sentinel returned by [`find_pivot_index`] when no index balances.
pub const NO_PIVOT: i64 = -1;

/// A balancing index together with the equal sums on either side of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Pivot {
    pub index: usize,
    pub left_sum: i128,
    pub right_sum: i128,
}

/// Find the lowest index whose left and right sums are equal.
///
/// Returns `None` for the empty slice and for sequences with no balancing
/// index. A one-element slice always pivots at 0, since both sides are empty.
pub fn find_pivot<T>(nums: &[T]) -> Option<Pivot>
where
    T: Copy + Into<i128>,
{
    if nums.is_empty() {
        return None;
    }

    let total = total(nums);
    let mut left: i128 = 0;
    for (index, &value) in nums.iter().enumerate() {
        let value: i128 = value.into();
        let right = total - left - value;
        if left == right {
            return Some(Pivot {
                index,
                left_sum: left,
                right_sum: right,
            });
        }
        left += value;
    }
    None
}

/// Sentinel form of [`find_pivot`]: the pivot index, or [`NO_PIVOT`].
pub fn find_pivot_index<T>(nums: &[T]) -> i64
where
    T: Copy + Into<i128>,
{
    // Slice lengths never exceed isize::MAX, so the index fits in i64.
    find_pivot(nums).map_or(NO_PIVOT, |pivot| pivot.index as i64)
}
