use crate::support::{exit_with_error, load_sequence_or_exit, print_json, sum_value};
use pivot_kernel::balance_at;
use serde_json::json;
use tracing::debug;

pub fn run(index: usize, values: Vec<i64>, input: Option<String>, json_output: bool) {
    let nums = load_sequence_or_exit(values, input.as_deref());
    debug!(len = nums.len(), index, "checking balance");

    let balance = balance_at(&nums, index).unwrap_or_else(|e| exit_with_error(e));

    if json_output {
        print_json(&json!({
            "index": balance.index,
            "len": nums.len(),
            "left_sum": sum_value(balance.left_sum),
            "right_sum": sum_value(balance.right_sum),
            "balanced": balance.is_balanced(),
        }));
    } else {
        println!("pivot check --index {index}");
        println!("  Length: {}", nums.len());
        println!("  Left sum: {}", balance.left_sum);
        println!("  Right sum: {}", balance.right_sum);
        println!(
            "  Balanced: {}",
            if balance.is_balanced() { "yes" } else { "no" }
        );
    }
}
