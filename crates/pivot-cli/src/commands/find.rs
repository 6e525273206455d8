use crate::support::{load_sequence_or_exit, print_json, sum_value};
use pivot_kernel::{find_pivot, find_pivot_index, pivot_indices, total};
use serde_json::json;
use tracing::debug;

pub fn run(values: Vec<i64>, input: Option<String>, all: bool, json_output: bool) {
    let nums = load_sequence_or_exit(values, input.as_deref());
    debug!(len = nums.len(), all, "scanning for pivot");

    let index = find_pivot_index(&nums);
    let all_indices = all.then(|| pivot_indices(&nums));
    debug!(index, "scan finished");

    if json_output {
        let pivot = find_pivot(&nums);
        let mut payload = json!({
            "len": nums.len(),
            "total": sum_value(total(&nums)),
            "pivot": index,
            "left_sum": pivot.map(|p| sum_value(p.left_sum)),
            "right_sum": pivot.map(|p| sum_value(p.right_sum)),
        });
        if let Some(indices) = &all_indices {
            payload["all"] = json!(indices);
        }
        print_json(&payload);
        return;
    }

    match all_indices {
        Some(indices) if indices.is_empty() => println!("{index}"),
        Some(indices) => {
            let line: Vec<String> = indices.iter().map(usize::to_string).collect();
            println!("{}", line.join(" "));
        }
        None => println!("{index}"),
    }
}
