use pivot_kernel::{PivotError, read_sequence};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr subscriber. Stdout stays reserved for results.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Pick the sequence from positional values or `--input`, never both.
///
/// With neither, there is no sequence at all; that is rejected rather than
/// treated as empty. An empty sequence is spelled `--input` over `[]`.
pub fn resolve_sequence(values: Vec<i64>, input: Option<&str>) -> Result<Vec<i64>, PivotError> {
    match input {
        Some(_) if !values.is_empty() => Err(PivotError::InvalidArgument(
            "pass sequence values or --input, not both".to_string(),
        )),
        Some(source) => {
            debug!(source, "reading sequence");
            read_sequence(source)
        }
        None if values.is_empty() => Err(PivotError::InvalidArgument(
            "no sequence given (pass values or --input)".to_string(),
        )),
        None => Ok(values),
    }
}

pub fn load_sequence_or_exit(values: Vec<i64>, input: Option<&str>) -> Vec<i64> {
    resolve_sequence(values, input).unwrap_or_else(|e| exit_with_error(e))
}

pub fn exit_with_error(err: PivotError) -> ! {
    debug!(error = ?err, "command failed");
    eprintln!("error: {err}");
    std::process::exit(1);
}

/// JSON for a widened sum: a number when it fits in `i64`, else a decimal
/// string.
pub fn sum_value(sum: i128) -> Value {
    i64::try_from(sum)
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(sum.to_string()))
}

pub fn print_json(payload: &Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(payload).expect("json serialization")
    );
}
