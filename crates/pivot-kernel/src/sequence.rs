//! Textual sequence input.
//!
//! Two shapes are accepted: a JSON array of integers, or integers separated
//! by commas and/or whitespace. Blank input is the empty sequence.

use crate::error::PivotError;
use std::fs;
use std::io;

/// Source name that selects stdin in [`read_sequence`].
pub const STDIN_SOURCE: &str = "-";

/// Parse a sequence of `i64` from text.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>, PivotError> {
    let trimmed = text.trim();
    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|e| PivotError::Parse {
                token: token.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}

/// Read and parse a sequence from a file path, or from stdin when `source`
/// is `-`.
pub fn read_sequence(source: &str) -> Result<Vec<i64>, PivotError> {
    let text = if source == STDIN_SOURCE {
        io::read_to_string(io::stdin())?
    } else {
        fs::read_to_string(source).map_err(|e| PivotError::Io(format!("{source}: {e}")))?
    };
    parse_sequence(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    struct TempFile {
        path: PathBuf,
    }

    impl TempFile {
        fn with_contents(name: &str, contents: &str) -> Self {
            let unique = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .expect("clock should be after unix epoch")
                .as_nanos();
            let path = std::env::temp_dir().join(format!(
                "pivot-kernel-{name}-{}-{unique}",
                std::process::id()
            ));
            fs::write(&path, contents).expect("temp file should be written");
            Self { path }
        }

        fn source(&self) -> &str {
            self.path.to_str().expect("temp path should be utf-8")
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.path);
        }
    }

    #[test]
    fn parses_json_arrays() {
        assert_eq!(parse_sequence("[1, -7, 3]").unwrap(), vec![1, -7, 3]);
        assert_eq!(parse_sequence("  []\n").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn parses_separated_tokens() {
        assert_eq!(parse_sequence("1 7 3").unwrap(), vec![1, 7, 3]);
        assert_eq!(parse_sequence("1,7,3").unwrap(), vec![1, 7, 3]);
        assert_eq!(parse_sequence("1, -7,\n\t3 ,").unwrap(), vec![1, -7, 3]);
    }

    #[test]
    fn blank_text_is_empty() {
        assert!(parse_sequence("").unwrap().is_empty());
        assert!(parse_sequence("  \n ").unwrap().is_empty());
    }

    #[test]
    fn rejects_non_integers() {
        let err = parse_sequence("1 two 3").unwrap_err();
        assert!(matches!(err, PivotError::Parse { ref token, .. } if token == "two"));

        assert!(matches!(
            parse_sequence("[1, 2.5]"),
            Err(PivotError::Json(_))
        ));
        assert!(matches!(parse_sequence("[1, 2"), Err(PivotError::Json(_))));
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            parse_sequence("99999999999999999999"),
            Err(PivotError::Parse { .. })
        ));
    }

    #[test]
    fn reads_files() {
        let file = TempFile::with_contents("reads", "[1, 7, 3, 6, 5, 6]\n");
        assert_eq!(read_sequence(file.source()).unwrap(), vec![1, 7, 3, 6, 5, 6]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_sequence("/nonexistent/pivot/input.json").unwrap_err();
        assert!(matches!(err, PivotError::Io(ref msg) if msg.starts_with("/nonexistent")));
    }
}
