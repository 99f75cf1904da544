//! Reading frequency changes from text.

use crate::error::CalibrationError;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Parse `text` as a series of signed frequency changes, like `+1` or `-14`.
///
/// Changes are separated by whitespace or commas, so both the one-per-line
/// puzzle input and examples written as `+1, -2, +3, +1` are accepted. The
/// first token that isn't an integer is reported along with its line number.
pub fn parse_changes(text: &str) -> Result<Vec<i32>, CalibrationError> {
    let mut changes = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let tokens = line
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|token| !token.is_empty());
        for token in tokens {
            let change = i32::from_str(token).map_err(|cause| CalibrationError::Parse {
                line: index + 1,
                token: token.to_owned(),
                cause,
            })?;
            changes.push(change);
        }
    }
    Ok(changes)
}

/// Read and parse the frequency changes in the file at `path`.
pub fn load_changes<P: AsRef<Path>>(path: P) -> Result<Vec<i32>, CalibrationError> {
    let path = path.as_ref();
    let mut text = String::new();
    {
        let mut file = File::open(path).map_err(|cause| CalibrationError::Open {
            path: path.display().to_string(),
            cause,
        })?;
        file.read_to_string(&mut text).map_err(|cause| CalibrationError::Read {
            path: path.display().to_string(),
            cause,
        })?;
    }

    let changes = parse_changes(&text)?;
    debug!(path = %path.display(), count = changes.len(), "loaded frequency changes");
    Ok(changes)
}

#[test]
fn test_parse_changes() {
    assert_eq!(parse_changes("+1\n-2\n+3\n+1\n").unwrap(), vec![1, -2, 3, 1]);
    assert_eq!(parse_changes("+1, -2, +3, +1").unwrap(), vec![1, -2, 3, 1]);
    assert_eq!(parse_changes("  +7 -7\r\n\n\t14\n").unwrap(), vec![7, -7, 14]);
    assert_eq!(parse_changes("").unwrap(), Vec::<i32>::new());
}

#[test]
fn test_parse_changes_bad_token() {
    match parse_changes("+1\n-2\n+x3\n+1\n") {
        Err(CalibrationError::Parse { line, token, .. }) => {
            assert_eq!(line, 3);
            assert_eq!(token, "+x3");
        }
        other => panic!("expected a parse error, got {:?}", other),
    }

    // Out of range for i32.
    match parse_changes("+1\n+3000000000\n") {
        Err(CalibrationError::Parse { line: 2, .. }) => (),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_load_changes() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "+3\n+3\n+4\n-2\n-4\n").unwrap();
    assert_eq!(load_changes(file.path()).unwrap(), vec![3, 3, 4, -2, -4]);
}

#[test]
fn test_load_changes_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("input.txt");
    match load_changes(&missing) {
        Err(err @ CalibrationError::Open { .. }) => {
            assert!(err.to_string().contains("input.txt"));
        }
        other => panic!("expected an open error, got {:?}", other),
    }
}

#[test]
fn test_load_changes_not_text() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"+1\n\xff\xfe\n").unwrap();
    match load_changes(file.path()) {
        Err(err @ CalibrationError::Read { .. }) => {
            assert!(err.to_string().starts_with("unable to read "));
        }
        other => panic!("expected a read error, got {:?}", other),
    }
}
