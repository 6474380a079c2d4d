//! Parsers for the CLI's output formats.
//!
//! `info` subcommands print aligned `Key: value` pairs, one attribute
//! per line, with nested blocks indented. `list` subcommands print a
//! CSV table with a header row. Keys are normalized to lowercase with
//! dashes (`Prior Lifecycle Environment` → `prior-lifecycle-environment`)
//! so callers index records the same way they spell command options.

use std::collections::HashMap;

use regex::Regex;

use crate::result::{Error, ValidarResult};

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace(' ', "-")
}

/// Parse `Key: value` info output into a flat record.
///
/// Indented continuation lines belong to nested blocks the suite does
/// not assert on; they are skipped.
///
/// # Errors
///
/// Returns [`Error::CliOutput`] if no attribute lines are found.
pub fn parse_info(stdout: &str) -> ValidarResult<HashMap<String, String>> {
    // Anchored at column zero: indented lines are nested attributes.
    let line_re = Regex::new(r"^([A-Za-z][A-Za-z0-9 /()-]*):\s*(.*)$").unwrap();
    let mut record = HashMap::new();
    for line in stdout.lines() {
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        if let Some(captures) = line_re.captures(line) {
            let _ = record.insert(
                normalize_key(&captures[1]),
                captures[2].trim().to_string(),
            );
        }
    }
    if record.is_empty() {
        return Err(Error::CliOutput {
            message: "no `Key: value` lines in info output".to_string(),
        });
    }
    Ok(record)
}

/// Parse CSV listing output into one record per row.
///
/// # Errors
///
/// Returns [`Error::CliOutput`] if the header row is missing.
pub fn parse_list(stdout: &str) -> ValidarResult<Vec<HashMap<String, String>>> {
    let mut lines = stdout.lines().filter(|line| !line.trim().is_empty());
    let header: Vec<String> = lines
        .next()
        .ok_or_else(|| Error::CliOutput {
            message: "empty list output".to_string(),
        })?
        .split(',')
        .map(normalize_key)
        .collect();
    let mut records = Vec::new();
    for line in lines {
        let fields = line.split(',').map(str::trim);
        let record: HashMap<String, String> = header
            .iter()
            .cloned()
            .zip(fields.map(String::from))
            .collect();
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info_basic() {
        let stdout = "\
Id:          5
Name:        qa
Description:
Prior Lifecycle Environment: Library
Organization: Default
";
        let record = parse_info(stdout).unwrap();
        assert_eq!(record["id"], "5");
        assert_eq!(record["name"], "qa");
        assert_eq!(record["description"], "");
        assert_eq!(record["prior-lifecycle-environment"], "Library");
    }

    #[test]
    fn test_parse_info_skips_nested_blocks() {
        let stdout = "\
Name: qa
Organizations:
    1) Id: 1
       Name: Default
Label: qa
";
        let record = parse_info(stdout).unwrap();
        assert_eq!(record["name"], "qa");
        assert_eq!(record["label"], "qa");
        assert!(!record.contains_key("1)-id"));
    }

    #[test]
    fn test_parse_info_empty_is_error() {
        let err = parse_info("no attributes here\n").unwrap_err();
        assert!(matches!(err, Error::CliOutput { .. }));
    }

    #[test]
    fn test_parse_list_basic() {
        let stdout = "\
ID,Name,Prior
1,Library,
2,QA,Library
";
        let records = parse_list(stdout).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["id"], "1");
        assert_eq!(records[1]["name"], "QA");
        assert_eq!(records[1]["prior"], "Library");
    }

    #[test]
    fn test_parse_list_empty_is_error() {
        assert!(parse_list("").is_err());
    }

    #[test]
    fn test_parse_list_header_only_is_empty() {
        let records = parse_list("ID,Name\n").unwrap();
        assert!(records.is_empty());
    }
}
