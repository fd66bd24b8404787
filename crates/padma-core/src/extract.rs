use csv::StringRecord;

/// Cell values the spreadsheet uses to mean "no data"
const PLACEHOLDERS: [&str; 4] = ["-", "'-", "'", "' -"];

/// Trimmed cell at `index`, or "" when the row is too short
pub fn get(row: &StringRecord, index: usize) -> &str {
    row.get(index).map(str::trim).unwrap_or("")
}

/// True for "" and for placeholder tokens
pub fn is_empty(value: &str) -> bool {
    value.is_empty() || PLACEHOLDERS.contains(&value)
}

/// Cell at `index` unless it is empty or a placeholder
pub fn get_present(row: &StringRecord, index: usize) -> Option<&str> {
    let value = get(row, index);
    (!is_empty(value)).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_trims_and_degrades() {
        let row = StringRecord::from(vec!["  a  ", "b"]);
        assert_eq!(get(&row, 0), "a");
        assert_eq!(get(&row, 1), "b");
        assert_eq!(get(&row, 2), "");
        assert_eq!(get(&row, 500), "");
    }

    #[test]
    fn test_placeholders_are_empty() {
        for value in ["", "-", "'-", "'", "' -"] {
            assert!(is_empty(value), "{value:?} should count as empty");
        }
        for value in ["--", "a", "'a", "- '"] {
            assert!(!is_empty(value), "{value:?} should count as content");
        }
    }

    #[test]
    fn test_get_present() {
        let row = StringRecord::from(vec![" - ", "x", " "]);
        assert_eq!(get_present(&row, 0), None);
        assert_eq!(get_present(&row, 1), Some("x"));
        assert_eq!(get_present(&row, 2), None);
        assert_eq!(get_present(&row, 3), None);
    }
}
