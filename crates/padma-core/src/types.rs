use std::fmt;

/// One `term|definition` line of the output dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub definition: String,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}", self.term, self.definition)
    }
}

/// Per-row outcome tallies of one conversion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowCounts {
    pub entries: usize,
    pub skipped_no_headword: usize,
    pub skipped_no_content: usize,
    /// Rows narrower than the widest configured column; still converted
    pub short_rows: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Sorted by term
    pub entries: Vec<Entry>,
    pub counts: RowCounts,
}
