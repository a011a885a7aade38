/// Default field delimiter.
pub const COMMA: &str = ",";

/// Ordered column names; position defines the column-to-index mapping.
pub type Header = Vec<String>;
/// Ordered field values, positionally aligned with the header. A record is
/// not required to have the same length as the header.
pub type Record = Vec<String>;

/// An in-memory table of delimited text plus the key configuration used to
/// deduplicate it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Field delimiter the source was split on.
    pub delimiter: String,
    /// Name of the column whose value must be unique after deduplication.
    pub unique_key: String,

    /// Whether a sort key is in effect. When false, `sort_key_index`
    /// resolves to nothing even if `sort_key` names a real column.
    pub has_sort: bool,
    /// Name of the column compared to pick a winner among same-key records.
    pub sort_key: String,
    /// Sort direction. Not consulted by the distinct pass, which always
    /// keeps the lexicographically greater sort value.
    pub ascending: bool,

    pub header: Header,
    pub records: Vec<Record>,
}

impl Table {
    /// An empty table with the default comma delimiter and no keys set.
    pub fn new() -> Self {
        Table {
            delimiter: COMMA.to_string(),
            unique_key: String::new(),
            has_sort: false,
            sort_key: String::new(),
            ascending: false,
            header: Header::new(),
            records: Vec::new(),
        }
    }

    /// Position of the configured unique-key column, if present.
    pub fn unique_key_index(&self) -> Option<usize> {
        column_index(&self.header, &self.unique_key)
    }

    /// Position of the configured sort-key column. Always `None` while
    /// `has_sort` is false.
    pub fn sort_key_index(&self) -> Option<usize> {
        if !self.has_sort {
            return None;
        }
        column_index(&self.header, &self.sort_key)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

/// Position of the first column whose name equals `name` exactly. `None`
/// when no column matches or `name` is empty.
pub fn column_index(header: &[String], name: &str) -> Option<usize> {
    if name.is_empty() {
        return None;
    }
    header.iter().position(|col| col == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Header {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_table_defaults() {
        let t = Table::new();
        assert_eq!(t.delimiter, COMMA);
        assert!(!t.has_sort);
        assert!(!t.ascending);
        assert!(t.header.is_empty());
        assert!(t.records.is_empty());
    }

    #[test]
    fn column_index_first_match() {
        let h = header(&["col1", "col2", "col2"]);
        assert_eq!(column_index(&h, "col1"), Some(0));
        assert_eq!(column_index(&h, "col2"), Some(1));
    }

    #[test]
    fn column_index_not_found() {
        let h = header(&["col1", "col2", "col3"]);
        assert_eq!(column_index(&h, "col4"), None);
    }

    #[test]
    fn column_index_empty_header_or_name() {
        assert_eq!(column_index(&[], "col1"), None);
        let h = header(&["col1", ""]);
        assert_eq!(column_index(&h, ""), None);
    }

    #[test]
    fn unique_key_index_resolves_regardless_of_sort_flag() {
        let mut t = Table::new();
        t.header = header(&["Col1", "Col2", "Col3"]);

        t.unique_key = "Col3".to_string();
        t.has_sort = true;
        assert_eq!(t.unique_key_index(), Some(2));

        t.unique_key = "Col2".to_string();
        t.has_sort = false;
        assert_eq!(t.unique_key_index(), Some(1));

        t.unique_key = "Col0".to_string();
        assert_eq!(t.unique_key_index(), None);
    }

    #[test]
    fn sort_key_index_when_enabled() {
        let mut t = Table::new();
        t.header = header(&["Col1", "Col2", "Col3"]);
        t.has_sort = true;

        t.sort_key = "Col1".to_string();
        assert_eq!(t.sort_key_index(), Some(0));

        t.sort_key = "Col4".to_string();
        assert_eq!(t.sort_key_index(), None);
    }

    #[test]
    fn sort_key_index_none_when_disabled() {
        let mut t = Table::new();
        t.header = header(&["Col1", "Col2", "Col3"]);
        t.has_sort = false;
        // the name matches a real column, the flag still wins
        t.sort_key = "Col2".to_string();
        assert_eq!(t.sort_key_index(), None);
    }
}
