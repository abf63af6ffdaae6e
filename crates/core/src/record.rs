//! Project records built from CSV rows.

use indexmap::IndexMap;

/// One project: an insertion-ordered mapping from attribute name to raw
/// string value, plus a description slot filled in after the CSV is read.
///
/// The `title` attribute is the join key used to locate the target page.
/// The description comes from a Markdown file, never from the CSV, and is
/// excluded from the attribute table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectRecord {
    attrs: IndexMap<String, String>,
    description: String,
}

impl ProjectRecord {
    /// Builds a record by zipping a header row with a data row.
    ///
    /// The zip stops at the shorter row: missing trailing values are simply
    /// absent, and surplus data fields are dropped. A repeated header keeps
    /// its first position with the last value winning.
    pub fn from_row(headers: &[String], fields: Vec<String>) -> Self {
        let mut attrs = IndexMap::with_capacity(headers.len());
        for (key, value) in headers.iter().zip(fields) {
            attrs.insert(key.clone(), value);
        }
        Self {
            attrs,
            description: String::new(),
        }
    }

    /// The join key, when the CSV carried a `title` column for this row.
    pub fn title(&self) -> Option<&str> {
        self.get("title")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Attributes in CSV column order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn zip_stops_at_shorter_row() {
        let record = ProjectRecord::from_row(
            &headers(&["title", "owner", "budget"]),
            vec!["Alpha".into(), "Jane".into()],
        );
        assert_eq!(record.title(), Some("Alpha"));
        assert_eq!(record.get("budget"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn surplus_fields_are_dropped() {
        let record = ProjectRecord::from_row(
            &headers(&["title"]),
            vec!["Alpha".into(), "stray".into()],
        );
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn attributes_keep_column_order() {
        let record = ProjectRecord::from_row(
            &headers(&["b", "a", "c"]),
            vec!["1".into(), "2".into(), "3".into()],
        );
        let keys: Vec<&str> = record.attributes().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }
}
