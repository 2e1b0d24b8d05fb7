use crate::common::*;

use crate::model::record::cell_value::*;

#[doc = r#"
    In-memory table loaded verbatim from an uploaded file.

    `columns` comes from the header row; every row holds one `CellValue`
    per column, in header order. The whole table lives in memory - uploads
    are assumed small enough that no streaming path is needed.
"#]
#[derive(Debug, Clone, Default, Getters, new)]
#[getset(get = "pub")]
pub struct RecordSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl RecordSet {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_lookup_is_exact() {
        let records = RecordSet::new(
            vec!["Gender Code".to_string(), "Termination Date".to_string()],
            vec![vec![CellValue::Text("F".to_string()), CellValue::Empty]],
        );

        assert_eq!(records.column_index("Gender Code"), Some(0));
        assert_eq!(records.column_index("gender code"), None);
        assert_eq!(records.column_index("Department"), None);
        assert_eq!(records.row_count(), 1);
    }
}
