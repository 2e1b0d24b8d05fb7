use crate::common::*;

#[doc = r#"
    Scalar cell value of an uploaded table, tagged once at load time.

    Uploaded data has no fixed schema; every cell is resolved into one of
    these variants by the ingestion step so the rest of the pipeline never
    re-parses raw text.
"#]
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    Empty,
}

impl CellValue {
    #[doc = "True when the cell carries no usable value. Whitespace-only text counts as blank."]
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    #[doc = "Display form used as a grouping key and as a chart label."]
    pub fn display(&self) -> String {
        match self {
            CellValue::Text(text) => text.clone(),
            CellValue::Number(num) => {
                /* Whole numbers render without a trailing `.0` so spreadsheet
                integer codes keep their familiar form. */
                if num.fract() == 0.0 && num.is_finite() && num.abs() < 1e15 {
                    format!("{}", *num as i64)
                } else {
                    num.to_string()
                }
            }
            CellValue::Date(date) => date.format("%Y-%m-%d").to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_detection_covers_empty_and_whitespace_text() {
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::Text("   ".to_string()).is_blank());
        assert!(!CellValue::Text("M".to_string()).is_blank());
        assert!(!CellValue::Number(0.0).is_blank());
    }

    #[test]
    fn whole_numbers_display_without_decimal_point() {
        assert_eq!(CellValue::Number(3.0).display(), "3");
        assert_eq!(CellValue::Number(2.5).display(), "2.5");
    }

    #[test]
    fn dates_display_in_iso_form() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(CellValue::Date(date).display(), "2024-03-15");
    }
}
