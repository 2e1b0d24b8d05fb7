use crate::common::*;
use crate::errors::DashboardError;

#[doc = r#"
    Tabular input format, resolved once from the uploaded filename suffix.

    The pipeline dispatches on this tag instead of re-inspecting the path.
    Extension matching is case-insensitive, so `report.XLSX` loads the same
    way as `report.xlsx`.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Spreadsheet,
    DelimitedText,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> Result<Self, DashboardError> {
        let extension: String = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();

        match extension.as_str() {
            "xlsx" => Ok(InputFormat::Spreadsheet),
            "csv" => Ok(InputFormat::DelimitedText),
            _ => Err(DashboardError::UnsupportedFormat { extension }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_spreadsheet_and_delimited_text_suffixes() {
        assert_eq!(
            InputFormat::from_path(Path::new("employees.xlsx")).unwrap(),
            InputFormat::Spreadsheet
        );
        assert_eq!(
            InputFormat::from_path(Path::new("employees.csv")).unwrap(),
            InputFormat::DelimitedText
        );
    }

    #[test]
    fn suffix_matching_ignores_case() {
        assert_eq!(
            InputFormat::from_path(Path::new("EMPLOYEES.XLSX")).unwrap(),
            InputFormat::Spreadsheet
        );
        assert_eq!(
            InputFormat::from_path(Path::new("roster.Csv")).unwrap(),
            InputFormat::DelimitedText
        );
    }

    #[test]
    fn rejects_unrecognized_suffix() {
        let err = InputFormat::from_path(Path::new("notes.txt")).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::UnsupportedFormat { ref extension } if extension == "txt"
        ));
    }

    #[test]
    fn rejects_missing_suffix() {
        let err = InputFormat::from_path(Path::new("employees")).unwrap_err();
        assert!(matches!(
            err,
            DashboardError::UnsupportedFormat { ref extension } if extension.is_empty()
        ));
    }
}
