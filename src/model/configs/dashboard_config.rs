use crate::common::*;

#[doc = r#"
    Dashboard generation settings.

    # Fields
    * `upload_dir` - directory holding uploaded files and generated dashboards
    * `base_filename` - prefix of the date-stamped standalone document name
    * `chart_title` - caption drawn above the pie chart
    * `group_column` - categorical column whose distinct values become wedges
    * `exclusion_column` - optional column; rows with a non-blank value in it
      are dropped before grouping (e.g. `Termination Date`)
    * `color_palette` - ordered hex colors assigned to wedges by position
"#]
#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct DashboardConfig {
    pub upload_dir: String,
    pub base_filename: String,
    pub chart_title: String,
    pub group_column: String,
    #[serde(default)]
    pub exclusion_column: Option<String>,
    pub color_palette: Vec<String>,
}
