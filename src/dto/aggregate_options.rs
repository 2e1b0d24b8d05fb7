use crate::common::*;

#[doc = r#"
    Parameters of one aggregation run, passed in explicitly rather than read
    from process-wide state.

    # Fields
    * `group_column` - column whose distinct values define the groups
    * `exclusion_column` - optional column; rows with a non-blank value in it
      are dropped before grouping
    * `color_palette` - ordered hex colors, cycled over the groups by position
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct AggregateOptions {
    pub group_column: String,
    pub exclusion_column: Option<String>,
    pub color_palette: Vec<String>,
}
