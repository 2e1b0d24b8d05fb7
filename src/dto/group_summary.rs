use crate::common::*;

use crate::dto::group_slice::*;

#[doc = r#"
    Per-group aggregate over the uploaded records, one slice per distinct
    value of the grouping column in order of first appearance.

    Rebuilt in full on every request; nothing here survives the response.
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct GroupSummary {
    pub group_column: String,
    pub total_count: usize,
    pub slices: Vec<GroupSlice>,
}
