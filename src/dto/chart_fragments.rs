use crate::common::*;

#[doc = r#"
    Embeddable rendering of the pie chart: a behavior script plus the matching
    container markup. A host page must insert both; neither touches the
    filesystem.
"#]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct ChartFragments {
    pub script: String,
    pub container: String,
}
