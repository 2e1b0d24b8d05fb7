use crate::common::*;

#[doc = r#"
    One wedge of the pie chart, derived from a single distinct value of the
    grouping column.

    # Fields
    * `label` - the distinct value this wedge represents
    * `count` - rows carrying the value, after exclusion filtering
    * `percentage` - `count / total * 100`
    * `start_angle` - cumulative angle (radians) before this wedge; 0 for the first
    * `end_angle` - cumulative angle including this wedge; 2PI for the last
    * `color` - hex color assigned by wedge position from the palette
"#]
#[derive(Debug, Clone, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct GroupSlice {
    pub label: String,
    pub count: usize,
    pub percentage: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub color: String,
}

impl GroupSlice {
    #[doc = "Tooltip line shown when the wedge is hovered, percentage to two decimals."]
    pub fn hover_text(&self) -> String {
        format!("{}: {} ({:.2}%)", self.label, self.count, self.percentage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_text_rounds_percentage_to_two_decimals() {
        let slice = GroupSlice::new(
            "A".to_string(),
            2,
            200.0 / 3.0,
            0.0,
            4.188_790_204_786_391,
            "#332288".to_string(),
        );
        assert_eq!(slice.hover_text(), "A: 2 (66.67%)");
    }
}
