use crate::common::*;

use crate::dto::{aggregate_options::*, group_slice::*, group_summary::*};
use crate::errors::DashboardError;
use crate::model::record::{cell_value::*, record_set::*};
use crate::traits::service_traits::aggregation_service::*;

use std::f64::consts::PI;

#[derive(Debug, Clone, new)]
pub struct AggregationServiceImpl;

impl AggregationService for AggregationServiceImpl {
    fn summarize(
        &self,
        records: &RecordSet,
        options: &AggregateOptions,
    ) -> Result<GroupSummary, DashboardError> {
        /* Color assignment indexes the palette by wedge position; an empty
        palette would panic there, so refuse it up front. */
        if options.color_palette().is_empty() {
            return Err(DashboardError::Configuration(
                "color palette must contain at least one color".to_string(),
            ));
        }

        let group_idx: usize = records
            .column_index(options.group_column())
            .ok_or_else(|| DashboardError::MissingColumn {
                column: options.group_column().clone(),
            })?;

        /* The exclusion column is optional twice over: it may be absent from
        the configuration, and a configured name may be absent from this
        particular upload. Neither case is an error. */
        let exclusion_idx: Option<usize> = options
            .exclusion_column()
            .as_deref()
            .and_then(|column| records.column_index(column));

        /* IndexMap keeps groups in order of first appearance; angles and
        colors are assigned over exactly this ordering and never re-sorted. */
        let mut counts: IndexMap<String, usize> = IndexMap::new();

        for row in records.rows() {
            if let Some(idx) = exclusion_idx {
                let excluded: bool = row
                    .get(idx)
                    .map(|cell| !cell.is_blank())
                    .unwrap_or(false);
                if excluded {
                    continue;
                }
            }

            let group_cell: Option<&CellValue> = row.get(group_idx);

            /* A blank grouping value does not form a group of its own. */
            match group_cell {
                Some(cell) if !cell.is_blank() => {
                    *counts.entry(cell.display()).or_insert(0) += 1;
                }
                _ => {}
            }
        }

        let total_count: usize = counts.values().sum();
        if total_count == 0 {
            return Err(DashboardError::NoData);
        }

        let palette: &Vec<String> = options.color_palette();
        let mut cumulative_angle: f64 = 0.0;
        let mut slices: Vec<GroupSlice> = Vec::with_capacity(counts.len());

        for (position, (label, count)) in counts.into_iter().enumerate() {
            let fraction: f64 = count as f64 / total_count as f64;
            let start_angle: f64 = cumulative_angle;
            cumulative_angle += fraction * 2.0 * PI;

            slices.push(GroupSlice::new(
                label,
                count,
                fraction * 100.0,
                start_angle,
                cumulative_angle,
                palette[position % palette.len()].clone(),
            ));
        }

        info!(
            "Aggregated {} rows into {} groups by '{}'",
            total_count,
            slices.len(),
            options.group_column()
        );

        Ok(GroupSummary::new(
            options.group_column().clone(),
            total_count,
            slices,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: [&str; 8] = [
        "#332288", "#117733", "#44AA99", "#88CCEE", "#DDCC77", "#CC6677", "#AA4499", "#882255",
    ];

    fn palette() -> Vec<String> {
        PALETTE.iter().map(|c| c.to_string()).collect()
    }

    fn text_records(columns: &[&str], rows: &[&[&str]]) -> RecordSet {
        RecordSet::new(
            columns.iter().map(|c| c.to_string()).collect(),
            rows.iter()
                .map(|row| {
                    row.iter()
                        .map(|value| {
                            if value.is_empty() {
                                CellValue::Empty
                            } else {
                                CellValue::Text(value.to_string())
                            }
                        })
                        .collect()
                })
                .collect(),
        )
    }

    fn options(group: &str, exclusion: Option<&str>) -> AggregateOptions {
        AggregateOptions::new(group.to_string(), exclusion.map(str::to_string), palette())
    }

    #[test]
    fn groups_follow_first_appearance_order() {
        let records = text_records(&["Category"], &[&["A"], &["A"], &["B"]]);
        let summary = AggregationServiceImpl::new()
            .summarize(&records, &options("Category", None))
            .unwrap();

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.slices.len(), 2);

        let first = &summary.slices[0];
        let second = &summary.slices[1];

        assert_eq!(first.label, "A");
        assert_eq!(first.count, 2);
        assert!((first.percentage - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(first.start_angle, 0.0);
        assert!((first.end_angle - 4.188_790_204_786_391).abs() < 1e-6);

        assert_eq!(second.label, "B");
        assert_eq!(second.count, 1);
        assert!((second.percentage - 100.0 / 3.0).abs() < 1e-9);
        assert!((second.start_angle - 4.188_790_204_786_391).abs() < 1e-6);
        assert!((second.end_angle - 2.0 * PI).abs() < 1e-6);
    }

    #[test]
    fn counts_percentages_and_angles_close_over_the_whole() {
        let records = text_records(
            &["Dept"],
            &[
                &["Eng"],
                &["Eng"],
                &["Eng"],
                &["Sales"],
                &["Sales"],
                &["HR"],
                &["Legal"],
            ],
        );
        let summary = AggregationServiceImpl::new()
            .summarize(&records, &options("Dept", None))
            .unwrap();

        let count_sum: usize = summary.slices.iter().map(|s| s.count).sum();
        assert_eq!(count_sum, 7);

        let pct_sum: f64 = summary.slices.iter().map(|s| s.percentage).sum();
        assert!((pct_sum - 100.0).abs() / 100.0 < 1e-6);

        assert_eq!(summary.slices[0].start_angle, 0.0);
        let last = summary.slices.last().unwrap();
        assert!((last.end_angle - 2.0 * PI).abs() < 1e-6);

        /* Each wedge starts exactly where the previous one ended. */
        for pair in summary.slices.windows(2) {
            assert!((pair[0].end_angle - pair[1].start_angle).abs() < 1e-12);
        }
    }

    #[test]
    fn colors_are_positional_and_cycle_past_the_palette() {
        let labels: Vec<String> = (0..10).map(|i| format!("G{}", i)).collect();
        let rows: Vec<Vec<CellValue>> = labels
            .iter()
            .map(|label| vec![CellValue::Text(label.clone())])
            .collect();
        let records = RecordSet::new(vec!["Code".to_string()], rows);

        let service = AggregationServiceImpl::new();
        let summary = service.summarize(&records, &options("Code", None)).unwrap();

        for (idx, slice) in summary.slices.iter().enumerate() {
            assert_eq!(slice.color, PALETTE[idx % PALETTE.len()]);
        }

        /* Re-running on identical input assigns identical colors. */
        let rerun = service.summarize(&records, &options("Code", None)).unwrap();
        let first_colors: Vec<&String> = summary.slices.iter().map(|s| s.color()).collect();
        let rerun_colors: Vec<&String> = rerun.slices.iter().map(|s| s.color()).collect();
        assert_eq!(first_colors, rerun_colors);
    }

    #[test]
    fn rows_with_non_blank_exclusion_value_never_appear() {
        let records = text_records(
            &["Gender Code", "Termination Date"],
            &[
                &["F", ""],
                &["M", "2023-01-31"],
                &["F", ""],
                &["M", ""],
            ],
        );
        let summary = AggregationServiceImpl::new()
            .summarize(&records, &options("Gender Code", Some("Termination Date")))
            .unwrap();

        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.slices[0].label, "F");
        assert_eq!(summary.slices[0].count, 2);
        assert_eq!(summary.slices[1].label, "M");
        assert_eq!(summary.slices[1].count, 1);
    }

    #[test]
    fn configured_exclusion_column_missing_from_upload_is_ignored() {
        let records = text_records(&["Gender Code"], &[&["F"], &["M"]]);
        let summary = AggregationServiceImpl::new()
            .summarize(&records, &options("Gender Code", Some("Termination Date")))
            .unwrap();
        assert_eq!(summary.total_count, 2);
    }

    #[test]
    fn missing_grouping_column_is_a_typed_error() {
        let records = text_records(&["Department"], &[&["Eng"]]);
        let err = AggregationServiceImpl::new()
            .summarize(&records, &options("Gender Code", None))
            .unwrap_err();
        assert!(matches!(
            err,
            DashboardError::MissingColumn { ref column } if column == "Gender Code"
        ));
    }

    #[test]
    fn fully_excluded_input_yields_no_data_error() {
        let records = text_records(
            &["Gender Code", "Termination Date"],
            &[&["F", "2022-05-01"], &["M", "2023-01-31"]],
        );
        let err = AggregationServiceImpl::new()
            .summarize(&records, &options("Gender Code", Some("Termination Date")))
            .unwrap_err();
        assert!(matches!(err, DashboardError::NoData));
    }

    #[test]
    fn empty_palette_is_a_typed_configuration_error() {
        let records = text_records(&["Code"], &[&["A"]]);
        let bare_options =
            AggregateOptions::new("Code".to_string(), None, Vec::new());
        let err = AggregationServiceImpl::new()
            .summarize(&records, &bare_options)
            .unwrap_err();
        assert!(matches!(err, DashboardError::Configuration(_)));
    }

    #[test]
    fn blank_grouping_values_do_not_form_a_group() {
        let records = text_records(&["Code"], &[&["A"], &[""], &["B"]]);
        let summary = AggregationServiceImpl::new()
            .summarize(&records, &options("Code", None))
            .unwrap();
        assert_eq!(summary.total_count, 2);
        assert_eq!(summary.slices.len(), 2);
    }
}
