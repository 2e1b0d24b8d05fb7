use crate::dto::{aggregate_options::*, group_summary::*};
use crate::errors::DashboardError;
use crate::model::record::record_set::*;

pub trait AggregationService: Send + Sync {
    #[doc = "
        Group the records by the configured column and derive per-group count,
        percentage, wedge angles, and color.
        # Errors
        * `MissingColumn` - the grouping column is absent from the header
        * `NoData` - no groupable rows remain after exclusion filtering
    "]
    fn summarize(
        &self,
        records: &RecordSet,
        options: &AggregateOptions,
    ) -> Result<GroupSummary, DashboardError>;
}
