pub mod aggregate_options;
pub mod chart_fragments;
pub mod group_slice;
pub mod group_summary;
