pub mod cell_value;
pub mod record_set;
