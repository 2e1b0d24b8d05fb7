pub use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
pub use flexi_logger::{Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record};
pub use indexmap::IndexMap;
pub use once_cell::sync::Lazy as once_lazy;
