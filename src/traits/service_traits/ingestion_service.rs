use crate::common::*;

use crate::errors::DashboardError;
use crate::model::record::record_set::*;

#[async_trait]
pub trait IngestionService: Send + Sync {
    #[doc = "
        Load an uploaded file into an in-memory record set.
        # Arguments
        * `path` - path of the stored upload; the filename suffix selects the parser
        # Errors
        * `UnsupportedFormat` - suffix is neither a spreadsheet nor delimited text
        * `Parse` - the file content could not be parsed
    "]
    async fn load_records(&self, path: &Path) -> Result<RecordSet, DashboardError>;
}
