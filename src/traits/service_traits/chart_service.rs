use crate::common::*;

use crate::dto::{chart_fragments::*, group_summary::*};
use crate::errors::DashboardError;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = "
        Render the group summary into a complete standalone HTML document and
        save it under `output_dir` with a date-stamped filename.
        # Arguments
        * `summary` - aggregated wedge data
        * `title` - chart caption
        * `output_dir` - directory receiving the document
        * `base_filename` - prefix of the `<base>_<MM_DD_YYYY>.html` name
        # Returns
        * `PathBuf` - path of the written document
    "]
    async fn render_standalone(
        &self,
        summary: &GroupSummary,
        title: &str,
        output_dir: &Path,
        base_filename: &str,
    ) -> Result<PathBuf, DashboardError>;

    #[doc = "
        Render the group summary into embeddable fragments (behavior script +
        container markup) for a host page. Performs no filesystem write.
    "]
    async fn render_fragments(
        &self,
        summary: &GroupSummary,
        title: &str,
    ) -> Result<ChartFragments, DashboardError>;
}
