use crate::common::*;

use crate::dto::{chart_fragments::*, group_summary::*};
use crate::errors::DashboardError;
use crate::traits::service_traits::chart_service::*;
use crate::utils_modules::time_utils::*;

use plotters::prelude::*;

use std::f64::consts::PI;

/* Fixed drawing geometry; the behavior script rescales it against the
rendered size of the SVG. */
const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 480;
const PIE_CENTER_X: i32 = 250;
const PIE_CENTER_Y: i32 = 270;
const PIE_RADIUS: f64 = 180.0;
const LEGEND_X: i32 = 470;

const CONTAINER_ID: &str = "people-analytics-pie";

const STANDALONE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE__</title>
<style>
body { font-family: sans-serif; margin: 24px; }
.pie-chart-container { max-width: 640px; }
</style>
</head>
<body>
__CONTAINER__
__SCRIPT__
</body>
</html>
"#;

const BEHAVIOR_SCRIPT_TEMPLATE: &str = r#"<script>
(function () {
  var data = __DATA__;
  var container = document.getElementById("__CONTAINER_ID__");
  if (!container) { return; }
  var svg = container.querySelector("svg");
  if (!svg) { return; }
  var tip = document.createElement("div");
  tip.style.cssText = "position:fixed;display:none;padding:4px 8px;background:#222;color:#eee;font:13px sans-serif;border-radius:3px;pointer-events:none;z-index:1000;";
  document.body.appendChild(tip);
  container.addEventListener("mousemove", function (e) {
    var rect = svg.getBoundingClientRect();
    var scale = rect.width / data.width;
    var dx = e.clientX - (rect.left + data.cx * scale);
    var dy = (rect.top + data.cy * scale) - e.clientY;
    if (Math.sqrt(dx * dx + dy * dy) > data.radius * scale) {
      tip.style.display = "none";
      return;
    }
    var angle = Math.atan2(dy, dx);
    if (angle < 0) { angle += 2 * Math.PI; }
    var hit = null;
    for (var i = 0; i < data.slices.length; i++) {
      var s = data.slices[i];
      if (angle >= s.startAngle && angle < s.endAngle) { hit = s; break; }
    }
    if (!hit && data.slices.length > 0) {
      hit = data.slices[data.slices.length - 1];
    }
    if (!hit) { tip.style.display = "none"; return; }
    tip.textContent = hit.hover;
    tip.style.left = (e.clientX + 12) + "px";
    tip.style.top = (e.clientY + 12) + "px";
    tip.style.display = "block";
  });
  container.addEventListener("mouseleave", function () {
    tip.style.display = "none";
  });
})();
</script>"#;

#[derive(Debug, Clone, new)]
pub struct ChartServiceImpl;

impl ChartServiceImpl {
    fn parse_hex_color(hex: &str) -> RGBColor {
        let digits: &str = hex.trim_start_matches('#');
        if digits.len() < 6 {
            return RGBColor(127, 127, 127);
        }

        let channel = |range: std::ops::Range<usize>| -> u8 {
            u8::from_str_radix(&digits[range], 16).unwrap_or(0)
        };

        RGBColor(channel(0..2), channel(2..4), channel(4..6))
    }

    #[doc = r#"
        Outline of one pie wedge as polygon points: the center, then the arc
        from `start_angle` to `end_angle` sampled finely enough to look round.
        Angle 0 points right and angles grow counterclockwise, matching the
        angle math in the hover script.
    "#]
    fn wedge_points(start_angle: f64, end_angle: f64) -> Vec<(i32, i32)> {
        let span: f64 = end_angle - start_angle;
        let steps: usize = ((span / 0.02).ceil() as usize).max(2);

        let mut points: Vec<(i32, i32)> = Vec::with_capacity(steps + 2);
        points.push((PIE_CENTER_X, PIE_CENTER_Y));

        for step in 0..=steps {
            let angle: f64 = start_angle + span * step as f64 / steps as f64;
            let x: i32 = (PIE_CENTER_X as f64 + PIE_RADIUS * angle.cos()).round() as i32;
            let y: i32 = (PIE_CENTER_Y as f64 - PIE_RADIUS * angle.sin()).round() as i32;
            points.push((x, y));
        }

        points
    }

    fn draw_pie_svg(summary: &GroupSummary, title: &str) -> anyhow::Result<String> {
        let mut svg: String = String::new();

        {
            let root = SVGBackend::with_string(&mut svg, (CHART_WIDTH, CHART_HEIGHT))
                .into_drawing_area();
            root.fill(&WHITE)?;

            root.draw(&Text::new(
                title.to_string(),
                (24, 18),
                ("sans-serif", 28).into_font().color(&BLACK),
            ))?;

            for slice in summary.slices() {
                let color: RGBColor = Self::parse_hex_color(slice.color());
                let outline: Vec<(i32, i32)> =
                    Self::wedge_points(*slice.start_angle(), *slice.end_angle());

                root.draw(&Polygon::new(outline.clone(), color.filled()))?;

                /* White seams between wedges, as on the reference dashboard. */
                let mut border: Vec<(i32, i32)> = outline;
                border.push((PIE_CENTER_X, PIE_CENTER_Y));
                root.draw(&PathElement::new(
                    border,
                    ShapeStyle::from(&WHITE).stroke_width(2),
                ))?;
            }

            /* Legend: one swatch plus label per group, in group order. */
            for (idx, slice) in summary.slices().iter().enumerate() {
                let swatch_y: i32 = 70 + idx as i32 * 26;
                let color: RGBColor = Self::parse_hex_color(slice.color());

                root.draw(&Rectangle::new(
                    [(LEGEND_X, swatch_y), (LEGEND_X + 16, swatch_y + 16)],
                    color.filled(),
                ))?;
                root.draw(&Text::new(
                    slice.label().clone(),
                    (LEGEND_X + 24, swatch_y + 2),
                    ("sans-serif", 16).into_font().color(&BLACK),
                ))?;
            }

            root.present()?;
        }

        Ok(svg)
    }

    #[doc = "JSON payload the behavior script resolves hovered wedges from."]
    fn hover_payload(summary: &GroupSummary) -> Value {
        let slices: Vec<Value> = summary
            .slices()
            .iter()
            .map(|slice| {
                json!({
                    "label": slice.label(),
                    "count": slice.count(),
                    "startAngle": slice.start_angle(),
                    "endAngle": slice.end_angle(),
                    "hover": slice.hover_text(),
                })
            })
            .collect();

        json!({
            "width": CHART_WIDTH,
            "height": CHART_HEIGHT,
            "cx": PIE_CENTER_X,
            "cy": PIE_CENTER_Y,
            "radius": PIE_RADIUS,
            "tau": 2.0 * PI,
            "slices": slices,
        })
    }

    fn build_fragments(summary: &GroupSummary, title: &str) -> anyhow::Result<ChartFragments> {
        let svg: String = Self::draw_pie_svg(summary, title)?;

        let container: String = format!(
            "<div id=\"{}\" class=\"pie-chart-container\">{}</div>",
            CONTAINER_ID, svg
        );

        let script: String = BEHAVIOR_SCRIPT_TEMPLATE
            .replace("__DATA__", &Self::hover_payload(summary).to_string())
            .replace("__CONTAINER_ID__", CONTAINER_ID);

        Ok(ChartFragments::new(script, container))
    }

    fn build_standalone_document(
        summary: &GroupSummary,
        title: &str,
    ) -> anyhow::Result<String> {
        let fragments: ChartFragments = Self::build_fragments(summary, title)?;

        Ok(STANDALONE_TEMPLATE
            .replace("__TITLE__", title)
            .replace("__CONTAINER__", fragments.container())
            .replace("__SCRIPT__", fragments.script()))
    }
}

#[async_trait]
impl ChartService for ChartServiceImpl {
    async fn render_standalone(
        &self,
        summary: &GroupSummary,
        title: &str,
        output_dir: &Path,
        base_filename: &str,
    ) -> Result<PathBuf, DashboardError> {
        let output_path: PathBuf = output_dir.join(dashboard_file_name(base_filename));

        let summary: GroupSummary = summary.clone();
        let title: String = title.to_string();

        /* plotters drawing is synchronous; keep it off the request thread,
        as with every chart backend in this codebase. */
        let handle = tokio::task::spawn_blocking(move || {
            Self::build_standalone_document(&summary, &title)
        });

        let document: String = handle
            .await
            .map_err(|e| {
                DashboardError::Render(format!(
                    "[ChartServiceImpl->render_standalone] blocking draw task failed: {}",
                    e
                ))
            })?
            .map_err(|e| DashboardError::Render(e.to_string()))?;

        tokio::fs::create_dir_all(output_dir).await?;
        tokio::fs::write(&output_path, document).await?;

        info!("Pie chart dashboard generated successfully: {:?}", output_path);

        Ok(output_path)
    }

    async fn render_fragments(
        &self,
        summary: &GroupSummary,
        title: &str,
    ) -> Result<ChartFragments, DashboardError> {
        let summary: GroupSummary = summary.clone();
        let title: String = title.to_string();

        let handle =
            tokio::task::spawn_blocking(move || Self::build_fragments(&summary, &title));

        handle
            .await
            .map_err(|e| {
                DashboardError::Render(format!(
                    "[ChartServiceImpl->render_fragments] blocking draw task failed: {}",
                    e
                ))
            })?
            .map_err(|e| DashboardError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::group_slice::*;

    fn two_group_summary() -> GroupSummary {
        GroupSummary::new(
            "Category".to_string(),
            3,
            vec![
                GroupSlice::new(
                    "A".to_string(),
                    2,
                    200.0 / 3.0,
                    0.0,
                    4.0 * PI / 3.0,
                    "#332288".to_string(),
                ),
                GroupSlice::new(
                    "B".to_string(),
                    1,
                    100.0 / 3.0,
                    4.0 * PI / 3.0,
                    2.0 * PI,
                    "#117733".to_string(),
                ),
            ],
        )
    }

    #[test]
    fn hex_colors_parse_to_rgb() {
        assert_eq!(
            ChartServiceImpl::parse_hex_color("#332288"),
            RGBColor(0x33, 0x22, 0x88)
        );
        assert_eq!(
            ChartServiceImpl::parse_hex_color("bad"),
            RGBColor(127, 127, 127)
        );
    }

    #[test]
    fn wedge_outline_starts_at_the_center_and_follows_the_arc() {
        let points = ChartServiceImpl::wedge_points(0.0, PI / 2.0);
        assert_eq!(points[0], (PIE_CENTER_X, PIE_CENTER_Y));

        /* First arc point sits at angle 0, to the right of the center. */
        let first_arc = points[1];
        assert_eq!(first_arc.0, PIE_CENTER_X + PIE_RADIUS as i32);
        assert_eq!(first_arc.1, PIE_CENTER_Y);

        /* Last arc point sits at angle PI/2, straight above the center. */
        let last_arc = *points.last().unwrap();
        assert_eq!(last_arc.0, PIE_CENTER_X);
        assert_eq!(last_arc.1, PIE_CENTER_Y - PIE_RADIUS as i32);
    }

    #[test]
    fn standalone_document_is_self_contained() {
        let document =
            ChartServiceImpl::build_standalone_document(&two_group_summary(), "Gender Distribution")
                .unwrap();

        assert!(document.starts_with("<!DOCTYPE html>"));
        assert!(document.contains("<svg"));
        assert!(document.contains(CONTAINER_ID));
        assert!(document.contains("A: 2 (66.67%)"));
        assert!(document.contains("B: 1 (33.33%)"));
    }

    #[test]
    fn fragments_carry_matching_container_and_script() {
        let fragments =
            ChartServiceImpl::build_fragments(&two_group_summary(), "Gender Distribution").unwrap();

        assert!(fragments.container().starts_with(&format!(
            "<div id=\"{}\"",
            CONTAINER_ID
        )));
        assert!(fragments.container().contains("<svg"));
        assert!(fragments.script().starts_with("<script>"));
        assert!(fragments.script().contains(CONTAINER_ID));
        assert!(fragments.script().contains("startAngle"));
        assert!(!fragments.script().contains("__DATA__"));
    }
}
