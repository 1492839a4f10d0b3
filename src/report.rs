//! Box-and-whisker chart rendering
//!
//! One box per non-empty sample group, annotated with the group mean and
//! standard deviation, written to a bitmap file that is overwritten on each
//! run. Ragged groups (fewer samples than requested) are still plotted;
//! each box only depends on its own samples.

use crate::error::{AppError, Result};
use crate::models::RunResults;
use crate::stats::SummaryStatistics;
use plotters::prelude::*;
use std::path::PathBuf;

const CHART_WIDTH: u32 = 960;
const CHART_HEIGHT: u32 = 640;
const CHART_TITLE: &str = "Comparison of Performance Metrics";

/// Renders collected run results to a chart file
pub struct ReportRenderer {
    output_path: PathBuf,
}

struct PlotGroup {
    label: String,
    quartiles: Quartiles,
    stats: SummaryStatistics,
}

impl ReportRenderer {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Render one box per non-empty group.
    ///
    /// Returns an error if there is nothing to plot at all; a blank chart
    /// would hide the fact that every trial failed.
    pub fn render(&self, results: &RunResults) -> Result<()> {
        let plotted: Vec<PlotGroup> = results
            .groups
            .iter()
            .filter_map(|group| {
                let seconds = group.seconds();
                let stats = SummaryStatistics::from_samples(&seconds)?;
                Some(PlotGroup {
                    label: group.display_label(),
                    quartiles: Quartiles::new(&seconds),
                    stats,
                })
            })
            .collect();

        if plotted.is_empty() {
            return Err(AppError::render(
                "no samples were collected; nothing to plot",
            ));
        }

        let y_max = plotted
            .iter()
            .map(|p| p.stats.max)
            .fold(0.0_f64, f64::max)
            .max(f64::MIN_POSITIVE) as f32
            * 1.2;
        let labels: Vec<String> = plotted.iter().map(|p| p.label.clone()).collect();

        let root =
            BitMapBackend::new(&self.output_path, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| AppError::render(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(CHART_TITLE, ("sans-serif", 28))
            .margin(24)
            .x_label_area_size(48)
            .y_label_area_size(64)
            .build_cartesian_2d(labels[..].into_segmented(), 0f32..y_max)
            .map_err(|e| AppError::render(e.to_string()))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc("Method")
            .y_desc("Time (seconds)")
            .axis_desc_style(("sans-serif", 16))
            .draw()
            .map_err(|e| AppError::render(e.to_string()))?;

        chart
            .draw_series(plotted.iter().map(|p| {
                Boxplot::new_vertical(SegmentValue::CenterOf(&p.label), &p.quartiles)
                    .width(28)
                    .whisker_width(0.5)
            }))
            .map_err(|e| AppError::render(e.to_string()))?;

        // Mean / standard deviation annotation above each box
        let annotation_font = ("sans-serif", 13).into_font().color(&BLUE);
        for p in plotted.iter() {
            chart
                .plotting_area()
                .draw(&Text::new(
                    format!("mean: {:.2}  std: {:.2}", p.stats.mean, p.stats.std_dev),
                    (
                        SegmentValue::CenterOf(&p.label),
                        p.stats.max as f32 + y_max * 0.03,
                    ),
                    annotation_font.clone(),
                ))
                .map_err(|e| AppError::render(e.to_string()))?;
        }

        root.present()
            .map_err(|e| AppError::render(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FetchMethod, SampleGroup};
    use tempfile::TempDir;

    fn group(method: FetchMethod, label: &str, requested: u32, samples: &[f64]) -> SampleGroup {
        let mut group = SampleGroup::new(method, label, requested);
        for s in samples {
            group.push(crate::models::DurationSample::new(*s, method, label));
        }
        group
    }

    #[test]
    fn test_render_writes_chart_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boxplot.png");
        let results = RunResults::new(
            vec![
                group(FetchMethod::Http, "API", 3, &[0.05, 0.07, 0.06]),
                group(FetchMethod::Browser, "API", 3, &[5.1, 5.3, 5.2]),
            ],
            Vec::new(),
        );

        ReportRenderer::new(path.clone()).render(&results).unwrap();
        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_ragged_groups_still_render() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boxplot.png");
        let results = RunResults::new(
            vec![
                group(FetchMethod::Http, "API", 3, &[0.05, 0.07]),
                group(FetchMethod::Browser, "API", 3, &[5.1, 5.3, 5.2]),
            ],
            Vec::new(),
        );

        ReportRenderer::new(path.clone()).render(&results).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_empty_groups_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boxplot.png");
        let results = RunResults::new(
            vec![
                group(FetchMethod::Http, "API", 2, &[0.05, 0.07]),
                group(FetchMethod::Browser, "API", 2, &[]),
            ],
            Vec::new(),
        );

        ReportRenderer::new(path.clone()).render(&results).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_nothing_to_plot_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("boxplot.png");
        let results = RunResults::new(
            vec![group(FetchMethod::Http, "API", 2, &[])],
            Vec::new(),
        );

        let err = ReportRenderer::new(path.clone()).render(&results).unwrap_err();
        assert_eq!(err.category(), "RENDER");
        assert!(!path.exists());
    }
}
