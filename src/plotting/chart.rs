use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::styles::{ChartStyle, ChartTheme, LIGHT_GREEN, PURPLE, SALMON, SKY_BLUE, TEAL};
use crate::error::{Result, StatsError};
use crate::types::AnalysisResult;

type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

// Helper function to wrap errors
fn wrap_err<E: Display>(e: E) -> StatsError {
    StatsError::Plot(e.to_string())
}

/// Which way the bars grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along the x axis
    Vertical,
    /// Categories along the y axis, first bar on top
    Horizontal,
}

/// One bar chart, ready to render.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub file_name: &'static str,
    pub title: String,
    /// Axis description for the categories
    pub category_desc: &'static str,
    /// Axis description for the counts
    pub value_desc: &'static str,
    pub orientation: Orientation,
    pub color: RGBColor,
    pub size: (u32, u32),
    pub rotate_labels: bool,
    pub bars: Vec<(String, usize)>,
}

impl BarChart {
    fn new(
        file_name: &'static str,
        name: &str,
        range_label: &str,
        bars: Vec<(String, usize)>,
    ) -> Self {
        Self {
            file_name,
            title: format!("{} (Excluding Bots) - {}", name, range_label),
            category_desc: "",
            value_desc: "Number of Commits",
            orientation: Orientation::Vertical,
            color: SKY_BLUE,
            size: (1200, 600),
            rotate_labels: false,
            bars,
        }
    }

    pub fn monthly(result: &AnalysisResult, range_label: &str) -> Self {
        Self {
            category_desc: "Month",
            rotate_labels: true,
            ..Self::new(
                "monthly_commits.png",
                "Commits per Month",
                range_label,
                result.monthly.clone(),
            )
        }
    }

    pub fn daily(result: &AnalysisResult, range_label: &str) -> Self {
        Self {
            category_desc: "Day of Week",
            color: LIGHT_GREEN,
            size: (1000, 600),
            ..Self::new(
                "daily_commits.png",
                "Commits by Day of Week",
                range_label,
                result.daily.clone(),
            )
        }
    }

    pub fn hourly(result: &AnalysisResult, range_label: &str) -> Self {
        let bars = result
            .hourly
            .iter()
            .map(|(hour, count)| (hour.to_string(), *count))
            .collect();
        Self {
            category_desc: "Hour of Day",
            color: SALMON,
            ..Self::new("hourly_commits.png", "Commits by Hour of Day", range_label, bars)
        }
    }

    pub fn top_contributors(result: &AnalysisResult, range_label: &str) -> Self {
        Self {
            category_desc: "Author",
            orientation: Orientation::Horizontal,
            color: PURPLE,
            size: (1200, 800),
            ..Self::new(
                "top_contributors.png",
                "Top 10 Contributors",
                range_label,
                result.top_contributors.clone(),
            )
        }
    }

    pub fn commit_types(result: &AnalysisResult, range_label: &str) -> Self {
        Self {
            category_desc: "First Word in Commit Message",
            value_desc: "Frequency",
            orientation: Orientation::Horizontal,
            color: TEAL,
            size: (1200, 800),
            ..Self::new(
                "commit_types.png",
                "Common Commit Message Types",
                range_label,
                result.commit_types.clone(),
            )
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Upper end of the count axis, with headroom above the tallest bar.
    pub fn value_max(&self) -> usize {
        let max = self.bars.iter().map(|(_, count)| *count).max().unwrap_or(0);
        max + max / 10 + 1
    }

    /// Category labels from the first axis position to the last.
    ///
    /// Horizontal charts count positions from the bottom, so their labels are
    /// reversed to keep the first bar on top.
    pub fn axis_labels(&self) -> Vec<String> {
        let labels = self.bars.iter().map(|(label, _)| label.clone());
        match self.orientation {
            Orientation::Vertical => labels.collect(),
            Orientation::Horizontal => labels.rev().collect(),
        }
    }

    fn category_area_size(&self, style: &ChartStyle) -> u32 {
        match self.orientation {
            Orientation::Vertical if self.rotate_labels => style.label_area_size + 20,
            Orientation::Vertical => style.label_area_size,
            Orientation::Horizontal => {
                let longest = self.bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
                (longest as u32 * 8 + 30).clamp(style.label_area_size, 280)
            }
        }
    }

    /// Render into `dir` and return the written path.
    pub fn render(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(self.file_name);
        let theme = ChartTheme::default();
        let style = ChartStyle::default();
        {
            let root = BitMapBackend::new(&path, self.size).into_drawing_area();
            root.fill(&theme.background_color).map_err(wrap_err)?;
            match self.orientation {
                Orientation::Vertical => self.draw_vertical(&root, &theme, &style)?,
                Orientation::Horizontal => self.draw_horizontal(&root, &theme, &style)?,
            }
            root.present().map_err(wrap_err)?;
        }
        Ok(path)
    }

    fn draw_vertical(&self, root: &Area, theme: &ChartTheme, style: &ChartStyle) -> Result<()> {
        let n = self.bars.len();
        let labels = self.axis_labels();
        let label_formatter = |v: &SegmentValue<usize>| segment_label(&labels, v);

        let mut chart = ChartBuilder::on(root)
            .caption(
                &self.title,
                ("sans-serif", style.caption_size).into_font().color(&theme.text_color),
            )
            .margin(style.margin)
            .x_label_area_size(self.category_area_size(style))
            .y_label_area_size(style.label_area_size)
            .build_cartesian_2d((0..n).into_segmented(), 0usize..self.value_max())
            .map_err(wrap_err)?;

        let mut mesh = chart.configure_mesh();
        mesh.disable_x_mesh()
            .bold_line_style(theme.grid_color)
            .axis_style(theme.axis_color)
            .x_labels(n)
            .x_label_formatter(&label_formatter)
            .x_desc(self.category_desc)
            .y_desc(self.value_desc)
            .label_style(("sans-serif", style.font_size).into_font().color(&theme.text_color));
        if self.rotate_labels {
            mesh.x_label_style(
                ("sans-serif", style.font_size)
                    .into_font()
                    .color(&theme.text_color)
                    .transform(FontTransform::Rotate90)
                    .pos(Pos::new(HPos::Right, VPos::Center)),
            );
        }
        mesh.draw().map_err(wrap_err)?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(self.color.filled())
                    .margin(style.bar_margin)
                    .data(self.bars.iter().enumerate().map(|(i, (_, count))| (i, *count))),
            )
            .map_err(wrap_err)?;

        Ok(())
    }

    fn draw_horizontal(&self, root: &Area, theme: &ChartTheme, style: &ChartStyle) -> Result<()> {
        let n = self.bars.len();
        let labels = self.axis_labels();
        let label_formatter = |v: &SegmentValue<usize>| segment_label(&labels, v);

        let mut chart = ChartBuilder::on(root)
            .caption(
                &self.title,
                ("sans-serif", style.caption_size).into_font().color(&theme.text_color),
            )
            .margin(style.margin)
            .x_label_area_size(style.label_area_size)
            .y_label_area_size(self.category_area_size(style))
            .build_cartesian_2d(0usize..self.value_max(), (0..n).into_segmented())
            .map_err(wrap_err)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .bold_line_style(theme.grid_color)
            .axis_style(theme.axis_color)
            .y_labels(n)
            .y_label_formatter(&label_formatter)
            .x_desc(self.value_desc)
            .y_desc(self.category_desc)
            .label_style(("sans-serif", style.font_size).into_font().color(&theme.text_color))
            .draw()
            .map_err(wrap_err)?;

        chart
            .draw_series(
                Histogram::horizontal(&chart)
                    .style(self.color.filled())
                    .margin(style.bar_margin)
                    .data(
                        self.bars
                            .iter()
                            .enumerate()
                            .map(|(i, (_, count))| (n - 1 - i, *count)),
                    ),
            )
            .map_err(wrap_err)?;

        Ok(())
    }
}

fn segment_label(labels: &[String], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(i) => labels.get(*i).cloned().unwrap_or_default(),
        _ => String::new(),
    }
}

/// The five charts for one analysis, in output order.
pub fn charts_for(result: &AnalysisResult, range_label: &str) -> Vec<BarChart> {
    vec![
        BarChart::monthly(result, range_label),
        BarChart::daily(result, range_label),
        BarChart::hourly(result, range_label),
        BarChart::top_contributors(result, range_label),
        BarChart::commit_types(result, range_label),
    ]
}

/// Write every non-empty chart into `dir`, creating it if needed.
pub fn render_charts(result: &AnalysisResult, range_label: &str, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    for chart in charts_for(result, range_label) {
        if chart.is_empty() {
            warn!(chart = chart.file_name, "no data to plot, skipping chart");
            continue;
        }
        let path = chart.render(dir)?;
        info!(path = %path.display(), "chart written");
        written.push(path);
    }

    Ok(written)
}
