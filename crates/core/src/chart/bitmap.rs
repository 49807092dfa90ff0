//! PNG chart rendering with `plotters`.
//!
//! Uses the bitmap backend only, so charts render in headless environments
//! (CI, containers) without a window system.

use std::fs;
use std::ops::Range;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use super::config::ChartStyle;
use super::error::ChartError;
use super::traits::ChartRenderer;
use super::types::{BarChart, BoxPlotChart, Chart, LineChart, Orientation, StackedHistogram};

type Result<T> = core::result::Result<T, ChartError>;
type Area<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

const FONT: &str = "sans-serif";

/// Horizontal padding, in pixels, between neighbouring bars and boxes.
const BAR_GAP: u32 = 8;

/// Widest axis a chart may span, in years or categories.
const MAX_AXIS_SPAN: i64 = 5000;

fn drawing_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::Drawing(e.to_string())
}

fn config_error(e: impl std::fmt::Display) -> ChartError {
    ChartError::ChartConfig(e.to_string())
}

/// Upper axis bound leaving headroom above the largest value.
fn axis_max(max: f64) -> f64 {
    if max <= 0.0 {
        1.0
    } else {
        max * 1.1
    }
}

/// Year axis from `first - pad` up to and excluding `last + 1`.
///
/// Rejects spans wider than [`MAX_AXIS_SPAN`] and bounds outside `i32`.
fn year_axis(first: i32, last: i32, pad: i32) -> Result<Range<i32>> {
    let start = i64::from(first) - i64::from(pad);
    let end = i64::from(last) + 1;
    if end - start > MAX_AXIS_SPAN {
        return Err(ChartError::InvalidData(format!(
            "year axis {}..={} spans more than {} years",
            first, last, MAX_AXIS_SPAN
        )));
    }

    match (i32::try_from(start), i32::try_from(end)) {
        (Ok(start), Ok(end)) => Ok(start..end),
        _ => Err(ChartError::InvalidData(format!(
            "year axis {}..={} is out of range",
            first, last
        ))),
    }
}

/// `(min, max)` of the given years, `(0, 0)` when there are none.
fn year_bounds(years: impl Iterator<Item = i32> + Clone) -> (i32, i32) {
    (
        years.clone().min().unwrap_or(0),
        years.max().unwrap_or(0),
    )
}

/// Rejects category axes with more than [`MAX_AXIS_SPAN`] segments.
fn category_axis(count: usize) -> Result<Range<usize>> {
    if count as i64 > MAX_AXIS_SPAN {
        return Err(ChartError::InvalidData(format!(
            "{} categories exceed the limit of {}",
            count, MAX_AXIS_SPAN
        )));
    }
    Ok(0..count)
}

/// Check every axis of `chart` before anything is drawn.
fn check_axes(chart: &Chart) -> Result<()> {
    match chart {
        Chart::Bar(bar) => category_axis(bar.bars.len()).map(drop),
        Chart::Line(line) => {
            let (first, last) = year_bounds(line.points.iter().map(|(x, _)| *x));
            year_axis(first, last, 1).map(drop)
        }
        Chart::StackedHistogram(histogram) => {
            let (first, last) = year_bounds(histogram.bins.iter().map(|(year, _)| *year));
            year_axis(first, last, 0).map(drop)
        }
        Chart::BoxPlot(boxes) => category_axis(boxes.groups.len()).map(drop),
    }
}

/// Category name at a segmented axis position, blank between segments.
fn segment_label(names: &[&str], value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(index) => names.get(*index).copied().unwrap_or_default().to_string(),
        _ => String::new(),
    }
}

/// Writes charts as PNG files into an output directory.
#[derive(Debug, Clone)]
pub struct BitmapRenderer {
    output_dir: PathBuf,
    style: ChartStyle,
}

impl BitmapRenderer {
    pub fn new(output_dir: impl Into<PathBuf>, style: ChartStyle) -> Self {
        Self {
            output_dir: output_dir.into(),
            style,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    fn output_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", stem))
    }

    fn caption_font(&self) -> (&'static str, u32) {
        (FONT, self.style.caption_font_size)
    }

    fn label_font(&self) -> (&'static str, u32) {
        (FONT, self.style.label_font_size)
    }

    fn draw_bar(&self, root: &Area<'_>, chart: &BarChart) -> Result<()> {
        match chart.orientation {
            Orientation::Vertical => self.draw_vertical_bar(root, chart),
            Orientation::Horizontal => self.draw_horizontal_bar(root, chart),
        }
    }

    fn draw_vertical_bar(&self, root: &Area<'_>, chart: &BarChart) -> Result<()> {
        let names: Vec<&str> = chart.bars.iter().map(|(name, _)| name.as_str()).collect();
        let count = names.len();
        let max = chart.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.labels.title, self.caption_font())
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(category_axis(count)?.into_segmented(), 0f64..axis_max(max))
            .map_err(config_error)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(count + 1)
            .x_label_formatter(&|value| segment_label(&names, value))
            .x_desc(chart.labels.x_label.as_str())
            .y_desc(chart.labels.y_label.as_str())
            .label_style(self.label_font())
            .axis_desc_style(self.label_font())
            .draw()
            .map_err(drawing_error)?;

        let palette = self.style.palette;
        ctx.draw_series(chart.bars.iter().enumerate().map(|(index, (_, value))| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(index), 0.0),
                    (SegmentValue::Exact(index + 1), *value),
                ],
                palette.color(index).filled(),
            );
            bar.set_margin(0, 0, BAR_GAP, BAR_GAP);
            bar
        }))
        .map_err(drawing_error)?;

        Ok(())
    }

    fn draw_horizontal_bar(&self, root: &Area<'_>, chart: &BarChart) -> Result<()> {
        // Segment 0 sits at the bottom; reverse so the first bar is on top.
        let names: Vec<&str> = chart
            .bars
            .iter()
            .rev()
            .map(|(name, _)| name.as_str())
            .collect();
        let count = names.len();
        let max = chart.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max);

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.labels.title, self.caption_font())
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(240)
            .build_cartesian_2d(0f64..axis_max(max), category_axis(count)?.into_segmented())
            .map_err(config_error)?;

        ctx.configure_mesh()
            .disable_y_mesh()
            .y_labels(count + 1)
            .y_label_formatter(&|value| segment_label(&names, value))
            .x_desc(chart.labels.x_label.as_str())
            .y_desc(chart.labels.y_label.as_str())
            .label_style(self.label_font())
            .axis_desc_style(self.label_font())
            .draw()
            .map_err(drawing_error)?;

        let palette = self.style.palette;
        ctx.draw_series(chart.bars.iter().enumerate().map(|(index, (_, value))| {
            let slot = count - 1 - index;
            let mut bar = Rectangle::new(
                [
                    (0.0, SegmentValue::Exact(slot)),
                    (*value, SegmentValue::Exact(slot + 1)),
                ],
                palette.color(index).filled(),
            );
            bar.set_margin(BAR_GAP / 2, BAR_GAP / 2, 0, 0);
            bar
        }))
        .map_err(drawing_error)?;

        Ok(())
    }

    fn draw_line(&self, root: &Area<'_>, chart: &LineChart) -> Result<()> {
        let (first, last) = year_bounds(chart.points.iter().map(|(x, _)| *x));
        let years = year_axis(first, last, 1)?;
        let max = chart.points.iter().map(|(_, y)| *y).fold(0.0, f64::max);

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.labels.title, self.caption_font())
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(years, 0f64..axis_max(max))
            .map_err(config_error)?;

        ctx.configure_mesh()
            .x_desc(chart.labels.x_label.as_str())
            .y_desc(chart.labels.y_label.as_str())
            .label_style(self.label_font())
            .axis_desc_style(self.label_font())
            .draw()
            .map_err(drawing_error)?;

        let color = self.style.palette.color(0);
        ctx.draw_series(LineSeries::new(chart.points.iter().copied(), &color))
            .map_err(drawing_error)?;
        ctx.draw_series(
            chart
                .points
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), 4, color.filled())),
        )
        .map_err(drawing_error)?;

        Ok(())
    }

    fn draw_stacked_histogram(&self, root: &Area<'_>, chart: &StackedHistogram) -> Result<()> {
        let (first, last) = year_bounds(chart.bins.iter().map(|(year, _)| *year));
        let years = year_axis(first, last, 0)?;
        let max = chart
            .bins
            .iter()
            .map(|(_, counts)| counts.iter().sum::<usize>())
            .max()
            .unwrap_or(0) as f64;

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.labels.title, self.caption_font())
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(years.into_segmented(), 0f64..axis_max(max))
            .map_err(config_error)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_label_formatter(&|value| match value {
                SegmentValue::CenterOf(year) => year.to_string(),
                _ => String::new(),
            })
            .x_desc(chart.labels.x_label.as_str())
            .y_desc(chart.labels.y_label.as_str())
            .label_style(self.label_font())
            .axis_desc_style(self.label_font())
            .draw()
            .map_err(drawing_error)?;

        for (series_index, name) in chart.series.iter().enumerate() {
            let color = self.style.palette.color(series_index);
            let segments = chart.bins.iter().map(|(year, counts)| {
                let bottom: usize = counts.iter().take(series_index).sum();
                let top = bottom + counts.get(series_index).copied().unwrap_or(0);
                let mut bar = Rectangle::new(
                    [
                        (SegmentValue::Exact(*year), bottom as f64),
                        (SegmentValue::Exact(*year + 1), top as f64),
                    ],
                    color.filled(),
                );
                bar.set_margin(0, 0, 1, 1);
                bar
            });

            ctx.draw_series(segments)
                .map_err(drawing_error)?
                .label(name.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
        }

        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(drawing_error)?;

        Ok(())
    }

    fn draw_box_plot(&self, root: &Area<'_>, chart: &BoxPlotChart) -> Result<()> {
        let names: Vec<&str> = chart.groups.iter().map(|(name, _)| name.as_str()).collect();
        let count = names.len();
        let max = chart
            .groups
            .iter()
            .map(|(_, stats)| stats.max)
            .fold(0.0, f64::max);

        let mut ctx = ChartBuilder::on(root)
            .caption(&chart.labels.title, self.caption_font())
            .margin(20)
            .x_label_area_size(60)
            .y_label_area_size(80)
            .build_cartesian_2d(category_axis(count)?.into_segmented(), 0f64..axis_max(max))
            .map_err(config_error)?;

        ctx.configure_mesh()
            .disable_x_mesh()
            .x_labels(count + 1)
            .x_label_formatter(&|value| segment_label(&names, value))
            .x_desc(chart.labels.x_label.as_str())
            .y_desc(chart.labels.y_label.as_str())
            .label_style(self.label_font())
            .axis_desc_style(self.label_font())
            .draw()
            .map_err(drawing_error)?;

        let fill = self.style.palette.color(0);
        let outline = ShapeStyle::from(&BLACK).stroke_width(1);

        for (index, (_, stats)) in chart.groups.iter().enumerate() {
            let left = SegmentValue::Exact(index);
            let right = SegmentValue::Exact(index + 1);
            let center = SegmentValue::CenterOf(index);

            let mut body = Rectangle::new(
                [(left.clone(), stats.q1), (right.clone(), stats.q3)],
                fill.filled(),
            );
            body.set_margin(0, 0, BAR_GAP, BAR_GAP);

            ctx.draw_series(std::iter::once(body))
                .map_err(drawing_error)?;
            ctx.draw_series([
                PathElement::new(
                    vec![(center.clone(), stats.min), (center.clone(), stats.q1)],
                    outline,
                ),
                PathElement::new(
                    vec![(center.clone(), stats.q3), (center, stats.max)],
                    outline,
                ),
                PathElement::new(vec![(left, stats.median), (right, stats.median)], outline),
            ])
            .map_err(drawing_error)?;
        }

        Ok(())
    }
}

impl ChartRenderer for BitmapRenderer {
    fn name(&self) -> &str {
        "bitmap"
    }

    fn render(&self, chart: &Chart) -> Result<PathBuf> {
        if chart.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "chart '{}' has no data",
                chart.stem()
            )));
        }
        check_axes(chart)?;

        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_path(chart.stem());

        {
            let root = BitMapBackend::new(&path, (self.style.width, self.style.height))
                .into_drawing_area();
            root.fill(&WHITE)
                .map_err(|e| ChartError::DrawingArea(e.to_string()))?;

            match chart {
                Chart::Bar(bar) => self.draw_bar(&root, bar)?,
                Chart::Line(line) => self.draw_line(&root, line)?,
                Chart::StackedHistogram(histogram) => self.draw_stacked_histogram(&root, histogram)?,
                Chart::BoxPlot(boxes) => self.draw_box_plot(&root, boxes)?,
            }

            root.present().map_err(drawing_error)?;
        }

        debug!("Rendered chart {:?}", path);
        Ok(path)
    }
}
