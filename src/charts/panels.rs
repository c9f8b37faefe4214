use plotters::coord::Shift;
use plotters::element::Pie;
use plotters::prelude::*;

use crate::models::category::{CategoryCounts, EventCategory};

use super::ChartError;

const FONT: &str = "sans-serif";
const X_DESC: &str = "Type of Event";
const Y_DESC: &str = "Number of Events";

/// tab10, indexed by canonical category position.
const PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
];

const TREND_COLOR: RGBColor = RGBColor(0, 0, 255);

pub fn category_color(category: EventCategory) -> RGBColor {
    PALETTE[category.index()]
}

/// One pie wedge. Zero-count categories never produce one.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub category: EventCategory,
    pub count: i64,
    pub percent: f64,
}

pub fn pie_slices(counts: &CategoryCounts) -> Vec<PieSlice> {
    let total = counts.total();
    if total <= 0 {
        return Vec::new();
    }
    counts
        .iter()
        .filter(|&(_, count)| count > 0)
        .map(|(category, count)| PieSlice {
            category,
            count,
            percent: count as f64 * 100.0 / total as f64,
        })
        .collect()
}

pub fn bar_title(label: Option<&str>) -> String {
    match label {
        Some(subject) => format!("Event Participation for Student: {subject}"),
        None => "Event Participation for All Students".to_string(),
    }
}

/// Upper bound of the count axis with 10% headroom.
fn y_upper(counts: &CategoryCounts) -> i64 {
    let max = counts.max();
    let padding = ((max as f64) * 0.1).max(1.0) as i64;
    max.saturating_add(padding)
}

fn category_label(value: &SegmentValue<usize>) -> String {
    match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => EventCategory::ALL
            .get(*i)
            .map(|c| c.as_str().to_string())
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    }
}

pub fn draw_bar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    counts: &CategoryCounts,
    label: Option<&str>,
) -> Result<(), ChartError> {
    let n = EventCategory::ALL.len();
    let mut chart = ChartBuilder::on(area)
        .caption(bar_title(label), (FONT, 26))
        .margin(20)
        .x_label_area_size(110)
        .y_label_area_size(60)
        .build_cartesian_2d((0usize..n - 1).into_segmented(), 0i64..y_upper(counts))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&category_label)
        .x_label_style((FONT, 15).into_font().transform(FontTransform::Rotate90))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .draw()?;

    chart.draw_series(counts.iter().map(|(category, count)| {
        let i = category.index();
        let mut bar = Rectangle::new(
            [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), count)],
            category_color(category).filled(),
        );
        bar.set_margin(0, 0, 12, 12);
        bar
    }))?;

    Ok(())
}

pub fn draw_pie<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    counts: &CategoryCounts,
) -> Result<(), ChartError> {
    let area = area.titled("Event Participation Distribution", (FONT, 26))?;
    let slices = pie_slices(counts);

    let (width, height) = area.dim_in_pixel();
    let center = (width as i32 / 2, height as i32 / 2);
    let radius = f64::from(width.min(height)) * 0.36;

    let sizes: Vec<f64> = slices.iter().map(|s| s.count as f64).collect();
    let colors: Vec<RGBColor> = slices.iter().map(|s| category_color(s.category)).collect();
    let labels: Vec<String> = slices
        .iter()
        .map(|s| format!("{} ({:.1}%)", s.category, s.percent))
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(140.0);
    pie.label_style((FONT, 16).into_font().color(&BLACK));
    pie.label_offset(20.0);
    area.draw(&pie)?;

    Ok(())
}

pub fn draw_line<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    counts: &CategoryCounts,
) -> Result<(), ChartError> {
    let n = EventCategory::ALL.len();
    let mut chart = ChartBuilder::on(area)
        .caption("Event Participation Trend", (FONT, 26))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d((0usize..n - 1).into_segmented(), 0i64..y_upper(counts))?;

    chart
        .configure_mesh()
        .x_labels(n)
        .x_label_formatter(&category_label)
        .x_label_style((FONT, 15))
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .draw()?;

    let points: Vec<(SegmentValue<usize>, i64)> = counts
        .iter()
        .map(|(category, count)| (SegmentValue::CenterOf(category.index()), count))
        .collect();

    chart.draw_series(LineSeries::new(
        points.iter().cloned(),
        ShapeStyle::from(&TREND_COLOR).stroke_width(2),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(point.clone(), 5, TREND_COLOR.filled())),
    )?;

    Ok(())
}
