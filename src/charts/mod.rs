//! Composite participation chart: bar, pie and line panels stacked in one PNG.

pub mod panels;

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;

use crate::models::category::CategoryCounts;

pub use panels::{PieSlice, pie_slices};

pub const WIDTH: u32 = 1000;
pub const HEIGHT: u32 = 1500;

#[derive(Debug)]
pub enum ChartError {
    Draw(String),
    Encode(String),
}

impl fmt::Display for ChartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartError::Draw(e) => write!(f, "Chart drawing failed: {e}"),
            ChartError::Encode(e) => write!(f, "Chart encoding failed: {e}"),
        }
    }
}

impl std::error::Error for ChartError {}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ChartError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ChartError::Draw(e.to_string())
    }
}

impl From<png::EncodingError> for ChartError {
    fn from(e: png::EncodingError) -> Self {
        ChartError::Encode(e.to_string())
    }
}

/// Render the composite chart as PNG bytes.
/// Returns `Ok(None)` when every category is zero.
pub fn render_png(counts: &CategoryCounts, label: Option<&str>) -> Result<Option<Vec<u8>>, ChartError> {
    if counts.is_all_zero() {
        log::info!("All category counts are zero, skipping chart render");
        return Ok(None);
    }

    let mut pixels = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let panels = root.split_evenly((3, 1));
        panels::draw_bar(&panels[0], counts, label)?;
        panels::draw_pie(&panels[1], counts)?;
        panels::draw_line(&panels[2], counts)?;

        root.present()?;
    }

    encode_png(&pixels, WIDTH, HEIGHT).map(Some)
}

/// Render the composite chart as base64 text, ready for a `data:image/png` URI.
pub fn render(counts: &CategoryCounts, label: Option<&str>) -> Result<Option<String>, ChartError> {
    Ok(render_png(counts, label)?.map(|png| BASE64.encode(png)))
}

fn encode_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>, ChartError> {
    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(rgb)?;
        writer.finish()?;
    }
    Ok(buffer)
}
