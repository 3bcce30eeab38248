//!
//! Bar chart output, as PNG or SVG.
//!

pub mod bar;

use std::sync::OnceLock;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontStyle;

use crate::model::record::Record;
use crate::output::dimension::Dimension;
use crate::output::error::Error as OutputError;
use crate::output::format::Format;
use crate::output::renderer::Renderer;

use self::bar::BarChart;

/// The chart height, in pixels.
pub const HEIGHT: u32 = 512;
/// The width of a single bar, in pixels.
pub const BAR_WIDTH: u32 = 60;
/// The gap between neighboring bars, in pixels.
pub const BAR_GAP: u32 = 20;
/// The narrowest chart, in pixels.
pub const MIN_WIDTH: u32 = 320;

/// The font family every chart text is drawn with.
const FONT_FAMILY: &str = "sans-serif";
/// The embedded chart font, so rendering does not depend on system fonts.
static FONT_DATA: &[u8] = include_bytes!("../../../assets/DejaVuSans.ttf");
/// The outcome of registering the embedded font with plotters.
static FONT: OnceLock<Result<(), String>> = OnceLock::new();

const MARGIN: u32 = 20;
const TOP_PADDING: u32 = 40;
const X_LABEL_AREA_SIZE: u32 = 40;
const Y_LABEL_AREA_SIZE: u32 = 80;
const TITLE_FONT_SIZE: u32 = 24;
const LABEL_FONT_SIZE: u32 = 14;
const BAR_COLOR: RGBColor = RGBColor(66, 133, 244);
/// Headroom above the tallest bar.
const Y_RANGE_SCALE: f64 = 1.1;

///
/// Bar chart output, as PNG or SVG.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartRenderer {
    /// The image encoding.
    pub format: Format,
    /// The title overriding the group name.
    pub title: Option<String>,
    /// The chart height, in pixels.
    pub height: u32,
    /// The width of a single bar, in pixels.
    pub bar_width: u32,
}

impl ChartRenderer {
    ///
    /// A shortcut constructor with the default chart geometry.
    ///
    pub fn new(format: Format, title: Option<String>) -> Self {
        Self {
            format,
            title: title.filter(|title| !title.is_empty()),
            height: HEIGHT,
            bar_width: BAR_WIDTH,
        }
    }

    ///
    /// Returns the image width needed to fit `bar_count` bars.
    ///
    pub fn width(&self, bar_count: usize) -> u32 {
        let bars = (bar_count as u32).saturating_mul(self.bar_width + BAR_GAP);
        (2 * MARGIN + Y_LABEL_AREA_SIZE)
            .saturating_add(bars)
            .max(MIN_WIDTH)
    }

    ///
    /// Draws the chart as an SVG document.
    ///
    pub fn to_svg(&self, chart: &BarChart) -> Result<String, OutputError> {
        let size = (self.width(chart.bars.len()), self.height);
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
            self.draw(&root, chart)?;
        }
        Ok(svg)
    }

    ///
    /// Draws the chart into an RGB buffer and encodes it as PNG.
    ///
    pub fn to_png(&self, chart: &BarChart) -> Result<Vec<u8>, OutputError> {
        use image::ImageEncoder;

        let (width, height) = (self.width(chart.bars.len()), self.height);
        let mut pixels = vec![0u8; (width as usize) * (height as usize) * 3];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            self.draw(&root, chart)?;
        }

        let mut png = Vec::new();
        image::codecs::png::PngEncoder::new(&mut png).write_image(
            &pixels,
            width,
            height,
            image::ExtendedColorType::Rgb8,
        )?;
        Ok(png)
    }

    ///
    /// Draws the chart onto any plotters backend.
    ///
    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>, chart: &BarChart) -> Result<(), OutputError>
    where
        DB: DrawingBackend,
    {
        register_font()?;
        root.fill(&WHITE).map_err(drawing_error)?;

        let bar_count = chart.bars.len();
        let y_max = match chart.max_value() {
            max if max > 0.0 => max * Y_RANGE_SCALE,
            _ => 1.0,
        };
        let gap = BAR_GAP / 2;

        let mut context = ChartBuilder::on(root)
            .caption(chart.title.as_str(), (FONT_FAMILY, TITLE_FONT_SIZE))
            .margin(MARGIN)
            .margin_top(TOP_PADDING)
            .x_label_area_size(X_LABEL_AREA_SIZE)
            .y_label_area_size(Y_LABEL_AREA_SIZE)
            .build_cartesian_2d((0..bar_count).into_segmented(), 0.0..y_max)
            .map_err(drawing_error)?;

        context
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(bar_count + 1)
            .x_label_formatter(&|segment| match segment {
                SegmentValue::CenterOf(index) => chart
                    .bars
                    .get(*index)
                    .map(|bar| bar.label.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .y_desc(chart.y_axis)
            .label_style((FONT_FAMILY, LABEL_FONT_SIZE))
            .draw()
            .map_err(drawing_error)?;

        context
            .draw_series(chart.bars.iter().enumerate().map(|(index, bar)| {
                let mut rectangle = Rectangle::new(
                    [
                        (SegmentValue::Exact(index), 0.0),
                        (SegmentValue::Exact(index + 1), bar.value),
                    ],
                    BAR_COLOR.filled(),
                );
                rectangle.set_margin(0, 0, gap, gap);
                rectangle
            }))
            .map_err(drawing_error)?;

        root.present().map_err(drawing_error)?;
        Ok(())
    }
}

impl Renderer for ChartRenderer {
    fn render(
        &self,
        sink: &mut dyn std::io::Write,
        group: &str,
        dimension: Dimension,
        records: &[Record],
    ) -> Result<(), OutputError> {
        let title = self.title.as_deref().unwrap_or(group);
        let chart = BarChart::new(title, dimension, records)?;

        let bytes = match self.format {
            Format::Png => self.to_png(&chart)?,
            Format::Svg => self.to_svg(&chart)?.into_bytes(),
            format => return Err(OutputError::UnsupportedRenderFormat(format)),
        };
        sink.write_all(bytes.as_slice())?;
        Ok(())
    }
}

///
/// Registers the embedded font under the chart font family, once per process.
///
fn register_font() -> Result<(), OutputError> {
    FONT.get_or_init(|| {
        plotters::style::register_font(FONT_FAMILY, FontStyle::Normal, FONT_DATA)
            .map_err(|_| "invalid font data".to_owned())
    })
    .clone()
    .map_err(OutputError::Font)
}

///
/// Converts a plotters error, which borrows its backend's error type, into an owned one.
///
fn drawing_error<E>(error: E) -> OutputError
where
    E: std::fmt::Display,
{
    OutputError::Drawing(error.to_string())
}
