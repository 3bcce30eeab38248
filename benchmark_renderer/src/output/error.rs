//!
//! Benchmark rendering error.
//!

use crate::output::format::Format;

///
/// Benchmark rendering error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The dimension string is not one of the canonical names.
    #[error("Unknown render dimension `{0}`. Supported dimensions: NS_PER_OP, BYTES_PER_OP, ALLOCS_PER_OP")]
    UnknownDimension(String),
    /// The format string is not one of the canonical names.
    #[error("Unknown render format `{0}`. Supported formats: PNG, SVG, JSON, CSV, XML")]
    UnknownFormat(String),
    /// A chart was requested for an empty group.
    #[error("Could not render benchmarks: no benchmarks provided")]
    NoRecordsProvided,
    /// The renderer cannot encode the requested format.
    #[error("Render format `{0}` is not supported by this renderer")]
    UnsupportedRenderFormat(Format),
    /// Error writing to the output sink.
    #[error("Writing rendered benchmarks: {0}")]
    Writing(#[from] std::io::Error),
    /// The embedded chart font could not be loaded.
    #[error("Loading chart font: {0}")]
    Font(String),
    /// Error drawing a chart.
    #[error("Drawing chart: {0}")]
    Drawing(String),
    /// Error encoding a raster chart.
    #[error("Encoding PNG: {0}")]
    Png(#[from] image::ImageError),
    /// Error serializing JSON.
    #[error("Serializing JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Error serializing XML.
    #[error("Serializing XML: {0}")]
    Xml(#[from] quick_xml::DeError),
    /// Error writing CSV.
    #[error("Writing CSV: {0}")]
    Csv(#[from] csv::Error),
}
