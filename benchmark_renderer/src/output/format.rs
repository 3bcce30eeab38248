//!
//! Output benchmark format.
//!

use crate::output::chart::ChartRenderer;
use crate::output::csv::CsvRenderer;
use crate::output::error::Error as OutputError;
use crate::output::json::JsonRenderer;
use crate::output::renderer::Renderer;
use crate::output::xml::XmlRenderer;

///
/// Output benchmark format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// Raster bar chart.
    #[default]
    Png,
    /// Vector bar chart.
    Svg,
    /// JSON document with the group name and its records.
    Json,
    /// One CSV row per record.
    Csv,
    /// XML document with the group name and its records.
    Xml,
}

impl Format {
    /// Every format, in declaration order.
    pub const ALL: [Self; 5] = [Self::Png, Self::Svg, Self::Json, Self::Csv, Self::Xml];

    ///
    /// Returns the canonical name accepted by [`std::str::FromStr`].
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Svg => "SVG",
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Xml => "XML",
        }
    }

    ///
    /// Returns the file extension without the leading dot.
    ///
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xml => "xml",
        }
    }

    ///
    /// Returns the file suffix, including the leading dot.
    ///
    pub fn file_extension(&self) -> String {
        format!(".{}", self.extension())
    }

    ///
    /// Whether the format is a chart.
    ///
    pub fn is_chart(&self) -> bool {
        matches!(self, Self::Png | Self::Svg)
    }

    ///
    /// Creates the renderer for this format.
    ///
    /// The title overrides the group name as the chart title and is ignored
    /// by the structured formats.
    ///
    pub fn renderer(&self, title: Option<String>) -> Box<dyn Renderer> {
        match self {
            Self::Png | Self::Svg => Box::new(ChartRenderer::new(*self, title)),
            Self::Json => Box::new(JsonRenderer),
            Self::Csv => Box::new(CsvRenderer),
            Self::Xml => Box::new(XmlRenderer),
        }
    }
}

impl std::str::FromStr for Format {
    type Err = OutputError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == string)
            .ok_or_else(|| OutputError::UnknownFormat(string.to_owned()))
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
