//!
//! The benchmark renderer library.
//!
//! Reads `go test -bench` output, groups the benchmark lines by their parent
//! benchmark, and renders each group as a bar chart or a structured document.
//!

pub mod input;
pub mod model;
pub mod output;

pub use crate::input::error::Error as InputError;
pub use crate::input::line::Error as LineError;
pub use crate::input::Input;
pub use crate::model::record::measured::Measured;
pub use crate::model::record::Record;
pub use crate::model::set::BenchmarkSet;
pub use crate::output::chart::bar::bar_values;
pub use crate::output::chart::bar::BarChart;
pub use crate::output::chart::bar::BarValue;
pub use crate::output::chart::ChartRenderer;
pub use crate::output::csv::CsvRenderer;
pub use crate::output::dimension::Dimension;
pub use crate::output::error::Error as OutputError;
pub use crate::output::file::correct_extension;
pub use crate::output::file::output_path;
pub use crate::output::file::File as OutputFile;
pub use crate::output::format::Format;
pub use crate::output::json::JsonRenderer;
pub use crate::output::renderer::Renderer;
pub use crate::output::xml::XmlRenderer;
pub use crate::output::GroupResult;
pub use crate::output::Output;
