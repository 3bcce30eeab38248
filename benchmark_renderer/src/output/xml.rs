//!
//! XML output.
//!

use crate::model::record::Record;
use crate::output::dimension::Dimension;
use crate::output::document::Document;
use crate::output::error::Error as OutputError;
use crate::output::renderer::Renderer;

///
/// Serializes a benchmark group and all of its records as XML, one
/// `Benchmarks` element per record.
///
/// The dimension is ignored, and an empty group is a valid document.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlRenderer;

impl Renderer for XmlRenderer {
    fn render(
        &self,
        sink: &mut dyn std::io::Write,
        group: &str,
        _dimension: Dimension,
        records: &[Record],
    ) -> Result<(), OutputError> {
        let content = quick_xml::se::to_string(&Document::new(group, records))?;
        sink.write_all(content.as_bytes())?;
        Ok(())
    }
}
