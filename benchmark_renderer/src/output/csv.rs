//!
//! CSV output.
//!

use crate::model::record::Record;
use crate::output::dimension::Dimension;
use crate::output::error::Error as OutputError;
use crate::output::renderer::Renderer;

/// The header row.
pub const HEADER: [&str; 8] = [
    "Name",
    "N",
    "NsPerOp",
    "AllocedBytesPerOp",
    "AllocsPerOp",
    "MBPerS",
    "Measured",
    "Ord",
];

///
/// Writes a header row and one row per record, in input order.
///
/// Floats are written with 12 decimal places. The dimension is ignored.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvRenderer;

impl CsvRenderer {
    ///
    /// Formats a record as a CSV row.
    ///
    fn row(record: &Record) -> [String; 8] {
        [
            record.name.clone(),
            record.iterations.to_string(),
            format!("{:.12}", record.ns_per_op),
            record.alloced_bytes_per_op.to_string(),
            record.allocs_per_op.to_string(),
            format!("{:.12}", record.mb_per_second),
            record.measured.bits().to_string(),
            record.ordinal.to_string(),
        ]
    }
}

impl Renderer for CsvRenderer {
    fn render(
        &self,
        sink: &mut dyn std::io::Write,
        _group: &str,
        _dimension: Dimension,
        records: &[Record],
    ) -> Result<(), OutputError> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(HEADER)?;
        for record in records.iter() {
            writer.write_record(Self::row(record))?;
        }
        writer.flush()?;
        Ok(())
    }
}
