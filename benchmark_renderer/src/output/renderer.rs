//!
//! The renderer abstraction.
//!

use crate::model::record::Record;
use crate::output::dimension::Dimension;
use crate::output::error::Error as OutputError;

///
/// Turns the records of one benchmark group into an encoded document.
///
/// Implementations keep no state between calls, so one renderer may be
/// used for every group of a run, from any thread.
///
pub trait Renderer: Send + Sync {
    ///
    /// Renders `records`, all belonging to the `group` parent benchmark, into `sink`.
    ///
    /// The sink is only borrowed. Output written before a failure is not rolled back.
    ///
    fn render(
        &self,
        sink: &mut dyn std::io::Write,
        group: &str,
        dimension: Dimension,
        records: &[Record],
    ) -> Result<(), OutputError>;
}
