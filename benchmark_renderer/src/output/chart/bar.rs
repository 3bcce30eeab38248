//!
//! The bar chart model.
//!

use crate::model::record::Record;
use crate::output::dimension::Dimension;
use crate::output::error::Error as OutputError;

///
/// A single labeled bar.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BarValue {
    /// The sub-benchmark name.
    pub label: String,
    /// The bar height.
    pub value: f64,
}

///
/// A titled bar chart of one benchmark group, ready to be drawn.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// The chart title.
    pub title: String,
    /// The Y axis description.
    pub y_axis: &'static str,
    /// The bars, in record order.
    pub bars: Vec<BarValue>,
}

impl BarChart {
    ///
    /// Builds the chart of `dimension` over `records`.
    ///
    pub fn new(
        title: &str,
        dimension: Dimension,
        records: &[Record],
    ) -> Result<Self, OutputError> {
        Ok(Self {
            title: title.to_owned(),
            y_axis: dimension.label(),
            bars: bar_values(dimension, records)?,
        })
    }

    ///
    /// Returns the largest bar value, or zero for a chart with no positive bars.
    ///
    pub fn max_value(&self) -> f64 {
        self.bars
            .iter()
            .map(|bar| bar.value)
            .fold(0.0_f64, f64::max)
    }
}

///
/// Converts records into bars of the selected dimension.
///
/// Each bar is labeled with the record name stripped of its parent benchmark.
/// A record without a sub-benchmark is labeled with its whole name.
/// Order is preserved and duplicate labels are kept as separate bars.
///
/// ```rust
/// use benchmark_renderer::{bar_values, Dimension, Record};
///
/// let records = vec![Record {
///     name: "BenchmarkOne/SubBenchmark".to_owned(),
///     alloced_bytes_per_op: 64,
///     ..Default::default()
/// }];
/// let bars = bar_values(Dimension::BytesPerOp, &records).unwrap();
/// assert_eq!(bars[0].label, "SubBenchmark");
/// assert_eq!(bars[0].value, 64.0);
/// ```
///
pub fn bar_values(dimension: Dimension, records: &[Record]) -> Result<Vec<BarValue>, OutputError> {
    if records.is_empty() {
        return Err(OutputError::NoRecordsProvided);
    }

    Ok(records
        .iter()
        .map(|record| BarValue {
            label: record.sub_name().to_owned(),
            value: dimension.value(record),
        })
        .collect())
}
