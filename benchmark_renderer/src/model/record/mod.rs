//!
//! A single benchmark measurement.
//!

pub mod measured;

use self::measured::Measured;

/// The separator between the segments of a hierarchical benchmark name.
pub const NAME_SEPARATOR: char = '/';

/// The largest magnitude below which every integral `f64` is exact.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

///
/// A single benchmark measurement, parsed from one line of benchmark output.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Record {
    /// Hierarchical name, e.g. `BenchmarkParse/Small-12`.
    #[serde(rename = "Name")]
    pub name: String,
    /// Number of iterations the operation ran.
    #[serde(rename = "N")]
    pub iterations: u64,
    /// Time per operation, in nanoseconds.
    #[serde(rename = "NsPerOp", serialize_with = "serialize_float")]
    pub ns_per_op: f64,
    /// Bytes allocated per operation.
    #[serde(rename = "AllocedBytesPerOp")]
    pub alloced_bytes_per_op: u64,
    /// Allocations per operation.
    #[serde(rename = "AllocsPerOp")]
    pub allocs_per_op: u64,
    /// Throughput, in megabytes per second.
    #[serde(rename = "MBPerS", serialize_with = "serialize_float")]
    pub mb_per_second: f64,
    /// Metrics actually present on the source line.
    #[serde(rename = "Measured")]
    pub measured: Measured,
    /// Position of the record in the source output.
    #[serde(rename = "Ord")]
    pub ordinal: usize,
}

impl Record {
    ///
    /// Returns the parent benchmark name: everything before the first separator,
    /// or the whole name if there is none.
    ///
    pub fn group_name(&self) -> &str {
        self.name
            .split_once(NAME_SEPARATOR)
            .map_or(self.name.as_str(), |(group, _)| group)
    }

    ///
    /// Returns the name with the parent benchmark stripped, or the whole name if
    /// the record has no sub-benchmark.
    ///
    pub fn sub_name(&self) -> &str {
        self.name
            .split_once(NAME_SEPARATOR)
            .map_or(self.name.as_str(), |(_, sub_name)| sub_name)
    }
}

///
/// Writes integral floats as integers, so `1000.0` reads as `1000` in structured output.
///
fn serialize_float<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}
