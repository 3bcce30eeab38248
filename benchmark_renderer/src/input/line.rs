//!
//! A single line of benchmark output.
//!

use std::num::ParseIntError;

use crate::model::record::measured::Measured;
use crate::model::record::Record;

/// The prefix every benchmark line starts with.
pub const PREFIX: &str = "Benchmark";

/// The unit of time per operation.
pub const UNIT_NS_PER_OP: &str = "ns/op";
/// The unit of bytes allocated per operation.
pub const UNIT_BYTES_PER_OP: &str = "B/op";
/// The unit of allocations per operation.
pub const UNIT_ALLOCS_PER_OP: &str = "allocs/op";
/// The unit of throughput.
pub const UNIT_MB_PER_S: &str = "MB/s";

///
/// Why a benchmark line could not be decomposed into a record.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The line has no iteration count.
    #[error("expected a name and an iteration count, found {found} field(s)")]
    MissingFields {
        /// The number of whitespace-separated fields found.
        found: usize,
    },
    /// The name does not start with the benchmark prefix.
    #[error("the name does not start with `Benchmark`")]
    MissingPrefix,
    /// The iteration count is not an unsigned integer.
    #[error("invalid iteration count `{value}`: {error}")]
    InvalidIterations {
        /// The offending field.
        value: String,
        /// The underlying integer parsing error.
        error: ParseIntError,
    },
}

///
/// Whether the line is a benchmark line candidate.
///
pub fn is_candidate(line: &str) -> bool {
    line.starts_with(PREFIX)
}

///
/// Parses a benchmark line into a record.
///
/// The line is split on whitespace into the name, the iteration count, and
/// `<value> <unit>` metric pairs. Pairs with unknown units or unparsable
/// values are skipped, leaving the metric unset.
///
/// ```rust
/// use benchmark_renderer::input::line::parse;
/// use benchmark_renderer::Measured;
///
/// let record = parse("BenchmarkX/Y-12   10000   10000 ns/op", 0).unwrap();
/// assert_eq!(record.name, "BenchmarkX/Y-12");
/// assert_eq!(record.iterations, 10000);
/// assert_eq!(record.ns_per_op, 10000.0);
/// assert_eq!(record.measured, Measured::NS_PER_OP);
/// ```
///
pub fn parse(line: &str, ordinal: usize) -> Result<Record, Error> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 2 {
        return Err(Error::MissingFields {
            found: fields.len(),
        });
    }
    if !is_candidate(fields[0]) {
        return Err(Error::MissingPrefix);
    }
    let iterations = fields[1]
        .parse::<u64>()
        .map_err(|error| Error::InvalidIterations {
            value: fields[1].to_owned(),
            error,
        })?;

    let mut record = Record {
        name: fields[0].to_owned(),
        iterations,
        ordinal,
        ..Default::default()
    };
    for pair in fields[2..].chunks_exact(2) {
        parse_measurement(&mut record, pair[0], pair[1]);
    }
    Ok(record)
}

///
/// Sets the metric identified by `unit`, if the unit is known and the value parses.
///
fn parse_measurement(record: &mut Record, value: &str, unit: &str) {
    match unit {
        UNIT_NS_PER_OP => {
            if let Ok(value) = value.parse() {
                record.ns_per_op = value;
                record.measured |= Measured::NS_PER_OP;
            }
        }
        UNIT_BYTES_PER_OP => {
            if let Ok(value) = value.parse() {
                record.alloced_bytes_per_op = value;
                record.measured |= Measured::ALLOCED_BYTES_PER_OP;
            }
        }
        UNIT_ALLOCS_PER_OP => {
            if let Ok(value) = value.parse() {
                record.allocs_per_op = value;
                record.measured |= Measured::ALLOCS_PER_OP;
            }
        }
        UNIT_MB_PER_S => {
            if let Ok(value) = value.parse() {
                record.mb_per_second = value;
                record.measured |= Measured::MB_PER_S;
            }
        }
        _ => {}
    }
}
