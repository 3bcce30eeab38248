//!
//! Benchmark input in the `go test -bench` text format.
//!

pub mod error;
pub mod line;

use std::io::BufRead;
use std::path::Path;

use crate::model::record::Record;
use crate::model::set::BenchmarkSet;

use self::error::Error as InputError;

///
/// Benchmark records read from `go test -bench` output.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Input {
    /// The records, in the order their lines appeared.
    pub records: Vec<Record>,
}

impl Input {
    ///
    /// Reads benchmark records line by line.
    ///
    /// Lines that do not start with `Benchmark` are skipped. The first
    /// benchmark line that cannot be parsed fails the whole read.
    ///
    pub fn read<R>(reader: R) -> Result<Self, InputError>
    where
        R: BufRead,
    {
        let mut records = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|error| InputError::Reading { error })?;
            if !line::is_candidate(line.as_str()) {
                continue;
            }

            let record = line::parse(line.as_str(), records.len()).map_err(|reason| {
                InputError::Parsing {
                    line_number: index + 1,
                    line: line.clone(),
                    reason,
                }
            })?;
            records.push(record);
        }
        Ok(Self { records })
    }

    ///
    /// Groups the records by their parent benchmark.
    ///
    pub fn into_set(self) -> BenchmarkSet {
        BenchmarkSet::from(self.records)
    }
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let file = std::fs::File::open(path).map_err(|error| InputError::Reading { error })?;
        Self::read(std::io::BufReader::new(file))
    }
}

impl From<Input> for BenchmarkSet {
    fn from(input: Input) -> Self {
        input.into_set()
    }
}
