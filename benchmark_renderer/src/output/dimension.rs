//!
//! The benchmark metric compared in charts.
//!

use crate::model::record::Record;
use crate::output::error::Error as OutputError;

///
/// The benchmark metric compared in charts.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Time per operation.
    #[default]
    NsPerOp,
    /// Bytes allocated per operation.
    BytesPerOp,
    /// Allocations per operation.
    AllocsPerOp,
}

impl Dimension {
    /// Every dimension, in declaration order.
    pub const ALL: [Self; 3] = [Self::NsPerOp, Self::BytesPerOp, Self::AllocsPerOp];

    ///
    /// Returns the human-readable label used on chart axes.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::NsPerOp => "Ns Per Op",
            Self::BytesPerOp => "Bytes Per Op",
            Self::AllocsPerOp => "Allocs Per Op",
        }
    }

    ///
    /// Returns the canonical name accepted by [`std::str::FromStr`].
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NsPerOp => "NS_PER_OP",
            Self::BytesPerOp => "BYTES_PER_OP",
            Self::AllocsPerOp => "ALLOCS_PER_OP",
        }
    }

    ///
    /// Selects this dimension's value from a record.
    ///
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            Self::NsPerOp => record.ns_per_op,
            Self::BytesPerOp => record.alloced_bytes_per_op as f64,
            Self::AllocsPerOp => record.allocs_per_op as f64,
        }
    }
}

impl std::str::FromStr for Dimension {
    type Err = OutputError;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == string)
            .ok_or_else(|| OutputError::UnknownDimension(string.to_owned()))
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
