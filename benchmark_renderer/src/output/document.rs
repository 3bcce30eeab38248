//!
//! The structured document shared by the JSON and XML formats.
//!

use crate::model::record::Record;

///
/// A benchmark group with all of its records.
///
/// The XML root element is named after this structure's serialized name.
///
#[derive(Debug, serde::Serialize)]
#[serde(rename = "xmlBenchmarkRecord")]
pub struct Document<'a> {
    /// The parent benchmark name.
    #[serde(rename = "ParentBenchmark")]
    pub parent_benchmark: &'a str,
    /// The records, with every field regardless of the selected dimension.
    #[serde(rename = "Benchmarks")]
    pub benchmarks: &'a [Record],
}

impl<'a> Document<'a> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(parent_benchmark: &'a str, benchmarks: &'a [Record]) -> Self {
        Self {
            parent_benchmark,
            benchmarks,
        }
    }
}
