//!
//! JSON output.
//!

use crate::model::record::Record;
use crate::output::dimension::Dimension;
use crate::output::document::Document;
use crate::output::error::Error as OutputError;
use crate::output::renderer::Renderer;

///
/// Serializes a benchmark group and all of its records as compact JSON.
///
/// The dimension is ignored, and an empty group is a valid document.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(
        &self,
        sink: &mut dyn std::io::Write,
        group: &str,
        _dimension: Dimension,
        records: &[Record],
    ) -> Result<(), OutputError> {
        let content = serde_json::to_vec(&Document::new(group, records))?;
        sink.write_all(content.as_slice())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::model::record::measured::Measured;
    use crate::model::record::Record;
    use crate::output::dimension::Dimension;
    use crate::output::renderer::Renderer;

    use super::JsonRenderer;

    fn record(name: &str) -> Record {
        Record {
            name: name.to_owned(),
            iterations: 100,
            ns_per_op: 1000.0,
            alloced_bytes_per_op: 10000,
            allocs_per_op: 100000,
            mb_per_second: 1000000.0,
            measured: Measured::from_bits_retain(10000000),
            ordinal: 100000000,
        }
    }

    fn render(group: &str, records: &[Record]) -> String {
        let mut output = Vec::new();
        JsonRenderer
            .render(&mut output, group, Dimension::NsPerOp, records)
            .expect("Always valid");
        String::from_utf8(output).expect("Always valid")
    }

    #[test]
    fn ok_single_record() {
        assert_eq!(
            render("B", &[record("B/S")]),
            r#"{"ParentBenchmark":"B","Benchmarks":[{"Name":"B/S","N":100,"NsPerOp":1000,"AllocedBytesPerOp":10000,"AllocsPerOp":100000,"MBPerS":1000000,"Measured":10000000,"Ord":100000000}]}"#
        );
    }

    #[test]
    fn ok_multiple_records() {
        let mut second = record("BenchmarkOne/SubBenchmarkTwo");
        second.ns_per_op = 243.9;
        second.measured = Measured::NS_PER_OP | Measured::ALLOCS_PER_OP;
        second.ordinal = 1;

        let json = render("BenchmarkOne", &[record("BenchmarkOne/SubBenchmarkOne"), second]);

        let value: serde_json::Value = serde_json::from_str(json.as_str()).expect("Always valid");
        assert_eq!(value["ParentBenchmark"], "BenchmarkOne");
        assert_eq!(value["Benchmarks"][0]["Name"], "BenchmarkOne/SubBenchmarkOne");
        assert_eq!(value["Benchmarks"][1]["NsPerOp"], 243.9);
        assert_eq!(value["Benchmarks"][1]["Measured"], 5);
        assert_eq!(value["Benchmarks"][1]["Ord"], 1);
    }

    #[test]
    fn ok_dimension_is_ignored() {
        let records = [record("B/S")];
        let outputs: Vec<String> = Dimension::ALL
            .into_iter()
            .map(|dimension| {
                let mut output = Vec::new();
                JsonRenderer
                    .render(&mut output, "B", dimension, &records)
                    .expect("Always valid");
                String::from_utf8(output).expect("Always valid")
            })
            .collect();

        assert!(outputs.windows(2).all(|pair| pair[0] == pair[1]));
    }

    #[test]
    fn ok_empty_group() {
        assert_eq!(render("B", &[]), r#"{"ParentBenchmark":"B","Benchmarks":[]}"#);
    }
}
