//!
//! Benchmark renderer output.
//!

pub mod chart;
pub mod csv;
pub mod dimension;
pub mod document;
pub mod error;
pub mod file;
pub mod format;
pub mod json;
pub mod renderer;
pub mod xml;

use std::path::Path;

use crate::model::set::BenchmarkSet;

use self::dimension::Dimension;
use self::error::Error as OutputError;
use self::file::File;
use self::format::Format;

///
/// The rendered files of a run, one per benchmark group.
///
#[derive(Debug, Default)]
pub struct Output {
    /// The files, in group order.
    pub files: Vec<File>,
}

///
/// The outcome of rendering one benchmark group.
///
#[derive(Debug)]
pub struct GroupResult {
    /// The parent benchmark name.
    pub group: String,
    /// The rendered file, or why rendering failed.
    pub result: Result<File, OutputError>,
}

impl Output {
    ///
    /// Renders every group independently.
    ///
    /// A failing group does not stop the others, so callers may decide
    /// whether to abort or to keep the successful files.
    ///
    pub fn render(
        set: &BenchmarkSet,
        format: Format,
        dimension: Dimension,
        title: Option<String>,
        path: &Path,
    ) -> Vec<GroupResult> {
        let renderer = format.renderer(title);
        set.iter()
            .map(|(group, records)| {
                let mut content = Vec::new();
                let result = renderer
                    .render(&mut content, group, dimension, records)
                    .map(|()| {
                        File::new(
                            file::output_path(path, group, format, set.len()),
                            content,
                        )
                    });
                GroupResult {
                    group: group.to_owned(),
                    result,
                }
            })
            .collect()
    }

    ///
    /// Writes the files, creating missing parent directories.
    ///
    pub fn write_to_files(&self) -> anyhow::Result<()> {
        for File { path, content } in self.files.iter() {
            if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|error| {
                    anyhow::anyhow!("Output directory {parent:?} creating: {error}")
                })?;
            }
            std::fs::write(path.as_path(), content)
                .map_err(|error| anyhow::anyhow!("Benchmark file {path:?} writing: {error}"))?;
        }
        Ok(())
    }
}

impl TryFrom<Vec<GroupResult>> for Output {
    type Error = anyhow::Error;

    fn try_from(results: Vec<GroupResult>) -> Result<Self, Self::Error> {
        let files = results
            .into_iter()
            .map(|GroupResult { group, result }| {
                result.map_err(|error| anyhow::anyhow!("Benchmark group `{group}` rendering: {error}"))
            })
            .collect::<anyhow::Result<Vec<File>>>()?;
        Ok(Self { files })
    }
}
