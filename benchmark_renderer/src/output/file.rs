//!
//! Represents a single rendered file in a set of many.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::output::format::Format;

///
/// Represents a single rendered file in a set of many.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    /// The destination path.
    pub path: PathBuf,
    /// The encoded content.
    pub content: Vec<u8>,
}

impl File {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, content: Vec<u8>) -> Self {
        Self { path, content }
    }
}

///
/// Replaces the extension of `path` with the extension of `format`, unless it already matches.
///
/// ```rust
/// use std::path::Path;
///
/// use benchmark_renderer::{correct_extension, Format};
///
/// assert_eq!(
///     correct_extension(Path::new("hello.something"), Format::Png),
///     Path::new("hello.png")
/// );
/// assert_eq!(
///     correct_extension(Path::new("hello.svg"), Format::Svg),
///     Path::new("hello.svg")
/// );
/// ```
///
pub fn correct_extension(path: &Path, format: Format) -> PathBuf {
    let mut path = path.to_path_buf();
    if path.extension().and_then(|extension| extension.to_str()) != Some(format.extension()) {
        path.set_extension(format.extension());
    }
    path
}

///
/// Returns the destination of one group's output.
///
/// With a single group the corrected `path` is used as is. With several,
/// the group name is appended to the file stem so every group gets its own file.
///
pub fn output_path(path: &Path, group: &str, format: Format, group_count: usize) -> PathBuf {
    let path = correct_extension(path, format);
    if group_count <= 1 {
        return path;
    }

    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{stem}-{}.{}", sanitize(group), format.extension());
    path.with_file_name(file_name)
}

///
/// Replaces characters that cannot appear in a file name.
///
fn sanitize(group: &str) -> String {
    group
        .chars()
        .map(|character| match character {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            character => character,
        })
        .collect()
}
