//!
//! The benchmark renderer arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark renderer arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the terminal output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file with `go test -bench` output.
    /// If omitted, the output is read from the standard input.
    pub input_path: Option<PathBuf>,

    /// Output file. Its extension is corrected to match the format.
    /// With several benchmark groups, the group name is appended to the file name.
    #[arg(long)]
    pub output_path: PathBuf,

    /// Output format: `PNG`, `SVG`, `JSON`, `CSV`, or `XML`.
    #[arg(long, alias = "render-type", default_value_t = benchmark_renderer::Format::Png)]
    pub format: benchmark_renderer::Format,

    /// Compared metric: `NS_PER_OP`, `BYTES_PER_OP`, or `ALLOCS_PER_OP`.
    #[arg(long, default_value_t = benchmark_renderer::Dimension::NsPerOp)]
    pub dimension: benchmark_renderer::Dimension,

    /// Chart title. Defaults to the parent benchmark name.
    #[arg(long)]
    pub title: Option<String>,

    /// Keeps rendering the remaining groups after a group fails.
    #[arg(long)]
    pub keep_going: bool,
}
