//!
//! The benchmark renderer binary.
//!

pub(crate) mod arguments;
pub(crate) mod tests;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use self::arguments::Arguments;

/// The success exit code.
const EXIT_CODE_SUCCESS: i32 = 0;
/// The failure exit code.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let input = match arguments.input_path.as_deref() {
        Some(path) => benchmark_renderer::Input::try_from(path)
            .map_err(|error| anyhow::anyhow!("Benchmark file {path:?}: {error}"))?,
        None => read_stdin()?,
    };
    tracing::debug!(records = input.records.len(), "Benchmark input read");

    let set = input.into_set();
    if set.is_empty() {
        if !arguments.quiet {
            eprintln!(
                "{} No benchmark lines found in the input.",
                "Warning:".bright_yellow().bold()
            );
        }
        return Ok(());
    }
    if !arguments.quiet {
        eprintln!(
            "    {} {} benchmark group(s) as {} of {}",
            "Rendering".bright_green().bold(),
            set.len(),
            arguments.format,
            arguments.dimension.label(),
        );
    }

    let results = benchmark_renderer::Output::render(
        &set,
        arguments.format,
        arguments.dimension,
        arguments.title,
        arguments.output_path.as_path(),
    );
    let (output, failures) = collect(results, arguments.keep_going, arguments.quiet)?;
    output.write_to_files()?;
    for file in output.files.iter() {
        tracing::info!(path = ?file.path, bytes = file.content.len(), "Benchmark file written");
    }

    if !arguments.quiet {
        eprintln!(
            "    {} {} file(s) written",
            "Finished".bright_green().bold(),
            output.files.len()
        );
    }
    if failures > 0 {
        anyhow::bail!("{failures} benchmark group(s) failed to render");
    }
    Ok(())
}

///
/// Reads the benchmark output from the standard input.
///
fn read_stdin() -> anyhow::Result<benchmark_renderer::Input> {
    let stdin = std::io::stdin();
    let input = benchmark_renderer::Input::read(stdin.lock())
        .map_err(|error| anyhow::anyhow!("Standard input: {error}"))?;
    Ok(input)
}

///
/// Splits the per-group results into the output and the number of failed groups.
///
/// Without `keep_going`, the first failure is returned as the error.
///
pub(crate) fn collect(
    results: Vec<benchmark_renderer::GroupResult>,
    keep_going: bool,
    quiet: bool,
) -> anyhow::Result<(benchmark_renderer::Output, usize)> {
    for benchmark_renderer::GroupResult { group, result } in results.iter() {
        match result {
            Ok(file) => tracing::debug!(
                group = group.as_str(),
                bytes = file.content.len(),
                "Benchmark group rendered"
            ),
            Err(error) => tracing::debug!(group = group.as_str(), %error, "Benchmark group failed"),
        }
    }
    if !keep_going {
        return Ok((benchmark_renderer::Output::try_from(results)?, 0));
    }

    let mut output = benchmark_renderer::Output::default();
    let mut failures = 0;
    for benchmark_renderer::GroupResult { group, result } in results.into_iter() {
        match result {
            Ok(file) => output.files.push(file),
            Err(error) => {
                if !quiet {
                    eprintln!(
                        "{} Benchmark group `{group}` skipped: {error}",
                        "Warning:".bright_yellow().bold()
                    );
                }
                failures += 1;
            }
        }
    }
    Ok((output, failures))
}
