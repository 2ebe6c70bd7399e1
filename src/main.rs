use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use linebreak::{TermSize, WrapOptions, fill, rewrite, spaces, term_size_or};
use rayon::prelude::*;

#[derive(Parser)]
#[command(version, about = "Break text into lines that fit the terminal")]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    #[command(flatten)]
    layout: LayoutOpts,
    /// Text files to wrap
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone)]
struct LayoutOpts {
    /// Line width in columns; defaults to the terminal width or 80
    #[arg(short, long)]
    width: Option<usize>,
    /// Prefix for the first line
    #[arg(long, default_value = "")]
    indent: String,
    /// Prefix for every line after the first
    #[arg(long = "subsequent-indent", conflicts_with = "hanging")]
    subsequent_indent: Option<String>,
    /// Indent every line after the first by this many spaces
    #[arg(long)]
    hanging: Option<isize>,
}

impl LayoutOpts {
    fn wrap_options(&self) -> WrapOptions {
        let width = self
            .width
            .unwrap_or_else(|| term_size_or(TermSize::default()).cols);
        let subsequent = match (&self.subsequent_indent, self.hanging) {
            (Some(indent), _) => indent.clone(),
            (None, Some(n)) => spaces(n),
            (None, None) => String::new(),
        };
        WrapOptions::new(width)
            .indent(self.indent.as_str())
            .subsequent_indent(subsequent)
    }
}

/// Install a stderr subscriber when `RUST_LOG` is set.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// Entry point for the command-line tool that wraps text to a column width.
///
/// Reads standard input when no files are given. With several files, each is
/// wrapped in parallel and printed in argument order.
///
/// # Examples
///
/// ```sh
/// # Wrap a file to 60 columns
/// linebreak --width 60 notes.txt
///
/// # Wrap in place with a hanging indent
/// linebreak --in-place --hanging 4 notes.txt
///
/// # Wrap standard input to the terminal width
/// cat notes.txt | linebreak
/// ```
fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let opts = cli.layout.wrap_options();

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read standard input")?;
        print!("{}", fill(&input, &opts));
        return Ok(());
    }

    if cli.in_place {
        return cli.files.par_iter().try_for_each(|path| {
            rewrite(path, &opts).with_context(|| format!("failed to rewrite {}", path.display()))
        });
    }

    let outputs: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| {
            let text = fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Ok(fill(&text, &opts))
        })
        .collect();
    for output in outputs {
        print!("{}", output?);
    }
    Ok(())
}
