//! Command-line interface for dirdoc.
//!
//! Walks the given root, assembles the snapshot document, and saves it as
//! `doc_<folder>.md` next to this executable unless told otherwise.

use clap::{Parser, ValueEnum};
use dirdoc::output::{self, OutputFormat as DocFormat};
use dirdoc::{DirdocBuilder, DirdocError, DirdocOptions, dirdoc};
use std::path::PathBuf;
use std::process::exit;

/// dirdoc — directory tree and source snapshot in one Markdown file
#[derive(Parser)]
#[command(name = "dirdoc", version, about, long_about = None)]
struct Cli {
    /// Root directory to document
    #[arg(env = "DIRDOC_ROOT")]
    root: PathBuf,

    /// Directory to write the document to (default: beside the executable)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Print the document to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

impl From<OutputFormat> for DocFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Markdown => DocFormat::Markdown,
            OutputFormat::Json => DocFormat::Json,
        }
    }
}

impl Cli {
    fn into_options(self) -> (DirdocOptions, DocFormat, bool, bool) {
        let builder = DirdocBuilder::new(self.root);
        let builder = match self.output_dir {
            Some(dir) => builder.output_dir(dir),
            None => builder.beside_executable(),
        };
        (builder.build(), self.format.into(), self.pretty, self.stdout)
    }
}

fn main() {
    let cli = Cli::parse();
    let (options, format, pretty, to_stdout) = cli.into_options();

    match run(&options, format, pretty, to_stdout) {
        Ok(Some(path)) => println!("Saved documentation to '{}'", path.display()),
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}

fn run(
    options: &DirdocOptions,
    format: DocFormat,
    pretty: bool,
    to_stdout: bool,
) -> Result<Option<PathBuf>, DirdocError> {
    let result = dirdoc(options)?;
    let document = output::format_result(&result, format, pretty)?;
    if to_stdout {
        print!("{}", document);
        return Ok(None);
    }
    let dir = match &options.output_dir {
        Some(dir) => dir.clone(),
        None => output::default_output_dir()?,
    };
    output::write_document(&document, &result.base_name, format, dir).map(Some)
}
