//! Output formatting for dirdoc results.
//!
//! Provides functions to assemble a [`DirdocResult`] into the Markdown document or JSON,
//! and to write the document to `doc_<base>.md`. File contents are embedded unchanged.

use crate::engine::{base_folder_name, read_entries};
use crate::types::{CollectedFile, DirdocResult, FileContent};
use crate::DirdocError;
use chrono::{Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Markdown,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the result as a string, stamping Markdown with today's local date.
pub fn format_result(
    result: &DirdocResult,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, DirdocError> {
    match format {
        OutputFormat::Markdown => Ok(format_markdown(result, Local::now().date_naive())),
        OutputFormat::Json => format_json(result, pretty),
    }
}

/// Builds the document from an already rendered tree and the collected relative paths.
///
/// Collected files are read here, in ascending path order.
pub fn assemble(root: impl AsRef<Path>, tree_lines: &[String], collected: &[String]) -> String {
    let root = root.as_ref();
    let result = DirdocResult {
        root: root.to_path_buf(),
        base_name: base_folder_name(root),
        tree_lines: tree_lines.to_vec(),
        files: read_entries(
            root,
            &collected
                .iter()
                .map(CollectedFile::from_relative)
                .collect::<Vec<_>>(),
        ),
    };
    format_markdown(&result, Local::now().date_naive())
}

/// Renders the Markdown document for a given generation date.
pub fn format_markdown(result: &DirdocResult, date: NaiveDate) -> String {
    let name = &result.base_name;
    let mut out = String::with_capacity(1024);
    out.push_str(&format!("# 📁 {name} file structure and source code\n\n"));
    out.push_str(&format!("**Generated:** {}\n\n", date.format("%Y-%m-%d")));
    out.push_str(&format!("**Target folder:** `{}`\n\n", result.root.display()));

    out.push_str("## File structure\n```\n");
    out.push_str(&format!("{name}/\n"));
    for line in &result.tree_lines {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str("```\n");

    out.push_str("\n---\n\n## Source code\n");
    for file in &result.files {
        out.push_str(&format!("### 📄 {}\n", file.path));
        match &file.content {
            FileContent::Text(text) => {
                out.push_str(&format!("```{}\n", file.language));
                out.push_str(text);
                out.push_str("\n```\n");
            }
            FileContent::Unreadable(message) => {
                out.push_str(&format!(
                    "```\n[error: could not read file - {message}]\n```\n"
                ));
            }
        }
    }
    out
}

fn format_json(result: &DirdocResult, pretty: bool) -> Result<String, DirdocError> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// File name of the document for a base folder name: `doc_<base>.<ext>`.
pub fn output_file_name(base_name: &str, format: OutputFormat) -> String {
    format!("doc_{}.{}", base_name, format.extension())
}

/// The directory containing the running executable.
pub fn default_output_dir() -> Result<PathBuf, DirdocError> {
    let exe = std::env::current_exe().map_err(|e| DirdocError::OutputLocation(e.to_string()))?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| DirdocError::OutputLocation(format!("{} has no parent", exe.display())))
}

/// Writes `content` to `dir/doc_<base>.<ext>`, replacing any existing file.
///
/// # Errors
///
/// [`DirdocError::OutputWrite`] if the file cannot be written. Nothing is retried.
pub fn write_document(
    content: &str,
    base_name: &str,
    format: OutputFormat,
    dir: impl AsRef<Path>,
) -> Result<PathBuf, DirdocError> {
    let path = dir.as_ref().join(output_file_name(base_name, format));
    fs::write(&path, content).map_err(|source| DirdocError::OutputWrite {
        path: path.clone(),
        source,
    })?;
    #[cfg(feature = "logging")]
    tracing::debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(path)
}
