//! # Dirdoc
//!
//! `dirdoc` walks a directory tree, renders it as `tree`-style ASCII lines, and gathers
//! the source files whose extension is on a fixed allow-list (`.py`, `.html`, `.css`,
//! `.js`) into one Markdown document: a header, the tree, then every collected file in
//! a fenced block tagged with its language.
//!
//! Walking is single-threaded and blocking. Directories that cannot be listed and files
//! that cannot be read degrade into placeholders in the output instead of failing the run.
//!
//! # Features
//!
//! - `logging` (default): Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use dirdoc::{DirdocBuilder, dirdoc, output};
//!
//! let options = DirdocBuilder::new("./my-project")
//!     .output_dir(".")
//!     .build();
//!
//! let result = dirdoc(&options).expect("Failed to scan directory");
//! let document = output::format_result(&result, output::OutputFormat::Markdown, false)
//!     .expect("Failed to format");
//! let path = output::write_document(
//!     &document,
//!     &result.base_name,
//!     output::OutputFormat::Markdown,
//!     options.output_dir.as_deref().unwrap(),
//! )
//! .expect("Failed to write");
//! println!("Saved documentation to '{}'", path.display());
//! ```

mod engine;
mod error;
pub mod language;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{base_folder_name, dirdoc, read_file_content, render_tree, walk};
pub use error::DirdocError;
pub use options::{DirdocBuilder, DirdocOptions, EXCLUDED_NAMES};
pub use types::{
    CollectedFile, DirContents, DirdocResult, FileContent, FileEntry, NodeKind, Snapshot, TreeNode,
    visit_siblings,
};
