use serde::{Deserialize, Serialize};
use std::path::PathBuf;
/// Entry names dropped at every level before sorting. Exact match, files and directories alike.
pub const EXCLUDED_NAMES: &[&str] = &[".git", "__pycache__", ".vscode", ".DS_Store"];
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirdocOptions {
    pub root: PathBuf,
    /// Where `doc_<name>.md` goes. `None` means next to the running executable.
    pub output_dir: Option<PathBuf>,
}
impl Default for DirdocOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_dir: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct DirdocBuilder {
    options: DirdocOptions,
}
impl DirdocBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DirdocOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.options.output_dir = Some(dir.into());
        self
    }
    pub fn beside_executable(mut self) -> Self {
        self.options.output_dir = None;
        self
    }
    pub fn build(self) -> DirdocOptions {
        self.options
    }
}
pub(crate) fn is_excluded(name: &std::ffi::OsStr) -> bool {
    EXCLUDED_NAMES.iter().any(|excluded| name == *excluded)
}
