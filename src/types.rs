use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One directory entry in the walked tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// The entry's file name, lossily converted to UTF-8.
    pub name: String,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    File,
    Directory(DirContents),
}

/// What was found when a directory was listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirContents {
    /// Children, already filtered and sorted by name.
    Listed(Vec<TreeNode>),
    /// Listing was refused by the filesystem.
    AccessDenied,
    /// The directory resolves to one of its own ancestors and was not entered.
    Cycle,
}

impl TreeNode {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::File,
        }
    }

    pub fn dir(name: impl Into<String>, contents: DirContents) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Directory(contents),
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Directory(_))
    }
}

/// Walks a sibling list depth-first, reporting depth and last-sibling status for every node.
pub fn visit_siblings<F>(nodes: &[TreeNode], depth: usize, f: &mut F)
where
    F: FnMut(&TreeNode, usize, bool),
{
    for (i, node) in nodes.iter().enumerate() {
        f(node, depth, i + 1 == nodes.len());
        if let NodeKind::Directory(DirContents::Listed(children)) = &node.kind {
            visit_siblings(children, depth + 1, f);
        }
    }
}

/// The result of walking a root, before any file is read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// The root exactly as supplied by the caller.
    pub root: PathBuf,
    /// Base name of the absolute root, used in headings and the output file name.
    pub base_name: String,
    /// Top level of the tree. `AccessDenied` if the root itself could not be listed.
    pub tree: DirContents,
    /// Allow-listed files, sorted ascending by display path.
    pub collected: Vec<CollectedFile>,
}

/// An allow-listed file found during the walk.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollectedFile {
    /// Path relative to the root, `/`-separated and lossily converted to UTF-8.
    pub path: String,
    /// The same path with the on-disk file names, used for reading.
    pub source: PathBuf,
}

impl CollectedFile {
    /// A collected file whose relative path is already valid UTF-8.
    pub fn from_relative(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            source: PathBuf::from(&path),
            path,
        }
    }
}

/// Content of a collected file, or why it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileContent {
    Text(String),
    Unreadable(String),
}

/// A collected file with its fence language and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEntry {
    /// Path relative to the root, `/`-separated.
    pub path: String,
    /// Fence language tag; empty if the extension is not mapped.
    pub language: String,
    pub content: FileContent,
}

/// The complete result of a dirdoc run, ready for formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirdocResult {
    pub root: PathBuf,
    pub base_name: String,
    /// Rendered tree lines, without the leading `<base>/` line.
    pub tree_lines: Vec<String>,
    /// Collected files in ascending path order.
    pub files: Vec<FileEntry>,
}
