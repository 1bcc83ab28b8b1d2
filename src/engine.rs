use crate::error::DirdocError;
use crate::language::language_for_path;
use crate::options::{DirdocOptions, is_excluded};
use crate::tree::render_lines;
use crate::types::{
    CollectedFile, DirContents, DirdocResult, FileContent, FileEntry, Snapshot, TreeNode,
};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::{Component, Path, PathBuf};
struct Walker {
    /// Canonical paths of the directories currently being listed, root first.
    ancestors: Vec<PathBuf>,
    /// Relative path components of the directory currently being listed.
    relative: Vec<String>,
    /// The same components as on disk.
    source: PathBuf,
    collected: Vec<CollectedFile>,
}
impl Walker {
    fn new(root: &Path) -> Self {
        Self {
            ancestors: vec![canonical(root)],
            relative: Vec::new(),
            source: PathBuf::new(),
            collected: Vec::new(),
        }
    }
    fn walk_dir(&mut self, dir: &Path) -> Result<DirContents, DirdocError> {
        let names = match list_names(dir) {
            Ok(names) => names,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                #[cfg(feature = "logging")]
                tracing::debug!("Access denied listing {}", dir.display());
                return Ok(DirContents::AccessDenied);
            }
            Err(e) => return Err(DirdocError::io(dir, e)),
        };
        let mut nodes = Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(&name);
            let display = name.to_string_lossy().into_owned();
            // Follows symlinks, so a link to a directory is descended into.
            let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
            self.relative.push(display.clone());
            self.source.push(&name);
            if is_dir {
                let contents = self.enter(&path)?;
                nodes.push(TreeNode::dir(display, contents));
            } else {
                if language_for_path(&path).is_some() {
                    self.collected.push(CollectedFile {
                        path: self.relative.join("/"),
                        source: self.source.clone(),
                    });
                }
                nodes.push(TreeNode::file(display));
            }
            self.relative.pop();
            self.source.pop();
        }
        Ok(DirContents::Listed(nodes))
    }
    fn enter(&mut self, dir: &Path) -> Result<DirContents, DirdocError> {
        let real = canonical(dir);
        if self.ancestors.contains(&real) {
            #[cfg(feature = "logging")]
            tracing::debug!("Symlink loop at {}, not descending", dir.display());
            return Ok(DirContents::Cycle);
        }
        self.ancestors.push(real);
        let contents = self.walk_dir(dir);
        self.ancestors.pop();
        contents
    }
}
/// Lists a directory's entry names with excluded names removed, sorted by byte order.
fn list_names(dir: &Path) -> io::Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let name = entry?.file_name();
        if !is_excluded(&name) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
/// Name of the folder a root refers to, after making it absolute and resolving `.` and `..`.
///
/// Symlinks are not resolved. The filesystem root yields an empty string.
pub fn base_folder_name(root: &Path) -> String {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
/// Walks `root` into an explicit tree and the sorted list of allow-listed files.
///
/// # Errors
///
/// [`DirdocError::InvalidRoot`] if `root` is not an existing directory, and
/// [`DirdocError::Io`] for any listing failure other than a denied permission.
pub fn walk(root: impl AsRef<Path>) -> Result<Snapshot, DirdocError> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(DirdocError::InvalidRoot {
            path: root.to_path_buf(),
        });
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Walking root: {}", root.display());
    let mut walker = Walker::new(root);
    let tree = walker.walk_dir(root)?;
    let mut collected = walker.collected;
    collected.sort();
    Ok(Snapshot {
        root: root.to_path_buf(),
        base_name: base_folder_name(root),
        tree,
        collected,
    })
}
/// Renders the tree under `root` and returns its lines with the collected relative paths.
pub fn render_tree(root: impl AsRef<Path>) -> Result<(Vec<String>, Vec<String>), DirdocError> {
    let snapshot = walk(root)?;
    let collected = snapshot.collected.into_iter().map(|file| file.path).collect();
    Ok((render_lines(&snapshot.tree), collected))
}
/// Reads a file as lossy UTF-8. Failures are returned as content, never as errors.
pub fn read_file_content(path: &Path) -> FileContent {
    let read = || -> io::Result<String> {
        let mut reader = BufReader::new(File::open(path)?);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    };
    match read() {
        Ok(text) => FileContent::Text(text),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Could not read {}: {}", path.display(), e);
            FileContent::Unreadable(e.to_string())
        }
    }
}
pub(crate) fn read_entries(root: &Path, collected: &[CollectedFile]) -> Vec<FileEntry> {
    let mut files: Vec<&CollectedFile> = collected.iter().collect();
    files.sort();
    files
        .into_iter()
        .map(|file| FileEntry {
            path: file.path.clone(),
            language: language_for_path(&file.source).unwrap_or("").to_string(),
            content: read_file_content(&root.join(&file.source)),
        })
        .collect()
}
pub fn dirdoc(options: &DirdocOptions) -> Result<DirdocResult, DirdocError> {
    let snapshot = walk(&options.root)?;
    let tree_lines = render_lines(&snapshot.tree);
    let files = read_entries(&snapshot.root, &snapshot.collected);
    Ok(DirdocResult {
        root: snapshot.root,
        base_name: snapshot.base_name,
        tree_lines,
        files,
    })
}
