//! Internal module for rendering the walked tree as `tree`-style lines.

use crate::types::{DirContents, NodeKind, TreeNode};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

pub(crate) const ACCESS_DENIED: &str = "[access denied]";
pub(crate) const SYMLINK_LOOP: &str = "[symlink loop]";

/// Renders the contents of a directory, one line per entry.
///
/// The directory itself is not part of the output; callers print its `name/` line.
/// A directory that could not be entered contributes exactly one placeholder line.
pub(crate) fn render_lines(contents: &DirContents) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(contents, "", &mut lines);
    lines
}

fn render_into(contents: &DirContents, prefix: &str, lines: &mut Vec<String>) {
    let children = match contents {
        DirContents::Listed(children) => children,
        DirContents::AccessDenied => {
            lines.push(format!("{prefix}{LAST_BRANCH}{ACCESS_DENIED}"));
            return;
        }
        DirContents::Cycle => {
            lines.push(format!("{prefix}{LAST_BRANCH}{SYMLINK_LOOP}"));
            return;
        }
    };
    for (i, node) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let connector = if is_last { LAST_BRANCH } else { BRANCH };
        lines.push(format!("{prefix}{connector}{}", display_name(node)));
        if let NodeKind::Directory(sub) = &node.kind {
            let extension = if is_last { SPACE } else { PIPE };
            render_into(sub, &format!("{prefix}{extension}"), lines);
        }
    }
}

fn display_name(node: &TreeNode) -> String {
    if node.is_dir() {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    }
}
