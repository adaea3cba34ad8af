use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// A filesystem node in traversal order.
#[derive(Debug)]
pub enum Node {
    Folder(PathBuf),
    File(PathBuf),
}

/// Collects the folder and file nodes under `root` in preorder: each folder
/// appears before its children, children in directory-listing order (not
/// sorted).
///
/// All ignore and hidden-file filtering is disabled so the traversal sees
/// exactly what a plain recursive directory listing would. Symlinks are not
/// followed; entries that are neither regular files nor directories are
/// skipped. There is no cycle detection.
pub fn collect_nodes(root: &Path) -> Result<Vec<Node>> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .parents(false);

    let mut nodes = Vec::new();

    for result in builder.build() {
        let entry = result?;

        match entry.file_type() {
            Some(file_type) if file_type.is_dir() => nodes.push(Node::Folder(entry.into_path())),
            Some(file_type) if file_type.is_file() => nodes.push(Node::File(entry.into_path())),
            _ => {}
        }
    }

    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_root_folder_comes_first() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("a.md"), "# A\n").unwrap();

        let nodes = collect_nodes(temp_dir.path()).unwrap();

        assert!(matches!(&nodes[0], Node::Folder(p) if p.as_path() == temp_dir.path()));
        assert_eq!(nodes.len(), 2);
    }

    #[test]
    fn test_subfolder_precedes_its_children() {
        let temp_dir = tempdir().unwrap();
        let sub = temp_dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("b.md"), "## B\n").unwrap();

        let nodes = collect_nodes(temp_dir.path()).unwrap();

        let sub_at = nodes
            .iter()
            .position(|n| matches!(n, Node::Folder(p) if p == &sub))
            .unwrap();
        let file_at = nodes
            .iter()
            .position(|n| matches!(n, Node::File(p) if p.ends_with("b.md")))
            .unwrap();
        assert!(sub_at < file_at);
    }

    #[test]
    fn test_hidden_files_are_visited() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(".hidden.md"), "# Hidden\n").unwrap();

        let nodes = collect_nodes(temp_dir.path()).unwrap();

        assert!(
            nodes
                .iter()
                .any(|n| matches!(n, Node::File(p) if p.ends_with(".hidden.md")))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_skipped() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("real.md");
        fs::write(&target, "# Real\n").unwrap();
        std::os::unix::fs::symlink(&target, temp_dir.path().join("link.md")).unwrap();

        let nodes = collect_nodes(temp_dir.path()).unwrap();

        let files: Vec<_> = nodes
            .iter()
            .filter(|n| matches!(n, Node::File(_)))
            .collect();
        assert_eq!(files.len(), 1);
    }
}
