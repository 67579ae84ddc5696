//! Build a structure document from a directory on disk.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use repo_browser_core::{Directory, TreeNode};

/// Files belonging to the browser page itself, never listed.
pub const PAGE_FILES: &[&str] = &["index.html", "browser.js", "structure.json"];

/// Type tag for a file name.
///
/// `-openrc.apk` and `.tar.gz` are recognized as wholes; otherwise the text
/// after the last dot, or `file` when there is none.
pub fn file_type_tag(name: &str) -> &str {
    if name.ends_with("-openrc.apk") {
        "openrc"
    } else if name.ends_with(".tar.gz") {
        "tar.gz"
    } else {
        name.rsplit_once('.').map_or("file", |(_, ext)| ext)
    }
}

/// Recursively scan `path` into a directory node.
///
/// Hidden entries and [`PAGE_FILES`] are skipped. Directories that cannot be
/// read for lack of permission scan as empty; dangling symlinks are skipped.
pub fn scan_directory(path: &Path) -> io::Result<Directory> {
    let mut dir = Directory::new();

    let read_dir = match fs::read_dir(path) {
        Ok(read_dir) => read_dir,
        Err(err) if err.kind() == ErrorKind::PermissionDenied => return Ok(dir),
        Err(err) => return Err(err),
    };

    for entry in read_dir {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || PAGE_FILES.contains(&name.as_str()) {
            continue;
        }

        let full_path = entry.path();
        let metadata = match fs::metadata(&full_path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => continue,
            Err(err) => return Err(err),
        };

        if metadata.is_dir() {
            let child = scan_directory(&full_path)?;
            dir.insert(name, child);
        } else {
            let tag = file_type_tag(&name).to_string();
            dir.insert(name, TreeNode::file(tag, Some(metadata.len())));
        }
    }

    Ok(dir)
}
