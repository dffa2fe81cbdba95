//! Tree walk and film-directory classification.
//! The content tree is laid out `<root>/<category>/<film>/`; the root and
//! category levels are structural containers, never films themselves.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// True when `relative` (a directory path relative to the scan root) is deep
/// enough to be an individual film directory. Containers at the first level
/// are skipped without inspection, whatever they contain.
pub fn is_film_directory(relative: &Path) -> bool {
    relative.components().count() >= 2
}

/// Collect film directories under `root` in traversal order, sorted by file
/// name at every level so the result does not depend on how the filesystem
/// enumerates entries.
pub fn collect_film_directories(root: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut dirs = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if is_film_directory(relative) {
            dirs.push(entry.into_path());
        }
    }
    Ok(dirs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_category_levels_are_not_films() {
        assert!(!is_film_directory(Path::new("")));
        assert!(!is_film_directory(Path::new("shorts")));
    }

    #[test]
    fn film_level_and_deeper_qualify() {
        assert!(is_film_directory(Path::new("shorts/my-film")));
        assert!(is_film_directory(Path::new("shorts/my-film/extras")));
    }
}
