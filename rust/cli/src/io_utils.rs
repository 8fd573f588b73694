//! File helpers shared by commands that write output files.

use std::path::Path;

/// Ensure parent directory exists for given path, creating if needed.
///
/// ```rust,no_run
/// use std::path::Path;
/// # use cheat_cli::io_utils::ensure_parent_dir;
///
/// ensure_parent_dir(Path::new("data/games/run.jsonl")).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/games.jsonl");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a/b").is_dir());
    }

    #[test]
    fn bare_file_names_need_no_directory() {
        assert!(ensure_parent_dir(Path::new("games.jsonl")).is_ok());
    }
}
