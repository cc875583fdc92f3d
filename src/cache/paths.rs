// Cache path utilities.
// Locates the persisted due map under the platform cache directory.

use std::path::PathBuf;

use directories::ProjectDirs;

/// Get the base cache directory (~/.cache/duemap on macOS/Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "duemap").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Default path of the persisted due map file.
pub fn due_map_path() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("due_map"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_map_path_under_cache_dir() {
        let path = due_map_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "due_map");
        assert!(path.starts_with(cache_dir().unwrap()));
    }
}
