// Due map store.
// Reads and writes the persisted key-to-task mapping, one `key,task_gid`
// record per line in file order.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{DueMapError, Result};

/// Leading characters of a task name that identify its project, e.g. `06_11`.
pub const KEY_LEN: usize = 5;

/// One outstanding due task: project key and remote task identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueEntry {
    pub key: String,
    pub task_gid: String,
}

/// In-memory form of the persisted due map. Key order mirrors file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DueMap {
    entries: HashMap<String, String>,
    keys_in_order: Vec<String>,
}

impl DueMap {
    /// Insert an entry, failing loudly when two tasks share a key.
    pub fn insert(&mut self, entry: DueEntry) -> Result<()> {
        if let Some(existing) = self.entries.get(&entry.key) {
            return Err(DueMapError::KeyCollision {
                key: entry.key,
                existing: existing.clone(),
                incoming: entry.task_gid,
            });
        }
        self.keys_in_order.push(entry.key.clone());
        self.entries.insert(entry.key, entry.task_gid);
        Ok(())
    }

    /// Look up the task gid cached under a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Keys in file order.
    pub fn keys(&self) -> &[String] {
        &self.keys_in_order
    }

    /// `(key, task_gid)` pairs in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.keys_in_order
            .iter()
            .filter_map(|key| self.entries.get(key).map(|gid| (key.as_str(), gid.as_str())))
    }

    pub fn len(&self) -> usize {
        self.keys_in_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys_in_order.is_empty()
    }
}

/// Derive the map key from a task name: its first `KEY_LEN` characters,
/// or the whole name when shorter.
pub fn project_key(name: &str) -> String {
    name.chars().take(KEY_LEN).collect()
}

/// Read a due map file.
///
/// Every line must hold exactly two comma-separated fields; anything else
/// is a reported error, never a silent skip.
pub fn read_due_map(path: &Path) -> Result<DueMap> {
    if !path.exists() {
        return Err(DueMapError::CacheMissing {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path)?;
    let mut map = DueMap::default();

    for (index, line) in contents.lines().enumerate() {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != 2 {
            return Err(DueMapError::MalformedLine {
                path: path.to_path_buf(),
                line: index + 1,
                content: line.to_string(),
            });
        }
        map.insert(DueEntry {
            key: fields[0].to_string(),
            task_gid: fields[1].to_string(),
        })?;
    }

    Ok(map)
}

/// Write a due map file atomically via a temp file rename, so a crash
/// mid-write cannot leave a torn file for a later read.
pub fn write_due_map(path: &Path, map: &DueMap) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut body = String::new();
    for (key, task_gid) in map.iter() {
        body.push_str(key);
        body.push(',');
        body.push_str(task_gid);
        body.push('\n');
    }

    let temp_path = path.with_extension("tmp");
    let mut file = fs::File::create(&temp_path)?;
    file.write_all(body.as_bytes())?;
    file.sync_all()?;
    fs::rename(&temp_path, path)?;

    Ok(())
}

/// Delete the due map file.
pub fn delete(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn entry(key: &str, gid: &str) -> DueEntry {
        DueEntry {
            key: key.to_string(),
            task_gid: gid.to_string(),
        }
    }

    fn map_of(entries: &[(&str, &str)]) -> DueMap {
        let mut map = DueMap::default();
        for (key, gid) in entries {
            map.insert(entry(key, gid)).unwrap();
        }
        map
    }

    #[test]
    fn test_project_key_truncates_to_five_chars() {
        assert_eq!(project_key("06_11 Due"), "06_11");
        assert_eq!(project_key("06_11"), "06_11");
    }

    #[test]
    fn test_project_key_short_names_kept_whole() {
        assert_eq!(project_key("Due"), "Due");
        assert_eq!(project_key(""), "");
    }

    #[test]
    fn test_project_key_counts_chars_not_bytes() {
        assert_eq!(project_key("äöüßê visit Due"), "äöüßê");
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("due_map");

        let map = map_of(&[
            ("06_11", "37480810169337"),
            ("07_10", "33302364234522"),
            ("08_08", "28495144706461"),
        ]);
        write_due_map(&path, &map).unwrap();

        let read = read_due_map(&path).unwrap();
        assert_eq!(read, map);
        assert_eq!(read.keys(), ["06_11", "07_10", "08_08"]);
    }

    #[test]
    fn test_file_format_is_one_record_per_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("due_map");

        let map = map_of(&[("06_11", "37480810169337")]);
        write_due_map(&path, &map).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "06_11,37480810169337\n");
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("due_map");

        write_due_map(&path, &map_of(&[("06_11", "1")])).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent");

        let err = read_due_map(&path).unwrap_err();
        assert!(matches!(err, DueMapError::CacheMissing { .. }));
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("due_map");
        fs::write(&path, "06_11,37480810169337\nnocomma\n").unwrap();

        let err = read_due_map(&path).unwrap_err();
        match err {
            DueMapError::MalformedLine { line, content, .. } => {
                assert_eq!(line, 2);
                assert_eq!(content, "nocomma");
            }
            other => panic!("expected MalformedLine, got {other:?}"),
        }
    }

    #[test]
    fn test_extra_fields_are_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("due_map");
        fs::write(&path, "06_11,1,extra\n").unwrap();

        let err = read_due_map(&path).unwrap_err();
        assert!(matches!(err, DueMapError::MalformedLine { line: 1, .. }));
    }

    #[test]
    fn test_duplicate_key_on_read_fails_loudly() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("due_map");
        fs::write(&path, "06_11,111\n06_11,222\n").unwrap();

        let err = read_due_map(&path).unwrap_err();
        match err {
            DueMapError::KeyCollision {
                key,
                existing,
                incoming,
            } => {
                assert_eq!(key, "06_11");
                assert_eq!(existing, "111");
                assert_eq!(incoming, "222");
            }
            other => panic!("expected KeyCollision, got {other:?}"),
        }
    }

    #[test]
    fn test_delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("due_map");

        write_due_map(&path, &map_of(&[("06_11", "1")])).unwrap();
        delete(&path).unwrap();
        assert!(!path.exists());

        delete(&path).unwrap();
    }
}
