//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// An absolute `config_name` is returned as-is when it exists.
///
/// # Example
/// ```text
/// /home/user/site/blocks/icons/  ← start
/// /home/user/site/safe-svg.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path, start: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    // Walk up from start looking for config file
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        // Move to parent directory
        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_start_dir() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("safe-svg.toml");
        fs::write(&config, "").unwrap();

        assert_eq!(
            find_config_file(Path::new("safe-svg.toml"), dir.path()),
            Some(config)
        );
    }

    #[test]
    fn test_find_in_parent_dir() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("safe-svg.toml");
        fs::write(&config, "").unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_config_file(Path::new("safe-svg.toml"), &nested),
            Some(config)
        );
    }

    #[test]
    fn test_absolute_path() {
        let dir = TempDir::new().unwrap();
        let config = dir.path().join("custom.toml");
        assert_eq!(find_config_file(&config, dir.path()), None);

        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file(&config, Path::new("/")), Some(config));
    }

    #[test]
    fn test_not_found() {
        let dir = TempDir::new().unwrap();
        assert_eq!(
            find_config_file(Path::new("definitely-not-here-7f3a.toml"), dir.path()),
            None
        );
    }
}
