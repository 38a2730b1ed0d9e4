//! Command handlers.

pub mod config;
pub mod generate;
pub mod models;
pub mod render;
pub mod theme;

use std::path::{Path, PathBuf};

/// Expand a leading `~` in a user-supplied path.
pub fn expand_path(path: &Path) -> PathBuf {
    PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).into_owned())
}

/// Convert a dialoguer result into `Ok(Some(value))` on success, `Ok(None)` on
/// interrupt (Ctrl+C / terminal disconnect), and `Err` for other I/O failures.
pub fn handle_interrupt<T>(result: dialoguer::Result<T>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(expand_path(Path::new("photo.jpg")), PathBuf::from("photo.jpg"));
        assert_eq!(
            expand_path(Path::new("/tmp/photo.jpg")),
            PathBuf::from("/tmp/photo.jpg")
        );
    }

    #[test]
    fn test_expand_path_tilde() {
        let expanded = expand_path(Path::new("~/photo.jpg"));
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.ends_with("photo.jpg"));
    }
}
