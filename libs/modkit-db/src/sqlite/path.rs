use std::io;
use std::path::PathBuf;

use super::is_memory_dsn;

/// Ensure the parent directory of a file-backed SQLite DSN exists.
pub(crate) fn prepare_sqlite_path(dsn: &str, create_dirs: bool) -> io::Result<()> {
    if !create_dirs || is_memory_dsn(dsn) {
        return Ok(());
    }

    if let Some(parent) = file_path_from_dsn(dsn).as_ref().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// `sqlite:///abs/db.sqlite`, `sqlite://rel/db.sqlite` and `sqlite:rel/db.sqlite`.
fn file_path_from_dsn(dsn: &str) -> Option<PathBuf> {
    let rest = dsn
        .strip_prefix("sqlite://")
        .or_else(|| dsn.strip_prefix("sqlite:"))?;
    let path = rest.split_once('?').map(|(p, _)| p).unwrap_or(rest);
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_parent_directories() {
        let tmp = tempdir().unwrap();
        let db = tmp.path().join("a/b/app.db");
        let dsn = format!("sqlite://{}", db.to_string_lossy().replace('\\', "/"));

        prepare_sqlite_path(&dsn, true).unwrap();
        assert!(tmp.path().join("a/b").is_dir());
    }

    #[test]
    fn extracts_paths_from_dsn_forms() {
        assert_eq!(
            file_path_from_dsn("sqlite:///tmp/x.db?mode=rwc"),
            Some(PathBuf::from("/tmp/x.db"))
        );
        assert_eq!(file_path_from_dsn("sqlite:data/x.db"), Some(PathBuf::from("data/x.db")));
        assert_eq!(file_path_from_dsn("postgres://h/db"), None);
    }
}
