use std::path::{Path, PathBuf};

use crate::{DbError, Result};

/// Check if the DSN represents an in-memory SQLite database.
///
/// Matches `sqlite::memory:`, `sqlite://:memory:` and DSNs carrying `mode=memory`.
pub fn is_memory_dsn(dsn: &str) -> bool {
    let dsn = dsn.trim();
    if dsn.eq_ignore_ascii_case("sqlite::memory:") || dsn.eq_ignore_ascii_case("sqlite://:memory:")
    {
        return true;
    }

    match dsn.split_once('?') {
        Some((_, query)) => query.split('&').any(|pair| {
            pair.split_once('=')
                .map(|(k, v)| k.eq_ignore_ascii_case("mode") && v.eq_ignore_ascii_case("memory"))
                .unwrap_or(false)
        }),
        None => false,
    }
}

/// Expand a sqlite DSN into an absolute-path DSN using a base directory.
/// - In-memory DSNs collapse to `sqlite::memory:`.
/// - Backslashes are normalized into forward slashes.
/// - With `create_dirs`, the parent directory of the database file is created.
pub fn absolutize_dsn(dsn: &str, base_dir: &Path, create_dirs: bool) -> Result<String> {
    if is_memory_dsn(dsn) {
        return Ok("sqlite::memory:".to_string());
    }

    let db_path = dsn
        .strip_prefix("sqlite://")
        .ok_or_else(|| DbError::UnknownDsn(format!("DSN must start with sqlite:// (got: {dsn})")))?;

    let (path_str, query) = match db_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (db_path, None),
    };

    let mut p = PathBuf::from(path_str);
    if p.as_os_str().is_empty() {
        return Err(DbError::UnknownDsn("empty SQLite path in DSN".to_string()));
    }
    if p.is_relative() {
        p = base_dir.join(p);
    }

    if create_dirs {
        if let Some(dir) = p.parent() {
            std::fs::create_dir_all(dir)?;
        }
    }

    let mut out = String::from("sqlite://");
    out.push_str(&p.to_string_lossy().replace('\\', "/"));
    if let Some(q) = query {
        out.push('?');
        out.push_str(q);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_dsns_are_detected() {
        assert!(is_memory_dsn("sqlite::memory:"));
        assert!(is_memory_dsn("sqlite://:memory:"));
        assert!(is_memory_dsn("sqlite://file.db?mode=memory&cache=shared"));
        assert!(!is_memory_dsn("sqlite://file.db?mode=rwc"));
        assert!(!is_memory_dsn("postgres://localhost/db"));
    }

    #[test]
    fn relative_path_is_joined_onto_base_dir() {
        let tmp = tempdir().unwrap();
        let out = absolutize_dsn("sqlite://database/app.db?mode=rwc", tmp.path(), true).unwrap();

        let expected = tmp.path().join("database/app.db");
        assert_eq!(
            out,
            format!("sqlite://{}?mode=rwc", expected.to_string_lossy().replace('\\', "/"))
        );
        assert!(tmp.path().join("database").is_dir());
    }

    #[test]
    fn memory_dsn_is_normalized() {
        let tmp = tempdir().unwrap();
        let out = absolutize_dsn("sqlite://:memory:", tmp.path(), true).unwrap();
        assert_eq!(out, "sqlite::memory:");
    }

    #[test]
    fn non_sqlite_dsn_is_rejected() {
        let tmp = tempdir().unwrap();
        assert!(absolutize_dsn("postgres://localhost/db", tmp.path(), false).is_err());
        assert!(absolutize_dsn("sqlite://", tmp.path(), false).is_err());
    }
}
