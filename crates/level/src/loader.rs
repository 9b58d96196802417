use crate::grid::Level;
use std::path::{Path, PathBuf};

/// Errors from loading a map file.
#[derive(Debug, thiserror::Error)]
pub enum LevelError {
    #[error("cannot open map: {path}\ncurrent directory: {cwd}")]
    NotFound { path: PathBuf, cwd: String },
    #[error("failed to read map {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load an ASCII map from disk and parse it into a [`Level`].
///
/// A missing file is reported together with the current working directory,
/// since relative map paths are resolved against it.
pub fn load_map_ascii(path: impl AsRef<Path>) -> Result<Level, LevelError> {
    let path = path.as_ref();

    if !path.exists() {
        let cwd = std::env::current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|_| "<unknown>".into());
        return Err(LevelError::NotFound {
            path: path.to_path_buf(),
            cwd,
        });
    }

    let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let level = Level::parse(&text);
    tracing::debug!(
        "loaded map {}: {}x{}, player at ({}, {})",
        path.display(),
        level.width(),
        level.height(),
        level.player().x,
        level.player().y
    );
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, GridPos};
    use std::io::Write;

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "####").unwrap();
        writeln!(file, "#.@#").unwrap();
        writeln!(file, "####").unwrap();

        let level = load_map_ascii(file.path()).unwrap();
        assert_eq!(level.width(), 4);
        assert_eq!(level.height(), 3);
        assert_eq!(level.player(), GridPos::new(2, 1));
        assert_eq!(level.cell(1, 1), Some(Cell::Floor));
    }

    #[test]
    fn missing_file_reports_path_and_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.map");

        let err = load_map_ascii(&path).unwrap_err();
        assert!(matches!(err, LevelError::NotFound { .. }));
        let msg = err.to_string();
        assert!(msg.contains("nope.map"));
        assert!(msg.contains("current directory"));
    }

    #[test]
    fn directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_map_ascii(dir.path()).unwrap_err();
        assert!(matches!(err, LevelError::Io { .. }));
    }

    #[test]
    fn empty_file_loads_as_empty_level() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let level = load_map_ascii(file.path()).unwrap();
        assert!(level.is_empty());
    }
}
