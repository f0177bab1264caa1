use std::ffi::OsStr;
use std::path::Path;

use log::{debug, info};

use crate::config::SourceConfig;
use crate::record::CompressedSourceFile;
use crate::sourcemap::SourceMap;
use crate::Result;

/// Read a single file into a record keyed by its file name.
pub fn load_file(path: &Path) -> Result<(String, CompressedSourceFile)> {
    let key = path
        .file_name()
        .and_then(OsStr::to_str)
        .ok_or_else(|| format!("Not a valid source file name: {:?}", path))?
        .to_string();
    let record = CompressedSourceFile::new(std::fs::read(path)?);
    debug!("Loaded {:?} ({})", key, record);
    Ok((key, record))
}

/// Build a `SourceMap` out of every file in `source_dir` with a matching extension.
/// Files whose names aren't valid UTF-8 can't be keyed and are skipped.
pub fn load_dir(config: &SourceConfig) -> Result<SourceMap> {
    if !config.source_dir.is_dir() {
        return Err(format!("Source directory does not exist: {:?}", config.source_dir).into());
    }
    let mut map = SourceMap::new();
    for entry in std::fs::read_dir(&config.source_dir)? {
        let path = entry?.path();
        if !path.is_file() || path.extension() != Some(OsStr::new(&config.extension)) {
            continue;
        }
        if path.file_name().and_then(OsStr::to_str).is_none() {
            debug!("Skipping non UTF-8 file name {:?}", path);
            continue;
        }
        let (key, record) = load_file(&path)?;
        map.set(key, record);
    }
    info!(
        "Loaded {} source files from {:?}",
        map.len(),
        config.source_dir
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::{load_dir, load_file};
    use crate::config::SourceConfig;
    use crate::record::CompressedSourceFile;

    #[test]
    fn test_load_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.qs");
        std::fs::write(&path, b"compressed-bytes-1").unwrap();

        let (key, record) = load_file(&path).unwrap();
        assert_eq!(key, "a.qs");
        assert_eq!(record, CompressedSourceFile::new("compressed-bytes-1"));
    }

    #[test]
    fn test_load_dir_filters_extension() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.qs"), b"x").unwrap();
        std::fs::write(dir.path().join("b.qs"), b"y").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"z").unwrap();
        std::fs::create_dir(dir.path().join("nested.qs")).unwrap();

        let cfg = SourceConfig {
            source_dir: dir.path().to_path_buf(),
            extension: "qs".to_string(),
        };
        let map = load_dir(&cfg).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get_or_empty("a.qs").bytes(), b"x");
        assert_eq!(map.get_or_empty("b.qs").bytes(), b"y");
        assert!(map.get_or_empty("notes.txt").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_load_dir_skips_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.qs"), b"x").unwrap();
        let name = OsStr::from_bytes(b"bad\xff.qs");
        // Some filesystems refuse such names outright.
        if std::fs::write(dir.path().join(name), b"y").is_err() {
            return;
        }

        let cfg = SourceConfig {
            source_dir: dir.path().to_path_buf(),
            extension: "qs".to_string(),
        };
        let map = load_dir(&cfg).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get_or_empty("a.qs").bytes(), b"x");
    }

    #[test]
    fn test_load_missing_dir() {
        let dir = tempdir().unwrap();
        let cfg = SourceConfig {
            source_dir: dir.path().join("nope"),
            extension: "qs".to_string(),
        };
        assert!(load_dir(&cfg).is_err());
    }
}
