//! File system operations.

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use super::RealRuntime;

impl RealRuntime {
    #[tracing::instrument(skip(self, contents))]
    pub(crate) fn write_impl(&self, path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                debug!("Creating directory {:?}", parent);
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
        }
        fs::write(path, contents).with_context(|| format!("Failed to write to file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use crate::runtime::{RealRuntime, Runtime};
    use tempfile::tempdir;

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/nested/page.html");

        RealRuntime.write(&path, b"<html></html>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("page.html");

        RealRuntime.write(&path, b"old").unwrap();
        RealRuntime.write(&path, b"new").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
