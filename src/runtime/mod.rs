//! Runtime abstraction for system operations.
//!
//! The dashboard reads the clock and writes exported pages through this
//! trait so tests can pin both.
//!
//! # Structure
//!
//! - `clock` - Current time
//! - `fs` - File writes

mod clock;
mod fs;

use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait Runtime: Send + Sync {
    // Clock
    fn now(&self) -> DateTime<Utc>;

    // File System
    /// Write `contents` to `path`, creating missing parent directories.
    fn write(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RealRuntime;

impl Runtime for RealRuntime {
    fn now(&self) -> DateTime<Utc> {
        self.now_impl()
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.write_impl(path, contents)
    }
}
