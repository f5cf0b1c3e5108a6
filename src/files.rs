use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::FileConfig;
use crate::console::Console;
use crate::error::{Result, TourError};

/// What happened to the scratch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub read_back: String,
    pub existed_before_delete: bool,
    pub exists_after_delete: bool,
}

pub fn write_text(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| TourError::io(path, e))?;
    debug!(path = %path.display(), bytes = content.len(), "scratch file written");
    Ok(())
}

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| TourError::io(path, e))
}

pub fn delete(path: &Path) -> Result<()> {
    fs::remove_file(path).map_err(|e| TourError::io(path, e))?;
    debug!(path = %path.display(), "scratch file deleted");
    Ok(())
}

/// Removes the scratch file on drop unless disarmed, so an error between the
/// write and the delete does not leave it behind.
struct ScratchGuard<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> ScratchGuard<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        if self.armed && self.path.exists() {
            match fs::remove_file(self.path) {
                Ok(()) => debug!(path = %self.path.display(), "scratch file cleaned up"),
                Err(e) => warn!(path = %self.path.display(), error = %e, "scratch file left behind"),
            }
        }
    }
}

/// Writes `content` to `path`, reads it back, then deletes the file if it
/// exists.
pub fn round_trip(path: &Path, content: &str) -> Result<FileReport> {
    round_trip_with(path, content, read_text)
}

fn round_trip_with<R>(path: &Path, content: &str, read: R) -> Result<FileReport>
where
    R: FnOnce(&Path) -> Result<String>,
{
    write_text(path, content)?;
    let guard = ScratchGuard::new(path);
    let read_back = read(path)?;
    guard.disarm();

    let existed_before_delete = path.exists();
    if existed_before_delete {
        delete(path)?;
    }

    Ok(FileReport {
        path: path.to_path_buf(),
        read_back,
        existed_before_delete,
        exists_after_delete: path.exists(),
    })
}

// =============================================================================
// Section
// =============================================================================

pub fn demo<W: Write>(console: &mut Console<W>, files: &FileConfig) -> Result<()> {
    console.section("File Operations")?;

    let path = files.path();
    let report = round_trip(&path, &files.content)?;

    console.line(format!("Written to {}", files.name))?;
    console.line(format!("Read from {}: {}", files.name, report.read_back))?;
    if report.existed_before_delete {
        console.line(format!("Deleted {}", files.name))?;
    }
    console.field("Still exists", report.exists_after_delete)?;
    console.blank()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip_reproduces_content_and_deletes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("example.txt");

        let report = round_trip(&path, "Hello, Rust File I/O!").unwrap();

        assert_eq!(report.read_back, "Hello, Rust File I/O!");
        assert!(report.existed_before_delete);
        assert!(!report.exists_after_delete);
        assert!(!path.exists());
    }

    #[test]
    fn test_round_trip_unicode_and_newlines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("multi.txt");
        let content = "line one\nzweite Zeile: äöü\n第三行\n";

        let report = round_trip(&path, content).unwrap();
        assert_eq!(report.read_back, content);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no-such-dir").join("example.txt");

        let result = round_trip(&path, "x");
        assert!(matches!(result, Err(TourError::Io { path: p, .. }) if p == path));
    }

    #[test]
    fn test_failed_read_still_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("example.txt");

        let result = round_trip_with(&path, "Hello, Rust File I/O!", |p| {
            assert!(p.exists());
            Err(TourError::io(p, std::io::Error::other("read interrupted")))
        });

        assert!(matches!(result, Err(TourError::Io { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let result = read_text(&dir.path().join("absent.txt"));
        assert!(matches!(result, Err(TourError::Io { .. })));
    }

    #[test]
    fn test_demo_output() {
        let dir = TempDir::new().unwrap();
        let files = FileConfig {
            dir: dir.path().to_path_buf(),
            ..FileConfig::default()
        };

        let mut console = Console::buffer();
        demo(&mut console, &files).unwrap();

        assert_eq!(
            console.contents(),
            "--- File Operations ---\n\
             Written to example.txt\n\
             Read from example.txt: Hello, Rust File I/O!\n\
             Deleted example.txt\n\
             Still exists: false\n\n"
        );
        assert!(!files.path().exists());
    }
}
