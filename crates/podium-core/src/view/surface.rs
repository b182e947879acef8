//! Display surfaces the rendered board is committed to.

use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// A surface whose contents are replaced wholesale on every render.
///
/// There is no incremental patching: each commit fully overwrites whatever
/// the previous cycle wrote.
pub trait DisplaySurface {
    fn replace(&mut self, markup: &str) -> Result<()>;
}

/// Writes markup to a file, e.g. for an OBS browser source or a static page
/// include.
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DisplaySurface for FileSurface {
    fn replace(&mut self, markup: &str) -> Result<()> {
        fs::write(&self.path, markup)?;
        Ok(())
    }
}

/// In-memory surface for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    contents: String,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }
}

impl DisplaySurface for MemorySurface {
    fn replace(&mut self, markup: &str) -> Result<()> {
        self.contents.clear();
        self.contents.push_str(markup);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_surface_overwrites() {
        let mut surface = MemorySurface::new();
        surface.replace("first").unwrap();
        surface.replace("second").unwrap();
        assert_eq!(surface.contents(), "second");
    }

    #[test]
    fn test_file_surface_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.html");

        let mut surface = FileSurface::new(&path);
        surface.replace("<div>old</div>").unwrap();
        surface.replace("<div>new</div>").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "<div>new</div>");
    }
}
