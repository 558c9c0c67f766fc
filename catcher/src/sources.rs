use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbImage;
use log::{debug, info};

use crate::{CaptureError, FrameSource};

const FRAME_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// Replays a directory of recorded frames in file-name order
#[derive(Debug, Clone)]
pub struct ImageDirSource {
    frames: VecDeque<PathBuf>,
}

impl ImageDirSource {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, CaptureError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|source| CaptureError::List {
            path: dir.to_path_buf(),
            source,
        })?;

        let mut frames: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_frame(path))
            .collect();
        frames.sort();

        info!("Found {} frames in {}", frames.len(), dir.display());
        Ok(Self {
            frames: frames.into(),
        })
    }

    /// Frames not yet returned
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

fn is_frame(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| FRAME_EXTENSIONS.iter().any(|f| f.eq_ignore_ascii_case(ext)))
}

impl FrameSource for ImageDirSource {
    fn next_frame(&mut self) -> Result<Option<RgbImage>, CaptureError> {
        let Some(path) = self.frames.pop_front() else {
            return Ok(None);
        };
        debug!("Reading frame {}", path.display());
        let image = image::open(&path).map_err(|source| CaptureError::Decode { path, source })?;
        Ok(Some(image.to_rgb8()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_frame_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.JPG", "c.jpeg", "notes.txt", "no_extension"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        assert!(is_frame(&dir.path().join("a.png")));
        assert!(is_frame(&dir.path().join("b.JPG")));
        assert!(is_frame(&dir.path().join("c.jpeg")));
        assert!(!is_frame(&dir.path().join("notes.txt")));
        assert!(!is_frame(&dir.path().join("no_extension")));
        // Directories and missing files are never frames
        assert!(!is_frame(&dir.path().join("nested.png")));
        assert!(!is_frame(&dir.path().join("missing.png")));

        let source = ImageDirSource::open(dir.path()).unwrap();
        assert_eq!(source.remaining(), 3);
    }

    #[test]
    fn test_open_missing_dir_fails() {
        let err = ImageDirSource::open("no/such/frames/dir").unwrap_err();
        assert!(matches!(err, CaptureError::List { .. }));
    }
}
