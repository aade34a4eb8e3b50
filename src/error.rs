use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors surfaced while persisting icon artifacts.
#[derive(Debug)]
pub enum IconError {
    /// A filesystem operation (rename, create, write) failed.
    Io { path: PathBuf, source: io::Error },
    /// PNG encoding failed.
    Image(image::ImageError),
}

impl fmt::Display for IconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconError::Io { path, source } => {
                write!(f, "{}: {}", path.display(), source)
            }
            IconError::Image(e) => write!(f, "failed to encode image: {}", e),
        }
    }
}

impl std::error::Error for IconError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IconError::Io { source, .. } => Some(source),
            IconError::Image(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for IconError {
    fn from(e: image::ImageError) -> Self {
        IconError::Image(e)
    }
}
