//! One-shot favicon generator.
//!
//! Draws a filled, outlined circle with a centered two-character label
//! onto a 32x32 transparent canvas, then persists it as PNG (32px and a
//! derived 16px copy) plus a combined ICO, backing up any previous
//! favicon by rename first.

pub mod canvas;
pub mod error;
pub mod font;
pub mod label;
pub mod output;

use std::path::Path;

pub use canvas::produce_canvas;
pub use error::IconError;
pub use label::{LABEL, LabelFont, render_label};
pub use output::persist;

/// Run the full pipeline: produce the canvas, render the label and
/// persist all artifacts relative to `path`.
pub fn generate(path: &Path) -> Result<(), IconError> {
    let mut icon = canvas::produce_canvas();
    let font = LabelFont::acquire();
    render_label(&mut icon, &font, LABEL);
    persist(&icon, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn generate_writes_all_artifacts() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("favicon.png");

        generate(&target).unwrap();

        let primary = image::open(&target).unwrap();
        assert_eq!((primary.width(), primary.height()), (32, 32));

        let small = image::open(dir.path().join("favicon-16.png")).unwrap();
        assert_eq!((small.width(), small.height()), (16, 16));

        assert!(dir.path().join("favicon.ico").exists());
        assert!(!dir.path().join("favicon-backup.png").exists());
    }

    #[test]
    fn generate_twice_preserves_first_output() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("favicon.png");

        generate(&target).unwrap();
        let first = std::fs::read(&target).unwrap();

        generate(&target).unwrap();

        let backup = dir.path().join("favicon-backup.png");
        assert_eq!(std::fs::read(&backup).unwrap(), first);
    }
}
