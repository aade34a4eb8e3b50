use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::error::IconError;

/// Edge length of the derived compatibility favicon.
pub const SMALL_SIZE: u32 = 16;

const BACKUP_MARKER: &str = "-backup";
const SMALL_MARKER: &str = "-16";

/// Insert a marker between the file stem and the extension:
/// `favicon.png` becomes `favicon-16.png`.
/// Target paths are expected to end in `.png`.
fn with_marker(path: &Path, marker: &str) -> PathBuf {
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("favicon");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("png");
    path.with_file_name(format!("{}{}.{}", stem, marker, ext))
}

fn io_err(path: &Path, source: std::io::Error) -> IconError {
    IconError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Rename an existing file at `path` out of the way so it is never
/// overwritten. Returns the backup path if a rename happened.
pub fn backup_existing(path: &Path) -> Result<Option<PathBuf>, IconError> {
    if !path.exists() {
        return Ok(None);
    }
    let backup = with_marker(path, BACKUP_MARKER);
    fs::rename(path, &backup).map_err(|e| io_err(path, e))?;
    Ok(Some(backup))
}

/// Persist the generated icon: back up any previous favicon, write the
/// primary PNG, derive and write the 16x16 PNG, then write a combined
/// ICO next to the primary.
pub fn persist(icon: &RgbaImage, path: &Path) -> Result<(), IconError> {
    if let Some(backup) = backup_existing(path)? {
        println!("✅ Backed up original favicon to {}", backup.display());
    }

    icon.save(path)?;
    println!("✅ Created new favicon at {}", path.display());

    let small = imageops::resize(icon, SMALL_SIZE, SMALL_SIZE, FilterType::Lanczos3);
    let small_path = with_marker(path, SMALL_MARKER);
    small.save(&small_path)?;
    println!("✅ Created 16x16 version at {}", small_path.display());

    let ico_path = path.with_extension("ico");
    write_ico(&[icon, &small], &ico_path)?;
    println!("✅ Created icon bundle at {}", ico_path.display());

    println!("🎨 New favicon created successfully!");
    Ok(())
}

/// Encode the given images into a single multi-size ICO file.
fn write_ico(images: &[&RgbaImage], path: &Path) -> Result<(), IconError> {
    let mut icon_dir = ico::IconDir::new(ico::ResourceType::Icon);

    for img in images {
        let (width, height) = img.dimensions();
        let entry = ico::IconImage::from_rgba_data(width, height, img.as_raw().clone());
        icon_dir.add_entry(ico::IconDirEntry::encode(&entry).map_err(|e| io_err(path, e))?);
    }

    let file = fs::File::create(path).map_err(|e| io_err(path, e))?;
    icon_dir
        .write(BufWriter::new(file))
        .map_err(|e| io_err(path, e))?;

    Ok(())
}
