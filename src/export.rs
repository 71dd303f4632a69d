//! Multi-size icon export.
//!
//! Walks the catalog in order, resamples the master composite to each
//! entry's edge length with a quality (area-averaging) filter, and writes
//! one lossless PNG per entry. Export is sequential and best-effort: a
//! failing entry aborts the remaining ones but already-written files stay
//! on disk.

use std::io;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbaImage;
use log::info;

use crate::catalog::{IconCatalog, IconSpec};
use crate::error::{Error, Result};

/// Writes one PNG per catalog entry into `dir`, returning the written paths
/// in catalog order.
///
/// Each icon is exactly `resolved_px()` square. Resampling uses a linear
/// area-averaging filter, never nearest-neighbor; entries matching the
/// master's resolution are written without resampling. Output files get
/// mode `0o755` on Unix.
///
/// The first failing entry surfaces as [`Error::Io`] naming that entry and
/// stops the loop; prior files are not rolled back.
pub fn export_all(master: &RgbaImage, catalog: &IconCatalog, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(catalog.len());

    for spec in catalog {
        info!("* {}", spec.name);
        written.push(export_one(master, spec, dir)?);
    }

    Ok(written)
}

/// Resizes and writes a single catalog entry.
fn export_one(master: &RgbaImage, spec: &IconSpec, dir: &Path) -> Result<PathBuf> {
    let px = spec.resolved_px();

    let icon = if (px, px) == master.dimensions() {
        master.clone()
    } else {
        imageops::resize(master, px, px, FilterType::Triangle)
    };

    let path = dir.join(spec.file_name());
    icon.save(&path).map_err(|e| to_entry_error(&spec.name, e))?;
    set_file_mode(&path, &spec.name)?;

    Ok(path)
}

fn to_entry_error(entry: &str, e: image::ImageError) -> Error {
    let source = match e {
        image::ImageError::IoError(io_err) => io_err,
        other => io::Error::other(other),
    };
    Error::Io {
        entry: entry.to_string(),
        source,
    }
}

#[cfg(unix)]
fn set_file_mode(path: &Path, entry: &str) -> Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| Error::Io {
        entry: entry.to_string(),
        source,
    })
}

#[cfg(not(unix))]
fn set_file_mode(_path: &Path, _entry: &str) -> Result<()> {
    Ok(())
}
