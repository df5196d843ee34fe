//! Generation of color variants of a template SVG.

use crate::config::colors::{HexColor, Settings};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read source image {}", .0.display())]
    ReadSource(PathBuf, #[source] std::io::Error),
    #[error("failed to write {}", .0.display())]
    Write(PathBuf, #[source] std::io::Error),
    #[error("refusing to overwrite the source image with variant {}", .0.display())]
    WouldOverwriteSource(PathBuf),
    #[error("failed to write {} of {} color variants: {}", .failed.len(), .total, display_paths(.failed))]
    Incomplete { failed: Vec<PathBuf>, total: usize },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Replaces every literal occurrence of `from` in `template` with `to`.
///
/// Works on raw bytes, so templates in any ASCII-compatible encoding are copied
/// unchanged apart from the replaced color.
pub fn substitute(template: &[u8], from: &HexColor, to: &HexColor) -> Vec<u8> {
    let from = from.as_str().as_bytes();
    let to = to.as_str().as_bytes();
    let mut result = Vec::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = find(rest, from) {
        result.extend_from_slice(&rest[..pos]);
        result.extend_from_slice(to);
        rest = &rest[pos + from.len()..];
    }
    result.extend_from_slice(rest);
    result
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Writes one `<name>.svg` per color table entry into the output directory.
///
/// The source image is read once up front; if that fails nothing is written.
/// A failed variant does not stop the others, the run then fails with
/// [`Error::Incomplete`].
pub fn generate(settings: &Settings) -> Result<Vec<PathBuf>, Error> {
    let template = std::fs::read(&settings.source)
        .map_err(|e| Error::ReadSource(settings.source.clone(), e))?;
    tracing::debug!(source = %settings.source.display(), bytes = template.len(), "read template");

    let mut written = Vec::new();
    let mut failed = Vec::new();
    for (name, color) in settings.table.iter() {
        let path = settings.output_dir.join(format!("{}.svg", name));
        let result = if is_same_file(&path, &settings.source) {
            Err(Error::WouldOverwriteSource(path.clone()))
        } else {
            std::fs::write(&path, substitute(&template, &settings.source_color, color))
                .map_err(|e| Error::Write(path.clone(), e))
        };
        match result {
            Ok(()) => {
                tracing::info!("wrote {}", path.display());
                written.push(path);
            }
            Err(error) => {
                tracing::error!("{:#}", eyre::Report::new(error));
                failed.push(path);
            }
        }
    }

    if failed.is_empty() {
        Ok(written)
    } else {
        Err(Error::Incomplete {
            failed,
            total: settings.table.0.len(),
        })
    }
}
