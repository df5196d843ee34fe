//! Generation of `index.theme` descriptors for icon theme directories.

use crate::config::index::Settings;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

mod entry;
mod render;

pub use entry::{derive_entries, Entry, Kind};
pub use render::render;

pub const DESCRIPTOR_FILE_NAME: &str = "index.theme";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid theme glob '{0}'")]
    InvalidGlob(String, #[source] glob::PatternError),
    #[error("failed to read directory {}", .0.display())]
    ReadDir(PathBuf, #[source] std::io::Error),
    #[error("failed to write {}", .0.display())]
    Write(PathBuf, #[source] std::io::Error),
    #[error("failed to write descriptors for {} of {} theme directories: {}", .failed.len(), .total, display_paths(.failed))]
    Incomplete { failed: Vec<PathBuf>, total: usize },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ThemeDir {
    pub name: String,
    pub path: PathBuf,
}

impl ThemeDir {
    pub fn descriptor_path(&self) -> PathBuf {
        self.path.join(DESCRIPTOR_FILE_NAME)
    }
}

/// Lists the theme directories directly under `root` whose names match `theme_glob`.
pub fn discover_theme_dirs(root: &Path, theme_glob: &str) -> Result<Vec<ThemeDir>, Error> {
    let pattern = glob::Pattern::new(theme_glob)
        .map_err(|e| Error::InvalidGlob(theme_glob.to_owned(), e))?;
    let options = glob::MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    if !root.is_dir() {
        tracing::debug!(root = %root.display(), "theme root is not a directory");
        return Ok(Vec::new());
    }
    let names = entry::subdirectories(root).map_err(|e| Error::ReadDir(root.to_owned(), e))?;

    Ok(names
        .into_iter()
        .filter(|name| pattern.matches_with(name, options))
        .map(|name| ThemeDir {
            path: root.join(&name),
            name,
        })
        .collect())
}

/// A rendered descriptor and where it belongs.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Descriptor {
    pub path: PathBuf,
    pub contents: String,
}

impl Descriptor {
    pub fn for_theme(theme: &ThemeDir, settings: &Settings) -> Result<Descriptor, Error> {
        let entries = derive_entries(&theme.path, settings)
            .map_err(|e| Error::ReadDir(theme.path.clone(), e))?;
        Ok(Descriptor {
            path: theme.descriptor_path(),
            contents: render(&theme.name, &entries, settings),
        })
    }

    pub fn write(&self) -> Result<(), Error> {
        std::fs::write(&self.path, &self.contents).map_err(|e| Error::Write(self.path.clone(), e))
    }
}

/// Writes (or, in dry-run mode, prints to `preview`) the descriptor of every theme
/// directory selected by `settings`.
///
/// A failure for one theme does not stop the others; the run then fails with
/// [`Error::Incomplete`]. Returns the descriptor paths that were handled.
pub fn generate(settings: &Settings, preview: &mut impl Write) -> Result<Vec<PathBuf>, Error> {
    let themes = discover_theme_dirs(&settings.root, &settings.theme_glob)?;
    if themes.is_empty() {
        tracing::info!(
            "No theme directories matching {} under {}",
            settings.theme_glob,
            settings.root.display()
        );
        return Ok(Vec::new());
    }

    let mut handled = Vec::new();
    let mut failed = Vec::new();
    for theme in &themes {
        let result = Descriptor::for_theme(theme, settings).and_then(|descriptor| {
            if settings.dry_run {
                writeln!(preview, "--- {} (dry-run) ---", descriptor.path.display())
                    .and_then(|_| writeln!(preview, "{}", descriptor.contents))
                    .map_err(|e| Error::Write(descriptor.path.clone(), e))?;
            } else {
                descriptor.write()?;
                tracing::info!("wrote {}", descriptor.path.display());
            }
            Ok(descriptor.path)
        });
        match result {
            Ok(path) => handled.push(path),
            Err(error) => {
                tracing::error!("{:#}", eyre::Report::new(error));
                failed.push(theme.descriptor_path());
            }
        }
    }

    if failed.is_empty() {
        Ok(handled)
    } else {
        Err(Error::Incomplete {
            failed,
            total: themes.len(),
        })
    }
}
