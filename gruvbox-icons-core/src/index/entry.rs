use crate::config::index::Settings;
use std::{cmp::Ordering, fmt, path::Path};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Kind {
    Fixed,
    Scalable,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Fixed => write!(f, "Fixed"),
            Kind::Scalable => write!(f, "Scalable"),
        }
    }
}

/// A `context/size` folder of a theme, i.e. one directory section of the descriptor.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Entry {
    pub context: String,
    pub variant: String,
    pub label: String,
    pub kind: Kind,
    pub size: u32,
    pub min_size: Option<u32>,
    pub max_size: Option<u32>,
    pub scale: Option<u32>,
}

impl Entry {
    pub fn new(context: &str, variant: &str, settings: &Settings) -> Option<Entry> {
        let label = settings.contexts.label(context);
        let entry = if variant.eq_ignore_ascii_case("scalable") {
            Entry {
                context: context.to_owned(),
                variant: variant.to_owned(),
                label,
                kind: Kind::Scalable,
                size: settings.scalable_min,
                min_size: Some(settings.scalable_min),
                max_size: Some(settings.scalable_max),
                scale: None,
            }
        } else {
            let (size, scale) = parse_size(variant)?;
            Entry {
                context: context.to_owned(),
                variant: variant.to_owned(),
                label,
                kind: Kind::Fixed,
                size,
                min_size: None,
                max_size: None,
                scale,
            }
        };
        Some(entry)
    }

    pub fn section(&self) -> String {
        format!("{}/{}", self.context, self.variant)
    }

    fn sort_key(&self) -> (&str, bool, u32, u32) {
        (
            self.context.as_str(),
            self.kind != Kind::Fixed,
            self.size,
            self.scale.unwrap_or(1),
        )
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key()
            .cmp(&other.sort_key())
            .then_with(|| self.variant.cmp(&other.variant))
    }
}

/// Parses `16`, `16@2x`, `64x64` or `64x64@2x` into a size and an optional scale.
fn parse_size(variant: &str) -> Option<(u32, Option<u32>)> {
    let lowered = variant.to_lowercase();
    let (size, scale) = match lowered.split_once("@2x") {
        Some((size, _)) => (size, Some(2)),
        None => (lowered.as_str(), None),
    };
    let base = match size.split_once('x') {
        Some((base, _)) => base,
        None => size,
    };
    base.parse().ok().map(|size| (size, scale))
}

/// Collects the directory entries of a theme, sorted in descriptor order.
pub fn derive_entries(theme_dir: &Path, settings: &Settings) -> std::io::Result<Vec<Entry>> {
    let mut entries = Vec::new();
    for context in subdirectories(theme_dir)? {
        for variant in subdirectories(&theme_dir.join(&context))? {
            match Entry::new(&context, &variant, settings) {
                Some(entry) => {
                    tracing::debug!(section = %entry.section(), kind = %entry.kind, size = entry.size, "found icon directory");
                    entries.push(entry);
                }
                None => tracing::warn!(
                    theme = %theme_dir.display(),
                    section = %format!("{}/{}", context, variant),
                    "skipping folder that is neither a size nor scalable"
                ),
            }
        }
    }
    entries.sort();
    Ok(entries)
}

/// Names of the immediate subdirectories of `dir`, sorted.
pub(crate) fn subdirectories(dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = Vec::new();
    for dir_entry in std::fs::read_dir(dir)? {
        let dir_entry = dir_entry?;
        if !dir_entry.path().is_dir() {
            continue;
        }
        match dir_entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => tracing::warn!(?name, "skipping folder with a non-UTF-8 name"),
        }
    }
    names.sort();
    Ok(names)
}
