use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, path::PathBuf};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// directory containing the theme directories
    pub root: PathBuf,
    /// glob selecting theme directories by name
    pub theme_glob: String,
    pub inherits: String,
    pub comment: String,
    pub scalable_min: u32,
    pub scalable_max: u32,
    /// print descriptors instead of writing them
    pub dry_run: bool,
    pub contexts: ContextLabels,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            root: PathBuf::from("mint-l-icons-gruvbox-dark"),
            theme_glob: "Mint-L*".to_owned(),
            inherits: "hicolor".to_owned(),
            comment: "Mint-L Gruvbox icon theme variant".to_owned(),
            scalable_min: 16,
            scalable_max: 512,
            dry_run: false,
            contexts: ContextLabels::default(),
        }
    }
}

/// Maps context folder names to the `Context=` value of a directory section.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextLabels(pub BTreeMap<String, String>);

impl Default for ContextLabels {
    fn default() -> Self {
        let labels = [
            ("apps", "Apps"),
            ("actions", "Actions"),
            ("categories", "Categories"),
            ("devices", "Devices"),
            ("emblems", "Emblems"),
            ("mimetypes", "MimeTypes"),
            ("places", "Places"),
            ("status", "Status"),
            ("preferences", "Preferences"),
        ];
        ContextLabels(
            labels
                .iter()
                .map(|(folder, label)| (folder.to_string(), label.to_string()))
                .collect(),
        )
    }
}

impl ContextLabels {
    pub fn label(&self, context: &str) -> String {
        match self.0.get(context) {
            Some(label) => label.clone(),
            None => capitalize(context),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
