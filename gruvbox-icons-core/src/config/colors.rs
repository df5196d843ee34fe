use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, path::PathBuf};

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(default)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    /// template SVG every variant is generated from
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// color literal in the template that gets replaced
    pub source_color: HexColor,
    pub table: ColorTable,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            source: PathBuf::from("green.svg"),
            output_dir: PathBuf::from("."),
            source_color: HexColor("8bb158".to_owned()),
            table: ColorTable::default(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorTable(pub BTreeMap<ColorName, HexColor>);

impl Default for ColorTable {
    fn default() -> Self {
        let colors = [
            ("bg235", "282828"),
            ("red124", "cc241d"),
            ("green106", "98971a"),
            ("yellow172", "d79921"),
            ("blue66", "458588"),
            ("purple132", "b16286"),
            ("aqua72", "689d6a"),
            ("gray246", "a89984"),
            ("gray245", "928374"),
            ("red167", "fb4934"),
            ("green142", "b8bb26"),
            ("yellow214", "fadb2f"),
            ("blue109", "83a598"),
            ("purple175", "d3869b"),
            ("fg223", "ebdbb2"),
            ("orange166", "d65d0e"),
            ("orange208", "fe8019"),
        ];
        ColorTable(
            colors
                .iter()
                .map(|(name, value)| (ColorName(name.to_string()), HexColor(value.to_string())))
                .collect(),
        )
    }
}

impl ColorTable {
    pub fn iter(&self) -> impl Iterator<Item = (&ColorName, &HexColor)> {
        self.0.iter()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InvalidColor {
    #[error("invalid color name '{0}'")]
    Name(String),
    #[error("invalid hex color '{0}', expected six hex digits")]
    Hex(String),
}

/// Name of a color variant, used as the output file stem.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorName(String);

impl ColorName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColorName {
    type Error = InvalidColor;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        let is_path_like = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(&['/', '\\'][..]);
        if is_path_like {
            Err(InvalidColor::Name(name))
        } else {
            Ok(ColorName(name))
        }
    }
}

impl TryFrom<&str> for ColorName {
    type Error = InvalidColor;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        ColorName::try_from(name.to_owned())
    }
}

impl From<ColorName> for String {
    fn from(name: ColorName) -> Self {
        name.0
    }
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Six hex digits without a leading `#`, as they appear in SVG style attributes.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.len() == 6 && value.chars().all(|c| c.is_ascii_hexdigit()) {
            Ok(HexColor(value))
        } else {
            Err(InvalidColor::Hex(value))
        }
    }
}

impl TryFrom<&str> for HexColor {
    type Error = InvalidColor;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        HexColor::try_from(value.to_owned())
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_seventeen_default_colors() {
        let table = ColorTable::default();

        assert_eq!(table.0.len(), 17);
        assert_eq!(
            table.0.get(&ColorName::try_from("red124").unwrap()),
            Some(&HexColor::try_from("cc241d").unwrap())
        );
    }

    #[test]
    fn should_validate_hex_colors() {
        assert!(HexColor::try_from("8bb158").is_ok());
        assert!(HexColor::try_from("FE8019").is_ok());
        assert!(HexColor::try_from("#8bb158").is_err());
        assert!(HexColor::try_from("8bb15").is_err());
        assert!(HexColor::try_from("8bb15g").is_err());
        assert!(HexColor::try_from("").is_err());
    }

    #[test]
    fn should_validate_color_names() {
        assert!(ColorName::try_from("orange208").is_ok());
        assert!(ColorName::try_from("").is_err());
        assert!(ColorName::try_from("..").is_err());
        assert!(ColorName::try_from("sub/red").is_err());
        assert!(ColorName::try_from("sub\\red").is_err());
    }
}
