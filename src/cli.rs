use dirs_next as dirs;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigFile {
    /// passed on the command line, must exist
    Explicit(PathBuf),
    /// the per-user default, used only if it exists
    Default(Option<PathBuf>),
}

impl ConfigFile {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigFile::Explicit(path) => Some(path),
            ConfigFile::Default(path) => path.as_deref(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        let default_path =
            dirs::config_dir().map(|dir| dir.join("gruvbox-icons").join("config.toml"));
        ConfigFile::Default(default_path)
    }
}

impl From<Option<PathBuf>> for ConfigFile {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ConfigFile::Explicit(path),
            None => ConfigFile::default(),
        }
    }
}

impl std::fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.path() {
            Some(path) => write!(f, "{}", path.display()),
            None => write!(f, "<none>"),
        }
    }
}

/// Build tooling for the Mint-L Gruvbox icon themes.
#[derive(clap::Parser)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Sets a custom configuration file path
    #[arg(short, long, env = "GRUVBOX_ICONS_CONFIG_FILE")]
    pub config_file: Option<PathBuf>,

    /// Sets the configuration from a string
    #[arg(long, env = "GRUVBOX_ICONS_CONFIG")]
    pub config_string: Option<String>,

    /// Logs details about every processed folder and file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub subcommand: Cmd,
}

#[derive(clap::Subcommand)]
pub enum Cmd {
    /// Generates index.theme files for all theme directories
    Index(index::Cli),

    /// Generates color variants of the template SVG
    Colors(colors::Cli),

    /// Prints the active configuration
    Config,

    /// Prints version information
    Version,
}

pub mod index {
    use std::path::PathBuf;

    #[derive(clap::Args)]
    pub struct Cli {
        /// Directory containing the theme directories
        #[arg(long)]
        pub root: Option<PathBuf>,

        /// Glob selecting the theme directories under the root
        #[arg(long)]
        pub theme_glob: Option<String>,

        /// Prints the generated files instead of writing them
        #[arg(long)]
        pub dry_run: bool,
    }
}

pub mod colors {
    use std::path::PathBuf;

    #[derive(clap::Args)]
    pub struct Cli {
        /// Template SVG containing the source color
        #[arg(long)]
        pub source: Option<PathBuf>,

        /// Directory the variants are written to
        #[arg(long)]
        pub output_dir: Option<PathBuf>,
    }
}
