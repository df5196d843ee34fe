use crate::cli::{self, ConfigFile};
use eyre::WrapErr;
use gruvbox_icons_core::{colors, config::Config, index};

pub fn load_config(config_string: Option<&str>, config_file: &ConfigFile) -> eyre::Result<Config> {
    if let Some(config_string) = config_string {
        return Ok(Config::parse(config_string)?);
    }
    let config = match config_file {
        ConfigFile::Explicit(path) => Config::parse_file(path)?,
        ConfigFile::Default(Some(path)) if path.is_file() => Config::parse_file(path)?,
        ConfigFile::Default(_) => {
            tracing::debug!("no configuration file at {}, using defaults", config_file);
            Config::default()
        }
    };
    if let Some(source) = &config.source {
        tracing::debug!(path = %source.display(), "loaded configuration");
    }
    Ok(config)
}

pub fn index(mut config: Config, args: cli::index::Cli) -> eyre::Result<()> {
    if let Some(root) = args.root {
        config.index.root = root;
    }
    if let Some(theme_glob) = args.theme_glob {
        config.index.theme_glob = theme_glob;
    }
    config.index.dry_run |= args.dry_run;

    let stdout = std::io::stdout();
    index::generate(&config.index, &mut stdout.lock())
        .wrap_err("failed to generate theme index files")?;
    Ok(())
}

pub fn colors(mut config: Config, args: cli::colors::Cli) -> eyre::Result<()> {
    if let Some(source) = args.source {
        config.colors.source = source;
    }
    if let Some(output_dir) = args.output_dir {
        config.colors.output_dir = output_dir;
    }

    colors::generate(&config.colors).wrap_err("failed to generate color variants")?;
    Ok(())
}

pub fn config(config: &Config) -> eyre::Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

pub fn version() -> eyre::Result<()> {
    match gruvbox_icons_core::VERSION {
        Some(version) => println!("gruvbox-icons: {}", version),
        None => println!("gruvbox-icons: {} [untagged build]", env!("CARGO_PKG_VERSION")),
    }
    Ok(())
}
