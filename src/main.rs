use clap::Parser;
use gruvbox_icons::{
    cli::{Cli, Cmd, ConfigFile},
    commands,
};

fn setup_logger(verbose: bool) -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(
            layer()
                .with_ansi(true)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Cli::parse();
    setup_logger(args.verbose)?;

    let config_file = ConfigFile::from(args.config_file);
    let config = commands::load_config(args.config_string.as_deref(), &config_file)?;

    match args.subcommand {
        Cmd::Index(args) => commands::index(config, args),
        Cmd::Colors(args) => commands::colors(config, args),
        Cmd::Config => commands::config(&config),
        Cmd::Version => commands::version(),
    }
}
