pub mod colors;
pub mod config;
pub mod index;

pub const VERSION: Option<&str> = option_env!("GRUVBOX_ICONS_VERSION");
