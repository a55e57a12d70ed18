use clap::Parser;
use std::path::PathBuf;

use crate::display::SurfaceKind;

#[derive(Parser, Debug)]
#[command(
    name = "vidremote",
    about = "Remote control for the video shown on a single display: `curl localhost:8080/?video=<id>`",
    long_about = None,
    version,
)]
pub struct Args {
    /// HTTP port to listen on [default: 8080]
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind to localhost only (127.0.0.1) instead of all interfaces (0.0.0.0)
    #[arg(long)]
    pub localhost: bool,

    /// Path to TOML config file (overrides default search: ./vidremote.toml, ~/.config/vidremote/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// URL prefix the video id is appended to [default: https://youtube.com/embed/]
    #[arg(long, value_name = "URL")]
    pub embed_base: Option<String>,

    /// Where display scripts go [default: log]
    #[arg(long, value_enum)]
    pub surface: Option<SurfaceKind>,
}
