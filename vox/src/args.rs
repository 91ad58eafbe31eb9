use std::path::PathBuf;

use clap::Parser;

/// Vox TTS relay
#[derive(Debug, Parser)]
#[command(name = "vox", about = "TTS relay that keeps the speech-provider credential server-side")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "vox.toml", env = "VOX_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VOX_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
