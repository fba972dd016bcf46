use clap::Parser;

/// VR Home: a panel launcher for WebVR samples.
#[derive(Parser, Debug)]
#[command(name = "vrhome", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Theme to use instead of the one in the config (built-in name or YAML path).
    #[arg(long)]
    pub theme: Option<String>,

    /// Force the single-camera desktop view.
    #[arg(long)]
    pub vrmono: bool,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
