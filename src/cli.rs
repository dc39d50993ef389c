use clap::Parser;

/// Video used when no URL is given
pub const EXAMPLE_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

#[derive(Parser)]
#[command(
    name = "ytt",
    about = "Fetch a YouTube transcript as [MM:SS] lines",
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Cli {
    /// YouTube video URL
    #[arg(default_value = EXAMPLE_URL)]
    pub url: String,

    /// Preferred caption language, repeatable (overrides config)
    #[arg(short, long = "lang")]
    pub langs: Vec<String>,

    /// Print the whole transcript instead of a preview
    #[arg(long)]
    pub full: bool,

    /// Show config and language details
    #[arg(short, long)]
    pub verbose: bool,
}
