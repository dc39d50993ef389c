use std::path::PathBuf;

use eyre::Result;
use log::{debug, info};

mod cli;

use cli::Cli;

/// Characters of transcript shown on success
const PREVIEW_CHARS: usize = 200;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytt.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytt")
        .join("logs")
}

fn build_after_help() -> String {
    format!(
        "\nConfig is read from: {}\nLogs are written to: {}",
        ytt::config::config_path().display(),
        log_dir().join("ytt.log").display()
    )
}

fn preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cmd = <Cli as clap::CommandFactory>::command().after_help(build_after_help());
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = ytt::config::Config::load().unwrap_or_else(|e| {
        debug!("Ignoring config: {e}");
        ytt::config::Config::default()
    });

    // CLI flags take priority over config
    let languages = if cli.langs.is_empty() {
        config.languages.clone().unwrap_or_default()
    } else {
        cli.langs.clone()
    };

    let mut provider = ytt::YouTubeProvider::new(reqwest::Client::new()).with_languages(languages);
    if let Some(ref user_agent) = config.user_agent {
        provider = provider.with_user_agent(user_agent.clone());
    }

    if cli.verbose {
        let config_path = ytt::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
        eprintln!("Languages: {}", provider.languages().join(", "));
    }

    match ytt::fetch_youtube_transcript(&provider, &cli.url).await {
        Ok(transcript) => {
            if cli.full {
                println!("{transcript}");
            } else {
                println!("Success! First {PREVIEW_CHARS} characters of transcript:");
                println!("{}", preview(&transcript, PREVIEW_CHARS));
                println!("...");
            }
            Ok(())
        }
        Err(e) => {
            info!("Transcript fetch failed: {e}");
            println!("Error: {e}");
            std::process::exit(1);
        }
    }
}
