use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use festival_lineup::{fetch, parse_lineup, parse_lineup_file, Lineup, Settings};
use tracing::info;

#[derive(Parser)]
#[command(name = "lineup", about = "Extract a festival lineup from a favorited-artists page")]
struct Cli {
    /// Path to a saved .html page
    #[arg(short, long, conflicts_with = "url")]
    input: Option<PathBuf>,
    /// Fetch the page from this URL instead
    #[arg(short, long)]
    url: Option<String>,
    /// Year to assume for panel dates (overrides LINEUP_YEAR)
    #[arg(short, long)]
    year: Option<i32>,
    /// Print the lineup as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::from_env().context("Failed to load LINEUP_* settings")?;
    if let Some(year) = cli.year {
        settings.year = year;
    }

    let lineup = match (&cli.input, &cli.url) {
        (Some(path), _) => parse_lineup_file(path, &settings)
            .with_context(|| format!("Failed parsing the lineup from {}", path.display()))?,
        (None, Some(url)) => {
            let raw = fetch::fetch_page(url)
                .await
                .with_context(|| format!("Failed to fetch {}", url))?;
            parse_lineup(&raw, &settings).context("Failed parsing the lineup")?
        }
        (None, None) => {
            println!("an html file or url is required to parse. please use the -i or -u flag");
            return Ok(());
        }
    };

    info!("Found {} artists", lineup.size());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&lineup)?);
    } else {
        print_lineup(&lineup);
    }

    Ok(())
}

fn print_lineup(lineup: &Lineup) {
    for artist in lineup.artists() {
        let mut line = format!("{} {}", artist.name, artist.img);
        if !artist.stage.is_empty() {
            line.push_str(&format!(" | {}", artist.stage));
        }
        if let Some(t) = artist.set_time {
            line.push_str(&format!(" | {}", t.format("%a %b %-d %H:%M %:z")));
        }
        println!("{}", line);
    }
}
