use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use video_player::player::SearchResults;
use video_player::{Command, Outcome, PlayerConfig, PlayerError, VideoPlayer};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive video catalog with playback and playlists", long_about = None)]
struct Args {
    /// Path to the video catalog (one `Title | id | tag,tag` per line)
    #[arg(short = 'l', long, default_value = "videos.txt")]
    library: String,

    /// Seed for PLAY_RANDOM (reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let library_path = shellexpand::tilde(&args.library);
    let mut config = PlayerConfig::new(PathBuf::from(library_path.as_ref()));
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut player = VideoPlayer::from_config(&config)?;

    println!("Video player ready. What would you like to do?");
    println!("Enter HELP for list of available commands or EXIT to terminate.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        let Some(line) = prompt(&mut input, "> ")? else {
            break;
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match command {
            Command::Exit => break,
            Command::SearchVideos(term) => {
                let results = player.search_videos(&term);
                offer_search_results(&mut player, &mut input, results)?;
            }
            Command::SearchVideosWithTag(tag) => {
                let results = player.search_videos_tag(&tag);
                offer_search_results(&mut player, &mut input, results)?;
            }
            command => print_outcome(player.execute(command)),
        }
    }

    println!("Goodbye!");
    Ok(())
}

/// Show search matches and play the one the user picks, if any
fn offer_search_results(
    player: &mut VideoPlayer,
    input: &mut impl BufRead,
    results: Result<SearchResults, PlayerError>,
) -> Result<()> {
    let results = match results {
        Ok(results) => results,
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    };

    println!("{}", results.report());
    let Some(choice) = prompt(input, "")? else {
        return Ok(());
    };
    if let Some(video_id) = results.select(&choice) {
        print_outcome(player.play_video(video_id));
    }

    Ok(())
}

fn print_outcome(outcome: Outcome) {
    match outcome {
        Ok(report) if report.lines().is_empty() => {}
        Ok(report) => println!("{}", report),
        Err(e) => println!("{}", e),
    }
}

/// Read one line, `None` at end of input
fn prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read command from stdin")?;
    Ok((read > 0).then_some(line))
}
