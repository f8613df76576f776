use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use ytfill_core::{
    AppendReport, DurationBounds, InsertOutcome, PLAYLIST_CAPACITY, PlaylistSummary, RejectReason,
    Validator, Verdict, VerdictOutcome, VideoRef, YouTubeApi, YouTubeClient, append_all,
    authorize, extract_video_id,
};

mod input;

#[derive(Parser)]
#[command(name = "ytfill")]
#[command(about = "Add YouTube links from a text file to an existing playlist")]
struct Cli {
    /// Text file containing YouTube links (one per line)
    file: PathBuf,

    /// Minimum video duration in seconds
    #[arg(long)]
    min_duration: Option<u64>,

    /// Maximum video duration in seconds
    #[arg(long)]
    max_duration: Option<u64>,

    /// OAuth client secret file downloaded from the Google console
    #[arg(long, default_value = "client_secret.json")]
    client_secret: PathBuf,
}

fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

fn create_bar(len: u64, msg: &'static str, color: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!("{{msg}} [{{bar:40.{color}}}] {{pos}}/{{len}}"))
            .unwrap()
            .progress_chars("=> "),
    );
    pb.set_message(msg);
    pb
}

fn warn(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        style("Warning:").yellow().bold(),
        message.as_ref()
    );
}

/// Render the numbered playlist menu and read a choice from stdin,
/// re-prompting until the input is a number in range.
fn choose_playlist(playlists: &[PlaylistSummary]) -> Result<&PlaylistSummary> {
    println!("\n{}", style("Available playlists:").cyan());
    for (i, playlist) in playlists.iter().enumerate() {
        println!(
            "{} (ID: {}, Videos: {})",
            style(format!("{}. {}", i + 1, playlist.title)).cyan(),
            playlist.id,
            playlist.item_count
        );
    }

    let count = playlists.len();
    loop {
        print!(
            "\n{}",
            style(format!("Enter the number of the playlist to use (1-{count}): ")).cyan()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            bail!("stdin closed before a playlist was chosen");
        }
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => return Ok(&playlists[n - 1]),
            Ok(_) => eprintln!(
                "{} Invalid choice. Please enter a number between 1 and {count}",
                style("Error:").red().bold()
            ),
            Err(_) => eprintln!(
                "{} Please enter a valid number",
                style("Error:").red().bold()
            ),
        }
    }
}

fn print_summary(verdicts: &[Verdict], parse_skipped: usize, report: &AppendReport) {
    let accepted = verdicts.iter().filter(|v| v.is_accepted()).count();
    let rejected = verdicts.len() - accepted;

    println!("\n{}", style("─".repeat(60)).dim());
    println!(
        "{} accepted, {} rejected, {} unparsable line(s)",
        style(accepted).green().bold(),
        style(rejected).yellow().bold(),
        parse_skipped
    );

    let reasons = [
        RejectReason::NotFound,
        RejectReason::Unavailable,
        RejectReason::TooShort,
        RejectReason::TooLong,
        RejectReason::Private,
    ];
    for reason in reasons {
        let n = verdicts
            .iter()
            .filter(|v| v.outcome == VerdictOutcome::Rejected(reason))
            .count();
        if n > 0 {
            println!("  {} {}", style(n).yellow(), reason);
        }
    }

    println!(
        "{} added, {} failed, {} skipped (playlist full)",
        style(report.added.len()).green().bold(),
        style(report.failed.len()).red().bold(),
        report.skipped_for_size.len()
    );
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let bounds = DurationBounds::new(cli.min_duration, cli.max_duration);

    println!(
        "\n{}  {}\n",
        style("ytfill").cyan().bold(),
        style("Playlist Filler").dim()
    );

    // Read the input up front: a missing file should fail before any
    // network round trip.
    let links = input::read_links(&cli.file)
        .await
        .with_context(|| format!("failed to read input file {}", cli.file.display()))?;

    let spinner = create_spinner("Authenticating with YouTube...");
    let token = authorize(&cli.client_secret)
        .await
        .context("authentication failed")?;
    spinner.finish_with_message(format!("{} Authenticated", style("✓").green().bold()));

    let client = YouTubeClient::new(token);

    let spinner = create_spinner("Fetching playlists...");
    let playlists = client
        .my_playlists()
        .await
        .context("failed to list playlists")?;
    spinner.finish_and_clear();

    if playlists.is_empty() {
        bail!("no playlists found; create a playlist first");
    }

    let playlist = choose_playlist(&playlists)?.clone();
    if playlist.item_count >= PLAYLIST_CAPACITY {
        bail!(
            "playlist \"{}\" already holds {} videos (YouTube's limit)",
            playlist.title,
            PLAYLIST_CAPACITY
        );
    }
    println!(
        "\n{} Selected playlist: {}",
        style("✓").green().bold(),
        style(&playlist.title).bold()
    );

    println!(
        "\n{}",
        style(format!("Processing {} links...", links.len())).cyan()
    );

    let mut refs = Vec::new();
    let mut parse_skipped = 0usize;
    for line in &links {
        match extract_video_id(line) {
            Some(id) => refs.push(VideoRef::new(id, line.clone())),
            None => {
                parse_skipped += 1;
                warn(format!("Could not extract a video ID from: {line}"));
            }
        }
    }

    let bar = create_bar(refs.len() as u64, "Validating videos", "blue");
    let validator = Validator::new(bounds);
    let verdicts = validator
        .classify_all(&client, &refs, |batch| {
            for verdict in batch {
                if let VerdictOutcome::Rejected(reason) = &verdict.outcome {
                    bar.println(format!(
                        "{} Video {} is {}",
                        style("Warning:").yellow().bold(),
                        verdict.video.id,
                        reason
                    ));
                }
            }
            bar.inc(batch.len() as u64);
        })
        .await;
    bar.finish_and_clear();

    let accepted: Vec<VideoRef> = verdicts
        .iter()
        .filter(|v| v.is_accepted())
        .map(|v| v.video.clone())
        .collect();

    if accepted.is_empty() {
        println!(
            "\n{} No valid YouTube videos found.",
            style("Error:").red().bold()
        );
        print_summary(&verdicts, parse_skipped, &AppendReport::default());
        return Ok(());
    }
    println!(
        "\n{} Found {} valid video(s)",
        style("✓").green().bold(),
        accepted.len()
    );

    let bar = create_bar(accepted.len() as u64, "Adding to playlist", "green");
    let report = append_all(&client, &playlist, &accepted, |video, outcome| {
        match outcome {
            InsertOutcome::Added => bar.println(format!(
                "{} Added video {} to the playlist",
                style("✓").green().bold(),
                video.id
            )),
            InsertOutcome::Failed(e) => bar.println(format!(
                "{} Failed to add video {}: {}",
                style("✗").red().bold(),
                video.id,
                e
            )),
            InsertOutcome::SkippedForSize => {}
        }
        bar.inc(1);
    })
    .await;
    bar.finish_and_clear();

    if !report.skipped_for_size.is_empty() {
        warn(format!(
            "{} video(s) skipped: playlist would exceed YouTube's {} video limit",
            report.skipped_for_size.len(),
            PLAYLIST_CAPACITY
        ));
    }

    print_summary(&verdicts, parse_skipped, &report);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}
