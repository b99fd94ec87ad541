use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use console::Emoji;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use castdown::descriptor::SHOW_DESCRIPTOR_FILENAME;
use castdown::{
    GenerateOptions, LogReporter, NoopReporter, ProgressEvent, ProgressReporter,
    SharedProgressReporter, generate_feed,
};

// Emoji with fallback for terminals without Unicode support
static MICROPHONE: Emoji<'_, '_> = Emoji("🎙️  ", "");
static BOOK: Emoji<'_, '_> = Emoji("📖 ", "[~] ");
static HEADPHONES: Emoji<'_, '_> = Emoji("🎧 ", "[i] ");
static WARNING: Emoji<'_, '_> = Emoji("⚠️  ", "[?] ");
static FAILURE: Emoji<'_, '_> = Emoji("❌ ", "[!] ");
static PARTY: Emoji<'_, '_> = Emoji("🎉 ", "[*] ");
static FOLDER: Emoji<'_, '_> = Emoji("📁 ", "");

/// Generate a podcast RSS feed from markdown-described episode directories
#[derive(Parser, Debug)]
#[command(name = "castdown")]
#[command(about = "Generate a podcast RSS feed from markdown-described episode directories")]
#[command(version)]
struct Args {
    /// Directory containing the show descriptor
    #[arg(default_value = ".")]
    root: PathBuf,

    /// File name of the show descriptor inside ROOT
    #[arg(short, long, default_value = SHOW_DESCRIPTOR_FILENAME)]
    descriptor: String,

    /// Write the feed here instead of <episodes_path>/feed.xml
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep the directory listing order instead of sorting episodes by name
    #[arg(long)]
    unsorted: bool,

    /// Skip episodes without an audio file instead of hashing them as empty
    #[arg(long)]
    skip_missing_audio: bool,

    /// Quiet mode - suppress progress output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log every step instead of drawing progress bars (honors RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

/// Progress reporter using indicatif for terminal output
struct IndicatifReporter {
    multi: MultiProgress,
    main_bar: ProgressBar,
    episode_bar: ProgressBar,
}

impl IndicatifReporter {
    fn new() -> Self {
        let multi = MultiProgress::new();

        let main_style = ProgressStyle::default_bar()
            .template("{spinner:.green} {wide_msg}")
            .unwrap();

        let main_bar = multi.add(ProgressBar::new_spinner());
        main_bar.set_style(main_style);
        main_bar.enable_steady_tick(std::time::Duration::from_millis(100));

        let episode_style = ProgressStyle::default_bar()
            .template("  [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
            .unwrap()
            .progress_chars("█▓░");

        let episode_bar = multi.add(ProgressBar::new(0));
        episode_bar.set_style(episode_style);

        Self {
            multi,
            main_bar,
            episode_bar,
        }
    }

    /// Stop the spinner and remove both bars, e.g. when a run aborts early
    fn clear(&self) {
        self.episode_bar.finish_and_clear();
        self.main_bar.finish_and_clear();
    }
}

impl ProgressReporter for IndicatifReporter {
    fn report(&self, event: ProgressEvent) {
        match event {
            ProgressEvent::LoadingShow { path } => {
                self.main_bar.set_message(format!(
                    "{BOOK}Reading {}",
                    path.display().to_string().cyan()
                ));
            }

            ProgressEvent::ShowLoaded {
                show_title,
                episodes_dir,
            } => {
                self.main_bar.set_message(format!(
                    "{HEADPHONES}{} • scanning {}",
                    show_title.bold().green(),
                    episodes_dir.display().to_string().cyan()
                ));
            }

            ProgressEvent::ScanCompleted { episode_dirs } => {
                self.episode_bar.set_length(episode_dirs as u64);
                self.episode_bar.set_position(0);
            }

            ProgressEvent::AudioMissing { dir, .. } => {
                let _ = self.multi.println(format!(
                    "  {WARNING}{} has no audio, using empty content",
                    dir.yellow()
                ));
            }

            ProgressEvent::EpisodeAdded {
                index,
                episode_title,
                ..
            } => {
                self.episode_bar.set_position(index as u64 + 1);
                self.episode_bar
                    .set_message(truncate_title(&episode_title, 40));
            }

            ProgressEvent::EpisodeSkipped {
                index, dir, reason, ..
            } => {
                self.episode_bar.set_position(index as u64 + 1);
                let _ = self.multi.println(format!(
                    "  {FAILURE}{} skipped - {}",
                    dir.red(),
                    reason.dimmed()
                ));
            }

            ProgressEvent::FeedWritten { path, item_count } => {
                self.episode_bar.finish_and_clear();
                self.main_bar.set_message(format!(
                    "Wrote {} items to {}",
                    item_count.to_string().cyan(),
                    path.display()
                ));
            }

            ProgressEvent::GenerationCompleted {
                included_count,
                skipped_count,
            } => {
                self.main_bar.finish_and_clear();
                println!(
                    "\n{PARTY}{} {} episodes, {} skipped",
                    "Feed generated:".bold().green(),
                    included_count.to_string().green().bold(),
                    if skipped_count > 0 {
                        skipped_count.to_string().red().bold()
                    } else {
                        skipped_count.to_string().green()
                    }
                );
            }
        }
    }
}

fn truncate_title(title: &str, max_len: usize) -> String {
    if title.chars().count() <= max_len {
        title.to_string()
    } else {
        let head: String = title.chars().take(max_len.saturating_sub(3)).collect();
        format!("{head}...")
    }
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut bars = None;
    let reporter: SharedProgressReporter = if args.quiet {
        NoopReporter::shared()
    } else if args.verbose {
        init_logger();
        LogReporter::shared()
    } else {
        println!(
            "\n{}{} {}\n",
            MICROPHONE,
            "castdown".bold().magenta(),
            "- Podcast Feed Generator".dimmed()
        );
        let progress = Arc::new(IndicatifReporter::new());
        bars = Some(progress.clone());
        progress
    };

    let options = GenerateOptions {
        descriptor_name: args.descriptor,
        output_path: args.output,
        treat_missing_audio_as_empty: !args.skip_missing_audio,
        sort_episodes: !args.unsorted,
    };

    let result = generate_feed(&args.root, &options, reporter)
        .inspect_err(|_| {
            if let Some(bars) = &bars {
                bars.clear();
            }
        })
        .with_context(|| format!("Failed to generate feed in {}", args.root.display()))?;

    if !args.quiet && !args.verbose {
        println!(
            "\n{FOLDER}Output: {}\n",
            result.output_path.display().to_string().cyan()
        );
    }

    Ok(())
}
