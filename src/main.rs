use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use tubetrend::analysis::{
    analyze_batch, AnalysisReport, ClusterParams, KeywordExtractor, NetworkParams, PresenceMatch,
    ReportOptions,
};
use tubetrend::config::Config;
use tubetrend::filter::RecordFilter;
use tubetrend::lexicon::{category_id, category_name};
use tubetrend::models::Record;
use tubetrend::output::terminal;
use tubetrend::youtube::{CachedYouTube, SearchOrder, YouTubeClient};

/// TubeTrend: keyword trends in YouTube video metadata.
///
/// Fetches trending or searched videos (or loads a saved batch) and shows
/// which keywords dominate, how they co-occur, and how they cluster.
#[derive(Parser)]
#[command(name = "tubetrend", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze the most popular videos in a region
    Trending {
        /// ISO region code (default: TUBETREND_REGION or KR)
        #[arg(long)]
        region: Option<String>,

        /// Videos to fetch, 1-50 (default: TUBETREND_MAX_RESULTS or 50)
        #[arg(long)]
        max_results: Option<u32>,

        /// Category id or display name to restrict the chart to
        #[arg(long)]
        category: Option<String>,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Search for videos and analyze the results
    Search {
        /// Search query (at most 100 characters)
        query: String,

        /// Videos to fetch, 1-50 (default: TUBETREND_MAX_RESULTS or 50)
        #[arg(long)]
        max_results: Option<u32>,

        /// relevance, date, rating or viewCount
        #[arg(long, default_value = "relevance")]
        order: SearchOrder,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Analyze a saved batch (JSON array of video records)
    Analyze {
        /// Path to the JSON file
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// List YouTube category ids and names
    Categories,
}

/// Analysis, filter and listing options shared by every batch command.
#[derive(Args, Debug)]
struct AnalysisArgs {
    /// Minimum keyword length in characters
    #[arg(long)]
    min_length: Option<usize>,

    /// Keywords to rank and chart
    #[arg(long)]
    max_keywords: Option<usize>,

    /// Network vocabulary size
    #[arg(long, default_value = "30")]
    network_keywords: usize,

    /// Minimum number of shared videos for a network edge
    #[arg(long, default_value = "2")]
    min_cooccurrence: u32,

    /// Cluster vocabulary size
    #[arg(long, default_value = "20")]
    cluster_keywords: usize,

    /// Minimum Jaccard similarity to join a cluster, in (0, 1]
    #[arg(long, default_value = "0.3")]
    similarity_threshold: f64,

    /// Only count whole-word keyword matches in the network and clusters
    #[arg(long)]
    word_boundary: bool,

    /// TF-IDF keywords to show (0 to skip)
    #[arg(long, default_value = "20")]
    top_tfidf: usize,

    /// Print a JSON report instead of terminal tables
    #[arg(long)]
    json: bool,

    /// Keep videos with at least this many views
    #[arg(long)]
    min_views: Option<u64>,

    /// Keep videos with at most this many views
    #[arg(long)]
    max_views: Option<u64>,

    /// Keep videos mentioning this keyword (repeatable)
    #[arg(long = "keyword")]
    keywords: Vec<String>,

    /// Keep videos in this category, by display name (repeatable)
    #[arg(long = "category-name")]
    category_names: Vec<String>,

    /// Video list page (1-based)
    #[arg(long, default_value = "1")]
    page: usize,

    /// Videos per page
    #[arg(long, default_value = "10")]
    page_size: usize,
}

impl AnalysisArgs {
    fn filter(&self) -> RecordFilter {
        let views = match (self.min_views, self.max_views) {
            (None, None) => None,
            (min, max) => Some((min.unwrap_or(0), max.unwrap_or(u64::MAX))),
        };
        RecordFilter {
            views,
            keywords: self.keywords.clone(),
            categories: self.category_names.clone(),
        }
    }

    fn report_options(&self, config: &Config) -> ReportOptions {
        let min_length = self.min_length.unwrap_or(config.min_word_length);
        let presence = if self.word_boundary {
            PresenceMatch::WordBoundary
        } else {
            PresenceMatch::Substring
        };
        ReportOptions {
            min_length,
            max_keywords: self.max_keywords.unwrap_or(config.max_keywords),
            network: NetworkParams {
                min_length,
                max_keywords: self.network_keywords,
                min_cooccurrence: self.min_cooccurrence,
                presence,
            },
            clusters: ClusterParams {
                min_length,
                max_keywords: self.cluster_keywords,
                similarity_threshold: self.similarity_threshold,
                presence,
            },
            top_tfidf: self.top_tfidf,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("tubetrend=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Trending {
            region,
            max_results,
            category,
            analysis,
        } => {
            let config = Config::load()?;
            config.require_api_key()?;
            let youtube = open_youtube(&config)?;

            let region = region.unwrap_or_else(|| config.region.clone());
            let max_results = max_results.unwrap_or(config.max_results);
            let category = category.map(|c| resolve_category(&c)).transpose()?;

            let spinner = fetch_spinner(&format!("Fetching trending videos ({region})..."));
            let records = youtube
                .trending(&region, max_results, category.as_deref())
                .await;
            spinner.finish_and_clear();
            let records = records?;

            let title = match &category {
                Some(id) => format!("Trending in {region} / {}", category_name(id)),
                None => format!("Trending in {region}"),
            };
            run_analysis(&config, &title, records, &analysis)?;
        }

        Commands::Search {
            query,
            max_results,
            order,
            analysis,
        } => {
            let config = Config::load()?;
            config.require_api_key()?;
            let youtube = open_youtube(&config)?;
            let max_results = max_results.unwrap_or(config.max_results);

            let spinner = fetch_spinner(&format!("Searching for \"{query}\"..."));
            let records = youtube.search(&query, max_results, order).await;
            spinner.finish_and_clear();
            let records = records?;

            run_analysis(&config, &format!("Search: {query}"), records, &analysis)?;
        }

        Commands::Analyze { input, analysis } => {
            let config = Config::load()?;
            let raw = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let records: Vec<Record> = serde_json::from_str(&raw)
                .with_context(|| format!("{} is not a JSON array of videos", input.display()))?;
            info!(count = records.len(), path = %input.display(), "Loaded batch");

            run_analysis(&config, &input.display().to_string(), records, &analysis)?;
        }

        Commands::Categories => {
            terminal::display_category_table();
        }
    }

    Ok(())
}

fn open_youtube(config: &Config) -> Result<CachedYouTube> {
    let client = YouTubeClient::new(&config.youtube_api_url, &config.youtube_api_key)?;
    Ok(CachedYouTube::new(client, config.cache_ttl))
}

/// Accept a numeric category id or a display name.
fn resolve_category(raw: &str) -> Result<String> {
    if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        return Ok(raw.to_string());
    }
    category_id(raw)
        .map(str::to_string)
        .with_context(|| format!("Unknown category '{raw}'. Run `tubetrend categories` for the list."))
}

fn fetch_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("  {spinner} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Filter a batch, analyze it, and print the result.
fn run_analysis(config: &Config, title: &str, records: Vec<Record>, args: &AnalysisArgs) -> Result<()> {
    let filter = args.filter();
    let records = if filter.is_empty() {
        records
    } else {
        let kept = filter.apply(&records);
        info!(before = records.len(), after = kept.len(), "Applied filters");
        kept
    };

    let extractor = KeywordExtractor::default();
    let options = args.report_options(config);
    let report = analyze_batch(&extractor, &records, &options)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    display_report(title, &report, &records, args);
    Ok(())
}

fn display_report(title: &str, report: &AnalysisReport, records: &[Record], args: &AnalysisArgs) {
    println!(
        "\n{}",
        format!("=== {title} ({} videos) ===", report.videos).bold()
    );

    if records.is_empty() {
        println!("No videos to analyze.");
        return;
    }

    terminal::display_overview(&report.overview);
    terminal::display_keywords(&report.keywords, report.keywords.len());
    match &report.network {
        Some(graph) => terminal::display_network(graph, 10),
        None => println!("\n{}", "No keywords found for the network.".dimmed()),
    }
    terminal::display_clusters(&report.clusters);
    terminal::display_tfidf(&report.tfidf);
    terminal::display_categories(&report.categories, report.videos);
    terminal::display_channels(&report.channels, 10);
    terminal::display_videos(records, args.page, args.page_size);
    println!();
}
