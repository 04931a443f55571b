// Colored terminal output for keyword rankings, networks and video lists.
//
// This module handles all terminal-specific formatting: colors, bars,
// tables. The main.rs command handlers delegate here.

use colored::Colorize;

use crate::analysis::report::TfidfKeyword;
use crate::analysis::summary::{BatchOverview, CategoryCount, ChannelStats};
use crate::analysis::{FrequencyTable, KeywordCluster, KeywordGraph};
use crate::lexicon::{category_name, CATEGORY_MAPPING};
use crate::models::Record;

use super::{format_number, group_thousands, paginate, truncate_chars};

const BAR_WIDTH: usize = 30;

/// Display the ranked keyword table as a horizontal bar chart.
pub fn display_keywords(table: &FrequencyTable, limit: usize) {
    if table.is_empty() {
        println!("No keywords found. Try lowering --min-length or widening the filters.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Top Keywords ({} shown) ===", table.len().min(limit)).bold()
    );
    println!();

    let max = table.max_count().max(1) as f64;
    for (i, entry) in table.entries().iter().take(limit).enumerate() {
        let ratio = entry.count as f64 / max;
        let filled = (ratio * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "=".repeat(filled),
            " ".repeat(BAR_WIDTH.saturating_sub(filled))
        );

        // Color the bar by share of the top keyword
        let colored_bar = if ratio >= 0.66 {
            bar.bright_green()
        } else if ratio >= 0.33 {
            bar.bright_yellow()
        } else {
            bar.bright_blue()
        };

        println!(
            "  {:>3}. {:<24} {} {}",
            i + 1,
            entry.keyword.bold(),
            colored_bar,
            entry.count
        );
    }
}

/// Display network metrics and the heaviest edges.
pub fn display_network(graph: &KeywordGraph, top_edges: usize) {
    println!("\n{}", "=== Keyword Network ===".bold());
    println!();
    println!("  Keywords:            {}", graph.nodes.len());
    println!("  Connections:         {}", graph.edges.len());
    println!("  Avg connections:     {:.2}", graph.average_connections());

    if graph.edges.is_empty() {
        println!(
            "\n  {}",
            "No keyword pairs reach the co-occurrence threshold.".dimmed()
        );
        return;
    }

    let mut edges: Vec<_> = graph.edges.iter().collect();
    edges.sort_by(|a, b| b.weight.cmp(&a.weight));

    println!("\n  Strongest connections:");
    for edge in edges.into_iter().take(top_edges) {
        println!(
            "    {} {} {}  {}",
            edge.source.bold(),
            "-".repeat(edge.width as usize).cyan(),
            edge.target.bold(),
            format!("({} videos)", edge.weight).dimmed()
        );
    }
}

/// Display keyword clusters, largest first.
pub fn display_clusters(clusters: &[KeywordCluster]) {
    println!("\n{}", format!("=== Keyword Clusters ({}) ===", clusters.len()).bold());
    println!();

    if clusters.is_empty() {
        println!(
            "  {}",
            "No keywords are similar enough to group. Try a lower --similarity-threshold."
                .dimmed()
        );
        return;
    }

    for (i, cluster) in clusters.iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            format!("[{} keywords, avg freq {:.1}]", cluster.size, cluster.average_frequency)
                .yellow(),
            cluster.keywords.join(", ")
        );
    }
}

/// Display TF-IDF ranked keywords.
pub fn display_tfidf(scores: &[TfidfKeyword]) {
    if scores.is_empty() {
        return;
    }
    println!("\n{}", "=== TF-IDF Keywords ===".bold());
    println!();
    for (i, entry) in scores.iter().enumerate() {
        println!("  {:>3}. {:<24} {:.4}", i + 1, entry.keyword, entry.score);
    }
}

/// Display how many videos fall in each category.
pub fn display_categories(distribution: &[CategoryCount], total: usize) {
    if distribution.is_empty() {
        return;
    }
    println!("\n{}", "=== Categories ===".bold());
    println!();
    for entry in distribution {
        let share = if total == 0 {
            0.0
        } else {
            entry.videos as f64 / total as f64 * 100.0
        };
        println!("  {:<20} {:>4}  {}", entry.name, entry.videos, format!("{share:.1}%").dimmed());
    }
}

/// Display batch totals with per-video averages.
pub fn display_overview(overview: &BatchOverview) {
    println!("\n{}", "=== Overview ===".bold());
    println!();
    println!("  Videos:      {}", group_thousands(overview.videos as u64));
    for (label, total, average) in [
        ("Views:", overview.total_views, overview.average_views),
        ("Likes:", overview.total_likes, overview.average_likes),
        ("Comments:", overview.total_comments, overview.average_comments),
    ] {
        println!(
            "  {:<12} {:>14}  {}",
            label,
            group_thousands(total),
            format!("avg {}", group_thousands(average.round() as u64)).dimmed()
        );
    }
}

/// Display the channels with the most total views.
pub fn display_channels(stats: &[ChannelStats], limit: usize) {
    if stats.is_empty() {
        return;
    }
    println!("\n{}", "=== Top Channels ===".bold());
    println!();
    println!(
        "  {:<30} {:>6} {:>10} {:>10} {:>9}  {:<23}",
        "Channel".dimmed(),
        "Videos".dimmed(),
        "Views".dimmed(),
        "Avg".dimmed(),
        "Comments".dimmed(),
        "Uploads".dimmed(),
    );
    println!("  {}", "-".repeat(94).dimmed());
    for channel in stats.iter().take(limit) {
        let uploads = match (channel.first_upload, channel.latest_upload) {
            (Some(first), Some(latest)) => format!(
                "{} ~ {}",
                first.format("%Y-%m-%d"),
                latest.format("%Y-%m-%d")
            ),
            _ => "-".to_string(),
        };
        println!(
            "  {:<30} {:>6} {:>10} {:>10} {:>9}  {}",
            truncate_chars(&channel.channel, 27),
            channel.videos,
            format_number(channel.total_views),
            format_number(channel.average_views.round() as u64),
            format_number(channel.total_comments),
            uploads.dimmed(),
        );
    }
}

/// Display one page of the video list.
pub fn display_videos(records: &[Record], page: usize, page_size: usize) {
    let (slice, total_pages) = paginate(records, page, page_size);
    let page = page.clamp(1, total_pages);

    println!(
        "\n{}",
        format!(
            "=== Videos ({} total, page {}/{}) ===",
            records.len(),
            page,
            total_pages
        )
        .bold()
    );
    println!();

    let offset = (page - 1) * page_size.max(1);
    for (i, record) in slice.iter().enumerate() {
        println!(
            "  {:>3}. {}",
            offset + i + 1,
            truncate_chars(&record.title, 60).bold()
        );
        println!(
            "       {}  {} views  {} likes  {}",
            record.channel_title.cyan(),
            format_number(record.view_count),
            format_number(record.like_count),
            category_name(&record.category_id).dimmed()
        );
    }
}

/// Print the category id table.
pub fn display_category_table() {
    println!("\n{}", "=== YouTube Categories ===".bold());
    println!();
    for (id, name) in CATEGORY_MAPPING {
        println!("  {:>3}  {}", id.dimmed(), name);
    }
}
