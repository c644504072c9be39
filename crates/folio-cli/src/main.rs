//! Folio CLI
//!
//! Thin wrapper around folio-core for checking a `projects.json` catalog
//! before it is deployed next to the site.
//!
//! ## Usage
//!
//! ```bash
//! # Validate a catalog
//! folio check projects.json
//!
//! # Preview the highlights gallery
//! folio gallery projects.json
//!
//! # Preview one category
//! folio gallery projects.json --category music
//!
//! # Show what the detail page would render
//! folio show projects.json my-project
//! ```

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    gallery_cards, load_catalog, Catalog, CategoryFilter, FileSource, ListSection, ProjectDetail,
    SiteConfig, SlideKind, VideoLayout,
};

/// Folio - portfolio catalog tool
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Validate and preview a portfolio projects.json")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a catalog and report problems
    Check {
        /// Path to projects.json
        file: PathBuf,
    },

    /// Print the cards the gallery would render
    Gallery {
        /// Path to projects.json
        file: PathBuf,

        /// Category to filter by ("all" shows highlights)
        #[arg(short, long, default_value = "all")]
        category: String,
    },

    /// Print the detail page for one project
    Show {
        /// Path to projects.json
        file: PathBuf,

        /// Project id
        id: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

async fn read_catalog(file: &Path) -> Result<Catalog> {
    load_catalog(&FileSource::new(file))
        .await
        .with_context(|| format!("Failed to load catalog from {}", file.display()))
}

fn kind_name(kind: SlideKind) -> &'static str {
    match kind {
        SlideKind::Image => "image",
        SlideKind::Video => "video",
        SlideKind::Embed => "embed",
    }
}

fn run_check(catalog: &Catalog) -> Result<()> {
    println!("Projects: {}", catalog.len());
    println!(
        "Highlights: {}",
        catalog.iter().filter(|project| project.highlight).count()
    );

    let categories = catalog.categories();
    if categories.is_empty() {
        println!("Categories: (none)");
    } else {
        println!("Categories: {}", categories.join(", "));
    }

    let without_images: Vec<&str> = catalog
        .iter()
        .filter(|project| project.slide_images().is_empty())
        .map(|project| project.id.as_str())
        .collect();
    if !without_images.is_empty() {
        println!("Without images: {}", without_images.join(", "));
    }

    let duplicates = catalog.duplicate_ids();
    if !duplicates.is_empty() {
        println!("Duplicate ids: {}", duplicates.join(", "));
        bail!("{} duplicate project id(s)", duplicates.len());
    }

    println!("OK");
    Ok(())
}

fn run_gallery(catalog: &Catalog, category: &str) {
    let filter = CategoryFilter::parse(category);
    let cards = gallery_cards(&catalog.projects, &filter);

    println!("{} ({} projects)", filter.label(), cards.len());
    println!();
    for card in &cards {
        match &card.label {
            Some(label) => println!("  [{}] {}", label, card.title),
            None => println!("  {}", card.title),
        }
        println!("    Link: {}", card.href);
        if let Some(audio) = &card.audio_url {
            println!("    Audio: {}", audio);
        }
    }
}

fn run_show(catalog: &Catalog, id: &str, tagline: &str) -> Result<()> {
    let project = catalog.resolve(Some(id))?;
    let detail = ProjectDetail::new(project, tagline);

    println!("{}", detail.page_title);
    println!();
    println!("Title: {}", detail.title);
    println!("Category: {}", detail.category_label);
    println!("Back: {}", detail.back_href);
    println!();
    println!("{}", detail.description);

    if !detail.technologies.is_empty() {
        println!();
        println!("Technologies: {}", detail.technologies.join(", "));
    }

    if let ListSection::Features(items) | ListSection::Projects(items) = &detail.list {
        println!();
        println!("{}:", detail.list.heading().unwrap_or_default());
        for item in items {
            println!("  - {}", item);
        }
    }

    println!();
    println!("Images: {}", detail.images.len());
    match &detail.videos {
        VideoLayout::Empty => println!("Videos: none"),
        VideoLayout::Single(slide) => {
            println!("Videos: single {} ({})", kind_name(slide.kind), slide.src)
        }
        VideoLayout::Carousel(slides) => println!("Videos: carousel of {}", slides.len()),
    }

    if let Some(url) = &detail.audio_url {
        println!("Audio: {}", url);
    }
    if let Some(url) = &detail.live_url {
        println!("Live: {}", url);
    }
    if let Some(url) = &detail.github_url {
        println!("Code: {}", url);
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = SiteConfig::default();

    match cli.command {
        Commands::Check { file } => {
            let catalog = read_catalog(&file).await?;
            run_check(&catalog)?;
        }
        Commands::Gallery { file, category } => {
            let catalog = read_catalog(&file).await?;
            run_gallery(&catalog, &category);
        }
        Commands::Show { file, id } => {
            let catalog = read_catalog(&file).await?;
            run_show(&catalog, &id, &config.tagline)?;
        }
    }

    Ok(())
}
