use crate::config::{Config, OutputFormat};
use crate::core::post::{filter_posts, related_posts};
use crate::core::samples::sample_catalog;
use crate::core::{HostMatch, Provider, ResolverEngine, VideoReference, VlogPost};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(name = "vlogkit")]
#[command(about = "Resolve video links into embeddable players for vlog posts")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./vlogkit.toml when present)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Require real provider hosts instead of substring matching
    #[arg(long, global = true)]
    pub strict_hosts: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show provider, video id and embed URL for each URL
    Inspect {
        #[arg(value_name = "URL", required = true)]
        urls: Vec<String>,
    },
    /// Print the embed URL, failing when the link is not embeddable
    Embed {
        #[arg(value_name = "URL")]
        url: String,
    },
    /// Resolve every URL in a file, one per line
    Resolve {
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },
    /// List the sample catalog
    Samples {
        /// Only posts in this category slug
        #[arg(long)]
        category: Option<String>,

        /// Case-insensitive search in title, description and tags
        #[arg(short, long)]
        query: Option<String>,
    },
}

/// JSON row for one post, with up to `related_limit` related post paths.
pub fn post_json(
    engine: &ResolverEngine,
    all_posts: &[VlogPost],
    post: &VlogPost,
    now: DateTime<Utc>,
    related_limit: usize,
) -> serde_json::Value {
    let related: Vec<String> = related_posts(all_posts, post, related_limit)
        .iter()
        .map(|related| related.absolute_path())
        .collect();

    serde_json::json!({
        "post": post,
        "path": post.absolute_path(),
        "status": post.status(now),
        "embed_url": engine.embed_url(&post.video_url),
        "related": related,
    })
}

#[derive(Serialize)]
struct InspectReport {
    #[serde(flatten)]
    reference: VideoReference,
    classified_as: Provider,
    embed_url: Option<String>,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        let mut config = Config::load(self.config.as_deref()).await?;
        if self.strict_hosts {
            config.host_match = HostMatch::Strict;
        }
        if self.json {
            config.output = OutputFormat::Json;
        }
        debug!("Effective config: {:?}", config);

        let engine = ResolverEngine::with_defaults(config.host_match);

        match &self.command {
            Command::Inspect { urls } => {
                for url in urls {
                    Self::inspect(&engine, url, config.output)?;
                }
            }
            Command::Embed { url } => match engine.embed_url(url) {
                Some(embed_url) => println!("{}", embed_url),
                None => anyhow::bail!("No embeddable video found for URL: {}", url),
            },
            Command::Resolve { input } => {
                let contents = tokio::fs::read_to_string(input)
                    .await
                    .with_context(|| format!("Failed to read URL list {}", input.display()))?;
                for url in contents.lines().map(str::trim).filter(|line| !line.is_empty()) {
                    let embed_url = engine.embed_url(url).unwrap_or_default();
                    println!("{}\t{}", url, embed_url);
                }
            }
            Command::Samples { category, query } => {
                Self::samples(&engine, &config, category.as_deref(), query.as_deref())?;
            }
        }

        Ok(())
    }

    fn inspect(engine: &ResolverEngine, url: &str, output: OutputFormat) -> Result<()> {
        let report = InspectReport {
            reference: engine.resolve(url),
            classified_as: engine.identify_provider(url),
            embed_url: engine.embed_url(url),
        };

        match output {
            OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
            OutputFormat::Text => {
                println!("{}", "=".repeat(50));
                println!("URL: {}", url);
                println!("Provider: {}", report.classified_as);
                println!("Is YouTube?: {}", report.classified_as == Provider::YouTube);
                println!("Is Vimeo?: {}", report.classified_as == Provider::Vimeo);
                println!(
                    "Extracted ID: {}",
                    report.reference.video_id.as_deref().unwrap_or("none")
                );
                println!("Embed URL: {}", report.embed_url.as_deref().unwrap_or("none"));
            }
        }

        Ok(())
    }

    fn samples(
        engine: &ResolverEngine,
        config: &Config,
        category: Option<&str>,
        query: Option<&str>,
    ) -> Result<()> {
        let now = Utc::now();
        let catalog = sample_catalog(now)?;
        let posts = filter_posts(&catalog.posts, category, query);

        if config.output == OutputFormat::Json {
            let rows: Vec<_> = posts
                .iter()
                .map(|post| post_json(engine, &catalog.posts, post, now, config.related_limit))
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(());
        }

        println!("Categories:");
        for category in &catalog.categories {
            println!("  {} ({})", category.name, category.slug);
        }

        println!("Posts: {}", posts.len());
        for post in posts {
            println!();
            println!("{} [{:?}]", post.title, post.status(now));
            println!("  Path: {}", post.absolute_path());
            println!("  Author: {}  Category: {}", post.author, post.category);
            println!("  Tags: {}", post.tags_list().join(", "));
            println!(
                "  Embed URL: {}",
                engine.embed_url(&post.video_url).as_deref().unwrap_or("none")
            );

            let related = related_posts(&catalog.posts, post, config.related_limit);
            if !related.is_empty() {
                let titles: Vec<&str> = related.iter().map(|p| p.title.as_str()).collect();
                println!("  Related: {}", titles.join("; "));
            }
        }

        Ok(())
    }
}
