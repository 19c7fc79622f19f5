use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use templeatlas::ar::{self, launch_for_site, COMPATIBILITY};
use templeatlas::catalog::{
    catalog_stats, category_breakdown, digest_hex, gallery_for_site, quiz_for_site, record_digest,
    score_quiz, BuiltinStore, JsonStore, SiteStore,
};
use templeatlas::glyph::GlyphGrid;
use templeatlas::logging;
use templeatlas::types::HeritageSite;

/// Heritage-site catalog and AR launch toolkit.
#[derive(Parser)]
#[command(name = "templeatlas", version, about)]
struct Cli {
    /// Read records from a JSON catalog file instead of the builtin catalog.
    #[arg(long, global = true, value_name = "FILE")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the sites in the catalog.
    Sites,
    /// Show one site in full, history included.
    Show(SiteArg),
    /// Render the visual fingerprint glyph for a URL or a site's AR link.
    Glyph(GlyphArgs),
    /// Print a site's trivia quiz, optionally scoring answers.
    Quiz(QuizArgs),
    /// Show a site's AR launch: link, slug, glyph, and requirements.
    Ar(SiteArg),
    /// Show a site's gallery entries.
    Gallery(SiteArg),
    /// Show catalog statistics.
    Stats,
}

#[derive(Args)]
struct SiteArg {
    /// Site id.
    id: u32,
}

#[derive(Args)]
struct GlyphArgs {
    /// URL to fingerprint. Mutually exclusive with --site.
    url: Option<String>,

    /// Fingerprint the AR link of this site id instead.
    #[arg(long, conflicts_with = "url")]
    site: Option<u32>,

    /// Overlay the decorative corner anchors.
    #[arg(long)]
    anchors: bool,
}

#[derive(Args)]
struct QuizArgs {
    /// Site id.
    id: u32,

    /// Comma-separated answer indices; use "-" to skip a question
    /// (e.g. "1,0,-,3,1").
    #[arg(long)]
    answers: Option<String>,
}

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("templeatlas error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store: Box<dyn SiteStore> = match &cli.catalog {
        Some(path) => {
            debug!(path = %path.display(), "using JSON catalog");
            Box::new(JsonStore::new(path))
        }
        None => Box::new(BuiltinStore::new()),
    };

    match cli.command {
        Command::Sites => cmd_sites(store.as_ref()),
        Command::Show(args) => cmd_show(store.as_ref(), args.id),
        Command::Glyph(args) => cmd_glyph(store.as_ref(), args),
        Command::Quiz(args) => cmd_quiz(store.as_ref(), args),
        Command::Ar(args) => cmd_ar(store.as_ref(), args.id),
        Command::Gallery(args) => cmd_gallery(store.as_ref(), args.id),
        Command::Stats => cmd_stats(store.as_ref()),
    }
}

fn fetch_site(store: &dyn SiteStore, id: u32) -> Result<HeritageSite> {
    store
        .fetch_by_id(id)?
        .with_context(|| format!("no site with id {}", id))
}

fn cmd_sites(store: &dyn SiteStore) -> Result<()> {
    for site in store.fetch_all()? {
        let mut line = format!("     {} | {}", site.year, site.category);
        if site.unesco {
            line.push_str(" | UNESCO");
        }
        if site.is_ar_ready() {
            line.push_str(" | AR");
        }

        println!("{:>3}  {} - {}", site.id, site.title, site.location);
        println!("{}", line);
    }
    Ok(())
}

fn cmd_show(store: &dyn SiteStore, id: u32) -> Result<()> {
    let site = fetch_site(store, id)?;

    println!("{}", site.title);
    println!("{}", site.location);
    println!("{} | {}", site.year, site.category);
    if let Some(period) = site.period_or_elevation() {
        println!("{}", period);
    }
    println!();
    println!("{}", site.description);

    if let Some(history) = &site.history {
        let sections = [
            ("Ancient Origins", &history.ancient),
            ("Construction & Builders", &history.construction),
            ("Religious Significance", &history.significance),
            ("Sacred Legends", &history.legend),
            ("Architectural Marvel", &history.architecture),
            ("Modern Era", &history.modern_history),
        ];
        for (heading, text) in sections {
            println!();
            println!("## {}", heading);
            println!("{}", text);
        }
    }

    let digest = record_digest(&site)?;
    println!();
    println!("record digest: {}", digest_hex(digest));
    Ok(())
}

fn cmd_glyph(store: &dyn SiteStore, args: GlyphArgs) -> Result<()> {
    let url = match (args.url, args.site) {
        (Some(url), None) => url,
        (None, Some(id)) => {
            let site = fetch_site(store, id)?;
            site.ar_url
                .with_context(|| format!("site {} has no AR link to fingerprint", id))?
        }
        _ => bail!("pass a URL or --site <id>"),
    };

    let grid = GlyphGrid::from_url(&url);
    println!("{}", url);
    let rendered = if args.anchors {
        grid.render_text_with_anchors()
    } else {
        grid.render_text()
    };
    println!("{}", rendered);
    Ok(())
}

fn cmd_quiz(store: &dyn SiteStore, args: QuizArgs) -> Result<()> {
    let site = fetch_site(store, args.id)?;
    let questions = quiz_for_site(&site);

    for (number, question) in questions.iter().enumerate() {
        println!("{}. {} [{:?}]", number + 1, question.question, question.difficulty);
        for (index, option) in question.options.iter().enumerate() {
            println!("   {}) {}", index, option);
        }
    }

    if let Some(raw) = args.answers {
        let answers = parse_answers(&raw)?;
        let score = score_quiz(&answers, &questions);
        println!();
        println!(
            "score: {}/{} ({:.0}%) - {:?}",
            score.correct,
            score.total,
            score.percent(),
            score.band()
        );
    }
    Ok(())
}

fn parse_answers(raw: &str) -> Result<Vec<Option<usize>>> {
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            if part == "-" {
                Ok(None)
            } else {
                part.parse::<usize>()
                    .map(Some)
                    .with_context(|| format!("invalid answer {:?}", part))
            }
        })
        .collect()
}

fn cmd_ar(store: &dyn SiteStore, id: u32) -> Result<()> {
    let site = fetch_site(store, id)?;
    let launch = launch_for_site(&site)?
        .with_context(|| format!("site {} has no AR experience", id))?;

    println!("{} AR", launch.title);
    println!("launch: {}", launch.url);
    if let Some(slug) = &launch.slug {
        println!("slug:   {}", slug);
    }
    println!();
    println!("{}", launch.glyph().render_text_with_anchors());
    println!();
    println!(
        "requires: {} / {} | {} | {}",
        COMPATIBILITY.min_ios, COMPATIBILITY.min_android, COMPATIBILITY.camera, COMPATIBILITY.network
    );
    println!("allowed launch hosts: {}", ar::ALLOWED_LAUNCH_DOMAINS.join(", "));
    Ok(())
}

fn cmd_gallery(store: &dyn SiteStore, id: u32) -> Result<()> {
    let site = fetch_site(store, id)?;
    for image in gallery_for_site(&site) {
        println!(
            "{}  [{}] {} ({}, {})",
            image.id, image.category, image.title, image.photographer, image.date
        );
    }
    Ok(())
}

fn cmd_stats(store: &dyn SiteStore) -> Result<()> {
    let sites = store.fetch_all()?;
    let stats = catalog_stats(&sites);

    println!("sites:    {}", stats.total_sites);
    println!("unesco:   {}", stats.unesco_sites);
    println!("ar-ready: {}", stats.ar_ready_sites);
    println!("categories:");
    for (category, count) in category_breakdown(&sites) {
        println!("  {} ({})", category, count);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answers() {
        assert_eq!(
            parse_answers("1,0,-,3").unwrap(),
            vec![Some(1), Some(0), None, Some(3)]
        );
        assert!(parse_answers("1,x").is_err());
    }
}
