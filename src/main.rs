use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use feedaria::{
    format_time_text, Config, ControlLabeler, CountPolicy, HtmlMarkup, LiveRegion, PartSelectors,
    PostAnnouncer, PostSnapshotReader, WriterRegion,
};
use scraper::{ElementRef, Html};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "feedaria")]
#[command(about = "Screen-reader announcements for social feed posts", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a custom config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Publish the post's announcement to stdout
    Announce(PostArgs),
    /// Print the fields read from the post as JSON
    Snapshot(PostArgs),
    /// Print the accessible names given to the post's controls
    Label(PostArgs),
    /// Expand a compact relative timestamp such as "3h"
    Time { text: String },
}

#[derive(Args)]
struct PostArgs {
    /// HTML file holding the post markup, or "-" for stdin
    file: PathBuf,

    /// CSS selector for the post root (defaults to the whole document)
    #[arg(short, long)]
    root: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FEEDARIA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config;

    match cli.command {
        Commands::Time { text } => {
            println!("{}", format_time_text(&text));
        }
        Commands::Announce(args) => {
            let (config, selectors) = load_config(config_path.as_deref())?;
            let document = load_document(&args.file)?;
            let markup = HtmlMarkup::new(&document, selectors);
            let root = post_root(&markup, args.root.as_deref())?;
            run_announce(
                &markup,
                root,
                config.counts.zero_match,
                &mut std::io::stdout(),
            );
        }
        Commands::Snapshot(args) => {
            let (_, selectors) = load_config(config_path.as_deref())?;
            let document = load_document(&args.file)?;
            let markup = HtmlMarkup::new(&document, selectors);
            let root = post_root(&markup, args.root.as_deref())?;
            run_snapshot(&markup, root, &mut std::io::stdout())?;
        }
        Commands::Label(args) => {
            let (_, selectors) = load_config(config_path.as_deref())?;
            let document = load_document(&args.file)?;
            let mut markup = HtmlMarkup::new(&document, selectors);
            let root = post_root(&markup, args.root.as_deref())?;
            run_label(&mut markup, root, &mut std::io::stdout())?;
        }
    }

    Ok(())
}

fn run_announce<'doc, W: Write>(
    markup: &HtmlMarkup<'doc>,
    root: Option<ElementRef<'doc>>,
    policy: CountPolicy,
    out: &mut W,
) {
    let mut region = LiveRegion::new(WriterRegion::new(out));
    PostAnnouncer::new(policy).announce_post(markup, root, &mut region);
}

fn run_snapshot<'doc, W: Write>(
    markup: &HtmlMarkup<'doc>,
    root: Option<ElementRef<'doc>>,
    out: &mut W,
) -> Result<()> {
    let snapshot = PostSnapshotReader::new().read(markup, root);
    writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    Ok(())
}

fn run_label<'doc, W: Write>(
    markup: &mut HtmlMarkup<'doc>,
    root: Option<ElementRef<'doc>>,
    out: &mut W,
) -> Result<()> {
    ControlLabeler::new().label(markup, root);
    for label in markup.applied_labels() {
        writeln!(out, "{}: {}", label.target, label.name)?;
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<(Config, PartSelectors)> {
    let config = Config::load(path)?;
    let selectors = PartSelectors::compile(&config.selectors)?;
    Ok((config, selectors))
}

fn load_document(path: &Path) -> Result<Html> {
    let source = read_source(path, std::io::stdin())?;
    Ok(Html::parse_fragment(&source))
}

/// Reads `path`, or all of `stdin` when `path` is `-`.
fn read_source<R: Read>(path: &Path, mut stdin: R) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("failed to read markup from stdin")?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))
    }
}

fn post_root<'doc>(
    markup: &HtmlMarkup<'doc>,
    css: Option<&str>,
) -> Result<Option<ElementRef<'doc>>> {
    match css {
        Some(css) => Ok(markup.select_root(css)?),
        None => Ok(Some(markup.root())),
    }
}
