use clap::Parser;
use parkdiff::{config::ReportConfig, diff, html, loader, report, snapshot, utils};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Compare two parking-facility snapshots")]
struct Cli {
    /// Older snapshot (JSON file)
    old: PathBuf,
    /// Newer snapshot (JSON file)
    new: PathBuf,
    /// Also write the report as a standalone HTML page
    #[arg(long)]
    html: Option<PathBuf>,
    /// JSON file overriding noise keywords, exclusions, or the glossary
    #[arg(long)]
    config: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), String> {
    let cfg = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };

    // Surface both input failures before giving up on either.
    let (old, new) = match (
        loader::load_snapshot(&cli.old),
        loader::load_snapshot(&cli.new),
    ) {
        (Ok(old), Ok(new)) => (old, new),
        (old, new) => {
            let mut messages = Vec::new();
            if let Err(e) = old {
                messages.push(e);
            }
            if let Err(e) = new {
                messages.push(e);
            }
            return Err(messages.join("\n"));
        }
    };

    let delta = diff::compute_delta(&old, &new, &cfg.exclude_paths);
    let rendered = report::render(&delta, &old, &cfg);

    let subtitle = format!(
        "Snapshot times: old = {}, new = {}",
        snapshot::extract_time(&old),
        snapshot::extract_time(&new)
    );
    println!("{}", subtitle);
    println!();
    println!("{}", rendered);

    if let Some(path) = &cli.html {
        let page = html::render_page(&subtitle, &rendered);
        utils::write_text(path, &page)
            .map_err(|e| format!("Unable to write {}: {}", path.display(), e))?;
        println!();
        println!("HTML report written to {}", path.display());
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
