use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use tracing::debug;

use crate::config::Config;
use crate::indistreet;
use crate::page;

pub struct BuildSummary {
    pub total: usize,
    pub completed: usize,
    pub output: PathBuf,
}

/// Runs one full build cycle: fetch the snapshot, render the page with the
/// table hidden, then replace the published output. Nothing is written until
/// the page has rendered, so a failed cycle leaves the previous output in
/// place.
pub async fn build(config: &Config) -> anyhow::Result<BuildSummary> {
    let env = page::template_env(&config.templates_dir, &config.static_dir);

    let lives = indistreet::fetch_lives(&config.graphql_endpoint, &config.musician_id).await?;
    debug!("Fetched {} lives from {}", lives.len(), config.graphql_endpoint);

    let now = Utc::now();
    let html = page::render_page(
        &env,
        &lives,
        &config.live_base_url,
        &config.site_base_url,
        now,
        false,
    )?;

    let output_dir = Path::new(&config.output_dir);
    fs::create_dir_all(output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let output = output_dir.join("index.html");
    fs::write(&output, html).with_context(|| format!("writing {}", output.display()))?;
    copy_static(Path::new(&config.static_dir), &output_dir.join("static"))?;
    debug!("Wrote {}", output.display());

    Ok(BuildSummary {
        total: lives.len(),
        completed: page::completed_count(&lives, now),
        output,
    })
}

/// Copies the static assets next to the page so the hashed URLs resolve.
/// A missing source directory is fine; the page falls back to unhashed
/// paths and there is simply nothing to copy.
fn copy_static(from: &Path, to: &Path) -> anyhow::Result<()> {
    if !from.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(to).with_context(|| format!("creating {}", to.display()))?;
    for entry in fs::read_dir(from).with_context(|| format!("reading {}", from.display()))? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            let target = to.join(entry.file_name());
            fs::copy(entry.path(), &target)
                .with_context(|| format!("copying {}", entry.path().display()))?;
        }
    }
    Ok(())
}
