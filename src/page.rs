use chrono::{DateTime, Utc};
use minijinja::{Environment, context};
use serde::Serialize;

use crate::indistreet::Live;
use crate::util::asset_loader::AssetLoader;

/// One table row with every display field derived. Rows are rebuilt on each
/// render; nothing is persisted between builds.
#[derive(Debug, Serialize)]
pub struct LiveRow {
    pub ordinal: usize,
    pub date: String,
    pub title: String,
    pub url: String,
    pub completed: bool,
}

pub fn template_env(templates_dir: &str, static_dir: &str) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(minijinja::path_loader(templates_dir));
    let asset_loader = AssetLoader::new(static_dir);
    asset_loader.register(&mut env);
    env
}

/// Derives the view rows from the snapshot, preserving the source order.
/// The ordinal ranks against that order: the newest show gets the full
/// count, the oldest gets 1.
pub fn live_rows(lives: &[Live], live_base_url: &str, now: DateTime<Utc>) -> Vec<LiveRow> {
    let total = lives.len();
    lives
        .iter()
        .enumerate()
        .map(|(i, live)| LiveRow {
            ordinal: total - i,
            date: live.start_date.format("%Y. %-m. %-d.").to_string(),
            title: live.title.clone(),
            url: format!("{}/live/{}", live_base_url, live.id),
            completed: live.start_date <= now,
        })
        .collect()
}

/// A show counts as completed the moment its start time arrives.
pub fn completed_count(lives: &[Live], now: DateTime<Utc>) -> usize {
    lives.iter().filter(|live| live.start_date <= now).count()
}

/// Renders the whole document. Pure: same snapshot, clock and visibility
/// flag always produce the same HTML. `visible` decides the initial state
/// of the history table; the emitted page toggles it client-side without
/// being re-rendered.
pub fn render_page(
    env: &Environment<'_>,
    lives: &[Live],
    live_base_url: &str,
    site_base_url: &str,
    now: DateTime<Utc>,
    visible: bool,
) -> Result<String, minijinja::Error> {
    let tmpl = env.get_template("index.html")?;
    tmpl.render(context! {
        completed_count => completed_count(lives, now),
        lives => live_rows(lives, live_base_url, now),
        visible => visible,
        site_base_url => site_base_url,
    })
}
