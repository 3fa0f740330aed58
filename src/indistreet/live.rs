use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::{FetchError, post_query};

/// One show as the Indistreet API returns it. The list is a read-only
/// snapshot; nothing here is ever mutated after the fetch.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Live {
    pub id: String,
    pub title: String,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub is_canceled: Option<bool>,
}

fn live_query(musician_id: &str) -> String {
    format!(
        r#"query findLiveByMusicianId {{
  lives(where: {{ musicians: {{ id: "{musician_id}" }} }}, sort: "startDate:DESC") {{
    id
    title
    startDate
    isCanceled
  }}
}}"#
    )
}

#[derive(Debug, Deserialize)]
struct LiveList {
    lives: Vec<Live>,
}

/// Fetches every show for the given musician, newest first as the service
/// sorts them, with cancelled shows removed.
pub async fn fetch_lives(endpoint: &str, musician_id: &str) -> Result<Vec<Live>, FetchError> {
    let query = live_query(musician_id);
    let list: LiveList = post_query(endpoint, &query).await?;

    // Older records carry isCanceled: null or omit the field entirely; only
    // an explicit true means the show was cancelled.
    let lives = list
        .lives
        .into_iter()
        .filter(|live| !live.is_canceled.unwrap_or(false))
        .collect();

    Ok(lives)
}
