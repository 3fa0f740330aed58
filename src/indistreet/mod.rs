use serde::{Deserialize, Serialize, de::DeserializeOwned};

pub mod live;

pub use live::{Live, fetch_lives};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Query returned {status}")]
    Status { status: reqwest::StatusCode },

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("Response is missing the data field")]
    MissingData,
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// Posts one query document and unwraps the standard GraphQL envelope.
///
/// The service reports query-level failures as HTTP 200 with an `errors`
/// array, so both the transport status and the envelope are checked.
pub async fn post_query<T: DeserializeOwned>(endpoint: &str, query: &str) -> Result<T, FetchError> {
    let response = reqwest::Client::new()
        .post(endpoint)
        .json(&GraphqlRequest { query })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status { status });
    }

    let body: GraphqlResponse<T> = response.json().await?;
    if let Some(error) = body.errors.first() {
        return Err(FetchError::Graphql(error.message.clone()));
    }
    body.data.ok_or(FetchError::MissingData)
}
