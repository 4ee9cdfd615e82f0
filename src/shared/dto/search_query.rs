use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub query: Option<String>,
}
