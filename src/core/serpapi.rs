use crate::core::classifier;
use crate::domain::model::{ContactRecord, SocialProfile};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

#[derive(Serialize)]
struct SearchQuery<'a> {
    q: &'a str,
    hl: &'a str,
    gl: &'a str,
    api_key: &'a str,
}

/// The slice of a SerpAPI search payload this job consumes. Unknown fields
/// are ignored; an absent or `null` knowledge graph is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct SearchPayload {
    #[serde(default)]
    pub knowledge_graph: Option<KnowledgePanel>,
    #[serde(default)]
    pub organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KnowledgePanel {
    #[serde(default)]
    pub menu: Option<String>,
    #[serde(default)]
    pub review_count: Option<ReviewCount>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub list: Vec<PanelListItem>,
    #[serde(default)]
    pub source: Option<PanelSource>,
    #[serde(default)]
    pub profiles: Vec<SocialProfile>,
}

/// The API emits review counts as either a bare number or a formatted string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReviewCount {
    Count(i64),
    Text(String),
}

impl fmt::Display for ReviewCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PanelListItem {
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PanelSource {
    #[serde(default)]
    pub link: Option<SourceLink>,
}

/// `source.link` arrives as a single string or a list of strings depending on
/// the entity; resolved here once, at parse time.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SourceLink {
    One(String),
    Many(Vec<String>),
}

#[derive(Debug, Deserialize)]
pub struct OrganicResult {
    #[serde(default)]
    pub link: Option<String>,
}

/// Harvests candidate links from the three payload locations: knowledge-panel
/// list entries, the panel source link(s), and the organic results. Duplicates
/// are left in; the classifier deduplicates.
pub fn candidate_links(payload: &SearchPayload) -> Vec<String> {
    let mut links = Vec::new();

    if let Some(panel) = &payload.knowledge_graph {
        for item in &panel.list {
            if let Some(link) = &item.link {
                links.push(link.clone());
            }
        }

        match panel.source.as_ref().and_then(|source| source.link.as_ref()) {
            Some(SourceLink::Many(more)) => links.extend(more.iter().cloned()),
            Some(SourceLink::One(link)) => links.push(link.clone()),
            None => {}
        }
    }

    for result in &payload.organic_results {
        if let Some(link) = &result.link {
            if !link.is_empty() {
                links.push(link.clone());
            }
        }
    }

    links
}

/// Assembles the per-lead record from a parsed payload: panel fields plus the
/// classified social/ordering links.
pub fn extract_contacts(payload: &SearchPayload) -> ContactRecord {
    let panel = payload.knowledge_graph.as_ref();

    let links = candidate_links(payload);
    let profiles = panel.map(|p| p.profiles.as_slice()).unwrap_or(&[]);
    let classified = classifier::classify(&links, profiles);

    ContactRecord {
        website: panel.and_then(|p| p.menu.clone()).unwrap_or_default(),
        reviews: panel
            .and_then(|p| p.review_count.as_ref())
            .map(ToString::to_string)
            .unwrap_or_default(),
        phone: panel.and_then(|p| p.phone.clone()).unwrap_or_default(),
        facebook: classified.facebook,
        instagram: classified.instagram,
        order: classified.order,
    }
}

pub struct SerpApiClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    language: String,
    region: String,
}

impl SerpApiClient {
    pub fn new(
        endpoint: &str,
        api_key: &str,
        language: &str,
        region: &str,
        timeout_secs: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
            language: language.to_string(),
            region: region.to_string(),
        })
    }

    /// One outbound GET per call. Non-2xx statuses, malformed JSON and network
    /// errors all surface as errors for the caller to handle at lead
    /// granularity.
    pub async fn fetch(&self, name: &str, city: &str) -> Result<ContactRecord> {
        let query = format!("{} {}", name, city);
        let params = SearchQuery {
            q: &query,
            hl: &self.language,
            gl: &self.region,
            api_key: &self.api_key,
        };

        tracing::debug!("Searching for: {}", query);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?;
        let body = response.error_for_status()?.text().await?;
        let payload: SearchPayload = serde_json::from_str(&body)?;

        Ok(extract_contacts(&payload))
    }
}
