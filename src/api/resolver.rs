//! Resolution of reference-URL lists into joined display labels.

use futures_util::future::try_join_all;

use crate::api::client::ApiClient;
use crate::api::payload::ResourceLabel;
use crate::Result;

/// Resolves lists of resource URLs into one `", "`-joined label string.
#[derive(Debug, Clone)]
pub struct ReferenceResolver {
    client: ApiClient,
}

impl ReferenceResolver {
    /// Create a resolver sharing the given client's connection pool.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Fetch every URL and join the extracted labels in input order.
    ///
    /// All URLs are fetched concurrently; the joined output still follows
    /// input order, not completion order. An empty list yields an empty
    /// string without issuing a request.
    ///
    /// # Errors
    ///
    /// Fails the whole call on the first URL that errors (network, non-2xx,
    /// malformed JSON, or a body missing both `title` and `name`) — no
    /// partial joins.
    pub async fn resolve(&self, urls: &[String]) -> Result<String> {
        let labels = try_join_all(urls.iter().map(|url| self.fetch_label(url))).await?;
        Ok(labels.join(", "))
    }

    async fn fetch_label(&self, url: &str) -> Result<String> {
        let label: ResourceLabel = self.client.get_json(url).await?;
        Ok(label.into_text())
    }
}
