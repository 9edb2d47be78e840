//! Per-ID retrieval and assembly of fully resolved person records.

use futures_util::future::try_join4;
use tracing::debug;

use crate::api::client::ApiClient;
use crate::api::payload::{PersonDocument, NOT_FOUND_SENTINEL};
use crate::api::resolver::ReferenceResolver;
use crate::models::person::Person;
use crate::pipeline::FetchRecord;
use crate::{AppError, Result};

/// Fetches one primary record per ID and resolves its reference lists.
#[derive(Debug, Clone)]
pub struct PersonFetcher {
    client: ApiClient,
    resolver: ReferenceResolver,
}

impl PersonFetcher {
    /// Create a fetcher sharing the given client's connection pool.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        let resolver = ReferenceResolver::new(client.clone());
        Self { client, resolver }
    }
}

impl FetchRecord for PersonFetcher {
    /// Fetch the person at `id`, returning `None` for the not-found sentinel.
    ///
    /// The four reference lists are resolved concurrently with each other;
    /// `homeworld` is extracted from its URL without a network call. Any
    /// fetch or parse failure fails this ID alone at this level — fan-out
    /// policy across IDs is decided by the caller.
    async fn fetch(&self, id: u32) -> Result<Option<Person>> {
        debug!(id, "begin fetch");
        let url = self.client.people_url(id);
        let (status, body) = self.client.get_text(&url).await?;
        let document: PersonDocument = serde_json::from_str(&body).map_err(|err| {
            if status.is_success() {
                AppError::Parse(format!("invalid person body from {url}: {err}"))
            } else {
                AppError::Http(format!("{url} returned status {status}"))
            }
        })?;

        let payload = match document {
            PersonDocument::Missing(body) if body.detail == NOT_FOUND_SENTINEL => {
                debug!(id, "person not found");
                return Ok(None);
            }
            PersonDocument::Missing(body) => {
                return Err(AppError::Parse(format!(
                    "unexpected detail from {url}: {}",
                    body.detail
                )));
            }
            PersonDocument::Present(payload) => payload,
        };

        let (films, species, starships, vehicles) = try_join4(
            self.resolver.resolve(&payload.films),
            self.resolver.resolve(&payload.species),
            self.resolver.resolve(&payload.starships),
            self.resolver.resolve(&payload.vehicles),
        )
        .await?;
        let homeworld = homeworld_identifier(&payload.homeworld)?;
        debug!(id, "end fetch");

        Ok(Some(Person {
            id: i64::from(id),
            birth_year: payload.birth_year,
            eye_color: payload.eye_color,
            films,
            gender: payload.gender,
            hair_color: payload.hair_color,
            height: payload.height,
            homeworld,
            mass: payload.mass,
            name: payload.name,
            skin_color: payload.skin_color,
            species,
            starships,
            vehicles,
        }))
    }
}

/// Extract the second-to-last `/`-delimited segment of a reference URL.
///
/// `.../planets/1/` yields `"1"`. The segment is kept as a plain identifier
/// string; the planet is deliberately not resolved to a label.
///
/// # Errors
///
/// Returns `AppError::Parse` if the URL has no such segment.
pub fn homeworld_identifier(url: &str) -> Result<String> {
    url.split('/')
        .rev()
        .nth(1)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| AppError::Parse(format!("homeworld url has no identifier segment: {url}")))
}
