//! Wire types for upstream API bodies.

use serde::Deserialize;

/// Literal `detail` value the API returns for a missing record.
pub const NOT_FOUND_SENTINEL: &str = "Not found";

/// Primary person resource as returned by `GET /people/{id}`.
///
/// Scalar attributes are kept verbatim as strings; the four list fields hold
/// URLs of referenced resources, and `homeworld` is a single planet URL.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct PersonPayload {
    /// Person name.
    pub name: String,
    /// Birth year.
    pub birth_year: String,
    /// Eye color.
    pub eye_color: String,
    /// Gender.
    pub gender: String,
    /// Hair color.
    pub hair_color: String,
    /// Height.
    pub height: String,
    /// Mass.
    pub mass: String,
    /// Skin color.
    pub skin_color: String,
    /// URLs of films featuring this person.
    pub films: Vec<String>,
    /// URLs of species classifications.
    pub species: Vec<String>,
    /// URLs of piloted starships.
    pub starships: Vec<String>,
    /// URLs of piloted vehicles.
    pub vehicles: Vec<String>,
    /// URL of the homeworld planet.
    pub homeworld: String,
}

/// Body shape of a missing-record response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct DetailBody {
    /// Upstream detail message; [`NOT_FOUND_SENTINEL`] marks a missing record.
    pub detail: String,
}

/// Either a full person payload or a detail-only body.
///
/// Variant order matters: a real record is tried first, so a body carrying
/// only `detail` falls through to [`PersonDocument::Missing`].
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum PersonDocument {
    /// The record exists.
    Present(PersonPayload),
    /// The record does not exist (or the API reported another detail).
    Missing(DetailBody),
}

/// Referenced resource body carrying a display label.
///
/// Films label themselves with `title`, everything else with `name`; `title`
/// takes precedence when both are present. A body with neither field fails
/// to decode, surfacing the upstream contract violation as a fetch error.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResourceLabel {
    /// Film-style resource labeled by `title`.
    Titled {
        /// Display title.
        title: String,
    },
    /// Resource labeled by `name`.
    Named {
        /// Display name.
        name: String,
    },
}

impl ResourceLabel {
    /// Extract the display label.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Titled { title } => title,
            Self::Named { name } => name,
        }
    }
}
