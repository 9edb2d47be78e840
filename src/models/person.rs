//! Flat person record as persisted in the `people` relation.

/// One fully resolved person record.
///
/// `id` equals the requested resource index, not a server-assigned key.
/// Every reference list is already denormalized into a joined label string,
/// except `homeworld`, which holds the trailing numeric path segment of the
/// referenced planet URL. A `Person` only exists fully resolved; there is no
/// partially-filled state.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Person {
    /// Primary key, equal to the harvested resource ID.
    pub id: i64,
    /// Birth year, copied verbatim from the API.
    pub birth_year: String,
    /// Eye color, copied verbatim from the API.
    pub eye_color: String,
    /// Film titles joined with `", "`.
    pub films: String,
    /// Gender, copied verbatim from the API.
    pub gender: String,
    /// Hair color, copied verbatim from the API.
    pub hair_color: String,
    /// Height, copied verbatim from the API.
    pub height: String,
    /// Identifier segment of the homeworld URL (not resolved to a label).
    pub homeworld: String,
    /// Mass, copied verbatim from the API.
    pub mass: String,
    /// Person name, copied verbatim from the API.
    pub name: String,
    /// Skin color, copied verbatim from the API.
    pub skin_color: String,
    /// Species names joined with `", "`.
    pub species: String,
    /// Starship names joined with `", "`.
    pub starships: String,
    /// Vehicle names joined with `", "`.
    pub vehicles: String,
}
