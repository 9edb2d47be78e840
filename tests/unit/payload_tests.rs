//! Unit tests for wire payload decoding and homeworld extraction.

use star_census::api::fetcher::homeworld_identifier;
use star_census::api::payload::{PersonDocument, ResourceLabel, NOT_FOUND_SENTINEL};
use star_census::AppError;

#[test]
fn title_takes_precedence_over_name() {
    let label: ResourceLabel =
        serde_json::from_str(r#"{"title": "A New Hope", "name": "ignored"}"#).expect("decode");
    assert_eq!(label.into_text(), "A New Hope");
}

#[test]
fn name_is_used_when_title_is_absent() {
    let label: ResourceLabel = serde_json::from_str(r#"{"name": "Luke Skywalker"}"#).expect("decode");
    assert_eq!(label.into_text(), "Luke Skywalker");
}

#[test]
fn body_without_title_or_name_fails_to_decode() {
    let result = serde_json::from_str::<ResourceLabel>(r#"{"designation": "sentient"}"#);
    assert!(result.is_err());
}

#[test]
fn full_person_body_decodes_as_present() {
    let raw = r#"{
        "name": "Luke Skywalker",
        "birth_year": "19BBY",
        "eye_color": "blue",
        "gender": "male",
        "hair_color": "blond",
        "height": "172",
        "mass": "77",
        "skin_color": "fair",
        "films": ["https://swapi.dev/api/films/1/"],
        "species": [],
        "starships": ["https://swapi.dev/api/starships/12/"],
        "vehicles": [],
        "homeworld": "https://swapi.dev/api/planets/1/"
    }"#;
    let document: PersonDocument = serde_json::from_str(raw).expect("decode");

    let PersonDocument::Present(payload) = document else {
        panic!("expected a present record");
    };
    assert_eq!(payload.name, "Luke Skywalker");
    assert_eq!(payload.films, vec!["https://swapi.dev/api/films/1/"]);
    assert!(payload.species.is_empty());
    assert_eq!(payload.homeworld, "https://swapi.dev/api/planets/1/");
}

#[test]
fn detail_body_decodes_as_missing() {
    let document: PersonDocument =
        serde_json::from_str(r#"{"detail": "Not found"}"#).expect("decode");

    let PersonDocument::Missing(body) = document else {
        panic!("expected a missing record");
    };
    assert_eq!(body.detail, NOT_FOUND_SENTINEL);
}

#[test]
fn incomplete_person_body_fails_to_decode() {
    // Neither a full payload nor a detail body.
    let result = serde_json::from_str::<PersonDocument>(r#"{"name": "Luke Skywalker"}"#);
    assert!(result.is_err());
}

#[test]
fn homeworld_identifier_takes_second_to_last_segment() {
    assert_eq!(
        homeworld_identifier("https://swapi.dev/api/planets/1/").expect("extract"),
        "1"
    );
    assert_eq!(
        homeworld_identifier("https://swapi.dev/api/planets/10/").expect("extract"),
        "10"
    );
}

#[test]
fn homeworld_identifier_rejects_urls_without_segment() {
    assert!(matches!(
        homeworld_identifier(""),
        Err(AppError::Parse(_))
    ));
    assert!(matches!(
        homeworld_identifier("planets"),
        Err(AppError::Parse(_))
    ));
    assert!(matches!(
        homeworld_identifier("/"),
        Err(AppError::Parse(_))
    ));
}
