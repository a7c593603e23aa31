//! Identification against a mocked TMDB API.

use std::sync::Arc;

use assert_matches::assert_matches;
use reelmatch::config::{MatchingConfig, TmdbConfig};
use reelmatch::metadata::TmdbProvider;
use reelmatch::scanner::MediaIdentifier;
use reelmatch_common::{Error, MediaType};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn identifier_for(server: &MockServer) -> MediaIdentifier {
    let config = TmdbConfig {
        api_key: "test-key".into(),
        base_url: server.uri(),
        requests_per_second: 50,
        ..TmdbConfig::default()
    };
    let provider = TmdbProvider::new(&config).unwrap();
    MediaIdentifier::new(Arc::new(provider), MatchingConfig::default())
}

async fn mount_empty_search(server: &MockServer, catalog: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/search/{catalog}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "total_results": 0,
            "results": []
        })))
        .with_priority(10)
        .mount(server)
        .await;
}

#[tokio::test]
async fn identifies_tv_episode() {
    let server = MockServer::start().await;
    mount_empty_search(&server, "tv").await;

    Mock::given(method("GET"))
        .and(path("/search/tv"))
        .and(query_param("query", "Game of Thrones"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_results": 2,
            "results": [
                { "id": 1399, "name": "Game of Thrones", "original_name": "Game of Thrones", "first_air_date": "2011-04-17" },
                { "id": 9999, "name": "Game of Thrones: Unaired", "original_name": "Game of Thrones: Unaired", "first_air_date": "" }
            ]
        })))
        .with_priority(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tv/1399"))
        .and(query_param("append_to_response", "external_ids"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1399,
            "name": "Game of Thrones",
            "first_air_date": "2011-04-17",
            "created_by": [{ "name": "David Benioff" }, { "name": "D. B. Weiss" }],
            "genres": [{ "id": 18, "name": "Drama" }],
            "external_ids": { "imdb_id": "tt0944947" }
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/tv/1399/season/3/episode/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "The Rains of Castamere",
            "overview": "Robb presents himself to Walder Frey.",
            "still_path": "/rains.jpg",
            "guest_stars": []
        })))
        .mount(&server)
        .await;

    let identifier = identifier_for(&server);
    let id = identifier
        .identify("Game.of.Thrones.S03E09.HDTV.x264-EVOLVE.mp4", MediaType::Tv, None)
        .await
        .unwrap();

    assert_eq!(id.decision.provider_id, 1399);
    assert_eq!(id.decision.name, "Game of Thrones");
    assert_eq!(id.decision.match_score, 0);
    assert_eq!(id.details.director, "David Benioff,D. B. Weiss");
    assert_eq!(id.details.imdb_id.as_deref(), Some("tt0944947"));

    let json = serde_json::to_value(&id).unwrap();
    assert_eq!(json["episode"]["season_number"], 3);
    assert_eq!(json["episode"]["episode_number"], 9);
    assert_eq!(json["episode"]["name"], "The Rains of Castamere");
    assert_eq!(
        json["episode"]["image"],
        "https://image.tmdb.org/t/p/original/rains.jpg"
    );
}

#[tokio::test]
async fn unexpected_search_status_aborts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status_message": "Invalid API key"
        })))
        .mount(&server)
        .await;

    let identifier = identifier_for(&server);
    assert_matches!(
        identifier
            .identify("The.Matrix.1999.mkv", MediaType::Movie, None)
            .await,
        Err(Error::UnexpectedStatus(401))
    );
}

#[tokio::test]
async fn nothing_found_is_no_filename() {
    let server = MockServer::start().await;
    mount_empty_search(&server, "movie").await;

    let identifier = identifier_for(&server);
    assert_matches!(
        identifier
            .identify("Completely.Unknown.Film.mkv", MediaType::Movie, None)
            .await,
        Err(Error::NoFilename)
    );
}
