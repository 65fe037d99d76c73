//! Integration tests for show routes
//!
//! Tests the show listing and creation flow, including the foreign-key
//! failure path and the repeat-booking case.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use sea_orm::EntityTrait;
use tower::util::ServiceExt;

use showbill::db::entities::show;
use showbill::handlers;
use showbill::state::AppState;
use showbill::test_utils::*;

fn create_test_router(state: &AppState) -> Router {
    Router::new()
        .merge(handlers::html_routes())
        .with_state(state.clone())
}

async fn body_string(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

fn form_post(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.into()))
        .unwrap()
}

#[tokio::test]
async fn test_list_shows_empty() {
    let state = setup_test_app_state().await;
    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/shows").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("No shows listed yet."));
}

#[tokio::test]
async fn test_create_show() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/shows/create",
            format!(
                "artist_id={}&venue_id={}&start_time=2035-06-15T20%3A00",
                artist.id, venue.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Show was successfully listed!"));

    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(shows.len(), 1);
    assert_eq!(shows[0].artist_id, artist.id);
    assert_eq!(shows[0].venue_id, venue.id);
    assert_eq!(shows[0].start_time.to_string(), "2035-06-15 20:00:00");
}

#[tokio::test]
async fn test_create_show_missing_artist_fails() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/shows/create",
            format!(
                "artist_id=9999&venue_id={}&start_time=2035-06-15T20%3A00",
                venue.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("An error occurred. Show could not be listed."));

    // The failed insert must not leave a partial write behind
    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert!(shows.is_empty());
}

#[tokio::test]
async fn test_create_show_rejects_malformed_start_time() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(form_post(
            "/shows/create",
            format!(
                "artist_id={}&venue_id={}&start_time=next+friday",
                artist.id, venue.id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("An error occurred. Show could not be listed."));

    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert!(shows.is_empty());
}

#[tokio::test]
async fn test_same_artist_venue_pair_can_book_twice() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;

    let app = create_test_router(&state);

    for start_time in ["2035-06-15T20%3A00", "2035-07-15T20%3A00"] {
        let response = app
            .clone()
            .oneshot(form_post(
                "/shows/create",
                format!(
                    "artist_id={}&venue_id={}&start_time={}",
                    artist.id, venue.id, start_time
                ),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let shows = show::Entity::find().all(&state.db).await.unwrap();
    assert_eq!(shows.len(), 2);
}

#[tokio::test]
async fn test_shows_listing_includes_venue_and_artist() {
    let state = setup_test_app_state().await;
    let venue = create_test_venue(&state.db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&state.db, "Guns N Petals").await;
    create_test_show(
        &state.db,
        artist.id,
        venue.id,
        chrono::Utc::now().naive_utc(),
    )
    .await;

    let app = create_test_router(&state);

    let response = app
        .oneshot(Request::builder().uri("/shows").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("Guns N Petals"));
}
