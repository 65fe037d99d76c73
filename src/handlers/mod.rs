pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

use axum::{
    http::StatusCode,
    response::Html,
    routing::get,
    Router,
};
use serde::Deserialize;

use crate::state::AppState;
use crate::templates::pages::{home_page, not_found_page};

/// Query string for the search endpoints; an empty term matches everything.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub search_term: String,
}

pub fn html_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))

        // Venue endpoints
        .route("/venues", get(venues::list_venues))
        .route("/venues/search", get(venues::search_venues))
        .route("/venues/create", get(venues::new_venue_form).post(venues::create_venue))
        .route("/venues/:id", get(venues::show_venue).delete(venues::delete_venue))
        .route("/venues/:id/edit", get(venues::edit_venue_form).post(venues::update_venue))

        // Artist endpoints
        .route("/artists", get(artists::list_artists))
        .route("/artists/search", get(artists::search_artists))
        .route("/artists/create", get(artists::new_artist_form).post(artists::create_artist))
        .route("/artists/:id", get(artists::show_artist))
        .route("/artists/:id/edit", get(artists::edit_artist_form).post(artists::update_artist))

        // Show endpoints
        .route("/shows", get(shows::list_shows))
        .route("/shows/create", get(shows::new_show_form).post(shows::create_show))
}

pub async fn index() -> Html<String> {
    Html(home_page(None).into_string())
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(not_found_page().into_string()))
}
