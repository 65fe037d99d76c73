use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    db::repositories::{ArtistRepository, NewArtist, ShowRepository},
    error::{AppError, Result},
    state::AppState,
    templates::{
        components::Flash,
        pages::{
            artist_detail_page, artist_form_page, artist_search_page, artists_page, home_page,
        },
    },
};

use super::SearchQuery;

#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website_link: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

fn submitted(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ArtistForm {
    fn to_new_artist(&self) -> NewArtist {
        NewArtist {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            phone: self.phone.clone(),
            genres: self.genres.clone(),
            image_link: submitted(&self.image_link),
            facebook_link: submitted(&self.facebook_link),
            website_link: submitted(&self.website_link),
            seeking_venue: self.seeking_venue.is_some(),
            description: submitted(&self.seeking_description),
        }
    }
}

pub async fn list_artists(State(state): State<AppState>) -> Result<Html<String>> {
    let artists = ArtistRepository::new(state.db.clone()).list().await?;
    Ok(Html(artists_page(&artists).into_string()))
}

pub async fn search_artists(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>> {
    let results = ArtistRepository::new(state.db.clone())
        .search_by_name(&query.search_term)
        .await?;
    Ok(Html(
        artist_search_page(&query.search_term, &results).into_string(),
    ))
}

pub async fn show_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = ArtistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {id} not found")))?;
    let shows = ShowRepository::new(state.db.clone())
        .partition_for_artist(id, Utc::now().naive_utc())
        .await?;
    Ok(Html(artist_detail_page(&artist, &shows).into_string()))
}

pub async fn new_artist_form() -> Html<String> {
    Html(artist_form_page("New Artist", "/artists/create", None, None).into_string())
}

pub async fn create_artist(
    State(state): State<AppState>,
    Form(form): Form<ArtistForm>,
) -> Result<Html<String>> {
    let flash = match ArtistRepository::new(state.db.clone())
        .create(form.to_new_artist())
        .await
    {
        Ok(artist) => {
            tracing::info!("Created artist {} ({})", artist.id, artist.name);
            Flash::success(format!("Artist {} was successfully listed!", artist.name))
        }
        Err(e) => {
            tracing::error!("Failed to create artist: {}", e);
            Flash::error(format!(
                "An error occurred. Artist {} could not be listed.",
                form.name
            ))
        }
    };
    Ok(Html(home_page(Some(&flash)).into_string()))
}

pub async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let artist = ArtistRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Artist {id} not found")))?;
    Ok(Html(
        artist_form_page(
            "Edit Artist",
            &format!("/artists/{id}/edit"),
            Some(&artist),
            None,
        )
        .into_string(),
    ))
}

/// Unlike the venue edit, this replaces every field with what was submitted.
pub async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ArtistForm>,
) -> Result<Response> {
    let repo = ArtistRepository::new(state.db.clone());
    match repo.update(id, form.to_new_artist()).await {
        Ok(artist) => Ok(Redirect::to(&format!("/artists/{}", artist.id)).into_response()),
        Err(err @ AppError::NotFound(_)) => Err(err),
        Err(e) => {
            tracing::error!("Failed to update artist {}: {}", id, e);
            let artist = repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Artist {id} not found")))?;
            let flash = Flash::error(format!(
                "An error occurred. Artist {} could not be updated.",
                artist.name
            ));
            Ok(Html(
                artist_form_page(
                    "Edit Artist",
                    &format!("/artists/{id}/edit"),
                    Some(&artist),
                    Some(&flash),
                )
                .into_string(),
            )
            .into_response())
        }
    }
}
