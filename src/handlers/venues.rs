use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    db::repositories::{NewVenue, ShowRepository, VenueChanges, VenueRepository},
    error::{AppError, Result},
    state::AppState,
    templates::{
        components::Flash,
        pages::{home_page, venue_detail_page, venue_form_page, venue_search_page, venues_page},
    },
};

use super::SearchQuery;

#[derive(Debug, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
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
    // Checkbox: present in the body only when checked.
    #[serde(default)]
    pub seeking_talent: Option<String>,
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

impl VenueForm {
    fn to_new_venue(&self) -> NewVenue {
        NewVenue {
            name: self.name.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            address: self.address.clone(),
            phone: self.phone.clone(),
            genres: self.genres.clone(),
            image_link: submitted(&self.image_link),
            facebook_link: submitted(&self.facebook_link),
            website_link: submitted(&self.website_link),
            seeking_talent: self.seeking_talent.is_some(),
            description: submitted(&self.seeking_description),
        }
    }

    /// Blank or whitespace-only fields count as not submitted, so an edit
    /// form posted with gaps leaves those columns alone.
    fn to_changes(&self) -> VenueChanges {
        VenueChanges {
            name: submitted(&self.name),
            city: submitted(&self.city),
            state: submitted(&self.state),
            address: submitted(&self.address),
            phone: submitted(&self.phone),
            genres: submitted(&self.genres),
            image_link: submitted(&self.image_link),
            facebook_link: submitted(&self.facebook_link),
            website_link: submitted(&self.website_link),
            seeking_talent: self.seeking_talent.is_some(),
            description: submitted(&self.seeking_description),
        }
    }
}

pub async fn list_venues(State(state): State<AppState>) -> Result<Html<String>> {
    let venues = VenueRepository::new(state.db.clone()).list().await?;
    Ok(Html(venues_page(&venues).into_string()))
}

pub async fn search_venues(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>> {
    let results = VenueRepository::new(state.db.clone())
        .search_by_name(&query.search_term)
        .await?;
    Ok(Html(
        venue_search_page(&query.search_term, &results).into_string(),
    ))
}

pub async fn show_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = VenueRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {id} not found")))?;
    let shows = ShowRepository::new(state.db.clone())
        .partition_for_venue(id, Utc::now().naive_utc())
        .await?;
    Ok(Html(venue_detail_page(&venue, &shows).into_string()))
}

pub async fn new_venue_form() -> Html<String> {
    Html(venue_form_page("New Venue", "/venues/create", None, None).into_string())
}

pub async fn create_venue(
    State(state): State<AppState>,
    Form(form): Form<VenueForm>,
) -> Result<Html<String>> {
    let flash = match VenueRepository::new(state.db.clone())
        .create(form.to_new_venue())
        .await
    {
        Ok(venue) => {
            tracing::info!("Created venue {} ({})", venue.id, venue.name);
            Flash::success(format!("Venue {} was successfully listed!", venue.name))
        }
        Err(e) => {
            tracing::error!("Failed to create venue: {}", e);
            Flash::error(format!(
                "An error occurred. Venue {} could not be listed.",
                form.name
            ))
        }
    };
    Ok(Html(home_page(Some(&flash)).into_string()))
}

pub async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>> {
    let venue = VenueRepository::new(state.db.clone())
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Venue {id} not found")))?;
    Ok(Html(
        venue_form_page(
            "Edit Venue",
            &format!("/venues/{id}/edit"),
            Some(&venue),
            None,
        )
        .into_string(),
    ))
}

pub async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<VenueForm>,
) -> Result<Response> {
    let repo = VenueRepository::new(state.db.clone());
    match repo.update(id, form.to_changes()).await {
        Ok(venue) => Ok(Redirect::to(&format!("/venues/{}", venue.id)).into_response()),
        Err(err @ AppError::NotFound(_)) => Err(err),
        Err(e) => {
            tracing::error!("Failed to update venue {}: {}", id, e);
            let venue = repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Venue {id} not found")))?;
            let flash = Flash::error(format!(
                "An error occurred. Venue {} could not be updated.",
                venue.name
            ));
            Ok(Html(
                venue_form_page(
                    "Edit Venue",
                    &format!("/venues/{id}/edit"),
                    Some(&venue),
                    Some(&flash),
                )
                .into_string(),
            )
            .into_response())
        }
    }
}

pub async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode> {
    VenueRepository::new(state.db.clone()).delete(id).await?;
    tracing::info!("Deleted venue {}", id);
    Ok(StatusCode::NO_CONTENT)
}
