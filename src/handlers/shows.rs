use axum::{extract::State, response::Html, Form};
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{
    db::repositories::{NewShow, ShowRepository},
    error::Result,
    state::AppState,
    templates::{
        components::Flash,
        pages::{home_page, show_form_page, shows_page},
    },
};

#[derive(Debug, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub start_time: String,
}

impl ShowForm {
    fn to_new_show(&self) -> Option<NewShow> {
        let artist_id = self.artist_id.trim().parse().ok()?;
        let venue_id = self.venue_id.trim().parse().ok()?;
        let start_time = parse_start_time(self.start_time.trim())?;
        Some(NewShow {
            artist_id,
            venue_id,
            start_time,
        })
    }
}

/// Accepts the datetime-local wire format with or without seconds, plus the
/// space-separated variant.
fn parse_start_time(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];
    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

pub async fn list_shows(State(state): State<AppState>) -> Result<Html<String>> {
    let shows = ShowRepository::new(state.db.clone()).list().await?;
    Ok(Html(shows_page(&shows).into_string()))
}

pub async fn new_show_form() -> Html<String> {
    Html(show_form_page(None).into_string())
}

pub async fn create_show(
    State(state): State<AppState>,
    Form(form): Form<ShowForm>,
) -> Result<Html<String>> {
    let flash = match form.to_new_show() {
        Some(new_show) => {
            match ShowRepository::new(state.db.clone()).create(new_show).await {
                Ok(show) => {
                    tracing::info!("Created show {}", show.id);
                    Flash::success("Show was successfully listed!")
                }
                Err(e) => {
                    tracing::error!("Failed to create show: {}", e);
                    Flash::error("An error occurred. Show could not be listed.")
                }
            }
        }
        None => {
            tracing::warn!("Rejected show submission with malformed fields");
            Flash::error("An error occurred. Show could not be listed.")
        }
    };
    Ok(Html(home_page(Some(&flash)).into_string()))
}

#[cfg(test)]
mod tests {
    use super::parse_start_time;

    #[test]
    fn parses_datetime_local_without_seconds() {
        let parsed = parse_start_time("2035-06-15T20:00").unwrap();
        assert_eq!(parsed.to_string(), "2035-06-15 20:00:00");
    }

    #[test]
    fn parses_space_separated_with_seconds() {
        let parsed = parse_start_time("2035-06-15 20:00:00").unwrap();
        assert_eq!(parsed.to_string(), "2035-06-15 20:00:00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_start_time("next friday").is_none());
        assert!(parse_start_time("").is_none());
    }
}
