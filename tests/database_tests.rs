//! Database integration tests
//!
//! Exercises the repositories directly against an in-memory database:
//! - Create/update/delete inside transactions
//! - Case-insensitive substring search
//! - The upcoming/past partition boundary
//! - Foreign-key enforcement and cascade deletes

use chrono::{Duration, NaiveDate, Utc};
use pretty_assertions::assert_eq;
use sea_orm::EntityTrait;

use showbill::db::entities::{artist, show, venue};
use showbill::db::repositories::{
    ArtistRepository, NewArtist, NewShow, NewVenue, ShowRepository, VenueChanges, VenueRepository,
};
use showbill::error::AppError;
use showbill::test_utils::*;

fn sample_venue(name: &str) -> NewVenue {
    NewVenue {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: "1015 Folsom Street".to_string(),
        phone: "123-123-1234".to_string(),
        genres: "Jazz,Reggae,Swing".to_string(),
        image_link: None,
        facebook_link: None,
        website_link: None,
        seeking_talent: false,
        description: None,
    }
}

fn sample_artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: "326-123-5000".to_string(),
        genres: "Rock n Roll".to_string(),
        image_link: Some("https://example.com/guns.jpg".to_string()),
        facebook_link: None,
        website_link: None,
        seeking_venue: true,
        description: Some("Looking for shows to perform at".to_string()),
    }
}

#[tokio::test]
async fn test_create_venue_assigns_id() {
    let db = setup_test_db().await;
    let repo = VenueRepository::new(db);

    let venue = repo.create(sample_venue("The Musical Hop")).await.unwrap();

    assert!(venue.id > 0);
    assert_eq!(venue.name, "The Musical Hop");
    assert!(!venue.seeking_talent);
}

#[tokio::test]
async fn test_search_matches_substring_case_insensitively() {
    let db = setup_test_db().await;
    let repo = VenueRepository::new(db);

    repo.create(sample_venue("The Musical Hop")).await.unwrap();
    repo.create(sample_venue("Park Square Live Music & Coffee"))
        .await
        .unwrap();
    repo.create(sample_venue("The Dueling Pianos Bar"))
        .await
        .unwrap();

    let results = repo.search_by_name("HOP").await.unwrap();
    assert_eq!(results.count, 1);
    assert_eq!(results.items[0].name, "The Musical Hop");

    let results = repo.search_by_name("music").await.unwrap();
    assert_eq!(results.count, 2);
    let names: Vec<&str> = results.items.iter().map(|v| v.name.as_str()).collect();
    assert!(names.contains(&"The Musical Hop"));
    assert!(names.contains(&"Park Square Live Music & Coffee"));

    let results = repo.search_by_name("accordion").await.unwrap();
    assert_eq!(results.count, 0);
}

#[tokio::test]
async fn test_empty_search_term_matches_all() {
    let db = setup_test_db().await;
    let repo = VenueRepository::new(db);

    repo.create(sample_venue("The Musical Hop")).await.unwrap();
    repo.create(sample_venue("The Dueling Pianos Bar"))
        .await
        .unwrap();

    let results = repo.search_by_name("").await.unwrap();
    assert_eq!(results.count, 2);
}

#[tokio::test]
async fn test_partition_boundary_excludes_exact_now() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;

    let now = NaiveDate::from_ymd_opt(2030, 1, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();

    let past = create_test_show(&db, artist.id, venue.id, now - Duration::hours(1)).await;
    create_test_show(&db, artist.id, venue.id, now).await;
    let upcoming = create_test_show(&db, artist.id, venue.id, now + Duration::hours(1)).await;

    let repo = ShowRepository::new(db.clone());
    let partition = repo.partition_for_venue(venue.id, now).await.unwrap();

    assert_eq!(partition.upcoming.len(), 1);
    assert_eq!(partition.upcoming[0].id, upcoming.id);
    assert_eq!(partition.past.len(), 1);
    assert_eq!(partition.past[0].id, past.id);

    // The boundary show belongs to neither bucket; with it, the partition
    // accounts for every show of the venue.
    let total = show::Entity::find().all(&db).await.unwrap().len();
    assert_eq!(partition.upcoming.len() + partition.past.len() + 1, total);
}

#[tokio::test]
async fn test_partition_for_artist() {
    let db = setup_test_db().await;
    let venue_a = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let venue_b = create_test_venue(&db, "The Dueling Pianos Bar", "New York", "NY").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    let other = create_test_artist(&db, "Matt Quevado").await;

    let now = Utc::now().naive_utc();
    create_test_show(&db, artist.id, venue_a.id, now - Duration::days(1)).await;
    create_test_show(&db, artist.id, venue_b.id, now + Duration::days(1)).await;
    // Another artist's show must not leak into the partition
    create_test_show(&db, other.id, venue_a.id, now + Duration::days(1)).await;

    let repo = ShowRepository::new(db);
    let partition = repo.partition_for_artist(artist.id, now).await.unwrap();

    assert_eq!(partition.past.len(), 1);
    assert_eq!(partition.past[0].venue_name, "The Musical Hop");
    assert_eq!(partition.upcoming.len(), 1);
    assert_eq!(partition.upcoming[0].venue_name, "The Dueling Pianos Bar");
}

#[tokio::test]
async fn test_create_show_requires_existing_references() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;

    let repo = ShowRepository::new(db.clone());
    let result = repo
        .create(NewShow {
            artist_id: 9999,
            venue_id: venue.id,
            start_time: Utc::now().naive_utc(),
        })
        .await;

    assert!(result.is_err(), "insert against a missing artist must fail");

    let shows = show::Entity::find().all(&db).await.unwrap();
    assert!(shows.is_empty(), "the failed insert must write nothing");
}

#[tokio::test]
async fn test_delete_artist_cascades_to_shows() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    create_test_show(&db, artist.id, venue.id, Utc::now().naive_utc()).await;

    let repo = ArtistRepository::new(db.clone());
    repo.delete(artist.id).await.unwrap();

    let artists = artist::Entity::find().all(&db).await.unwrap();
    assert!(artists.is_empty());

    let shows = show::Entity::find().all(&db).await.unwrap();
    assert!(shows.is_empty(), "cascade should remove the artist's shows");

    // The venue side is untouched
    let venues = venue::Entity::find().all(&db).await.unwrap();
    assert_eq!(venues.len(), 1);
}

#[tokio::test]
async fn test_update_venue_applies_only_submitted_fields() {
    let db = setup_test_db().await;
    let repo = VenueRepository::new(db);
    let venue = repo.create(sample_venue("The Musical Hop")).await.unwrap();

    let updated = repo
        .update(
            venue.id,
            VenueChanges {
                phone: Some("415-000-1234".to_string()),
                website_link: Some("https://themusicalhop.com".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.phone, "415-000-1234");
    assert_eq!(
        updated.website_link.as_deref(),
        Some("https://themusicalhop.com")
    );
    assert_eq!(updated.name, "The Musical Hop");
    assert_eq!(updated.city, "San Francisco");
}

#[tokio::test]
async fn test_update_venue_seeking_talent_is_ratchet_only() {
    let db = setup_test_db().await;
    let repo = VenueRepository::new(db);
    let venue = repo.create(sample_venue("The Musical Hop")).await.unwrap();

    let updated = repo
        .update(
            venue.id,
            VenueChanges {
                seeking_talent: true,
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.seeking_talent);

    // A later update without the flag leaves it set
    let updated = repo
        .update(venue.id, VenueChanges::default())
        .await
        .unwrap();
    assert!(updated.seeking_talent);
}

#[tokio::test]
async fn test_update_venue_not_found() {
    let db = setup_test_db().await;
    let repo = VenueRepository::new(db);

    let err = repo
        .update(999, VenueChanges::default())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_update_artist_overwrites_every_field() {
    let db = setup_test_db().await;
    let repo = ArtistRepository::new(db);
    let artist = repo.create(sample_artist("Guns N Petals")).await.unwrap();
    assert!(artist.seeking_venue);

    let mut replacement = sample_artist("The Wild Sax Band");
    replacement.image_link = None;
    replacement.seeking_venue = false;
    replacement.description = None;

    let updated = repo.update(artist.id, replacement).await.unwrap();

    assert_eq!(updated.name, "The Wild Sax Band");
    assert_eq!(updated.image_link, None);
    assert!(!updated.seeking_venue);
    assert_eq!(updated.description, None);
}

#[tokio::test]
async fn test_update_artist_not_found() {
    let db = setup_test_db().await;
    let repo = ArtistRepository::new(db);

    let err = repo
        .update(999, sample_artist("Ghost Artist"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_show_listing_joins_venue_and_artist() {
    let db = setup_test_db().await;
    let venue = create_test_venue(&db, "The Musical Hop", "San Francisco", "CA").await;
    let artist = create_test_artist(&db, "Guns N Petals").await;
    create_test_show(&db, artist.id, venue.id, Utc::now().naive_utc()).await;

    let repo = ShowRepository::new(db);
    let listings = repo.list().await.unwrap();

    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].venue_name, "The Musical Hop");
    assert_eq!(listings[0].artist_name, "Guns N Petals");
    assert_eq!(listings[0].venue_id, venue.id);
    assert_eq!(listings[0].artist_id, artist.id);
}
