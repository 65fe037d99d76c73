use chrono::NaiveDateTime;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType,
    ModelTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select, Set,
    TransactionTrait,
};

use crate::db::entities::{artist, show, venue};
use crate::error::{AppError, Result};

/// Search hits plus the hit count the results page displays.
pub struct SearchResults<T> {
    pub count: usize,
    pub items: Vec<T>,
}

impl<T> SearchResults<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}

/// A show row joined with the venue and artist it references, as rendered on
/// listing and detail pages.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ShowListing {
    pub id: i32,
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: NaiveDateTime,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// Shows of one venue or artist split around a query-time "now".
///
/// A show starting exactly at `now` lands in neither bucket.
pub struct ShowPartition {
    pub upcoming: Vec<ShowListing>,
    pub past: Vec<ShowListing>,
}

#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub description: Option<String>,
}

/// Partial venue update. `None` means the field was not submitted (or was
/// blank) and keeps its stored value. `seeking_talent` is ratchet-only: it is
/// applied only when true, so an unchecked box never clears the flag.
#[derive(Debug, Clone, Default)]
pub struct VenueChanges {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub genres: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_talent: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: String,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website_link: Option<String>,
    pub seeking_venue: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

/// Matches rows whose name contains `term` as a case-insensitive substring.
/// Lowercasing both sides keeps the comparison consistent across backends.
fn name_contains<C: ColumnTrait>(column: C, term: &str) -> sea_orm::sea_query::SimpleExpr {
    let pattern = format!("%{}%", term.to_lowercase());
    Expr::expr(Func::lower(Expr::col(column))).like(pattern)
}

pub struct VenueRepository {
    db: DatabaseConnection,
}

impl VenueRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<venue::Model>> {
        Ok(venue::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<venue::Model>> {
        Ok(venue::Entity::find_by_id(id).one(&self.db).await?)
    }

    /// Case-insensitive substring search on the venue name. An empty term
    /// matches every venue.
    pub async fn search_by_name(&self, term: &str) -> Result<SearchResults<venue::Model>> {
        let items = venue::Entity::find()
            .filter(name_contains(venue::Column::Name, term))
            .all(&self.db)
            .await?;
        Ok(SearchResults::new(items))
    }

    pub async fn create(&self, input: NewVenue) -> Result<venue::Model> {
        let txn = self.db.begin().await?;
        let venue = venue::ActiveModel {
            name: Set(input.name),
            city: Set(input.city),
            state: Set(input.state),
            address: Set(input.address),
            phone: Set(input.phone),
            genres: Set(input.genres),
            image_link: Set(input.image_link),
            facebook_link: Set(input.facebook_link),
            website_link: Set(input.website_link),
            seeking_talent: Set(input.seeking_talent),
            description: Set(input.description),
            ..Default::default()
        };
        let venue = venue.insert(&txn).await?;
        txn.commit().await?;
        Ok(venue)
    }

    /// Applies only the submitted fields; everything left `None` keeps its
    /// stored value.
    pub async fn update(&self, id: i32, changes: VenueChanges) -> Result<venue::Model> {
        let txn = self.db.begin().await?;
        let venue = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {id} not found")))?;

        let mut active: venue::ActiveModel = venue.clone().into();
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        if let Some(city) = changes.city {
            active.city = Set(city);
        }
        if let Some(state) = changes.state {
            active.state = Set(state);
        }
        if let Some(address) = changes.address {
            active.address = Set(address);
        }
        if let Some(phone) = changes.phone {
            active.phone = Set(phone);
        }
        if let Some(genres) = changes.genres {
            active.genres = Set(genres);
        }
        if let Some(image_link) = changes.image_link {
            active.image_link = Set(Some(image_link));
        }
        if let Some(facebook_link) = changes.facebook_link {
            active.facebook_link = Set(Some(facebook_link));
        }
        if let Some(website_link) = changes.website_link {
            active.website_link = Set(Some(website_link));
        }
        if changes.seeking_talent {
            active.seeking_talent = Set(true);
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }

        // An all-blank submission touches no columns; skip the empty UPDATE.
        let venue = if active.is_changed() {
            active.update(&txn).await?
        } else {
            venue
        };
        txn.commit().await?;
        Ok(venue)
    }

    /// Deletes the venue; its shows go with it via the foreign-key cascade.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;
        let venue = venue::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Venue {id} not found")))?;
        venue.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
}

pub struct ArtistRepository {
    db: DatabaseConnection,
}

impl ArtistRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<artist::Model>> {
        Ok(artist::Entity::find().all(&self.db).await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<artist::Model>> {
        Ok(artist::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn search_by_name(&self, term: &str) -> Result<SearchResults<artist::Model>> {
        let items = artist::Entity::find()
            .filter(name_contains(artist::Column::Name, term))
            .all(&self.db)
            .await?;
        Ok(SearchResults::new(items))
    }

    pub async fn create(&self, input: NewArtist) -> Result<artist::Model> {
        let txn = self.db.begin().await?;
        let artist = artist::ActiveModel {
            name: Set(input.name),
            city: Set(input.city),
            state: Set(input.state),
            phone: Set(input.phone),
            genres: Set(input.genres),
            image_link: Set(input.image_link),
            facebook_link: Set(input.facebook_link),
            website_link: Set(input.website_link),
            seeking_venue: Set(input.seeking_venue),
            description: Set(input.description),
            ..Default::default()
        };
        let artist = artist.insert(&txn).await?;
        txn.commit().await?;
        Ok(artist)
    }

    /// Unconditional overwrite of every field, blanks included.
    pub async fn update(&self, id: i32, input: NewArtist) -> Result<artist::Model> {
        let txn = self.db.begin().await?;
        let artist = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {id} not found")))?;

        let mut active: artist::ActiveModel = artist.into();
        active.name = Set(input.name);
        active.city = Set(input.city);
        active.state = Set(input.state);
        active.phone = Set(input.phone);
        active.genres = Set(input.genres);
        active.image_link = Set(input.image_link);
        active.facebook_link = Set(input.facebook_link);
        active.website_link = Set(input.website_link);
        active.seeking_venue = Set(input.seeking_venue);
        active.description = Set(input.description);

        let artist = active.update(&txn).await?;
        txn.commit().await?;
        Ok(artist)
    }

    pub async fn delete(&self, id: i32) -> Result<()> {
        let txn = self.db.begin().await?;
        let artist = artist::Entity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Artist {id} not found")))?;
        artist.delete(&txn).await?;
        txn.commit().await?;
        Ok(())
    }
}

pub struct ShowRepository {
    db: DatabaseConnection,
}

impl ShowRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn listing_select() -> Select<show::Entity> {
        show::Entity::find()
            .select_only()
            .column(show::Column::Id)
            .column(show::Column::VenueId)
            .column(show::Column::ArtistId)
            .column(show::Column::StartTime)
            .column_as(venue::Column::Name, "venue_name")
            .column_as(venue::Column::ImageLink, "venue_image_link")
            .column_as(artist::Column::Name, "artist_name")
            .column_as(artist::Column::ImageLink, "artist_image_link")
            .join(JoinType::InnerJoin, show::Relation::Venue.def())
            .join(JoinType::InnerJoin, show::Relation::Artist.def())
    }

    pub async fn list(&self) -> Result<Vec<ShowListing>> {
        Ok(Self::listing_select()
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?)
    }

    /// Shows at this venue split into upcoming (`start_time > now`) and past
    /// (`start_time < now`).
    pub async fn partition_for_venue(
        &self,
        venue_id: i32,
        now: NaiveDateTime,
    ) -> Result<ShowPartition> {
        let upcoming = Self::listing_select()
            .filter(show::Column::VenueId.eq(venue_id))
            .filter(show::Column::StartTime.gt(now))
            .order_by_asc(show::Column::StartTime)
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?;
        let past = Self::listing_select()
            .filter(show::Column::VenueId.eq(venue_id))
            .filter(show::Column::StartTime.lt(now))
            .order_by_asc(show::Column::StartTime)
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?;
        Ok(ShowPartition { upcoming, past })
    }

    pub async fn partition_for_artist(
        &self,
        artist_id: i32,
        now: NaiveDateTime,
    ) -> Result<ShowPartition> {
        let upcoming = Self::listing_select()
            .filter(show::Column::ArtistId.eq(artist_id))
            .filter(show::Column::StartTime.gt(now))
            .order_by_asc(show::Column::StartTime)
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?;
        let past = Self::listing_select()
            .filter(show::Column::ArtistId.eq(artist_id))
            .filter(show::Column::StartTime.lt(now))
            .order_by_asc(show::Column::StartTime)
            .into_model::<ShowListing>()
            .all(&self.db)
            .await?;
        Ok(ShowPartition { upcoming, past })
    }

    /// Inserting against a missing artist or venue fails on the foreign key
    /// and writes nothing.
    pub async fn create(&self, input: NewShow) -> Result<show::Model> {
        let txn = self.db.begin().await?;
        let show = show::ActiveModel {
            artist_id: Set(input.artist_id),
            venue_id: Set(input.venue_id),
            start_time: Set(input.start_time),
            ..Default::default()
        };
        let show = show.insert(&txn).await?;
        txn.commit().await?;
        Ok(show)
    }
}
