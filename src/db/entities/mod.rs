pub mod venue;
pub mod artist;
pub mod show;

pub use venue::Entity as Venue;
pub use artist::Entity as Artist;
pub use show::Entity as Show;
