//! Domain value objects shared by routes and the navigation facade.

pub mod ids;

pub use ids::{EpisodeUri, PodcastUri};
