pub mod models {
    pub mod analytics;
    pub mod genre_distribution;
}

pub mod dto {
    pub mod common;
    pub mod profile;
}

pub mod error;
pub mod media;

// Re-export commonly used items
pub use error::{Result, ViewerError};
pub use media::game_icon_url;

pub use models::{
    analytics::{bucket_top_n, BucketEntry, DEFAULT_TOP_N, OTHERS_LABEL},
    genre_distribution::GenreDistribution,
};

pub use dto::{
    common::{ErrorResponse, SteamDataQuery},
    profile::{Achievement, OwnedGame, ProfileReport, UnderplayedGame},
};
