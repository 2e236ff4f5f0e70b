//! Type-safe identifiers shared between the CLI layer and the rest of the crate.

pub mod ids;
pub mod season;

pub use ids::{PlayerId, TeamId};
pub use season::SeasonId;
