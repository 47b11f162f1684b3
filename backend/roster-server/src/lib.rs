pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod pipeline;
pub mod routes;
pub mod sweeper;

#[cfg(test)]
mod tests;

pub use api::{
    error::{Result as ApiResult, RosterError},
    roster::get_roster,
};
pub use app_state::{AppState, open_cache_store};
pub use error::{Result as ServerResult, ServerError};
pub use pipeline::{pipeline_profile::PipelineProfile, roster_pipeline::RosterPipeline};
pub use sweeper::spawn_sweeper;

pub use crate::routes::build_router;
