pub mod pipeline_profile;
pub mod roster_pipeline;
