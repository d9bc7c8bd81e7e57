pub mod efficiency;
pub mod event_config;
pub mod hiscore_api;
pub mod hiscore_diff;
pub mod milestone_aggregation;
pub mod price_api;
pub mod progress_plot;
pub mod snapshot_store;
pub mod standings;
pub mod submission_json;
pub mod ttl_cache;
pub mod value_format;
