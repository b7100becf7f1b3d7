pub mod catalog;
pub mod compare_fetch;
pub mod custom_metrics;
pub mod grade;
pub mod http_cache;
pub mod http_client;
pub mod merge;
pub mod session;
pub mod stat_record;
pub mod trend;
pub mod weekly_index;
