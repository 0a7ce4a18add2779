pub mod config;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod pipeline;
pub mod plot;
pub mod report;
pub mod store;
