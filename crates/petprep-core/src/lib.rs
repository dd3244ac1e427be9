pub mod config;
pub mod logging;

pub mod error;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod relabel;
pub mod score;
pub mod url_model;

pub use error::PrepError;
