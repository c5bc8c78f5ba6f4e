pub mod config;
pub mod errors;
pub mod format;
pub mod lexicon;
pub mod pipeline;
pub mod resolver;
pub mod types;
