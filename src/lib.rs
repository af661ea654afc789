pub mod apis;
pub mod arguments;
pub mod config;
pub mod errors; // Structured error handling
pub mod logger;
pub mod pools; // Fetch, normalize, score and rank DEX pools
pub mod webserver;
