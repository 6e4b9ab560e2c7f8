pub mod application;
pub mod contents;
pub mod download;
pub mod http;
pub mod mirror;
pub mod stats;
