pub mod api;
pub mod catalog;
pub mod challenges;
pub mod config;
pub mod fetch;
pub mod output;
pub mod scoring;
