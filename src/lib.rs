//! postdrive - A small HTTP service for managing posts
//!
//! # Layout
//!
//! - `post`: the `Post` entity and its validator
//! - `repository`: the persistence port plus in-memory and JSON-file adapters
//! - `http_server`: Axum routes, error translation, server
//! - `cli`: command-line entry, config file, store bootstrap
//! - `logging`: tracing subscriber setup

pub mod cli;
pub mod http_server;
pub mod logging;
pub mod post;
pub mod repository;
