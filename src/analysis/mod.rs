//! Query interface over the weather archive.
//!
//! ## Core Types
//!
//! - [`API`] — One method per route; opens a session per call
//! - [`Query`] — clap-parsed commands for the interactive CLI
//! - [`CLI`] — Interactive command-line interface
//!
//! ## HTTP
//!
//! The [`handlers`] submodule exposes actix-web routes, and [`Server`]
//! binds them behind request logging and CORS.
mod api;
mod cli;
#[cfg(feature = "server")]
pub mod handlers;
mod query;
#[cfg(feature = "server")]
mod server;

pub use api::*;
pub use cli::*;
pub use query::*;
#[cfg(feature = "server")]
pub use server::*;
