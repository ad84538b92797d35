//! Blog-post validation server.
//!
//! Accepts JSON bodies on `/`, checks them against an embedded JSON Schema,
//! and only hands valid posts to the downstream handler. Invalid posts get a
//! 400 listing every violation:
//!
//! ```json
//! {"errors": ["title: \"hello\" does not match \"^[A-Z].*\""]}
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod post;
pub mod protocol;
pub mod server;

pub mod schema;
