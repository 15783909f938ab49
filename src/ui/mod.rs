//! Browser-facing pages
//!
//! Rich page rendering belongs to the static site in front of this service;
//! these handlers are the minimal pages the role gates redirect between.

mod handlers;

pub use handlers::*;
