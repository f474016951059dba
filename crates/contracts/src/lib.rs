//! Wire types shared with the backend HTTP API.

pub mod query;
pub mod resources;
