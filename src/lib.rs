// Library root: declares the crate's public modules so integration tests and
// external consumers can access the crate's API.

pub mod client;
pub mod config;
pub mod forums;
pub mod model;
pub mod posts;

#[cfg(test)]
pub(crate) mod testutil;
