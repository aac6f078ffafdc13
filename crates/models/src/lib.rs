//! Storage layer: sea-orm entities, connection setup and storage-error classification.

pub mod errors;
pub mod db;
pub mod client;
pub mod network;
pub mod client_network;

#[cfg(test)]
mod tests;
