//! Service layer implementing the client and network stores on top of `models`.
//! - Every write runs in its own transaction, committed or rolled back before returning.
//! - Natural-key uniqueness is left to the database; violations surface as `DuplicateKey`.

pub mod errors;
pub mod pagination;
pub mod client_service;
pub mod network_service;
mod tx;
#[cfg(test)]
pub mod test_support;
