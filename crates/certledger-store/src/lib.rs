//! File persistence for the certificate ledger.
//!
//! [`ChainFile`] serializes the block sequence to a JSON file and rebuilds a
//! ledger from it, re-validating the whole chain before accepting anything
//! from disk. A corrupt file fails the load; it never touches an in-memory
//! ledger.

pub mod error;
pub mod file;

pub use error::StoreError;
pub use file::ChainFile;
