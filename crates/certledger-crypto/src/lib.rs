//! Cryptographic fingerprinting for the certificate ledger.
//!
//! Provides the domain-separated BLAKE3 hasher that turns a block's canonical
//! byte form into its fingerprint. All crypto operations wrap established
//! libraries — no custom cryptography.

pub mod hasher;

pub use hasher::BlockHasher;
