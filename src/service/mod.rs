//! Service layer: secret generation.

pub mod generator;

pub use generator::SecretGenerator;
