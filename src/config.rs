//! Player configuration

use std::path::PathBuf;

/// Configuration for a player session
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Catalog file to load videos from
    pub library_path: PathBuf,

    /// Seed for random play (None = seed from the OS)
    pub random_seed: Option<u64>,
}

impl PlayerConfig {
    /// Create a new player configuration
    pub fn new(library_path: PathBuf) -> Self {
        Self {
            library_path,
            random_seed: None,
        }
    }

    /// Make random play reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }
}
