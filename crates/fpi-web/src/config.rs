//! Server configuration.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use fpi_core::{ConstraintStore, MemoryStore, SledStore};

/// Food Pantry Inventory constraint pages command line arguments.
#[derive(Debug, Parser)]
#[command(name = "fpi-web")]
#[command(about = "Constraint management pages for Food Pantry Inventory")]
#[command(version)]
pub struct Args {
    /// Address to listen on for HTTP requests.
    #[arg(short, long, default_value = "127.0.0.1:8000")]
    pub listen: String,

    /// Directory holding the constraint database.
    #[arg(long, default_value = "fpi-data")]
    pub data_dir: PathBuf,

    /// Keep records in memory only; nothing survives a restart.
    #[arg(long, default_value_t = false)]
    pub memory: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Where constraint records are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Sled(PathBuf),
}

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// Address to listen on for HTTP requests.
    pub listen_addr: String,
    /// Record store backend.
    pub storage: StorageBackend,
}

impl From<Args> for WebConfig {
    fn from(args: Args) -> Self {
        let storage = if args.memory {
            StorageBackend::Memory
        } else {
            StorageBackend::Sled(args.data_dir)
        };

        Self {
            listen_addr: args.listen,
            storage,
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8000".to_string(),
            storage: StorageBackend::Sled(PathBuf::from("fpi-data")),
        }
    }
}

impl WebConfig {
    /// Open the configured record store.
    pub fn open_store(&self) -> fpi_core::Result<Arc<dyn ConstraintStore>> {
        Ok(match &self.storage {
            StorageBackend::Memory => Arc::new(MemoryStore::new()),
            StorageBackend::Sled(path) => Arc::new(SledStore::open(path)?),
        })
    }
}
