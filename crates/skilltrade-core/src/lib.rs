//! Skilltrade domain core: models, typed storage, and the matching and
//! match-request services consumed by the API server.

pub mod error;
pub mod models;
pub mod paths;
pub mod services;
pub mod storage;

pub use error::{CoreError, CoreResult};
pub use models::*;

use std::sync::Arc;
use storage::Storage;
use tracing::info;

/// Core application state shared by the server and every handler.
pub struct AppCore {
    pub storage: Arc<Storage>,
}

impl AppCore {
    pub async fn new(db_path: &str) -> anyhow::Result<Self> {
        let storage = Arc::new(Storage::new(db_path)?);

        info!("Initializing Skilltrade core");

        Ok(Self { storage })
    }
}
