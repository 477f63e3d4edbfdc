//! File-backed [`OrderStore`] holding the collection as pretty JSON.
//!
//! The file is written owner-only (0600 on Unix) because it sits next to
//! the session cookie and reveals personal history.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::domain::Order;
use crate::error::{Error, Result};
use crate::port::outbound::OrderStore;

/// Owner read/write.
#[cfg(unix)]
const FILE_MODE: u32 = 0o600;

pub struct JsonOrderStore {
    path: PathBuf,
}

impl JsonOrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderStore for JsonOrderStore {
    async fn load(&self) -> Result<Vec<Order>> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    path: self.path.clone(),
                })
            }
            Err(err) => return Err(err.into()),
        };

        // Caches written after an empty sync may hold a bare `null`.
        let mut orders: Vec<Order> =
            serde_json::from_slice::<Option<Vec<Order>>>(&data)?.unwrap_or_default();
        // Newest first; undated orders sink to the end.
        orders.sort_by(|a, b| b.placed_at.cmp(&a.placed_at));
        debug!(path = %self.path.display(), count = orders.len(), "Loaded orders");
        Ok(orders)
    }

    async fn save(&self, orders: &[Order]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let data = serde_json::to_vec_pretty(orders)?;
        write_private(&self.path, &data).await?;
        info!(path = %self.path.display(), count = orders.len(), "Saved orders");
        Ok(())
    }
}

/// Truncate-and-write `data` to `path`, restricting permissions on Unix.
pub(crate) async fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    let mut options = tokio::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    options.mode(FILE_MODE);

    let mut file = options.open(path).await?;
    file.write_all(data).await?;
    file.flush().await?;

    // `mode` only applies on creation; tighten files that already existed.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(FILE_MODE)).await?;
    }
    Ok(())
}
