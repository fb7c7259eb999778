use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::debug;

use super::currency::{Currency, RateKey};
use super::error::ConversionError;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Maximum number of cached pairs.
    #[serde(default = "CacheConfig::default_max_size")]
    pub max_size: usize,
    /// Seconds a cached rate stays servable.
    #[serde(default = "CacheConfig::default_ttl_secs")]
    pub ttl_secs: u64,
}

impl CacheConfig {
    fn default_max_size() -> usize {
        100
    }

    fn default_ttl_secs() -> u64 {
        30 * 60
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: Self::default_max_size(),
            ttl_secs: Self::default_ttl_secs(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CacheError {
    #[error("Rate must be a positive finite number, got {0}")]
    InvalidRate(f64),
}

impl From<CacheError> for ConversionError {
    fn from(err: CacheError) -> Self {
        ConversionError::Conversion(err.to_string())
    }
}

struct CacheEntry {
    rate: f64,
    stored_at: Instant,
    // Breaks ties between entries stamped at the same instant.
    seq: u64,
}

#[derive(Default)]
struct Entries {
    map: HashMap<RateKey, CacheEntry>,
    next_seq: u64,
}

/// In-memory exchange rate cache bounded by size and age.
///
/// Every operation runs under one lock acquisition, so concurrent callers see
/// whole entries only. Nothing is awaited while the lock is held.
pub struct RateCache {
    inner: Mutex<Entries>,
    config: CacheConfig,
}

impl RateCache {
    pub fn new() -> Self {
        Self::with_config(CacheConfig::default())
    }

    pub fn with_config(config: CacheConfig) -> Self {
        Self {
            inner: Mutex::new(Entries::default()),
            config,
        }
    }

    /// Returns the cached rate for `from -> to`, dropping it if it outlived the TTL.
    pub async fn get(&self, from: Currency, to: Currency) -> Option<f64> {
        let key = RateKey::new(from, to);
        let mut entries = self.inner.lock().await;

        let Some((rate, stored_at)) = entries.map.get(&key).map(|e| (e.rate, e.stored_at)) else {
            debug!(%key, "Cache MISS");
            return None;
        };

        if stored_at.elapsed() > self.config.ttl() {
            debug!(%key, "Cache entry expired");
            entries.map.remove(&key);
            return None;
        }

        debug!(%key, "Cache HIT");
        Some(rate)
    }

    /// Stores `rate` for `from -> to`, evicting the oldest entry when full.
    pub async fn put(&self, from: Currency, to: Currency, rate: f64) -> Result<(), CacheError> {
        if !(rate.is_finite() && rate > 0.0) {
            return Err(CacheError::InvalidRate(rate));
        }
        if self.config.max_size == 0 {
            return Ok(());
        }

        let key = RateKey::new(from, to);
        let mut entries = self.inner.lock().await;

        if !entries.map.contains_key(&key) && entries.map.len() >= self.config.max_size {
            let oldest = entries
                .map
                .iter()
                .min_by_key(|(_, entry)| (entry.stored_at, entry.seq))
                .map(|(key, _)| *key);
            if let Some(oldest) = oldest {
                debug!(key = %oldest, "Cache EVICT");
                entries.map.remove(&oldest);
            }
        }

        let seq = entries.next_seq;
        entries.next_seq += 1;
        debug!(%key, rate, "Cache PUT");
        entries.map.insert(
            key,
            CacheEntry {
                rate,
                stored_at: Instant::now(),
                seq,
            },
        );
        Ok(())
    }

    pub async fn clear(&self) {
        let mut entries = self.inner.lock().await;
        entries.map.clear();
        debug!("Cache CLEAR");
    }

    pub async fn size(&self) -> usize {
        self.inner.lock().await.map.len()
    }

    pub async fn keys(&self) -> HashSet<RateKey> {
        self.inner.lock().await.map.keys().copied().collect()
    }
}

impl Default for RateCache {
    fn default() -> Self {
        Self::new()
    }
}
