//! Caller-owned cache of icon natural dimensions.
//!
//! Point symbolizers referencing an external image need the image's natural
//! size before a display scale can be computed, and that size is only
//! learned asynchronously. Each icon URL moves through a small state
//! machine:
//!
//! ```text
//! (absent) -> Loading -> Sized { max_side }
//! ```
//!
//! The cache is the single source of truth shared between the synchronous
//! style-build path (the consumer, reading [`IconCache::max_side`]) and the
//! asynchronous [`IconCache::measure`] task (the producer). Style building
//! never awaits the producer: callers create the cache once, pass it into
//! every `build_styles` call for the lifetime of the map view, and re-invoke
//! style construction once they learn (via repaint trigger, polling, or
//! their own scheduling) that pending icons may have been sized. No update
//! is pushed from here.
//!
//! There is no cancellation and no retry: a fetch or decode failure leaves
//! the entry `Loading` indefinitely and the icon renders unscaled.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use bytes::Bytes;
use sld_model::{StyleError, StyleResult};
use tracing::{debug, warn};

/// Sizing state of one icon URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconEntry {
    /// A load has been triggered but the natural size is not yet known.
    Loading,
    /// The natural size is known: the larger of natural width and height.
    Sized { max_side: u32 },
}

/// Counters for cache observability.
///
/// All fields are atomic so snapshots never take the map lock.
#[derive(Debug, Default)]
pub struct IconCacheStats {
    /// Total `request` calls.
    pub requests: AtomicU64,
    /// Lookups that found a sized entry.
    pub sized_hits: AtomicU64,
    /// Entries currently in `Loading` state.
    pub pending: AtomicU64,
    /// Fetch or decode failures.
    pub failures: AtomicU64,
}

/// Shared icon-metadata cache. Cheap to clone; clones share state.
#[derive(Debug, Clone)]
pub struct IconCache {
    entries: Arc<RwLock<HashMap<String, IconEntry>>>,
    client: reqwest::Client,
    stats: Arc<IconCacheStats>,
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}

impl IconCache {
    pub fn new() -> Self {
        IconCache {
            entries: Arc::new(RwLock::new(HashMap::new())),
            client: reqwest::Client::new(),
            stats: Arc::new(IconCacheStats::default()),
        }
    }

    /// Current state of one URL, if referenced before.
    pub fn entry(&self, src: &str) -> Option<IconEntry> {
        self.read_lock().get(src).copied()
    }

    /// Natural max side of an icon, once sizing has completed.
    pub fn max_side(&self, src: &str) -> Option<u32> {
        match self.read_lock().get(src) {
            Some(IconEntry::Sized { max_side }) => {
                self.stats.sized_hits.fetch_add(1, Ordering::Relaxed);
                Some(*max_side)
            }
            _ => None,
        }
    }

    /// Ensure sizing is underway for `src`. Fire and forget.
    ///
    /// The first reference inserts a `Loading` entry and, when called inside
    /// a tokio runtime, spawns the [`measure`](Self::measure) task. Outside
    /// a runtime the entry stays `Loading` until the caller drives `measure`
    /// itself.
    pub fn request(&self, src: &str) {
        self.stats.requests.fetch_add(1, Ordering::Relaxed);

        {
            let mut entries = self.write_lock();
            if entries.contains_key(src) {
                return;
            }
            entries.insert(src.to_string(), IconEntry::Loading);
        }
        self.stats.pending.fetch_add(1, Ordering::Relaxed);

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let cache = self.clone();
                let src = src.to_string();
                handle.spawn(async move {
                    // Failure is already counted and logged inside measure.
                    let _ = cache.measure(&src).await;
                });
            }
            Err(_) => {
                debug!(src, "no async runtime; icon stays unsized until measured by caller");
            }
        }
    }

    /// Fetch `src`, decode its natural dimensions, and store the sized
    /// entry. Returns the max side.
    ///
    /// This is the explicit producer half of the cache: it may be spawned
    /// by [`request`](Self::request) or driven directly by a caller that
    /// manages its own loading.
    pub async fn measure(&self, src: &str) -> StyleResult<u32> {
        {
            let mut entries = self.write_lock();
            match entries.get(src) {
                Some(IconEntry::Sized { max_side }) => return Ok(*max_side),
                Some(IconEntry::Loading) => {}
                None => {
                    entries.insert(src.to_string(), IconEntry::Loading);
                    self.stats.pending.fetch_add(1, Ordering::Relaxed);
                }
            }
        }

        match self.fetch_and_decode(src).await {
            Ok(max_side) => {
                self.insert_sized(src, max_side);
                debug!(src, max_side, "icon sized");
                Ok(max_side)
            }
            Err(err) => {
                self.stats.failures.fetch_add(1, Ordering::Relaxed);
                warn!(src, error = %err, "icon size discovery failed; entry stays unsized");
                Err(err)
            }
        }
    }

    async fn fetch_and_decode(&self, src: &str) -> StyleResult<u32> {
        let response = self
            .client
            .get(src)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| StyleError::IconFetch {
                src: src.to_string(),
                message: e.to_string(),
            })?;

        let payload: Bytes = response.bytes().await.map_err(|e| StyleError::IconFetch {
            src: src.to_string(),
            message: e.to_string(),
        })?;

        use image::GenericImageView;
        let img = image::load_from_memory(&payload).map_err(|e| StyleError::IconDecode {
            src: src.to_string(),
            message: e.to_string(),
        })?;

        let (width, height) = img.dimensions();
        Ok(width.max(height))
    }

    /// Store a known natural size directly.
    ///
    /// For callers that run their own image-loading mechanism and only use
    /// this cache as the shared size registry.
    pub fn insert_sized(&self, src: &str, max_side: u32) {
        let previous = self
            .write_lock()
            .insert(src.to_string(), IconEntry::Sized { max_side });
        if matches!(previous, Some(IconEntry::Loading)) {
            self.stats.pending.fetch_sub(1, Ordering::Relaxed);
        }
    }

    /// Number of URLs referenced so far.
    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    /// Snapshot of the cache counters.
    pub fn stats(&self) -> IconCacheStats {
        IconCacheStats {
            requests: AtomicU64::new(self.stats.requests.load(Ordering::Relaxed)),
            sized_hits: AtomicU64::new(self.stats.sized_hits.load(Ordering::Relaxed)),
            pending: AtomicU64::new(self.stats.pending.load(Ordering::Relaxed)),
            failures: AtomicU64::new(self.stats.failures.load(Ordering::Relaxed)),
        }
    }

    fn read_lock(&self) -> std::sync::RwLockReadGuard<'_, HashMap<String, IconEntry>> {
        // Lock poisoning cannot leave the map in a bad state: entries are
        // inserted whole, so a poisoned lock is still safe to read through.
        self.entries.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_lock(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<String, IconEntry>> {
        self.entries.write().unwrap_or_else(|e| e.into_inner())
    }
}
