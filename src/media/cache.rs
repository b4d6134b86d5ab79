// SPDX-License-Identifier: MPL-2.0
//! In-memory cache of downloaded calendar images.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used images are evicted first
//! - **Memory-bounded**: Total decoded size limited by a byte budget
//! - **URL-keyed**: Images indexed by the URL they were downloaded from
//!
//! Nothing is written to disk; the cache lives as long as the window.

use crate::media::ImageData;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Default maximum number of images to cache.
pub const DEFAULT_MAX_IMAGES: usize = 48;

/// Minimum images to cache.
pub const MIN_MAX_IMAGES: usize = 4;

/// Maximum images to cache.
pub const MAX_MAX_IMAGES: usize = 128;

const FALLBACK_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_MAX_IMAGES) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Limits for the image cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum decoded size of all cached images, in bytes.
    pub max_bytes: usize,

    /// Maximum number of images to cache.
    pub max_images: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_bytes: crate::config::DEFAULT_CACHE_SIZE_MB as usize * 1024 * 1024,
            max_images: DEFAULT_MAX_IMAGES,
        }
    }
}

impl CacheConfig {
    #[must_use]
    pub fn new(max_bytes: usize, max_images: usize) -> Self {
        Self {
            max_bytes,
            max_images: max_images.clamp(MIN_MAX_IMAGES, MAX_MAX_IMAGES),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    image: ImageData,
    size_bytes: usize,
}

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub image_count: usize,
    pub total_bytes: usize,
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub insertions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of downloaded images keyed by URL.
pub struct ImageCache {
    cache: LruCache<String, CacheEntry>,
    config: CacheConfig,
    current_bytes: usize,
    stats: CacheStats,
}

impl ImageCache {
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_images).unwrap_or(FALLBACK_CAPACITY);

        Self {
            cache: LruCache::new(capacity),
            config,
            current_bytes: 0,
            stats: CacheStats::default(),
        }
    }

    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(CacheConfig::default())
    }

    /// Inserts an image, evicting the least recently used ones to make room.
    ///
    /// Returns `false` when the image alone would take more than half of the
    /// byte budget.
    pub fn insert(&mut self, url: String, image: ImageData) -> bool {
        let size_bytes = image.decoded_size_bytes();

        if size_bytes > self.config.max_bytes / 2 {
            tracing::debug!(%url, size_bytes, "Image too large for cache");
            return false;
        }

        if let Some(existing) = self.cache.pop(&url) {
            self.current_bytes = self.current_bytes.saturating_sub(existing.size_bytes);
        }

        while self.current_bytes + size_bytes > self.config.max_bytes && !self.cache.is_empty() {
            if let Some((evicted_url, evicted)) = self.cache.pop_lru() {
                self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
                self.stats.evictions += 1;
                tracing::debug!(url = %evicted_url, "Evicted image from cache");
            }
        }

        // `push` reports the entry dropped by the entry-count limit.
        if let Some((_, evicted)) = self.cache.push(url, CacheEntry { image, size_bytes }) {
            self.current_bytes = self.current_bytes.saturating_sub(evicted.size_bytes);
            self.stats.evictions += 1;
        }
        self.current_bytes += size_bytes;
        self.stats.insertions += 1;
        self.stats.image_count = self.cache.len();
        self.stats.total_bytes = self.current_bytes;

        true
    }

    /// Looks up an image and marks it as recently used.
    pub fn get(&mut self, url: &str) -> Option<ImageData> {
        if let Some(entry) = self.cache.get(url) {
            self.stats.hits += 1;
            Some(entry.image.clone())
        } else {
            self.stats.misses += 1;
            None
        }
    }

    /// Looks up an image without touching LRU order or statistics.
    #[must_use]
    pub fn peek(&self, url: &str) -> Option<&ImageData> {
        self.cache.peek(url).map(|entry| &entry.image)
    }

    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.cache.contains(url)
    }

    /// Returns the URLs from `urls` that are not cached yet, without duplicates.
    #[must_use]
    pub fn missing<'a>(&self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        let mut missing: Vec<String> = Vec::new();
        for url in urls {
            if !self.cache.contains(url) && !missing.iter().any(|m| m == url) {
                missing.push(url.to_string());
            }
        }
        missing
    }

    pub fn clear(&mut self) {
        self.cache.clear();
        self.current_bytes = 0;
        self.stats.image_count = 0;
        self.stats.total_bytes = 0;
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn memory_usage(&self) -> usize {
        self.current_bytes
    }
}

impl std::fmt::Debug for ImageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageCache")
            .field("image_count", &self.cache.len())
            .field("memory_usage", &self.current_bytes)
            .field("max_bytes", &self.config.max_bytes)
            .field("max_images", &self.config.max_images)
            .field("stats", &self.stats)
            .finish()
    }
}
