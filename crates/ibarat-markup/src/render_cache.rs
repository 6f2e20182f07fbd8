//! Memoized parsing.
//!
//! `parse` is pure, so a document can be reused for as long as the raw text
//! it came from is unchanged. Display layers that re-render on every
//! keystroke or list refresh hit the same few texts over and over.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::nodes::Document;
use crate::paragraph::hash_source;
use crate::parse::parse;

pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone)]
struct CachedDocument {
    source_hash: u64,
    source: String,
    document: Arc<Document>,
}

/// Hit and miss counters since creation or the last [`RenderCache::clear`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Bounded cache of parsed documents keyed by raw text.
///
/// Entries are kept most recently used first and the oldest is evicted once
/// `capacity` is reached. A capacity of zero disables caching.
#[derive(Debug, Clone)]
pub struct RenderCache {
    entries: VecDeque<CachedDocument>,
    capacity: usize,
    stats: CacheStats,
}

impl Default for RenderCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl RenderCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            stats: CacheStats::default(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }

    /// Parse `text`, reusing an earlier result for identical input.
    pub fn parse(&mut self, text: &str) -> Arc<Document> {
        let source_hash = hash_source(text);
        // Hash first, then the full string, so a collision is never a hit.
        let found = self
            .entries
            .iter()
            .position(|e| e.source_hash == source_hash && e.source == text);

        if let Some(index) = found {
            self.stats.hits += 1;
            tracing::trace!(target: "ibarat::cache", index, "render cache hit");
            if let Some(entry) = self.entries.remove(index) {
                let document = Arc::clone(&entry.document);
                self.entries.push_front(entry);
                return document;
            }
        }

        self.stats.misses += 1;
        let document = Arc::new(parse(text));
        if self.capacity == 0 {
            return document;
        }
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(CachedDocument {
            source_hash,
            source: text.to_owned(),
            document: Arc::clone(&document),
        });
        document
    }
}
