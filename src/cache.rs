//! Process-lifetime memo caches for detection results and translations.
//!
//! Caches are explicit objects owned by the pipeline rather than module state,
//! so each test can run against its own isolated instance. They are unbounded
//! unless a bound is configured, and only `clear()` empties them.

use crate::detection::DetectionResult;
use crate::i18n::{CacheMetrics, Language, MetricsReport};
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Cache sizing options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries; `None` means unbounded.
    /// When full, the oldest inserted entry is evicted first.
    pub max_entries: Option<usize>,
}

impl CacheConfig {
    pub fn unbounded() -> Self {
        Self { max_entries: None }
    }

    pub fn bounded(max_entries: usize) -> Self {
        Self {
            max_entries: Some(max_entries),
        }
    }
}

struct Entries<K, V> {
    map: HashMap<K, V>,
    // Insertion order, used only when a bound is configured
    order: VecDeque<K>,
}

/// Thread-safe memo cache with hit/miss counters.
///
/// Writes take an exclusive lock, so concurrent inserts of the same key race
/// benignly: the last writer wins and no reader observes a partial value.
pub struct MemoCache<K, V> {
    name: &'static str,
    config: CacheConfig,
    entries: RwLock<Entries<K, V>>,
    metrics: CacheMetrics,
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(name: &'static str, config: CacheConfig) -> Self {
        Self {
            name,
            config,
            entries: RwLock::new(Entries {
                map: HashMap::new(),
                order: VecDeque::new(),
            }),
            metrics: CacheMetrics::new(),
        }
    }

    /// Look up a value, recording a hit or a miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        match entries.map.get(key) {
            Some(value) => {
                self.metrics.record_hit();
                Some(value.clone())
            }
            None => {
                self.metrics.record_miss();
                None
            }
        }
    }

    /// Insert a value, evicting the oldest entry if a bound is reached.
    pub fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);

        if entries.map.contains_key(&key) {
            entries.map.insert(key, value);
            return;
        }

        if let Some(max) = self.config.max_entries {
            if max == 0 {
                return;
            }
            while entries.map.len() >= max {
                let Some(oldest) = entries.order.pop_front() else {
                    break;
                };
                entries.map.remove(&oldest);
                self.metrics.record_eviction();
                debug!("{} cache full ({} entries), evicted oldest entry", self.name, max);
            }
            entries.order.push_back(key.clone());
        }

        entries.map.insert(key, value);
    }

    /// Remove every entry. Counters are kept.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let removed = entries.map.len();
        entries.map.clear();
        entries.order.clear();
        debug!("{} cache cleared ({} entries removed)", self.name, removed);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .map
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    pub fn report(&self) -> MetricsReport {
        self.metrics.report()
    }
}

/// Detection results keyed by the exact input string.
pub type DetectionCache = MemoCache<String, DetectionResult>;

/// Translations keyed by (source text, target language).
pub type TranslationCache = MemoCache<(String, Language), String>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn cache(config: CacheConfig) -> MemoCache<String, u32> {
        MemoCache::new("test", config)
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_get_records_miss_then_hit() {
        let cache = cache(CacheConfig::unbounded());

        assert_eq!(cache.get(&"a".to_string()), None);
        cache.insert("a".to_string(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(1));

        assert_eq!(cache.metrics().misses(), 1);
        assert_eq!(cache.metrics().hits(), 1);
    }

    #[test]
    fn test_insert_existing_key_overwrites() {
        let cache = cache(CacheConfig::unbounded());
        cache.insert("a".to_string(), 1);
        cache.insert("a".to_string(), 2);

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"a".to_string()), Some(2));
    }

    #[test]
    fn test_clear_empties_cache_but_keeps_counters() {
        let cache = cache(CacheConfig::unbounded());
        cache.insert("a".to_string(), 1);
        cache.get(&"a".to_string());

        cache.clear();

        assert!(cache.is_empty());
        assert_eq!(cache.metrics().hits(), 1);
        assert_eq!(cache.get(&"a".to_string()), None);
    }

    // ==================== Bound Tests ====================

    #[test]
    fn test_unbounded_cache_grows() {
        let cache = cache(CacheConfig::default());
        for i in 0..1000 {
            cache.insert(i.to_string(), i);
        }
        assert_eq!(cache.len(), 1000);
        assert_eq!(cache.metrics().evictions(), 0);
    }

    #[test]
    fn test_bounded_cache_evicts_oldest() {
        let cache = cache(CacheConfig::bounded(2));
        cache.insert("a".to_string(), 1);
        cache.insert("b".to_string(), 2);
        cache.insert("c".to_string(), 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&"a".to_string()), None);
        assert_eq!(cache.get(&"b".to_string()), Some(2));
        assert_eq!(cache.get(&"c".to_string()), Some(3));
        assert_eq!(cache.metrics().evictions(), 1);
    }

    #[test]
    fn test_zero_bound_stores_nothing() {
        let cache = cache(CacheConfig::bounded(0));
        cache.insert("a".to_string(), 1);
        assert!(cache.is_empty());
    }

    // ==================== Concurrency Tests ====================

    #[test]
    fn test_concurrent_writes_same_key() {
        let cache = Arc::new(cache(CacheConfig::unbounded()));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        cache.insert("shared".to_string(), 7);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("writer thread panicked");
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&"shared".to_string()), Some(7));
    }
}
