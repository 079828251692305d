//! TTL cache for memoizing expensive provider responses
//!
//! Providers rate-limit discovery endpoints such as "intermediate
//! tokens for pair X", so strategies memoize those responses here.
//! Expiry is lazy: `get` drops an expired entry on access; `cleanup`
//! sweeps proactively. The map is internally synchronized, so one cache
//! may be shared across concurrently-running provider tasks and across
//! strategy invocations.

use dashmap::DashMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Value plus its creation time; expired once `ttl` has elapsed
#[derive(Debug, Clone)]
struct CacheEntry<T> {
	value: T,
	created_at: Instant,
}

impl<T> CacheEntry<T> {
	fn new(value: T) -> Self {
		Self {
			value,
			created_at: Instant::now(),
		}
	}

	fn is_expired(&self, ttl: Duration) -> bool {
		self.created_at.elapsed() > ttl
	}
}

/// Key→value store with per-cache TTL
///
/// When constructed disabled, `get` always misses and `set` is a no-op,
/// so callers never need to special-case a missing cache.
#[derive(Debug)]
pub struct TtlCache<T: Clone> {
	namespace: String,
	enabled: bool,
	ttl: Duration,
	entries: DashMap<String, CacheEntry<T>>,
}

impl<T: Clone> TtlCache<T> {
	pub fn new(namespace: impl Into<String>, enabled: bool, ttl: Duration) -> Self {
		Self {
			namespace: namespace.into(),
			enabled,
			ttl,
			entries: DashMap::new(),
		}
	}

	/// Cache that never stores anything
	pub fn disabled(namespace: impl Into<String>) -> Self {
		Self::new(namespace, false, Duration::ZERO)
	}

	pub fn is_enabled(&self) -> bool {
		self.enabled
	}

	pub fn ttl(&self) -> Duration {
		self.ttl
	}

	/// Look up a key, lazily evicting it when expired
	pub fn get(&self, key: &str) -> Option<T> {
		if !self.enabled {
			return None;
		}

		let storage_key = self.storage_key(key);

		// Atomic check-and-remove so racing readers cannot resurrect an
		// expired entry
		self.entries.remove_if(&storage_key, |_, entry| {
			let expired = entry.is_expired(self.ttl);
			if expired {
				debug!(
					namespace = %self.namespace,
					key,
					age_ms = entry.created_at.elapsed().as_millis() as u64,
					"cache entry expired"
				);
			}
			expired
		});

		self.entries
			.get(&storage_key)
			.map(|entry| entry.value.clone())
	}

	/// Store a value; silently ignored when the cache is disabled
	pub fn set(&self, key: &str, value: T) {
		if !self.enabled {
			return;
		}

		self.entries
			.insert(self.storage_key(key), CacheEntry::new(value));
	}

	/// Drop every entry
	pub fn clear(&self) {
		let count = self.entries.len();
		self.entries.clear();
		debug!(namespace = %self.namespace, count, "cleared cache");
	}

	/// Drop all expired entries, returning how many were removed
	pub fn cleanup(&self) -> usize {
		let mut removed = 0;
		self.entries.retain(|_, entry| {
			let expired = entry.is_expired(self.ttl);
			if expired {
				removed += 1;
			}
			!expired
		});

		if removed > 0 {
			debug!(namespace = %self.namespace, removed, "cleaned up expired cache entries");
		}
		removed
	}

	/// Number of stored entries, expired or not
	pub fn size(&self) -> usize {
		self.entries.len()
	}

	fn storage_key(&self, key: &str) -> String {
		format!("{}:{}", self.namespace, key)
	}
}
