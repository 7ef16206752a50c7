use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

/// Cache entries expire after 5 minutes.
/// Catalog sheets change rarely, but operators expect edits to show quickly.
const CACHE_TTL_MINUTES: i64 = 5;

pub const PACKAGES_KEY: &str = "packages";
pub const GALLERY_KEY: &str = "gallery";
pub const TESTIMONIALS_KEY: &str = "testimonials";

/// Every key the store manages. Used for whole-store eviction when a write
/// fails for lack of space.
const KNOWN_KEYS: [&str; 3] = [PACKAGES_KEY, GALLERY_KEY, TESTIMONIALS_KEY];

/// Write timestamp, stored in a sidecar file next to the data so expiry can
/// be decided without parsing the (much larger) data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CacheMeta {
    cached_at: DateTime<Utc>,
}

/// A cache hit: the data plus when it was written.
#[derive(Debug, Clone)]
pub struct Cached<T> {
    pub data: T,
    pub cached_at: DateTime<Utc>,
}

impl<T> Cached<T> {
    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.cached_at).num_minutes()
    }
}

fn age_display(cached_at: DateTime<Utc>) -> String {
    let minutes = (Utc::now() - cached_at).num_minutes();
    if minutes < 1 {
        // Also covers clock skew
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if minutes < 1440 {
        format!("{}h ago", minutes / 60)
    } else {
        format!("{}d ago", minutes / 1440)
    }
}

fn is_expired(cached_at: DateTime<Utc>) -> bool {
    (Utc::now() - cached_at).num_minutes() >= CACHE_TTL_MINUTES
}

pub struct CacheStore {
    cache_dir: PathBuf,
}

impl CacheStore {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache dir: {}", cache_dir.display()))?;
        Ok(Self { cache_dir })
    }

    fn data_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.meta.json", key))
    }

    /// Read a cached collection. Entries past the TTL are deleted on read and
    /// reported as a miss, so a later `get` never resurrects stale data.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<Cached<T>>> {
        let meta_path = self.meta_path(key);
        if !meta_path.exists() {
            return Ok(None);
        }

        let meta: CacheMeta = match std::fs::read_to_string(&meta_path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
        {
            Some(meta) => meta,
            None => {
                // Unreadable metadata, treat as expired
                self.evict(key);
                return Ok(None);
            }
        };

        if is_expired(meta.cached_at) {
            debug!(key = key, "Cache entry expired, evicting");
            self.evict(key);
            return Ok(None);
        }

        let contents = std::fs::read_to_string(self.data_path(key))
            .with_context(|| format!("Failed to read cache file: {}", key))?;
        let data: T = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", key))?;

        Ok(Some(Cached {
            data,
            cached_at: meta.cached_at,
        }))
    }

    /// Write a collection through to disk, best effort. A first failure
    /// evicts every other key (the likely cause is a full disk or quota) and
    /// retries once; a second failure is logged and the write is dropped.
    /// Cache absence only costs first-paint latency, never correctness.
    pub fn set<T: Serialize>(&self, key: &str, data: &T) {
        if let Err(first) = self.write_entry(key, data) {
            warn!(key = key, error = %first, "Cache write failed, evicting other keys and retrying");
            for other in KNOWN_KEYS.iter().filter(|k| **k != key) {
                self.evict(other);
            }
            if let Err(second) = self.write_entry(key, data) {
                warn!(key = key, error = %second, "Cache write failed after eviction, dropping");
            }
        }
    }

    fn write_entry<T: Serialize>(&self, key: &str, data: &T) -> Result<()> {
        let contents = serde_json::to_string_pretty(data)?;
        std::fs::write(self.data_path(key), contents)?;

        let meta = CacheMeta {
            cached_at: Utc::now(),
        };
        std::fs::write(self.meta_path(key), serde_json::to_string_pretty(&meta)?)?;
        Ok(())
    }

    /// Remove both files for a key. Missing files are fine.
    fn evict(&self, key: &str) {
        let _ = std::fs::remove_file(self.data_path(key));
        let _ = std::fs::remove_file(self.meta_path(key));
    }

    fn age_of(&self, key: &str) -> Option<String> {
        let meta: CacheMeta = std::fs::read_to_string(self.meta_path(key))
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())?;
        if is_expired(meta.cached_at) {
            None
        } else {
            Some(age_display(meta.cached_at))
        }
    }

    pub fn ages(&self) -> CacheAges {
        CacheAges {
            packages: self.age_of(PACKAGES_KEY),
            gallery: self.age_of(GALLERY_KEY),
            testimonials: self.age_of(TESTIMONIALS_KEY),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CacheAges {
    pub packages: Option<String>,
    pub gallery: Option<String>,
    pub testimonials: Option<String>,
}

impl CacheAges {
    /// Age line for the status bar. Packages drive the main view, so their
    /// age is reported first when present.
    pub fn last_updated(&self) -> String {
        [&self.packages, &self.gallery, &self.testimonials]
            .into_iter()
            .flatten()
            .next()
            .cloned()
            .unwrap_or_else(|| "never".to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn temp_store(name: &str) -> CacheStore {
        let dir = std::env::temp_dir().join(format!(
            "tourcache-test-{}-{}",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        CacheStore::new(dir).unwrap()
    }

    fn backdate(store: &CacheStore, key: &str, minutes: i64) {
        let meta = CacheMeta {
            cached_at: Utc::now() - Duration::minutes(minutes),
        };
        std::fs::write(
            store.meta_path(key),
            serde_json::to_string_pretty(&meta).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_get_after_set_returns_same_data() {
        let store = temp_store("roundtrip");
        let data = vec!["Boracay".to_string(), "Palawan".to_string()];

        store.set(PACKAGES_KEY, &data);
        let hit: Cached<Vec<String>> = store.get(PACKAGES_KEY).unwrap().unwrap();
        assert_eq!(hit.data, data);
        assert!(hit.age_minutes() < 1);
    }

    #[test]
    fn test_missing_key_is_a_miss() {
        let store = temp_store("miss");
        let hit: Option<Cached<Vec<String>>> = store.get(GALLERY_KEY).unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn test_expired_entry_is_deleted_on_read() {
        let store = temp_store("expiry");
        store.set(PACKAGES_KEY, &vec![1, 2, 3]);
        backdate(&store, PACKAGES_KEY, CACHE_TTL_MINUTES + 1);

        let hit: Option<Cached<Vec<i32>>> = store.get(PACKAGES_KEY).unwrap();
        assert!(hit.is_none());
        assert!(!store.data_path(PACKAGES_KEY).exists());
        assert!(!store.meta_path(PACKAGES_KEY).exists());
    }

    #[test]
    fn test_entry_within_ttl_survives_read() {
        let store = temp_store("fresh");
        store.set(PACKAGES_KEY, &vec![1, 2, 3]);
        backdate(&store, PACKAGES_KEY, CACHE_TTL_MINUTES - 2);

        let hit: Option<Cached<Vec<i32>>> = store.get(PACKAGES_KEY).unwrap();
        assert!(hit.is_some());
        assert!(store.data_path(PACKAGES_KEY).exists());
    }

    #[test]
    fn test_corrupt_meta_is_treated_as_miss() {
        let store = temp_store("corrupt");
        store.set(PACKAGES_KEY, &vec![1]);
        std::fs::write(store.meta_path(PACKAGES_KEY), "not json").unwrap();

        let hit: Option<Cached<Vec<i32>>> = store.get(PACKAGES_KEY).unwrap();
        assert!(hit.is_none());
        assert!(!store.data_path(PACKAGES_KEY).exists());
    }

    #[test]
    fn test_write_failure_evicts_other_keys_and_drops_silently() {
        let store = temp_store("writefail");
        store.set(GALLERY_KEY, &vec![1, 2]);
        store.set(TESTIMONIALS_KEY, &vec![3]);

        // A directory squatting on the data path makes every write to this
        // key fail, on the first attempt and on the retry
        std::fs::create_dir_all(store.data_path(PACKAGES_KEY)).unwrap();
        store.set(PACKAGES_KEY, &vec![4, 5]);

        // First failure evicted the other keys; the retry failed and the
        // write was dropped without panicking
        assert!(!store.data_path(GALLERY_KEY).exists());
        assert!(!store.meta_path(GALLERY_KEY).exists());
        assert!(!store.data_path(TESTIMONIALS_KEY).exists());
        assert!(!store.meta_path(TESTIMONIALS_KEY).exists());

        let hit: Option<Cached<Vec<i32>>> = store.get(PACKAGES_KEY).unwrap();
        assert!(hit.is_none());
    }

    #[test]
    fn test_ages_skip_expired_entries() {
        let store = temp_store("ages");
        store.set(PACKAGES_KEY, &vec![1]);
        store.set(GALLERY_KEY, &vec![2]);
        backdate(&store, GALLERY_KEY, CACHE_TTL_MINUTES + 5);

        let ages = store.ages();
        assert!(ages.packages.is_some());
        assert!(ages.gallery.is_none());
        assert!(ages.testimonials.is_none());
        assert_eq!(ages.last_updated(), "just now");
    }

    #[test]
    fn test_last_updated_never_when_empty() {
        assert_eq!(CacheAges::default().last_updated(), "never");
    }

    #[test]
    fn test_age_display_buckets() {
        assert_eq!(age_display(Utc::now()), "just now");
        assert_eq!(age_display(Utc::now() - Duration::minutes(3)), "3m ago");
        assert_eq!(age_display(Utc::now() - Duration::minutes(90)), "1h ago");
        assert_eq!(age_display(Utc::now() - Duration::days(2)), "2d ago");
    }
}
