//! Per-length word list cache

use super::WordListError;
use super::list::WordList;
use super::source::WordListSource;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Resolves word lists on demand and keeps them for later games
///
/// The cache lock is held while a list loads, so concurrent requests for
/// the same length share one load. A cancelled load inserts nothing.
pub struct WordListManager {
    source: Arc<dyn WordListSource>,
    cache: Mutex<FxHashMap<usize, Arc<WordList>>>,
}

impl WordListManager {
    pub fn new(source: Arc<dyn WordListSource>) -> Self {
        Self {
            source,
            cache: Mutex::new(FxHashMap::default()),
        }
    }

    /// Get the list for `length`, loading it on first use
    ///
    /// # Errors
    ///
    /// Propagates [`WordList::resolve`] failures; failures are not cached.
    pub async fn get(&self, length: usize) -> Result<Arc<WordList>, WordListError> {
        let mut cache = self.cache.lock().await;
        if let Some(list) = cache.get(&length) {
            return Ok(Arc::clone(list));
        }

        let list = Arc::new(WordList::resolve(self.source.as_ref(), length).await?);
        cache.insert(length, Arc::clone(&list));
        Ok(list)
    }

    /// Number of lengths currently cached
    pub async fn cached_lengths(&self) -> usize {
        self.cache.lock().await.len()
    }
}
