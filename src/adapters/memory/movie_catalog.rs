use crate::domain::{MovieId, MovieRecord};
use crate::ports::movie_catalog::{MovieCatalog as MovieCatalogTrait, MovieHandle, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

#[derive(Default)]
struct Entries {
    by_id: HashMap<MovieId, MovieHandle>,
    order: Vec<MovieId>,
}

/// インメモリの映画カタログ
///
/// 映画ごとに独立したロックを持つ。
/// マップ自体のロックはハンドルの取得・追加・削除の間だけ保持する。
pub struct MovieCatalog {
    entries: RwLock<Entries>,
}

impl MovieCatalog {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
        }
    }
}

impl Default for MovieCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MovieCatalogTrait for MovieCatalog {
    async fn insert(&self, movie: MovieRecord) -> Result<bool> {
        let mut entries = self.entries.write().await;
        if entries.by_id.contains_key(movie.movie_id()) {
            return Ok(false);
        }
        let movie_id = movie.movie_id().clone();
        entries
            .by_id
            .insert(movie_id.clone(), Arc::new(Mutex::new(movie)));
        entries.order.push(movie_id);
        Ok(true)
    }

    async fn find(&self, movie_id: &MovieId) -> Result<Option<MovieHandle>> {
        Ok(self.entries.read().await.by_id.get(movie_id).cloned())
    }

    async fn remove(&self, movie_id: &MovieId) -> Result<bool> {
        let mut entries = self.entries.write().await;
        if entries.by_id.remove(movie_id).is_none() {
            return Ok(false);
        }
        entries.order.retain(|id| id != movie_id);
        Ok(true)
    }

    async fn list(&self) -> Result<Vec<MovieHandle>> {
        let entries = self.entries.read().await;
        Ok(entries
            .order
            .iter()
            .filter_map(|id| entries.by_id.get(id).cloned())
            .collect())
    }
}
