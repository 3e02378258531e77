use crate::domain::{MovieId, MovieRecord};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// 映画1本ごとのハンドル
///
/// コピーの貸出・返却・販売、レビューの変更はすべてこのロックを保持して行う。
pub type MovieHandle = Arc<Mutex<MovieRecord>>;

/// 映画カタログポート
///
/// 映画集約の保管場所を抽象化する。
/// 一覧は追加順で返す。
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// 映画を追加する
    ///
    /// 同じ`MovieId`が既にある場合は何もせず`false`を返す。
    async fn insert(&self, movie: MovieRecord) -> Result<bool>;

    async fn find(&self, movie_id: &MovieId) -> Result<Option<MovieHandle>>;

    /// 映画を削除する。存在しなかった場合は`false`。
    async fn remove(&self, movie_id: &MovieId) -> Result<bool>;

    async fn list(&self) -> Result<Vec<MovieHandle>>;
}
