use crate::domain::{CopyId, MovieId, MovieRecord, commands::AddMovie};
use futures::future::join_all;

use super::dependencies::{ServiceDependencies, load_movie};
use super::errors::{Result, StoreApplicationError};
use super::views::{MovieDetailView, MovieSummary};

/// 映画をカタログに追加する
///
/// 標準の在庫方針（レンタル用10本・販売用10本）で作成する。
///
/// # エラー
/// - InvalidPrice: 価格が負、または上限を超える
/// - MovieAlreadyExists: 同じIDの映画が既にある
pub async fn add_movie(deps: &ServiceDependencies, cmd: AddMovie) -> Result<MovieId> {
    cmd.details.validate_price().inspect_err(|e| {
        tracing::warn!(movie_id = cmd.movie_id.value(), "{}", e);
    })?;

    let movie = MovieRecord::new(cmd.movie_id.clone(), cmd.details);

    let inserted = deps
        .movie_catalog
        .insert(movie)
        .await
        .map_err(StoreApplicationError::MovieCatalogError)?;

    if !inserted {
        return Err(StoreApplicationError::MovieAlreadyExists);
    }

    tracing::info!(movie_id = cmd.movie_id.value(), "Movie added successfully");
    Ok(cmd.movie_id)
}

/// 映画をカタログから削除する
///
/// 貸出中のコピーが残っている間は削除できない（顧客が返却できなくなるため）。
/// 映画のロックを保持したまま取り下げの印を付けてから削除するので、
/// 削除前にハンドルを取得していた貸出・購入も失敗する。
///
/// # エラー
/// - MovieNotFound: 映画が存在しない
/// - Inventory(CopiesStillRented): 貸出中のコピーがある
pub async fn remove_movie(deps: &ServiceDependencies, movie_id: &MovieId) -> Result<()> {
    let handle = load_movie(deps, movie_id).await?;
    let mut movie = handle.lock().await;

    movie.withdraw().inspect_err(|e| {
        tracing::warn!(movie_id = movie_id.value(), "{}", e);
    })?;

    let removed = deps
        .movie_catalog
        .remove(movie_id)
        .await
        .map_err(StoreApplicationError::MovieCatalogError)?;

    if !removed {
        return Err(StoreApplicationError::MovieNotFound);
    }

    tracing::info!(movie_id = movie_id.value(), "Movie removed from catalog");
    Ok(())
}

/// カタログの全映画を追加順で一覧する
pub async fn list_movies(deps: &ServiceDependencies) -> Result<Vec<MovieSummary>> {
    let handles = deps
        .movie_catalog
        .list()
        .await
        .map_err(StoreApplicationError::MovieCatalogError)?;

    let summaries = join_all(handles.iter().map(|handle| async move {
        let movie = handle.lock().await;
        MovieSummary::from_record(&movie)
    }))
    .await;

    Ok(summaries)
}

/// 映画の詳細とレビューを取得する
pub async fn movie_details(
    deps: &ServiceDependencies,
    movie_id: &MovieId,
) -> Result<MovieDetailView> {
    let handle = load_movie(deps, movie_id).await?;
    let movie = handle.lock().await;
    Ok(MovieDetailView::from_record(&movie))
}

/// レンタル用コピーを1本追加する
pub async fn add_rental_copy(deps: &ServiceDependencies, movie_id: &MovieId) -> Result<CopyId> {
    let handle = load_movie(deps, movie_id).await?;
    let copy_id = handle.lock().await.add_rental_copy();

    tracing::info!(
        movie_id = movie_id.value(),
        copy_id = %copy_id.value(),
        "Rental copy added successfully"
    );
    Ok(copy_id)
}

/// 販売用コピーを1本追加する
pub async fn add_sale_copy(deps: &ServiceDependencies, movie_id: &MovieId) -> Result<CopyId> {
    let handle = load_movie(deps, movie_id).await?;
    let copy_id = handle.lock().await.add_sale_copy();

    tracing::info!(
        movie_id = movie_id.value(),
        copy_id = %copy_id.value(),
        "Sale copy added successfully"
    );
    Ok(copy_id)
}
