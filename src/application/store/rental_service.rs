use chrono::NaiveDate;

use crate::domain::{
    CopyLent, CopyReturned, CustomerId, DomainEvent, MovieId,
    commands::{ExtendRental, RentMovie, ReturnMovie},
};

use super::dependencies::{ServiceDependencies, load_customer, load_movie, notify};
use super::errors::{Result, StoreApplicationError};
use super::views::RentalView;

/// 映画を借りる
///
/// ビジネスルール：
/// - 映画と顧客が存在すること
/// - 借りている本数が会員ランクの上限未満であること
/// - 空いているレンタル用コピーがあること
///
/// 映画 → 顧客の順でロックし、両方を保持したまま更新する。
///
/// # 戻り値
/// 貸し出したコピーと返却期限
pub async fn rent_movie(deps: &ServiceDependencies, cmd: RentMovie) -> Result<CopyLent> {
    let movie_handle = load_movie(deps, &cmd.movie_id).await?;
    let customer_handle = load_customer(deps, cmd.customer_id).await?;

    let event = {
        let mut movie = movie_handle.lock().await;
        let mut customer = customer_handle.lock().await;

        if movie.is_withdrawn() {
            return Err(StoreApplicationError::MovieNotFound);
        }

        // 1. 会員ランクの上限確認
        if !customer.can_rent_more() {
            let membership = customer.membership();
            tracing::warn!(
                customer_id = %cmd.customer_id.value(),
                current = customer.rented_movies().len(),
                "Rental limit reached"
            );
            return Err(StoreApplicationError::RentalLimitReached {
                max: membership.max_rentals(),
                tier: membership.tier(),
            });
        }

        // 2. ドメインの貸出処理（空きがなければ失敗）
        let event = movie.lend(&customer, cmd.rented_on).inspect_err(|e| {
            tracing::warn!(movie_id = cmd.movie_id.value(), "{}", e);
        })?;

        // 3. 顧客側の記録
        customer.add_rented_movie(cmd.movie_id.clone());

        tracing::info!(
            movie_id = cmd.movie_id.value(),
            customer_id = %cmd.customer_id.value(),
            due_on = %event.due_on,
            available = movie.available_rental_count(),
            "Movie rented successfully"
        );
        event
    };

    notify(deps, DomainEvent::CopyLent(event.clone())).await;
    Ok(event)
}

/// 借りた映画を返す
///
/// 返却に成功した場合だけ、顧客の借りているリストから最初の1件を取り除く。
pub async fn return_movie(deps: &ServiceDependencies, cmd: ReturnMovie) -> Result<CopyReturned> {
    let movie_handle = load_movie(deps, &cmd.movie_id).await?;
    let customer_handle = load_customer(deps, cmd.customer_id).await?;

    let event = {
        let mut movie = movie_handle.lock().await;
        let mut customer = customer_handle.lock().await;

        let event = movie
            .return_copy(cmd.customer_id, cmd.returned_on)
            .inspect_err(|e| {
                tracing::warn!(movie_id = cmd.movie_id.value(), "{}", e);
            })?;

        customer.remove_rented_movie(&cmd.movie_id);

        tracing::info!(
            movie_id = cmd.movie_id.value(),
            customer_id = %cmd.customer_id.value(),
            was_overdue = event.was_overdue,
            "Movie returned successfully"
        );
        event
    };

    notify(deps, DomainEvent::CopyReturned(event.clone())).await;
    Ok(event)
}

/// 返却期限を延長する
///
/// # 戻り値
/// 延長後の返却期限
///
/// # エラー
/// - Inventory(NotRentedByCustomer): この顧客は借りていない
/// - InvalidRentalPeriod: 延長日数が0以下
pub async fn extend_rental(deps: &ServiceDependencies, cmd: ExtendRental) -> Result<NaiveDate> {
    let movie_handle = load_movie(deps, &cmd.movie_id).await?;

    let due_on = movie_handle
        .lock()
        .await
        .extend_rental(cmd.customer_id, cmd.days)?;

    tracing::info!(
        movie_id = cmd.movie_id.value(),
        customer_id = %cmd.customer_id.value(),
        %due_on,
        "Rental period extended"
    );
    Ok(due_on)
}

/// 顧客が現在借りているコピーを一覧する
///
/// 顧客のロックを先に解放してから映画をロックする（ロック順序を守るため）。
pub async fn list_customer_rentals(
    deps: &ServiceDependencies,
    customer_id: CustomerId,
) -> Result<Vec<RentalView>> {
    let customer_handle = load_customer(deps, customer_id).await?;
    let movie_ids: Vec<MovieId> = customer_handle.lock().await.rented_movies().to_vec();

    let mut seen: Vec<MovieId> = Vec::new();
    let mut rentals = Vec::new();
    for movie_id in movie_ids {
        if seen.contains(&movie_id) {
            continue;
        }
        let Some(handle) = deps
            .movie_catalog
            .find(&movie_id)
            .await
            .map_err(StoreApplicationError::MovieCatalogError)?
        else {
            continue;
        };

        let movie = handle.lock().await;
        rentals.extend(
            movie
                .rental_copies()
                .iter()
                .filter(|copy| copy.is_held_by(customer_id))
                .filter_map(|copy| {
                    copy.current_rental().map(|record| RentalView {
                        movie_id: movie_id.clone(),
                        title: movie.title().to_string(),
                        copy_id: copy.copy_id(),
                        rented_on: record.rented_on(),
                        due_on: record.due_on(),
                    })
                }),
        );
        seen.push(movie_id);
    }

    Ok(rentals)
}
