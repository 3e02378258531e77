use crate::domain::{
    CustomerId, DomainEvent, InventoryError, PaymentTransaction,
    commands::{BuyMovie, RefundTransaction},
};

use super::dependencies::{ServiceDependencies, load_customer, load_movie, notify};
use super::errors::{Result, StoreApplicationError};
use super::views::{PurchaseReceipt, PurchaseView};

/// 映画を購入する
///
/// ビジネスルール：
/// - 販売用コピーが残っていること（残っていなければ課金しない）
/// - 価格は会員ランクの割引を適用した額
/// - 決済の成功が在庫操作の前提条件（失敗時は在庫も顧客も変更しない）
/// - 購入の記録で会員ランクの自動昇格を判定する
///
/// 映画 → 顧客の順でロックし、決済から在庫操作までロックを保持する。
pub async fn buy_movie(deps: &ServiceDependencies, cmd: BuyMovie) -> Result<PurchaseReceipt> {
    let movie_handle = load_movie(deps, &cmd.movie_id).await?;
    let customer_handle = load_customer(deps, cmd.customer_id).await?;

    let (transaction, payment, sold, membership_change) = {
        let mut movie = movie_handle.lock().await;
        let mut customer = customer_handle.lock().await;

        if movie.is_withdrawn() {
            return Err(StoreApplicationError::MovieNotFound);
        }

        // 1. 在庫確認
        if !movie.is_salable() {
            tracing::warn!(
                movie_id = cmd.movie_id.value(),
                "{}",
                InventoryError::NoSaleCopyAvailable
            );
            return Err(InventoryError::NoSaleCopyAvailable.into());
        }

        // 2. 割引後の価格で取引を作成
        let amount = customer.membership().discounted_price(movie.price()?);
        let mut transaction = PaymentTransaction::new(
            cmd.customer_id,
            cmd.movie_id.clone(),
            amount,
            cmd.payment_method,
        );

        // 3. 決済（失敗したらここで終了）
        deps.payment_gateway
            .execute_payment(cmd.payment_method, amount)
            .await
            .map_err(|e| {
                tracing::warn!(
                    movie_id = cmd.movie_id.value(),
                    error = %e,
                    "Payment was not completed"
                );
                StoreApplicationError::PaymentFailed(e)
            })?;
        let payment = transaction.complete_payment()?;

        // 4. 在庫操作
        let sold = movie.buy(cmd.customer_id, cmd.bought_on)?;

        // 5. 顧客側の記録（ランク昇格の判定を含む）
        let membership_change = customer.add_purchased_movie(cmd.movie_id.clone());

        tracing::info!(
            movie_id = cmd.movie_id.value(),
            customer_id = %cmd.customer_id.value(),
            transaction_id = %transaction.transaction_id(),
            %amount,
            remaining = movie.available_sale_count(),
            "Movie purchased successfully"
        );
        (transaction, payment, sold, membership_change)
    };

    // 6. 取引を台帳に記録
    deps.transaction_ledger
        .record(transaction.clone())
        .await
        .map_err(StoreApplicationError::TransactionLedgerError)?;

    notify(deps, DomainEvent::PaymentCompleted(payment)).await;
    notify(deps, DomainEvent::CopySold(sold.clone())).await;
    if let Some(change) = &membership_change {
        notify(deps, DomainEvent::MembershipChanged(change.clone())).await;
    }

    Ok(PurchaseReceipt {
        transaction,
        sold,
        membership_change,
    })
}

/// 取引を返金する
///
/// ビジネスルール：
/// - 取引の持ち主だけが返金できる
/// - 支払い済みの取引を1回だけ返金できる
/// - 返金してもコピーは在庫に戻らず、会員ランクも下がらない
pub async fn refund_transaction(
    deps: &ServiceDependencies,
    cmd: RefundTransaction,
) -> Result<PaymentTransaction> {
    let handle = deps
        .transaction_ledger
        .find(&cmd.transaction_id)
        .await
        .map_err(StoreApplicationError::TransactionLedgerError)?
        .ok_or(StoreApplicationError::TransactionNotFound)?;

    let (refunded, event) = {
        let mut transaction = handle.lock().await;

        if transaction.customer_id() != cmd.customer_id {
            return Err(StoreApplicationError::NotTransactionOwner);
        }
        transaction.ensure_refundable().inspect_err(|e| {
            tracing::warn!(transaction_id = %cmd.transaction_id, "{}", e);
        })?;

        deps.payment_gateway
            .execute_refund(transaction.method(), transaction.amount())
            .await
            .map_err(StoreApplicationError::RefundFailed)?;
        let event = transaction.complete_refund()?;

        tracing::info!(
            transaction_id = %cmd.transaction_id,
            amount = %transaction.amount(),
            "Refund processed successfully"
        );
        (transaction.clone(), event)
    };

    notify(deps, DomainEvent::RefundCompleted(event)).await;
    Ok(refunded)
}

/// 顧客の購入履歴（購入順、同じ映画の重複購入を含む）
pub async fn list_customer_purchases(
    deps: &ServiceDependencies,
    customer_id: CustomerId,
) -> Result<Vec<PurchaseView>> {
    let customer_handle = load_customer(deps, customer_id).await?;
    let movie_ids = customer_handle.lock().await.purchased_movies().to_vec();

    let mut purchases = Vec::with_capacity(movie_ids.len());
    for movie_id in movie_ids {
        let title = match deps
            .movie_catalog
            .find(&movie_id)
            .await
            .map_err(StoreApplicationError::MovieCatalogError)?
        {
            Some(handle) => Some(handle.lock().await.title().to_string()),
            None => None,
        };
        purchases.push(PurchaseView { movie_id, title });
    }

    Ok(purchases)
}

/// 顧客の取引を記録順で一覧する
pub async fn list_customer_transactions(
    deps: &ServiceDependencies,
    customer_id: CustomerId,
) -> Result<Vec<PaymentTransaction>> {
    deps.transaction_ledger
        .list_for_customer(customer_id)
        .await
        .map_err(StoreApplicationError::TransactionLedgerError)
}
