use crate::domain::{CustomerId, DomainEvent, MembershipChanged, commands::ChangeMembership};

use super::dependencies::{ServiceDependencies, load_customer, notify};
use super::errors::Result;
use super::views::MembershipView;

/// 顧客の会員情報を取得する
pub async fn membership_status(
    deps: &ServiceDependencies,
    customer_id: CustomerId,
) -> Result<MembershipView> {
    let handle = load_customer(deps, customer_id).await?;
    let customer = handle.lock().await;
    let tier = customer.tier();

    Ok(MembershipView {
        tier,
        max_rentals: tier.max_rentals(),
        rental_days: tier.rental_days(),
        discount_percent: tier.discount_percent(),
        rented_count: customer.rented_movies().len(),
        purchased_count: customer.purchased_movies().len(),
    })
}

/// 会員ランクを直接変更する（管理者による変更）
///
/// 以後の自動昇格は変更後のランクの規則から再開する。
pub async fn change_membership(
    deps: &ServiceDependencies,
    cmd: ChangeMembership,
) -> Result<MembershipChanged> {
    let handle = load_customer(deps, cmd.customer_id).await?;
    let change = handle.lock().await.set_membership(cmd.tier);

    notify(deps, DomainEvent::MembershipChanged(change.clone())).await;
    Ok(change)
}
