use crate::domain::Money;

/// クレジットカード決済処理
///
/// 外部の決済網には接続せず、処理内容をログに出すだけ。
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardProcessor;

impl CreditCardProcessor {
    pub fn execute_payment(&self, amount: Money) {
        tracing::info!("Processing credit card payment: {}", amount);
    }

    pub fn execute_refund(&self, amount: Money) {
        tracing::info!("Processing credit card refund: {}", amount);
    }
}
