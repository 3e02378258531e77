use crate::domain::{Money, PaymentMethod};
use crate::ports::payment_gateway::{PaymentGateway as PaymentGatewayTrait, Result};
use async_trait::async_trait;

use super::{CreditCardProcessor, FpsProcessor};

/// 支払い方法ごとの処理系へ振り分ける決済ゲートウェイ
///
/// どちらの処理系も失敗しないため、常に成功を返す。
#[derive(Debug, Clone, Default)]
pub struct PaymentGateway {
    credit_card: CreditCardProcessor,
    fps: FpsProcessor,
}

impl PaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentGatewayTrait for PaymentGateway {
    async fn execute_payment(&self, method: PaymentMethod, amount: Money) -> Result<()> {
        match method {
            PaymentMethod::CreditCard => self.credit_card.execute_payment(amount),
            PaymentMethod::Fps => self.fps.execute_payment(amount),
        }
        Ok(())
    }

    async fn execute_refund(&self, method: PaymentMethod, amount: Money) -> Result<()> {
        match method {
            PaymentMethod::CreditCard => self.credit_card.execute_refund(amount),
            PaymentMethod::Fps => self.fps.execute_refund(amount),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gateway_accepts_both_methods() {
        let gateway = PaymentGateway::new();
        let amount = Money::from_cents(1350);

        assert!(
            gateway
                .execute_payment(PaymentMethod::CreditCard, amount)
                .await
                .is_ok()
        );
        assert!(
            gateway
                .execute_refund(PaymentMethod::Fps, amount)
                .await
                .is_ok()
        );
    }
}
