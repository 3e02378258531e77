use crate::domain::Money;

/// FPS（Fast Payment System）決済処理
#[derive(Debug, Clone, Copy, Default)]
pub struct FpsProcessor;

impl FpsProcessor {
    pub fn execute_payment(&self, amount: Money) {
        tracing::info!("Processing FPS (Fast Payment System) payment: {}", amount);
    }

    pub fn execute_refund(&self, amount: Money) {
        tracing::info!("Processing FPS (Fast Payment System) refund: {}", amount);
    }
}
