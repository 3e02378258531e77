#![allow(dead_code)]

use async_trait::async_trait;
use rusty_movie_rental_ddd::adapters::memory::{CustomerDirectory, MovieCatalog, TransactionLedger};
use rusty_movie_rental_ddd::adapters::mock::NotificationService;
use rusty_movie_rental_ddd::adapters::payment::PaymentGateway;
use rusty_movie_rental_ddd::application::store::{self, ServiceDependencies};
use rusty_movie_rental_ddd::domain::commands::AddMovie;
use rusty_movie_rental_ddd::domain::{
    Customer, CustomerId, Money, MovieDetails, MovieId, PaymentMethod,
};
use rusty_movie_rental_ddd::ports::{
    self, CustomerDirectory as _, PaymentGateway as _, payment_gateway,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 決済の成否をテストから切り替えられるゲートウェイ
pub struct SwitchablePaymentGateway {
    inner: PaymentGateway,
    declined: AtomicBool,
}

impl SwitchablePaymentGateway {
    pub fn new() -> Self {
        Self {
            inner: PaymentGateway::new(),
            declined: AtomicBool::new(false),
        }
    }

    pub fn decline(&self) {
        self.declined.store(true, Ordering::SeqCst);
    }
}

#[async_trait]
impl ports::PaymentGateway for SwitchablePaymentGateway {
    async fn execute_payment(
        &self,
        method: PaymentMethod,
        amount: Money,
    ) -> payment_gateway::Result<()> {
        if self.declined.load(Ordering::SeqCst) {
            return Err("card declined".into());
        }
        self.inner.execute_payment(method, amount).await
    }

    async fn execute_refund(
        &self,
        method: PaymentMethod,
        amount: Money,
    ) -> payment_gateway::Result<()> {
        self.inner.execute_refund(method, amount).await
    }
}

/// テスト用の依存関係一式
pub struct TestContext {
    pub deps: ServiceDependencies,
    pub customer_directory: Arc<CustomerDirectory>,
    pub payment_gateway: Arc<SwitchablePaymentGateway>,
    pub notification_service: Arc<NotificationService>,
}

pub fn create_test_context() -> TestContext {
    let customer_directory = Arc::new(CustomerDirectory::new());
    let payment_gateway = Arc::new(SwitchablePaymentGateway::new());
    let notification_service = Arc::new(NotificationService::new());

    let deps = ServiceDependencies {
        movie_catalog: Arc::new(MovieCatalog::new()),
        customer_directory: customer_directory.clone(),
        transaction_ledger: Arc::new(TransactionLedger::new()),
        payment_gateway: payment_gateway.clone(),
        notification_service: notification_service.clone(),
    };

    TestContext {
        deps,
        customer_directory,
        payment_gateway,
        notification_service,
    }
}

/// 顧客を1人登録してIDを返す
pub async fn register_test_customer(ctx: &TestContext, username: &str) -> CustomerId {
    let customer_id = CustomerId::new();
    ctx.customer_directory
        .insert(Customer::new(customer_id, username))
        .await
        .expect("Failed to insert customer");
    customer_id
}

/// テスト用の映画追加コマンド
pub fn add_movie_command(code: &str, price: i64) -> AddMovie {
    AddMovie {
        movie_id: MovieId::new(code),
        details: MovieDetails {
            title: format!("Movie {}", code),
            director: "Test Director".to_string(),
            studio: "Test Studio".to_string(),
            release_date: "2000".to_string(),
            description: String::new(),
            price,
        },
    }
}

/// 価格を指定して映画を1本追加する（レンタル用・販売用10本ずつ）
pub async fn add_test_movie(ctx: &TestContext, code: &str, price: i64) -> MovieId {
    store::add_movie(&ctx.deps, add_movie_command(code, price))
        .await
        .expect("Failed to add movie")
}
