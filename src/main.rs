use rusty_movie_rental_ddd::{
    adapters::memory::{
        customer_directory::CustomerDirectory as InMemoryCustomerDirectory,
        movie_catalog::MovieCatalog as InMemoryMovieCatalog,
        transaction_ledger::TransactionLedger as InMemoryTransactionLedger,
    },
    adapters::mock::notification_service::NotificationService as MockNotificationService,
    adapters::payment::gateway::PaymentGateway,
    api::{handlers::AppState, router::create_router},
    application::{auth::AuthService, store::ServiceDependencies},
    config::AppConfig,
    seed,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_movie_rental_ddd=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(?config, "Loaded configuration");

    // Initialize adapters
    let movie_catalog = Arc::new(InMemoryMovieCatalog::new());
    let customer_directory = Arc::new(InMemoryCustomerDirectory::new());
    let transaction_ledger = Arc::new(InMemoryTransactionLedger::new());
    let payment_gateway = Arc::new(PaymentGateway::new());
    let notification_service = Arc::new(MockNotificationService::new());

    // Create service dependencies
    let service_deps = ServiceDependencies {
        movie_catalog,
        customer_directory: customer_directory.clone(),
        transaction_ledger,
        payment_gateway,
        notification_service,
    };
    let auth_service = Arc::new(AuthService::new(customer_directory));

    if config.seed_catalog {
        match seed::load_catalog(&service_deps).await {
            Ok(count) => tracing::info!(count, "Predefined movies loaded"),
            Err(e) => tracing::error!("Failed to load predefined movies: {}", e),
        }
        match seed::load_admins(&auth_service).await {
            Ok(count) => tracing::info!(count, "Predefined administrators registered"),
            Err(e) => tracing::error!("Failed to register predefined administrators: {}", e),
        }
    }

    // Create application state
    let app_state = Arc::new(AppState {
        service_deps,
        auth_service,
    });

    // Create router
    let app = create_router(app_state);

    let addr = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
