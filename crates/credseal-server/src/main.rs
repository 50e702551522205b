//! Certificate Server Binary
//!
//! Runs the credseal HTTP server for certificate issuance and
//! verification.

use std::env;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use credseal_server::{
    create_router, AppState, CertificateStore, IssuanceService, MemoryStore, RevocationService,
    ServiceConfig, VerificationService,
};

#[tokio::main]
async fn main() {
    // Initialize logging
    let log_level = env::var("CREDSEAL_LOG_LEVEL")
        .unwrap_or_else(|_| "info".into())
        .parse()
        .unwrap_or(Level::INFO);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    // Configuration
    let port: u16 = env::var("CREDSEAL_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()
        .expect("CREDSEAL_PORT must be a valid port number");

    let public_base_url =
        env::var("CREDSEAL_BASE_URL").unwrap_or_else(|_| format!("http://localhost:{}", port));

    let admin_token = env::var("CREDSEAL_ADMIN_TOKEN").ok();
    if admin_token.is_none() {
        info!("CREDSEAL_ADMIN_TOKEN not set, revocation administration is disabled");
    }

    // Key material is loaded once; bad configuration halts startup
    let sealer = Arc::new(credseal_server::load_sealer().expect("Failed to load issuer key material"));

    // Storage backend
    let store = build_store().await;

    let config = ServiceConfig {
        public_base_url: public_base_url.clone(),
    };

    info!(
        scheme = %sealer.scheme().as_str(),
        base_url = %public_base_url,
        port = port,
        "Starting certificate server"
    );

    // Create application state
    let state = Arc::new(AppState {
        issuance: IssuanceService::new(sealer.clone(), store.clone(), config),
        verification: VerificationService::new(sealer.clone(), store.clone()),
        revocation: RevocationService::new(store.clone()),
        sealer,
        store,
        admin_token,
    });

    // Build router
    let app = create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    info!(addr = %addr, "Certificate server listening");

    axum::serve(listener, app).await.expect("Server error");
}

#[cfg(feature = "postgres")]
async fn build_store() -> Arc<dyn CertificateStore> {
    match env::var("CREDSEAL_DATABASE_URL") {
        Ok(url) => {
            let store = credseal_server::PostgresStore::new(&url)
                .await
                .expect("Failed to connect to PostgreSQL");
            Arc::new(store)
        }
        Err(_) => {
            info!("CREDSEAL_DATABASE_URL not set, using in-memory store");
            Arc::new(MemoryStore::new())
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn build_store() -> Arc<dyn CertificateStore> {
    Arc::new(MemoryStore::new())
}
