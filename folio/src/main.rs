use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::api::{create_router, AppState};
use folio::config::Config;
use folio::field::{FieldAnimator, ParticleField};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Portfolio back end: scripted chat, particle field and portfolio content")]
struct Args {
    /// Seed for the startup particle field (overrides FIELD_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Port to listen on (overrides FOLIO_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    if let Some(seed) = args.seed {
        config.field.seed = Some(seed);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    let params = config.field.params();
    params.validate()?;

    tracing::info!(
        count = params.count,
        seed = ?config.field.seed,
        "Generating particle field..."
    );
    let field = match config.field.seed {
        Some(seed) => ParticleField::seeded(params, seed),
        None => ParticleField::from_entropy(params),
    };
    tracing::info!(
        points = field.points().len(),
        edges = field.edges().len(),
        "Particle field ready"
    );

    let animator = FieldAnimator::new(&config.field);
    let rotation = animator.subscribe();

    let state = AppState::new(config.clone(), field, rotation);

    let cancel_token = CancellationToken::new();

    tracing::info!("Starting field animator...");
    let animator_task = animator.spawn(cancel_token.child_token());

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Folio starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cancel_token))
        .await?;

    if let Err(e) = animator_task.await {
        tracing::error!("Field animator task failed: {}", e);
    }

    Ok(())
}

async fn shutdown_signal(cancel_token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, cancelling background tasks...");
    cancel_token.cancel();
}
