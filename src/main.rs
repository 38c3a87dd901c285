use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use sangbad_core::application::{
    ports::{identity::IdentityResolver, time::Clock},
    services::ApplicationServices,
};
use sangbad_core::config::AppConfig;
use sangbad_core::domain::{
    article::{ArticleReadRepository, ArticleViewCounter, ArticleWriteRepository},
    taxonomy::{CategoryRepository, TagRepository},
    user::UserRepository,
};
use sangbad_core::infrastructure::{
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCategoryRepository,
        PostgresTagRepository, PostgresUserRepository,
    },
    security::HmacIdentityResolver,
    time::SystemClock,
};
use sangbad_core::presentation::http::{routes::build_router, state::HttpState};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write = PostgresArticleWriteRepository::new(pool.clone());
    let article_write_repo: Arc<dyn ArticleWriteRepository> = Arc::new(article_write.clone());
    let view_counter: Arc<dyn ArticleViewCounter> = Arc::new(article_write);
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(PostgresCategoryRepository::new(pool.clone()));
    let tag_repo: Arc<dyn TagRepository> = Arc::new(PostgresTagRepository::new(pool.clone()));
    let user_repo: Arc<dyn UserRepository> = Arc::new(PostgresUserRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let identity: Arc<dyn IdentityResolver> = Arc::new(
        HmacIdentityResolver::new(config.identity_hmac_secret(), Arc::clone(&clock))
            .map_err(|err| anyhow::anyhow!("identity resolver setup failed: {err}"))?,
    );

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        view_counter,
        category_repo,
        tag_repo,
        user_repo,
        identity,
        clock,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
