use database::{db::create_connection, services::grading::GradingPolicy};
use log::{error, info, warn};
use migration::{Migrator, MigratorTrait};
use server::{AppState, app, config::Config, error::StartupError, utils::shutdown::shutdown_signal};
use tower::ServiceBuilder;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;

    let db = create_connection(&config.database_url).await?;
    if config.run_migrations {
        Migrator::up(&db, None).await?;
        info!("Migrations applied");
    }

    let state = AppState {
        db,
        policy: GradingPolicy {
            passing_grade: config.passing_grade,
        },
    };
    let mut router = app(state);

    match &config.oidc_issuer_url {
        Some(issuer_url) => {
            let oauth2_resource_server = <OAuth2ResourceServer>::builder()
                .issuer_url(issuer_url)
                .build()
                .await
                .map_err(|err| StartupError::Auth(err.to_string()))?;
            router = router.layer(ServiceBuilder::new().layer(oauth2_resource_server.into_layer()));
        }
        None => warn!("OIDC_ISSUER_URL is not set, serving without authentication"),
    }

    let listener = tokio::net::TcpListener::bind(config.bind_address).await?;
    info!("Running axum on http://{}", config.bind_address);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}
