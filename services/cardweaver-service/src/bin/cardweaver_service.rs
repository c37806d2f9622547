use anyhow::Result;
use axum::Router;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use cardweaver_api::{card_routes, misc_routes, setup_tracing, ApiServerEnv, GlobalState};
use cardweaver_cards::seed_cards_if_empty;
use cardweaver_common::EnvVars;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    setup_tracing();

    let cors = CorsLayer::very_permissive();
    let trace = TraceLayer::new_for_http();

    let env = ApiServerEnv::load();
    let global_state = GlobalState::new().await?;

    // One-shot seed of the example cards, delayed so the backing store can
    // finish initializing. Failure is non-fatal to startup.
    let seed_delay: u64 = env.seed_delay_secs.parse().unwrap_or(2);
    let seed_pool = global_state.db.pool();
    tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_secs(seed_delay)).await;
        match seed_cards_if_empty(seed_pool).await {
            Ok(true) => tracing::info!("Seeding complete."),
            Ok(false) => {}
            Err(e) => tracing::warn!("Error seeding database: {:?}", e),
        }
    });

    let app = Router::new()
        .merge(card_routes())
        .merge(misc_routes())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(3600)))
        .layer(cors)
        .layer(trace)
        .with_state(global_state);

    let port: u16 = env.port
        .parse()
        .expect("failed to convert to number");

    let listener = tokio::net::TcpListener::bind(format!(":::{port}"))
        .await
        .unwrap();

    tracing::info!("LISTENING ON {port}");
    axum::serve(listener, app.into_make_service()).await.unwrap();
    Ok(())
}
