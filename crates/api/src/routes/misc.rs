use axum::routing::get;
use axum::Router;

use crate::global_state::GlobalState;

pub fn misc_routes() -> Router<GlobalState> {
    Router::new()
        .route("/health",
            get(|| async { "OK" })
        )
}
