use anyhow::Result;
use axum::Router;
use tower_http::trace::TraceLayer;
use std::sync::Arc;
use crate::account::AccountManager;
use crate::auth::Authenticator;
use crate::config::Config;
use crate::db::users::UserStore;
use crate::db::DbPool;

pub mod handlers;
pub mod router;
pub mod validators;

pub struct AppState {
    pub accounts: AccountManager,
    pub authenticator: Authenticator,
}

pub async fn serve(cfg: Config, db: DbPool) -> Result<()> {
    let bind_addr = format!("{}:{}", cfg.api.bind, cfg.api.port);

    let store = UserStore::new(db);
    let state = Arc::new(AppState {
        accounts: AccountManager::new(store.clone()),
        authenticator: Authenticator::new(
            store,
            cfg.auth.jwt_secret.clone(),
            cfg.auth.jwt_expiry_hours,
        ),
    });
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("User API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(router::routes(state))
        .layer(TraceLayer::new_for_http())
}
