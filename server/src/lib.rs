mod auth;
mod cache;
mod config;
mod faker;

use std::sync::OnceLock;
use std::time::Duration;

use axum::{Router, routing::get};
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;
use types::{
    Book, ListEnvelope, Result, User, auth::AuthUser, dashboard::DashboardOverview, err, mock,
};

use crate::cache::RecordCache;
use crate::config::Config;
use crate::faker::FakerClient;

struct AppState {
    config: Config,
    client: FakerClient,
    users: RecordCache<ListEnvelope<User>>,
    books: RecordCache<ListEnvelope<Book>>,
}

static STATE: OnceLock<AppState> = OnceLock::new();

fn state() -> Result<&'static AppState> {
    STATE
        .get()
        .ok_or_else(|| err!("server state used before `server::init`"))
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load configuration and build the process-wide state.
///
/// Returns extra routes to merge next to the Dioxus app.
pub async fn init() -> Result<Router> {
    let config = Config::load()?;
    let ttl = Duration::from_secs(config.cache_ttl_secs);

    tracing::info!(
        api_base_url = %config.api_base_url,
        cache_ttl_secs = config.cache_ttl_secs,
        "starting dashboard server"
    );

    let state = AppState {
        client: FakerClient::from_config(&config),
        users: RecordCache::new(ttl),
        books: RecordCache::new(ttl),
        config,
    };

    if STATE.set(state).is_err() {
        tracing::warn!("server state already initialised, keeping the first");
    }

    Ok(Router::new().route("/healthz", get(|| async { "ok" })))
}

/// Users from the upstream API, served from cache unless `refresh` is set.
pub async fn users(refresh: bool) -> Result<ListEnvelope<User>> {
    let state = state()?;
    let quantity = state.config.users_quantity;

    let envelope = state
        .users
        .get_or_fetch(refresh, || async {
            tracing::info!(quantity, "fetching users");
            state.client.list_users(quantity).await
        })
        .await
        .inspect_err(|error| tracing::error!(?error, "user fetch failed"))?;

    Ok(envelope)
}

/// Books from the upstream API, shown on the reports page.
pub async fn reports(refresh: bool) -> Result<ListEnvelope<Book>> {
    let state = state()?;
    let quantity = state.config.reports_quantity;

    let envelope = state
        .books
        .get_or_fetch(refresh, || async {
            tracing::info!(quantity, "fetching books");
            state.client.list_books(quantity).await
        })
        .await
        .inspect_err(|error| tracing::error!(?error, "book fetch failed"))?;

    Ok(envelope)
}

pub fn dashboard_overview() -> DashboardOverview {
    DashboardOverview {
        stats: mock::dashboard_stats(),
        recent_activity: mock::recent_activity(jiff::Timestamp::now()),
    }
}

pub fn current_user() -> Result<AuthUser> {
    Ok(auth::current_user(&state()?.config))
}

pub async fn login(email: &str) -> Result<AuthUser> {
    let user = auth::login(&state()?.config, email)
        .await
        .wrap_err("sign-in failed")?;

    Ok(user)
}
