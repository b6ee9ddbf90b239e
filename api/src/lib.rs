use dioxus::prelude::*;
use types::{Book, ListEnvelope, User, auth::AuthUser, dashboard::DashboardOverview};

#[post("/api/current-user")]
pub async fn get_current_user() -> ServerFnResult<Option<AuthUser>> {
    match server::current_user() {
        Ok(user) => Ok(Some(user)),
        Err(_) => Ok(None),
    }
}

#[post("/api/login")]
pub async fn login(email: String) -> ServerFnResult<AuthUser> {
    Ok(server::login(&email).await?)
}

#[post("/api/users")]
pub async fn list_users(refresh: bool) -> ServerFnResult<ListEnvelope<User>> {
    Ok(server::users(refresh).await?)
}

#[post("/api/reports")]
pub async fn list_reports(refresh: bool) -> ServerFnResult<ListEnvelope<Book>> {
    Ok(server::reports(refresh).await?)
}

#[post("/api/dashboard")]
pub async fn dashboard_overview() -> ServerFnResult<DashboardOverview> {
    Ok(server::dashboard_overview())
}
