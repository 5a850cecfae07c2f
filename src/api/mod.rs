//! HTTP surface of the registry.

pub mod error;
pub mod handlers;
pub mod params;

use axum::extract::Request;
use axum::http::uri::{PathAndQuery, Uri};
use axum::routing::get;
use axum::Router;
use tower::util::MapRequest;
use tower_http::normalize_path::NormalizePath;
use tower_http::trace::TraceLayer;
use crate::clients::UserClient;

/// Shared handler state; cloning only clones the actor handle.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
}

/// The router behind path normalization, ready to serve.
pub type RegistryApp = NormalizePath<MapRequest<Router, fn(Request) -> Request>>;

/// Build the application service.
///
/// Paths are matched without regard to case or trailing slashes, so
/// `/API/Users/` reaches the same handler as `/api/users`. Normalization runs
/// before routing, which is why it wraps the router instead of being one of
/// its layers.
pub fn app(state: AppState) -> RegistryApp {
    let lowercase: fn(Request) -> Request = lowercase_path;
    NormalizePath::trim_trailing_slash(MapRequest::new(router(state), lowercase))
}

/// Unknown paths and unsupported methods on known paths both answer
/// 404 `{"error":"Route not found"}`.
fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::health).fallback(handlers::route_not_found),
        )
        .route(
            "/api/users",
            get(handlers::list_users)
                .post(handlers::create_user)
                .fallback(handlers::route_not_found),
        )
        .route(
            "/api/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user)
                .fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn lowercase_path(mut request: Request) -> Request {
    let uri = request.uri();
    if !uri.path().bytes().any(|b| b.is_ascii_uppercase()) {
        return request;
    }

    let mut path_and_query = uri.path().to_ascii_lowercase();
    if let Some(query) = uri.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }

    let mut parts = uri.clone().into_parts();
    parts.path_and_query = PathAndQuery::try_from(path_and_query).ok();
    if let Ok(lowered) = Uri::from_parts(parts) {
        *request.uri_mut() = lowered;
    }
    request
}
