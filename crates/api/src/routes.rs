use crate::handlers;
use crate::middleware::admin_key::require_admin_key;
use crate::state::AppState;
use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};

pub fn create_api_routes(state: AppState) -> Router {
    let whitelist = Router::new()
        .route("/whitelist", get(handlers::get_whitelist))
        .route("/whitelist", post(handlers::add_domain))
        .route("/whitelist/{domain}", delete(handlers::delete_domain))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_key,
        ));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/registration/check", post(handlers::check_registration))
        .merge(whitelist)
        .with_state(state)
}
