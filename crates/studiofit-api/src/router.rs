//! Route definitions for the StudioFit HTTP API.
//!
//! Resource routes are mounted under `/api`; the auth surface, landing,
//! and health endpoints sit at the root. Every route's access rule lives
//! in the static policy table — handlers call the shared decision
//! procedure instead of carrying their own checks.

use axum::{
    Router, middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(trainee_routes())
        .merge(workout_routes())
        .merge(measurement_routes())
        .merge(profile_routes());

    Router::new()
        .merge(public_routes())
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::identity::extract_identity,
        ))
        .with_state(state)
}

/// Landing, health, and the auth surface.
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::landing))
        .route("/home", get(handlers::health::landing))
        .route("/health", get(handlers::health::health))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", get(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Profile self-service.
fn profile_routes() -> Router<AppState> {
    Router::new().route(
        "/profile/password",
        put(handlers::profile::change_password),
    )
}

/// Trainee records.
fn trainee_routes() -> Router<AppState> {
    Router::new()
        .route("/trainees", get(handlers::trainee::list_trainees))
        .route("/trainees/{id}", get(handlers::trainee::get_trainee))
}

/// Workout plans.
fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/workouts", post(handlers::workout::create_workout))
        .route("/workouts", get(handlers::workout::list_workouts))
        .route("/workouts/{id}", get(handlers::workout::get_workout))
        .route("/workouts/{id}", put(handlers::workout::update_workout))
        .route("/workouts/{id}", delete(handlers::workout::delete_workout))
}

/// Body measurements.
fn measurement_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/measurements",
            post(handlers::measurement::create_measurement),
        )
        .route(
            "/measurements/trainee/{trainee_id}",
            get(handlers::measurement::list_for_trainee),
        )
        .route(
            "/measurements/history/{trainee_id}",
            get(handlers::measurement::history_for_trainee),
        )
        .route(
            "/measurements/{id}",
            get(handlers::measurement::get_measurement),
        )
        .route(
            "/measurements/{id}",
            put(handlers::measurement::update_measurement),
        )
        .route(
            "/measurements/{id}",
            delete(handlers::measurement::delete_measurement),
        )
}
