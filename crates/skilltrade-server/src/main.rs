#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod api;

use api::{match_requests::*, matches::*, skills::*, users::*};
use axum::{
    http::{header, Method},
    routing::{get, post, put},
    Router,
};
use skilltrade_core::{paths, AppCore};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

#[derive(serde::Serialize)]
struct Health {
    status: String,
}

async fn health() -> axum::Json<Health> {
    axum::Json(Health {
        status: "skilltrade is working!".to_string(),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing logger
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,skilltrade_server=debug".into()),
        )
        .with_target(false)
        .with_thread_ids(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Skilltrade backend server");

    let db_path =
        paths::ensure_database_path_string().expect("Failed to determine Skilltrade database path");
    let core = Arc::new(
        AppCore::new(&db_path)
            .await
            .expect("Failed to initialize app core"),
    );

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::HeaderName::from_static(api::auth::USER_ID_HEADER),
        ]);

    let shared_state = core.clone();

    let app = Router::new()
        .route("/health", get(health))
        // User plumbing (RESTful)
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user))
        // The caller's skill declarations
        .route("/api/skills", get(list_my_skills).post(add_skill))
        .route("/api/skills/{id}", put(update_skill).delete(delete_skill))
        // Compatibility matches
        .route("/api/matches", get(get_matches))
        // Match request lifecycle
        .route("/api/match-requests", post(send_match_request))
        .route("/api/match-requests/incoming", get(incoming_requests))
        .route("/api/match-requests/sent", get(sent_requests))
        .route("/api/match-requests/{id}", put(respond_to_request))
        .layer(cors)
        .with_state(shared_state);

    let addr = std::env::var("SKILLTRADE_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("Skilltrade running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
