//! HTTP API server

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::analytics::AnalyticsClient;
use crate::auth::middleware::{maintenance_gate, role_gate};
use crate::config::Config;
use crate::error::Result;
use crate::maintenance::MaintenanceFlag;
use crate::store::Store;
use crate::ui;

use super::{analytics, auth, blog, careers, catalog, leads, maintenance, routes, users};

/// Application state shared across handlers
pub struct AppState {
    pub config: Config,
    pub store: Store,
    pub maintenance: MaintenanceFlag,
    pub analytics: AnalyticsClient,
}

pub type SharedState = Arc<AppState>;

/// Run the HTTP API server
pub async fn run_server(config: Config, host: &str, port: u16) -> Result<()> {
    let store = Store::open(&config.storage.data_file).await?;
    tokio::fs::create_dir_all(&config.storage.upload_dir).await?;

    let maintenance = MaintenanceFlag::new(
        &config.maintenance.marker_path,
        config.maintenance.control_key.clone(),
    );
    let analytics = AnalyticsClient::new(config.analytics.clone());

    let state = Arc::new(AppState {
        config,
        store,
        maintenance,
        analytics,
    });

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the router with all routes
pub fn create_router(state: SharedState) -> Router {
    let public_dir = state.config.server.public_dir.clone();
    let upload_dir = state.config.storage.upload_dir.clone();

    Router::new()
        // Health
        .route("/api/health", get(routes::health))
        // Auth
        .route("/api/auth", post(auth::login))
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        // Public forms and content
        .route("/api/leads", post(leads::submit))
        .route("/api/careers", post(careers::apply))
        .route("/api/courses", get(catalog::list_public_courses))
        .route("/api/courses/{slug}", get(catalog::get_public_course))
        .route("/api/blog", get(blog::list_public_posts))
        .route("/api/blog/{slug}", get(blog::get_public_post))
        // Maintenance control
        .route(
            "/api/maintenance",
            get(maintenance::status).post(maintenance::control),
        )
        // Admin API
        .route("/api/admin/leads", get(leads::list))
        .route("/api/admin/leads/{id}/status", put(leads::update_status))
        .route("/api/admin/leads/{id}", delete(leads::remove))
        .route("/api/admin/careers", get(careers::list))
        .route("/api/admin/careers/{id}/status", put(careers::update_status))
        .route(
            "/api/admin/courses",
            get(catalog::list_all_courses).post(catalog::create_course),
        )
        .route(
            "/api/admin/courses/{id}",
            put(catalog::update_course).delete(catalog::delete_course),
        )
        .route("/api/admin/courses/{id}/modules", get(catalog::list_modules))
        .route("/api/admin/modules", post(catalog::create_module))
        .route("/api/admin/modules/{id}", delete(catalog::delete_module))
        .route("/api/admin/modules/{id}/content", get(catalog::list_content))
        .route("/api/admin/content", post(catalog::create_content))
        .route(
            "/api/admin/content/{id}",
            put(catalog::update_content).delete(catalog::delete_content),
        )
        .route(
            "/api/admin/blog",
            get(blog::list_all_posts).post(blog::create_post),
        )
        .route(
            "/api/admin/blog/{id}",
            put(blog::update_post).delete(blog::delete_post),
        )
        .route("/api/admin/users", get(users::list))
        // Student API
        .route("/api/student/courses", get(catalog::list_public_courses))
        // Super-admin API
        .route("/api/super-admin/users", post(users::create))
        .route("/api/super-admin/users/{id}/role", put(users::set_role))
        .route("/api/super-admin/users/{id}/active", put(users::set_active))
        // Analytics call-through
        .route("/api/analytics/{report}", get(analytics::report))
        // Pages
        .route("/", get(ui::home))
        .route("/login", get(ui::login_page))
        .route("/admin", get(ui::admin_dashboard))
        .route("/super-admin", get(ui::super_admin_dashboard))
        .route("/student", get(ui::student_dashboard))
        // Uploaded resumes, behind the admin gate
        .nest_service("/api/admin/uploads", ServeDir::new(upload_dir))
        // Static public assets
        .nest_service("/assets", ServeDir::new(public_dir))
        // Middleware: maintenance outermost, then the role gate
        .layer(middleware::from_fn_with_state(state.clone(), role_gate))
        .layer(middleware::from_fn_with_state(state.clone(), maintenance_gate))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
