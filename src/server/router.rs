//! Router mapping application routes to their handlers
//!
//! - GET  /                — login page
//! - POST /login           — store the user, navigate to the list
//! - GET  /bills           — bill list (error page on store rejection)
//! - GET  /bills/receipt   — receipt preview modal
//! - GET  /bills/new       — new-bill form
//! - POST /bills/new       — submit the form
//! - POST /bills/new/file  — upload a receipt file
//! - GET  /uploads/{key}   — stored receipt bytes

use crate::server::handlers::{
    AppState, bills_page, download_receipt, login, login_form, new_bill_page, receipt_modal,
    submit_bill, upload_file,
};
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(login_form))
        .route("/login", post(login))
        .route("/bills", get(bills_page))
        .route("/bills/receipt", get(receipt_modal))
        .route("/bills/new", get(new_bill_page).post(submit_bill))
        .route("/bills/new/file", post(upload_file))
        .route("/uploads/{key}", get(download_receipt))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
