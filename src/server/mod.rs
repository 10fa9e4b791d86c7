//! HTTP server: router, handlers and application builder

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::AppBuilder;
pub use handlers::AppState;
pub use router::build_router;
