//! # Billed
//!
//! A small employee expense-report ("notes de frais") web application.
//!
//! An employee signs in, views the list of submitted bills sorted by
//! date (most recent first), previews a receipt in a modal, and submits
//! a new bill with a file attachment.
//!
//! ## Architecture
//!
//! - **Containers** (`Bills`, `NewBill`): the behavioral cores, plain
//!   structs with their collaborators injected at construction
//! - **Views**: pure functions rendering a data model to HTML
//! - **Store**: the `BillsStore` contract (list/create/update) with an
//!   in-memory implementation
//! - **Session**: persistent key-value store holding the logged-in user
//! - **Server**: axum router, handlers and a fluent `AppBuilder`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billed::prelude::*;
//!
//! AppBuilder::new()
//!     .with_config(AppConfig::default_config())
//!     .with_store(InMemoryBillsStore::seeded())
//!     .serve()
//!     .await?;
//! ```

pub mod config;
pub mod containers;
pub mod core;
pub mod server;
pub mod store;
pub mod views;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        bill::{Bill, BillStatus, EXPENSE_TYPES, User, UserType},
        error::{BilledError, SessionError, StoreError, ValidationError},
        routes::RoutePath,
        session::{InMemorySessionStore, SessionStore},
    };

    // === Containers ===
    pub use crate::containers::{
        BillsContainer, DisplayBill, FileChangeOutcome, NewBillContainer, NewBillForm,
        SubmitOutcome,
    };

    // === Store ===
    pub use crate::store::{
        BillPayload, BillsStore, InMemoryBillsStore, NewReceipt, ReceiptHandle, StoredFile,
    };

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::{AppBuilder, AppState, build_router};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use uuid::Uuid;
}
