//! Core module containing the domain model and fundamental types

pub mod bill;
pub mod error;
pub mod format;
pub mod routes;
pub mod session;
pub mod validation;

pub use bill::{Bill, BillStatus, EXPENSE_TYPES, User, UserType};
pub use error::{BilledError, SessionError, StoreError, ValidationError};
pub use routes::RoutePath;
pub use session::{InMemorySessionStore, SessionStore, USER_KEY};
