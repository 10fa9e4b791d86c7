//! UI containers wiring store, session and views together
//!
//! Each container is a plain struct with its collaborators injected at
//! construction. The HTTP layer owns one instance of each and calls
//! into them from its handlers.

pub mod bills;
pub mod new_bill;

pub use bills::{BillsContainer, DisplayBill};
pub use new_bill::{
    FileChangeOutcome, NewBillContainer, NewBillForm, StoredReceipt, SubmitOutcome,
};
