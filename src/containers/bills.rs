//! Bills container: fetches, formats and sorts the bill list
//!
//! Constructed with its collaborators injected (store + session); holds
//! no state of its own. Store rejections propagate to the caller, which
//! renders them on the error page.

use crate::core::bill::User;
use crate::core::error::{SessionError, StoreError};
use crate::core::format::{format_date, format_status};
use crate::core::session::SessionStore;
use crate::store::BillsStore;
use crate::views;
use std::sync::Arc;

/// A bill prepared for rendering: formatted date, translated status
#[derive(Debug, Clone)]
pub struct DisplayBill {
    pub bill_type: String,
    pub name: String,
    pub date: String,
    pub amount: i64,
    pub status: &'static str,
    pub file_url: String,
}

/// Container behind the bill list page
pub struct BillsContainer {
    store: Arc<dyn BillsStore>,
    session: Arc<dyn SessionStore>,
}

impl BillsContainer {
    pub fn new(store: Arc<dyn BillsStore>, session: Arc<dyn SessionStore>) -> Self {
        Self { store, session }
    }

    /// The logged-in user, read on every navigation to the list
    pub async fn user(&self) -> Result<User, SessionError> {
        self.session.user().await
    }

    /// Fetch all bills, ready for display, most recent first
    ///
    /// A record whose date cannot be parsed is rendered with its raw
    /// date and logged; it never aborts the rest of the list. Store
    /// rejections are not swallowed here.
    pub async fn get_bills(&self) -> Result<Vec<DisplayBill>, StoreError> {
        let mut bills = self.store.list().await?;

        // Raw ISO strings compare chronologically
        bills.sort_by(|a, b| b.date.cmp(&a.date));

        let display = bills
            .into_iter()
            .map(|bill| {
                let date = match format_date(&bill.date) {
                    Ok(formatted) => formatted,
                    Err(e) => {
                        tracing::warn!(
                            bill_id = %bill.id,
                            date = %bill.date,
                            error = %e,
                            "unparsable bill date, rendering raw value"
                        );
                        bill.date.clone()
                    }
                };
                DisplayBill {
                    bill_type: bill.bill_type,
                    name: bill.name,
                    date,
                    amount: bill.amount,
                    status: format_status(bill.status),
                    file_url: bill.file_url,
                }
            })
            .collect();

        Ok(display)
    }

    /// Build the receipt preview modal for a clicked icon's file URL
    pub fn receipt_modal(&self, file_url: &str) -> String {
        views::receipt_modal(file_url)
    }
}
