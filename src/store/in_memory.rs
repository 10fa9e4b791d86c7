//! In-memory implementation of BillsStore for testing and development

use crate::core::bill::{Bill, BillStatus};
use crate::core::error::StoreError;
use crate::store::{BillPayload, BillsStore, NewReceipt, ReceiptHandle, StoredFile};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory bills store
///
/// Useful for testing and development. Uses RwLock for thread-safe access.
#[derive(Clone, Default)]
pub struct InMemoryBillsStore {
    bills: Arc<RwLock<HashMap<Uuid, Bill>>>,
    files: Arc<RwLock<HashMap<Uuid, StoredFile>>>,
}

impl InMemoryBillsStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with the four fixture bills
    pub fn seeded() -> Self {
        let store = Self::new();
        let fixtures = [
            (
                "Hôtel et logement",
                "encore",
                400,
                "2004-04-04",
                "80",
                20,
                "séminaire billed",
                "preview-facture-free-201801-pdf-1.jpg",
                BillStatus::Pending,
            ),
            (
                "Transports",
                "test1",
                100,
                "2001-01-01",
                "70",
                20,
                "",
                "billet-train-paris-lyon.jpg",
                BillStatus::Refused,
            ),
            (
                "Restaurants et bars",
                "test2",
                200,
                "2002-02-02",
                "40",
                20,
                "",
                "restaurant-invitation-client.png",
                BillStatus::Refused,
            ),
            (
                "Services en ligne",
                "test3",
                300,
                "2003-03-03",
                "60",
                20,
                "",
                "abonnement-service-en-ligne.png",
                BillStatus::Accepted,
            ),
        ];

        {
            let mut bills = store.bills.write().expect("fresh lock");
            for (bill_type, name, amount, date, vat, pct, commentary, file_name, status) in fixtures
            {
                let id = Uuid::new_v4();
                let now = Utc::now();
                bills.insert(
                    id,
                    Bill {
                        id,
                        email: "a@a".to_string(),
                        bill_type: bill_type.to_string(),
                        name: name.to_string(),
                        amount,
                        date: date.to_string(),
                        vat: vat.to_string(),
                        pct,
                        commentary: commentary.to_string(),
                        file_url: format!("/uploads/{}", id),
                        file_name: file_name.to_string(),
                        status,
                        created_at: now,
                        updated_at: now,
                    },
                );
            }
        }
        store
    }
}

fn lock_error<E: std::fmt::Display>(e: E) -> StoreError {
    tracing::error!(error = %e, "bills store lock poisoned");
    StoreError::internal()
}

#[async_trait]
impl BillsStore for InMemoryBillsStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let bills = self.bills.read().map_err(lock_error)?;
        Ok(bills.values().cloned().collect())
    }

    async fn create(&self, receipt: NewReceipt) -> Result<ReceiptHandle, StoreError> {
        let key = Uuid::new_v4();
        let file_url = format!("/uploads/{}", key);

        let mut files = self.files.write().map_err(lock_error)?;
        files.insert(
            key,
            StoredFile {
                file_name: receipt.file_name,
                content_type: receipt.content_type,
                data: receipt.data,
            },
        );

        Ok(ReceiptHandle { file_url, key })
    }

    async fn update(&self, key: &Uuid, payload: BillPayload) -> Result<Bill, StoreError> {
        let mut bills = self.bills.write().map_err(lock_error)?;

        let now = Utc::now();
        let created_at = bills.get(key).map(|b| b.created_at).unwrap_or(now);

        let bill = Bill {
            id: *key,
            email: payload.email,
            bill_type: payload.bill_type,
            name: payload.name,
            amount: payload.amount,
            date: payload.date,
            vat: payload.vat,
            pct: payload.pct,
            commentary: payload.commentary,
            file_url: payload.file_url,
            file_name: payload.file_name,
            status: payload.status,
            created_at,
            updated_at: now,
        };

        bills.insert(*key, bill.clone());

        Ok(bill)
    }

    async fn download(&self, key: &Uuid) -> Result<Option<StoredFile>, StoreError> {
        let files = self.files.read().map_err(lock_error)?;
        Ok(files.get(key).cloned())
    }
}
