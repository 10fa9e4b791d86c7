//! Bills store client contract and implementations
//!
//! The store owns all `Bill` records and the uploaded receipt files.
//! Containers consume this contract and never touch storage directly.

pub mod in_memory;

pub use in_memory::InMemoryBillsStore;

use crate::core::bill::{Bill, BillStatus};
use crate::core::error::StoreError;
use async_trait::async_trait;
use uuid::Uuid;

/// A receipt file being uploaded alongside a draft bill
#[derive(Debug, Clone)]
pub struct NewReceipt {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
    /// Email of the submitting user
    pub email: String,
}

/// Returned by [`BillsStore::create`]: where the file now lives and the
/// key the later `update` must use to complete the bill
#[derive(Debug, Clone)]
pub struct ReceiptHandle {
    pub file_url: String,
    pub key: Uuid,
}

/// A stored receipt file, served back for the preview modal
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub file_name: String,
    pub content_type: String,
    pub data: Vec<u8>,
}

/// All fields of a bill as assembled by the new-bill form
#[derive(Debug, Clone)]
pub struct BillPayload {
    pub email: String,
    pub bill_type: String,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: u32,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub status: BillStatus,
}

/// Service trait for the bills store
///
/// Implementations provide the list/create/update operations consumed
/// by the containers. The application is agnostic to the underlying
/// storage mechanism.
#[async_trait]
pub trait BillsStore: Send + Sync {
    /// List all bills
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Store a receipt file
    ///
    /// Returns the public URL of the stored file and the key under
    /// which `update` will create the matching bill.
    async fn create(&self, receipt: NewReceipt) -> Result<ReceiptHandle, StoreError>;

    /// Create or complete the bill stored under `key`
    async fn update(&self, key: &Uuid, payload: BillPayload) -> Result<Bill, StoreError>;

    /// Fetch a stored receipt file by key
    async fn download(&self, key: &Uuid) -> Result<Option<StoredFile>, StoreError>;
}
