//! NewBill container: receipt upload, form validation and submission
//!
//! The container keeps the handle of the last accepted receipt between
//! the upload and the submit. There is deliberately no guard against a
//! second submit racing a pending one; the original design leaves that
//! race open and this implementation reproduces it (see DESIGN.md).

use crate::core::bill::{BillStatus, EXPENSE_TYPES};
use crate::core::error::{BilledError, ValidationError};
use crate::core::routes::RoutePath;
use crate::core::session::SessionStore;
use crate::core::validation::{date_format, extension_in, in_list, positive, required};
use crate::store::{BillPayload, BillsStore, NewReceipt};
use serde::Deserialize;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Default `pct` applied when the field is absent or unparsable
const DEFAULT_PCT: u32 = 20;

/// Raw values posted by the new-bill form
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBillForm {
    #[serde(default)]
    pub expense_type: String,
    #[serde(default)]
    pub expense_name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub vat: String,
    #[serde(default)]
    pub pct: String,
    #[serde(default)]
    pub commentary: String,
}

/// Receipt accepted by `handle_change_file`, pending until submit
#[derive(Debug, Clone)]
pub struct StoredReceipt {
    pub file_url: String,
    pub file_name: String,
    pub key: Uuid,
}

/// Result of a file-change event
#[derive(Debug, Clone)]
pub enum FileChangeOutcome {
    /// The file was uploaded and its handle retained for submit
    Accepted(StoredReceipt),

    /// The extension is not allowed; input cleared, nothing uploaded
    Rejected { reason: String },
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Submission accepted, navigate to the given route
    Navigate(RoutePath),

    /// Submission rejected by the store; error logged, stay on the form
    Stay,
}

/// Container behind the new-bill form
pub struct NewBillContainer {
    store: Arc<dyn BillsStore>,
    session: Arc<dyn SessionStore>,
    allowed_extensions: Vec<String>,
    attachment: RwLock<Option<StoredReceipt>>,
}

impl NewBillContainer {
    pub fn new(
        store: Arc<dyn BillsStore>,
        session: Arc<dyn SessionStore>,
        allowed_extensions: Vec<String>,
    ) -> Self {
        Self {
            store,
            session,
            allowed_extensions,
            attachment: RwLock::new(None),
        }
    }

    /// The receipt currently pending for the next submit, if any
    pub fn attachment(&self) -> Option<StoredReceipt> {
        self.attachment.read().ok().and_then(|a| a.clone())
    }

    fn set_attachment(&self, value: Option<StoredReceipt>) {
        if let Ok(mut attachment) = self.attachment.write() {
            *attachment = value;
        }
    }

    /// React to a file selection
    ///
    /// An extension outside the allow-list is rejected synchronously,
    /// without any store call. A valid file is uploaded right away and
    /// its handle kept for the later submit. An upload failure is
    /// logged and propagated.
    pub async fn handle_change_file(
        &self,
        file_name: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> Result<FileChangeOutcome, BilledError> {
        let validate = extension_in(self.allowed_extensions.clone());
        if let Err(reason) = validate("file", file_name) {
            self.set_attachment(None);
            return Ok(FileChangeOutcome::Rejected { reason });
        }

        let user = self.session.user().await?;

        let handle = self
            .store
            .create(NewReceipt {
                file_name: file_name.to_string(),
                content_type: content_type.to_string(),
                data,
                email: user.email,
            })
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, file_name, "receipt upload failed");
            })?;

        let stored = StoredReceipt {
            file_url: handle.file_url,
            file_name: file_name.to_string(),
            key: handle.key,
        };
        self.set_attachment(Some(stored.clone()));

        Ok(FileChangeOutcome::Accepted(stored))
    }

    /// Validate the raw form values
    ///
    /// Returns the first failing field. Validation never reaches the
    /// store and never leaves the component as a page-level error.
    fn validate(&self, form: &NewBillForm) -> Result<(), ValidationError> {
        let checks: [(&str, &str, Box<dyn Fn(&str, &str) -> Result<(), String>>); 6] = [
            ("expense-type", &form.expense_type, Box::new(required())),
            (
                "expense-type",
                &form.expense_type,
                Box::new(in_list(
                    EXPENSE_TYPES.iter().map(|t| t.to_string()).collect(),
                )),
            ),
            ("expense-name", &form.expense_name, Box::new(required())),
            ("datepicker", &form.date, Box::new(date_format("%Y-%m-%d"))),
            ("amount", &form.amount, Box::new(required())),
            ("amount", &form.amount, Box::new(positive())),
        ];

        for (field, value, check) in checks {
            check(field, value).map_err(|message| ValidationError::FieldError {
                field: field.to_string(),
                message,
            })?;
        }

        form.amount
            .parse::<i64>()
            .map_err(|_| ValidationError::FieldError {
                field: "amount".to_string(),
                message: format!(
                    "Le champ 'amount' doit être un nombre entier (valeur: {})",
                    form.amount
                ),
            })?;

        Ok(())
    }

    /// Submit the form
    ///
    /// Assembles the bill (status forced to pending, email taken from
    /// the session user, pct defaulting to 20) and sends it to the
    /// store. On success the caller is told to navigate to the bill
    /// list; on store rejection the error is logged and swallowed, and
    /// the caller stays on the page.
    pub async fn handle_submit(&self, form: NewBillForm) -> Result<SubmitOutcome, BilledError> {
        self.validate(&form)?;

        let user = self.session.user().await?;

        let attachment = self.attachment();
        let (key, file_url, file_name) = match &attachment {
            Some(receipt) => (receipt.key, receipt.file_url.clone(), receipt.file_name.clone()),
            None => (Uuid::new_v4(), String::new(), String::new()),
        };

        let payload = BillPayload {
            email: user.email,
            bill_type: form.expense_type,
            name: form.expense_name,
            amount: form.amount.parse().unwrap_or(0),
            date: form.date,
            vat: form.vat,
            pct: form.pct.parse().unwrap_or(DEFAULT_PCT),
            commentary: form.commentary,
            file_url,
            file_name,
            status: BillStatus::Pending,
        };

        match self.store.update(&key, payload).await {
            Ok(_) => {
                self.set_attachment(None);
                Ok(SubmitOutcome::Navigate(RoutePath::Bills))
            }
            Err(e) => {
                // Log-and-no-user-facing-recovery policy: the rejection
                // is reported on the diagnostic channel only.
                tracing::error!(error = ?e, "bill update rejected");
                Ok(SubmitOutcome::Stay)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bill::{Bill, User, UserType};
    use crate::core::error::StoreError;
    use crate::core::session::InMemorySessionStore;
    use crate::store::{ReceiptHandle, StoredFile};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store double counting calls and capturing the last update
    #[derive(Default)]
    struct RecordingStore {
        create_calls: AtomicUsize,
        updates: Mutex<Vec<(Uuid, BillPayload)>>,
        reject_update: Option<StoreError>,
    }

    #[async_trait]
    impl BillsStore for RecordingStore {
        async fn list(&self) -> Result<Vec<Bill>, StoreError> {
            Ok(vec![])
        }

        async fn create(&self, receipt: NewReceipt) -> Result<ReceiptHandle, StoreError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let key = Uuid::new_v4();
            assert!(!receipt.email.is_empty());
            Ok(ReceiptHandle {
                file_url: format!("/uploads/{}", key),
                key,
            })
        }

        async fn update(&self, key: &Uuid, payload: BillPayload) -> Result<Bill, StoreError> {
            if let Some(e) = &self.reject_update {
                return Err(e.clone());
            }
            self.updates.lock().unwrap().push((*key, payload.clone()));
            let now = Utc::now();
            Ok(Bill {
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
                created_at: now,
                updated_at: now,
            })
        }

        async fn download(&self, _key: &Uuid) -> Result<Option<StoredFile>, StoreError> {
            Ok(None)
        }
    }

    async fn logged_in_session() -> Arc<InMemorySessionStore> {
        let session = Arc::new(InMemorySessionStore::new());
        session
            .set_user(&User {
                user_type: UserType::Employee,
                email: "employee@test.tld".to_string(),
            })
            .await
            .unwrap();
        session
    }

    fn allowed() -> Vec<String> {
        vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
    }

    fn valid_form() -> NewBillForm {
        NewBillForm {
            expense_type: "Hôtel et logement".to_string(),
            expense_name: "encore".to_string(),
            date: "2004-04-04".to_string(),
            amount: "400".to_string(),
            vat: "80".to_string(),
            pct: "20".to_string(),
            commentary: "séminaire billed".to_string(),
        }
    }

    #[tokio::test]
    async fn test_invalid_extension_rejected_without_store_call() {
        let store = Arc::new(RecordingStore::default());
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        let outcome = container
            .handle_change_file("facture.pdf", "application/pdf", vec![1])
            .await
            .unwrap();

        assert!(matches!(outcome, FileChangeOutcome::Rejected { .. }));
        assert_eq!(store.create_calls.load(Ordering::SeqCst), 0);
        assert!(container.attachment().is_none());
    }

    #[tokio::test]
    async fn test_valid_file_uploaded_and_retained() {
        let store = Arc::new(RecordingStore::default());
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        let outcome = container
            .handle_change_file("facture.jpg", "image/jpeg", vec![1, 2])
            .await
            .unwrap();

        let FileChangeOutcome::Accepted(receipt) = outcome else {
            panic!("expected acceptance");
        };
        assert_eq!(receipt.file_name, "facture.jpg");
        assert_eq!(store.create_calls.load(Ordering::SeqCst), 1);

        let pending = container.attachment().unwrap();
        assert_eq!(pending.key, receipt.key);
    }

    #[tokio::test]
    async fn test_new_selection_replaces_previous_attachment() {
        let store = Arc::new(RecordingStore::default());
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        container
            .handle_change_file("un.png", "image/png", vec![1])
            .await
            .unwrap();
        let first = container.attachment().unwrap();

        container
            .handle_change_file("deux.png", "image/png", vec![2])
            .await
            .unwrap();
        let second = container.attachment().unwrap();

        assert_ne!(first.key, second.key);
        assert_eq!(second.file_name, "deux.png");

        // A later rejected selection clears the pending receipt
        container
            .handle_change_file("trois.txt", "text/plain", vec![3])
            .await
            .unwrap();
        assert!(container.attachment().is_none());
    }

    #[tokio::test]
    async fn test_submit_assembles_pending_bill_for_session_user() {
        let store = Arc::new(RecordingStore::default());
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        container
            .handle_change_file("facture.jpg", "image/jpeg", vec![1])
            .await
            .unwrap();
        let receipt = container.attachment().unwrap();

        let outcome = container.handle_submit(valid_form()).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Navigate(RoutePath::Bills));

        let updates = store.updates.lock().unwrap();
        let (key, payload) = &updates[0];
        assert_eq!(*key, receipt.key);
        assert_eq!(payload.email, "employee@test.tld");
        assert_eq!(payload.bill_type, "Hôtel et logement");
        assert_eq!(payload.name, "encore");
        assert_eq!(payload.amount, 400);
        assert_eq!(payload.date, "2004-04-04");
        assert_eq!(payload.vat, "80");
        assert_eq!(payload.pct, 20);
        assert_eq!(payload.commentary, "séminaire billed");
        assert_eq!(payload.file_url, receipt.file_url);
        assert_eq!(payload.file_name, "facture.jpg");
        assert_eq!(payload.status, BillStatus::Pending);
    }

    #[tokio::test]
    async fn test_submit_clears_attachment() {
        let store = Arc::new(RecordingStore::default());
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        container
            .handle_change_file("facture.jpg", "image/jpeg", vec![1])
            .await
            .unwrap();
        container.handle_submit(valid_form()).await.unwrap();

        assert!(container.attachment().is_none());
    }

    #[tokio::test]
    async fn test_pct_defaults_to_twenty() {
        let store = Arc::new(RecordingStore::default());
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        let mut form = valid_form();
        form.pct = String::new();
        container.handle_submit(form).await.unwrap();

        let mut form = valid_form();
        form.pct = "vingt".to_string();
        container.handle_submit(form).await.unwrap();

        let updates = store.updates.lock().unwrap();
        assert_eq!(updates[0].1.pct, 20);
        assert_eq!(updates[1].1.pct, 20);
    }

    #[tokio::test]
    async fn test_submit_without_attachment_uses_empty_file_fields() {
        let store = Arc::new(RecordingStore::default());
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        let outcome = container.handle_submit(valid_form()).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Navigate(RoutePath::Bills));

        let updates = store.updates.lock().unwrap();
        assert_eq!(updates[0].1.file_url, "");
        assert_eq!(updates[0].1.file_name, "");
    }

    #[tokio::test]
    async fn test_store_rejection_is_swallowed_and_stays() {
        let store = Arc::new(RecordingStore {
            reject_update: Some(StoreError::internal()),
            ..Default::default()
        });
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        let outcome = container.handle_submit(valid_form()).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Stay);
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_the_store() {
        let store = Arc::new(RecordingStore::default());
        let container =
            NewBillContainer::new(store.clone(), logged_in_session().await, allowed());

        let mut form = valid_form();
        form.amount = "-3".to_string();
        let err = container.handle_submit(form).await.unwrap_err();
        assert!(matches!(
            err,
            BilledError::Validation(ValidationError::FieldError { .. })
        ));

        let mut form = valid_form();
        form.expense_type = "Cinéma".to_string();
        assert!(container.handle_submit(form).await.is_err());

        let mut form = valid_form();
        form.date = "04/04/2004".to_string();
        assert!(container.handle_submit(form).await.is_err());

        assert!(store.updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_without_session_user_fails() {
        let store = Arc::new(RecordingStore::default());
        let session = Arc::new(InMemorySessionStore::new());
        let container = NewBillContainer::new(store, session, allowed());

        let err = container.handle_submit(valid_form()).await.unwrap_err();
        assert!(matches!(err, BilledError::Session(_)));
    }
}
