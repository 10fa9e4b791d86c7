//! Shared harness for HTTP-level tests

use axum_test::TestServer;
use billed::prelude::*;
use serde_json::json;

/// Store wrapper that can be told to reject specific operations
///
/// Delegates to an in-memory store otherwise, so the happy-path flows
/// keep working around the injected failure.
pub struct FlakyStore {
    inner: InMemoryBillsStore,
    pub fail_list: Option<StoreError>,
    pub fail_update: Option<StoreError>,
}

impl FlakyStore {
    pub fn seeded() -> Self {
        Self {
            inner: InMemoryBillsStore::seeded(),
            fail_list: None,
            fail_update: None,
        }
    }

    pub fn rejecting_list(error: StoreError) -> Self {
        Self {
            fail_list: Some(error),
            ..Self::seeded()
        }
    }

    pub fn rejecting_update(error: StoreError) -> Self {
        Self {
            fail_update: Some(error),
            ..Self::seeded()
        }
    }
}

#[async_trait]
impl BillsStore for FlakyStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        match &self.fail_list {
            Some(e) => Err(e.clone()),
            None => self.inner.list().await,
        }
    }

    async fn create(&self, receipt: NewReceipt) -> Result<ReceiptHandle, StoreError> {
        self.inner.create(receipt).await
    }

    async fn update(&self, key: &Uuid, payload: BillPayload) -> Result<Bill, StoreError> {
        match &self.fail_update {
            Some(e) => Err(e.clone()),
            None => self.inner.update(key, payload).await,
        }
    }

    async fn download(&self, key: &Uuid) -> Result<Option<StoredFile>, StoreError> {
        self.inner.download(key).await
    }
}

/// Spin up a test server around the given store
pub fn server_with_store(store: impl BillsStore + 'static) -> TestServer {
    let router = AppBuilder::new()
        .with_config(AppConfig::default_config())
        .with_store(store)
        .build();
    TestServer::new(router)
}

/// Spin up a test server with the seeded fixture store
pub fn seeded_server() -> TestServer {
    server_with_store(InMemoryBillsStore::seeded())
}

/// Log the reference employee in
pub async fn login(server: &TestServer) {
    let response = server
        .post("/login")
        .form(&json!({
            "email": "employee@test.tld",
            "password": "employee",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::SEE_OTHER);
}
