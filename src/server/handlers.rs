//! HTTP handlers gluing the containers to the web surface
//!
//! Handlers stay thin: they parse the request, call into a container
//! and turn its outcome into a response. All behavior worth testing
//! lives in the containers.

use crate::config::AppConfig;
use crate::containers::{
    BillsContainer, FileChangeOutcome, NewBillContainer, NewBillForm, SubmitOutcome,
};
use crate::core::bill::{User, UserType};
use crate::core::error::{BilledError, SessionError, StoreError};
use crate::core::routes::RoutePath;
use crate::core::session::SessionStore;
use crate::store::BillsStore;
use crate::views::{self, NewBillViewModel};
use axum::extract::{Multipart, Path, Query, State};
use axum::http::header;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub bills: Arc<BillsContainer>,
    pub new_bill: Arc<NewBillContainer>,
    pub store: Arc<dyn BillsStore>,
    pub session: Arc<dyn SessionStore>,
    pub config: Arc<AppConfig>,
}

/// Credentials posted by the login form
///
/// Only the email is used; there is no credential verification in this
/// application's scope.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ReceiptQuery {
    pub url: String,
}

/// GET / — login page
pub async fn login_form() -> Html<String> {
    Html(views::login_page())
}

/// POST /login — persist the user and navigate to the bill list
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, BilledError> {
    let user = User {
        user_type: UserType::Employee,
        email: form.email,
    };
    state.session.set_user(&user).await?;

    tracing::info!(email = %user.email, "employee connected");
    Ok(Redirect::to(RoutePath::Bills.path()))
}

/// GET /bills — the employee bill list
///
/// Store rejections are not caught here: `BilledError::into_response`
/// renders the error page with the rejection message verbatim.
pub async fn bills_page(State(state): State<AppState>) -> Result<Response, BilledError> {
    match state.bills.user().await {
        Ok(_) => {}
        Err(SessionError::NotLoggedIn) => {
            return Ok(Redirect::to(RoutePath::Login.path()).into_response());
        }
        Err(e) => return Err(e.into()),
    }

    let bills = state.bills.get_bills().await?;
    Ok(Html(views::bills_ui(&bills)).into_response())
}

/// GET /bills/receipt?url=.. — receipt preview modal
pub async fn receipt_modal(
    State(state): State<AppState>,
    Query(query): Query<ReceiptQuery>,
) -> Html<String> {
    Html(state.bills.receipt_modal(&query.url))
}

/// GET /bills/new — the new-bill form
pub async fn new_bill_page(State(state): State<AppState>) -> Result<Response, BilledError> {
    match state.session.user().await {
        Ok(_) => {}
        Err(SessionError::NotLoggedIn) => {
            return Ok(Redirect::to(RoutePath::Login.path()).into_response());
        }
        Err(e) => return Err(e.into()),
    }

    let model = NewBillViewModel {
        attached_file: state.new_bill.attachment().map(|r| r.file_name),
        ..Default::default()
    };
    Ok(Html(views::new_bill_ui(&model)).into_response())
}

/// POST /bills/new/file — receipt upload (the file-change event)
///
/// Always re-renders the form: with the attached file name when the
/// upload was accepted, with the rejection message when the extension
/// was refused.
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, BilledError> {
    let mut uploaded: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| BilledError::Internal(e.to_string()))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| BilledError::Internal(e.to_string()))?;
            uploaded = Some((file_name, content_type, data.to_vec()));
        }
    }

    let Some((file_name, content_type, data)) = uploaded else {
        let model = NewBillViewModel {
            file_error: Some("Le champ 'file' est requis".to_string()),
            ..Default::default()
        };
        return Ok(Html(views::new_bill_ui(&model)).into_response());
    };

    let outcome = state
        .new_bill
        .handle_change_file(&file_name, &content_type, data)
        .await?;

    let model = match outcome {
        FileChangeOutcome::Accepted(receipt) => NewBillViewModel {
            attached_file: Some(receipt.file_name),
            ..Default::default()
        },
        FileChangeOutcome::Rejected { reason } => NewBillViewModel {
            file_error: Some(reason),
            ..Default::default()
        },
    };
    Ok(Html(views::new_bill_ui(&model)).into_response())
}

/// POST /bills/new — form submission
///
/// Success navigates to the bill list. A store rejection was already
/// logged by the container and leaves the user on the form. A
/// validation failure re-renders the form with the field message.
pub async fn submit_bill(
    State(state): State<AppState>,
    Form(form): Form<NewBillForm>,
) -> Result<Response, BilledError> {
    match state.new_bill.handle_submit(form).await {
        Ok(SubmitOutcome::Navigate(route)) => Ok(Redirect::to(route.path()).into_response()),
        Ok(SubmitOutcome::Stay) => {
            let model = NewBillViewModel {
                attached_file: state.new_bill.attachment().map(|r| r.file_name),
                ..Default::default()
            };
            Ok(Html(views::new_bill_ui(&model)).into_response())
        }
        Err(BilledError::Validation(e)) => {
            let model = NewBillViewModel {
                attached_file: state.new_bill.attachment().map(|r| r.file_name),
                form_error: Some(e.to_string()),
                ..Default::default()
            };
            Ok(Html(views::new_bill_ui(&model)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// GET /uploads/{key} — stored receipt bytes for the preview modal
pub async fn download_receipt(
    State(state): State<AppState>,
    Path(key): Path<Uuid>,
) -> Result<Response, BilledError> {
    let file = state
        .store
        .download(&key)
        .await?
        .ok_or(BilledError::Store(StoreError::not_found()))?;

    Ok((
        [(header::CONTENT_TYPE, file.content_type)],
        file.data,
    )
        .into_response())
}
