//! Contact form submission

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect},
    Form,
};
use serde::Deserialize;

use crate::models::NewEnquiry;
use crate::web::flash::Flash;
use crate::web::state::AppState;

/// Form body of the public enquiry form
#[derive(Debug, Deserialize)]
pub struct EnquiryForm {
    pub name: String,
    pub phone: String,
    pub message: String,
    /// Empty when the visitor left the worker dropdown on its placeholder
    #[serde(default)]
    pub worker: String,
}

/// POST /enquiries — submit an enquiry
///
/// The browser blocks empty required fields up front; this re-checks them
/// before any remote call, then reports the store's success flag as a
/// flash message. Success redirects back to a cleared form.
pub async fn submit_enquiry(
    State(state): State<AppState>,
    Form(form): Form<EnquiryForm>,
) -> impl IntoResponse {
    let input = NewEnquiry {
        name: form.name,
        phone: form.phone,
        message: form.message,
        worker: if form.worker.trim().is_empty() {
            None
        } else {
            Some(form.worker)
        },
    };

    let flash = match input.validate() {
        Err(e) => Flash::error(e.to_string()),
        Ok(()) => {
            if state.enquiries.submit(&input).await {
                Flash::success("Enquiry sent successfully! We will call you back.")
            } else {
                Flash::error("Failed to submit enquiry. Please try again.")
            }
        }
    };

    (
        [(SET_COOKIE, flash.set_cookie())],
        Redirect::to("/#contact"),
    )
}
