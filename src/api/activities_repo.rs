use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{FetchError, SignupError, UnregisterError};
use crate::models::Catalog;

const GENERIC_REJECTION: &str = "An error occurred";

// One round-trip per user action. Failures are surfaced to the caller,
// never retried here.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

#[derive(Debug, Deserialize)]
struct SuccessBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RejectionBody {
    detail: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    // The browser fetch backend refuses relative URLs, so the client is
    // anchored to the page origin.
    pub fn from_window(window: &web_sys::Window) -> Result<Self, JsValue> {
        let origin = window.location().origin()?;
        Ok(Self::new(origin))
    }

    pub async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        let response = self
            .http
            .get(self.catalog_url())
            .send()
            .await
            .map_err(FetchError::Transport)?
            .error_for_status()
            .map_err(FetchError::Transport)?;

        response.json::<Catalog>().await.map_err(FetchError::Decode)
    }

    pub async fn signup(&self, activity: &str, email: &str) -> Result<String, SignupError> {
        let response = self
            .http
            .post(self.signup_url(activity))
            .query(&[("email", email)])
            .send()
            .await
            .map_err(SignupError::Network)?;

        if !response.status().is_success() {
            return Err(SignupError::Rejected(rejection_detail(response).await));
        }

        let body: SuccessBody = response.json().await.map_err(SignupError::Network)?;
        Ok(body
            .message
            .unwrap_or_else(|| "Signed up successfully.".to_string()))
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> Result<String, UnregisterError> {
        let response = self
            .http
            .delete(self.unregister_url(activity))
            .query(&[("email", email)])
            .send()
            .await
            .map_err(UnregisterError::Network)?;

        if !response.status().is_success() {
            return Err(UnregisterError::Rejected(rejection_detail(response).await));
        }

        let body: SuccessBody = response.json().await.map_err(UnregisterError::Network)?;
        Ok(body
            .message
            .unwrap_or_else(|| "Removed participant.".to_string()))
    }

    fn catalog_url(&self) -> String {
        format!("{}/activities", self.base)
    }

    fn signup_url(&self, activity: &str) -> String {
        format!(
            "{}/activities/{}/signup",
            self.base,
            encode_path_segment(activity)
        )
    }

    fn unregister_url(&self, activity: &str) -> String {
        format!(
            "{}/activities/{}/participants",
            self.base,
            encode_path_segment(activity)
        )
    }
}

async fn rejection_detail(response: reqwest::Response) -> String {
    response
        .json::<RejectionBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| GENERIC_REJECTION.to_string())
}

// encodeURIComponent's unreserved set; activity names contain spaces and
// may contain slashes, which must not split the path.
fn encode_path_segment(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'~'
            | b'!'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
