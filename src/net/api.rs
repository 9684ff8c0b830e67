//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Save failures
//! flatten the server's per-field error map into one displayable message so
//! the wizard can surface it without closing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Department, LoginResponse, Organization, SaveUserRequest, UserRecord};
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;
#[cfg(any(test, feature = "hydrate"))]
use super::types::SaveErrorBody;

#[cfg(any(test, feature = "hydrate"))]
const USERS_ENDPOINT: &str = "/api/users";

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/api/users/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

/// Flatten a save-error body into one user-visible message.
///
/// Field error arrays win over the top-level message; an entirely empty body
/// falls back to a generic line.
#[cfg(any(test, feature = "hydrate"))]
fn save_error_message(body: &SaveErrorBody) -> String {
    if let Some(errors) = &body.errors {
        let flat: Vec<String> = errors.values().flatten().cloned().collect();
        if !flat.is_empty() {
            return flat.join(" ");
        }
    }
    if body.message.is_empty() {
        "request failed".to_owned()
    } else {
        body.message.clone()
    }
}

/// Sign in via `POST /api/login`.
///
/// # Errors
///
/// Returns a displayable message when the request or credentials fail.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/login")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            if let Ok(err) = resp.json::<SaveErrorBody>().await {
                return Err(save_error_message(&err));
            }
            return Err(login_failed_message(status));
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create or update a user account.
///
/// `POST /api/users` when `user_id` is `None`, `PUT /api/users/{id}` when
/// editing.
///
/// # Errors
///
/// Returns the flattened field errors or the server/transport message.
pub async fn save_user(user_id: Option<&str>, payload: &SaveUserRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let request = match user_id {
            None => gloo_net::http::Request::post(USERS_ENDPOINT),
            Some(id) => gloo_net::http::Request::put(&user_endpoint(id)),
        };
        let resp = request
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let err = resp.json::<SaveErrorBody>().await.unwrap_or_default();
            return Err(save_error_message(&err));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, payload);
        Err("not available on server".to_owned())
    }
}

/// Fetch all user accounts. Returns `None` on failure or on the server.
pub async fn fetch_users() -> Option<Vec<UserRecord>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(USERS_ENDPOINT).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<UserRecord>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the department reference list.
pub async fn fetch_departments() -> Option<Vec<Department>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/departments").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Department>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the organization reference list.
pub async fn fetch_organizations() -> Option<Vec<Organization>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/organizations").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Organization>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
