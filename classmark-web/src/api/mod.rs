//! REST client for the collaborator service that owns persistence and
//! the authoritative business rules.
//!
//! Every request carries `Authorization: Bearer <token>` while a token
//! is held. Non-2xx responses are expected to carry `{"error": string}`;
//! that text is surfaced to the user verbatim, with a generic fallback
//! when the body cannot be parsed.

use crate::session::SharedTokenStore;
use classmark_core::model::{
    Category, Evaluation, EvaluationPatch, NewCategory, NewEvaluation, NewStudent, Student,
};
use gloo::net::http::{Method, Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

pub const API_BASE: &str = "/api";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The collaborator answered with an error body; the message is its
    /// text, shown to the user as-is.
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("The request could not be sent: {0}")]
    Network(String),
    #[error("The response could not be read: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Answer of `GET /api/auth/check`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SetupStatus {
    #[serde(rename = "hasPassword")]
    pub has_password: bool,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u32,
}

#[derive(Serialize)]
struct PasswordBody<'a> {
    password: &'a str,
}

#[derive(Serialize)]
struct BulkStudentsBody<'a> {
    students: &'a [NewStudent],
}

/// Partial student update; `None` fields are left out of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Client over the fixed REST contract. Cheap to clone; clones share
/// the injected token store.
#[derive(Clone)]
pub struct ApiClient {
    store: SharedTokenStore,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(store: SharedTokenStore) -> Self {
        Self { store }
    }

    /// Whether a session token is currently held.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.store.has_token()
    }

    /// Drop the stored token. The next gate pass lands on the login
    /// screen.
    pub fn end_session(&self) {
        self.store.clear();
    }

    fn builder(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = RequestBuilder::new(&format!("{API_BASE}{path}")).method(method);
        if let Some(token) = self.store.token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        builder
    }

    async fn send(request: Request) -> Result<Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(body) if !body.error.is_empty() => body.error,
            _ => "The request failed.".to_string(),
        };
        Err(ApiError::Server { status, message })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let request = self
            .builder(Method::GET, path)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = Self::send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let response = Self::send(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// Like [`Self::send_json`] for endpoints whose success body carries
    /// nothing the client needs.
    async fn send_json_unit<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let request = self
            .builder(method, path)
            .json(body)
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::send(request).await.map(|_| ())
    }

    async fn send_unit(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let request = self
            .builder(method, path)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::send(request).await.map(|_| ())
    }

    // --- Auth ---

    /// Ask the collaborator whether a shared password exists yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails; the gate treats that as
    /// a fatal load failure.
    pub async fn check_setup(&self) -> Result<SetupStatus, ApiError> {
        self.get_json("/auth/check").await
    }

    /// Set the initial shared password.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when the password is rejected.
    pub async fn setup_password(&self, password: &str) -> Result<(), ApiError> {
        self.send_json_unit(Method::POST, "/auth/setup", &PasswordBody { password })
            .await
    }

    /// Exchange the shared password for a session token. The token is
    /// saved in the injected store on success and left untouched on
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when the password is wrong.
    pub async fn login(&self, password: &str) -> Result<(), ApiError> {
        let response: TokenResponse = self
            .send_json(Method::POST, "/auth/login", &PasswordBody { password })
            .await?;
        self.store.save(&response.token);
        Ok(())
    }

    // --- Students ---

    /// Number of students on the roster, used to skip the one-time
    /// roster setup.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn student_count(&self) -> Result<u32, ApiError> {
        let response: CountResponse = self.get_json("/students/count").await?;
        Ok(response.count)
    }

    /// List students, optionally including deactivated ones.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn students(&self, include_inactive: bool) -> Result<Vec<Student>, ApiError> {
        self.get_json(&format!("/students?includeInactive={include_inactive}"))
            .await
    }

    /// Bulk-create the initial roster.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when creation fails.
    pub async fn create_students(&self, students: &[NewStudent]) -> Result<(), ApiError> {
        self.send_json_unit(Method::POST, "/students/bulk", &BulkStudentsBody { students })
            .await
    }

    /// Add a single student to an existing roster.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when creation fails.
    pub async fn create_student(&self, student: &NewStudent) -> Result<Student, ApiError> {
        self.send_json(Method::POST, "/students", student).await
    }

    /// Update a student's number or name.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when the update is rejected.
    pub async fn update_student(&self, id: i64, patch: &StudentPatch) -> Result<Student, ApiError> {
        self.send_json(Method::PUT, &format!("/students/{id}"), patch)
            .await
    }

    /// Reactivate a previously deactivated student.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message on failure.
    pub async fn activate_student(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(Method::PATCH, &format!("/students/{id}/activate"))
            .await
    }

    /// Deactivate a student; records stay, the row disappears from the
    /// default roster.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message on failure.
    pub async fn deactivate_student(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(Method::PATCH, &format!("/students/{id}/deactivate"))
            .await
    }

    // --- Categories ---

    /// List all evaluation categories.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json("/categories").await
    }

    /// Create a category. Input is validated locally first.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when creation fails.
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        self.send_json(Method::POST, "/categories", category).await
    }

    /// Rename a category or change its maximum score.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when the update is rejected.
    pub async fn update_category(
        &self,
        id: i64,
        category: &NewCategory,
    ) -> Result<Category, ApiError> {
        self.send_json(Method::PUT, &format!("/categories/{id}"), category)
            .await
    }

    /// Delete a category. The collaborator refuses when evaluations
    /// reference it; that message is surfaced verbatim.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when deletion is refused.
    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, &format!("/categories/{id}"))
            .await
    }

    // --- Evaluations ---

    /// All evaluations recorded in one category, across students.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn evaluations_for_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Evaluation>, ApiError> {
        self.get_json(&format!("/evaluations/category/{category_id}"))
            .await
    }

    /// All evaluations for one student, across categories.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails.
    pub async fn evaluations_for_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Evaluation>, ApiError> {
        self.get_json(&format!("/evaluations/student/{student_id}"))
            .await
    }

    /// Record a score for a (student, date) cell with no prior record.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when creation fails.
    pub async fn create_evaluation(
        &self,
        evaluation: &NewEvaluation,
    ) -> Result<Evaluation, ApiError> {
        self.send_json(Method::POST, "/evaluations", evaluation).await
    }

    /// Change the score (and possibly date) of an existing record.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when the update is rejected.
    pub async fn update_evaluation(
        &self,
        id: i64,
        patch: &EvaluationPatch,
    ) -> Result<Evaluation, ApiError> {
        self.send_json(Method::PUT, &format!("/evaluations/{id}"), patch)
            .await
    }

    /// Delete an evaluation record. Part of the contract although no
    /// client flow calls it today.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's message when deletion fails.
    pub async fn delete_evaluation(&self, id: i64) -> Result<(), ApiError> {
        self.send_unit(Method::DELETE, &format!("/evaluations/{id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryTokenStore;

    #[test]
    fn server_errors_display_the_collaborator_text_verbatim() {
        let err = ApiError::Server {
            status: 409,
            message: "평가 기록이 있는 카테고리는 삭제할 수 없습니다.".to_string(),
        };
        assert_eq!(err.to_string(), "평가 기록이 있는 카테고리는 삭제할 수 없습니다.");
    }

    #[test]
    fn setup_status_reads_the_camel_case_field() {
        let status: SetupStatus = serde_json::from_str(r#"{"hasPassword":true}"#).expect("json");
        assert!(status.has_password);
    }

    #[test]
    fn student_patch_omits_unset_fields() {
        let patch = StudentPatch {
            name: Some("김하늘".to_string()),
            ..StudentPatch::default()
        };
        let json = serde_json::to_string(&patch).expect("json");
        assert_eq!(json, r#"{"name":"김하늘"}"#);
    }

    #[test]
    fn clients_sharing_a_store_compare_equal() {
        let store: SharedTokenStore = Rc::new(MemoryTokenStore::default());
        let a = ApiClient::new(Rc::clone(&store));
        let b = a.clone();
        assert!(a == b);
        let c = ApiClient::new(Rc::new(MemoryTokenStore::default()));
        assert!(a != c);
    }

    #[test]
    fn session_state_follows_the_injected_store() {
        let store: SharedTokenStore = Rc::new(MemoryTokenStore::default());
        let client = ApiClient::new(Rc::clone(&store));
        assert!(!client.has_session());
        store.save("token");
        assert!(client.has_session());
        client.end_session();
        assert!(!store.has_token());
    }
}
