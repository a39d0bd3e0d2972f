use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Active,
    Closed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionTemplate {
    #[default]
    Quick,
    Comprehensive,
    Lecture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub week: i32,
    pub question: Option<String>,
    pub template: SessionTemplate,
    pub status: SessionStatus,
    pub created_at: String,
    pub responses: Vec<SessionResponse>,
}

impl Session {
    pub fn is_closed(&self) -> bool {
        self.status == SessionStatus::Closed
    }

    pub fn response_count(&self) -> usize {
        self.responses.len()
    }
}

/// One anonymous submission. No identifier; immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSessionRequest {
    pub name: String,
    #[serde(default)]
    pub week: Option<i32>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub template: SessionTemplate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewResponseRequest {
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

/// Derived view over a session's responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub response_count: usize,
    /// Arithmetic mean of all ratings; `None` until the first response.
    pub average_rating: Option<f64>,
    pub comments: Vec<String>,
}
