use serde::{Deserialize, Serialize};

use crate::models::session::Session;

/// Stored when a course is created without a description.
pub const DEFAULT_DESCRIPTION: &str = "No description";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub created_at: String,
    pub sessions: Vec<Session>,
}

impl Course {
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourseRequest {
    pub name: String,
    pub code: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Listing shape: the fields a course card shows, with the session count
/// derived from the owned sequence so it cannot drift.
#[derive(Debug, Clone, Serialize)]
pub struct CourseSummary {
    pub id: String,
    pub name: String,
    pub code: String,
    pub description: String,
    pub session_count: usize,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.clone(),
            name: course.name.clone(),
            code: course.code.clone(),
            description: course.description.clone(),
            session_count: course.session_count(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CourseSort {
    NameAsc,
    NameDesc,
    SessionsAsc,
    SessionsDesc,
    #[default]
    None,
}
