use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{
    Course, CourseSort, CourseSummary, NewCourseRequest, NewResponseRequest, NewSessionRequest,
    Session, SessionResponse, SessionStats, SessionStatus, DEFAULT_DESCRIPTION,
};

/// In-memory repository of courses, their sessions and responses.
///
/// Courses are kept in creation order; listings sort a copy. Every
/// operation either completes fully or returns an error with the store
/// untouched.
#[derive(Debug, Default)]
pub struct FeedbackStore {
    courses: Vec<Course>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_course(&mut self, req: NewCourseRequest) -> Result<Course, AppError> {
        let name = req.name.trim();
        let code = req.code.trim();

        if name.is_empty() {
            return Err(AppError::Validation("Course name must not be empty".to_string()));
        }
        if code.is_empty() {
            return Err(AppError::Validation("Course code must not be empty".to_string()));
        }
        let code_lower = code.to_lowercase();
        if self.courses.iter().any(|c| c.code.to_lowercase() == code_lower) {
            return Err(AppError::DuplicateCode(code.to_string()));
        }

        let description = match req.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => DEFAULT_DESCRIPTION.to_string(),
        };

        let course = Course {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            code: code.to_string(),
            description,
            created_at: Utc::now().to_rfc3339(),
            sessions: Vec::new(),
        };

        self.courses.push(course.clone());
        Ok(course)
    }

    pub fn delete_course(&mut self, course_id: &str) -> Result<(), AppError> {
        let pos = self
            .courses
            .iter()
            .position(|c| c.id == course_id)
            .ok_or(AppError::NotFound)?;

        // Removes the course together with its sessions and responses.
        self.courses.remove(pos);
        Ok(())
    }

    pub fn course(&self, course_id: &str) -> Result<Course, AppError> {
        self.find_course(course_id).cloned()
    }

    /// Sorted copy of the course listing; stored order is never mutated.
    /// The sort is stable, so courses with equal keys keep creation order.
    pub fn list_courses(&self, sort: CourseSort) -> Vec<CourseSummary> {
        let mut summaries: Vec<CourseSummary> =
            self.courses.iter().map(CourseSummary::from).collect();

        match sort {
            CourseSort::NameAsc => summaries.sort_by(|a, b| compare_names(&a.name, &b.name)),
            CourseSort::NameDesc => summaries.sort_by(|a, b| compare_names(&b.name, &a.name)),
            CourseSort::SessionsAsc => summaries.sort_by_key(|c| c.session_count),
            CourseSort::SessionsDesc => {
                summaries.sort_by(|a, b| b.session_count.cmp(&a.session_count));
            }
            CourseSort::None => {}
        }

        summaries
    }

    pub fn create_session(
        &mut self,
        course_id: &str,
        req: NewSessionRequest,
    ) -> Result<Session, AppError> {
        let course = self.find_course_mut(course_id)?;

        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Session name must not be empty".to_string()));
        }

        // Omitted or non-positive weeks default to the next sequential week.
        let week = match req.week {
            Some(w) if w > 0 => w,
            _ => course.sessions.len() as i32 + 1,
        };

        let question = req
            .question
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_string);

        let session = Session {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            week,
            question,
            template: req.template,
            status: SessionStatus::Active,
            created_at: Utc::now().to_rfc3339(),
            responses: Vec::new(),
        };

        course.sessions.push(session.clone());
        Ok(session)
    }

    pub fn delete_session(&mut self, course_id: &str, session_id: &str) -> Result<(), AppError> {
        let course = self.find_course_mut(course_id)?;
        let pos = course
            .sessions
            .iter()
            .position(|s| s.id == session_id)
            .ok_or(AppError::NotFound)?;

        course.sessions.remove(pos);
        Ok(())
    }

    pub fn sessions(&self, course_id: &str) -> Result<Vec<Session>, AppError> {
        Ok(self.find_course(course_id)?.sessions.clone())
    }

    /// Idempotent: setting a session to its current status succeeds.
    pub fn set_session_status(
        &mut self,
        course_id: &str,
        session_id: &str,
        status: SessionStatus,
    ) -> Result<Session, AppError> {
        let session = self.find_session_mut(course_id, session_id)?;
        session.status = status;
        Ok(session.clone())
    }

    pub fn submit_response(
        &mut self,
        course_id: &str,
        session_id: &str,
        req: NewResponseRequest,
    ) -> Result<(), AppError> {
        let session = self.find_session_mut(course_id, session_id)?;

        if session.is_closed() {
            return Err(AppError::SessionClosed);
        }

        let rating = match req.rating {
            r @ 1..=5 => r as u8,
            r => {
                return Err(AppError::Validation(format!(
                    "Rating must be between 1 and 5, got {r}"
                )));
            }
        };

        session.responses.push(SessionResponse {
            rating,
            comment: req.comment.trim().to_string(),
        });
        Ok(())
    }

    pub fn session_stats(
        &self,
        course_id: &str,
        session_id: &str,
    ) -> Result<SessionStats, AppError> {
        let session = self.find_session(course_id, session_id)?;

        let response_count = session.responses.len();
        let average_rating = if response_count == 0 {
            None
        } else {
            let sum: u32 = session.responses.iter().map(|r| u32::from(r.rating)).sum();
            Some(f64::from(sum) / response_count as f64)
        };
        let comments = session
            .responses
            .iter()
            .filter(|r| !r.comment.is_empty())
            .map(|r| r.comment.clone())
            .collect();

        Ok(SessionStats {
            response_count,
            average_rating,
            comments,
        })
    }

    fn find_course(&self, course_id: &str) -> Result<&Course, AppError> {
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .ok_or(AppError::NotFound)
    }

    fn find_course_mut(&mut self, course_id: &str) -> Result<&mut Course, AppError> {
        self.courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or(AppError::NotFound)
    }

    fn find_session(&self, course_id: &str, session_id: &str) -> Result<&Session, AppError> {
        self.find_course(course_id)?
            .sessions
            .iter()
            .find(|s| s.id == session_id)
            .ok_or(AppError::NotFound)
    }

    fn find_session_mut(
        &mut self,
        course_id: &str,
        session_id: &str,
    ) -> Result<&mut Session, AppError> {
        self.find_course_mut(course_id)?
            .sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or(AppError::NotFound)
    }
}

// Case-insensitive name ordering; ties fall through to the stable sort.
fn compare_names(a: &str, b: &str) -> std::cmp::Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
