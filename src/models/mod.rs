pub mod course;
pub mod session;

pub use course::{Course, CourseSort, CourseSummary, NewCourseRequest, DEFAULT_DESCRIPTION};
pub use session::{
    NewResponseRequest, NewSessionRequest, Session, SessionResponse, SessionStats, SessionStatus,
    SessionTemplate,
};
