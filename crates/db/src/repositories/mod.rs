//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&SqlitePool` as the first argument. Every query is
//! parameterized; no user input is ever interpolated into SQL text.

pub mod course_repo;
pub mod student_repo;
pub mod trait_repo;
pub mod tutor_repo;

pub use course_repo::CourseRepo;
pub use student_repo::StudentRepo;
pub use trait_repo::TraitRepo;
pub use tutor_repo::TutorRepo;
