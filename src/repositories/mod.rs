pub mod assignment_repository;
pub mod submission_repository;

pub use assignment_repository::{AssignmentRepository, MongoAssignmentRepository};
pub use submission_repository::{MongoSubmissionRepository, SubmissionRepository};
