pub mod classes;
pub mod courses;
pub mod evaluations;
pub mod people;
pub mod professors;
pub mod students;

pub use classes::entities::Class;
pub use courses::entities::Course;
pub use evaluations::entities::{EvaluationPolicy, ScoreCard, ScoreStatus, Scores};
pub use people::entities::Person;
pub use professors::entities::Professor;
pub use students::entities::{Student, StudentKind};
