pub mod catalog;
pub mod enrollment;
pub mod persistence;
pub mod records;
pub mod reports;
pub mod students;

pub use catalog::CatalogService;
pub use records::AcademicRecords;
pub use students::StudentService;
