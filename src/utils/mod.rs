pub mod validate;

pub use validate::{
    require, validate_attendance, validate_capacity, validate_identifier, validate_score,
    validate_text_field,
};
