pub mod campaign;
pub mod submit;
