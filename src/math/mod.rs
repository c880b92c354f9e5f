pub mod grid;
pub mod scalar_field;
pub mod utils;
