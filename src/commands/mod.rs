pub mod generate;
pub mod validators;
