pub mod variable_set;

pub use variable_set::{merge_and_write, read_variable_set, VariableSet};
