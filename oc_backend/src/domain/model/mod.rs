pub mod backend;
pub mod value_object;
