//! Loading of user input files into tagged parameters.

pub mod errors;
pub mod loader;
pub mod value;

pub use errors::InputError;
pub use loader::Params;
pub use value::Value;
