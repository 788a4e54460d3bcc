pub mod types;

pub use types::SecsumError;
