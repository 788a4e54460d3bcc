pub mod checks;
pub mod log;

pub use checks::load_checks;
pub use log::load_log;
