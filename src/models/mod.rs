pub mod record;
pub mod scorecard;

pub use record::CheckRecord;
pub use scorecard::{Band, Scorecard};
