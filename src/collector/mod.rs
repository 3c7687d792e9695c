pub mod collector;
pub mod outcome;
pub mod record;
