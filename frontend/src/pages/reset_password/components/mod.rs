pub mod form;
pub mod status;
pub mod strength;
