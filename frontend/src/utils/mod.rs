pub mod browser;
pub mod cancel;
