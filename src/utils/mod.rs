pub mod error;
pub mod helpers;
