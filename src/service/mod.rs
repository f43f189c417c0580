pub mod runtime;
pub mod status;
