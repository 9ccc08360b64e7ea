pub mod aggregate;
pub mod executor;
