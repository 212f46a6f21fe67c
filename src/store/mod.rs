pub mod blob;
pub mod mirror;
