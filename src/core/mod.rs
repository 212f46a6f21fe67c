pub mod add;
pub mod backup;
pub mod board;
pub mod log;
pub mod photo;
pub mod site;
