pub mod photo;
pub mod site;
pub mod status;
pub mod task;
pub mod user;
