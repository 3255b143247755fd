pub mod about;
pub mod docs;
pub mod status;
