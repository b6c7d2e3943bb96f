pub mod cast;
pub mod list;
pub mod session;
pub mod show;
