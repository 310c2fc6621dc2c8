pub mod attendance;
pub mod chat;
pub mod dashboard;
pub mod employee;
pub mod session;
pub mod system_user;
