pub mod attendance;
pub mod registration;
pub mod rights;
pub mod session;
pub mod summary;
