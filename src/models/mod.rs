pub mod action;
pub mod admin;
pub mod event;
pub mod person;
pub mod rights;

pub use action::Action;
pub use admin::Admin;
pub use event::AttendanceEvent;
pub use person::Person;
pub use rights::{Right, RightSet};
