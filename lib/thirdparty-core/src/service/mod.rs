pub mod error;
pub mod forward;
pub mod notification;
