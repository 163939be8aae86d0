pub mod accounts;
pub mod consent_requests;
pub mod consents;
pub mod dispatch;
pub mod misc;
pub mod services;
pub mod thirdparty_requests;
