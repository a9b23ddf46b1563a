//! Mentor Bot — local tutoring chatbot core.

pub mod channels;
pub mod config;
pub mod error;
pub mod guide;
pub mod mentor;
pub mod oracle;
pub mod progress;
pub mod router;
pub mod store;
