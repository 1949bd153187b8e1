//! 类型定义模块

mod resource;
mod timeouts;

pub use resource::{DNS_TXT_RECORD_TYPE, DnsTokenRecord, VerificationResource};
pub use timeouts::VerificationTimeouts;

pub(crate) use timeouts::{DEFAULT_CREATE_TIMEOUT_SECS, DEFAULT_DELETE_TIMEOUT_SECS};
