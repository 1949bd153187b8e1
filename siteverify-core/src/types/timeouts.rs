use std::time::Duration;

/// 默认 create 重试预算（秒）—— DNS 传播可能需要接近一小时
pub(crate) const DEFAULT_CREATE_TIMEOUT_SECS: u64 = 3600;
/// 默认 delete 重试预算（秒）
pub(crate) const DEFAULT_DELETE_TIMEOUT_SECS: u64 = 1200;

/// Wall-clock retry budgets for the lifecycle operations.
///
/// Retries are bounded only by these budgets, never by attempt count:
/// DNS propagation decides how long a create takes, not the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationTimeouts {
    /// Budget for the create loop (insert until the authority sees the
    /// proof record).
    pub create: Duration,
    /// Budget for the delete loop (delete until the authority stops
    /// seeing the proof record).
    pub delete: Duration,
}

impl Default for VerificationTimeouts {
    fn default() -> Self {
        Self {
            create: Duration::from_secs(DEFAULT_CREATE_TIMEOUT_SECS),
            delete: Duration::from_secs(DEFAULT_DELETE_TIMEOUT_SECS),
        }
    }
}
