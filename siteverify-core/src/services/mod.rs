//! 业务逻辑服务层

mod token_service;
mod verification_service;

pub use token_service::TokenService;
pub use verification_service::{TOKEN_STILL_EXISTS, VerificationService};

use std::sync::Arc;

use siteverify_provider::SiteVerifier;

use crate::types::VerificationTimeouts;

/// 服务上下文 - 持有所有依赖
///
/// The orchestration layer builds one of these per configured provider
/// block and passes it to every service. Holding the client behind a
/// concrete, statically-typed struct (instead of an opaque "provider
/// meta" value) keeps every operation's dependencies visible in its
/// signature.
pub struct VerifierContext {
    /// 已认证的授权机构客户端（无状态、可并发共享）
    pub verifier: Arc<dyn SiteVerifier>,
    /// create/delete 重试预算
    pub timeouts: VerificationTimeouts,
}

impl VerifierContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(verifier: Arc<dyn SiteVerifier>, timeouts: VerificationTimeouts) -> Self {
        Self { verifier, timeouts }
    }
}
