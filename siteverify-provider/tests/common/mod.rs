//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;
use std::sync::Arc;

use siteverify_provider::{SiteVerifier, create_verifier};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 测试上下文 - 封装客户端和测试域名
///
/// 凭证通过 `SITEVERIFY_CREDENTIALS`（key JSON 或路径，缺省时走
/// application default credentials）、域名通过 `SITEVERIFY_TEST_DOMAIN` 注入。
pub struct TestContext {
    pub verifier: Arc<dyn SiteVerifier>,
    pub domain: String,
}

impl TestContext {
    pub async fn google() -> Option<Self> {
        let domain = env::var("SITEVERIFY_TEST_DOMAIN").ok()?;
        let inline = env::var("SITEVERIFY_CREDENTIALS").ok();

        let verifier = create_verifier(inline.as_deref()).await.ok()?;

        Some(Self { verifier, domain })
    }
}
