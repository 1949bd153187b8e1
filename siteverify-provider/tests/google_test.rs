//! Google Site Verification 集成测试
//!
//! 需要环境变量 `SITEVERIFY_TEST_DOMAIN`（以及可选的
//! `SITEVERIFY_CREDENTIALS`）；缺失时测试直接跳过。这些测试只调用
//! 只读/幂等端点 —— 真正的 create/delete 生命周期需要在域名上发布
//! DNS 记录，由 core 层的 mock 测试覆盖。

mod common;

use common::TestContext;

#[tokio::test]
async fn get_token_returns_value() {
    skip_if_no_credentials!("SITEVERIFY_TEST_DOMAIN");

    let ctx = require_some!(TestContext::google().await);
    let token = require_ok!(ctx.verifier.get_token(&ctx.domain).await);
    assert!(!token.is_empty());
}

#[tokio::test]
async fn get_token_is_stable_per_domain() {
    skip_if_no_credentials!("SITEVERIFY_TEST_DOMAIN");

    // Tokens are tied to (domain, method) at issuance; fetching twice
    // must not mint a different value.
    let ctx = require_some!(TestContext::google().await);
    let first = require_ok!(ctx.verifier.get_token(&ctx.domain).await);
    let second = require_ok!(ctx.verifier.get_token(&ctx.domain).await);
    assert_eq!(first, second);
}

#[tokio::test]
async fn get_unknown_resource_fails() {
    skip_if_no_credentials!("SITEVERIFY_TEST_DOMAIN");

    let ctx = require_some!(TestContext::google().await);
    let id = format!("dns://never-verified.{}", ctx.domain);
    let result = ctx.verifier.get(&id).await;
    assert!(result.is_err(), "expected Err for {id}, got {result:?}");
}
