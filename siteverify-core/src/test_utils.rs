//! 测试辅助模块
//!
//! 提供可编程的 mock 客户端和便捷的测试工厂方法。

use std::collections::VecDeque;

use async_trait::async_trait;
use tokio::sync::Mutex;

use siteverify_provider::{ProviderError, Result, SiteVerifier, WebResource};

/// 构造测试用 `WebResource`
pub fn web_resource(id: &str) -> WebResource {
    WebResource {
        id: id.to_string(),
        site: None,
    }
}

/// 一次远端调用及其参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    GetToken(String),
    Insert(String),
    Get(String),
    Delete(String),
}

/// 可编程的 [`SiteVerifier`] 替身
///
/// 每个操作持有一个脚本队列，按序弹出；队列耗尽后回落到默认行为
/// （成功，或通过 `set_default_*_error` 配置的固定错误，用于测试
/// 截止时间路径）。所有调用连同参数都被记录，便于断言顺序。
pub struct MockVerifier {
    token_script: Mutex<VecDeque<Result<String>>>,
    insert_script: Mutex<VecDeque<Result<WebResource>>>,
    get_script: Mutex<VecDeque<Result<WebResource>>>,
    delete_script: Mutex<VecDeque<Result<()>>>,
    default_insert_error: Mutex<Option<ProviderError>>,
    default_delete_error: Mutex<Option<ProviderError>>,
    calls: Mutex<Vec<MockCall>>,
}

impl MockVerifier {
    pub fn new() -> Self {
        Self {
            token_script: Mutex::new(VecDeque::new()),
            insert_script: Mutex::new(VecDeque::new()),
            get_script: Mutex::new(VecDeque::new()),
            delete_script: Mutex::new(VecDeque::new()),
            default_insert_error: Mutex::new(None),
            default_delete_error: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub async fn script_token(&self, result: Result<String>) {
        self.token_script.lock().await.push_back(result);
    }

    pub async fn script_insert(&self, result: Result<WebResource>) {
        self.insert_script.lock().await.push_back(result);
    }

    pub async fn script_get(&self, result: Result<WebResource>) {
        self.get_script.lock().await.push_back(result);
    }

    pub async fn script_delete(&self, result: Result<()>) {
        self.delete_script.lock().await.push_back(result);
    }

    /// 脚本队列耗尽后，让每次 insert 都返回此错误
    pub async fn set_default_insert_error(&self, error: ProviderError) {
        *self.default_insert_error.lock().await = Some(error);
    }

    /// 脚本队列耗尽后，让每次 delete 都返回此错误
    pub async fn set_default_delete_error(&self, error: ProviderError) {
        *self.default_delete_error.lock().await = Some(error);
    }

    /// 按发生顺序返回全部已记录调用
    pub async fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: MockCall) {
        self.calls.lock().await.push(call);
    }
}

#[async_trait]
impl SiteVerifier for MockVerifier {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn get_token(&self, domain: &str) -> Result<String> {
        self.record(MockCall::GetToken(domain.to_string())).await;
        match self.token_script.lock().await.pop_front() {
            Some(result) => result,
            None => Ok("mock-token".to_string()),
        }
    }

    async fn insert(&self, domain: &str) -> Result<WebResource> {
        self.record(MockCall::Insert(domain.to_string())).await;
        if let Some(result) = self.insert_script.lock().await.pop_front() {
            return result;
        }
        match self.default_insert_error.lock().await.clone() {
            Some(error) => Err(error),
            None => Ok(web_resource(&format!("dns://{domain}"))),
        }
    }

    async fn get(&self, id: &str) -> Result<WebResource> {
        self.record(MockCall::Get(id.to_string())).await;
        match self.get_script.lock().await.pop_front() {
            Some(result) => result,
            None => Ok(web_resource(id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.record(MockCall::Delete(id.to_string())).await;
        if let Some(result) = self.delete_script.lock().await.pop_front() {
            return result;
        }
        match self.default_delete_error.lock().await.clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}
