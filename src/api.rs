//! 身份提供方 API 客户端
//!
//! 身份提供方是一个不透明的外部服务：本模块只负责携带凭据
//! 调用它并把失败原因原样透传给上层，不做重试。

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::flow::IdentityProvider;

/// 身份提供方的默认地址
pub const IDENTITY_BASE_URL: &str = "https://identity.social-connect.app";

/// 登录/注册请求体
#[derive(Debug, Serialize)]
struct CredentialRequest<'a> {
    username: &'a str,
    password: &'a str,
}

/// 认证成功后返回的凭据
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserCredential {
    pub username: String,
    pub id_token: String,
}

/// 失败响应体；`message` 是面向用户的不透明原因
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IdentityApi {
    pub base_url: String,
}

impl IdentityApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_credentials(
        &self,
        path: &str,
        username: &str,
        password: &str,
    ) -> AppResult<UserCredential> {
        let res = Request::post(&self.url(path))
            .json(&CredentialRequest { username, password })
            .map_err(|e| AppError::serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if !res.ok() {
            // 失败原因原样透传；拿不到结构化消息时退回状态码
            let reason = res
                .json::<ErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| format!("Authentication failed ({})", res.status()));
            return Err(AppError::auth(reason));
        }

        res.json::<UserCredential>()
            .await
            .map_err(|e| AppError::serialization(e.to_string()))
    }

    /// 登录
    pub async fn sign_in(&self, username: &str, password: &str) -> AppResult<UserCredential> {
        self.post_credentials("/v1/sessions", username, password)
            .await
    }

    /// 注册新账户
    pub async fn sign_up(&self, username: &str, password: &str) -> AppResult<UserCredential> {
        self.post_credentials("/v1/accounts", username, password)
            .await
    }
}

impl Default for IdentityApi {
    fn default() -> Self {
        Self::new(IDENTITY_BASE_URL)
    }
}

#[async_trait(?Send)]
impl IdentityProvider for IdentityApi {
    async fn sign_in(&self, username: &str, password: &str) -> AppResult<UserCredential> {
        IdentityApi::sign_in(self, username, password).await
    }

    async fn sign_up(&self, username: &str, password: &str) -> AppResult<UserCredential> {
        IdentityApi::sign_up(self, username, password).await
    }
}
