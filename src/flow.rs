//! 会话/引导门控流程逻辑
//!
//! 特点：
//! 1. 纯 Rust 实现，不依赖 leptos、web_sys 或任何 DOM 环境。
//! 2. 高内聚：只关注登录、注册、引导完成、登出四个动作的
//!    状态变更与导航顺序。
//! 3. 易测试：协作方（身份提供方、会话、引导标记、路由）
//!    全部以 trait 注入，可用 Mock 记录调用序列验证时序。
//!
//! 时序约束（由调用顺序保证，无锁）：
//! - 登录成功必须先写入会话状态，再发出导航调用；
//! - 引导完成必须先持久化标记，写入失败则不得导航。

use async_trait::async_trait;

use crate::api::UserCredential;
use crate::error::{AppError, AppResult};
use crate::web::route::{AppRoute, ScreenGroup};

// =========================================================
// 协作方 Trait
// =========================================================

/// 身份提供方（外部服务，不透明）
#[async_trait(?Send)]
pub trait IdentityProvider {
    async fn sign_in(&self, username: &str, password: &str) -> AppResult<UserCredential>;
    async fn sign_up(&self, username: &str, password: &str) -> AppResult<UserCredential>;
}

/// 会话状态存储（进程内，不持久化）
///
/// 写入不会失败；进程重启即清零。
pub trait SessionStore {
    fn store(&self, credential: UserCredential);
    fn clear(&self);
}

/// 引导完成标记存储（持久化）
pub trait OnboardingStore {
    fn is_complete(&self) -> bool;
    fn mark_complete(&self) -> AppResult<()>;
}

/// 导航接收方
pub trait RouteSink {
    /// 以替换方式跳转（不产生历史记录）
    fn replace(&self, route: AppRoute);
}

// =========================================================
// 流程控制器
// =========================================================

/// 门控流程控制器
///
/// 泛型注入四个协作方；UI 层在事件回调中构造并调用。
pub struct AuthFlow<'a, P, S, O, N>
where
    P: IdentityProvider,
    S: SessionStore,
    O: OnboardingStore,
    N: RouteSink,
{
    provider: &'a P,
    session: &'a S,
    onboarding: &'a O,
    nav: &'a N,
}

impl<'a, P, S, O, N> AuthFlow<'a, P, S, O, N>
where
    P: IdentityProvider,
    S: SessionStore,
    O: OnboardingStore,
    N: RouteSink,
{
    pub fn new(provider: &'a P, session: &'a S, onboarding: &'a O, nav: &'a N) -> Self {
        Self {
            provider,
            session,
            onboarding,
            nav,
        }
    }

    /// 登录
    ///
    /// 成功路径：身份提供方放行 -> 写入会话 -> 按守卫函数
    /// 选择入口路由（引导完成与否决定进入轮播还是主界面）。
    /// 失败路径：原样返回不透明原因，不触碰会话，不导航。
    pub async fn sign_in(&self, username: &str, password: &str) -> AppResult<()> {
        let credential = self.provider.sign_in(username, password).await?;

        // 先更新状态，再发导航：守卫重新求值时必须读到新会话
        self.session.store(credential);

        let next = ScreenGroup::for_state(true, self.onboarding.is_complete()).entry_route();
        self.nav.replace(next);
        Ok(())
    }

    /// 注册新账户
    ///
    /// 两次密码不一致在本地即判失败，对身份提供方零调用。
    /// 注册成功不建立会话：用户回到登录页自行登录
    /// （状态机只在登录成功时离开未认证态）。
    pub async fn sign_up(&self, username: &str, password: &str, confirm: &str) -> AppResult<()> {
        if password != confirm {
            return Err(AppError::auth("Passwords do not match!"));
        }

        self.provider.sign_up(username, password).await?;
        Ok(())
    }

    /// 引导完成动作
    ///
    /// 持久化标记成功后才允许跳转到主界面；写入失败时
    /// 保持标记与导航一致（都不变），错误交由界面呈现。
    pub fn finish_onboarding(&self) -> AppResult<()> {
        self.onboarding.mark_complete()?;
        self.nav.replace(ScreenGroup::Main.entry_route());
        Ok(())
    }

    /// 登出
    ///
    /// 清除会话即同时吊销两个已认证屏幕组的可达性；
    /// 引导标记保持不变（跨登出持久）。
    pub fn sign_out(&self) {
        self.session.clear();
        self.nav.replace(ScreenGroup::PreAuth.entry_route());
    }
}

#[cfg(test)]
mod tests;
