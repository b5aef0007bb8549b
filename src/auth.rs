//! 认证模块
//!
//! 管理进程内的会话状态，与路由系统解耦。
//! 路由服务通过注入的会话信号来检查认证状态。
//! 会话绝不持久化：进程重启即回到未认证态；
//! 引导完成标记与会话互相独立（登出不清除引导标记）。

use crate::api::{IdentityApi, UserCredential};
use crate::error::AppResult;
use crate::flow::{AuthFlow, SessionStore};
use crate::onboarding::StoredOnboarding;
use crate::web::LocalStorage;
use crate::web::router::RouterService;
use leptos::prelude::*;

const STORAGE_USERNAME_KEY: &str = "social_connect_username";

/// 会话状态
#[derive(Clone, Default)]
pub struct AuthState {
    /// 登录成功后持有的用户凭据（仅存内存）
    pub user: Option<UserCredential>,
    /// 是否已登录
    pub is_logged_in: bool,
    /// 是否正在加载
    pub is_loading: bool,
    /// 上次登录的用户名（用于表单自动填充）
    pub remembered_username: String,
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    /// 会话状态（只读）
    pub state: ReadSignal<AuthState>,
    /// 设置会话状态（写入）
    pub set_state: WriteSignal<AuthState>,
}

impl AuthContext {
    /// 创建新的认证上下文
    pub fn new() -> Self {
        let (state, set_state) = signal(AuthState::default());
        Self { state, set_state }
    }

    /// 获取登录状态信号（用于路由服务注入）
    pub fn is_logged_in_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_logged_in)
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 初始化会话状态
///
/// 从 LocalStorage 加载上次的用户名（方便输入），但不加载
/// 任何凭据，状态仍是未认证。
pub fn init_auth(ctx: &AuthContext) {
    ctx.set_state.update(|state| {
        state.is_loading = false;
        if let Some(username) = LocalStorage::get(STORAGE_USERNAME_KEY) {
            state.remembered_username = username;
        }
    });
}

impl SessionStore for AuthContext {
    fn store(&self, credential: UserCredential) {
        // 只记住用户名方便下次自动填充，绝不保存密码
        LocalStorage::set(STORAGE_USERNAME_KEY, &credential.username);

        self.set_state.update(|state| {
            state.remembered_username = credential.username.clone();
            state.user = Some(credential);
            state.is_logged_in = true;
        });
    }

    fn clear(&self) {
        self.set_state.update(|state| {
            state.user = None;
            state.is_logged_in = false;
            // 保留用户名方便下次登录
        });
    }
}

/// 登录
///
/// 成功后流程逻辑先写入会话、再按引导状态路由；
/// 失败时返回不透明原因，交由登录页展示。
pub async fn login(
    ctx: &AuthContext,
    router: &RouterService,
    username: &str,
    password: &str,
) -> AppResult<()> {
    let api = IdentityApi::default();
    AuthFlow::new(&api, ctx, &StoredOnboarding, router)
        .sign_in(username, password)
        .await
}

/// 注册
///
/// 两次密码不一致时本地即失败（不调用身份提供方）。
/// 成功后不建立会话，由登录页展示确认信息。
pub async fn signup(
    ctx: &AuthContext,
    router: &RouterService,
    username: &str,
    password: &str,
    confirm: &str,
) -> AppResult<()> {
    let api = IdentityApi::default();
    AuthFlow::new(&api, ctx, &StoredOnboarding, router)
        .sign_up(username, password, confirm)
        .await
}

/// 引导完成动作
///
/// 先持久化引导标记，成功后才跳转主界面；写入失败时
/// 返回错误且不导航，由轮播页呈现并提供重试。
pub fn finish_onboarding(ctx: &AuthContext, router: &RouterService) -> AppResult<()> {
    let api = IdentityApi::default();
    AuthFlow::new(&api, ctx, &StoredOnboarding, router).finish_onboarding()
}

/// 登出并清除会话
///
/// 清除会话即吊销全部已认证路由；引导标记保持不变。
pub fn logout(ctx: &AuthContext, router: &RouterService) {
    let api = IdentityApi::default();
    AuthFlow::new(&api, ctx, &StoredOnboarding, router).sign_out();
}
