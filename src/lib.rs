//! Social Connect 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型，含守卫函数）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理
//! - `flow`: 门控流程逻辑（登录/注册/引导完成/登出的时序）
//! - `onboarding`: 引导标记与轮播状态机
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod feed;
    mod icons;
    pub mod login;
    pub mod onboarding;
    pub mod profile;
    mod slide_item;
}
mod error;
mod flow;
mod onboarding;

use crate::auth::{AuthContext, init_auth};
use crate::components::feed::FeedPage;
use crate::components::login::LoginPage;
use crate::components::onboarding::OnboardingPage;
use crate::components::profile::ProfilePage;

use leptos::prelude::*;

// 原生 Web API 封装模块
// 此模块提供对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate，
// 以减小 WASM 二进制体积。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;
    mod timer;

    pub use storage::LocalStorage;
    pub use timer::Interval;
}

use web::route::AppRoute;
use web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Onboarding => view! { <OnboardingPage /> }.into_any(),
        AppRoute::Feed => view! { <FeedPage /> }.into_any(),
        AppRoute::Profile => view! { <ProfilePage /> }.into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"Page not found"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建认证上下文
    let auth_ctx = AuthContext::new();
    provide_context(auth_ctx);

    // 2. 初始化会话状态（从 LocalStorage 加载记住的用户名）
    init_auth(&auth_ctx);

    // 3. 获取登录状态信号，用于注入路由服务（解耦！）
    let is_logged_in = auth_ctx.is_logged_in_signal();

    view! {
        // 4. 路由器组件：注入登录信号与引导标记读取，实现双轴守卫
        <Router is_logged_in=is_logged_in onboarding_complete=onboarding::is_complete>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
