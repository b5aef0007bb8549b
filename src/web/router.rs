//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。
//!
//! 守卫在每一条导航路径上统一执行：显式导航、浏览器
//! 前进/后退（popstate，含深链接）、登录/登出状态翻转。
//! 会话状态经注入的信号读取；引导完成标记经注入的读取
//! 函数在每次求值时直接命中持久化存储（无内存缓存）。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::{AppRoute, ScreenGroup};
use crate::flow::RouteSink;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入会话信号与引导标记读取函数实现与认证/引导
/// 系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 登录状态检查（注入的信号，实现解耦）
    is_logged_in: Signal<bool>,
    /// 引导完成标记读取（注入的函数；每次调用命中存储）
    onboarding_complete: fn() -> bool,
}

impl RouterService {
    /// 创建新的路由服务
    ///
    /// 初始路由同样经过守卫：深链接不能绕过认证。
    fn new(is_logged_in: Signal<bool>, onboarding_complete: fn() -> bool) -> Self {
        let path = current_path();
        let requested = AppRoute::from_path(&path);

        let reachable =
            ScreenGroup::for_state(is_logged_in.get_untracked(), onboarding_complete());
        let initial_route = match requested.redirect_for(reachable) {
            Some(redirect) => {
                replace_history_state(redirect.to_path());
                redirect
            }
            None => requested,
        };

        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_logged_in,
            onboarding_complete,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 当前唯一可达的屏幕组
    ///
    /// 求值无副作用：只读会话信号与持久化标记，不修改任何状态。
    fn reachable_group(&self) -> ScreenGroup {
        ScreenGroup::for_state(
            self.is_logged_in.get_untracked(),
            (self.onboarding_complete)(),
        )
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, path: &str) {
        let target_route = AppRoute::from_path(path);
        self.navigate_to_route(target_route, true);
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `use_push` - true 使用 pushState, false 使用 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        // --- Step 1: 验证目标路由 ---
        // 守卫裁决：目标不在可达组内则重定向到该组入口
        let resolved = match target_route.redirect_for(self.reachable_group()) {
            Some(redirect) => {
                web_sys::console::log_1(
                    &format!(
                        "[Router] Access denied for {}. Redirecting to {}.",
                        target_route, redirect
                    )
                    .into(),
                );
                redirect
            }
            None => target_route,
        };

        // --- Step 2: 加载页面 (更新状态) ---
        if use_push {
            push_history_state(resolved.to_path());
        } else {
            replace_history_state(resolved.to_path());
        }
        self.set_route.set(resolved);
    }

    /// 初始化浏览器后退/前进按钮监听
    ///
    /// popstate 时也执行守卫逻辑（地址栏深链接从这里进来）。
    fn init_popstate_listener(&self) {
        let set_route = self.set_route;
        let service = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let path = current_path();
            let target_route = AppRoute::from_path(&path);

            match target_route.redirect_for(service.reachable_group()) {
                Some(redirect) => {
                    // 阻止访问不可达屏幕组
                    replace_history_state(redirect.to_path());
                    set_route.set(redirect);
                }
                None => set_route.set(target_route),
            }
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置会话状态变化时的自动重定向
    ///
    /// 登录：若停留在登录页则送入可达组入口（引导或主界面）。
    /// 登出：若停留在受保护页面则送回登录页。
    fn setup_session_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let service = *self;

        Effect::new(move |_| {
            // 订阅登录状态；引导标记在求值时读存储即可
            let _ = service.is_logged_in.get();
            let route = current_route.get_untracked();

            if let Some(redirect) = route.redirect_for(service.reachable_group()) {
                push_history_state(redirect.to_path());
                set_route.set(redirect);
                web_sys::console::log_1(
                    &format!(
                        "[Router] Session state changed, redirecting {} -> {}.",
                        route, redirect
                    )
                    .into(),
                );
            }
        });
    }
}

impl RouteSink for RouterService {
    /// 以替换方式跳转；流程逻辑保证状态已先行更新
    fn replace(&self, route: AppRoute) {
        self.navigate_to_route(route, false);
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_logged_in: Signal<bool>, onboarding_complete: fn() -> bool) -> RouterService {
    let router = RouterService::new(is_logged_in, onboarding_complete);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_session_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

/// 导航函数（返回一个可调用的闭包）
pub fn use_navigate() -> impl Fn(&str) + Clone {
    let router = use_router();
    move |to: &str| {
        router.navigate(to);
    }
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 登录状态信号
    is_logged_in: Signal<bool>,
    /// 引导完成标记读取函数
    onboarding_complete: fn() -> bool,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(is_logged_in, onboarding_complete);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
