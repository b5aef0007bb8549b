//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、路由所属的屏幕组，以及核心守卫函数：
//! 由 (是否已登录, 引导是否完成) 两个状态轴映射出唯一可达的屏幕组。
//! 守卫求值无副作用，可以在没有 UI 环境的情况下单元测试。

use std::fmt::Display;

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录/注册页面 (默认路由)
    #[default]
    Login,
    /// 引导轮播（需要认证，且引导尚未完成）
    Onboarding,
    /// 动态信息流（需要认证 + 引导完成）
    Feed,
    /// 个人主页（需要认证 + 引导完成）
    Profile,
    /// 页面未找到
    NotFound,
}

/// 屏幕组枚举
///
/// 任意时刻恰好有一个组可达；组之间互斥。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenGroup {
    /// 未认证：仅登录/注册
    PreAuth,
    /// 已认证但引导未完成：仅引导轮播
    Onboarding,
    /// 已认证且引导完成：主界面（信息流、个人主页）
    Main,
}

impl ScreenGroup {
    /// **核心守卫函数**
    ///
    /// 由会话状态与引导完成状态计算唯一可达的屏幕组。
    /// 纯函数：求值不得修改任何一个状态轴。
    pub fn for_state(is_logged_in: bool, onboarding_complete: bool) -> Self {
        if !is_logged_in {
            ScreenGroup::PreAuth
        } else if onboarding_complete {
            ScreenGroup::Main
        } else {
            ScreenGroup::Onboarding
        }
    }

    /// 该组的入口路由（重定向目标）
    pub fn entry_route(&self) -> AppRoute {
        match self {
            ScreenGroup::PreAuth => AppRoute::Login,
            ScreenGroup::Onboarding => AppRoute::Onboarding,
            ScreenGroup::Main => AppRoute::Feed,
        }
    }
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" | "/login" => Self::Login,
            "/onboarding" => Self::Onboarding,
            "/private" => Self::Feed,
            "/private/profile" => Self::Profile,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Onboarding => "/onboarding",
            Self::Feed => "/private",
            Self::Profile => "/private/profile",
            Self::NotFound => "/404",
        }
    }

    /// 路由所属的屏幕组；`None` 表示不受守卫约束（404 页）
    pub fn group(&self) -> Option<ScreenGroup> {
        match self {
            Self::Login => Some(ScreenGroup::PreAuth),
            Self::Onboarding => Some(ScreenGroup::Onboarding),
            Self::Feed | Self::Profile => Some(ScreenGroup::Main),
            Self::NotFound => None,
        }
    }

    /// 守卫裁决：目标路由在当前可达组下是否放行
    ///
    /// # 返回
    /// - `None` 放行
    /// - `Some(route)` 拒绝，并给出应重定向到的入口路由
    ///
    /// 深链接也经过这里：未认证用户无法进入受保护路由，
    /// 已认证用户也无法退回登录页。
    pub fn redirect_for(&self, reachable: ScreenGroup) -> Option<AppRoute> {
        match self.group() {
            None => None,
            Some(group) if group == reachable => None,
            Some(_) => Some(reachable.entry_route()),
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}
