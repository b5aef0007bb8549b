//! 引导（Onboarding）模块
//!
//! 两部分组成：
//! - 持久化的引导完成标记：固定键写入 LocalStorage，一旦置为
//!   完成就不再由本系统清除；登录/登出不影响它。
//! - 轮播状态机 [`CarouselState`]：纯逻辑，驱动定时自动前进，
//!   与 UI 和定时器资源完全解耦，可直接单元测试。

use crate::error::{AppError, AppResult};
use crate::flow::OnboardingStore;
use crate::web::LocalStorage;

/// 引导完成标记的存储键（固定，唯一写入方是完成动作）
pub const STORAGE_ONBOARDING_KEY: &str = "social_connect_onboarding_complete";

/// 幻灯片数量
pub const SLIDE_COUNT: usize = 3;

/// 每张幻灯片的停留秒数
pub const SLIDE_SECS: u32 = 10;

/// 读取引导完成标记；键不存在视为未完成
///
/// 每次调用都直接命中存储，守卫求值因此不存在跨组件的
/// 脏读问题（代价是每次求值多一次读取）。
pub fn is_complete() -> bool {
    LocalStorage::get(STORAGE_ONBOARDING_KEY).as_deref() == Some("true")
}

/// 持久化引导完成标记
///
/// 写入失败时返回 `Err`；调用方必须阻止向主界面的跳转，
/// 保持标记与导航状态一致。
pub fn mark_complete() -> AppResult<()> {
    if LocalStorage::set(STORAGE_ONBOARDING_KEY, "true") {
        Ok(())
    } else {
        Err(AppError::storage("Failed to save onboarding status"))
    }
}

/// 基于 LocalStorage 的引导标记存储（供流程逻辑注入）
pub struct StoredOnboarding;

impl OnboardingStore for StoredOnboarding {
    fn is_complete(&self) -> bool {
        is_complete()
    }

    fn mark_complete(&self) -> AppResult<()> {
        mark_complete()
    }
}

// =========================================================
// 轮播状态机
// =========================================================

/// 一次定时 tick 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// 当前幻灯片继续倒计时
    Counting,
    /// 已前进到下一张，倒计时重置
    Advanced,
    /// 最后一张幻灯片倒计时结束；调用方应停止定时器并执行
    /// 完成动作。整个生命周期内恰好返回一次。
    Finished,
    /// 完成之后的滞留 tick，不改变任何状态
    Idle,
}

/// 轮播进度状态
///
/// 不变量：`current_index` 始终处于 `[0, slide_count - 1]`。
/// 本构建为定时驱动（不提供手势翻页），每秒一次
/// [`CarouselState::tick`]。
#[derive(Debug, Clone)]
pub struct CarouselState {
    slide_count: usize,
    slide_secs: u32,
    current_index: usize,
    seconds_remaining: u32,
    finished: bool,
}

impl CarouselState {
    /// 创建新的轮播状态，从第一张幻灯片满倒计时开始
    ///
    /// # Panics
    /// `slide_count` 为 0 或 `slide_secs` 为 0 时
    pub fn new(slide_count: usize, slide_secs: u32) -> Self {
        assert!(slide_count > 0, "轮播至少需要一张幻灯片");
        assert!(slide_secs > 0, "幻灯片停留时间必须大于零");
        Self {
            slide_count,
            slide_secs,
            current_index: 0,
            seconds_remaining: slide_secs,
            finished: false,
        }
    }

    /// 当前幻灯片下标
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 当前幻灯片剩余秒数（用于 UI 倒计时文案）
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    /// 推进一秒
    ///
    /// 倒计时归零时：未到最后一张则前进并重置倒计时；
    /// 已是最后一张则返回 [`Tick::Finished`]（仅此一次），
    /// 之后的 tick 均为 [`Tick::Idle`]。
    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Idle;
        }

        if self.seconds_remaining > 1 {
            self.seconds_remaining -= 1;
            return Tick::Counting;
        }

        if self.current_index < self.slide_count - 1 {
            self.current_index += 1;
            self.seconds_remaining = self.slide_secs;
            Tick::Advanced
        } else {
            self.finished = true;
            self.seconds_remaining = 0;
            Tick::Finished
        }
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(SLIDE_COUNT, SLIDE_SECS)
    }
}

#[cfg(test)]
mod tests;
