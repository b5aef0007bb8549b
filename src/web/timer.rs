//! 定时器封装模块
//!
//! 封装 `setInterval` / `clearInterval`。引导轮播的自动前进
//! 由此驱动：在进入页面时创建，在每一条退出路径上都必须取消，
//! 否则残留的回调会在页面卸载后继续修改状态。

use wasm_bindgen::prelude::*;

/// 周期性定时器
///
/// `Interval` 被 drop 时自动清除底层定时器；也可以通过
/// [`Interval::cancel`] 在回调内部提前取消（取消是幂等的，
/// 不会释放闭包，因此在自身回调中调用是安全的）。
pub struct Interval {
    handle: i32,
    #[allow(dead_code)]
    closure: Closure<dyn Fn()>,
}

impl Interval {
    /// 创建新的周期性定时器
    ///
    /// # 参数
    /// - `millis`: 间隔时间（毫秒）
    /// - `callback`: 每次间隔触发的回调函数
    ///
    /// # Panics
    /// 如果无法获取 window 对象或设置定时器失败
    pub fn new<F>(millis: u32, callback: F) -> Self
    where
        F: Fn() + 'static,
    {
        let closure = Closure::new(callback);
        let window = web_sys::window().expect("无法获取 window 对象");

        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis as i32,
            )
            .expect("设置定时器失败");

        Self { handle, closure }
    }

    /// 取消定时器（幂等）
    ///
    /// drop 时会自动调用；在回调内部停止计时（例如最后一张
    /// 幻灯片完成时）也走这里。
    pub fn cancel(&self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.cancel();
    }
}
