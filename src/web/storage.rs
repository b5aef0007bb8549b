//! LocalStorage 封装模块
//!
//! 基于 `web_sys::Storage` 的轻量封装。应用的持久化状态
//! （引导完成标记、记住的用户名）都经由此模块读写。

/// 本地存储操作封装
///
/// 所有方法均为静态方法；每次调用都直接命中浏览器存储，
/// 不做任何内存缓存。
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    /// 读取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误
    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// 写入存储值
    ///
    /// # 返回
    /// - `true` 写入成功
    /// - `false` 写入失败（存储不可用、配额耗尽等）；
    ///   调用方负责将失败映射为 `AppError::storage`
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }
}
