//! 日志配置
//!
//! 编译期默认值，以及可在运行时快照/恢复的 [`Config`]。

use crate::priority::Priority;

bitflags::bitflags! {
    /// 消息头中显示的字段
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Header: u8 {
        /// 显示 `<code>/` 优先级段
        const PRIORITY = 1 << 0;
        /// 显示 `<tag>: ` 标签段
        const TAG = 1 << 1;
    }
}

/// 默认过滤器：全部输出
pub const DEFAULT_FILTER: Priority = Priority::Verbose;

/// 默认消息头：优先级与标签都显示
pub const DEFAULT_HEADER: Header = Header::all();

/// 新建的日志器默认处于启用状态
pub const DEFAULT_ENABLED: bool = true;

/// `println` 追加的行结束符
pub const LINE_ENDING: u8 = b'\n';

/// 优先级代码之后的分隔符
pub const HEADER_SEPARATOR: &str = "/";

/// 标签之后的分隔符
pub const TAG_SEPARATOR: &str = ": ";

/// 日志器的可变状态快照（不含输出端）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// 当前过滤器
    pub filter: Priority,
    /// 是否启用
    pub enabled: bool,
    /// 消息头显示字段
    pub header: Header,
}

impl Config {
    /// 使用编译期默认值创建配置
    pub const fn new() -> Self {
        Self {
            filter: DEFAULT_FILTER,
            enabled: DEFAULT_ENABLED,
            header: DEFAULT_HEADER,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
