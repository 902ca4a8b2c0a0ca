// ============================================================================
// LinguaX - 常量定义
// ============================================================================
//
// 文件: src/utils/constants.rs
// 职责: 应用程序常量和图标定义
// 边界:
//   - ✅ 应用程序常量定义
//   - ✅ 像素图标字符定义
//   - ❌ 不应包含动态配置
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含计算逻辑
//   - ❌ 不应包含文件路径处理
//
// ============================================================================

/// 应用名称常量
pub const APP_NAME: &str = "LINGUAX";

/// TS 文件扩展名
pub const TS_EXTENSION: &str = "ts";

/// 像素风格图标
pub mod icons {
    /// 成功图标
    pub const SUCCESS: &str = "✓";
    /// 错误图标
    pub const ERROR: &str = "✗";
    /// 警告图标
    pub const WARNING: &str = "!";
    /// 信息图标
    pub const INFO: &str = "i";
    /// 目录图标
    pub const CATALOG: &str = "●";
    /// 上下文图标
    pub const CONTEXT: &str = "▪";
    /// 消息图标
    pub const MESSAGE: &str = "◦";
    /// 检查图标
    pub const CHECK: &str = "◆";
    /// 统计图标
    pub const STATS: &str = "◇";
    /// 查找图标
    pub const LOOKUP: &str = "▸";
    /// 复数图标
    pub const NUMERUS: &str = "≡";
    /// 时间图标
    pub const TIME: &str = "⧖";
    /// 箭头图标
    pub const ARROW: &str = "→";
}
