// ============================================================================
// LinguaX - 翻译目录数据模型
// ============================================================================
//
// 文件: src/models/catalog.rs
// 职责: Qt Linguist TS 翻译目录数据结构定义
// 边界:
//   - ✅ 目录/上下文/消息数据结构定义
//   - ✅ 翻译状态和复数形式表示
//   - ✅ 数据序列化支持
//   - ✅ 基础数据访问方法
//   - ❌ 不应包含 XML 解析逻辑
//   - ❌ 不应包含查找回退策略
//   - ❌ 不应包含复数规则算法
//   - ❌ 不应包含文件读写操作
//
// ============================================================================

use serde::Serialize;

/// 翻译条目状态
///
/// TS 文件中 `<translation type="...">` 缺省即为 Finished。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationStatus {
    /// 已完成，运行时直接使用
    Finished,
    /// 未完成，按策略回退到源文
    Unfinished,
    /// 源码中已消失（lupdate 标记）
    Vanished,
    /// 已废弃
    Obsolete,
}

impl TranslationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TranslationStatus::Finished => "finished",
            TranslationStatus::Unfinished => "unfinished",
            TranslationStatus::Vanished => "vanished",
            TranslationStatus::Obsolete => "obsolete",
        }
    }

    /// 从 type 属性解析；None 表示缺省（finished）
    pub fn from_attr(attr: Option<&str>) -> Option<Self> {
        match attr {
            None => Some(TranslationStatus::Finished),
            Some("unfinished") => Some(TranslationStatus::Unfinished),
            Some("vanished") => Some(TranslationStatus::Vanished),
            Some("obsolete") => Some(TranslationStatus::Obsolete),
            Some(_) => None,
        }
    }

    /// 序列化回 type 属性；finished 不写属性
    pub fn to_attr(&self) -> Option<&'static str> {
        match self {
            TranslationStatus::Finished => None,
            other => Some(other.as_str()),
        }
    }

    /// 该状态的译文是否已退役（查找时一律回退源文）
    pub fn is_retired(&self) -> bool {
        matches!(
            self,
            TranslationStatus::Vanished | TranslationStatus::Obsolete
        )
    }
}

/// 译文内容：单数形式或按复数类别排列的 numerusform 列表
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationValue {
    /// 普通译文
    Singular(String),
    /// 复数形式列表（numerus="yes"），按目标语言复数类别排序
    Numerus(Vec<String>),
}

impl TranslationValue {
    /// 译文是否为空（空字符串或空形式列表）
    pub fn is_empty(&self) -> bool {
        match self {
            TranslationValue::Singular(s) => s.is_empty(),
            TranslationValue::Numerus(forms) => forms.iter().all(|f| f.is_empty()),
        }
    }

    /// 单数视角的译文文本；numerus 条目取第一个形式
    pub fn singular_text(&self) -> Option<&str> {
        match self {
            TranslationValue::Singular(s) => Some(s.as_str()),
            TranslationValue::Numerus(forms) => forms.first().map(String::as_str),
        }
    }
}

/// 译文条目（状态 + 内容）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub status: TranslationStatus,
    pub value: TranslationValue,
}

/// 源码位置（provenance 信息，运行时查找不使用）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub filename: Option<String>,
    pub line: Option<u32>,
}

/// 单条翻译消息
#[derive(Debug, Clone, Default, Serialize)]
pub struct Message {
    /// 源语言文本（查找键）
    pub source: String,
    /// 消歧注释（参与查找键；同一上下文内 (source, comment) 唯一）
    pub comment: Option<String>,
    /// 开发者注释，仅供译者参考
    pub extracomment: Option<String>,
    /// 译者注释
    pub translatorcomment: Option<String>,
    /// 源码位置列表
    pub locations: Vec<Location>,
    /// 是否为复数条目（numerus="yes"）
    pub numerus: bool,
    /// 译文；缺失视为未完成空译文
    pub translation: Option<Translation>,
}

impl Message {
    /// 条目状态；无 translation 元素按 unfinished 处理
    pub fn status(&self) -> TranslationStatus {
        self.translation
            .as_ref()
            .map(|t| t.status)
            .unwrap_or(TranslationStatus::Unfinished)
    }
}

/// 翻译上下文（通常对应一个 UI 组件/类）
#[derive(Debug, Clone, Default, Serialize)]
pub struct Context {
    /// 上下文名称（如 "MainWindow"、"SettingsDialog"）
    pub name: String,
    /// 消息列表，保持文件顺序
    pub messages: Vec<Message>,
}

impl Context {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
        }
    }
}

/// 完整翻译目录（一个 TS 文件的内存表示）
#[derive(Debug, Clone, Default, Serialize)]
pub struct Catalog {
    /// TS 格式版本（如 "2.1"）
    pub version: Option<String>,
    /// 目标语言（如 "ceb"）
    pub language: Option<String>,
    /// 源语言（通常缺省为英语）
    pub source_language: Option<String>,
    /// 上下文列表，保持文件顺序
    pub contexts: Vec<Context>,
}

impl Catalog {
    /// 按名称查找上下文
    pub fn context(&self, name: &str) -> Option<&Context> {
        self.contexts.iter().find(|c| c.name == name)
    }

    /// 目录内消息总数
    pub fn message_count(&self) -> usize {
        self.contexts.iter().map(|c| c.messages.len()).sum()
    }
}
