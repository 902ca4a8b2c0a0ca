// ============================================================================
// LinguaX - 库入口
// ============================================================================
//
// 文件: src/lib.rs
// 职责: 库级模块声明和公共 API 导出
// 边界:
//   - ✅ 模块声明
//   - ✅ 常用类型再导出
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含 CLI 启动逻辑
//
// ============================================================================

pub mod cli;
pub mod core;
pub mod i18n;
pub mod models;
pub mod ui;
pub mod utils;

pub use crate::core::catalog::{CatalogStore, TranslationCatalog};
pub use crate::core::parser::{self, CatalogError};
pub use crate::core::plural::PluralRule;
pub use crate::core::template;
pub use models::catalog::{
    Catalog, Context, Message, Translation, TranslationStatus, TranslationValue,
};
pub use models::config::UnfinishedPolicy;
