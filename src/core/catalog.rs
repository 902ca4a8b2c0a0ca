// ============================================================================
// LinguaX - 翻译目录查找
// ============================================================================
//
// 文件: src/core/catalog.rs
// 职责: 翻译查找、复数解析和目录原子切换
// 边界:
//   - ✅ (context, source, comment) 三元组查找
//   - ✅ 未完成/废弃条目回退策略
//   - ✅ 复数形式选择和 %n 替换
//   - ✅ 当前目录的原子替换（语言切换）
//   - ❌ 不应包含 XML 解析逻辑
//   - ❌ 不应包含检查规则
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含 UI 输出
//
// ============================================================================

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::core::parser::{self, CatalogError};
use crate::core::plural::PluralRule;
use crate::core::template;
use crate::models::catalog::{Catalog, Message, TranslationStatus};
use crate::models::config::UnfinishedPolicy;

/// 查找键：(上下文, 源文, 消歧注释)
type LookupKey = (String, String, Option<String>);

/// 不可变翻译目录
///
/// 加载后只读，`Send + Sync`，可在任意多个读者间无锁共享。
/// 查找永不失败：缺失或退役的条目一律降级为源语言文本。
#[derive(Debug, Clone)]
pub struct TranslationCatalog {
    catalog: Catalog,
    /// (context, source, comment) → 消息下标，加载时一次性建立
    index: HashMap<LookupKey, (usize, usize)>,
    rule: PluralRule,
    policy: UnfinishedPolicy,
}

impl TranslationCatalog {
    /// 从文件加载目录
    ///
    /// 复数规则按文件的 language 属性推导，可用
    /// `with_plural_rule` 覆盖。
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let catalog = parser::load_file(path)?;
        Ok(Self::from_catalog(catalog))
    }

    /// 从内存模型构建查找索引
    pub fn from_catalog(catalog: Catalog) -> Self {
        let rule = catalog
            .language
            .as_deref()
            .map(PluralRule::for_language)
            .unwrap_or(PluralRule::TwoFormsEnglish);

        let mut index = HashMap::with_capacity(catalog.message_count());
        for (ctx_idx, context) in catalog.contexts.iter().enumerate() {
            for (msg_idx, message) in context.messages.iter().enumerate() {
                let key = (
                    context.name.clone(),
                    message.source.clone(),
                    message.comment.clone(),
                );
                // 重复键保留首个条目，与 Qt 的首见优先一致
                if index.contains_key(&key) {
                    debug!(
                        context = %context.name,
                        source = %message.source,
                        "duplicate message key, keeping first entry"
                    );
                    continue;
                }
                index.insert(key, (ctx_idx, msg_idx));
            }
        }

        Self {
            catalog,
            index,
            rule,
            policy: UnfinishedPolicy::default(),
        }
    }

    /// 覆盖复数规则（规则不存储在 TS 文件里，由调用方注入）
    pub fn with_plural_rule(mut self, rule: PluralRule) -> Self {
        self.rule = rule;
        self
    }

    /// 覆盖未完成条目策略
    pub fn with_unfinished_policy(mut self, policy: UnfinishedPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// 目标语言标签
    pub fn language(&self) -> Option<&str> {
        self.catalog.language.as_deref()
    }

    /// 底层数据模型
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 生效的复数规则
    pub fn plural_rule(&self) -> PluralRule {
        self.rule
    }

    fn find(&self, context: &str, source: &str, comment: Option<&str>) -> Option<&Message> {
        let key = (
            context.to_string(),
            source.to_string(),
            comment.map(str::to_string),
        );
        self.index
            .get(&key)
            .map(|&(ctx_idx, msg_idx)| &self.catalog.contexts[ctx_idx].messages[msg_idx])
    }

    /// 查找译文
    ///
    /// - 已完成条目返回存储的译文（复数条目取第一形式）；
    /// - 未完成条目按策略处理，默认回退源文；
    /// - 退役条目、空译文、无匹配一律返回 source 原文。
    ///
    /// 对调用方来说缺译永远不是错误。
    pub fn lookup<'a>(
        &'a self,
        context: &str,
        source: &'a str,
        comment: Option<&str>,
    ) -> &'a str {
        let Some(message) = self.find(context, source, comment) else {
            return source;
        };
        self.translated_text(message).unwrap_or(source)
    }

    /// 提取一条消息的可用译文；不可用时返回 None（由调用方回退）
    fn translated_text<'a>(&'a self, message: &'a Message) -> Option<&'a str> {
        let translation = message.translation.as_ref()?;
        if translation.value.is_empty() || translation.status.is_retired() {
            return None;
        }
        match translation.status {
            TranslationStatus::Finished => translation.value.singular_text(),
            TranslationStatus::Unfinished => match self.policy {
                UnfinishedPolicy::Source => None,
                UnfinishedPolicy::Translation => translation.value.singular_text(),
            },
            _ => None,
        }
    }

    /// 复数解析
    ///
    /// 按目标语言复数规则把 count 映射到 numerusform 序号，
    /// 序号越界时钳制到最后一个形式；所选形式中的 `%n` 替换为
    /// count 的十进制表示。非复数条目或无匹配时对单数查找结果
    /// 做同样的 %n 替换。
    pub fn resolve_plural(&self, context: &str, source: &str, count: u64) -> String {
        let template = match self.find(context, source, None) {
            Some(message) => self
                .plural_form(message, count)
                .or_else(|| self.translated_text(message))
                .unwrap_or(source),
            None => source,
        };
        template::substitute_count(template, count)
    }

    /// 选择复数形式；数据与规则不匹配时钳制而不是失败
    fn plural_form<'a>(&'a self, message: &'a Message, count: u64) -> Option<&'a str> {
        use crate::models::catalog::TranslationValue;

        let translation = message.translation.as_ref()?;
        if translation.value.is_empty() || translation.status.is_retired() {
            return None;
        }
        if translation.status == TranslationStatus::Unfinished
            && self.policy == UnfinishedPolicy::Source
        {
            return None;
        }

        match &translation.value {
            TranslationValue::Numerus(forms) if !forms.is_empty() => {
                let index = self.rule.form_index(count).min(forms.len() - 1);
                Some(forms[index].as_str())
            }
            TranslationValue::Singular(text) => Some(text.as_str()),
            TranslationValue::Numerus(_) => None,
        }
    }

    /// 位置占位符替换（查找 + %1/%2 填充的便捷组合）
    pub fn format(&self, context: &str, source: &str, args: &[&str]) -> String {
        template::format(self.lookup(context, source, None), args)
    }
}

/// 当前目录持有者
///
/// 语言切换是 stop-the-world 替换：新目录完整构建后一次性
/// 换掉读者可见的引用，写锁只护住指针交换本身。读者拿到的
/// `Arc` 快照在切换后依旧有效，不存在半新半旧的可见状态。
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<TranslationCatalog>>,
}

impl CatalogStore {
    /// 用初始目录创建
    pub fn new(catalog: TranslationCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// 获取当前目录快照
    pub fn current(&self) -> Arc<TranslationCatalog> {
        self.current
            .read()
            .map(|guard| Arc::clone(&guard))
            .unwrap_or_else(|poisoned| Arc::clone(&poisoned.into_inner()))
    }

    /// 原子替换当前目录
    pub fn swap(&self, catalog: TranslationCatalog) {
        let replacement = Arc::new(catalog);
        match self.current.write() {
            Ok(mut guard) => *guard = replacement,
            Err(poisoned) => *poisoned.into_inner() = replacement,
        }
    }

    /// 从文件加载新目录并整体切换；加载失败时保持旧目录不变
    pub fn reload(&self, path: &Path) -> Result<(), CatalogError> {
        let catalog = TranslationCatalog::load(path)?;
        self.swap(catalog);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog::{Context, Translation, TranslationValue};

    fn message(
        source: &str,
        comment: Option<&str>,
        status: TranslationStatus,
        value: TranslationValue,
    ) -> Message {
        Message {
            source: source.into(),
            comment: comment.map(str::to_string),
            numerus: matches!(value, TranslationValue::Numerus(_)),
            translation: Some(Translation { status, value }),
            ..Default::default()
        }
    }

    fn cebuano_catalog() -> TranslationCatalog {
        let catalog = Catalog {
            version: Some("2.1".into()),
            language: Some("ceb".into()),
            source_language: None,
            contexts: vec![
                Context {
                    name: "AboutDialog".into(),
                    messages: vec![
                        message(
                            "About QOwnNotes",
                            None,
                            TranslationStatus::Finished,
                            TranslationValue::Singular("Tungkul sa mga QOwnNotes".into()),
                        ),
                        message(
                            "Copy",
                            Some("as noun"),
                            TranslationStatus::Finished,
                            TranslationValue::Singular("Kopya".into()),
                        ),
                        message(
                            "Copy",
                            None,
                            TranslationStatus::Finished,
                            TranslationValue::Singular("Kopyaha".into()),
                        ),
                    ],
                },
                Context {
                    name: "MainWindow".into(),
                    messages: vec![
                        message(
                            "%n chars",
                            None,
                            TranslationStatus::Finished,
                            TranslationValue::Numerus(vec![
                                "%n karakter".into(),
                                "%n ka mga karakter".into(),
                            ]),
                        ),
                        message(
                            "Print",
                            None,
                            TranslationStatus::Unfinished,
                            TranslationValue::Singular("Print".into()),
                        ),
                        message(
                            "Night mode",
                            None,
                            TranslationStatus::Vanished,
                            TranslationValue::Singular("Gabii nga paagi".into()),
                        ),
                        message(
                            "Welcome %1",
                            None,
                            TranslationStatus::Finished,
                            TranslationValue::Singular("Maayong pag-abot %1".into()),
                        ),
                        message(
                            "Tag",
                            None,
                            TranslationStatus::Unfinished,
                            TranslationValue::Singular("Etiketa".into()),
                        ),
                    ],
                },
            ],
        };
        TranslationCatalog::from_catalog(catalog)
    }

    #[test]
    fn lookup_finished_entry() {
        let catalog = cebuano_catalog();
        assert_eq!(
            catalog.lookup("AboutDialog", "About QOwnNotes", None),
            "Tungkul sa mga QOwnNotes"
        );
    }

    #[test]
    fn lookup_unknown_returns_source_unchanged() {
        let catalog = cebuano_catalog();
        assert_eq!(
            catalog.lookup("SomeContext", "Unknown string", None),
            "Unknown string"
        );
        // 上下文存在但源文不存在
        assert_eq!(catalog.lookup("AboutDialog", "Missing", None), "Missing");
    }

    #[test]
    fn lookup_comment_disambiguates() {
        let catalog = cebuano_catalog();
        assert_eq!(
            catalog.lookup("AboutDialog", "Copy", Some("as noun")),
            "Kopya"
        );
        assert_eq!(catalog.lookup("AboutDialog", "Copy", None), "Kopyaha");
        // 未登记的注释视为无匹配
        assert_eq!(
            catalog.lookup("AboutDialog", "Copy", Some("as adjective")),
            "Copy"
        );
    }

    #[test]
    fn unfinished_defaults_to_source() {
        let catalog = cebuano_catalog();
        // 观测数据中未完成条目的译文常与源文相同
        assert_eq!(catalog.lookup("MainWindow", "Print", None), "Print");
        // 即使存了不同译文，默认策略也回退源文
        assert_eq!(catalog.lookup("MainWindow", "Tag", None), "Tag");
    }

    #[test]
    fn unfinished_translation_policy_shows_stored_text() {
        let catalog = cebuano_catalog().with_unfinished_policy(UnfinishedPolicy::Translation);
        assert_eq!(catalog.lookup("MainWindow", "Tag", None), "Etiketa");
    }

    #[test]
    fn retired_entries_fall_back_to_source() {
        let catalog = cebuano_catalog();
        assert_eq!(catalog.lookup("MainWindow", "Night mode", None), "Night mode");
    }

    #[test]
    fn resolve_plural_cebuano_forms() {
        let catalog = cebuano_catalog();
        // ceb 规则：0 和 1 用第一形式
        assert_eq!(
            catalog.resolve_plural("MainWindow", "%n chars", 0),
            "0 karakter"
        );
        assert_eq!(
            catalog.resolve_plural("MainWindow", "%n chars", 1),
            "1 karakter"
        );
        assert_eq!(
            catalog.resolve_plural("MainWindow", "%n chars", 5),
            "5 ka mga karakter"
        );
        assert_eq!(
            catalog.resolve_plural("MainWindow", "%n chars", 1_000_000),
            "1000000 ka mga karakter"
        );
    }

    #[test]
    fn resolve_plural_identical_english_forms() {
        let catalog = TranslationCatalog::from_catalog(Catalog {
            language: Some("en".into()),
            contexts: vec![Context {
                name: "Editor".into(),
                messages: vec![message(
                    "%n chars",
                    None,
                    TranslationStatus::Finished,
                    TranslationValue::Numerus(vec!["%n chars".into(), "%n chars".into()]),
                )],
            }],
            ..Default::default()
        });
        assert_eq!(catalog.resolve_plural("Editor", "%n chars", 5), "5 chars");
    }

    #[test]
    fn resolve_plural_clamps_when_rule_exceeds_forms() {
        // 三形式俄语规则配上只有一个形式的数据：钳制到最后形式
        let catalog = TranslationCatalog::from_catalog(Catalog {
            language: Some("ru".into()),
            contexts: vec![Context {
                name: "Editor".into(),
                messages: vec![message(
                    "%n files",
                    None,
                    TranslationStatus::Finished,
                    TranslationValue::Numerus(vec!["%n файлов".into()]),
                )],
            }],
            ..Default::default()
        });
        for count in [0u64, 1, 3, 5, 21, 100] {
            let resolved = catalog.resolve_plural("Editor", "%n files", count);
            assert!(!resolved.is_empty());
            assert_eq!(resolved, format!("{} файлов", count));
        }
    }

    #[test]
    fn resolve_plural_missing_entry_substitutes_source() {
        let catalog = cebuano_catalog();
        assert_eq!(
            catalog.resolve_plural("MainWindow", "%n new notes", 3),
            "3 new notes"
        );
    }

    #[test]
    fn lookup_numerus_without_count_uses_first_form() {
        let catalog = cebuano_catalog();
        assert_eq!(
            catalog.lookup("MainWindow", "%n chars", None),
            "%n karakter"
        );
    }

    #[test]
    fn format_substitutes_positional_args() {
        let catalog = cebuano_catalog();
        assert_eq!(
            catalog.format("MainWindow", "Welcome %1", &["Alice"]),
            "Maayong pag-abot Alice"
        );
        // 无匹配时在源文上替换
        assert_eq!(
            catalog.format("MainWindow", "%1 saved", &["note.md"]),
            "note.md saved"
        );
    }

    #[test]
    fn explicit_rule_override() {
        let catalog = cebuano_catalog().with_plural_rule(PluralRule::TwoFormsEnglish);
        // 英语规则下 0 用复数形式
        assert_eq!(
            catalog.resolve_plural("MainWindow", "%n chars", 0),
            "0 ka mga karakter"
        );
    }

    #[test]
    fn store_swap_is_all_or_nothing() {
        use std::sync::atomic::{AtomicBool, Ordering};
        use std::thread;

        let store = Arc::new(CatalogStore::new(cebuano_catalog()));
        let stop = Arc::new(AtomicBool::new(false));

        let readers: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                let stop = Arc::clone(&stop);
                thread::spawn(move || {
                    while !stop.load(Ordering::Relaxed) {
                        let snapshot = store.current();
                        // 任一快照必须整体一致：要么旧目录（2 个上下文，
                        // AboutDialog 可查），要么新目录（1 个上下文）
                        let contexts = snapshot.catalog().contexts.len();
                        if contexts == 2 {
                            assert_eq!(
                                snapshot.lookup("AboutDialog", "About QOwnNotes", None),
                                "Tungkul sa mga QOwnNotes"
                            );
                        } else {
                            assert_eq!(contexts, 1);
                            assert_eq!(snapshot.language(), Some("en"));
                        }
                    }
                })
            })
            .collect();

        for _ in 0..100 {
            store.swap(TranslationCatalog::from_catalog(Catalog {
                language: Some("en".into()),
                contexts: vec![Context::new("Editor")],
                ..Default::default()
            }));
            store.swap(cebuano_catalog());
        }

        stop.store(true, Ordering::Relaxed);
        for reader in readers {
            reader.join().unwrap();
        }
    }

    #[test]
    fn duplicate_keys_keep_first_entry() {
        let catalog = TranslationCatalog::from_catalog(Catalog {
            contexts: vec![Context {
                name: "X".into(),
                messages: vec![
                    message(
                        "Save",
                        None,
                        TranslationStatus::Finished,
                        TranslationValue::Singular("first".into()),
                    ),
                    message(
                        "Save",
                        None,
                        TranslationStatus::Finished,
                        TranslationValue::Singular("second".into()),
                    ),
                ],
            }],
            ..Default::default()
        });
        assert_eq!(catalog.lookup("X", "Save", None), "first");
    }
}
