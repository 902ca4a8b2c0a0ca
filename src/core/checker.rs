// ============================================================================
// LinguaX - 目录健康检查器
// ============================================================================
//
// 文件: src/core/checker.rs
// 职责: 翻译目录数据质量检查
// 边界:
//   - ✅ 重复键检查
//   - ✅ 空源文/空译文检查
//   - ✅ 复数形式完整性检查
//   - ✅ 占位符一致性检查
//   - ❌ 不应包含文件解析逻辑
//   - ❌ 不应包含查找回退策略
//   - ❌ 不应包含 CLI 相关逻辑
//   - ❌ 不应包含表格输出
//
// ============================================================================

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::core::plural::PluralRule;
use crate::core::template;
use crate::models::catalog::{Catalog, Message, TranslationStatus, TranslationValue};

/// 检查结果条目
#[derive(Debug, Clone, Serialize)]
pub struct CatalogIssue {
    /// 所属上下文
    pub context: String,
    /// 源文（检查对象的查找键）
    pub source: String,
    /// 问题种类
    pub kind: IssueKind,
    /// 问题说明
    pub detail: String,
}

/// 问题种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// 同一上下文内 (source, comment) 重复
    DuplicateKey,
    /// 源文为空
    EmptySource,
    /// 已完成条目译文为空
    EmptyTranslation,
    /// numerus 条目没有任何复数形式
    EmptyNumerus,
    /// numerus 标记与译文内容形态不一致
    NumerusMismatch,
    /// 源文占位符未出现在译文中
    PlaceholderMismatch,
}

impl IssueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::DuplicateKey => "duplicate_key",
            IssueKind::EmptySource => "empty_source",
            IssueKind::EmptyTranslation => "empty_translation",
            IssueKind::EmptyNumerus => "empty_numerus",
            IssueKind::NumerusMismatch => "numerus_mismatch",
            IssueKind::PlaceholderMismatch => "placeholder_mismatch",
        }
    }
}

/// 目录健康检查器
pub struct CatalogChecker {
    verbose: bool,
}

impl CatalogChecker {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 执行全部检查
    ///
    /// 检查只产出报告，不修改目录；退役条目（vanished/obsolete）
    /// 不参与占位符和空译文检查。
    pub fn check(&self, catalog: &Catalog) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        // 复数形式数量只能对有 language 属性的文件做比对
        let rule = catalog.language.as_deref().map(PluralRule::for_language);

        for context in &catalog.contexts {
            let mut seen: HashSet<(&str, Option<&str>)> = HashSet::new();

            for message in &context.messages {
                let key = (message.source.as_str(), message.comment.as_deref());
                if !seen.insert(key) {
                    issues.push(issue(
                        context.name.clone(),
                        message,
                        IssueKind::DuplicateKey,
                        match &message.comment {
                            Some(comment) => {
                                format!("duplicate (source, comment) pair, comment: {}", comment)
                            }
                            None => "duplicate source without disambiguating comment".to_string(),
                        },
                    ));
                }

                self.check_message(&context.name, message, rule, &mut issues);
            }
        }

        debug!(issues = issues.len(), "catalog check finished");
        issues
    }

    fn check_message(
        &self,
        context: &str,
        message: &Message,
        rule: Option<PluralRule>,
        issues: &mut Vec<CatalogIssue>,
    ) {
        if message.source.is_empty() {
            issues.push(issue(
                context.to_string(),
                message,
                IssueKind::EmptySource,
                "message has an empty <source>".to_string(),
            ));
        }

        let Some(translation) = &message.translation else {
            return;
        };
        if translation.status.is_retired() {
            return;
        }

        match &translation.value {
            TranslationValue::Numerus(forms) => {
                if !message.numerus {
                    issues.push(issue(
                        context.to_string(),
                        message,
                        IssueKind::NumerusMismatch,
                        "numerusform content on a message without numerus=\"yes\"".to_string(),
                    ));
                }
                if forms.is_empty() {
                    issues.push(issue(
                        context.to_string(),
                        message,
                        IssueKind::EmptyNumerus,
                        "numerus message carries no numerusform entries".to_string(),
                    ));
                }
                if translation.status == TranslationStatus::Finished {
                    // 运行时会钳制，但形式数量少于语言规则要求仍是数据缺陷
                    if let Some(rule) = rule {
                        if !forms.is_empty() && forms.len() < rule.form_count() {
                            issues.push(issue(
                                context.to_string(),
                                message,
                                IssueKind::NumerusMismatch,
                                format!(
                                    "{} numerusform(s) stored but the language rule expects {}",
                                    forms.len(),
                                    rule.form_count()
                                ),
                            ));
                        }
                    }
                    for (idx, form) in forms.iter().enumerate() {
                        self.check_placeholders(
                            context,
                            message,
                            form,
                            Some(idx),
                            issues,
                        );
                    }
                }
            }
            TranslationValue::Singular(text) => {
                if message.numerus {
                    issues.push(issue(
                        context.to_string(),
                        message,
                        IssueKind::EmptyNumerus,
                        "numerus=\"yes\" but translation has no numerusform entries".to_string(),
                    ));
                }
                if translation.status == TranslationStatus::Finished {
                    if text.is_empty() {
                        issues.push(issue(
                            context.to_string(),
                            message,
                            IssueKind::EmptyTranslation,
                            "finished message with an empty translation".to_string(),
                        ));
                    } else {
                        self.check_placeholders(context, message, text, None, issues);
                    }
                }
            }
        }
    }

    /// 源文出现的占位符必须都出现在译文里；
    /// 译文多出的占位符不算错（译者可能重复使用参数）
    fn check_placeholders(
        &self,
        context: &str,
        message: &Message,
        translated: &str,
        form_index: Option<usize>,
        issues: &mut Vec<CatalogIssue>,
    ) {
        if translated.is_empty() {
            return;
        }
        let expected = template::placeholders(&message.source);
        if expected.is_empty() {
            return;
        }
        let actual = template::placeholders(translated);
        let missing: Vec<&str> = expected
            .iter()
            .filter(|p| !actual.contains(p))
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            let detail = match form_index {
                Some(idx) => format!(
                    "numerusform {} is missing placeholder(s): {}",
                    idx,
                    missing.join(", ")
                ),
                None => format!("translation is missing placeholder(s): {}", missing.join(", ")),
            };
            issues.push(issue(
                context.to_string(),
                message,
                IssueKind::PlaceholderMismatch,
                detail,
            ));
        }
    }
}

impl Default for CatalogChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn issue(context: String, message: &Message, kind: IssueKind, detail: String) -> CatalogIssue {
    CatalogIssue {
        context,
        source: message.source.clone(),
        kind,
        detail,
    }
}
