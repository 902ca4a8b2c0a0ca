// ============================================================================
// LinguaX - 目录统计分析器
// ============================================================================
//
// 文件: src/core/analyzer.rs
// 职责: 翻译完成度统计和目录文件扫描
// 边界:
//   - ✅ 按上下文统计条目状态
//   - ✅ 整体完成度计算
//   - ✅ 目录下 TS 文件扫描
//   - ✅ 统计结果数据结构定义
//   - ❌ 不应包含 XML 解析逻辑
//   - ❌ 不应包含检查规则
//   - ❌ 不应包含表格输出
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::models::catalog::{Catalog, TranslationStatus};
use crate::utils::constants::TS_EXTENSION;

/// 单个上下文的统计
#[derive(Debug, Clone, Serialize)]
pub struct ContextStats {
    /// 上下文名称
    pub name: String,
    /// 条目总数
    pub total: usize,
    /// 已完成条目数
    pub finished: usize,
    /// 未完成条目数
    pub unfinished: usize,
    /// 退役条目数（vanished + obsolete）
    pub retired: usize,
    /// 复数条目数
    pub numerus: usize,
    /// 完成度百分比（退役条目不计入分母）
    pub completion_percent: f32,
}

/// 整个目录的统计结果
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStatistics {
    /// 目标语言
    pub language: Option<String>,
    /// 按上下文的明细
    pub contexts: Vec<ContextStats>,
    /// 上下文总数
    pub total_contexts: usize,
    /// 条目总数
    pub total_messages: usize,
    /// 已完成总数
    pub total_finished: usize,
    /// 未完成总数
    pub total_unfinished: usize,
    /// 退役总数
    pub total_retired: usize,
    /// 整体完成度百分比
    pub completion_percent: f32,
    /// 分析耗时（毫秒）
    pub analysis_duration_ms: u64,
}

/// 目录统计分析器
pub struct CatalogAnalyzer {
    verbose: bool,
}

impl CatalogAnalyzer {
    pub fn new() -> Self {
        Self { verbose: false }
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// 统计一个目录的翻译完成度
    pub fn analyze(&self, catalog: &Catalog) -> CatalogStatistics {
        let start = Instant::now();

        let contexts: Vec<ContextStats> = catalog
            .contexts
            .iter()
            .map(|context| {
                let mut stats = ContextStats {
                    name: context.name.clone(),
                    total: context.messages.len(),
                    finished: 0,
                    unfinished: 0,
                    retired: 0,
                    numerus: 0,
                    completion_percent: 0.0,
                };
                for message in &context.messages {
                    match message.status() {
                        TranslationStatus::Finished => stats.finished += 1,
                        TranslationStatus::Unfinished => stats.unfinished += 1,
                        TranslationStatus::Vanished | TranslationStatus::Obsolete => {
                            stats.retired += 1
                        }
                    }
                    if message.numerus {
                        stats.numerus += 1;
                    }
                }
                stats.completion_percent =
                    completion_percent(stats.finished, stats.finished + stats.unfinished);
                stats
            })
            .collect();

        let total_messages = contexts.iter().map(|c| c.total).sum();
        let total_finished = contexts.iter().map(|c| c.finished).sum();
        let total_unfinished = contexts.iter().map(|c| c.unfinished).sum();
        let total_retired = contexts.iter().map(|c| c.retired).sum();

        let stats = CatalogStatistics {
            language: catalog.language.clone(),
            total_contexts: contexts.len(),
            total_messages,
            total_finished,
            total_unfinished,
            total_retired,
            completion_percent: completion_percent(
                total_finished,
                total_finished + total_unfinished,
            ),
            contexts,
            analysis_duration_ms: start.elapsed().as_millis() as u64,
        };

        debug!(
            language = stats.language.as_deref().unwrap_or("?"),
            messages = stats.total_messages,
            percent = stats.completion_percent,
            "catalog analyzed"
        );
        stats
    }

    /// 扫描目录下的 TS 文件（跳过排除目录，结果排序保证输出稳定）
    pub fn scan_catalog_files(&self, root: &Path, ignore_dirs: &[String]) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| {
                let name = entry.file_name().to_string_lossy();
                !(entry.file_type().is_dir() && ignore_dirs.iter().any(|d| d == name.as_ref()))
            })
            .filter_map(Result::ok)
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry
                        .path()
                        .extension()
                        .map(|e| e == TS_EXTENSION)
                        .unwrap_or(false)
            })
            .map(|entry| entry.into_path())
            .collect();
        files.sort();
        files
    }
}

impl Default for CatalogAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// 完成度百分比；分母为 0 时记 100%
fn completion_percent(finished: usize, active: usize) -> f32 {
    if active == 0 {
        100.0
    } else {
        (finished as f32 / active as f32) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser;

    fn sample() -> Catalog {
        parser::parse_str(
            r#"<TS version="2.1" language="ceb">
            <context><name>AboutDialog</name>
            <message><source>About QOwnNotes</source><translation>Tungkul sa mga QOwnNotes</translation></message>
            <message><source>Close</source><translation type="unfinished">Close</translation></message>
            </context>
            <context><name>MainWindow</name>
            <message numerus="yes"><source>%n chars</source><translation>
            <numerusform>%n karakter</numerusform><numerusform>%n ka mga karakter</numerusform>
            </translation></message>
            <message><source>Night mode</source><translation type="vanished">x</translation></message>
            <message><source>Print</source><translation type="obsolete">y</translation></message>
            </context></TS>"#,
        )
        .unwrap()
    }

    #[test]
    fn per_context_counts() {
        let stats = CatalogAnalyzer::new().analyze(&sample());
        assert_eq!(stats.total_contexts, 2);

        let about = &stats.contexts[0];
        assert_eq!(about.name, "AboutDialog");
        assert_eq!(about.total, 2);
        assert_eq!(about.finished, 1);
        assert_eq!(about.unfinished, 1);
        assert!((about.completion_percent - 50.0).abs() < f32::EPSILON);

        let main = &stats.contexts[1];
        assert_eq!(main.finished, 1);
        assert_eq!(main.retired, 2);
        assert_eq!(main.numerus, 1);
        // 退役条目不拉低完成度
        assert!((main.completion_percent - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn overall_totals() {
        let stats = CatalogAnalyzer::new().analyze(&sample());
        assert_eq!(stats.language.as_deref(), Some("ceb"));
        assert_eq!(stats.total_messages, 5);
        assert_eq!(stats.total_finished, 2);
        assert_eq!(stats.total_unfinished, 1);
        assert_eq!(stats.total_retired, 2);
        assert!((stats.completion_percent - 100.0 * 2.0 / 3.0).abs() < 0.01);
    }

    #[test]
    fn empty_catalog_is_fully_complete() {
        let stats = CatalogAnalyzer::new().analyze(&Catalog::default());
        assert_eq!(stats.total_messages, 0);
        assert!((stats.completion_percent - 100.0).abs() < f32::EPSILON);
    }

    #[test]
    fn scan_finds_ts_files() {
        let dir = tempfile::tempdir().unwrap();
        let ignored = dir.path().join("build");
        std::fs::create_dir_all(&ignored).unwrap();
        std::fs::write(dir.path().join("app_ceb.ts"), "<TS/>").unwrap();
        std::fs::write(dir.path().join("notes.md"), "x").unwrap();
        std::fs::write(ignored.join("app_de.ts"), "<TS/>").unwrap();

        let files =
            CatalogAnalyzer::new().scan_catalog_files(dir.path(), &["build".to_string()]);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("app_ceb.ts"));
    }
}
