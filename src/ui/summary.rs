// ============================================================================
// LinguaX - 结果汇总组件
// ============================================================================
//
// 文件: src/ui/summary.rs
// 职责: 检查与统计结果的表格显示
// 边界:
//   - ✅ 检查结果表格显示
//   - ✅ 统计信息格式化输出
//   - ✅ 国际化文本支持
//   - ❌ 不应包含具体业务逻辑
//   - ❌ 不应包含检查/统计算法
//   - ❌ 不应包含文件操作
//   - ❌ 不应包含数据处理逻辑
//
// ============================================================================

use anyhow::Result;

use crate::core::analyzer::CatalogStatistics;
use crate::core::checker::CatalogIssue;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::utils::styles::TextStyles;
use crate::{t, tf};

/// 渲染检查结果表格
pub fn print_issues_table(issues: &[CatalogIssue], detail: bool) -> Result<()> {
    Logger::info(format!(
        "\n{} {}",
        icons::CHECK,
        TextStyles::bold(&t!("output.check_result"))
    ));
    Logger::info("═══════════════════════════════════════");

    for issue in issues {
        Logger::info(format!(
            "{} [{}] {} {} {}",
            icons::ERROR,
            issue.kind.as_str(),
            issue.context,
            icons::ARROW,
            truncate(&issue.source, 48)
        ));
        if detail {
            Logger::info(format!("    {}", issue.detail));
        }
    }

    Logger::info(format!(
        "{} {}",
        icons::INFO,
        tf!("output.issue_total", issues.len())
    ));
    if !detail {
        Logger::info(format!("{} {}", icons::INFO, t!("output.usage_tip")));
    }

    Ok(())
}

/// 渲染统计结果表格
pub fn print_statistics_table(stats: &CatalogStatistics, detail: bool) -> Result<()> {
    Logger::info(format!(
        "\n{} {}",
        icons::STATS,
        TextStyles::bold(&t!("output.stats_result"))
    ));
    Logger::info("═══════════════════════════════════════");

    if let Some(language) = &stats.language {
        Logger::info(format!(
            "{} {}",
            icons::CATALOG,
            tf!("output.language", language)
        ));
    }
    Logger::info(format!(
        "{} {}",
        icons::CONTEXT,
        tf!("output.total_contexts", stats.total_contexts)
    ));
    Logger::info(format!(
        "{} {}",
        icons::MESSAGE,
        tf!("output.total_messages", stats.total_messages)
    ));
    Logger::info(format!(
        "{} {}",
        icons::SUCCESS,
        tf!("output.finished", stats.total_finished)
    ));
    Logger::info(format!(
        "{} {}",
        icons::WARNING,
        tf!("output.unfinished", stats.total_unfinished)
    ));
    Logger::info(format!(
        "{} {}",
        icons::ERROR,
        tf!("output.retired", stats.total_retired)
    ));
    Logger::info(format!(
        "{} {}",
        icons::CATALOG,
        tf!("output.completion", format!("{:.1}", stats.completion_percent))
    ));
    Logger::info(format!(
        "{} {}",
        icons::TIME,
        tf!("output.duration", stats.analysis_duration_ms)
    ));

    // 按上下文明细（仅在详细模式下）
    if detail {
        Logger::info(format!(
            "\n{} {}",
            icons::CONTEXT,
            t!("output.context_breakdown")
        ));
        Logger::info("───────────────────────────────────────");
        for context in &stats.contexts {
            Logger::info(format!(
                "{} {} ({}/{}, {:.1}%)",
                icons::CONTEXT,
                context.name,
                context.finished,
                context.finished + context.unfinished,
                context.completion_percent
            ));
            if context.numerus > 0 {
                Logger::info(format!(
                    "    {} {}",
                    icons::NUMERUS,
                    tf!("output.numerus_messages", context.numerus)
                ));
            }
        }
    } else {
        Logger::info(format!("{} {}", icons::INFO, t!("output.usage_tip")));
    }

    Ok(())
}

/// 截断过长的源文，保持表格行可读
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{}…", cut)
    }
}
