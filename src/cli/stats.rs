// ============================================================================
// LinguaX - CLI Stats 命令
// ============================================================================
//
// 文件: src/cli/stats.rs
// 职责: 翻译统计命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用核心分析器执行统计
//   - ✅ 结果格式化输出（表格/JSON）
//   - ✅ 用户交互和提示信息
//   - ❌ 不应包含统计算法逻辑
//   - ❌ 不应包含 TS 解析逻辑
//   - ❌ 不应包含文件扫描算法
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::core::analyzer::{CatalogAnalyzer, CatalogStatistics};
use crate::core::parser;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 统计翻译完成度
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// 要统计的 .ts 文件（留空则扫描目录根）
    pub paths: Vec<PathBuf>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示按上下文的明细
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_stats(args: StatsArgs) -> Result<()> {
    Logger::info(t!("cli.stats.start"));

    let verbose = Config::get_verbose();
    let files = resolve_catalog_files(&args.paths)?;

    let analyzer = CatalogAnalyzer::new().with_verbose(verbose);
    let mut all_stats: Vec<CatalogStatistics> = Vec::with_capacity(files.len());

    for file in &files {
        if verbose {
            Logger::info(tf!("stats.file.start", file.display()));
        }
        let catalog = parser::load_file(file)
            .map_err(|e| anyhow::anyhow!(tf!("error.load_failed", file.display(), e)))?;
        all_stats.push(analyzer.analyze(&catalog));
    }

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&all_stats)?);
        }
        "table" | _ => {
            for (file, stats) in files.iter().zip(&all_stats) {
                Logger::info(tf!("stats.file.header", file.display()));
                summary::print_statistics_table(stats, args.detail)?;
            }
        }
    }

    Ok(())
}

/// 确定要统计的文件列表
fn resolve_catalog_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if !paths.is_empty() {
        return Ok(paths.to_vec());
    }

    let catalog_root = Config::get_catalog_root();
    if !catalog_root.exists() {
        anyhow::bail!(tf!("error.catalog_root_not_exist", catalog_root.display()));
    }

    let ignore_dirs = Config::get_ignore_dirs();
    let files = CatalogAnalyzer::new().scan_catalog_files(&catalog_root, &ignore_dirs);
    if files.is_empty() {
        anyhow::bail!(tf!("error.no_catalog_files", catalog_root.display()));
    }

    Ok(files)
}
