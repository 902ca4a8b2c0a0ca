// ============================================================================
// LinguaX - CLI Check 命令
// ============================================================================
//
// 文件: src/cli/check.rs
// 职责: 目录检查命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用核心检查器执行检查
//   - ✅ 检查结果格式化输出
//   - ✅ 用户交互和提示信息
//   - ❌ 不应包含具体检查逻辑
//   - ❌ 不应包含 TS 解析逻辑
//   - ❌ 不应包含规则定义
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::core::analyzer::CatalogAnalyzer;
use crate::core::checker::CatalogChecker;
use crate::core::parser;
use crate::models::config::Config;
use crate::ui::summary;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 检查翻译目录健康状态
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// 要检查的 .ts 文件（留空则扫描目录根）
    pub paths: Vec<PathBuf>,

    /// 输出格式 (table, json)
    #[arg(short = 'f', long, default_value = "table")]
    pub format: String,

    /// 显示详细信息
    #[arg(short = 'd', long)]
    pub detail: bool,
}

pub fn handle_check(args: CheckArgs) -> Result<()> {
    Logger::info(t!("cli.check.start"));

    let verbose = Config::get_verbose();
    let files = resolve_catalog_files(&args.paths)?;

    let checker = CatalogChecker::new().with_verbose(verbose);
    let mut has_issues = false;

    for file in &files {
        has_issues |= check_single_file(&checker, file, verbose, &args)?;
    }

    if has_issues {
        std::process::exit(1);
    } else {
        Logger::success(t!("check.all_good"));
    }

    Ok(())
}

/// 确定要检查的文件列表
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

/// 检查单个目录文件
fn check_single_file(
    checker: &CatalogChecker,
    file: &PathBuf,
    verbose: bool,
    args: &CheckArgs,
) -> Result<bool> {
    if verbose {
        Logger::info(tf!("check.file.start", file.display()));
    }

    let catalog = match parser::load_file(file) {
        Ok(catalog) => catalog,
        Err(e) => {
            Logger::error(tf!("error.load_failed", file.display(), e));
            return Ok(true);
        }
    };

    let issues = checker.check(&catalog);
    if issues.is_empty() {
        Logger::success(tf!("check.file.clean", file.display()));
        return Ok(false);
    }

    Logger::error(tf!("check.file.found", issues.len(), file.display()));

    output_results(&args.format, &issues, args.detail, |issues, detail| {
        summary::print_issues_table(issues, detail)
    })?;

    Ok(true)
}

/// 通用结果输出函数
fn output_results<T, F>(format: &str, data: &T, detail: bool, print_table: F) -> Result<()>
where
    T: serde::Serialize + ?Sized,
    F: FnOnce(&T, bool) -> Result<()>,
{
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        "table" | _ => {
            print_table(data, detail)?;
        }
    }
    Ok(())
}
