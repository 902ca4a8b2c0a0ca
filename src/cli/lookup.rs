// ============================================================================
// LinguaX - CLI Lookup 命令
// ============================================================================
//
// 文件: src/cli/lookup.rs
// 职责: 译文查找命令的 CLI 接口层
// 边界:
//   - ✅ 命令行参数定义和解析
//   - ✅ 调用核心目录执行查找
//   - ✅ 查找结果输出
//   - ✅ 用户交互和提示信息
//   - ❌ 不应包含查找算法逻辑
//   - ❌ 不应包含占位符替换逻辑
//   - ❌ 不应包含复数规则逻辑
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::core::catalog::TranslationCatalog;
use crate::core::plural::PluralRule;
use crate::core::template;
use crate::models::config::Config;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 查找单条译文
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// 上下文名称（通常是类名）
    pub context: String,

    /// 源语言文本
    pub source: String,

    /// 目录文件路径（默认使用配置中的 default_file）
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// 消歧注释（区分同源文的不同条目）
    #[arg(long)]
    pub comment: Option<String>,

    /// 复数数量（触发 numerusform 解析）
    #[arg(short = 'n', long)]
    pub count: Option<u64>,

    /// 位置参数，依次替换 %1、%2 等占位符（可重复）
    #[arg(short = 'a', long = "arg")]
    pub args: Vec<String>,

    /// 覆盖从语言属性推导的复数规则 (one, two-en, two-fr, three-slavic)
    #[arg(long)]
    pub plural_rule: Option<String>,
}

pub fn handle_lookup(args: LookupArgs) -> Result<()> {
    let verbose = Config::get_verbose();

    let file = resolve_catalog_file(&args)?;
    if verbose {
        Logger::info(tf!("lookup.file", file.display()));
    }

    let mut catalog =
        TranslationCatalog::load(&file)?.with_unfinished_policy(Config::get_unfinished_policy());
    if let Some(rule) = &args.plural_rule {
        catalog = catalog.with_plural_rule(parse_plural_rule(rule)?);
    }

    if verbose && catalog.catalog().context(&args.context).is_none() {
        Logger::warn(tf!("lookup.context_missing", args.context));
    }

    let resolved = match args.count {
        Some(count) => catalog.resolve_plural(&args.context, &args.source, count),
        None => catalog
            .lookup(&args.context, &args.source, args.comment.as_deref())
            .to_string(),
    };

    let positional: Vec<&str> = args.args.iter().map(String::as_str).collect();
    let rendered = template::format(&resolved, &positional);

    if verbose {
        Logger::info(format!(
            "{} {} {} {}",
            icons::LOOKUP,
            args.context,
            icons::ARROW,
            args.source
        ));
    }
    println!("{}", rendered);

    Ok(())
}

/// 确定目录文件：命令行参数优先，其次是配置文件
fn resolve_catalog_file(args: &LookupArgs) -> Result<PathBuf> {
    if let Some(file) = &args.file {
        return Ok(file.clone());
    }
    match Config::get_default_file() {
        Some(file) => Ok(file),
        None => anyhow::bail!(t!("error.no_catalog_file_specified")),
    }
}

/// 解析命令行的复数规则名称
fn parse_plural_rule(name: &str) -> Result<PluralRule> {
    match name {
        "one" => Ok(PluralRule::OneForm),
        "two-en" => Ok(PluralRule::TwoFormsEnglish),
        "two-fr" => Ok(PluralRule::TwoFormsFrench),
        "three-slavic" => Ok(PluralRule::ThreeFormsSlavic),
        other => anyhow::bail!(tf!("error.unknown_plural_rule", other)),
    }
}
