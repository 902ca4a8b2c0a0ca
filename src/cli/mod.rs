// ============================================================================
// LinguaX - CLI 模块
// ============================================================================
//
// 文件: src/cli/mod.rs
// 职责: CLI 命令行接口模块入口和路由
// 边界:
//   - ✅ CLI 结构定义和命令枚举
//   - ✅ 命令行参数解析配置
//   - ✅ 命令路由分发
//   - ✅ 子模块导出
//   - ❌ 不应包含具体命令实现逻辑
//   - ❌ 不应包含业务逻辑处理
//   - ❌ 不应包含数据模型定义
//
// ============================================================================

pub mod check;
pub mod init;
pub mod lookup;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::models::config::{Config, RuntimeArgs, UnfinishedPolicy};
use check::{handle_check, CheckArgs};
use init::{handle_init, InitArgs};
use lookup::{handle_lookup, LookupArgs};
use stats::{handle_stats, StatsArgs};

/// LinguaX - Lightweight Qt Linguist catalog tool
#[derive(Debug, Parser)]
#[command(name = "linguax")]
#[command(about = "Lightweight Qt Linguist translation catalog tool based on Rust")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Global verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Interface language (zh_cn, en_us)
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Catalog root directory
    #[arg(short = 'C', long, global = true)]
    pub catalog_root: Option<String>,

    /// Unfinished entry policy (source, translation)
    #[arg(long, global = true)]
    pub unfinished_policy: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Commands
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check catalog files for consistency issues
    Check(CheckArgs),
    /// Show translation completion statistics
    Stats(StatsArgs),
    /// Look up a single translation
    Lookup(LookupArgs),
    /// Initialize configuration file
    Init(InitArgs),
}

pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Build runtime args to override config
    let runtime_args = build_runtime_args(&cli)?;
    // Merge runtime args to global config
    Config::merge_runtime_args(runtime_args)?;

    match cli.command {
        Commands::Check(args) => handle_check(args),
        Commands::Stats(args) => handle_stats(args),
        Commands::Lookup(args) => handle_lookup(args),
        Commands::Init(args) => handle_init(args),
    }
}

/// Build runtime args from CLI arguments
fn build_runtime_args(cli: &Cli) -> Result<RuntimeArgs> {
    let unfinished_policy = match &cli.unfinished_policy {
        Some(raw) => Some(UnfinishedPolicy::parse(raw).map_err(|e| anyhow::anyhow!(e))?),
        None => None,
    };

    Ok(RuntimeArgs {
        verbose: if cli.verbose { Some(true) } else { None },
        colored: if cli.no_color { Some(false) } else { None },
        catalog_root: cli.catalog_root.clone(),
        unfinished_policy,
        language: cli.language.clone(),
    })
}
