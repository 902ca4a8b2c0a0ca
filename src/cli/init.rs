// ============================================================================
// LinguaX - 初始化命令处理
// ============================================================================
//
// 文件: src/cli/init.rs
// 职责: 处理配置文件初始化命令
// 边界:
//   - ✅ 初始化命令参数解析
//   - ✅ 扫描 .ts 文件并生成配置
//   - ✅ 配置文件存在性检查
//   - ✅ 用户交互和确认
//   - ❌ 不应包含配置文件格式定义
//   - ❌ 不应包含文件扫描算法
//   - ❌ 不应包含文件系统底层操作
//   - ❌ 不应包含配置验证逻辑
//
// ============================================================================

use anyhow::Result;
use clap::Args;
use std::path::{Path, PathBuf};

use crate::core::analyzer::CatalogAnalyzer;
use crate::models::config::Config;
use crate::utils::constants::icons;
use crate::utils::logger::Logger;
use crate::{t, tf};

/// 初始化命令参数
#[derive(Debug, Args)]
pub struct InitArgs {
    /// 配置文件路径
    #[arg(short, long, default_value = "linguax.toml")]
    pub config: PathBuf,

    /// 扫描 .ts 文件的起始目录
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,

    /// 强制覆盖已存在的配置文件
    #[arg(short, long)]
    pub force: bool,
}

/// 处理初始化命令
pub fn handle_init(args: InitArgs) -> Result<()> {
    Logger::info(t!("init.start"));

    // 检查配置文件是否已存在
    if args.config.exists() && !args.force {
        Logger::warn(tf!("init.config_exists", args.config.display()));
        Logger::info(t!("init.use_force_hint"));
        return Ok(());
    }

    // 扫描目录文件，把结果写进生成的配置
    let (config, found) = seed_config(&args.root);
    match config.save_to_file(&args.config) {
        Ok(_) => Logger::info(tf!("init.config_created", args.config.display())),
        Err(e) => {
            Logger::error(tf!("init.create_failed", e));
            return Err(e);
        }
    }

    if found.is_empty() {
        Logger::info(t!("init.no_catalogs_found"));
    } else {
        Logger::info(tf!("init.catalogs_found", found.len()));
        for file in &found {
            Logger::info(format!("  {} {}", icons::CATALOG, file.display()));
        }
    }

    Ok(())
}

/// 以默认配置为底，用扫描到的 .ts 文件填充目录设置
///
/// 扫到的第一个文件（排序后）作为 lookup 命令的 default_file。
fn seed_config(root: &Path) -> (Config, Vec<PathBuf>) {
    let mut config = Config::default();
    let found = CatalogAnalyzer::new().scan_catalog_files(root, &config.catalog.ignore);

    config.catalog.root = root.display().to_string();
    if let Some(first) = found.first() {
        config.catalog.default_file = first.display().to_string();
    }

    (config, found)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_config_picks_up_catalog_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app_ceb.ts"), "<TS/>").unwrap();
        std::fs::write(dir.path().join("readme.md"), "x").unwrap();

        let (config, found) = seed_config(dir.path());
        assert_eq!(found.len(), 1);
        assert!(config.catalog.default_file.ends_with("app_ceb.ts"));
        assert_eq!(config.catalog.root, dir.path().display().to_string());
    }

    #[test]
    fn seed_config_without_catalogs_keeps_empty_default() {
        let dir = tempfile::tempdir().unwrap();

        let (config, found) = seed_config(dir.path());
        assert!(found.is_empty());
        assert!(config.catalog.default_file.is_empty());
        // 其余字段保持默认值
        assert_eq!(config.i18n.language, "en_us");
    }

    #[test]
    fn seed_config_skips_ignored_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let build = dir.path().join("build");
        std::fs::create_dir_all(&build).unwrap();
        std::fs::write(build.join("app_de.ts"), "<TS/>").unwrap();

        let (_, found) = seed_config(dir.path());
        assert!(found.is_empty());
    }
}
