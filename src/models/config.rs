// ============================================================================
// LinguaX - 配置数据模型
// ============================================================================
//
// 文件: src/models/config.rs
// 职责: 配置文件数据结构定义和操作
// 边界:
//   - ✅ 配置文件数据结构定义
//   - ✅ 配置序列化/反序列化
//   - ✅ 配置验证和默认值
//   - ✅ 配置文件读写操作
//   - ❌ 不应包含配置应用逻辑
//   - ❌ 不应包含目录查找逻辑
//   - ❌ 不应包含 CLI 参数处理
//   - ❌ 不应包含 XML 解析逻辑
//
// ============================================================================

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// 全局配置管理器
static GLOBAL_CONFIG: std::sync::OnceLock<Arc<RwLock<Config>>> = std::sync::OnceLock::new();

/// LinguaX 配置文件结构
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// 翻译目录配置
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// 查找策略配置
    #[serde(default)]
    pub lookup: LookupConfig,
    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
    /// 国际化配置
    #[serde(default)]
    pub i18n: I18nConfig,
}

/// 翻译目录配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 翻译文件所在目录
    #[serde(default)]
    pub root: String,
    /// 默认 TS 文件（lookup 命令未指定 --file 时使用）
    #[serde(default)]
    pub default_file: String,
    /// 扫描时排除的目录名
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// 查找策略配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    /// 未完成条目的处理策略
    #[serde(default)]
    pub unfinished_policy: UnfinishedPolicy,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 是否详细输出
    #[serde(default)]
    pub verbose: bool,
    /// 是否彩色输出
    #[serde(default)]
    pub colored: bool,
}

/// 国际化配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
    /// 界面语言
    #[serde(default)]
    pub language: String,
}

/// CLI 运行时参数（用于覆盖配置文件）
#[derive(Debug, Clone, Default)]
pub struct RuntimeArgs {
    pub verbose: Option<bool>,
    pub colored: Option<bool>,
    pub catalog_root: Option<String>,
    pub unfinished_policy: Option<UnfinishedPolicy>,
    pub language: Option<String>,
}

/// 未完成译文处理策略枚举
///
/// TS 数据中存在 type="unfinished" 且译文与源文相同的条目，
/// 两种运行时行为都有依据，因此做成配置项而不是写死。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnfinishedPolicy {
    /// 一律回退到源语言文本（默认，与观测数据的实际效果一致）
    #[default]
    Source,
    /// 译文非空时照常显示
    Translation,
}

impl UnfinishedPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnfinishedPolicy::Source => "source",
            UnfinishedPolicy::Translation => "translation",
        }
    }

    /// 从字符串解析策略
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "source" => Ok(UnfinishedPolicy::Source),
            "translation" => Ok(UnfinishedPolicy::Translation),
            _ => Err(format!(
                "unsupported unfinished policy: {}, expected source or translation",
                s
            )),
        }
    }
}

impl std::fmt::Display for UnfinishedPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 配置默认值 trait - 不依赖全局配置初始化
pub trait ConfigDefaults {
    /// 获取默认翻译目录根目录
    fn default_catalog_root() -> PathBuf {
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }

    /// 获取默认排除目录
    fn default_ignore_dirs() -> Vec<String> {
        vec![".git".to_string(), "build".to_string()]
    }

    /// 获取默认未完成策略
    fn default_unfinished_policy() -> UnfinishedPolicy {
        UnfinishedPolicy::Source
    }

    /// 获取默认是否详细输出
    fn default_verbose() -> bool {
        false
    }

    /// 获取默认是否彩色输出
    fn default_colored() -> bool {
        true
    }

    /// 获取默认语言
    fn default_language() -> String {
        "en_us".to_string()
    }
}

impl ConfigDefaults for Config {}

impl Config {
    /// 初始化全局配置（程序启动时调用）
    pub fn initialize() -> anyhow::Result<()> {
        let config = Self::load_config()?;
        GLOBAL_CONFIG
            .set(Arc::new(RwLock::new(config)))
            .map_err(|_| anyhow::anyhow!("Global config already initialized"))?;
        Ok(())
    }

    /// 加载配置文件
    fn load_config() -> anyhow::Result<Self> {
        let config_path = PathBuf::from("linguax.toml");
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config = toml::from_str(&content)?;
            Ok(config)
        } else {
            // 如果配置文件不存在，使用默认配置
            Ok(Self::default())
        }
    }

    /// 合并运行时参数
    pub fn merge_runtime_args(args: RuntimeArgs) -> anyhow::Result<()> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let mut config = global_config
            .write()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config write lock"))?;

        // 合并参数
        if let Some(verbose) = args.verbose {
            config.output.verbose = verbose;
        }
        if let Some(colored) = args.colored {
            config.output.colored = colored;
        }
        if let Some(catalog_root) = args.catalog_root {
            config.catalog.root = catalog_root;
        }
        if let Some(policy) = args.unfinished_policy {
            config.lookup.unfinished_policy = policy;
        }
        if let Some(language) = args.language {
            config.i18n.language = language;
        }

        Ok(())
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, config_path: &PathBuf) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// 获取翻译目录根目录（带默认值）
    pub fn get_catalog_root() -> PathBuf {
        match Self::get_catalog_root_from_config() {
            Ok(root) => root,
            _ => Self::default_catalog_root(),
        }
    }

    /// 从配置获取翻译目录根目录（可能失败）
    fn get_catalog_root_from_config() -> anyhow::Result<PathBuf> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        let root = &config.catalog.root;
        if root.is_empty() || root == "." {
            Ok(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
        } else {
            Ok(PathBuf::from(root))
        }
    }

    /// 获取默认 TS 文件路径（配置未设置时为 None）
    pub fn get_default_file() -> Option<PathBuf> {
        let global_config = GLOBAL_CONFIG.get()?;
        let config = global_config.read().ok()?;
        if config.catalog.default_file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&config.catalog.default_file))
        }
    }

    /// 获取扫描排除目录列表（带默认值）
    pub fn get_ignore_dirs() -> Vec<String> {
        match Self::get_ignore_dirs_from_config() {
            Ok(dirs) => dirs,
            _ => Self::default_ignore_dirs(),
        }
    }

    /// 从配置获取排除目录（可能失败）
    fn get_ignore_dirs_from_config() -> anyhow::Result<Vec<String>> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.catalog.ignore.clone())
    }

    /// 获取未完成译文处理策略（带默认值）
    pub fn get_unfinished_policy() -> UnfinishedPolicy {
        match Self::get_unfinished_policy_from_config() {
            Ok(policy) => policy,
            _ => Self::default_unfinished_policy(),
        }
    }

    /// 从配置获取未完成策略（可能失败）
    fn get_unfinished_policy_from_config() -> anyhow::Result<UnfinishedPolicy> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.lookup.unfinished_policy)
    }

    /// 获取详细输出设置（带默认值）
    pub fn get_verbose() -> bool {
        match Self::get_verbose_from_config() {
            Ok(verbose) => verbose,
            _ => Self::default_verbose(),
        }
    }

    /// 从配置获取详细输出设置（可能失败）
    fn get_verbose_from_config() -> anyhow::Result<bool> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.output.verbose)
    }

    /// 获取是否彩色输出（带默认值）
    pub fn get_colored() -> bool {
        match Self::get_colored_from_config() {
            Ok(colored) => colored,
            _ => Self::default_colored(),
        }
    }

    /// 从配置获取彩色输出设置（可能失败）
    fn get_colored_from_config() -> anyhow::Result<bool> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.output.colored)
    }

    /// 获取界面语言
    pub fn get_language() -> anyhow::Result<String> {
        let global_config = GLOBAL_CONFIG
            .get()
            .ok_or_else(|| anyhow::anyhow!("Global config not initialized"))?;

        let config = global_config
            .read()
            .map_err(|_| anyhow::anyhow!("Failed to acquire config read lock"))?;

        Ok(config.i18n.language.clone())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            root: ".".to_string(),
            default_file: String::new(),
            ignore: Config::default_ignore_dirs(),
        }
    }
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            unfinished_policy: Config::default_unfinished_policy(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbose: Config::default_verbose(),
            colored: Config::default_colored(),
        }
    }
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            language: Config::default_language(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfinished_policy_parse() {
        assert_eq!(
            UnfinishedPolicy::parse("source").unwrap(),
            UnfinishedPolicy::Source
        );
        assert_eq!(
            UnfinishedPolicy::parse("TRANSLATION").unwrap(),
            UnfinishedPolicy::Translation
        );
        assert!(UnfinishedPolicy::parse("always").is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.lookup.unfinished_policy, UnfinishedPolicy::Source);
        assert!(parsed.output.colored);
        assert_eq!(parsed.i18n.language, "en_us");
    }
}
