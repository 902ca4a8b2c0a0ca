// ============================================================================
// LinguaX - 中文翻译表
// ============================================================================
//
// 文件: src/i18n/zh_cn.rs
// 职责: 中文翻译内容定义
// 边界:
//   - ✅ 中文翻译字符串定义
//   - ✅ 翻译键值对维护
//   - ❌ 不应包含翻译逻辑
//   - ❌ 不应包含业务逻辑
//   - ❌ 不应包含其他语言翻译
//   - ❌ 不应包含动态翻译生成
//
// ============================================================================

/// 中文翻译表
pub const TRANSLATIONS: &[(&str, &str)] = &[
    // 检查命令相关
    ("cli.check.start", "开始检查翻译目录..."),
    ("check.all_good", "所有目录文件检查通过"),
    ("check.file.start", "正在检查目录文件: {}"),
    ("check.file.clean", "{}: 未发现问题"),
    ("check.file.found", "发现 {} 个问题: {}"),
    // 统计命令相关
    ("cli.stats.start", "开始收集翻译统计..."),
    ("stats.file.start", "正在分析目录文件: {}"),
    ("stats.file.header", "目录文件: {}"),
    // 查找命令相关
    ("lookup.file", "正在查找目录文件: {}"),
    (
        "lookup.context_missing",
        "目录中不存在上下文 '{}'，将回退源文",
    ),
    // 初始化命令相关
    ("init.start", "正在初始化配置文件..."),
    ("init.config_exists", "配置文件已存在: {}"),
    ("init.use_force_hint", "使用 --force 覆盖已存在的配置文件"),
    ("init.config_created", "配置文件已创建: {}"),
    ("init.create_failed", "创建配置文件失败: {}"),
    (
        "init.catalogs_found",
        "找到 {} 个目录文件，第一个已写入 catalog.default_file",
    ),
    (
        "init.no_catalogs_found",
        "未找到 .ts 文件，请编辑 linguax.toml 将 catalog.root 指向其所在目录",
    ),
    // 错误信息
    ("error.catalog_root_not_exist", "目录根路径不存在: {}"),
    ("error.no_catalog_files", "在 {} 下未找到 .ts 目录文件"),
    ("error.load_failed", "加载目录文件 {} 失败: {}"),
    (
        "error.no_catalog_file_specified",
        "未指定目录文件: 请使用 --file 或在 linguax.toml 中设置 catalog.default_file",
    ),
    (
        "error.unknown_plural_rule",
        "未知的复数规则 '{}'（可选值: one, two-en, two-fr, three-slavic）",
    ),
    // 输出相关
    ("output.check_result", "检查结果"),
    ("output.issue_total", "共 {} 个问题"),
    ("output.stats_result", "翻译统计"),
    ("output.language", "目标语言: {}"),
    ("output.total_contexts", "上下文数: {}"),
    ("output.total_messages", "条目数: {}"),
    ("output.finished", "已完成: {}"),
    ("output.unfinished", "未完成: {}"),
    ("output.retired", "已退役 (vanished/obsolete): {}"),
    ("output.completion", "完成度: {}%"),
    ("output.duration", "分析耗时 {}ms"),
    ("output.context_breakdown", "按上下文明细"),
    ("output.numerus_messages", "{} 个复数条目"),
    ("output.usage_tip", "使用 -d 查看详情，-f json 输出 JSON"),
];
