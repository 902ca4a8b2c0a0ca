// ============================================================================
// LinguaX - 程序入口
// ============================================================================
//
// 文件: src/main.rs
// 职责: 程序启动、全局初始化和顶层错误处理
// 边界:
//   - ✅ 日志订阅器初始化
//   - ✅ 全局配置初始化
//   - ✅ CLI 启动和顶层错误处理
//   - ❌ 不应包含命令实现逻辑
//   - ❌ 不应包含业务逻辑
//
// ============================================================================

use tracing_subscriber::EnvFilter;

use linguax::models::config::Config;
use linguax::utils::logger::Logger;

fn main() {
    // RUST_LOG 控制内部诊断日志，默认只输出 warn 及以上
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = Config::initialize() {
        Logger::error(format!("{}", e));
        std::process::exit(1);
    }

    if let Err(e) = linguax::cli::run_cli() {
        Logger::error(format!("{}", e));
        std::process::exit(1);
    }
}
