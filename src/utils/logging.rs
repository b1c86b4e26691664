/// 日志工具模块
///
/// 提供日志初始化和文本显示的辅助函数
use tracing_subscriber::EnvFilter;

/// 初始化全局日志
///
/// 默认 info 级别，verbose 时放开到 debug，`RUST_LOG` 可覆盖。
/// 重复调用是安全的，后续调用不生效
pub fn init(verbose: bool) {
    let default_directives = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 截断长文本用于显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("0123456789ab", 10), "0123456789...");
        // 按字符截断，多字节文本不会被截在字节中间
        assert_eq!(truncate_text("光合作用是植物的本领", 4), "光合作用...");
    }
}
