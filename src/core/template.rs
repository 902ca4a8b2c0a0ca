// ============================================================================
// LinguaX - 占位符模板引擎
// ============================================================================
//
// 文件: src/core/template.rs
// 职责: %1/%2/%n 占位符解析和替换
// 边界:
//   - ✅ 模板词法分析（字面量/位置占位符/%n）
//   - ✅ 位置参数替换
//   - ✅ %n 计数替换
//   - ✅ 占位符提取（供检查器使用）
//   - ❌ 不应包含翻译查找逻辑
//   - ❌ 不应包含复数规则
//   - ❌ 不应包含文件操作
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

/// 模板词法单元
///
/// 显式的标记化表示，替换行为可独立测试，避免临时字符串扫描。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// 原样输出的文本
    Literal(String),
    /// 位置占位符 %1..%99（存储 1 起始的序号）
    Positional(usize),
    /// 计数占位符 %n
    Numerus,
}

/// 将模板拆分为词法单元
///
/// `%` 后跟 1~2 位数字为位置占位符（序号区间 %1..%99，Qt 同款，
/// `%0` 不是占位符），跟 `n` 为计数占位符，其余情况 `%` 原样
/// 保留为字面量。
pub fn tokenize(template: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut literal = String::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            literal.push(ch);
            continue;
        }

        match chars.peek() {
            Some('n') => {
                chars.next();
                flush_literal(&mut tokens, &mut literal);
                tokens.push(Token::Numerus);
            }
            Some(&c) if c.is_ascii_digit() && c != '0' => {
                // 最多取两位数字（%1..%99，与 Qt 一致）
                let mut index = chars.next().unwrap().to_digit(10).unwrap() as usize;
                if let Some(c2) = chars.peek() {
                    if c2.is_ascii_digit() {
                        index = index * 10 + chars.next().unwrap().to_digit(10).unwrap() as usize;
                    }
                }
                flush_literal(&mut tokens, &mut literal);
                tokens.push(Token::Positional(index));
            }
            // 非占位符的 % 原样通过
            _ => literal.push('%'),
        }
    }

    flush_literal(&mut tokens, &mut literal);
    tokens
}

fn flush_literal(tokens: &mut Vec<Token>, literal: &mut String) {
    if !literal.is_empty() {
        tokens.push(Token::Literal(std::mem::take(literal)));
    }
}

/// 位置占位符替换
///
/// `%1` 对应 `args[0]`，依此类推；序号超出参数范围时占位符
/// 原样保留，绝不报错。`%n` 在此函数中同样原样保留。
pub fn format(template: &str, args: &[&str]) -> String {
    let mut result = String::with_capacity(template.len());
    for token in tokenize(template) {
        match token {
            Token::Literal(text) => result.push_str(&text),
            Token::Positional(index) => match args.get(index - 1) {
                Some(value) => result.push_str(value),
                None => {
                    result.push('%');
                    result.push_str(&index.to_string());
                }
            },
            Token::Numerus => result.push_str("%n"),
        }
    }
    result
}

/// %n 计数替换
///
/// 将模板中所有 `%n` 替换为 count 的十进制表示，位置占位符保留。
pub fn substitute_count(template: &str, count: u64) -> String {
    let count_str = count.to_string();
    let mut result = String::with_capacity(template.len());
    for token in tokenize(template) {
        match token {
            Token::Literal(text) => result.push_str(&text),
            Token::Positional(index) => {
                result.push('%');
                result.push_str(&index.to_string());
            }
            Token::Numerus => result.push_str(&count_str),
        }
    }
    result
}

/// 提取模板中出现的占位符（去重，保持出现顺序）
///
/// 供检查器比对源文与译文的占位符集合。
pub fn placeholders(template: &str) -> Vec<String> {
    let mut found = Vec::new();
    for token in tokenize(template) {
        let name = match token {
            Token::Positional(index) => format!("%{}", index),
            Token::Numerus => "%n".to_string(),
            Token::Literal(_) => continue,
        };
        if !found.contains(&name) {
            found.push(name);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_mixed_template() {
        assert_eq!(
            tokenize("%n note(s) in %1"),
            vec![
                Token::Numerus,
                Token::Literal(" note(s) in ".into()),
                Token::Positional(1),
            ]
        );
    }

    #[test]
    fn format_positional_args() {
        assert_eq!(format("%1 and %2", &["A", "B"]), "A and B");
        assert_eq!(format("%2 before %1", &["A", "B"]), "B before A");
    }

    #[test]
    fn format_trailing_percent_passes_through() {
        assert_eq!(format("%1%2%", &["A", "B"]), "AB%");
    }

    #[test]
    fn format_missing_arg_left_verbatim() {
        assert_eq!(format("%1 of %2", &["3"]), "3 of %2");
        assert_eq!(format("%1", &[]), "%1");
    }

    #[test]
    fn format_percent_not_followed_by_digit() {
        assert_eq!(format("100% done", &[]), "100% done");
        assert_eq!(format("%x %", &[]), "%x %");
    }

    #[test]
    fn percent_zero_is_literal() {
        assert_eq!(tokenize("%0"), vec![Token::Literal("%0".into())]);
        assert_eq!(format("%0 done", &["A"]), "%0 done");
        assert_eq!(format("%01", &["A"]), "%01");
        assert_eq!(substitute_count("%0 of %n", 3), "%0 of 3");
        assert!(placeholders("%0").is_empty());
    }

    #[test]
    fn format_two_digit_index() {
        let args: Vec<String> = (1..=12).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();
        assert_eq!(format("%12", &refs), "12");
        assert_eq!(format("%10%1", &refs), "101");
    }

    #[test]
    fn substitute_count_replaces_all_numerus() {
        assert_eq!(substitute_count("%n chars", 5), "5 chars");
        assert_eq!(substitute_count("%n of %n", 0), "0 of 0");
        assert_eq!(substitute_count("no placeholder", 3), "no placeholder");
    }

    #[test]
    fn substitute_count_keeps_positional() {
        assert_eq!(substitute_count("%n in %1", 2), "2 in %1");
    }

    #[test]
    fn placeholders_deduplicated_in_order() {
        assert_eq!(placeholders("%2 %n %2 %1"), vec!["%2", "%n", "%1"]);
        assert!(placeholders("plain text").is_empty());
    }

    #[test]
    fn empty_template() {
        assert!(tokenize("").is_empty());
        assert_eq!(format("", &["A"]), "");
    }
}
