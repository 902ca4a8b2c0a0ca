// ============================================================================
// LinguaX - 复数规则
// ============================================================================
//
// 文件: src/core/plural.rs
// 职责: 目标语言复数类别选择
// 边界:
//   - ✅ 内置复数规则定义
//   - ✅ 语言标签到规则的映射
//   - ✅ 计数到形式序号的映射
//   - ❌ 不应包含占位符替换
//   - ❌ 不应包含目录数据结构
//   - ❌ 不应包含文件操作
//
// ============================================================================

/// 复数规则：把基数 count 映射为 numerusform 列表的序号
///
/// TS 文件本身不存储规则，规则由目录的 language 属性推导，
/// 也可通过 `TranslationCatalog::with_plural_rule` 显式注入。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// 单一形式（中文、日文等）
    OneForm,
    /// 两种形式，仅 1 用单数（英语风格）
    TwoFormsEnglish,
    /// 两种形式，0 和 1 用单数（法语风格；宿文/菲律宾语系归此类）
    TwoFormsFrench,
    /// 三种形式（俄语等斯拉夫语）
    ThreeFormsSlavic,
}

impl PluralRule {
    /// 根据语言标签选择规则
    ///
    /// 标签按 BCP-47 惯例取主语言子标签（"pt_BR" → "pt"），
    /// 未知语言回退英语风格两形式规则。
    pub fn for_language(tag: &str) -> Self {
        let primary = tag
            .split(['_', '-'])
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();

        match primary.as_str() {
            "zh" | "ja" | "ko" | "th" | "vi" | "id" | "ms" => PluralRule::OneForm,
            "fr" | "tr" | "ceb" | "fil" | "tl" => PluralRule::TwoFormsFrench,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::ThreeFormsSlavic,
            _ => PluralRule::TwoFormsEnglish,
        }
    }

    /// 该规则的形式数量
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::OneForm => 1,
            PluralRule::TwoFormsEnglish | PluralRule::TwoFormsFrench => 2,
            PluralRule::ThreeFormsSlavic => 3,
        }
    }

    /// 计数对应的形式序号（0 起始）
    pub fn form_index(&self, count: u64) -> usize {
        match self {
            PluralRule::OneForm => 0,
            PluralRule::TwoFormsEnglish => {
                if count == 1 {
                    0
                } else {
                    1
                }
            }
            PluralRule::TwoFormsFrench => {
                if count <= 1 {
                    0
                } else {
                    1
                }
            }
            PluralRule::ThreeFormsSlavic => {
                let tens = count % 100;
                let units = count % 10;
                if units == 1 && tens != 11 {
                    0
                } else if (2..=4).contains(&units) && !(12..=14).contains(&tens) {
                    1
                } else {
                    2
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tag_mapping() {
        assert_eq!(PluralRule::for_language("ceb"), PluralRule::TwoFormsFrench);
        assert_eq!(PluralRule::for_language("zh_CN"), PluralRule::OneForm);
        assert_eq!(PluralRule::for_language("ru"), PluralRule::ThreeFormsSlavic);
        assert_eq!(PluralRule::for_language("en-US"), PluralRule::TwoFormsEnglish);
        // 未知语言回退英语风格
        assert_eq!(PluralRule::for_language("xx"), PluralRule::TwoFormsEnglish);
    }

    #[test]
    fn english_rule() {
        let rule = PluralRule::TwoFormsEnglish;
        assert_eq!(rule.form_index(1), 0);
        assert_eq!(rule.form_index(0), 1);
        assert_eq!(rule.form_index(2), 1);
        assert_eq!(rule.form_index(1_000_000), 1);
    }

    #[test]
    fn french_rule_zero_is_singular() {
        let rule = PluralRule::TwoFormsFrench;
        assert_eq!(rule.form_index(0), 0);
        assert_eq!(rule.form_index(1), 0);
        assert_eq!(rule.form_index(2), 1);
    }

    #[test]
    fn slavic_rule() {
        let rule = PluralRule::ThreeFormsSlavic;
        assert_eq!(rule.form_index(1), 0);
        assert_eq!(rule.form_index(21), 0);
        assert_eq!(rule.form_index(3), 1);
        assert_eq!(rule.form_index(22), 1);
        assert_eq!(rule.form_index(5), 2);
        assert_eq!(rule.form_index(11), 2);
        assert_eq!(rule.form_index(12), 2);
        assert_eq!(rule.form_index(111), 2);
    }

    #[test]
    fn form_index_always_below_form_count() {
        let rules = [
            PluralRule::OneForm,
            PluralRule::TwoFormsEnglish,
            PluralRule::TwoFormsFrench,
            PluralRule::ThreeFormsSlavic,
        ];
        for rule in rules {
            for count in [0u64, 1, 2, 4, 5, 11, 14, 21, 100, 101, u64::MAX] {
                assert!(rule.form_index(count) < rule.form_count());
            }
        }
    }
}
