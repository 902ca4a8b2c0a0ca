// ============================================================================
// LinguaX - TS 文件解析器
// ============================================================================
//
// 文件: src/core/parser.rs
// 职责: Qt Linguist TS (XML) 文件解析和序列化
// 边界:
//   - ✅ TS 文件读取和 XML 解析
//   - ✅ 内存模型与 XML 元素互转
//   - ✅ 单条缺陷条目的降级处理
//   - ✅ 解析错误类型定义
//   - ❌ 不应包含查找回退策略
//   - ❌ 不应包含复数规则
//   - ❌ 不应包含检查规则
//   - ❌ 不应包含 CLI 相关逻辑
//
// ============================================================================

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};
use xmltree::{Element, EmitterConfig, XMLNode};

use crate::models::catalog::{
    Catalog, Context, Location, Message, Translation, TranslationStatus, TranslationValue,
};

/// 目录加载/解析错误
///
/// 只有整个文件不可读或结构无法解析才是硬错误；
/// 单条缺陷消息在解析时降级跳过，不影响其余条目。
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("translation file not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read translation file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse translation file: {0}")]
    Parse(String),
}

/// 从文件加载翻译目录
pub fn load_file(path: &Path) -> Result<Catalog, CatalogError> {
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_str(&content)?;
    debug!(
        path = %path.display(),
        contexts = catalog.contexts.len(),
        messages = catalog.message_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// 解析 TS 文档文本
pub fn parse_str(text: &str) -> Result<Catalog, CatalogError> {
    let root = Element::parse(text.as_bytes()).map_err(|e| CatalogError::Parse(e.to_string()))?;
    if root.name != "TS" {
        return Err(CatalogError::Parse(format!(
            "expected root element <TS>, found <{}>",
            root.name
        )));
    }

    let mut catalog = Catalog {
        version: root.attributes.get("version").cloned(),
        language: root.attributes.get("language").cloned(),
        source_language: root.attributes.get("sourcelanguage").cloned(),
        contexts: Vec::new(),
    };

    for child in &root.children {
        if let XMLNode::Element(el) = child {
            if el.name == "context" {
                match parse_context(el) {
                    Some(context) => catalog.contexts.push(context),
                    None => warn!("skipping context without <name>"),
                }
            }
            // TS 还可能含 defaultcodec/dependencies/extra-* 等元素，
            // 运行时查找用不到，解析时忽略
        }
    }

    Ok(catalog)
}

/// 解析单个 context 元素；缺少 name 时返回 None
fn parse_context(el: &Element) -> Option<Context> {
    let mut context = Context::default();
    let mut found_name = false;

    for child in &el.children {
        if let XMLNode::Element(el) = child {
            match el.name.as_str() {
                "name" => {
                    context.name = element_text(el);
                    found_name = true;
                }
                "message" => match parse_message(el) {
                    Some(message) => context.messages.push(message),
                    None => warn!(context = %context.name, "skipping message without <source>"),
                },
                _ => {}
            }
        }
    }

    found_name.then_some(context)
}

/// 解析单条 message 元素；缺少 source 时返回 None
fn parse_message(el: &Element) -> Option<Message> {
    let mut message = Message {
        numerus: el.attributes.get("numerus").map(String::as_str) == Some("yes"),
        ..Default::default()
    };
    let mut found_source = false;

    for child in &el.children {
        if let XMLNode::Element(el) = child {
            match el.name.as_str() {
                "source" => {
                    message.source = element_text(el);
                    found_source = true;
                }
                "comment" => message.comment = Some(element_text(el)),
                "extracomment" => message.extracomment = Some(element_text(el)),
                "translatorcomment" => message.translatorcomment = Some(element_text(el)),
                "location" => message.locations.push(Location {
                    filename: el.attributes.get("filename").cloned(),
                    line: el
                        .attributes
                        .get("line")
                        .and_then(|line| line.parse().ok()),
                }),
                "translation" => message.translation = Some(parse_translation(el)),
                _ => {}
            }
        }
    }

    found_source.then_some(message)
}

/// 解析 translation 元素（含状态属性和单数/复数内容）
fn parse_translation(el: &Element) -> Translation {
    let status = match TranslationStatus::from_attr(el.attributes.get("type").map(String::as_str))
    {
        Some(status) => status,
        None => {
            // 未知 type 按未完成降级，不让单条数据拖垮整个文件
            warn!(
                attr = el.attributes.get("type").map(String::as_str).unwrap_or(""),
                "unknown translation type, treating as unfinished"
            );
            TranslationStatus::Unfinished
        }
    };

    let forms: Vec<String> = el
        .children
        .iter()
        .filter_map(|child| match child {
            XMLNode::Element(form) if form.name == "numerusform" => Some(element_text(form)),
            _ => None,
        })
        .collect();

    let value = if forms.is_empty() {
        TranslationValue::Singular(element_text(el))
    } else {
        TranslationValue::Numerus(forms)
    };

    Translation { status, value }
}

/// 合并元素的文本内容（Text 与 CDATA 节点）
fn element_text(el: &Element) -> String {
    el.children
        .iter()
        .filter_map(|child| match child {
            XMLNode::Text(text) => Some(text.as_str()),
            XMLNode::CData(text) => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

/// 序列化目录为 TS XML 文本
///
/// 保留上下文/消息/位置的原始顺序，保证解析-序列化往返后
/// 每个 (context, source, translation, comment, numerusform) 元组不变。
pub fn to_xml_string(catalog: &Catalog) -> Result<String, CatalogError> {
    let mut root = Element::new("TS");
    if let Some(version) = &catalog.version {
        root.attributes.insert("version".into(), version.clone());
    }
    if let Some(language) = &catalog.language {
        root.attributes.insert("language".into(), language.clone());
    }
    if let Some(source_language) = &catalog.source_language {
        root.attributes
            .insert("sourcelanguage".into(), source_language.clone());
    }

    for context in &catalog.contexts {
        root.children
            .push(XMLNode::Element(context_to_element(context)));
    }

    let config = EmitterConfig::new().perform_indent(true);
    let mut buffer = Vec::new();
    root.write_with_config(&mut buffer, config)
        .map_err(|e| CatalogError::Parse(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| CatalogError::Parse(e.to_string()))
}

fn context_to_element(context: &Context) -> Element {
    let mut el = Element::new("context");
    el.children
        .push(XMLNode::Element(text_element("name", &context.name)));
    for message in &context.messages {
        el.children
            .push(XMLNode::Element(message_to_element(message)));
    }
    el
}

fn message_to_element(message: &Message) -> Element {
    let mut el = Element::new("message");
    if message.numerus {
        el.attributes.insert("numerus".into(), "yes".into());
    }

    for location in &message.locations {
        let mut loc = Element::new("location");
        if let Some(filename) = &location.filename {
            loc.attributes.insert("filename".into(), filename.clone());
        }
        if let Some(line) = location.line {
            loc.attributes.insert("line".into(), line.to_string());
        }
        el.children.push(XMLNode::Element(loc));
    }

    el.children
        .push(XMLNode::Element(text_element("source", &message.source)));
    if let Some(comment) = &message.comment {
        el.children
            .push(XMLNode::Element(text_element("comment", comment)));
    }
    if let Some(extracomment) = &message.extracomment {
        el.children
            .push(XMLNode::Element(text_element("extracomment", extracomment)));
    }
    if let Some(translatorcomment) = &message.translatorcomment {
        el.children.push(XMLNode::Element(text_element(
            "translatorcomment",
            translatorcomment,
        )));
    }
    if let Some(translation) = &message.translation {
        el.children
            .push(XMLNode::Element(translation_to_element(translation)));
    }

    el
}

fn translation_to_element(translation: &Translation) -> Element {
    let mut el = Element::new("translation");
    if let Some(attr) = translation.status.to_attr() {
        el.attributes.insert("type".into(), attr.into());
    }
    match &translation.value {
        TranslationValue::Singular(text) => {
            if !text.is_empty() {
                el.children.push(XMLNode::Text(text.clone()));
            }
        }
        TranslationValue::Numerus(forms) => {
            for form in forms {
                el.children
                    .push(XMLNode::Element(text_element("numerusform", form)));
            }
        }
    }
    el
}

fn text_element(name: &str, text: &str) -> Element {
    let mut el = Element::new(name);
    if !text.is_empty() {
        el.children.push(XMLNode::Text(text.to_string()));
    }
    el
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TS version="2.1" language="ceb">
<context>
    <name>AboutDialog</name>
    <message>
        <location filename="../dialogs/aboutdialog.ui" line="14"/>
        <source>About QOwnNotes</source>
        <translation>Tungkul sa mga QOwnNotes</translation>
    </message>
    <message>
        <source>Copy</source>
        <comment>as noun</comment>
        <translation>Kopya</translation>
    </message>
    <message>
        <source>Copy</source>
        <translation>Kopyaha</translation>
    </message>
</context>
<context>
    <name>MainWindow</name>
    <message numerus="yes">
        <source>%n chars</source>
        <translation>
            <numerusform>%n karakter</numerusform>
            <numerusform>%n ka mga karakter</numerusform>
        </translation>
    </message>
    <message>
        <source>Print</source>
        <translation type="unfinished">Print</translation>
    </message>
    <message>
        <source>Night mode</source>
        <translation type="vanished">Gabii nga paagi</translation>
    </message>
    <message>
        <source>Empty one</source>
        <translation type="unfinished"></translation>
    </message>
</context>
</TS>
"#;

    #[test]
    fn parse_sample_structure() {
        let catalog = parse_str(SAMPLE).unwrap();
        assert_eq!(catalog.version.as_deref(), Some("2.1"));
        assert_eq!(catalog.language.as_deref(), Some("ceb"));
        assert_eq!(catalog.contexts.len(), 2);
        assert_eq!(catalog.contexts[0].name, "AboutDialog");
        assert_eq!(catalog.contexts[0].messages.len(), 3);
        assert_eq!(catalog.message_count(), 7);
    }

    #[test]
    fn parse_finished_message() {
        let catalog = parse_str(SAMPLE).unwrap();
        let msg = &catalog.contexts[0].messages[0];
        assert_eq!(msg.source, "About QOwnNotes");
        assert_eq!(msg.status(), TranslationStatus::Finished);
        assert_eq!(
            msg.translation.as_ref().unwrap().value,
            TranslationValue::Singular("Tungkul sa mga QOwnNotes".into())
        );
        assert_eq!(msg.locations.len(), 1);
        assert_eq!(msg.locations[0].line, Some(14));
    }

    #[test]
    fn parse_comment_disambiguation() {
        let catalog = parse_str(SAMPLE).unwrap();
        let about = &catalog.contexts[0];
        assert_eq!(about.messages[1].comment.as_deref(), Some("as noun"));
        assert_eq!(about.messages[2].comment, None);
    }

    #[test]
    fn parse_numerus_forms() {
        let catalog = parse_str(SAMPLE).unwrap();
        let msg = &catalog.contexts[1].messages[0];
        assert!(msg.numerus);
        match &msg.translation.as_ref().unwrap().value {
            TranslationValue::Numerus(forms) => {
                assert_eq!(forms.len(), 2);
                assert_eq!(forms[0], "%n karakter");
            }
            other => panic!("expected numerus forms, got {:?}", other),
        }
    }

    #[test]
    fn parse_status_attributes() {
        let catalog = parse_str(SAMPLE).unwrap();
        let main = &catalog.contexts[1];
        assert_eq!(main.messages[1].status(), TranslationStatus::Unfinished);
        assert_eq!(main.messages[2].status(), TranslationStatus::Vanished);
        assert!(main.messages[3]
            .translation
            .as_ref()
            .unwrap()
            .value
            .is_empty());
    }

    #[test]
    fn reject_wrong_root_element() {
        let err = parse_str("<xliff></xliff>").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn reject_malformed_xml() {
        assert!(matches!(
            parse_str("<TS><context>"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn skip_message_without_source() {
        let text = r#"<TS version="2.1"><context><name>X</name>
            <message><translation>orphan</translation></message>
            <message><source>Ok</source><translation>Oo</translation></message>
            </context></TS>"#;
        let catalog = parse_str(text).unwrap();
        assert_eq!(catalog.contexts[0].messages.len(), 1);
        assert_eq!(catalog.contexts[0].messages[0].source, "Ok");
    }

    #[test]
    fn load_file_not_found() {
        let err = load_file(Path::new("/no/such/file_ceb.ts")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn round_trip_preserves_tuples() {
        let original = parse_str(SAMPLE).unwrap();
        let serialized = to_xml_string(&original).unwrap();
        let reparsed = parse_str(&serialized).unwrap();

        assert_eq!(original.version, reparsed.version);
        assert_eq!(original.language, reparsed.language);
        assert_eq!(original.contexts.len(), reparsed.contexts.len());
        for (a, b) in original.contexts.iter().zip(&reparsed.contexts) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.messages.len(), b.messages.len());
            for (ma, mb) in a.messages.iter().zip(&b.messages) {
                assert_eq!(ma.source, mb.source);
                assert_eq!(ma.comment, mb.comment);
                assert_eq!(ma.numerus, mb.numerus);
                assert_eq!(ma.locations, mb.locations);
                assert_eq!(ma.translation, mb.translation);
            }
        }
    }
}
