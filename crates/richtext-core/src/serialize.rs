//! Rich text JSON serialization
//!
//! Writes the AST in the shape the Contentful rich text field expects:
//! every node has a `nodeType` and `data`, containers have `content`,
//! text leaves have `value` and `marks`.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::ast::{AssetLink, Block, Document, Inline, ListItem, Mark, NodeType, Text};

/// Serialize a document to a JSON value
pub fn to_json(document: &Document) -> serde_json::Result<serde_json::Value> {
    serde_json::to_value(document)
}

/// Serialize a document to a compact JSON string
pub fn to_json_string(document: &Document) -> serde_json::Result<String> {
    serde_json::to_string(document)
}

/// `data: {}`
struct EmptyData;

impl Serialize for EmptyData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_map(Some(0))?.end()
    }
}

const NO_CONTENT: [Block; 0] = [];

fn container<S, C>(serializer: S, node_type: NodeType, content: &C) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    C: Serialize + ?Sized,
{
    let mut map = serializer.serialize_map(Some(3))?;
    map.serialize_entry("nodeType", node_type.as_str())?;
    map.serialize_entry("data", &EmptyData)?;
    map.serialize_entry("content", content)?;
    map.end()
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        container(serializer, NodeType::Document, &self.content)
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node_type = self.node_type();
        match self {
            Block::Paragraph(inlines) | Block::Heading2(inlines) => {
                container(serializer, node_type, inlines)
            }
            Block::BlockQuote(blocks) => container(serializer, node_type, blocks),
            Block::UnorderedList(items) | Block::OrderedList(items) => {
                container(serializer, node_type, items)
            }
            Block::Hr => container(serializer, node_type, &NO_CONTENT),
            Block::EmbeddedAsset(link) => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("nodeType", node_type.as_str())?;
                map.serialize_entry("data", &AssetData::from(link))?;
                map.serialize_entry("content", &NO_CONTENT)?;
                map.end()
            }
        }
    }
}

impl Serialize for ListItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        container(serializer, NodeType::ListItem, &self.content)
    }
}

impl Serialize for Inline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Inline::Text(text) => text.serialize(serializer),
            Inline::Hyperlink { uri, content } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("nodeType", NodeType::Hyperlink.as_str())?;
                map.serialize_entry("data", &HyperlinkData { uri: uri.as_deref() })?;
                map.serialize_entry("content", content)?;
                map.end()
            }
        }
    }
}

impl Serialize for Text {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("nodeType", NodeType::Text.as_str())?;
        map.serialize_entry("value", &self.value)?;
        map.serialize_entry("marks", &self.marks)?;
        map.serialize_entry("data", &EmptyData)?;
        map.end()
    }
}

impl Serialize for Mark {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry("type", self.as_str())?;
        map.end()
    }
}

#[derive(Serialize)]
struct HyperlinkData<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    uri: Option<&'a str>,
}

#[derive(Serialize)]
struct AssetData<'a> {
    target: LinkTarget<'a>,
}

#[derive(Serialize)]
struct LinkTarget<'a> {
    sys: LinkSys<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LinkSys<'a> {
    id: &'a str,
    #[serde(rename = "type")]
    kind: &'static str,
    link_type: &'static str,
}

impl<'a> From<&'a AssetLink> for AssetData<'a> {
    fn from(link: &'a AssetLink) -> Self {
        Self {
            target: LinkTarget {
                sys: LinkSys {
                    id: &link.id,
                    kind: "Link",
                    link_type: "Asset",
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn value(block: Block) -> serde_json::Value {
        serde_json::to_value(block).unwrap()
    }

    #[test]
    fn test_empty_document() {
        let result = to_json(&Document::default()).unwrap();
        assert_eq!(
            result,
            json!({ "nodeType": "document", "data": {}, "content": [] })
        );
    }

    #[test]
    fn test_paragraph_with_marked_text() {
        let block = Block::Paragraph(vec![Inline::Text(
            Text::new("bold").with_mark(Mark::Bold),
        )]);
        assert_eq!(
            value(block),
            json!({
                "nodeType": "paragraph",
                "data": {},
                "content": [{
                    "nodeType": "text",
                    "value": "bold",
                    "marks": [{ "type": "bold" }],
                    "data": {}
                }]
            })
        );
    }

    #[test]
    fn test_hyperlink_with_uri() {
        let block = Block::Paragraph(vec![Inline::Hyperlink {
            uri: Some("https://example.com".to_string()),
            content: vec![Inline::text("Example")],
        }]);
        let result = value(block);
        let link = &result["content"][0];
        assert_eq!(link["nodeType"], "hyperlink");
        assert_eq!(link["data"], json!({ "uri": "https://example.com" }));
        assert_eq!(link["content"][0]["value"], "Example");
    }

    #[test]
    fn test_hyperlink_without_uri_has_empty_data() {
        let block = Block::Paragraph(vec![Inline::Hyperlink {
            uri: None,
            content: vec![],
        }]);
        assert_eq!(value(block)["content"][0]["data"], json!({}));
    }

    #[test]
    fn test_hr_has_empty_content() {
        assert_eq!(
            value(Block::Hr),
            json!({ "nodeType": "hr", "data": {}, "content": [] })
        );
    }

    #[test]
    fn test_embedded_asset() {
        assert_eq!(
            value(Block::EmbeddedAsset(AssetLink::new("5KsDBWseXY6QegucYAoacS"))),
            json!({
                "nodeType": "embedded-asset-block",
                "data": {
                    "target": {
                        "sys": {
                            "id": "5KsDBWseXY6QegucYAoacS",
                            "type": "Link",
                            "linkType": "Asset"
                        }
                    }
                },
                "content": []
            })
        );
    }

    #[test]
    fn test_list_items() {
        let block = Block::OrderedList(vec![ListItem::from_inlines(vec![Inline::text("One")])]);
        let result = value(block);
        assert_eq!(result["nodeType"], "ordered-list");
        assert_eq!(result["content"][0]["nodeType"], "list-item");
        assert_eq!(result["content"][0]["content"][0]["nodeType"], "paragraph");
    }

    #[test]
    fn test_to_json_string_is_compact() {
        let document = Document::new(vec![Block::Hr]);
        assert_eq!(
            to_json_string(&document).unwrap(),
            r#"{"nodeType":"document","data":{},"content":[{"nodeType":"hr","data":{},"content":[]}]}"#
        );
    }
}
