//! JSON encoding and decoding of node trees.

use serde_json::Value;
use tracing::{debug, warn};

use crate::depth::{find_excess_nesting, node_depth, value_depth, MAX_NESTING_DEPTH};
use crate::error::{ParseError, Result, SsrError};
use crate::types::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Two-space indented, one field per line.
    #[default]
    Pretty,
    /// No insignificant whitespace.
    Compact,
}

#[derive(Debug, Clone, Default)]
pub struct EncodeOptions {
    pub format: Format,
}

impl EncodeOptions {
    pub fn pretty() -> Self {
        Self {
            format: Format::Pretty,
        }
    }

    pub fn compact() -> Self {
        Self {
            format: Format::Compact,
        }
    }
}

/// Turns wire JSON into a [`Node`]. Hosts can swap in their own decoder.
pub trait NodeDecoder {
    fn decode(&self, json: &str) -> Result<Node>;
}

/// The stock decoder, backed by serde_json.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonDecoder;

impl NodeDecoder for JsonDecoder {
    fn decode(&self, json: &str) -> Result<Node> {
        from_json(json)
    }
}

/// Fails with [`SsrError::TooDeep`] for trees the decoder would refuse.
pub fn encode(node: &Node, options: &EncodeOptions) -> Result<String> {
    check_encodable(node)?;
    let out = match options.format {
        Format::Pretty => serde_json::to_string_pretty(node),
        Format::Compact => serde_json::to_string(node),
    }
    .map_err(SsrError::Encode)?;
    debug!(
        node_type = %node.node_type,
        format = ?options.format,
        bytes = out.len(),
        "encoded node tree"
    );
    Ok(out)
}

pub fn to_json(node: &Node) -> Result<String> {
    encode(node, &EncodeOptions::pretty())
}

pub fn to_json_compact(node: &Node) -> Result<String> {
    encode(node, &EncodeOptions::compact())
}

pub fn to_value(node: &Node) -> Result<Value> {
    check_encodable(node)?;
    serde_json::to_value(node).map_err(SsrError::Encode)
}

fn check_encodable(node: &Node) -> Result<()> {
    let depth = node_depth(node);
    if depth > MAX_NESTING_DEPTH {
        warn!(depth, limit = MAX_NESTING_DEPTH, "refusing to encode node tree");
        return Err(SsrError::TooDeep {
            depth,
            limit: MAX_NESTING_DEPTH,
        });
    }
    Ok(())
}

/// Decodes one node tree. Unknown keys are ignored; absent keys stay unset.
///
/// Documents nested deeper than [`MAX_NESTING_DEPTH`] are rejected before
/// any parsing happens.
pub fn from_json(json: &str) -> Result<Node> {
    if let Some((line, column)) = find_excess_nesting(json, MAX_NESTING_DEPTH) {
        let err = ParseError::too_deep(line, column, MAX_NESTING_DEPTH, json);
        warn!(line, column, "rejected node JSON: {}", err.message);
        return Err(SsrError::Parse(err));
    }
    let mut de = serde_json::Deserializer::from_str(json);
    let node: Node = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        let path = e.path().to_string();
        parse_failure(e.inner(), path, json)
    })?;
    // Trailing garbage after the object is a syntax error too.
    de.end().map_err(|e| parse_failure(&e, ".".to_string(), json))?;
    debug!(node_type = %node.node_type, bytes = json.len(), "decoded node tree");
    Ok(node)
}

pub fn from_value(value: Value) -> Result<Node> {
    if value_depth(&value) > MAX_NESTING_DEPTH {
        let err = ParseError::too_deep(0, 0, MAX_NESTING_DEPTH, "");
        warn!("rejected node value: {}", err.message);
        return Err(SsrError::Parse(err));
    }
    serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        parse_failure(e.inner(), path, "")
    })
}

fn parse_failure(e: &serde_json::Error, path: String, json: &str) -> SsrError {
    let err = ParseError::from_serde_error(e, path, json);
    warn!(path = %err.path, line = err.line, column = err.column, "rejected node JSON: {}", err.message);
    SsrError::Parse(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssr;
    use crate::types::{Modifier, TableCell, TableColumn, TextStyle};
    use expect_test::{expect, Expect};
    use serde_json::json;

    fn check_pretty(node: &Node, expected: Expect) {
        let out = to_json(node).unwrap();
        expected.assert_eq(&format!("{out}\n"));
    }

    fn roundtrip(node: &Node) -> Node {
        from_json(&to_json_compact(node).unwrap()).unwrap()
    }

    fn product_table() -> Node {
        ssr::table()
            .show_borders(true)
            .header_background_color("#1976D2")
            .column(
                ssr::table_column("Product")
                    .weight(2)
                    .horizontal_alignment("start")
                    .header_style(ssr::white_text_style()),
            )
            .column(ssr::table_column("Action").width(96))
            .row([
                ssr::cell("Laptop Pro X1"),
                ssr::cell("View")
                    .action("view_laptop_x1")
                    .background_color("#2196F3"),
            ])
            .build()
    }

    fn dashboard() -> Node {
        ssr::scaffold()
            .top_bar(ssr::top_app_bar("Dashboard"))
            .content(
                ssr::column()
                    .modifier(ssr::modifier().padding(16).fill_max_size())
                    .child(
                        ssr::text("Sales")
                            .text_style(ssr::text_style().font_size(28).bold().color("#1976D2")),
                    )
                    .child(ssr::spacer(16))
                    .child(product_table())
                    .child(
                        ssr::horizontal_pager()
                            .modifier(ssr::modifier().height(400))
                            .child(ssr::video_item("Intro", "Basics", "https://img/1", "v1"))
                            .child(ssr::video_item("Deep dive", "More", "https://img/2", "v2").elevation(6.5)),
                    ),
            )
            .floating_action_button(ssr::button("+").action("add_item"))
            .build()
    }

    #[test]
    fn text_with_style_encodes_only_set_fields() {
        let node = ssr::text("Hello")
            .text_style(ssr::text_style().font_size(14).bold())
            .build();
        assert_eq!(
            to_json_compact(&node).unwrap(),
            r#"{"type":"Text","title":"Hello","textStyle":{"fontSize":14,"fontWeight":"bold"}}"#
        );
    }

    #[test]
    fn spacer_encodes_height_modifier() {
        assert_eq!(
            to_json_compact(&ssr::spacer(16).build()).unwrap(),
            r#"{"type":"Spacer","modifier":{"height":16}}"#
        );
    }

    #[test]
    fn pretty_spacer() {
        check_pretty(
            &ssr::spacer(16).build(),
            expect![[r#"
                {
                  "type": "Spacer",
                  "modifier": {
                    "height": 16
                  }
                }
            "#]],
        );
    }

    #[test]
    fn pretty_table() {
        check_pretty(
            &product_table(),
            expect![[r##"
                {
                  "type": "Table",
                  "columns": [
                    {
                      "header": "Product",
                      "weight": 2,
                      "horizontalAlignment": "start",
                      "headerStyle": {
                        "fontWeight": "bold",
                        "color": "#FFFFFF"
                      }
                    },
                    {
                      "header": "Action",
                      "width": 96
                    }
                  ],
                  "tableData": [
                    [
                      {
                        "text": "Laptop Pro X1"
                      },
                      {
                        "text": "View",
                        "backgroundColor": "#2196F3",
                        "action": "view_laptop_x1"
                      }
                    ]
                  ],
                  "showBorders": true,
                  "headerBackgroundColor": "#1976D2"
                }
            "##]],
        );
    }

    #[test]
    fn table_round_trips_with_order() {
        let table = product_table();
        let value = to_value(&table).unwrap();
        let rows = value["tableData"].as_array().unwrap();
        assert_eq!(rows.len(), 1);
        let cells = rows[0].as_array().unwrap();
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0]["text"], "Laptop Pro X1");
        assert_eq!(cells[1]["text"], "View");
        assert_eq!(value["columns"][0]["header"], "Product");
        assert_eq!(value["columns"][1]["header"], "Action");

        assert_eq!(roundtrip(&table), table);
    }

    #[test]
    fn decoded_button_has_only_given_fields() {
        let node = from_json(r#"{"type":"Button","label":"Go","action":"go_clicked"}"#).unwrap();
        assert_eq!(
            node,
            Node {
                label: Some("Go".to_string()),
                action: Some("go_clicked".to_string()),
                ..Node::new("Button")
            }
        );
        assert!(node.title.is_none());
        assert!(node.modifier.is_none());
        assert!(node.children.is_none());
        assert!(node.show_borders.is_none());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let with_extra =
            from_json(r#"{"type":"Button","label":"Go","foo":"bar","nested":{"x":[1,2]}}"#).unwrap();
        let without = from_json(r#"{"type":"Button","label":"Go"}"#).unwrap();
        assert_eq!(with_extra, without);
    }

    #[test]
    fn explicit_null_reads_as_unset() {
        let node = from_json(r#"{"type":"Text","title":null,"elevation":null}"#).unwrap();
        assert_eq!(node, Node::new("Text"));
    }

    #[test]
    fn unset_fields_never_appear_as_null() {
        let json = to_json(&dashboard()).unwrap();
        assert!(!json.contains("null"));
        let compact = to_json_compact(&dashboard()).unwrap();
        assert!(!compact.contains("null"));
    }

    #[test]
    fn pretty_and_compact_carry_the_same_document() {
        let tree = dashboard();
        let pretty: Value = serde_json::from_str(&to_json(&tree).unwrap()).unwrap();
        let compact: Value = serde_json::from_str(&to_json_compact(&tree).unwrap()).unwrap();
        assert_eq!(pretty, compact);
        assert!(!to_json_compact(&tree).unwrap().contains('\n'));
    }

    #[test]
    fn nested_tree_round_trips() {
        let tree = dashboard();
        assert_eq!(roundtrip(&tree), tree);
        assert_eq!(from_json(&to_json(&tree).unwrap()).unwrap(), tree);
    }

    #[test]
    fn encoding_is_idempotent() {
        let tree = dashboard();
        let once = to_json(&tree).unwrap();
        let twice = to_json(&from_json(&once).unwrap()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn children_order_survives() {
        let tree = ssr::row()
            .children((0..10).map(|i| ssr::text(format!("item {i}"))))
            .build();
        let back = roundtrip(&tree);
        let titles: Vec<_> = back
            .children
            .unwrap()
            .into_iter()
            .filter_map(|c| c.title)
            .collect();
        let expected: Vec<_> = (0..10).map(|i| format!("item {i}")).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn explicit_falsy_values_are_kept() {
        let node = ssr::table()
            .show_borders(false)
            .use_lazy_column(false)
            .modifier(ssr::modifier().padding(0))
            .children(Vec::<Node>::new())
            .build();
        let value = to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "Table",
                "modifier": { "padding": 0 },
                "children": [],
                "showBorders": false,
                "useLazyColumn": false
            })
        );
        assert_eq!(roundtrip(&node), node);
    }

    #[test]
    fn fractional_floats_survive() {
        let node = ssr::card()
            .elevation(2.5)
            .rounded_corners(0.1)
            .modifier(ssr::modifier().weight(1.0 / 3.0))
            .build();
        assert_eq!(roundtrip(&node), node);
        let compact = to_json_compact(&node).unwrap();
        assert!(compact.contains(r#""elevation":2.5"#));
        assert!(compact.contains(r#""roundedCorners":0.1"#));
    }

    #[test]
    fn non_finite_float_fails_to_encode() {
        let node = ssr::card().elevation(f64::NAN).build();
        let err = to_json(&node).unwrap_err();
        assert!(matches!(err, SsrError::Encode(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn text_align_is_written_and_read() {
        let node = ssr::text("Title")
            .text_style(ssr::text_style().font_size(20).text_align("center"))
            .build();
        let json = to_json_compact(&node).unwrap();
        assert_eq!(
            json,
            r#"{"type":"Text","title":"Title","textStyle":{"fontSize":20,"textAlign":"center"}}"#
        );
        let back = from_json(&json).unwrap();
        assert_eq!(
            back.text_style.and_then(|s| s.text_align).as_deref(),
            Some("center")
        );
    }

    fn box_chain(levels: usize) -> Node {
        let mut node = ssr::box_().build();
        for _ in 1..levels {
            node = ssr::box_().content(node).build();
        }
        node
    }

    fn box_chain_json(levels: usize) -> String {
        let mut json = r#"{"type":"Box","content":"#.repeat(levels - 1);
        json.push_str(r#"{"type":"Box"}"#);
        json.push_str(&"}".repeat(levels - 1));
        json
    }

    fn assert_too_deep(err: SsrError) {
        let parse = err.as_parse().expect("expected a parse error");
        assert!(parse.message.contains("nesting too deep"), "{}", parse.message);
    }

    #[test]
    fn deeply_nested_document_is_rejected() {
        let err = from_json(&box_chain_json(100)).unwrap_err();
        let parse = err.as_parse().unwrap();
        assert_eq!(
            parse.message,
            format!("nesting too deep, limit is {} levels", MAX_NESTING_DEPTH)
        );
        // The first object past the limit; each wrapper is 24 bytes wide.
        assert_eq!((parse.line, parse.column), (1, MAX_NESTING_DEPTH * 24 + 1));
        assert_too_deep(from_json(&box_chain_json(10_000)).unwrap_err());
    }

    #[test]
    fn deeply_nested_value_is_rejected() {
        let mut value = json!({"type": "Box"});
        for _ in 1..100 {
            value = json!({"type": "Box", "content": value});
        }
        assert_too_deep(from_value(value).unwrap_err());
    }

    #[test]
    fn tree_at_nesting_limit_round_trips() {
        let node = box_chain(MAX_NESTING_DEPTH);
        let json = to_json_compact(&node).unwrap();
        assert_eq!(json, box_chain_json(MAX_NESTING_DEPTH));
        assert_eq!(from_json(&json).unwrap(), node);
        assert_eq!(from_value(to_value(&node).unwrap()).unwrap(), node);
    }

    #[test]
    fn tree_past_nesting_limit_fails_both_ways() {
        let node = box_chain(MAX_NESTING_DEPTH + 1);
        let err = to_json(&node).unwrap_err();
        assert!(matches!(
            err,
            SsrError::TooDeep { depth, limit } if depth == MAX_NESTING_DEPTH + 1 && limit == MAX_NESTING_DEPTH
        ));
        assert_too_deep(from_json(&box_chain_json(MAX_NESTING_DEPTH + 1)).unwrap_err());
    }

    #[test]
    fn deep_children_chain_does_not_encode() {
        let mut node = ssr::column().build();
        for _ in 1..70 {
            node = ssr::column().child(node).build();
        }
        // Each level adds the children array and the child object.
        let err = to_json_compact(&node).unwrap_err();
        assert!(matches!(err, SsrError::TooDeep { depth: 139, .. }));
        assert!(matches!(to_value(&node), Err(SsrError::TooDeep { .. })));
        assert_eq!(
            err.to_string(),
            format!("node tree nests 139 levels deep, limit is {}", MAX_NESTING_DEPTH)
        );
    }

    #[test]
    fn type_mismatch_reports_path() {
        let json = r#"{
  "type": "Scaffold",
  "content": {
    "type": "Column",
    "children": [
      { "type": "Text" },
      { "type": "Text", "textStyle": { "fontSize": "big" } }
    ]
  }
}"#;
        let err = from_json(json).unwrap_err();
        let parse = err.as_parse().unwrap();
        assert_eq!(parse.path, "content.children[1].textStyle.fontSize");
        assert_eq!(parse.line, 7);
        assert!(parse.message.contains("invalid type"));
        assert!(parse.context_line.as_deref().unwrap().contains("\"big\""));
    }

    #[test]
    fn bool_is_not_coerced() {
        let err = from_json(r#"{"type":"Table","showBorders":"yes"}"#).unwrap_err();
        assert_eq!(err.as_parse().unwrap().path, "showBorders");
    }

    #[test]
    fn missing_type_is_an_error() {
        let err = from_json(r#"{"title":"orphan"}"#).unwrap_err();
        assert!(err.as_parse().unwrap().message.contains("missing field `type`"));
    }

    #[test]
    fn missing_cell_text_is_an_error() {
        let err = from_json(r#"{"type":"Table","tableData":[[{"action":"x"}]]}"#).unwrap_err();
        assert_eq!(err.as_parse().unwrap().path, "tableData[0][0]");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(from_json(r#"{"type":"Text""#), Err(SsrError::Parse(_))));
        assert!(matches!(from_json(""), Err(SsrError::Parse(_))));
        assert!(matches!(from_json(r#"{"type":"Text"} trailing"#), Err(SsrError::Parse(_))));
    }

    #[test]
    fn value_round_trip() {
        let tree = dashboard();
        assert_eq!(from_value(to_value(&tree).unwrap()).unwrap(), tree);
        assert!(from_value(json!({"type": 3})).is_err());
    }

    #[test]
    fn decoder_trait_matches_from_json() {
        let decoder: &dyn NodeDecoder = &JsonDecoder;
        let json = to_json(&dashboard()).unwrap();
        assert_eq!(decoder.decode(&json).unwrap(), dashboard());
    }

    #[test]
    fn hand_written_document_decodes() {
        let json = r##"{
          "type": "Scaffold",
          "topBar": { "type": "TopAppBar", "title": "Shop" },
          "content": {
            "type": "Column",
            "modifier": { "padding": 16, "fillMaxSize": true },
            "children": [
              { "type": "Text", "title": "Products", "textStyle": { "fontSize": 28, "fontWeight": "bold", "color": "#1976D2" } },
              { "type": "Table", "showBorders": true,
                "columns": [ { "header": "Product", "weight": 2.0, "horizontalAlignment": "start" } ],
                "tableData": [ [ { "text": "Laptop Pro X1" }, { "text": "View", "action": "view_laptop_x1", "backgroundColor": "#2196F3" } ] ] }
            ]
          }
        }"##;
        let node = from_json(json).unwrap();
        let content = node.content.as_deref().unwrap();
        assert_eq!(
            content.modifier,
            Some(Modifier {
                padding: Some(16),
                fill_max_size: Some(true),
                ..Default::default()
            })
        );
        let children = content.children.as_ref().unwrap();
        assert_eq!(
            children[0].text_style,
            Some(TextStyle {
                font_size: Some(28.0),
                font_weight: Some("bold".to_string()),
                color: Some("#1976D2".to_string()),
                ..Default::default()
            })
        );
        assert_eq!(
            children[1].columns,
            Some(vec![TableColumn {
                weight: Some(2.0),
                horizontal_alignment: Some("start".to_string()),
                ..TableColumn::new("Product")
            }])
        );
        assert_eq!(
            children[1].table_data.as_ref().unwrap()[0][1],
            TableCell {
                action: Some("view_laptop_x1".to_string()),
                background_color: Some("#2196F3".to_string()),
                ..TableCell::new("View")
            }
        );
    }
}
