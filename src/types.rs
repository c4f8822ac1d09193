use serde::{Deserialize, Serialize};

/// `type` discriminators understood by the rendering clients.
pub mod node_type {
    pub const SCAFFOLD: &str = "Scaffold";
    pub const TOP_APP_BAR: &str = "TopAppBar";
    pub const COLUMN: &str = "Column";
    pub const ROW: &str = "Row";
    pub const BOX: &str = "Box";
    pub const LAZY_COLUMN: &str = "LazyColumn";
    pub const TEXT: &str = "Text";
    pub const BUTTON: &str = "Button";
    pub const CARD: &str = "Card";
    pub const IMAGE: &str = "Image";
    pub const TABLE: &str = "Table";
    pub const SPACER: &str = "Spacer";
    pub const DIVIDER: &str = "Divider";
    pub const VIDEO_ITEM: &str = "VideoItem";
    pub const HORIZONTAL_PAGER: &str = "HorizontalPager";
}

/// Values for [`Node::button_variant`]. Clients treat an absent variant as filled.
pub mod button_variant {
    pub const FILLED: &str = "filled";
    pub const OUTLINED: &str = "outlined";
    pub const TEXT: &str = "text";
}

/// Layout and visual directives. An absent field means "inherit the client default".
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Modifier {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    /// Flex proportion inside a Row or Column.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::number::optional_float"
    )]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_start: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_end: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_max_size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_max_width: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// "start", "center", "end"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<String>,
    /// "top", "center", "bottom"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<String>,
    /// "topstart", "center", "bottomend", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_alignment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_scroll: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    /// Size in sp.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::number::optional_float"
    )]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub header: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::number::optional_float"
    )]
    pub weight: Option<f64>,
    /// Fixed width in dp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<String>,
    /// Style of the data cells in this column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_style: Option<TextStyle>,
}

impl TableColumn {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
    /// Overrides the table-wide `showBorders` for this cell.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_border: Option<bool>,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// One element of the UI tree.
///
/// Every node type shares this flat record; `node_type` decides which of the
/// other fields a client looks at. Nothing here checks that the populated
/// fields make sense for the type.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::number::optional_float"
    )]
    pub elevation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::number::optional_float"
    )]
    pub image_height: Option<f64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::number::optional_float"
    )]
    pub image_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modifier: Option<Modifier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<TextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_bar: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floating_action_button: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Box<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<TableColumn>>,
    /// Row-major; rows may differ in length from each other and from `columns`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_data: Option<Vec<Vec<TableCell>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_borders: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub row_action: Option<String>,
    /// Corner radius in dp.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::number::optional_float"
    )]
    pub rounded_corners: Option<f64>,
    /// Tables render rows lazily unless this is `false`, e.g. inside a scrolling parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_lazy_column: Option<bool>,
}

impl Node {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            ..Default::default()
        }
    }

    pub fn is_type(&self, node_type: &str) -> bool {
        self.node_type == node_type
    }

    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, |c| c.len())
    }

    /// Visits this node and every nested node, parents before children.
    ///
    /// Slot order is `topBar`, `content`, `floatingActionButton`, then
    /// `children` in sequence. The root has depth 0.
    pub fn walk<F: FnMut(&Node, usize)>(&self, f: &mut F) {
        self.walk_at(0, f);
    }

    fn walk_at<F: FnMut(&Node, usize)>(&self, depth: usize, f: &mut F) {
        f(self, depth);
        for slot in [&self.top_bar, &self.content, &self.floating_action_button] {
            if let Some(node) = slot {
                node.walk_at(depth + 1, f);
            }
        }
        for child in self.children.iter().flatten() {
            child.walk_at(depth + 1, f);
        }
    }

    /// Every action identifier in the tree, in visiting order.
    ///
    /// Per node: `action`, then `rowAction`, then cell actions row by row.
    pub fn actions(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_actions(&mut out);
        out
    }

    fn collect_actions<'a>(&'a self, out: &mut Vec<&'a str>) {
        out.extend(self.action.as_deref());
        out.extend(self.row_action.as_deref());
        for row in self.table_data.iter().flatten() {
            out.extend(row.iter().filter_map(|cell| cell.action.as_deref()));
        }
        for slot in [&self.top_bar, &self.content, &self.floating_action_button] {
            if let Some(node) = slot {
                node.collect_actions(out);
            }
        }
        for child in self.children.iter().flatten() {
            child.collect_actions(out);
        }
    }
}
