//! Chainable builders for the node model.
//!
//! Every setter fills exactly one field and hands the builder back. Nested
//! values are taken as `impl Into<T>`, so a finished value and an unfinished
//! builder can be passed interchangeably.

use crate::types::{Modifier, Node, TableCell, TableColumn, TextStyle};

#[derive(Debug, Clone, Default)]
pub struct ModifierBuilder {
    model: Modifier,
}

impl ModifierBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn height(mut self, height: i32) -> Self {
        self.model.height = Some(height);
        self
    }

    pub fn width(mut self, width: i32) -> Self {
        self.model.width = Some(width);
        self
    }

    pub fn weight(mut self, weight: impl Into<f64>) -> Self {
        self.model.weight = Some(weight.into());
        self
    }

    pub fn padding(mut self, padding: i32) -> Self {
        self.model.padding = Some(padding);
        self
    }

    pub fn padding_top(mut self, padding: i32) -> Self {
        self.model.padding_top = Some(padding);
        self
    }

    pub fn padding_bottom(mut self, padding: i32) -> Self {
        self.model.padding_bottom = Some(padding);
        self
    }

    pub fn padding_start(mut self, padding: i32) -> Self {
        self.model.padding_start = Some(padding);
        self
    }

    pub fn padding_end(mut self, padding: i32) -> Self {
        self.model.padding_end = Some(padding);
        self
    }

    pub fn fill_max_size(mut self) -> Self {
        self.model.fill_max_size = Some(true);
        self
    }

    pub fn fill_max_width(mut self) -> Self {
        self.model.fill_max_width = Some(true);
        self
    }

    pub fn vertical_scroll(mut self) -> Self {
        self.model.vertical_scroll = Some(true);
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.model.background_color = Some(color.into());
        self
    }

    pub fn horizontal_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.model.horizontal_alignment = Some(alignment.into());
        self
    }

    pub fn vertical_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.model.vertical_alignment = Some(alignment.into());
        self
    }

    pub fn content_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.model.content_alignment = Some(alignment.into());
        self
    }

    pub fn build(self) -> Modifier {
        self.model
    }
}

impl From<ModifierBuilder> for Modifier {
    fn from(builder: ModifierBuilder) -> Self {
        builder.build()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextStyleBuilder {
    model: TextStyle,
}

impl TextStyleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn font_size(mut self, size: impl Into<f64>) -> Self {
        self.model.font_size = Some(size.into());
        self
    }

    pub fn font_weight(mut self, weight: impl Into<String>) -> Self {
        self.model.font_weight = Some(weight.into());
        self
    }

    /// Shorthand for `font_weight("bold")`.
    pub fn bold(self) -> Self {
        self.font_weight("bold")
    }

    pub fn text_align(mut self, align: impl Into<String>) -> Self {
        self.model.text_align = Some(align.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.model.color = Some(color.into());
        self
    }

    pub fn build(self) -> TextStyle {
        self.model
    }
}

impl From<TextStyleBuilder> for TextStyle {
    fn from(builder: TextStyleBuilder) -> Self {
        builder.build()
    }
}

#[derive(Debug, Clone)]
pub struct TableColumnBuilder {
    model: TableColumn,
}

impl TableColumnBuilder {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            model: TableColumn::new(header),
        }
    }

    pub fn weight(mut self, weight: impl Into<f64>) -> Self {
        self.model.weight = Some(weight.into());
        self
    }

    pub fn width(mut self, width: i32) -> Self {
        self.model.width = Some(width);
        self
    }

    pub fn horizontal_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.model.horizontal_alignment = Some(alignment.into());
        self
    }

    pub fn text_style(mut self, style: impl Into<TextStyle>) -> Self {
        self.model.text_style = Some(style.into());
        self
    }

    pub fn header_style(mut self, style: impl Into<TextStyle>) -> Self {
        self.model.header_style = Some(style.into());
        self
    }

    pub fn build(self) -> TableColumn {
        self.model
    }
}

impl From<TableColumnBuilder> for TableColumn {
    fn from(builder: TableColumnBuilder) -> Self {
        builder.build()
    }
}

#[derive(Debug, Clone)]
pub struct TableCellBuilder {
    model: TableCell,
}

impl TableCellBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            model: TableCell::new(text),
        }
    }

    pub fn text_style(mut self, style: impl Into<TextStyle>) -> Self {
        self.model.text_style = Some(style.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.model.background_color = Some(color.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.model.action = Some(action.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<Modifier>) -> Self {
        self.model.modifier = Some(modifier.into());
        self
    }

    pub fn show_border(mut self, show: bool) -> Self {
        self.model.show_border = Some(show);
        self
    }

    pub fn build(self) -> TableCell {
        self.model
    }
}

impl From<TableCellBuilder> for TableCell {
    fn from(builder: TableCellBuilder) -> Self {
        builder.build()
    }
}

#[derive(Debug, Clone)]
pub struct NodeBuilder {
    model: Node,
}

impl NodeBuilder {
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            model: Node::new(node_type),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.model.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.model.description = Some(description.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.model.label = Some(label.into());
        self
    }

    pub fn background_color(mut self, color: impl Into<String>) -> Self {
        self.model.background_color = Some(color.into());
        self
    }

    pub fn elevation(mut self, elevation: impl Into<f64>) -> Self {
        self.model.elevation = Some(elevation.into());
        self
    }

    pub fn image_url(mut self, url: impl Into<String>) -> Self {
        self.model.image_url = Some(url.into());
        self
    }

    pub fn image_height(mut self, height: impl Into<f64>) -> Self {
        self.model.image_height = Some(height.into());
        self
    }

    pub fn image_width(mut self, width: impl Into<f64>) -> Self {
        self.model.image_width = Some(width.into());
        self
    }

    pub fn content_description(mut self, description: impl Into<String>) -> Self {
        self.model.content_description = Some(description.into());
        self
    }

    pub fn action(mut self, action: impl Into<String>) -> Self {
        self.model.action = Some(action.into());
        self
    }

    pub fn modifier(mut self, modifier: impl Into<Modifier>) -> Self {
        self.model.modifier = Some(modifier.into());
        self
    }

    pub fn text_style(mut self, style: impl Into<TextStyle>) -> Self {
        self.model.text_style = Some(style.into());
        self
    }

    pub fn top_bar(mut self, top_bar: impl Into<Node>) -> Self {
        self.model.top_bar = Some(Box::new(top_bar.into()));
        self
    }

    pub fn floating_action_button(mut self, button: impl Into<Node>) -> Self {
        self.model.floating_action_button = Some(Box::new(button.into()));
        self
    }

    pub fn content(mut self, content: impl Into<Node>) -> Self {
        self.model.content = Some(Box::new(content.into()));
        self
    }

    /// Replaces the children. An empty iterator still marks `children` as set.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.model.children = Some(children.into_iter().map(Into::into).collect());
        self
    }

    /// Appends one child after any already present.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.model
            .children
            .get_or_insert_with(Vec::new)
            .push(child.into());
        self
    }

    pub fn button_variant(mut self, variant: impl Into<String>) -> Self {
        self.model.button_variant = Some(variant.into());
        self
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TableColumn>,
    {
        self.model.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn column(mut self, column: impl Into<TableColumn>) -> Self {
        self.model
            .columns
            .get_or_insert_with(Vec::new)
            .push(column.into());
        self
    }

    /// Replaces all rows. Cells may be values or builders.
    pub fn table_data<R, C>(mut self, rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<TableCell>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        self.model.table_data = Some(rows);
        self
    }

    /// Appends one row of cells.
    pub fn row<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<TableCell>,
    {
        let row = cells.into_iter().map(Into::into).collect();
        self.model
            .table_data
            .get_or_insert_with(Vec::new)
            .push(row);
        self
    }

    pub fn show_borders(mut self, show: bool) -> Self {
        self.model.show_borders = Some(show);
        self
    }

    pub fn header_background_color(mut self, color: impl Into<String>) -> Self {
        self.model.header_background_color = Some(color.into());
        self
    }

    pub fn row_action(mut self, action: impl Into<String>) -> Self {
        self.model.row_action = Some(action.into());
        self
    }

    pub fn rounded_corners(mut self, radius: impl Into<f64>) -> Self {
        self.model.rounded_corners = Some(radius.into());
        self
    }

    pub fn use_lazy_column(mut self, lazy: bool) -> Self {
        self.model.use_lazy_column = Some(lazy);
        self
    }

    pub fn build(self) -> Node {
        self.model
    }
}

impl From<NodeBuilder> for Node {
    fn from(builder: NodeBuilder) -> Self {
        builder.build()
    }
}
