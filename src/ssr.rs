//! Named constructors for the common node archetypes.
//!
//! ```
//! use ssr_simple::ssr;
//!
//! let screen = ssr::scaffold()
//!     .top_bar(ssr::top_app_bar("Inventory"))
//!     .content(
//!         ssr::column()
//!             .modifier(ssr::modifier().padding(16).fill_max_size())
//!             .child(ssr::text("Hello").text_style(ssr::text_style().font_size(14).bold()))
//!             .child(ssr::spacer(16)),
//!     )
//!     .build();
//! assert_eq!(screen.node_type, "Scaffold");
//! ```

use crate::builder::{
    ModifierBuilder, NodeBuilder, TableCellBuilder, TableColumnBuilder, TextStyleBuilder,
};
use crate::types::{button_variant, node_type};

/// Elevation given to [`video_item`] unless overridden.
pub const VIDEO_ITEM_ELEVATION: f64 = 4.0;
/// Corner radius given to [`video_item`] unless overridden.
pub const VIDEO_ITEM_ROUNDED_CORNERS: f64 = 12.0;

pub fn scaffold() -> NodeBuilder {
    NodeBuilder::new(node_type::SCAFFOLD)
}

pub fn top_app_bar(title: impl Into<String>) -> NodeBuilder {
    NodeBuilder::new(node_type::TOP_APP_BAR).title(title)
}

pub fn column() -> NodeBuilder {
    NodeBuilder::new(node_type::COLUMN)
}

pub fn row() -> NodeBuilder {
    NodeBuilder::new(node_type::ROW)
}

/// A stacking container (`"Box"`); the trailing underscore avoids clashing with `Box`.
pub fn box_() -> NodeBuilder {
    NodeBuilder::new(node_type::BOX)
}

pub fn lazy_column() -> NodeBuilder {
    NodeBuilder::new(node_type::LAZY_COLUMN)
}

pub fn text(title: impl Into<String>) -> NodeBuilder {
    NodeBuilder::new(node_type::TEXT).title(title)
}

/// A button with no explicit variant, which clients draw filled.
pub fn button(label: impl Into<String>) -> NodeBuilder {
    NodeBuilder::new(node_type::BUTTON).label(label)
}

pub fn outlined_button(label: impl Into<String>) -> NodeBuilder {
    button(label).button_variant(button_variant::OUTLINED)
}

pub fn text_button(label: impl Into<String>) -> NodeBuilder {
    button(label).button_variant(button_variant::TEXT)
}

pub fn card() -> NodeBuilder {
    NodeBuilder::new(node_type::CARD)
}

pub fn image(image_url: impl Into<String>) -> NodeBuilder {
    NodeBuilder::new(node_type::IMAGE).image_url(image_url)
}

pub fn table() -> NodeBuilder {
    NodeBuilder::new(node_type::TABLE)
}

/// Vertical gap: a `"Spacer"` whose modifier carries only `height`.
pub fn spacer(height: i32) -> NodeBuilder {
    NodeBuilder::new(node_type::SPACER).modifier(ModifierBuilder::new().height(height))
}

pub fn divider() -> NodeBuilder {
    NodeBuilder::new(node_type::DIVIDER)
}

pub fn horizontal_pager() -> NodeBuilder {
    NodeBuilder::new(node_type::HORIZONTAL_PAGER)
}

/// A video thumbnail card.
///
/// Besides the given fields it sets `elevation` to [`VIDEO_ITEM_ELEVATION`]
/// and `roundedCorners` to [`VIDEO_ITEM_ROUNDED_CORNERS`]. Both are written
/// to the JSON like any other field and can be overridden on the builder.
pub fn video_item(
    title: impl Into<String>,
    description: impl Into<String>,
    image_url: impl Into<String>,
    action: impl Into<String>,
) -> NodeBuilder {
    NodeBuilder::new(node_type::VIDEO_ITEM)
        .title(title)
        .description(description)
        .image_url(image_url)
        .action(action)
        .elevation(VIDEO_ITEM_ELEVATION)
        .rounded_corners(VIDEO_ITEM_ROUNDED_CORNERS)
}

/// [`video_item`] with explicit elevation, corner radius and background.
pub fn video_item_styled(
    title: impl Into<String>,
    description: impl Into<String>,
    image_url: impl Into<String>,
    action: impl Into<String>,
    elevation: f64,
    rounded_corners: f64,
    background_color: impl Into<String>,
) -> NodeBuilder {
    video_item(title, description, image_url, action)
        .elevation(elevation)
        .rounded_corners(rounded_corners)
        .background_color(background_color)
}

pub fn table_column(header: impl Into<String>) -> TableColumnBuilder {
    TableColumnBuilder::new(header)
}

pub fn cell(text: impl Into<String>) -> TableCellBuilder {
    TableCellBuilder::new(text)
}

pub fn modifier() -> ModifierBuilder {
    ModifierBuilder::new()
}

pub fn text_style() -> TextStyleBuilder {
    TextStyleBuilder::new()
}

pub fn heading_style() -> TextStyleBuilder {
    text_style().font_size(24).bold().color("#212121")
}

pub fn title_style() -> TextStyleBuilder {
    text_style().font_size(18).bold().color("#212121")
}

pub fn body_style() -> TextStyleBuilder {
    text_style().font_size(14).color("#757575")
}

/// For text on saturated backgrounds, e.g. status cells.
pub fn white_text_style() -> TextStyleBuilder {
    text_style().color("#FFFFFF").bold()
}
