// Presentation layer - HTTP surface, page and chart rendering
pub mod app_state;
pub mod chart_options;
pub mod handlers;
pub mod page;
pub mod router;
pub mod scatter_svg;
pub mod tooltip;
