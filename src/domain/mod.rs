//! Pure ruler layout logic.
//!
//! This module contains the stateless calculations behind the time ruler:
//! - Render window (which horizontal pixel range is worth drawing)
//! - Tick layout (which tick indices land inside that range, and where)
//!
//! Nothing here touches a drawing surface, so it can be tested in isolation.

pub mod render_window;
pub mod tick_layout;

pub use render_window::{render_window, RenderWindow, ViewClip, RENDER_MARGIN_FRACTION};
pub use tick_layout::{
    minute_ticks, ruler_extent, sub_minute_ticks, tick_limit, Tick, VisibleTicks,
    MAX_DEGENERATE_TICKS, SUB_TICKS_PER_MARKER,
};
