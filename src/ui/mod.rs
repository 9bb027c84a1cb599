//! UI panels of the ruler demo:
//! - Controls panel (ruler properties, theme, settings files)
//! - Ruler panel (scrollable ruler)
//! - Status bar (redraw count, last load/save message)
//! - Panel manager (layout and interaction routing)

pub mod controls_panel;
pub mod panel_manager;
pub mod ruler_panel;
pub mod status_bar;
