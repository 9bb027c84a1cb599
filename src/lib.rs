pub mod canvas;
pub mod domain;
pub mod ruler;
pub mod settings;
pub mod theme;

// Export the widget
pub use ruler::{RulerGeometry, RulerStyle, TimeRuler, DEFAULT_RULER_HEIGHT};

// Export drawing surfaces
pub use canvas::{DrawCommand, LabelStyle, PainterCanvas, RecordingCanvas, RulerCanvas, ViewClip};

// Export layout helpers
pub use domain::{render_window, RenderWindow, Tick};

// Export settings and theme support
pub use settings::RulerSettings;
pub use theme::{hex_to_color32, Theme, ThemeColors, ThemeManager};
