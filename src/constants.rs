//! Application-wide constants.

/// Display name of the application.
pub const APP_NAME: &str = "TeXpad";

/// Binary name, used in help text and error hints.
pub const APP_BINARY_NAME: &str = "texpad";

/// Directory name under the platform config dir holding `config.toml`.
pub const APP_CONFIG_DIR: &str = "texpad";

/// Fixed filename for image export.
pub const DEFAULT_EXPORT_FILENAME: &str = "equation.png";

/// Default scale factor applied to the typeset size when capturing a PNG.
///
/// MathJax reports sizes in ex-derived units, so the natural size of a
/// formula is only a few dozen pixels; exports are upscaled by default.
pub const DEFAULT_EXPORT_ZOOM: f32 = 8.0;

/// Source text seeded into the editor when no file is given.
pub const DEFAULT_SOURCE: &str = "\\int_0^\\infty e^{-x^2} dx = \\sqrt{\\pi}";

/// Default display color (hex) used when neither config nor CLI set one.
pub const DEFAULT_COLOR: &str = "#FFFFFF";
