//! Color resolution for style building.
//!
//! Symbolizer colors arrive either as named colors ("blue") or as "#RRGGBB"
//! hex literals. Opacity is only honored for hex literals; named colors pass
//! through unchanged.

/// Convert a "#RRGGBB" literal to an "rgb(r, g, b)" string, or to
/// "rgba(r, g, b, a)" when a non-zero opacity is given.
///
/// Only called for strings starting with '#'. Malformed hex is not
/// validated: channels that fail to parse resolve to 0 and the garbage
/// propagates to the renderer.
pub fn hex_to_color(hex: &str, opacity: Option<f64>) -> String {
    let r = parse_channel(hex, 1);
    let g = parse_channel(hex, 3);
    let b = parse_channel(hex, 5);
    match opacity {
        Some(alpha) if alpha != 0.0 => format!("rgba({}, {}, {}, {})", r, g, b, alpha),
        _ => format!("rgb({}, {}, {})", r, g, b),
    }
}

fn parse_channel(hex: &str, start: usize) -> u8 {
    hex.get(start..start + 2)
        .and_then(|s| u8::from_str_radix(s, 16).ok())
        .unwrap_or(0)
}

/// Resolve a symbolizer color against an optional opacity.
///
/// A hex literal with a non-zero opacity becomes an rgba string; anything
/// else passes through unchanged. `None` means the symbolizer supplied no
/// color at all, and the caller decides the default.
pub fn resolve_color(color: Option<&str>, opacity: Option<f64>) -> Option<String> {
    let color = color?;
    match opacity {
        Some(alpha) if alpha != 0.0 && color.starts_with('#') => {
            Some(hex_to_color(color, Some(alpha)))
        }
        _ => Some(color.to_string()),
    }
}
