use egui::Color32;

/// Parse a `#rrggbb` or `#rgb` hex string into an opaque color.
///
/// Returns `None` for anything else; callers pick their own fallback.
pub fn parse_hex(hex: &str) -> Option<Color32> {
    let digits = hex.trim().strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            let expand = |i: usize| {
                u8::from_str_radix(&digits[i..i + 1], 16)
                    .ok()
                    .map(|v| v * 17)
            };
            Some(Color32::from_rgb(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => None,
    }
}

/// Format a color as `#rrggbb`, dropping alpha.
pub fn to_hex(color: Color32) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
