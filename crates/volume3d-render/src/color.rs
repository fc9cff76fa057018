//! Color specification parsing.
//!
//! Accepts hex forms (`#rgb`, `#rrggbb`, `#rrggbbaa`), functional forms
//! (`rgb(r, g, b)`, `rgba(r, g, b, a)`) and a small table of CSS color names.
//! Results are RGBA with every channel in `[0, 1]`.

use glam::Vec4;
use volume3d_core::error::{Result, Volume3dError};

/// Named colors understood by [`parse_color`], as 8-bit RGB.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("lightgray", [211, 211, 211]),
    ("darkgray", [169, 169, 169]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("brown", [165, 42, 42]),
    ("pink", [255, 192, 203]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
    ("olive", [128, 128, 0]),
    ("maroon", [128, 0, 0]),
];

/// Builds an opaque color from 8-bit channels.
#[must_use]
pub fn rgb8(r: u8, g: u8, b: u8) -> Vec4 {
    Vec4::new(
        f32::from(r) / 255.0,
        f32::from(g) / 255.0,
        f32::from(b) / 255.0,
        1.0,
    )
}

/// Parses a color specification into RGBA.
pub fn parse_color(spec: &str) -> Result<Vec4> {
    let trimmed = spec.trim();
    let invalid = || Volume3dError::InvalidColor(spec.to_string());

    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    let lower = trimmed.to_ascii_lowercase();
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        return parse_functional(args, lower.starts_with("rgba")).ok_or_else(invalid);
    }

    if lower == "transparent" {
        return Ok(Vec4::ZERO);
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|&(_, [r, g, b])| rgb8(r, g, b))
        .ok_or_else(invalid)
}

/// Parses each entry of `specs`, failing on the first malformed one.
pub fn parse_color_array<S: AsRef<str>>(specs: &[S]) -> Result<Vec<Vec4>> {
    specs.iter().map(|s| parse_color(s.as_ref())).collect()
}

/// Drops the alpha channel.
#[must_use]
pub fn to_rgb(color: Vec4) -> [f32; 3] {
    [color.x, color.y, color.z]
}

fn parse_hex(hex: &str) -> Option<Vec4> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok();
    let nibble = |s: &str| byte(s).map(|v| v * 17);

    match hex.len() {
        3 => Some(rgb8(
            nibble(&hex[0..1])?,
            nibble(&hex[1..2])?,
            nibble(&hex[2..3])?,
        )),
        6 => Some(rgb8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
        8 => {
            let mut color = rgb8(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?);
            color.w = f32::from(byte(&hex[6..8])?) / 255.0;
            Some(color)
        }
        _ => None,
    }
}

fn parse_functional(args: &str, has_alpha: bool) -> Option<Vec4> {
    let parts: Vec<f32> = args
        .split(',')
        .map(|p| p.trim().parse::<f32>().ok())
        .collect::<Option<_>>()?;

    let channel = |v: f32| (v.clamp(0.0, 255.0)) / 255.0;
    match (parts.as_slice(), has_alpha) {
        ([r, g, b], false) => Some(Vec4::new(channel(*r), channel(*g), channel(*b), 1.0)),
        ([r, g, b, a], true) => Some(Vec4::new(
            channel(*r),
            channel(*g),
            channel(*b),
            a.clamp(0.0, 1.0),
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec4, b: Vec4) {
        assert!(a.abs_diff_eq(b, 1e-6), "{a:?} != {b:?}");
    }

    #[test]
    fn test_hex_forms() {
        assert_close(parse_color("#fff").unwrap(), Vec4::ONE);
        assert_close(parse_color("#ff0000").unwrap(), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_close(
            parse_color("#00FF0080").unwrap(),
            Vec4::new(0.0, 1.0, 0.0, 128.0 / 255.0),
        );
        assert_close(
            parse_color("#444").unwrap(),
            Vec4::new(68.0 / 255.0, 68.0 / 255.0, 68.0 / 255.0, 1.0),
        );
    }

    #[test]
    fn test_functional_forms() {
        assert_close(
            parse_color("rgb(255, 0, 51)").unwrap(),
            Vec4::new(1.0, 0.0, 0.2, 1.0),
        );
        assert_close(
            parse_color("RGBA(0,0,255,0.5)").unwrap(),
            Vec4::new(0.0, 0.0, 1.0, 0.5),
        );
    }

    #[test]
    fn test_named_colors() {
        assert_close(parse_color("white").unwrap(), Vec4::ONE);
        assert_close(parse_color(" Red ").unwrap(), Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_close(parse_color("transparent").unwrap(), Vec4::ZERO);
    }

    #[test]
    fn test_invalid_colors() {
        for bad in ["", "#12", "#gggggg", "rgb(1,2)", "rgba(1,2,3)", "notacolor"] {
            assert!(
                matches!(parse_color(bad), Err(Volume3dError::InvalidColor(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_color_array() {
        let colors = parse_color_array(&["red", "#00f"]).unwrap();
        assert_eq!(colors.len(), 2);
        assert!(parse_color_array(&["red", "nope"]).is_err());
        assert_eq!(to_rgb(colors[1]), [0.0, 0.0, 1.0]);
    }
}
