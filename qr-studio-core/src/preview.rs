//! Local terminal preview of the encoded target.
//!
//! Rendered with Unicode half blocks so that one text row holds two module rows.

use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode};

use crate::error::{StudioError, StudioResult};

/// Render `data` as a QR code made of half-block characters.
///
/// `invert` swaps dark and light modules for light-on-dark terminals.
pub fn render_terminal(data: &str, invert: bool) -> StudioResult<String> {
    let code = QrCode::with_error_correction_level(data, EcLevel::M)
        .map_err(|e| StudioError::Preview(e.to_string()))?;

    let (dark, light) = if invert {
        (unicode::Dense1x2::Light, unicode::Dense1x2::Dark)
    } else {
        (unicode::Dense1x2::Dark, unicode::Dense1x2::Light)
    };

    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(dark)
        .light_color(light)
        .quiet_zone(true)
        .build())
}

/// Width and height (in terminal cells) of a rendered preview
pub fn rendered_size(preview: &str) -> (u16, u16) {
    let height = preview.lines().count();
    let width = preview.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    (
        u16::try_from(width).unwrap_or(u16::MAX),
        u16::try_from(height).unwrap_or(u16::MAX),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn renders_square_block() {
        let preview = render_terminal("https://example.com", false).unwrap();
        let (width, height) = rendered_size(&preview);
        assert!(width > 20);
        // 两行模块合成一行字符
        assert_eq!(height, width.div_ceil(2));
        assert!(preview.contains('█') || preview.contains('▀') || preview.contains('▄'));
    }

    #[test]
    fn invert_changes_output() {
        let normal = render_terminal("qr", false).unwrap();
        let inverted = render_terminal("qr", true).unwrap();
        assert_ne!(normal, inverted);
        assert_eq!(rendered_size(&normal), rendered_size(&inverted));
    }

    #[test]
    fn oversized_data_is_preview_error() {
        let err = render_terminal(&"x".repeat(8000), false).unwrap_err();
        assert!(matches!(err, StudioError::Preview(_)));
        assert!(err.is_expected());
    }
}
