// Pure string builders for canvas fill/stroke styles and the layer's CSS.
// Kept free of web-sys so host tests can include this file directly.

use notchclip_core::Rgba;

#[inline]
pub fn css_color(c: Rgba) -> String {
    format!("rgba({}, {}, {}, {:.3})", c.r, c.g, c.b, c.a.clamp(0.0, 1.0))
}

/// Inline style for a full-viewport background canvas.
pub fn layer_style(z_index: i32, interactive: bool) -> String {
    let pointer = if interactive { "auto" } else { "none" };
    format!(
        "position:fixed;top:0;left:0;width:100vw;height:100vh;z-index:{};pointer-events:{};display:block",
        z_index, pointer
    )
}

/// Extent of the low-resolution buffer used for pixelation.
#[inline]
pub fn pixelated_extent(width: u32, height: u32, block: u32) -> (u32, u32) {
    let block = block.max(1);
    (width.div_ceil(block).max(1), height.div_ceil(block).max(1))
}
