use glam::Vec2;

/// Client-space rectangle of the canvas element, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClientRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

// ---------------- Pointer helpers ----------------
/// Map a pointer's client coordinates into surface pixels. A collapsed rect
/// falls back to the raw offset from its corner.
#[inline]
pub fn client_to_surface(
    client: Vec2,
    rect: ClientRect,
    surface_width: f32,
    surface_height: f32,
) -> Vec2 {
    let x_css = client.x - rect.left;
    let y_css = client.y - rect.top;
    if rect.width > 0.0 && rect.height > 0.0 {
        Vec2::new(
            x_css / rect.width * surface_width,
            y_css / rect.height * surface_height,
        )
    } else {
        Vec2::new(x_css, y_css)
    }
}

/// Viewport extent from `innerWidth`/`innerHeight`, which arrive as loosely
/// typed JS numbers.
#[inline]
pub fn viewport_extent(inner_width: Option<f64>, inner_height: Option<f64>) -> (f32, f32) {
    let clean = |v: Option<f64>| match v {
        Some(v) if v.is_finite() && v > 0.0 => v as f32,
        _ => 0.0,
    };
    (clean(inner_width), clean(inner_height))
}
