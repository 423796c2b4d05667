// Host-side tests for pure input and style helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}
mod style {
    include!("../src/style.rs");
}

use glam::Vec2;
use input::*;
use notchclip_core::Rgba;
use style::*;

#[test]
fn client_to_surface_identity_when_css_matches_surface() {
    let rect = ClientRect {
        left: 0.0,
        top: 0.0,
        width: 800.0,
        height: 600.0,
    };
    let p = client_to_surface(Vec2::new(400.0, 300.0), rect, 800.0, 600.0);
    assert_eq!(p, Vec2::new(400.0, 300.0));
}

#[test]
fn client_to_surface_subtracts_offset_and_scales() {
    let rect = ClientRect {
        left: 10.0,
        top: 20.0,
        width: 400.0,
        height: 300.0,
    };
    // Surface has twice the CSS resolution.
    let p = client_to_surface(Vec2::new(210.0, 170.0), rect, 800.0, 600.0);
    assert!((p.x - 400.0).abs() < 1e-4);
    assert!((p.y - 300.0).abs() < 1e-4);
}

#[test]
fn client_to_surface_falls_back_on_collapsed_rect() {
    let rect = ClientRect {
        left: 5.0,
        top: 5.0,
        width: 0.0,
        height: 0.0,
    };
    let p = client_to_surface(Vec2::new(15.0, 25.0), rect, 800.0, 600.0);
    assert_eq!(p, Vec2::new(10.0, 20.0));
}

#[test]
fn viewport_extent_sanitizes_missing_and_bogus_values() {
    assert_eq!(viewport_extent(Some(1280.0), Some(720.0)), (1280.0, 720.0));
    assert_eq!(viewport_extent(None, Some(720.0)), (0.0, 720.0));
    assert_eq!(viewport_extent(Some(f64::NAN), Some(-3.0)), (0.0, 0.0));
    assert_eq!(viewport_extent(Some(f64::INFINITY), None), (0.0, 0.0));
}

#[test]
fn css_color_formats_rgba_with_three_decimals() {
    let c = Rgba::from_hex(0x00008B, 0.7);
    assert_eq!(css_color(c), "rgba(0, 0, 139, 0.700)");
    let opaque = Rgba::from_hex(0xADD8E6, 1.0);
    assert_eq!(css_color(opaque), "rgba(173, 216, 230, 1.000)");
}

#[test]
fn css_color_clamps_alpha() {
    let c = Rgba {
        r: 1,
        g: 2,
        b: 3,
        a: 4.0,
    };
    assert_eq!(css_color(c), "rgba(1, 2, 3, 1.000)");
}

#[test]
fn layer_style_sets_pointer_events_by_interactivity() {
    let grid = layer_style(-1, false);
    assert!(grid.contains("position:fixed"));
    assert!(grid.contains("z-index:-1"));
    assert!(grid.contains("pointer-events:none"));
    assert!(grid.contains("width:100vw"));
    assert!(grid.contains("height:100vh"));

    let water = layer_style(-1, true);
    assert!(water.contains("pointer-events:auto"));
}

#[test]
fn pixelated_extent_rounds_up_and_never_collapses() {
    assert_eq!(pixelated_extent(800, 600, 10), (80, 60));
    assert_eq!(pixelated_extent(805, 601, 10), (81, 61));
    assert_eq!(pixelated_extent(0, 0, 10), (1, 1));
    assert_eq!(pixelated_extent(7, 3, 0), (7, 3));
}
