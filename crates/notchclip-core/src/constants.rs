// Shared animation tuning constants used by the web frontend and host tests.

// Grid-line layer
pub const GRID_SIZE: f32 = 60.0; // px between neighbouring lines
pub const GRID_SCROLL_X_PER_SEC: f64 = 20.0; // horizontal drift, px/s
pub const GRID_SCROLL_Y_PER_SEC: f64 = 15.0; // vertical drift, px/s
pub const GRID_PHASE_PER_PX: f64 = 0.01; // phase shift per px of position
pub const GRID_LINE_ALPHA_BASE: f32 = 0.05;
pub const GRID_LINE_ALPHA_SWING: f32 = 0.03;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const GRID_DOT_RADIUS_BASE: f32 = 2.0;
pub const GRID_DOT_RADIUS_SWING: f32 = 1.0;
pub const GRID_DOT_ALPHA: f32 = 0.15;
pub const GRID_INK_RGB: u32 = 0x18181B; // page ink colour

// Particle ("water") layer
pub const CELL_SIZE: f32 = 10.0; // side of one particle square, px
pub const PARTICLE_RGB: u32 = 0x00008B; // dark blue
pub const PARTICLE_ALPHA: f32 = 0.7;
pub const WATER_BACKGROUND_RGB: u32 = 0xADD8E6; // light blue
pub const PIXELATE_BLOCK: u32 = 10; // post-process block size, px

// Ripple response to pointer-down
pub const RIPPLE_RADIUS: f32 = 100.0; // strictly-less-than cutoff, px
pub const RIPPLE_DEPTH: f32 = 0.5; // scale at the pointer is 1 - depth
pub const RIPPLE_RESET_MS: u32 = 300;

// Clock
pub const MS_TO_SEC: f64 = 0.001;
