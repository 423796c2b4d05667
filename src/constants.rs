// DOM-facing constants for the background layers.

// Events the layers subscribe to
pub const RESIZE_EVENT: &str = "resize";
pub const POINTER_DOWN_EVENT: &str = "pointerdown";

// Stacking: layers sit behind all page content
pub const LAYER_Z_INDEX: i32 = -1;

// Frame statistics are logged roughly this often
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;
