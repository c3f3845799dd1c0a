/// Horizontal displacement (units leftward) required for a back swipe.
pub const BACK_SWIPE_MIN_DX: f32 = 50.0;

/// Maximum vertical displacement tolerated during a back swipe.
pub const BACK_SWIPE_MAX_DY: f32 = 100.0;

/// Recognizes a right-to-left back swipe from end-of-drag displacement.
pub fn is_back_swipe(dx: f32, dy: f32) -> bool {
    dx < -BACK_SWIPE_MIN_DX && dy.abs() < BACK_SWIPE_MAX_DY
}
