// math.rs
// Scalar and 2D vector helpers shared by placement and collision code

use ultraviolet::Vec2;

/// Euclidean distance between two points given by their coordinates.
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

/// Rotate a vector by `angle` radians (counter-clockwise for positive angles).
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}
