use glam::Vec2;

/// Maps source-document coordinates into the target composition's pixel
/// space. Injected into the encoder so axis, unit and handle-length
/// conventions stay out of the geometry extraction itself.
///
/// Positions go through the full affine map; tangent offsets only pick up
/// the linear part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordMapping {
    scale: Vec2,
    offset: Vec2,
}

impl CoordMapping {
    pub fn new(scale: Vec2, offset: Vec2) -> Self {
        Self { scale, offset }
    }

    /// Passes coordinates through unchanged.
    pub fn identity() -> Self {
        Self::new(Vec2::ONE, Vec2::ZERO)
    }

    /// Flips the y axis into a y-down space of the given height.
    pub fn flip_y(height: f32) -> Self {
        Self::new(Vec2::new(1.0, -1.0), Vec2::new(0.0, height))
    }

    pub fn point(&self, p: Vec2) -> [f32; 2] {
        let q = p * self.scale + self.offset;
        [q.x, q.y]
    }

    /// Maps a direction or offset; translation does not apply.
    pub fn vector(&self, v: Vec2) -> [f32; 2] {
        let q = v * self.scale;
        [q.x, q.y]
    }
}

impl Default for CoordMapping {
    fn default() -> Self {
        Self::identity()
    }
}
