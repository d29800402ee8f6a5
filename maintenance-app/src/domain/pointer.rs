/// Multiplier applied to the normalized pointer displacement.
pub const POINTER_SCALE: f64 = 20.0;

/// Pointer location in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Bounding box of the content container, in the same space as `PointerPosition`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContainerRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ContainerRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> PointerPosition {
        PointerPosition::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub const ZERO: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };

    /// Displacement of `position` from the center of `rect`, normalized by the
    /// rect size and scaled by [`POINTER_SCALE`].
    pub fn from_pointer(position: PointerPosition, rect: ContainerRect) -> Self {
        if rect.is_degenerate() {
            return Self::ZERO;
        }

        let center = rect.center();
        Self {
            x: (position.x - center.x) / rect.width * POINTER_SCALE,
            y: (position.y - center.y) / rect.height * POINTER_SCALE,
        }
    }
}
