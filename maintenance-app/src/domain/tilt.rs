use super::PointerOffset;

const PERSPECTIVE_PX: u32 = 1000;
const TRANSITION: &str = "transform 0.1s ease-out";

/// Elements that lean towards the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltTarget {
    TopIcon,
    ContactCard,
    Decorative,
}

impl TiltTarget {
    pub fn sensitivity(self) -> f64 {
        match self {
            Self::TopIcon => 0.3,
            Self::ContactCard => 0.2,
            Self::Decorative => 0.4,
        }
    }
}

/// Rotation in degrees around the horizontal (`rotate_x`) and vertical (`rotate_y`) axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn from_offset(offset: PointerOffset, sensitivity: f64) -> Self {
        // `+ 0.0` folds -0.0 into 0.0 so a centered pointer renders as `0deg`
        Self {
            rotate_x: -offset.y * sensitivity + 0.0,
            rotate_y: offset.x * sensitivity + 0.0,
        }
    }

    pub fn for_target(target: TiltTarget, offset: PointerOffset) -> Self {
        Self::from_offset(offset, target.sensitivity())
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            PERSPECTIVE_PX, self.rotate_x, self.rotate_y
        )
    }

    /// Inline style for the element, transform plus its easing.
    pub fn style(&self) -> String {
        format!("transform: {}; transition: {};", self.transform(), TRANSITION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_pointer_is_flat() {
        for target in [TiltTarget::TopIcon, TiltTarget::ContactCard, TiltTarget::Decorative] {
            let tilt = Tilt::for_target(target, PointerOffset::ZERO);
            assert_eq!(tilt, Tilt::default());
            assert_eq!(
                tilt.transform(),
                "perspective(1000px) rotateX(0deg) rotateY(0deg)"
            );
        }
    }

    #[test]
    fn test_top_icon_rotation() {
        let offset = PointerOffset { x: 10.0, y: -10.0 };
        let tilt = Tilt::for_target(TiltTarget::TopIcon, offset);
        assert!((tilt.rotate_y - 3.0).abs() < 1e-9);
        assert!((tilt.rotate_x - 3.0).abs() < 1e-9);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(3deg) rotateY(3deg)"
        );
    }

    #[test]
    fn test_sensitivity_per_target() {
        let offset = PointerOffset { x: 5.0, y: 5.0 };
        let card = Tilt::for_target(TiltTarget::ContactCard, offset);
        let decorative = Tilt::for_target(TiltTarget::Decorative, offset);

        assert!((card.rotate_y - 1.0).abs() < 1e-9);
        assert!((card.rotate_x + 1.0).abs() < 1e-9);
        assert!((decorative.rotate_y - 2.0).abs() < 1e-9);
        assert!((decorative.rotate_x + 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_style_includes_transition() {
        let style = Tilt::default().style();
        assert!(style.starts_with("transform: perspective(1000px)"));
        assert!(style.ends_with("transition: transform 0.1s ease-out;"));
    }
}
