use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAnimation {
    ScaleIn,
    SlideDown,
    FadeIn,
    SlideUp,
}

impl RevealAnimation {
    pub fn class(self) -> &'static str {
        match self {
            Self::ScaleIn => "reveal--scale-in",
            Self::SlideDown => "reveal--slide-down",
            Self::FadeIn => "reveal--fade-in",
            Self::SlideUp => "reveal--slide-up",
        }
    }
}

/// Page sections that animate in once the view is revealed, in reveal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealSection {
    Icon,
    Heading,
    Body,
    Contact,
    Decorations,
}

impl RevealSection {
    pub const ALL: [RevealSection; 5] = [
        Self::Icon,
        Self::Heading,
        Self::Body,
        Self::Contact,
        Self::Decorations,
    ];

    pub fn animation(self) -> RevealAnimation {
        match self {
            Self::Icon => RevealAnimation::ScaleIn,
            Self::Heading => RevealAnimation::SlideDown,
            Self::Body | Self::Decorations => RevealAnimation::FadeIn,
            Self::Contact => RevealAnimation::SlideUp,
        }
    }

    pub fn delay(self) -> Duration {
        Duration::from_millis(match self {
            Self::Icon => 0,
            Self::Heading => 300,
            Self::Body => 500,
            Self::Contact => 700,
            Self::Decorations => 900,
        })
    }

    pub fn duration(self) -> Duration {
        Duration::from_millis(match self {
            Self::Icon | Self::Decorations => 1000,
            Self::Heading | Self::Body | Self::Contact => 800,
        })
    }

    pub fn class(self, loaded: bool) -> String {
        if loaded {
            format!("reveal {}", self.animation().class())
        } else {
            "reveal reveal--hidden".to_string()
        }
    }

    pub fn style(self) -> String {
        format!(
            "animation-delay: {}ms; animation-duration: {}ms;",
            self.delay().as_millis(),
            self.duration().as_millis()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_before_load() {
        for section in RevealSection::ALL {
            assert_eq!(section.class(false), "reveal reveal--hidden");
        }
    }

    #[test]
    fn test_animation_class_after_load() {
        assert_eq!(RevealSection::Icon.class(true), "reveal reveal--scale-in");
        assert_eq!(RevealSection::Heading.class(true), "reveal reveal--slide-down");
        assert_eq!(RevealSection::Contact.class(true), "reveal reveal--slide-up");
        assert!(!RevealSection::Decorations.class(true).contains("hidden"));
    }

    #[test]
    fn test_sections_are_staggered() {
        let delays: Vec<_> = RevealSection::ALL.iter().map(|s| s.delay()).collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_style_carries_timing() {
        assert_eq!(
            RevealSection::Body.style(),
            "animation-delay: 500ms; animation-duration: 800ms;"
        );
    }
}
