//! Entrance animations described as data. Components pick a [`Motion`] and the
//! reveal wrapper turns its poses into inline styles.

use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    EaseOut,
    /// `cubic-bezier(x1, y1, x2, y2)`
    Bezier(f64, f64, f64, f64),
}

impl Easing {
    pub const OUT_CUBIC: Easing = Easing::Bezier(0.215, 0.61, 0.355, 1.0);
    /// Approximates a damped spring without overshoot.
    pub const SPRING: Easing = Easing::Bezier(0.34, 1.3, 0.64, 1.0);

    pub fn css(self) -> String {
        match self {
            Self::EaseOut => "ease-out".to_string(),
            Self::Bezier(a, b, c, d) => format!("cubic-bezier({a}, {b}, {c}, {d})"),
        }
    }
}

/// A visual pose. Offsets in px, rotation in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub rotate: f64,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    pub const fn hidden() -> Self {
        Self {
            opacity: 0.0,
            ..Self::REST
        }
    }

    pub const fn offset(x: f64, y: f64) -> Self {
        Self {
            opacity: 0.0,
            x,
            y,
            ..Self::REST
        }
    }

    pub fn style(&self) -> String {
        let mut style = format!("opacity: {};", self.opacity);
        let mut transforms = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            transforms.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            transforms.push(format!("scale({})", self.scale));
        }
        if self.rotate != 0.0 {
            transforms.push(format!("rotate({}deg)", self.rotate));
        }
        if transforms.is_empty() {
            style.push_str(" transform: none;");
        } else {
            let _ = write!(style, " transform: {};", transforms.join(" "));
        }
        style
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms: 0,
            easing,
        }
    }

    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    pub fn style(&self) -> String {
        format!(
            "transition-property: opacity, transform; transition-duration: {}ms; transition-delay: {}ms; transition-timing-function: {};",
            self.duration_ms,
            self.delay_ms,
            self.easing.css()
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub from: Pose,
    pub to: Pose,
    pub transition: Transition,
}

impl Motion {
    pub const fn delayed(self, delay_ms: u32) -> Self {
        Self {
            transition: self.transition.delayed(delay_ms),
            ..self
        }
    }

    /// For the `index`th child of a list: adds `index * step_ms` to the delay.
    pub fn staggered(self, index: usize, step_ms: u32) -> Self {
        let extra = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(step_ms);
        self.delayed(self.transition.delay_ms.saturating_add(extra))
    }

    /// Inline style for the current phase of the animation.
    pub fn style(&self, shown: bool) -> String {
        let pose = if shown { self.to } else { self.from };
        format!("{} {}", pose.style(), self.transition.style())
    }
}

pub const FADE_IN: Motion = Motion {
    from: Pose::hidden(),
    to: Pose::REST,
    transition: Transition::new(600, Easing::EaseOut),
};

pub const FADE_UP: Motion = Motion {
    from: Pose::offset(0.0, 20.0),
    to: Pose::REST,
    transition: Transition::new(600, Easing::EaseOut),
};

pub const HERO_RISE: Motion = Motion {
    from: Pose::offset(0.0, 30.0),
    to: Pose::REST,
    transition: Transition::new(800, Easing::OUT_CUBIC),
};

pub const CARD_RISE: Motion = Motion {
    from: Pose::offset(0.0, 50.0),
    to: Pose::REST,
    transition: Transition::new(600, Easing::EaseOut),
};

pub const SLIDE_IN_RIGHT: Motion = Motion {
    from: Pose::offset(50.0, 0.0),
    to: Pose::REST,
    transition: Transition::new(500, Easing::SPRING),
};

pub const SCALE_IN: Motion = Motion {
    from: Pose {
        opacity: 0.0,
        x: 0.0,
        y: 10.0,
        scale: 0.8,
        rotate: 0.0,
    },
    to: Pose::REST,
    transition: Transition::new(300, Easing::SPRING),
};

pub const PORTRAIT_IN: Motion = Motion {
    from: Pose {
        opacity: 0.0,
        x: 0.0,
        y: 0.0,
        scale: 0.9,
        rotate: -2.0,
    },
    to: Pose::REST,
    transition: Transition::new(800, Easing::SPRING).delayed(400),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rest_pose_has_no_transform() {
        assert_eq!(Pose::REST.style(), "opacity: 1; transform: none;");
    }

    #[test]
    fn test_pose_transform_order() {
        assert_eq!(
            SCALE_IN.from.style(),
            "opacity: 0; transform: translate(0px, 10px) scale(0.8);"
        );
        assert_eq!(
            PORTRAIT_IN.from.style(),
            "opacity: 0; transform: scale(0.9) rotate(-2deg);"
        );
    }

    #[test]
    fn test_easing_css() {
        assert_eq!(Easing::EaseOut.css(), "ease-out");
        assert_eq!(Easing::OUT_CUBIC.css(), "cubic-bezier(0.215, 0.61, 0.355, 1)");
    }

    #[test]
    fn test_stagger_adds_to_base_delay() {
        let m = FADE_UP.delayed(100).staggered(3, 150);
        assert_eq!(m.transition.delay_ms, 550);
        assert_eq!(FADE_UP.staggered(0, 150), FADE_UP);
        assert_eq!(
            FADE_UP.staggered(usize::MAX, 150).transition.delay_ms,
            u32::MAX
        );
    }

    #[test]
    fn test_motion_style_switches_pose() {
        let hidden = HERO_RISE.style(false);
        let shown = HERO_RISE.style(true);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 30px);"));
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(shown.contains("transition-duration: 800ms;"));
        assert!(shown.contains("cubic-bezier(0.215, 0.61, 0.355, 1)"));
    }
}
