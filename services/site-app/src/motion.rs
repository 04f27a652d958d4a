//! Shared animation variants
//!
//! A [`Variant`] is a pair of poses (hidden and visible) plus the transition
//! between them. Components render `variant.style(visible)` into an inline
//! `style` attribute and flip `visible` after mount; the browser animates
//! the difference.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    /// Horizontal offset in pixels
    pub x: i32,
    /// Vertical offset in pixels
    pub y: i32,
    pub scale: f32,
}

impl Pose {
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0,
        y: 0,
        scale: 1.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseOut,
    EaseInOut,
    /// Slight overshoot, used for pop-in elements
    BackOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
            Easing::BackOut => "cubic-bezier(0.34, 1.56, 0.64, 1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant {
    pub hidden: Pose,
    pub visible: Pose,
    pub transition: Transition,
}

const DEFAULT_TRANSITION: Transition = Transition {
    duration_ms: 600,
    delay_ms: 0,
    easing: Easing::EaseOut,
};

impl Variant {
    pub const fn fade_in() -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                x: 0,
                y: 0,
                scale: 1.0,
            },
            visible: Pose::REST,
            transition: DEFAULT_TRANSITION,
        }
    }

    pub const fn fade_in_up() -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                x: 0,
                y: 40,
                scale: 1.0,
            },
            visible: Pose::REST,
            transition: DEFAULT_TRANSITION,
        }
    }

    pub const fn slide_in_left() -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                x: -60,
                y: 0,
                scale: 1.0,
            },
            visible: Pose::REST,
            transition: DEFAULT_TRANSITION,
        }
    }

    pub const fn slide_in_right() -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                x: 60,
                y: 0,
                scale: 1.0,
            },
            visible: Pose::REST,
            transition: DEFAULT_TRANSITION,
        }
    }

    pub const fn scale_in() -> Self {
        Self {
            hidden: Pose {
                opacity: 0.0,
                x: 0,
                y: 0,
                scale: 0.8,
            },
            visible: Pose::REST,
            transition: Transition {
                duration_ms: 500,
                delay_ms: 0,
                easing: Easing::BackOut,
            },
        }
    }

    pub const fn with_delay(mut self, delay_ms: u32) -> Self {
        self.transition.delay_ms = delay_ms;
        self
    }

    /// Inline CSS for the hidden or visible pose
    pub fn style(&self, visible: bool) -> String {
        let pose = if visible { self.visible } else { self.hidden };
        let t = self.transition;
        format!(
            "opacity: {}; transform: translate({}px, {}px) scale({}); \
             transition: opacity {}ms {} {}ms, transform {}ms {} {}ms;",
            pose.opacity,
            pose.x,
            pose.y,
            pose.scale,
            t.duration_ms,
            t.easing.css(),
            t.delay_ms,
            t.duration_ms,
            t.easing.css(),
            t.delay_ms,
        )
    }
}

/// Delay the `index`-th child of a list by `step_ms` per position on top of
/// the base variant's own delay.
pub fn stagger(base: Variant, index: usize, step_ms: u32) -> Variant {
    let offset = step_ms.saturating_mul(u32::try_from(index).unwrap_or(u32::MAX));
    base.with_delay(base.transition.delay_ms.saturating_add(offset))
}
