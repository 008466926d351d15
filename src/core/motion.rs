//! Reveal-gated animation timelines
//!
//! A section hands its reveal flag and an item index to a [`Stagger`] and gets
//! back an [`AnimationStep`]: where the item starts, how long it waits, and how
//! it eases into its resting pose. Steps only ever play forward, once.
//!
//! [`AmbientLoop`]s are the exception: decorative motion that loops forever
//! and ignores reveal state entirely.
//!
//! The browser interpolates from the generated CSS. The `sample` helpers
//! compute the same curves and only exist for tests.

/// Visual pose of an animated element
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub opacity: f64,
    /// Horizontal offset in px
    pub x: f64,
    /// Vertical offset in px
    pub y: f64,
    pub scale: f64,
}

impl Pose {
    /// Fully opaque, in place, unscaled. Every reveal animation ends here.
    pub const REST: Pose = Pose {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
    };

    /// Transparent and otherwise at rest
    pub const HIDDEN: Pose = Pose {
        opacity: 0.0,
        ..Pose::REST
    };

    pub const fn with_x(self, x: f64) -> Self {
        Self { x, ..self }
    }

    pub const fn with_y(self, y: f64) -> Self {
        Self { y, ..self }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        Self { scale, ..self }
    }

    /// Linear interpolation towards `to`; `t` is clamped to `[0, 1]`
    #[cfg(test)]
    pub fn lerp(&self, to: &Pose, t: f64) -> Pose {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f64, b: f64| a + (b - a) * t;
        Pose {
            opacity: mix(self.opacity, to.opacity),
            x: mix(self.x, to.x),
            y: mix(self.y, to.y),
            scale: mix(self.scale, to.scale),
        }
    }

    /// CSS `transform` value
    pub fn transform_css(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }

    /// Inline style declarations for this pose
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: {};",
            self.opacity,
            self.transform_css()
        )
    }
}

/// Timing curve of a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Cubic-bezier control points (x1, y1, x2, y2)
    fn control_points(&self) -> (f64, f64, f64, f64) {
        match self {
            Easing::Linear => (0.0, 0.0, 1.0, 1.0),
            Easing::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// CSS timing function
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".to_string(),
            _ => {
                let (x1, y1, x2, y2) = self.control_points();
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }

    /// Eased progress for linear progress `t` in `[0, 1]`
    #[cfg(test)]
    pub fn sample(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if matches!(self, Easing::Linear) || t == 0.0 || t == 1.0 {
            return t;
        }

        let (x1, y1, x2, y2) = self.control_points();
        let bezier = |p1: f64, p2: f64, s: f64| {
            let inv = 1.0 - s;
            3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
        };

        // x(s) is monotonic for these curves, so bisection converges
        let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
        for _ in 0..40 {
            let mid = (lo + hi) / 2.0;
            if bezier(x1, x2, mid) < t {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        bezier(y1, y2, (lo + hi) / 2.0)
    }
}

/// Milliseconds string for CSS durations and delays
fn css_millis(seconds: f64) -> String {
    format!("{}ms", (seconds * 1000.0).round() as i64)
}

/// One forward, one-shot transition from an initial pose to [`Pose::REST`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationStep {
    initial: Pose,
    delay_seconds: f64,
    duration_seconds: f64,
    easing: Easing,
}

impl AnimationStep {
    pub const fn new(initial: Pose, delay_seconds: f64, duration_seconds: f64, easing: Easing) -> Self {
        Self {
            initial,
            delay_seconds,
            duration_seconds,
            easing,
        }
    }

    pub fn initial(&self) -> Pose {
        self.initial
    }

    /// Always [`Pose::REST`]
    pub fn final_pose(&self) -> Pose {
        Pose::REST
    }

    pub fn delay_seconds(&self) -> f64 {
        self.delay_seconds
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Same step, starting `extra_seconds` later
    pub const fn then(self, extra_seconds: f64) -> Self {
        Self {
            delay_seconds: self.delay_seconds + extra_seconds,
            ..self
        }
    }

    /// Target pose for the given reveal flag
    pub fn pose(&self, revealed: bool) -> Pose {
        if revealed { Pose::REST } else { self.initial }
    }

    /// Eased progress `elapsed` seconds after the reveal
    #[cfg(test)]
    pub fn progress(&self, revealed: bool, elapsed: f64) -> f64 {
        if !revealed {
            return 0.0;
        }
        let active = elapsed - self.delay_seconds;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration_seconds <= 0.0 {
            return 1.0;
        }
        self.easing.sample(active / self.duration_seconds)
    }

    /// Interpolated pose `elapsed` seconds after the reveal
    #[cfg(test)]
    pub fn sample(&self, revealed: bool, elapsed: f64) -> Pose {
        self.initial.lerp(&Pose::REST, self.progress(revealed, elapsed))
    }

    /// Inline style for the element.
    ///
    /// The transition is only attached once revealed, so the browser animates
    /// the hidden-to-rest change and nothing else.
    pub fn style(&self, revealed: bool) -> String {
        let pose = self.pose(revealed).css();
        if !revealed {
            return pose;
        }

        let timing = format!(
            "{} {} {}",
            css_millis(self.duration_seconds),
            self.easing.css(),
            css_millis(self.delay_seconds)
        );
        format!("{} transition: opacity {}, transform {};", pose, timing, timing)
    }
}

/// Per-collection delay ramp: item `i` waits `base_delay + i * increment`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base_delay: f64,
    pub increment: f64,
    pub duration: f64,
    pub from: Pose,
    pub easing: Easing,
}

impl Stagger {
    pub const fn new(base_delay: f64, increment: f64, duration: f64, from: Pose) -> Self {
        Self {
            base_delay,
            increment,
            duration,
            from,
            easing: Easing::EaseOut,
        }
    }

    pub fn delay_for(&self, index: usize) -> f64 {
        self.base_delay + index as f64 * self.increment
    }

    pub fn step(&self, index: usize) -> AnimationStep {
        AnimationStep::new(self.from, self.delay_for(index), self.duration, self.easing)
    }
}

/// Infinite decorative loop, not gated by reveal state.
///
/// Keyframes are spread evenly over the period and mirror back to the first
/// frame, so the motion ping-pongs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLoop {
    pub name: &'static str,
    pub keyframes: &'static [Pose],
    pub period_seconds: f64,
}

impl AmbientLoop {
    /// Pose at `t` seconds since mount
    #[cfg(test)]
    pub fn sample(&self, t: f64) -> Pose {
        match self.keyframes {
            [] => Pose::REST,
            [only] => *only,
            frames => {
                let segments = (frames.len() - 1) as f64;
                let phase = (t.rem_euclid(self.period_seconds)) / self.period_seconds;
                let position = phase * segments;
                let index = (position.floor() as usize).min(frames.len() - 2);
                let local = Easing::EaseInOut.sample(position - index as f64);
                frames[index].lerp(&frames[index + 1], local)
            }
        }
    }

    /// `@keyframes` rule for this loop
    pub fn css_keyframes(&self) -> String {
        let last = self.keyframes.len().saturating_sub(1).max(1) as f64;
        let frames: String = self
            .keyframes
            .iter()
            .enumerate()
            .map(|(i, pose)| {
                let pct = (i as f64 / last * 100.0).round();
                format!("{}% {{ transform: {}; }} ", pct, pose.transform_css())
            })
            .collect();
        format!("@keyframes {} {{ {}}}", self.name, frames)
    }

    /// CSS `animation` shorthand
    pub fn css_animation(&self) -> String {
        format!(
            "{} {} {} infinite",
            self.name,
            css_millis(self.period_seconds),
            Easing::EaseInOut.css()
        )
    }
}

/// Distance over which the hero content fades out while scrolling
pub const HERO_FADE_DISTANCE_PX: f64 = 300.0;

/// Hero content opacity for a page scroll offset
pub fn hero_fade(scroll_y: f64) -> f64 {
    (1.0 - scroll_y / HERO_FADE_DISTANCE_PX).clamp(0.0, 1.0)
}

/// Timelines used by the page sections
pub mod sequences {
    use super::{AmbientLoop, AnimationStep, Easing, Pose, Stagger};

    /// Whole-section fade once the section is revealed
    pub const SECTION_FADE: AnimationStep = AnimationStep::new(Pose::HIDDEN, 0.0, 0.6, Easing::EaseOut);

    /// Section eyebrow and heading
    pub const SECTION_HEADER: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_y(30.0), 0.0, 0.6, Easing::EaseOut);

    /// Closing note or link under a section
    pub const SECTION_FOOTNOTE: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_y(20.0), 0.8, 0.6, Easing::EaseOut);

    /// About: header, text column and focus column, 0.2s apart
    pub const ABOUT_ITEMS: Stagger = Stagger::new(0.0, 0.2, 0.6, Pose::HIDDEN.with_y(30.0));

    pub const ABOUT_FOCUS_AREAS: Stagger = Stagger::new(0.4, 0.1, 0.5, Pose::HIDDEN.with_x(20.0));

    pub const EXPERIENCE_CARDS: Stagger = Stagger::new(0.2, 0.15, 0.6, Pose::HIDDEN.with_y(40.0));

    pub const PROJECT_CARDS: Stagger = Stagger::new(0.2, 0.15, 0.6, Pose::HIDDEN.with_y(40.0));

    pub const SKILL_CATEGORIES: Stagger = Stagger::new(0.2, 0.1, 0.6, Pose::HIDDEN.with_y(40.0));

    pub const SKILL_CHIPS: Stagger = Stagger::new(0.4, 0.05, 0.4, Pose::HIDDEN.with_scale(0.8));

    /// Chip delay also ramps with its category
    pub fn skill_chip(category: usize, skill: usize) -> AnimationStep {
        SKILL_CHIPS
            .step(skill)
            .then(category as f64 * SKILL_CATEGORIES.increment)
    }

    pub const CONTACT_INFO: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_x(-30.0), 0.2, 0.6, Easing::EaseOut);

    pub const CONTACT_LINKS: Stagger = Stagger::new(0.3, 0.1, 0.5, Pose::HIDDEN.with_y(20.0));

    pub const RESUME_LINK: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_y(20.0), 0.6, 0.5, Easing::EaseOut);

    pub const CONTACT_FORM: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_x(30.0), 0.4, 0.6, Easing::EaseOut);

    pub const FOOTER: AnimationStep = AnimationStep::new(Pose::HIDDEN, 0.8, 0.6, Easing::EaseOut);

    // Hero plays on mount, so it is rendered as already revealed.
    pub const HERO_CONTENT: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_y(30.0), 0.0, 0.8, Easing::EaseOut);
    pub const HERO_TAGLINE: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_y(20.0), 0.2, 0.6, Easing::EaseOut);
    pub const HERO_NAME: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_y(20.0), 0.3, 0.6, Easing::EaseOut);
    pub const HERO_ACTIONS: AnimationStep =
        AnimationStep::new(Pose::HIDDEN.with_y(20.0), 0.5, 0.6, Easing::EaseOut);
    pub const SCROLL_INDICATOR: AnimationStep =
        AnimationStep::new(Pose::HIDDEN, 1.2, 0.6, Easing::EaseOut);

    pub const MOBILE_MENU_LINKS: Stagger = Stagger::new(0.0, 0.1, 0.3, Pose::HIDDEN.with_x(20.0));

    pub const ORB_DRIFT: AmbientLoop = AmbientLoop {
        name: "orb-drift",
        keyframes: &[
            Pose::REST,
            Pose::REST.with_x(30.0).with_y(-30.0),
            Pose::REST,
        ],
        period_seconds: 8.0,
    };

    pub const ORB_COUNTER_DRIFT: AmbientLoop = AmbientLoop {
        name: "orb-counter-drift",
        keyframes: &[
            Pose::REST,
            Pose::REST.with_x(-20.0).with_y(20.0),
            Pose::REST,
        ],
        period_seconds: 10.0,
    };

    pub const ORB_PULSE: AmbientLoop = AmbientLoop {
        name: "orb-pulse",
        keyframes: &[Pose::REST, Pose::REST.with_scale(1.2), Pose::REST],
        period_seconds: 6.0,
    };

    pub const SCROLL_BOUNCE: AmbientLoop = AmbientLoop {
        name: "scroll-bounce",
        keyframes: &[Pose::REST, Pose::REST.with_y(10.0), Pose::REST],
        period_seconds: 2.0,
    };

    pub const AMBIENT: [AmbientLoop; 4] = [ORB_DRIFT, ORB_COUNTER_DRIFT, ORB_PULSE, SCROLL_BOUNCE];
}
