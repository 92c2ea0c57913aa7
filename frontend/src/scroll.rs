//! Pure mappings from scroll and viewport geometry to animation values.

pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile(viewport_width: f64) -> bool {
    viewport_width < MOBILE_BREAKPOINT
}

/// How far the page is scrolled, 0 at the top and 1 at the bottom.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let max_scroll = scroll_height - viewport_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

/// Progress of an element through the viewport: 0 when its top touches the
/// bottom edge, 1 when its bottom leaves through the top edge.
pub fn element_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

/// Linear map of `value` from `input` to `output`, clamped to the output range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (i0, i1) = input;
    let (o0, o1) = output;
    if i1 == i0 {
        return if value < i0 { o0 } else { o1 };
    }
    let t = ((value - i0) / (i1 - i0)).clamp(0.0, 1.0);
    o0 * (1.0 - t) + o1 * t
}

/// An element counts as visible once it is at least `margin` pixels inside the viewport.
pub fn is_in_view(rect_top: f64, rect_bottom: f64, viewport_height: f64, margin: f64) -> bool {
    rect_top < viewport_height - margin && rect_bottom > margin
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionMotion {
    pub y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl SectionMotion {
    pub fn style(&self) -> String {
        format!(
            "transform: translate3d(0, {:.2}px, 0) scale({:.4}); opacity: {:.3}; will-change: transform, opacity;",
            self.y, self.scale, self.opacity
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionRanges {
    pub parallax_offset: f64,
    pub scale: (f64, f64),
    pub opacity: (f64, f64),
}

impl Default for SectionRanges {
    fn default() -> Self {
        Self {
            parallax_offset: 80.0,
            scale: (0.92, 1.0),
            opacity: (0.3, 1.0),
        }
    }
}

impl SectionRanges {
    pub fn at(&self, progress: f64) -> SectionMotion {
        SectionMotion {
            y: interpolate(progress, (0.0, 0.5), (self.parallax_offset, 0.0)),
            scale: interpolate(progress, (0.0, 0.4), self.scale),
            opacity: interpolate(progress, (0.0, 0.35), self.opacity),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealDirection {
    Up,
    Down,
    Left,
    Right,
}

impl RevealDirection {
    /// Starting offset `(x, y)` in pixels before the element is revealed.
    pub fn offset(self, distance: f64) -> (f64, f64) {
        match self {
            RevealDirection::Up => (0.0, distance),
            RevealDirection::Down => (0.0, -distance),
            RevealDirection::Left => (distance, 0.0),
            RevealDirection::Right => (-distance, 0.0),
        }
    }
}

/// Inline style for a reveal wrapper in either state.
pub fn reveal_style(
    visible: bool,
    direction: RevealDirection,
    distance: f64,
    duration: f64,
    delay: f64,
) -> String {
    let (x, y, opacity) = if visible {
        (0.0, 0.0, 1.0)
    } else {
        let (x, y) = direction.offset(distance);
        (x, y, 0.0)
    };
    format!(
        "opacity: {}; transform: translate3d({}px, {}px, 0); \
         transition: opacity {d}s cubic-bezier(0.25, 0.1, 0.25, 1) {delay}s, \
         transform {d}s cubic-bezier(0.25, 0.1, 0.25, 1) {delay}s;",
        opacity,
        x,
        y,
        d = duration,
        delay = delay,
    )
}
