//! Camera parameters and selector functions.
//!
//! Selectors pick one value out of the set a camera reports as supported
//! (see [`Capabilities`](crate::hardware::Capabilities)). They compose: a
//! selector can wrap another and fall back to it when its own constraint
//! matches nothing.

use serde::Deserialize;

/// Cameras occasionally advertise bogus picture sizes; anything wider than
/// this is ignored by [`biggest_size`].
const MAX_SANE_WIDTH: u32 = 5000;

/// Tolerance when comparing aspect ratios of candidate sizes.
const ASPECT_RATIO_EPSILON: f32 = 1e-4;

/// A size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            return f32::NAN;
        }
        self.width as f32 / self.height as f32
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Supported focus modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusMode {
    Fixed,
    Auto,
    ContinuousFocus,
    Infinity,
    Macro,
}

/// A selector over a set of candidate sizes.
pub type SizeSelector = Box<dyn Fn(&[Size]) -> Option<Size> + Send + Sync>;

/// Selector which always provides the biggest size, skipping implausibly
/// wide candidates.
pub fn biggest_size() -> SizeSelector {
    Box::new(|sizes| {
        sizes
            .iter()
            .filter(|s| s.width <= MAX_SANE_WIDTH)
            .max_by_key(|s| s.area())
            .copied()
    })
}

/// Selector which always provides the smallest size.
pub fn smallest_size() -> SizeSelector {
    Box::new(|sizes| sizes.iter().min_by_key(|s| s.area()).copied())
}

/// Selector which tries each inner selector in order and returns the first
/// one that yields a value.
pub fn first_available(selectors: Vec<SizeSelector>) -> SizeSelector {
    Box::new(move |sizes| selectors.iter().find_map(|selector| selector(sizes)))
}

/// Selector which restricts the candidates to a given aspect ratio before
/// delegating to the inner selector.
pub fn with_aspect_ratio(ratio: f32, inner: SizeSelector) -> SizeSelector {
    Box::new(move |sizes| {
        let matching: Vec<Size> = sizes
            .iter()
            .filter(|s| (s.aspect_ratio() - ratio).abs() < ASPECT_RATIO_EPSILON)
            .copied()
            .collect();
        inner(&matching)
    })
}

/// Selector which picks a preview size compatible with the given photo size:
/// prefer a preview with the same aspect ratio, fall back to the raw
/// selector when none matches.
pub fn valid_preview_size(photo_size: Size, preview_selector: fn() -> SizeSelector) -> SizeSelector {
    first_available(vec![
        with_aspect_ratio(photo_size.aspect_ratio(), preview_selector()),
        preview_selector(),
    ])
}

/// A partial set of camera parameters. `None` fields are left untouched when
/// the parameters are applied to a device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    pub picture_size: Option<Size>,
    pub preview_size: Option<Size>,
    pub focus_mode: Option<FocusMode>,
    pub jpeg_quality: Option<u8>,
}

impl Parameters {
    /// Combine two parameter sets; values from `other` win where both are set.
    pub fn merge(mut self, other: Parameters) -> Parameters {
        if other.picture_size.is_some() {
            self.picture_size = other.picture_size;
        }
        if other.preview_size.is_some() {
            self.preview_size = other.preview_size;
        }
        if other.focus_mode.is_some() {
            self.focus_mode = other.focus_mode;
        }
        if other.jpeg_quality.is_some() {
            self.jpeg_quality = other.jpeg_quality;
        }
        self
    }
}

/// Produces the parameters a camera device starts up with, by running the
/// configured selectors against the device's capabilities.
pub struct InitialParameters {
    pub photo_size_selector: SizeSelector,
    pub preview_size_selector: fn() -> SizeSelector,
    pub focus_mode_preference: Vec<FocusMode>,
    pub jpeg_quality: u8,
}

impl Default for InitialParameters {
    fn default() -> Self {
        Self {
            photo_size_selector: biggest_size(),
            preview_size_selector: biggest_size,
            focus_mode_preference: vec![FocusMode::ContinuousFocus, FocusMode::Auto],
            jpeg_quality: 90,
        }
    }
}

impl InitialParameters {
    /// Select start-up parameters from the given capabilities.
    ///
    /// Picture size is selected first; the preview size selector then prefers
    /// candidates matching the picture's aspect ratio.
    pub fn select(&self, capabilities: &crate::hardware::Capabilities) -> Parameters {
        let picture_size = (self.photo_size_selector)(&capabilities.picture_sizes);

        let preview_size = match picture_size {
            Some(photo) => {
                valid_preview_size(photo, self.preview_size_selector)(&capabilities.preview_sizes)
            }
            None => (self.preview_size_selector)()(&capabilities.preview_sizes),
        };

        let focus_mode = self
            .focus_mode_preference
            .iter()
            .find(|mode| capabilities.focus_modes.contains(mode))
            .copied();

        Parameters {
            picture_size,
            preview_size,
            focus_mode,
            jpeg_quality: Some(self.jpeg_quality),
        }
    }
}
