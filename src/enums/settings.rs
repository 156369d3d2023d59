//! Settings-panel enumerations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Transition played when the UI switches pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageSwitchingAnimation {
    None,
    #[default]
    Fade,
    FadeSlide,
    FadeScale,
    SlideLeftRight,
    ZoomInOut,
    SlideUpDown,
    Bounce,
}

impl PageSwitchingAnimation {
    /// Every variant in display order.
    pub const ALL: [PageSwitchingAnimation; 8] = [
        Self::None,
        Self::Fade,
        Self::FadeSlide,
        Self::FadeScale,
        Self::SlideLeftRight,
        Self::ZoomInOut,
        Self::SlideUpDown,
        Self::Bounce,
    ];

    /// Wire value shared with the frontend and the config file.
    pub fn value(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Fade => "fade",
            Self::FadeSlide => "fade-slide",
            Self::FadeScale => "fade-scale",
            Self::SlideLeftRight => "slide-left-right",
            Self::ZoomInOut => "zoom-in-out",
            Self::SlideUpDown => "slide-up-down",
            Self::Bounce => "bounce",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::None => "No animation",
            Self::Fade => "Fade in/out",
            Self::FadeSlide => "Smooth slide",
            Self::FadeScale => "Scale fade",
            Self::SlideLeftRight => "Slide left/right",
            Self::ZoomInOut => "Zoom in/out",
            Self::SlideUpDown => "Slide up/down",
            Self::Bounce => "Bounce",
        }
    }
}

impl fmt::Display for PageSwitchingAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Error returned when a string names no known animation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page switching animation '{0}'")]
pub struct UnknownAnimation(pub String);

impl FromStr for PageSwitchingAnimation {
    type Err = UnknownAnimation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.value() == s)
            .ok_or_else(|| UnknownAnimation(s.to_string()))
    }
}

/// A selectable option as rendered by a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionType {
    pub value: &'static str,
    pub label: &'static str,
}

/// Option table for the page-switching animation selector.
pub fn page_switching_animation_options() -> Vec<OptionType> {
    PageSwitchingAnimation::ALL
        .into_iter()
        .map(|a| OptionType {
            value: a.value(),
            label: a.label(),
        })
        .collect()
}
