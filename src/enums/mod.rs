//! UI enumeration constants shared with the frontend.

pub mod settings;

pub use settings::{page_switching_animation_options, OptionType, PageSwitchingAnimation};
