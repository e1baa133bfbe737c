//! # Motion Library
//!
//! Framework-free animation core for the site. Nothing in here touches the DOM:
//! rendering surfaces implement [`Surface`] and feed viewport geometry and
//! timestamps (milliseconds, `performance.now()` style) into the state machines.
//!
//! ## Modules
//!
//! - **[`easing`]**: easing curves (`expo.out`, `power4.out`, `back.out(1.7)`, ...)
//! - **[`props`]**: the animatable property set and its CSS rendering
//! - **[`tween`]**: time-based interpolation, timelines and counters
//! - **[`presets`]**: direction-aware entrance presets
//! - **[`engine`]**: the Scroll-Trigger Animation Engine
//! - **[`loader`]**: the Loading Screen state machine
//! - **[`indicator`]**: the navigation hover indicator
//! - **[`config`]**: [`MotionConfig`], every timing constant in one place

pub mod config;
pub mod easing;
pub mod engine;
pub mod indicator;
pub mod loader;
pub mod presets;
pub mod props;
pub mod tween;

// Re-export commonly used types
pub use config::{MotionConfig, MotionConfigError};
pub use easing::Easing;
pub use engine::{
    Bounds, OwnerId, Registration, ScrollEngine, ScrollTriggerRecord, Surface, TargetId,
    TriggerEvent, TriggerEventKind, TriggerMode, TriggerSpec, TriggerState, Viewport,
};
pub use indicator::{IndicatorPlacement, NavIndicator, Rect};
pub use loader::{ExitFrame, LoadProgress, LoaderPhase, LoadingScreen};
pub use presets::Preset;
pub use props::AnimatedProps;
pub use tween::{CountUp, Lerp, Position, Timeline, Timing, Tween};
