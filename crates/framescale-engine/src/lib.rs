#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// resampling engine with state machine and last-result tracking.
pub mod engine;

/// Error types for the engine module.
pub mod error;

/// JPEG encoding of enhanced rasters for download.
pub mod jpeg;

/// realtime scheduling of the engine with cancellation.
pub mod scheduler;

/// engine settings and merge semantics.
pub mod settings;

pub use crate::engine::{
    EnhanceOutcome, EnhancementResult, EngineState, OutputSink, ResamplingEngine,
    DOWNLOAD_JPEG_QUALITY,
};
pub use crate::error::EngineError;
pub use crate::scheduler::{FrameSource, RealtimeScheduler};
pub use crate::settings::{Quality, Settings, SettingsUpdate, SUPPORTED_SCALE_FACTORS};
