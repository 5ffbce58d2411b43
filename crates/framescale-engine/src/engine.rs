use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use framescale_raster::{Raster, RasterSize};
use framescale_resample::upscale;

use crate::error::EngineError;
use crate::jpeg;
use crate::settings::{snap_scale_factor, Settings, SettingsUpdate};

/// JPEG quality used when encoding the last result for download.
pub const DOWNLOAD_JPEG_QUALITY: u8 = 95;

/// A consumer of enhanced rasters (preview renderer, export path, ...).
pub trait OutputSink: Send + Sync {
    /// Called after every successful enhancement run.
    fn on_enhanced(&self, result: &EnhancementResult);
}

/// The outcome of one enhancement run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnhancementResult {
    /// The source raster the run consumed.
    pub source: Raster,
    /// The upscaled raster.
    pub output: Raster,
    /// Dimensions of the source raster.
    pub original_size: RasterSize,
    /// Dimensions of the output raster.
    pub output_size: RasterSize,
}

/// Observable processing state of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No enhancement run in flight.
    Idle,
    /// An enhancement run is in flight.
    Processing,
}

/// What [`ResamplingEngine::enhance`] did with the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhanceOutcome {
    /// The run completed and produced a result.
    Enhanced(Arc<EnhancementResult>),
    /// Another run was already in flight; this call was coalesced.
    InFlight,
}

/// Orchestrates the resampling kernels over captured frames.
///
/// The engine owns the current [`Settings`], a single-slot processing guard
/// and the last successful [`EnhancementResult`]. Engine instances are
/// independent: there is no global state, and one engine never runs more
/// than one enhancement at a time.
pub struct ResamplingEngine {
    settings: Mutex<Settings>,
    processing: AtomicBool,
    last_result: Mutex<Option<Arc<EnhancementResult>>>,
    sink: Option<Box<dyn OutputSink>>,
}

impl Default for ResamplingEngine {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl ResamplingEngine {
    /// Create a new engine with the given settings.
    ///
    /// The scale factor is snapped to the supported set up front.
    pub fn new(mut settings: Settings) -> Self {
        settings.scale_factor = snap_scale_factor(settings.scale_factor);
        Self {
            settings: Mutex::new(settings),
            processing: AtomicBool::new(false),
            last_result: Mutex::new(None),
            sink: None,
        }
    }

    /// Attach an output sink notified after every successful run.
    pub fn with_sink(mut self, sink: Box<dyn OutputSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Run one enhancement over the given source raster.
    ///
    /// The settings are snapshotted on entry, so a concurrent
    /// [`ResamplingEngine::update_settings`] affects the next call only.
    /// A call that arrives while another run is in flight returns
    /// [`EnhanceOutcome::InFlight`] immediately without queueing.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingSource`] if the source raster is empty (state
    /// untouched); [`EngineError::Kernel`] if the kernel fails, in which
    /// case the previous last result is retained and the state is reset to
    /// idle.
    pub fn enhance(&self, source: &Raster) -> Result<EnhanceOutcome, EngineError> {
        if source.is_empty() {
            return Err(EngineError::MissingSource);
        }

        let Some(_guard) = ProcessingGuard::acquire(&self.processing) else {
            return Ok(EnhanceOutcome::InFlight);
        };

        let settings = self.settings();

        let output = upscale(source, settings.scale_factor, settings.algorithm).map_err(|e| {
            log::error!("enhancement failed with {}: {e}", settings.algorithm);
            e
        })?;

        let result = Arc::new(EnhancementResult {
            original_size: source.size(),
            output_size: output.size(),
            source: source.clone(),
            output,
        });

        *self
            .last_result
            .lock()
            .expect("last result lock poisoned") = Some(result.clone());

        if let Some(sink) = &self.sink {
            sink.on_enhanced(&result);
        }

        Ok(EnhanceOutcome::Enhanced(result))
    }

    /// Merge a partial update into the current settings.
    ///
    /// Returns the new effective settings. Takes effect on the next
    /// [`ResamplingEngine::enhance`] call.
    pub fn update_settings(&self, update: SettingsUpdate) -> Settings {
        let mut guard = self.settings.lock().expect("settings lock poisoned");
        let merged = guard.merged(&update);
        *guard = merged;
        merged
    }

    /// Get a copy of the current settings.
    pub fn settings(&self) -> Settings {
        *self.settings.lock().expect("settings lock poisoned")
    }

    /// Get the current processing state.
    pub fn state(&self) -> EngineState {
        if self.processing.load(Ordering::Acquire) {
            EngineState::Processing
        } else {
            EngineState::Idle
        }
    }

    /// Get the last successful enhancement result, if any.
    pub fn last_result(&self) -> Option<Arc<EnhancementResult>> {
        self.last_result
            .lock()
            .expect("last result lock poisoned")
            .clone()
    }

    /// Encode the output of the last result as JPEG bytes for download.
    ///
    /// # Errors
    ///
    /// [`EngineError::MissingSource`] if no enhancement has completed yet.
    pub fn download_current(&self) -> Result<Vec<u8>, EngineError> {
        let result = self.last_result().ok_or(EngineError::MissingSource)?;
        Ok(jpeg::encode_rgba8(&result.output, DOWNLOAD_JPEG_QUALITY)?)
    }
}

/// Single-slot RAII guard over the processing flag.
///
/// Idle is restored on every exit path of `enhance`, panics included.
struct ProcessingGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> ProcessingGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
            .then_some(Self { flag })
    }
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
