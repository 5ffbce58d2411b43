use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use framescale_raster::Raster;

use crate::engine::ResamplingEngine;

/// A supplier of captured frames (live video element, camera, ...).
pub trait FrameSource: Send + Sync {
    /// Grab the current frame, if one is available.
    fn capture(&self) -> Option<Raster>;
}

/// Drives a [`ResamplingEngine`] once per tick while real-time mode is on.
///
/// The scheduler runs as a tokio task selecting between a periodic tick and
/// a cancellation token. Ticks that land while a previous enhancement is
/// still in flight are dropped, never queued: the interval skips missed
/// ticks and the engine coalesces overlapping calls.
pub struct RealtimeScheduler {
    token: CancellationToken,
    handle: Option<JoinHandle<()>>,
}

impl RealtimeScheduler {
    /// Spawn the realtime loop.
    ///
    /// Each tick checks `settings().real_time` on the engine, so toggling
    /// the flag (or changing algorithm/scale factor) takes effect on the
    /// next tick without restarting the scheduler.
    ///
    /// # Arguments
    ///
    /// * `engine` - The engine to drive.
    /// * `source` - The frame supplier polled on every enabled tick.
    /// * `period` - The tick period (e.g. the display frame duration).
    pub fn spawn(
        engine: Arc<ResamplingEngine>,
        source: Arc<dyn FrameSource>,
        period: Duration,
    ) -> Self {
        let token = CancellationToken::new();
        let child_token = token.child_token();

        let handle = tokio::spawn(async move {
            let mut ticks = tokio::time::interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = child_token.cancelled() => break,
                    _ = ticks.tick() => {
                        if !engine.settings().real_time {
                            continue;
                        }
                        let Some(frame) = source.capture() else {
                            continue;
                        };
                        if let Err(e) = engine.enhance(&frame) {
                            // the tick produces no enhancement; keep looping
                            log::error!("realtime enhancement failed: {e}");
                        }
                    }
                }
            }
        });

        Self {
            token,
            handle: Some(handle),
        }
    }

    /// Cancel the realtime loop and wait for it to finish.
    ///
    /// Once this returns, no further `enhance` call is attributable to this
    /// scheduler.
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for RealtimeScheduler {
    fn drop(&mut self) {
        self.token.cancel();
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
