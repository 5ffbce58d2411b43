use framescale_resample::Algorithm;

/// Scale factors accepted by the engine.
pub const SUPPORTED_SCALE_FACTORS: [f64; 4] = [1.5, 2.0, 3.0, 4.0];

/// Advisory quality hint.
///
/// Preserved for forward compatibility; no kernel consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quality {
    /// Prefer speed over fidelity
    Low,
    /// Balanced default
    #[default]
    Medium,
    /// Prefer fidelity over speed
    High,
}

/// Settings consumed by [`crate::ResamplingEngine`] on each enhancement run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Ratio of output to input linear dimension.
    pub scale_factor: f64,
    /// Resampling algorithm to dispatch to.
    pub algorithm: Algorithm,
    /// Advisory quality hint (unused by kernel math).
    pub quality: Quality,
    /// Whether the realtime loop should re-run the engine each tick.
    pub real_time: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            scale_factor: 2.0,
            algorithm: Algorithm::Bicubic,
            quality: Quality::Medium,
            real_time: false,
        }
    }
}

/// Partial settings for field-by-field merging.
///
/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SettingsUpdate {
    /// New scale factor, snapped to the supported set.
    pub scale_factor: Option<f64>,
    /// New resampling algorithm.
    pub algorithm: Option<Algorithm>,
    /// New advisory quality hint.
    pub quality: Option<Quality>,
    /// New realtime flag.
    pub real_time: Option<bool>,
}

impl Settings {
    /// Return a new settings value with only the given fields replaced.
    ///
    /// A merge never mutates a settings value in place. The scale factor of
    /// the merged value is snapped to the supported set.
    pub fn merged(&self, update: &SettingsUpdate) -> Settings {
        Settings {
            scale_factor: snap_scale_factor(update.scale_factor.unwrap_or(self.scale_factor)),
            algorithm: update.algorithm.unwrap_or(self.algorithm),
            quality: update.quality.unwrap_or(self.quality),
            real_time: update.real_time.unwrap_or(self.real_time),
        }
    }
}

/// Snap a requested scale factor to the nearest supported value.
///
/// Out-of-set factors are a configuration problem, not a reason to fail the
/// pipeline, so the engine records a warning and keeps going.
pub fn snap_scale_factor(requested: f64) -> f64 {
    if SUPPORTED_SCALE_FACTORS.contains(&requested) {
        return requested;
    }

    let mut nearest = SUPPORTED_SCALE_FACTORS[0];
    for &factor in &SUPPORTED_SCALE_FACTORS[1..] {
        if (factor - requested).abs() < (nearest - requested).abs() {
            nearest = factor;
        }
    }

    log::warn!("unsupported scale factor {requested}, falling back to {nearest}");
    nearest
}

#[cfg(test)]
mod tests {
    use super::{snap_scale_factor, Quality, Settings, SettingsUpdate};
    use framescale_resample::Algorithm;

    #[test]
    fn merge_replaces_only_given_fields() {
        let base = Settings::default();
        let merged = base.merged(&SettingsUpdate {
            algorithm: Some(Algorithm::Lanczos),
            real_time: Some(true),
            ..Default::default()
        });

        assert_eq!(merged.algorithm, Algorithm::Lanczos);
        assert!(merged.real_time);
        assert_eq!(merged.scale_factor, base.scale_factor);
        assert_eq!(merged.quality, base.quality);
    }

    #[test]
    fn merge_does_not_mutate_in_place() {
        let base = Settings::default();
        let _ = base.merged(&SettingsUpdate {
            scale_factor: Some(4.0),
            ..Default::default()
        });
        assert_eq!(base, Settings::default());
    }

    #[test]
    fn supported_factors_pass_through() {
        for factor in [1.5, 2.0, 3.0, 4.0] {
            assert_eq!(snap_scale_factor(factor), factor);
        }
    }

    #[test]
    fn unsupported_factors_snap_to_nearest() {
        assert_eq!(snap_scale_factor(1.0), 1.5);
        assert_eq!(snap_scale_factor(2.4), 2.0);
        assert_eq!(snap_scale_factor(2.6), 3.0);
        assert_eq!(snap_scale_factor(10.0), 4.0);
    }

    #[test]
    fn nan_factor_falls_back() {
        assert_eq!(snap_scale_factor(f64::NAN), 1.5);
    }

    #[test]
    fn quality_is_advisory() {
        // merging quality must not affect any field the kernels consume
        let merged = Settings::default().merged(&SettingsUpdate {
            quality: Some(Quality::High),
            ..Default::default()
        });
        assert_eq!(merged.scale_factor, Settings::default().scale_factor);
        assert_eq!(merged.algorithm, Settings::default().algorithm);
    }
}
