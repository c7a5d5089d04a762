//! Motion-triggered gesture classifier for a board-mounted 3-axis
//! accelerometer.
//!
//! The crate turns a periodic stream of raw accelerometer samples into
//! gesture classifications: it watches for the onset of significant
//! motion, captures a fixed-duration window, normalizes each axis to a
//! canonical Q15 amplitude, and cross-correlates the result against a
//! small table of reference gesture templates. Everything is integer
//! arithmetic; the pipeline is bit-exact across platforms and needs no
//! FPU.
//!
//! The platform supplies two collaborators behind traits: a
//! [`SampleSource`] that delivers one sample per hardware tick, and a
//! [`Reporter`] that sinks scores and classifications. Register-level
//! sensor bring-up, clocking, and bus transactions live outside this
//! crate.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use tricktrack::{AutoKeep, EngineConfig, GestureEngine, TemplateDef};
//! # use embedded_hal_async::delay::DelayNs;
//! # use tricktrack::{Reporter, SampleSource};
//! # async fn example<S: SampleSource, R: Reporter, D: DelayNs>(
//! #     source: &mut S,
//! #     reporter: &mut R,
//! #     delay: &mut D,
//! # ) -> Result<(), tricktrack::Error> {
//! static OLLIE_X: [i16; 1600] = [0; 1600];
//! static OLLIE_Y: [i16; 1600] = [0; 1600];
//! static OLLIE_Z: [i16; 1600] = [0; 1600];
//!
//! let defs = [TemplateDef::new("ollie", &OLLIE_X, &OLLIE_Y, &OLLIE_Z)];
//! let mut engine: GestureEngine = GestureEngine::new(EngineConfig::new(), &defs)?;
//! let outcome = engine
//!     .run_once(source, &mut AutoKeep, reporter, delay)
//!     .await?;
//! # let _ = outcome;
//! # Ok(())
//! # }
//! ```
//!
//! # Timing model
//!
//! The acquisition path (trigger watch + window fill) runs inside the
//! tick deadline and blocks only on the tick itself. Once a window is
//! full the engine suspends the tick source, so classification has
//! unlimited wall-clock time; a missed tick before that point is a fatal
//! [`Error::TickOverrun`], because a gapped window would silently corrupt
//! the correlation.
//!
//! # Fixed-point conversions
//!
//! Enable the `fixed` feature for helpers converting raw counts to g
//! using `I32F32` integer math.

#![no_std]
#![deny(missing_docs)]
#![deny(clippy::correctness)]
#![warn(
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::cloned_instead_of_copied,
    clippy::explicit_iter_loop,
    clippy::implicit_clone,
    clippy::inconsistent_struct_constructor,
    clippy::manual_assert,
    clippy::manual_let_else,
    clippy::match_same_arms,
    clippy::needless_pass_by_value,
    clippy::semicolon_if_nothing_returned,
    clippy::uninlined_format_args,
    clippy::unnested_or_patterns,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]
#![allow(
    clippy::similar_names,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_lossless,
    clippy::module_name_repetitions,
    clippy::needless_range_loop
)]

#[cfg(feature = "fixed")]
extern crate fixed as fixed_crate;

#[cfg(test)]
extern crate std;

mod capture;
mod classify;
mod config;
mod correlate;
mod data;
mod engine;
mod error;
mod fxp;
mod normalize;
mod score;
mod source;
mod trigger;

#[cfg(test)]
mod testing;

// Data types
pub use data::{Axis, SAMPLES_PER_BLOCK, Sample, Window};

// Acquisition
pub use capture::{CaptureBuffer, CaptureState};
pub use trigger::TriggerConfig;

// Classification pipeline
pub use classify::{
    ClassificationResult, DEFAULT_CONFIDENCE_FLOOR, MAX_TEMPLATES, Template, TemplateDef, classify,
};
pub use correlate::{COEFF_ONE, SCALE_BITS, SUM_SHIFT, correlate};
pub use fxp::isqrt_u64;
pub use normalize::{
    AxisGain, FRACTION_BITS, FULL_SCALE, Normalized, normalize_axis, normalize_window, peak_abs,
};
pub use score::{SCORE_DIVISOR, activity_score};

// Engine
pub use config::EngineConfig;
pub use engine::{CycleOutcome, GestureEngine};
pub use error::Error;
pub use source::{AutoKeep, Operator, Reporter, SampleSource, Verdict};

// Fixed-point conversions (feature-gated)
#[cfg(feature = "fixed")]
pub use data::fixed::{AccelG, Fixed, LSB_PER_G, sample_to_g};
