//! Host-side simulation runner for the tricktrack gesture engine.
//!
//! Synthesizes two reference gesture waveforms, registers them as
//! templates, then replays each of them (with a quiet lead-in) through
//! the full trigger → capture → classify pipeline. Useful as a smoke test
//! of the whole engine without hardware, and as a reference for wiring
//! the engine's seams on a real platform.
//!
//! Run with `RUST_LOG=debug` for raw window dumps.

use std::fmt::Write as _;
use std::time::Duration;

use embedded_hal_async::delay::DelayNs;
use futures::executor::block_on;
use log::{debug, error, info};
use tricktrack::{
    AutoKeep, COEFF_ONE, CycleOutcome, EngineConfig, Error, GestureEngine, Reporter, Sample,
    SampleSource, TemplateDef, Window,
};

/// Samples per gesture window for the simulation (0.5 s at 800 Hz).
const WINDOW: usize = 400;

/// Quiet samples fed before each gesture replay.
const LEAD_IN: usize = 50;

/// Delay backed by the host clock.
struct HostDelay;

impl DelayNs for HostDelay {
    async fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }
}

/// Sample source replaying a prebuilt script; exhaustion maps to the same
/// tick-overrun fault real hardware would raise.
struct ReplaySource {
    script: Vec<Sample>,
    cursor: usize,
}

impl ReplaySource {
    fn new(script: Vec<Sample>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl SampleSource for ReplaySource {
    async fn next_sample(&mut self) -> Result<Sample, Error> {
        match self.script.get(self.cursor) {
            Some(&sample) => {
                self.cursor += 1;
                Ok(sample)
            }
            None => Err(Error::TickOverrun),
        }
    }

    fn suspend(&mut self) {
        debug!("tick source suspended for processing");
    }

    fn resume(&mut self) {
        debug!("tick source resumed");
    }
}

/// Reporter that forwards everything to the log.
struct LogReporter;

impl Reporter for LogReporter {
    fn activity_score(&mut self, score: u32) {
        info!("activity score: {score}");
    }

    fn classification(&mut self, result: &tricktrack::ClassificationResult) {
        let percent = result.confidence as i64 * 100 / COEFF_ONE as i64;
        match result.label {
            Some(label) => info!("classified: {label} ({percent}% confidence)"),
            None => info!("unclassified (best {percent}%)"),
        }
    }

    fn raw_window<const N: usize>(&mut self, window: &Window<N>) {
        let mut line = String::new();
        for &value in window.z.iter().take(8) {
            let _ = write!(line, "{:04x} ", value as u16);
        }
        debug!("raw z[0..8]: {line}");
    }
}

/// Linear integer ramp from `start` to `end` over `buf`.
fn ramp(buf: &mut [i16], start: i32, end: i32) {
    let len = buf.len() as i32;
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = (start + (end - start) * i as i32 / len.max(1)) as i16;
    }
}

/// Ollie-like waveform: a hard vertical pop, a weightless dip, then the
/// landing spike, with a small forward component on X.
fn make_ollie() -> Window<WINDOW> {
    let mut w: Window<WINDOW> = Window::new();
    ramp(&mut w.z[0..60], 6_000, 1_000);
    ramp(&mut w.z[60..200], -2_000, -2_900);
    ramp(&mut w.z[200..260], 5_200, 800);
    ramp(&mut w.z[260..WINDOW], 200, 0);
    ramp(&mut w.x[0..120], 1_500, -900);
    ramp(&mut w.x[120..WINDOW], -900, 0);
    ramp(&mut w.y[0..WINDOW], 300, -200);
    w
}

/// Shuvit-like waveform: alternating lateral bursts on X, mild Z chatter.
fn make_shuvit() -> Window<WINDOW> {
    let mut w: Window<WINDOW> = Window::new();
    let mut sign = 1;
    for chunk in w.x.chunks_mut(50) {
        ramp(chunk, 4_000 * sign, 500 * sign);
        sign = -sign;
    }
    ramp(&mut w.y[0..WINDOW], 1_200, -1_200);
    ramp(&mut w.z[0..40], 4_400, 600);
    ramp(&mut w.z[40..WINDOW], 600, 0);
    w
}

fn leak(axis: [i16; WINDOW]) -> &'static [i16; WINDOW] {
    Box::leak(Box::new(axis))
}

/// Quiet lead-in plus the gesture, sample by sample.
fn script_for(gesture: &Window<WINDOW>) -> Vec<Sample> {
    let mut script = Vec::with_capacity(LEAD_IN + WINDOW);
    for i in 0..LEAD_IN {
        // Low-level jitter well under every trigger bound.
        let wiggle = ((i as i16) % 7) - 3;
        script.push(Sample::new(wiggle, -wiggle, 2 * wiggle));
    }
    for i in 0..WINDOW {
        script.push(Sample::new(gesture.x[i], gesture.y[i], gesture.z[i]));
    }
    script
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let ollie = make_ollie();
    let shuvit = make_shuvit();
    let defs = [
        TemplateDef::new("ollie", leak(ollie.x), leak(ollie.y), leak(ollie.z)),
        TemplateDef::new("shuvit", leak(shuvit.x), leak(shuvit.y), leak(shuvit.z)),
    ];

    let mut engine: GestureEngine<WINDOW> =
        match GestureEngine::new(EngineConfig::new(), &defs) {
            Ok(engine) => engine,
            Err(err) => {
                error!("engine construction failed: {err:?}");
                return;
            }
        };
    info!(
        "engine ready: {} templates, {WINDOW}-sample window",
        engine.templates().len()
    );

    let mut reporter = LogReporter;
    let mut delay = HostDelay;

    for (expected, gesture) in [("ollie", &ollie), ("shuvit", &shuvit)] {
        info!("replaying '{expected}' with {LEAD_IN} quiet lead-in samples");
        let mut source = ReplaySource::new(script_for(gesture));
        match block_on(engine.run_once(&mut source, &mut AutoKeep, &mut reporter, &mut delay)) {
            Ok(CycleOutcome::Classified(result)) => {
                if result.label == Some(expected) {
                    info!("replay of '{expected}' classified correctly");
                } else {
                    error!("replay of '{expected}' classified as {:?}", result.label);
                }
            }
            Ok(CycleOutcome::Discarded) => error!("capture unexpectedly discarded"),
            Err(err) => error!("cycle failed: {err:?}"),
        }
    }
}
