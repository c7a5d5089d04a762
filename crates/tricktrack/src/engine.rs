//! Gesture engine: trigger, capture, classify, report.

use embedded_hal_async::delay::DelayNs;
use heapless::Vec;

use crate::capture::{CaptureBuffer, CaptureState};
use crate::classify::{ClassificationResult, MAX_TEMPLATES, Template, TemplateDef, classify};
use crate::config::EngineConfig;
use crate::data::SAMPLES_PER_BLOCK;
use crate::error::Error;
use crate::normalize::normalize_window;
use crate::score::activity_score;
use crate::source::{Operator, Reporter, SampleSource, Verdict};

/// Outcome of one capture cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleOutcome {
    /// The capture was classified and reported. The label inside is `None`
    /// when no template cleared the confidence floor.
    Classified(ClassificationResult),
    /// The operator discarded the capture; nothing was reported.
    Discarded,
}

/// Motion-triggered gesture classifier.
///
/// Owns the capture buffer and the prepared template table. Each
/// [`run_once`](Self::run_once) call executes one full one-shot cycle:
/// triggered, filled, classified or discarded, then reset. There are no
/// retries anywhere in the pipeline.
pub struct GestureEngine<const N: usize = SAMPLES_PER_BLOCK> {
    config: EngineConfig,
    buffer: CaptureBuffer<N>,
    templates: Vec<Template<N>, MAX_TEMPLATES>,
}

impl<const N: usize> GestureEngine<N> {
    /// Creates an engine, preparing (normalizing) every template.
    ///
    /// Fails with [`Error::TemplateCapacity`] when `defs` holds more than
    /// [`MAX_TEMPLATES`] entries.
    pub fn new(config: EngineConfig, defs: &[TemplateDef<N>]) -> Result<Self, Error> {
        let mut templates = Vec::new();
        for def in defs {
            templates
                .push(Template::prepare(def))
                .map_err(|_| Error::TemplateCapacity)?;
        }
        Ok(Self {
            config,
            buffer: CaptureBuffer::new(),
            templates,
        })
    }

    /// Current engine configuration.
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Current acquisition state.
    pub const fn state(&self) -> CaptureState {
        self.buffer.state()
    }

    /// Prepared templates, in table order.
    pub fn templates(&self) -> &[Template<N>] {
        &self.templates
    }

    /// Runs one capture cycle to completion.
    ///
    /// Monitors `source` until the trigger fires (the triggering sample
    /// becomes index 0 of the window), fills the window one sample per
    /// tick, then suspends the source and asks `operator` to review the
    /// capture. A kept capture is scored, normalized, classified against
    /// the template table and handed to `reporter`; a discarded one goes
    /// straight back to idle. The source is resumed and the buffer reset
    /// before returning.
    ///
    /// A [`Error::TickOverrun`] from the source aborts the cycle
    /// immediately: gapped data would silently corrupt the correlation,
    /// so there is no recovery path for a missed tick.
    pub async fn run_once<S, O, R, D>(
        &mut self,
        source: &mut S,
        operator: &mut O,
        reporter: &mut R,
        delay: &mut D,
    ) -> Result<CycleOutcome, Error>
    where
        S: SampleSource,
        O: Operator,
        R: Reporter,
        D: DelayNs,
    {
        // Acquisition path: runs inside the tick deadline, so nothing here
        // may block except the tick wait itself.
        let first = loop {
            let sample = source.next_sample().await?;
            if self.config.trigger.triggered(sample) {
                break sample;
            }
        };
        self.buffer.arm();
        self.buffer.push(first);
        while self.buffer.state() != CaptureState::Full {
            let sample = source.next_sample().await?;
            self.buffer.push(sample);
        }

        // Classification path: tick source halted, no deadline from here.
        source.suspend();
        let outcome = match operator.review().await {
            Verdict::Discard => CycleOutcome::Discarded,
            Verdict::Keep => {
                let window = self.buffer.window();
                reporter.raw_window(window);
                reporter.activity_score(activity_score(window, self.config.score_divisor));
                let capture = normalize_window(window);
                let result = classify(&capture, &self.templates, self.config.confidence_floor);
                reporter.classification(&result);
                CycleOutcome::Classified(result)
            }
        };
        self.buffer.reset();
        source.resume();

        if self.config.rearm_delay_ns > 0 {
            delay.delay_ns(self.config.rearm_delay_ns).await;
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::classify::DEFAULT_CONFIDENCE_FLOOR;
    use crate::correlate::COEFF_ONE;
    use crate::data::Sample;
    use crate::testing::{MockDelay, MockReporter, MockSource, ScriptedOperator};
    use crate::trigger::TriggerConfig;

    static OLLIE_X: [i16; 4] = [5_000, 2_000, -1_500, 500];
    static OLLIE_Y: [i16; 4] = [-300, 900, -600, 200];
    static OLLIE_Z: [i16; 4] = [6_000, -4_000, 2_500, -800];

    fn test_config() -> EngineConfig {
        EngineConfig::new().with_trigger(TriggerConfig::new().with_z_bounds(4_200, -2_600))
    }

    fn ollie_defs() -> [TemplateDef<4>; 1] {
        [TemplateDef::new("ollie", &OLLIE_X, &OLLIE_Y, &OLLIE_Z)]
    }

    fn quiet() -> Sample {
        Sample::new(10, -10, 5)
    }

    fn ollie_samples() -> [Sample; 4] {
        let mut samples = [Sample::default(); 4];
        for i in 0..4 {
            samples[i] = Sample::new(OLLIE_X[i], OLLIE_Y[i], OLLIE_Z[i]);
        }
        samples
    }

    #[test]
    fn capture_matching_template_classifies_it() {
        let mut engine: GestureEngine<4> =
            GestureEngine::new(test_config(), &ollie_defs()).expect("template table");

        let mut script = std::vec::Vec::new();
        script.extend([quiet(), quiet(), quiet()]);
        script.extend(ollie_samples());
        let mut source = MockSource::new(script);
        let mut reporter = MockReporter::default();
        let mut delay = MockDelay::default();

        let outcome = block_on(engine.run_once(
            &mut source,
            &mut ScriptedOperator::keep_all(),
            &mut reporter,
            &mut delay,
        ))
        .expect("cycle");

        let CycleOutcome::Classified(result) = outcome else {
            panic!("expected a classification");
        };
        assert_eq!(result.label, Some("ollie"));
        assert_eq!(result.confidence, COEFF_ONE);
        assert!(result.confidence >= DEFAULT_CONFIDENCE_FLOOR);

        assert_eq!(source.suspends, 1);
        assert_eq!(source.resumes, 1);
        assert_eq!(reporter.windows, 1);
        assert_eq!(reporter.scores.len(), 1);
        assert_eq!(reporter.classifications.len(), 1);
        assert_eq!(engine.state(), CaptureState::Idle);
        assert_eq!(delay.calls, 0);
    }

    #[test]
    fn discarded_capture_reports_nothing_and_resumes() {
        let mut engine: GestureEngine<4> =
            GestureEngine::new(test_config(), &ollie_defs()).expect("template table");

        let mut script = std::vec::Vec::new();
        script.extend(ollie_samples());
        let mut source = MockSource::new(script);
        let mut operator = ScriptedOperator::discard_all();
        let mut reporter = MockReporter::default();
        let mut delay = MockDelay::default();

        let outcome = block_on(engine.run_once(
            &mut source,
            &mut operator,
            &mut reporter,
            &mut delay,
        ))
        .expect("cycle");

        assert_eq!(outcome, CycleOutcome::Discarded);
        assert_eq!(operator.reviews, 1);
        assert!(reporter.scores.is_empty());
        assert!(reporter.classifications.is_empty());
        assert_eq!(reporter.windows, 0);
        assert_eq!(source.suspends, 1);
        assert_eq!(source.resumes, 1);
        assert_eq!(engine.state(), CaptureState::Idle);
    }

    #[test]
    fn tick_overrun_mid_capture_is_fatal() {
        let mut engine: GestureEngine<4> =
            GestureEngine::new(test_config(), &ollie_defs()).expect("template table");

        // Trigger fires but the script dries up before the window fills.
        let script = std::vec::Vec::from([Sample::new(0, 0, 6_000), quiet()]);
        let mut source = MockSource::new(script);
        let mut reporter = MockReporter::default();
        let mut delay = MockDelay::default();

        let result = block_on(engine.run_once(
            &mut source,
            &mut ScriptedOperator::keep_all(),
            &mut reporter,
            &mut delay,
        ));
        assert_eq!(result, Err(Error::TickOverrun));
        assert!(reporter.classifications.is_empty());
    }

    #[test]
    fn rearm_delay_runs_after_the_cycle() {
        let config = test_config().with_rearm_delay_ns(2_000_000);
        let mut engine: GestureEngine<4> =
            GestureEngine::new(config, &ollie_defs()).expect("template table");

        let mut source = MockSource::new(std::vec::Vec::from(ollie_samples()));
        let mut reporter = MockReporter::default();
        let mut delay = MockDelay::default();

        block_on(engine.run_once(
            &mut source,
            &mut ScriptedOperator::keep_all(),
            &mut reporter,
            &mut delay,
        ))
        .expect("cycle");
        assert_eq!(delay.calls, 1);
        assert_eq!(delay.last_ns, Some(2_000_000));
    }

    #[test]
    fn too_many_templates_are_rejected() {
        let def = TemplateDef::new("t", &OLLIE_X, &OLLIE_Y, &OLLIE_Z);
        let defs = [def; MAX_TEMPLATES + 1];
        let result: Result<GestureEngine<4>, Error> = GestureEngine::new(test_config(), &defs);
        assert!(matches!(result, Err(Error::TemplateCapacity)));
    }
}
