extern crate std;

use std::vec::Vec;

use embedded_hal_async::delay::DelayNs;

use crate::classify::ClassificationResult;
use crate::data::{Sample, Window};
use crate::error::Error;
use crate::source::{Operator, Reporter, SampleSource, Verdict};

/// Scripted sample source. Yields its script in order and reports a tick
/// overrun once exhausted, which doubles as the deadline-fault fixture.
#[derive(Clone, Debug)]
pub(crate) struct MockSource {
    script: Vec<Sample>,
    cursor: usize,
    pub(crate) suspends: u32,
    pub(crate) resumes: u32,
}

impl MockSource {
    pub(crate) fn new(script: Vec<Sample>) -> Self {
        Self {
            script,
            cursor: 0,
            suspends: 0,
            resumes: 0,
        }
    }
}

impl SampleSource for MockSource {
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
        self.suspends += 1;
    }

    fn resume(&mut self) {
        self.resumes += 1;
    }
}

/// Recording reporter.
#[derive(Default, Debug)]
pub(crate) struct MockReporter {
    pub(crate) scores: Vec<u32>,
    pub(crate) classifications: Vec<ClassificationResult>,
    pub(crate) windows: u32,
}

impl Reporter for MockReporter {
    fn activity_score(&mut self, score: u32) {
        self.scores.push(score);
    }

    fn classification(&mut self, result: &ClassificationResult) {
        self.classifications.push(*result);
    }

    fn raw_window<const N: usize>(&mut self, _window: &Window<N>) {
        self.windows += 1;
    }
}

/// Operator returning a fixed verdict.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScriptedOperator {
    verdict: Verdict,
    pub(crate) reviews: u32,
}

impl ScriptedOperator {
    pub(crate) fn keep_all() -> Self {
        Self {
            verdict: Verdict::Keep,
            reviews: 0,
        }
    }

    pub(crate) fn discard_all() -> Self {
        Self {
            verdict: Verdict::Discard,
            reviews: 0,
        }
    }
}

impl Operator for ScriptedOperator {
    async fn review(&mut self) -> Verdict {
        self.reviews += 1;
        self.verdict
    }
}

#[derive(Default, Debug)]
pub(crate) struct MockDelay {
    pub(crate) calls: u32,
    pub(crate) last_ns: Option<u32>,
}

impl DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.calls += 1;
        self.last_ns = Some(ns);
    }
}
