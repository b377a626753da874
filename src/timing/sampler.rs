// SHA3-256 Validator - Free and Open Source Software Statement
//
// This project, sha3-validator, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: src/timing/sampler.rs
// Version: 1.0.0
// Developer: OIEIEIO <oieieio@protonmail.com>
//
// This file collects latency samples of the hash under test for two fixed
// input classes. All left-class calls run first, then all right-class calls,
// one at a time on the calling thread.
//
// Tree Location:
// - src/timing/sampler.rs (timing sample collection)
// - Depends on: core/hasher, core/types, log

use crate::core::hasher::HashUnderTest;
use crate::core::types::{SamplerConfig, TimingSamples};
use log::{debug, info};
use std::hint::black_box;
use std::time::Instant;

const LOG_TARGET: &str = "sha3::validator::sampler";

/// Source of monotonic nanosecond timestamps
pub trait Clock {
    fn now_ns(&self) -> i64;
}

/// `Instant`-backed clock; never jumps with wall-clock adjustments
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ns(&self) -> i64 {
        i64::try_from(self.origin.elapsed().as_nanos()).unwrap_or(i64::MAX)
    }
}

pub struct TimingSampler {
    config: SamplerConfig,
}

impl TimingSampler {
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Sample both classes with the monotonic clock.
    pub fn sample<H: HashUnderTest + ?Sized>(&self, hasher: &H) -> TimingSamples {
        self.sample_with(hasher, &MonotonicClock::new())
    }

    /// Sample both classes with a caller-supplied clock.
    pub fn sample_with<H, C>(&self, hasher: &H, clock: &C) -> TimingSamples
    where
        H: HashUnderTest + ?Sized,
        C: Clock + ?Sized,
    {
        let left_input = vec![self.config.left_fill; self.config.input_size];
        let right_input = vec![self.config.right_fill; self.config.input_size];

        info!(target: LOG_TARGET,
            "⏱️ Running dudect-style timing analysis: {} samples, {} byte inputs",
            self.config.samples, self.config.input_size
        );

        let left = self.measure_class(hasher, clock, &left_input);
        debug!(target: LOG_TARGET, "Left class (0x{:02x}) collected", self.config.left_fill);
        let right = self.measure_class(hasher, clock, &right_input);
        debug!(target: LOG_TARGET, "Right class (0x{:02x}) collected", self.config.right_fill);

        TimingSamples { left, right }
    }

    fn measure_class<H, C>(&self, hasher: &H, clock: &C, input: &[u8]) -> Vec<i64>
    where
        H: HashUnderTest + ?Sized,
        C: Clock + ?Sized,
    {
        let mut times = Vec::with_capacity(self.config.samples);
        for _ in 0..self.config.samples {
            let start = clock.now_ns();
            black_box(hasher.hash(black_box(input)));
            let end = clock.now_ns();
            times.push(end.saturating_sub(start));
        }
        times
    }
}
