//! The periodic sampling loop.
//!
//! One iteration reads the sensor, waits out the rest of the sample period, then transmits the
//! reading as a decimal line. [`Sampler`] owns everything the loop touches, so there is no
//! global state apart from the tick counter behind the clock.

use crate::clock::Clock;
use crate::config::{Pacing, SamplerConfig};
use crate::fmt::Loggable;
use crate::input::AnalogInput;
use crate::line::{LineBuffer, TERMINATOR};
use crate::serial::SerialSink;
use crate::ticks::{Deadline, Tick};

/// Failure of a single iteration. The line is dropped and the loop carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub enum SampleError<E> {
    /// The serial sink rejected the line.
    Transmit(E),
}

/// What one iteration put on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub struct Emission {
    /// Tick the iteration's wait was measured from.
    pub start: Tick,
    pub value: u16,
    /// Bytes sent, including the terminator.
    pub sent: usize,
    pub truncated: bool,
}

/// Running counters, logged every `stats_interval` samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "debug", derive(defmt::Format))]
pub struct SamplerStats {
    pub samples: u32,
    pub send_errors: u32,
    pub truncations: u32,
    pub overruns: u32,
    pub last_value: u16,
}

/// Sampling loop context.
///
/// # Example
///
/// ```rust,ignore
/// let mut sampler = Sampler::new(SamplerConfig::default(), clock, adc, uart);
/// sampler.run().await; // Runs forever
/// ```
pub struct Sampler<C, A, S> {
    config: SamplerConfig,
    clock: C,
    input: A,
    sink: S,
    line: LineBuffer,
    /// Start of the next iteration under fixed-rate pacing
    next_start: Option<Tick>,
    stats: SamplerStats,
}

impl<C, A, S> Sampler<C, A, S>
where
    C: Clock,
    A: AnalogInput,
    S: SerialSink,
{
    pub fn new(config: SamplerConfig, clock: C, input: A, sink: S) -> Self {
        Self {
            config,
            clock,
            input,
            sink,
            line: LineBuffer::new(),
            next_start: None,
            stats: SamplerStats::default(),
        }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn stats(&self) -> &SamplerStats {
        &self.stats
    }

    pub fn into_parts(self) -> (C, A, S) {
        (self.clock, self.input, self.sink)
    }

    /// Pick the tick this iteration's wait is measured from.
    fn iteration_start(&mut self) -> Tick {
        let now = self.clock.now();

        match (self.config.pacing, self.next_start) {
            (Pacing::IterationStart, _) | (Pacing::FixedRate, None) => now,
            (Pacing::FixedRate, Some(scheduled)) => {
                let late_by = now.since(scheduled);
                if late_by >= self.config.period_ms {
                    warn!("Sampling overrun: {} ms behind schedule, resynchronising", late_by);
                    self.stats.overruns = self.stats.overruns.wrapping_add(1);
                    now
                } else {
                    scheduled
                }
            }
        }
    }

    /// Run a single iteration: sample, wait for the period to elapse, transmit.
    pub async fn step(&mut self) -> Result<Emission, SampleError<S::Error>> {
        let start = self.iteration_start();
        let value = self.input.sample();

        let deadline = Deadline::new(start, self.config.period_ms);
        self.clock.wait_until(deadline).await;
        self.next_start = Some(deadline.at());

        self.stats.samples = self.stats.samples.wrapping_add(1);
        self.stats.last_value = value;

        let encoded = self.line.encode(value, self.config.format);
        if encoded.truncated {
            warn!("Reading {} does not fit the output window, sending truncated digits", value);
            self.stats.truncations = self.stats.truncations.wrapping_add(1);
        }

        let sent = encoded.bytes.len() + TERMINATOR.len();
        let truncated = encoded.truncated;
        let result = self
            .sink
            .send(encoded.bytes)
            .and_then(|()| self.sink.send(TERMINATOR));

        if let Err(e) = result {
            self.stats.send_errors = self.stats.send_errors.wrapping_add(1);
            return Err(SampleError::Transmit(e));
        }

        Ok(Emission {
            start,
            value,
            sent,
            truncated,
        })
    }

    /// Sample and transmit forever.
    ///
    /// A failed send drops that line only, the next one goes out on schedule.
    pub async fn run(&mut self) -> !
    where
        S::Error: Loggable,
    {
        info!(
            "Sampling channel {} every {} ms ({:?}, {:?})",
            self.config.channel,
            self.config.period_ms,
            self.config.pacing,
            self.config.format
        );

        loop {
            match self.step().await {
                Ok(emission) => {
                    debug!("Sent reading {} ({} bytes)", emission.value, emission.sent);
                }
                Err(SampleError::Transmit(e)) => {
                    warn!("Serial send failed, reading dropped: {:?}", e);
                }
            }

            let interval = self.config.stats_interval;
            if interval != 0 && self.stats.samples % interval == 0 {
                info!("Sampler stats: {:?}", self.stats);
            }
        }
    }
}
