use cfg_if::cfg_if;
use crate::*;

/// Detector phase. Detection only runs once the window has been filled after the last reset.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase
{
    Warmup,
    Active,
}

/// Outputs the host reads back after every sample.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading
{
    pub step_count: u64,
    pub tilt: Tilt,

    /// `false` during warm-up, the host should show a neutral reading.
    pub initialized: bool,

    /// Did this sample add a step to the count?
    pub step: bool,
}

/// Intermediate values of the last processed sample.
///
#[cfg(feature = "debug")]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleTrace
{
    pub amplified: Vector,
    pub deltas: AxisDeltas,
    pub magnitude: f32,
    pub energy_delta: f32,
    pub filtered: f32,
    pub prev_filtered: f32,
    pub outcome: StepOutcome,
}

/// Step counting core. Feed it one accelerometer sample at a time through `on_sample()` and read
/// the step count and tilt back from the returned [`Reading`].
///
/// All buffers are fixed size and owned by the pedometer, a reset clears them in place. Calls need
/// `&mut self`, so samples are processed strictly one after the other.
///
pub struct Pedometer<const N: usize>
{
    config: PedometerConfig<N>,

    window: SampleWindow<N>,
    noise_gate: NoiseGate,
    filter: ConvolutionFilter<N>,
    step_detection: StepDetection,

    /// Steps counted since the last reset.
    step_count: u64,

    /// Tilt classification of the last sample.
    tilt: Tilt,

    #[cfg(feature = "debug")]
    last_trace: Option<SampleTrace>,
}

impl Default for Pedometer<WINDOW_SIZE> {
    fn default() -> Self {
        Self::build(PedometerConfig::default())
    }
}

impl<const N: usize> Pedometer<N>
{
    /// Creates a pedometer in warm-up. Samples can be fed right away, no `start()` needed.
    ///
    pub fn new(config: PedometerConfig<N>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PedometerConfig<N>) -> Self {
        Pedometer {
            window: SampleWindow::new(),
            noise_gate: NoiseGate::new(config.noise_floor),
            filter: ConvolutionFilter::new(config.kernel),
            step_detection: StepDetection::new(config.refractory_samples, config.energy_floor),
            step_count: 0,
            tilt: Tilt::None,
            #[cfg(feature = "debug")]
            last_trace: None,
            config,
        }
    }

    /// Starts (or restarts) data gathering.
    ///
    pub fn start(&mut self) {
        log::info!("Pedometer started");
        self.reset();
    }

    /// Stops data gathering. The count is not kept across a pause, so this resets as well.
    ///
    pub fn stop(&mut self) {
        log::info!("Pedometer stopped");
        self.reset();
    }

    /// Back to warm-up with a zero step count and cleared buffers. Safe to call at any time and
    /// any number of times.
    ///
    pub fn reset(&mut self) {
        self.window.clear();
        self.filter.clear();
        self.step_detection.reset();
        self.step_count = 0;
        self.tilt = Tilt::None;

        cfg_if! { if #[cfg(feature = "debug")] {
            self.last_trace = None;
        }}
    }

    /// Processes one raw accelerometer reading (in m/s²).
    ///
    pub fn on_sample(&mut self, x: f32, y: f32, z: f32) -> Reading {
        self.process(&Vector::new(x, y, z))
    }

    pub fn process(&mut self, sample: &Vector) -> Reading {
        if !sample.is_finite() {
            log::warn!("Non-finite accelerometer sample {:?}", sample);
        }

        let amplified = *sample * self.config.gain;
        let slots = self.window.push(&amplified);

        let deltas = self.noise_gate.gate_sample(&self.window.sample(slots.previous), &amplified);
        let magnitude = self.window.magnitude(slots.written);
        let energy_delta = abs_diff(self.window.magnitude(slots.previous), magnitude);

        if slots.filled_now {
            log::debug!("Sample window filled, step detection active");
        }

        if !self.window.is_filled() {
            return self.reading(false);
        }

        let index = self.window.cursor().current();
        let (filtered, prev_filtered) = self.filter.apply(self.window.magnitudes(), index);
        let outcome = self.step_detection.update(filtered, prev_filtered, energy_delta);

        self.step_count += outcome.pulse();
        self.tilt = Tilt::classify(&deltas);

        if outcome.is_step() {
            log::debug!("Step detected ({} -> {}), {} so far", prev_filtered, filtered, self.step_count);
        }
        log::trace!(
            "{},{},{},{},{},{}",
            deltas.x, deltas.y, magnitude, filtered, energy_delta, outcome.pulse()
        );

        cfg_if! { if #[cfg(feature = "debug")] {
            self.last_trace = Some(SampleTrace {
                amplified,
                deltas,
                magnitude,
                energy_delta,
                filtered,
                prev_filtered,
                outcome,
            });
        }}

        cfg_if! { if #[cfg(feature = "csv")] {
            println!(
                "{},{},{},{},{},{},{}",
                deltas.x, deltas.y, deltas.z, magnitude, filtered, energy_delta, outcome.pulse()
            );
        }}

        self.reading(outcome.is_step())
    }

    fn reading(&self, step: bool) -> Reading {
        Reading {
            step_count: self.step_count,
            tilt: self.tilt,
            initialized: self.is_initialized(),
            step,
        }
    }

    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    pub fn tilt(&self) -> Tilt {
        self.tilt
    }

    pub fn is_initialized(&self) -> bool {
        self.window.is_filled()
    }

    pub fn phase(&self) -> Phase {
        if self.is_initialized() {
            Phase::Active
        } else {
            Phase::Warmup
        }
    }

    /// Samples left before a new step can be registered.
    ///
    pub fn refractory_remaining(&self) -> u32 {
        self.step_detection.refractory_remaining()
    }

    pub fn config(&self) -> &PedometerConfig<N> {
        &self.config
    }

    /// Intermediate values of the last sample processed while active.
    ///
    #[cfg(feature = "debug")]
    pub fn last_trace(&self) -> Option<&SampleTrace> {
        self.last_trace.as_ref()
    }
}
