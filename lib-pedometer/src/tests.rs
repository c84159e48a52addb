use core::f64::consts::PI;
use crate::*;

/// Standard gravity, keeps the z axis of synthetic streams realistic.
const G_TO_MS2: f32 = 9.80665;

fn pedometer() -> Pedometer<WINDOW_SIZE> {
    Pedometer::default()
}

/// Walking-like signal where only the y axis alternates sign every sample.
///
fn alternating_y(amplitude: f32, count: usize) -> Vec<Vector> {
    (0..count)
        .map(|k| Vector::new(0.0, if k % 2 == 0 { amplitude } else { -amplitude }, 0.0))
        .collect()
}

fn sinusoid_y(amplitude: f64, period: usize, count: usize) -> Vec<Vector> {
    (0..count)
        .map(|k| {
            let y = amplitude * (2.0 * PI * k as f64 / period as f64).sin();
            Vector::new(0.3, y as f32, G_TO_MS2)
        })
        .collect()
}

/// Triangle wave on the y axis, rising from -amplitude to amplitude over the first half period.
///
fn triangle_y(amplitude: f32, period: usize, count: usize) -> Vec<Vector> {
    (0..count)
        .map(|k| {
            let phase = (k % period) as f32 / period as f32;
            let y = if phase < 0.5 { 4.0 * phase - 1.0 } else { 3.0 - 4.0 * phase };
            Vector::new(0.0, amplitude * y, G_TO_MS2)
        })
        .collect()
}

/// Small linear congruential generator so noisy input is reproducible.
///
fn noise(seed: u32, count: usize) -> Vec<Vector> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (state >> 8) as f32 / (1u32 << 24) as f32 * 8.0 - 4.0
    };
    (0..count).map(|_| Vector::new(next(), next(), next())).collect()
}

fn feed(pedometer: &mut Pedometer<WINDOW_SIZE>, samples: &[Vector]) -> Vec<Reading> {
    samples.iter().map(|sample| pedometer.process(sample)).collect()
}

#[test]
pub fn warmup_never_counts() {
    let mut algo = pedometer();
    for sample in alternating_y(5.0, WINDOW_SIZE - 1) {
        let reading = algo.process(&sample);
        assert!(!reading.initialized);
        assert_eq!(reading.step_count, 0);
        assert_eq!(reading.tilt, Tilt::None);
        assert_eq!(algo.phase(), Phase::Warmup);
    }
}

/// Nyquist-rate oscillation of the y axis: the detector goes active on the 7th sample, cannot
/// count on it because there is no earlier filtered value yet, and counts on the 8th.
///
#[test]
pub fn nyquist_oscillation_activates_after_window() {
    let mut algo = pedometer();
    let readings = feed(&mut algo, &alternating_y(1.0, 7));

    assert!(!readings[5].initialized);
    assert!(readings[6].initialized);
    assert_eq!(algo.phase(), Phase::Active);
    assert_eq!(algo.step_count(), 0);

    let reading = algo.on_sample(0.0, -1.0, 0.0);
    assert!(reading.step);
    assert_eq!(reading.step_count, 1);
    assert_eq!(algo.refractory_remaining(), WINDOW_SIZE as u32);
}

#[test]
pub fn nyquist_oscillation_counts_once_per_refractory_window() {
    let mut algo = pedometer();
    let readings = feed(&mut algo, &alternating_y(1.0, 40));

    let steps: Vec<usize> = readings.iter().enumerate().filter(|(_, r)| r.step).map(|(i, _)| i).collect();
    assert_eq!(steps, vec![7, 15, 23, 31, 39]);
    assert_eq!(algo.step_count(), 5);
}

#[test]
pub fn constant_signal_never_steps() {
    let mut algo = pedometer();
    for _ in 0..100 {
        algo.on_sample(0.4, 9.7, 0.2);
    }
    assert!(algo.is_initialized());
    assert_eq!(algo.step_count(), 0);
}

#[test]
pub fn low_energy_crossing_is_retracted() {
    let mut algo = pedometer();

    // Amplified y is +-6, so the magnitude only changes by 72 per sample.
    let readings = feed(&mut algo, &alternating_y(0.6, 8));
    assert!(!readings[7].step);
    assert_eq!(algo.step_count(), 0);
    assert_eq!(algo.refractory_remaining(), WINDOW_SIZE as u32);

    feed(&mut algo, &alternating_y(0.6, 40));
    assert_eq!(algo.step_count(), 0);
}

#[test]
pub fn sinusoid_steps_are_bounded_by_half_periods() {
    let period = 16;
    let count = 96;
    let mut algo = pedometer();
    let readings = feed(&mut algo, &sinusoid_y(3.0, period, count));

    let candidates = (count / (period / 2)) as u64;
    let steps = algo.step_count();
    assert!(steps <= candidates, "{} steps > {} candidates", steps, candidates);
    assert!(steps + 2 >= candidates, "{} steps, expected about {}", steps, candidates);
    assert_eq!(readings.last().map(|r| r.step_count), Some(steps));
}

#[test]
pub fn steps_are_at_least_a_window_apart() {
    let mut algo = pedometer();
    let mut samples = sinusoid_y(5.0, 10, 200);
    samples.extend(noise(7, 400));
    samples.extend(alternating_y(2.0, 100));

    let readings = feed(&mut algo, &samples);
    let steps: Vec<usize> = readings.iter().enumerate().filter(|(_, r)| r.step).map(|(i, _)| i).collect();

    assert!(!steps.is_empty());
    for pair in steps.windows(2) {
        assert!(pair[1] - pair[0] > WINDOW_SIZE, "steps at {} and {}", pair[0], pair[1]);
    }

    let mut prev = 0;
    for reading in &readings {
        assert!(reading.step_count >= prev);
        prev = reading.step_count;
    }
}

#[test]
pub fn replay_after_start_is_deterministic() {
    let mut samples = noise(42, 300);
    samples.extend(sinusoid_y(4.0, 14, 120));

    let mut algo = pedometer();
    let first = feed(&mut algo, &samples);

    algo.start();
    let second = feed(&mut algo, &samples);

    assert_eq!(first, second);
}

#[test]
pub fn start_and_stop_always_reset() {
    let mut algo = pedometer();
    feed(&mut algo, &alternating_y(1.0, 30));
    assert!(algo.step_count() > 0);

    algo.stop();
    assert_eq!(algo.step_count(), 0);
    assert_eq!(algo.phase(), Phase::Warmup);
    assert_eq!(algo.refractory_remaining(), 0);
    assert_eq!(algo.tilt(), Tilt::None);

    // Reset is idempotent.
    algo.stop();
    algo.start();
    algo.start();
    assert_eq!(algo.step_count(), 0);
    assert!(!algo.is_initialized());

    // No stale data survives: the restarted detector behaves like a new one.
    let restarted = feed(&mut algo, &alternating_y(1.0, 40));
    let fresh = feed(&mut pedometer(), &alternating_y(1.0, 40));
    assert_eq!(restarted, fresh);
}

#[test]
pub fn tilt_follows_dominant_axis() {
    let mut algo = pedometer();
    for _ in 0..WINDOW_SIZE {
        algo.on_sample(0.0, 9.8, 0.0);
    }
    assert_eq!(algo.tilt(), Tilt::None);

    // x jumps by 30 amplified units, y stays put.
    let reading = algo.on_sample(3.0, 9.8, 0.0);
    assert_eq!(reading.tilt, Tilt::Vertical);

    // y drops by 50 amplified units, x by 30.
    let reading = algo.on_sample(0.0, 4.8, 0.0);
    assert_eq!(reading.tilt, Tilt::Horizontal);

    // Jitter below the noise floor on both axes.
    let reading = algo.on_sample(0.5, 5.1, 0.0);
    assert_eq!(reading.tilt, Tilt::None);
}

#[test]
pub fn non_finite_samples_never_step() {
    let mut algo = pedometer();
    feed(&mut algo, &alternating_y(1.0, 7));

    // Would have been the first step.
    let reading = algo.on_sample(0.0, f32::NAN, 0.0);
    assert!(!reading.step);

    // The NaN poisons the whole window until it has been pushed out.
    for sample in alternating_y(1.0, WINDOW_SIZE - 1) {
        assert!(!algo.process(&sample).step);
    }
    assert_eq!(algo.step_count(), 0);

    for _ in 0..10 {
        assert!(!algo.on_sample(f32::INFINITY, 1.0, f32::NEG_INFINITY).step);
    }
    assert_eq!(algo.step_count(), 0);
}

#[test]
pub fn custom_config_is_validated() {
    let config = PedometerConfig::<WINDOW_SIZE>::default().gain(f32::NAN);
    assert!(Pedometer::new(config).is_err());

    let config = PedometerConfig::<WINDOW_SIZE>::default().energy_floor(0.0);
    let mut algo = Pedometer::new(config).unwrap();

    let config = PedometerConfig::<WINDOW_SIZE>::default().refractory_samples(0);
    assert_eq!(
        Pedometer::new(config).err(),
        Some(ConfigError::RefractoryTooShort { samples: 0, minimum: 6 })
    );

    // Without an energy floor even the quiet oscillation counts.
    feed(&mut algo, &alternating_y(0.6, 16));
    assert_eq!(algo.step_count(), 2);
    assert_eq!(algo.config().energy_floor, 0.0);
}

#[test]
pub fn shortest_refractory_window_keeps_steps_a_window_apart() {
    let config = PedometerConfig::<WINDOW_SIZE>::default().refractory_samples(6);
    let mut algo = Pedometer::new(config).unwrap();
    let readings = feed(&mut algo, &alternating_y(1.0, 30));

    let steps: Vec<usize> = readings.iter().enumerate().filter(|(_, r)| r.step).map(|(i, _)| i).collect();
    assert_eq!(steps, vec![7, 14, 21, 28]);
}

#[test]
pub fn smaller_window_warms_up_sooner() {
    let config = PedometerConfig::with_kernel([0.25, -0.5, 0.25]);
    let mut algo = Pedometer::new(config).unwrap();

    algo.on_sample(0.0, 2.0, 0.0);
    algo.on_sample(0.0, -2.0, 0.0);
    assert!(!algo.is_initialized());
    algo.on_sample(0.0, 2.0, 0.0);
    assert!(algo.is_initialized());

    for k in 0..20 {
        let y = if k % 2 == 0 { -2.0 } else { 2.0 };
        algo.on_sample(0.0, y, 0.0);
    }
    assert!(algo.step_count() > 0);
    assert!(algo.refractory_remaining() <= 3);
}

#[cfg(feature = "debug")]
#[test]
pub fn trace_records_last_active_sample() {
    let mut algo = pedometer();
    feed(&mut algo, &alternating_y(1.0, 6));
    assert!(algo.last_trace().is_none());

    feed(&mut algo, &alternating_y(1.0, 2));
    let trace = algo.last_trace().copied().unwrap();
    assert_eq!(trace.outcome, StepOutcome::Step);
    assert!(trace.energy_delta >= DEFAULT_ENERGY_FLOOR);
    assert!(is_zero_crossing(trace.filtered, trace.prev_filtered));

    algo.reset();
    assert!(algo.last_trace().is_none());
}

/// Counts the detector outcomes of every active sample.
///
#[cfg(feature = "debug")]
fn count_outcomes(algo: &mut Pedometer<WINDOW_SIZE>, samples: &[Vector]) -> (Vec<usize>, u64, u64) {
    let mut crossings = vec![];
    let mut steps = 0;
    let mut suppressed = 0;
    for (i, sample) in samples.iter().enumerate() {
        if !algo.process(sample).initialized {
            continue;
        }
        match algo.last_trace().map(|trace| trace.outcome) {
            Some(StepOutcome::Step) => steps += 1,
            Some(StepOutcome::Suppressed) => suppressed += 1,
            _ => continue,
        }
        crossings.push(i);
    }
    (crossings, steps, suppressed)
}

/// A triangle wave with a 24 sample period crosses zero every 12 samples, well outside the
/// refractory window. Four periods hold 8 half periods; the first crossing falls inside warm-up.
///
#[cfg(feature = "debug")]
#[test]
pub fn triangle_wave_crossings_are_all_candidates() {
    let period = 24;
    let count = 4 * period;
    let expected = vec![14, 26, 38, 50, 62, 74, 86];
    assert_eq!(expected.len(), count / (period / 2) - 1);

    // Magnitude changes by 225 at every crossing, above the energy floor.
    let mut algo = pedometer();
    let (crossings, steps, suppressed) = count_outcomes(&mut algo, &triangle_y(3.0, period, count));
    assert_eq!(crossings, expected);
    assert_eq!((steps, suppressed), (7, 0));
    assert_eq!(algo.step_count(), 7);

    // Same crossings at a lower amplitude, but only 100 of magnitude change, so all are retracted.
    let mut algo = pedometer();
    let (crossings, steps, suppressed) = count_outcomes(&mut algo, &triangle_y(2.0, period, count));
    assert_eq!(crossings, expected);
    assert_eq!((steps, suppressed), (0, 7));
    assert_eq!(algo.step_count(), 0);
}
