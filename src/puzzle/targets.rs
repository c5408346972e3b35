use rand::Rng;

use crate::math::hundredths::ceil100;
use crate::puzzle::properties::LayerProperties;

/// Accuracy over all boundaries: each boundary contributes the integer
/// hundredth of `ways * convergence_rate`.
pub fn accuracy(ways: &[u32], layers: &[LayerProperties]) -> u32 {
    ways.iter()
        .zip(layers.iter())
        .map(|(&count, layer)| count * layer.convergence_rate / 100)
        .sum()
}

/// Time over all boundaries before module/indicator scaling: each boundary
/// contributes `ceil100(ways * delay)`.
pub fn base_time(ways: &[u32], layers: &[LayerProperties]) -> u32 {
    ways.iter()
        .zip(layers.iter())
        .map(|(&count, layer)| ceil100(count * layer.delay))
        .sum()
}

/// Full time for a candidate: the module count multiplies the layer time
/// and every indicator costs a flat 300 ms.
pub fn total_time(base: u32, modules: u32, indicators: u32) -> u32 {
    base * modules + indicators * 300
}

/// Required accuracy: the answer's accuracy minus up to a tenth of slack.
pub fn required_accuracy<R: Rng>(answer_accuracy: u32, rng: &mut R) -> u32 {
    answer_accuracy - rng.gen_range(0..=answer_accuracy / 10)
}

/// Indicator count: 5 to 8 trials, each lighting up with probability 1/4.
pub fn sample_indicators<R: Rng>(rng: &mut R) -> u32 {
    let trials: u32 = rng.gen_range(5..=8);
    (0..trials).filter(|_| rng.gen_range(0..=3) == 0).count() as u32
}

/// Module count: always odd, between 7 and 255.
pub fn sample_modules<R: Rng>(rng: &mut R) -> u32 {
    let m = rng.gen_range(2..=8);
    m * rng.gen_range(m..=m * 2) * 2 - 1
}

/// Required time: the answer's full time padded by up to a tenth.
pub fn required_time<R: Rng>(answer_time: u32, modules: u32, indicators: u32, rng: &mut R) -> u32 {
    let required = total_time(answer_time, modules, indicators);
    required + rng.gen_range(0..=required / 10)
}
