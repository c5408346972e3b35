use std::collections::HashMap;

use log::debug;
use rand::Rng;

use crate::puzzle::properties::LayerProperties;
use crate::puzzle::puzzle::Puzzle;
use crate::puzzle::targets;
use crate::puzzle::{BOUNDARIES, LAYERS_COUNT};

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Draws one complete puzzle from `rng`.
///
/// The intermediate answer values (hidden widths, answer accuracy, answer
/// time) are folded into the required thresholds and then dropped; they are
/// only visible through debug logging.
pub fn generate_puzzle<R: Rng>(rng: &mut R) -> Puzzle {
    let inputs = rng.gen_range(1..=4);
    let outputs = rng.gen_range(1..=4);

    // Hidden widths of the intended solution; never printed.
    let widths: Vec<u32> = (0..LAYERS_COUNT).map(|_| rng.gen_range(1..=4)).collect();
    debug!("answer widths: {widths:?}");

    let ways = ways_counts(inputs, outputs, &widths);
    let rates = sample_rates(rng);
    let layers = assign_layers(&ways, &rates, rng);
    debug!("layer properties: {layers:?}");

    let answer_accuracy = targets::accuracy(&ways, &layers);
    let answer_time = targets::base_time(&ways, &layers);
    debug!("answer accuracy: {answer_accuracy}, answer time: {answer_time}");

    let required_accuracy = targets::required_accuracy(answer_accuracy, rng);
    let indicators = targets::sample_indicators(rng);
    let modules = targets::sample_modules(rng);
    let required_time = targets::required_time(answer_time, modules, indicators, rng);

    Puzzle {
        inputs,
        outputs,
        layers,
        required_accuracy,
        required_time,
        modules,
        indicators,
    }
}

// ---------------------------------------------------------------------------
// Sampler and assigner
// ---------------------------------------------------------------------------

/// Connection counts across each layer boundary: the widths on both sides
/// of the boundary multiplied, chaining input width, hidden widths, and
/// output width.
pub fn ways_counts(inputs: u32, outputs: u32, widths: &[u32]) -> Vec<u32> {
    let mut ways = Vec::with_capacity(widths.len() + 1);
    ways.push(widths[0] * inputs);
    for i in 1..widths.len() {
        ways.push(widths[i] * widths[i - 1]);
    }
    ways.push(widths[widths.len() - 1] * outputs);
    ways
}

/// Convergence rate pool for one puzzle, sorted descending.
pub fn sample_rates<R: Rng>(rng: &mut R) -> Vec<u32> {
    let mut rates: Vec<u32> = (0..BOUNDARIES).map(|_| rng.gen_range(1..=999)).collect();
    rates.sort_unstable_by(|a, b| b.cmp(a));
    rates
}

/// Pairs descending ways counts with descending convergence rates.
///
/// Boundaries sharing a ways count form a pool; each rank pops a uniformly
/// random boundary from its pool, so ties are broken without replacement.
/// The slot's delay is drawn here, at assignment time, and lands on the
/// same boundary index as the rate.
pub fn assign_layers<R: Rng>(
    ways: &[u32],
    rates_desc: &[u32],
    rng: &mut R,
) -> Vec<LayerProperties> {
    let mut pools: HashMap<u32, Vec<usize>> = HashMap::new();
    for (index, &count) in ways.iter().enumerate() {
        pools.entry(count).or_default().push(index);
    }

    let mut ways_desc = ways.to_vec();
    ways_desc.sort_unstable_by(|a, b| b.cmp(a));

    let mut layers = vec![LayerProperties { convergence_rate: 0, delay: 0 }; ways.len()];
    for (rank, count) in ways_desc.into_iter().enumerate() {
        let pool = pools.get_mut(&count).expect("sorted ways count has a pool");
        let slot = pool.swap_remove(rng.gen_range(0..pool.len()));
        layers[slot] = LayerProperties {
            convergence_rate: rates_desc[rank],
            delay: rng.gen_range(1..=999),
        };
    }
    layers
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn ways_counts_chain_adjacent_widths() {
        assert_eq!(ways_counts(2, 3, &[2, 2, 3, 4]), vec![4, 4, 6, 12, 12]);
    }

    #[test]
    fn ways_counts_are_positive() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let inputs = rng.gen_range(1..=4);
            let outputs = rng.gen_range(1..=4);
            let widths: Vec<u32> = (0..LAYERS_COUNT).map(|_| rng.gen_range(1..=4)).collect();
            let ways = ways_counts(inputs, outputs, &widths);
            assert_eq!(ways.len(), BOUNDARIES);
            assert!(ways.iter().all(|&count| count >= 1));
        }
    }

    #[test]
    fn distinct_ways_counts_map_rank_to_rank() {
        let ways = [12, 2, 6, 8, 3];
        let rates = [999, 800, 600, 400, 200];
        let mut rng = StdRng::seed_from_u64(7);
        let layers = assign_layers(&ways, &rates, &mut rng);
        assert_eq!(layers[0].convergence_rate, 999); // ways 12
        assert_eq!(layers[3].convergence_rate, 800); // ways 8
        assert_eq!(layers[2].convergence_rate, 600); // ways 6
        assert_eq!(layers[4].convergence_rate, 400); // ways 3
        assert_eq!(layers[1].convergence_rate, 200); // ways 2
    }

    #[test]
    fn tied_ways_counts_split_the_matching_rate_ranks() {
        let ways = [4, 4, 6, 12, 12];
        let rates = [900, 700, 500, 300, 100];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let layers = assign_layers(&ways, &rates, &mut rng);

            // Boundaries 3 and 4 share the largest ways count and take the
            // two largest rates in either order; boundary 2 is deterministic.
            let mut top = vec![layers[3].convergence_rate, layers[4].convergence_rate];
            top.sort_unstable();
            assert_eq!(top, vec![700, 900]);
            assert_eq!(layers[2].convergence_rate, 500);
            let mut bottom = vec![layers[0].convergence_rate, layers[1].convergence_rate];
            bottom.sort_unstable();
            assert_eq!(bottom, vec![100, 300]);
        }
    }

    #[test]
    fn every_boundary_receives_a_coefficient_pair() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let widths: Vec<u32> = (0..LAYERS_COUNT).map(|_| rng.gen_range(1..=4)).collect();
            let ways = ways_counts(1, 1, &widths);
            let rates = sample_rates(&mut rng);
            let layers = assign_layers(&ways, &rates, &mut rng);

            assert_eq!(layers.len(), BOUNDARIES);
            assert!(layers.iter().all(|l| (1..=999).contains(&l.convergence_rate)));
            assert!(layers.iter().all(|l| (1..=999).contains(&l.delay)));

            // The assigned rates are a permutation of the sampled pool.
            let mut assigned: Vec<u32> = layers.iter().map(|l| l.convergence_rate).collect();
            assigned.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(assigned, rates);
        }
    }

    #[test]
    fn generated_puzzles_stay_in_range() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate_puzzle(&mut rng);
            assert!((1..=4).contains(&puzzle.inputs));
            assert!((1..=4).contains(&puzzle.outputs));
            assert_eq!(puzzle.layers.len(), BOUNDARIES);
            assert_eq!(puzzle.modules % 2, 1);
            assert!((7..=255).contains(&puzzle.modules));
            assert!(puzzle.indicators <= 8);
        }
    }
}
