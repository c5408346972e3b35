use crate::classify::buckets::BucketCounts;
use crate::puzzle::generator::ways_counts;
use crate::puzzle::puzzle::Puzzle;
use crate::puzzle::targets;
use crate::puzzle::LAYERS_COUNT;

const CHOICE_MIN: u32 = 1;
const CHOICE_MAX: u32 = 4;

/// Sweeps every assignment of hidden widths (each 1..=4) and tallies how
/// the candidates land against the required accuracy and time.
pub fn classify(puzzle: &Puzzle) -> BucketCounts {
    let mut counts = BucketCounts::default();
    let mut widths = [CHOICE_MIN; LAYERS_COUNT];

    'sweep: loop {
        tally(puzzle, &widths, &mut counts);

        // Lexicographic odometer: bump the last width, carrying leftwards.
        for slot in (0..LAYERS_COUNT).rev() {
            if widths[slot] < CHOICE_MAX {
                widths[slot] += 1;
                continue 'sweep;
            }
            widths[slot] = CHOICE_MIN;
        }
        break;
    }

    counts
}

/// Scores one candidate width assignment and records its quadrant.
fn tally(puzzle: &Puzzle, widths: &[u32], counts: &mut BucketCounts) {
    let ways = ways_counts(puzzle.inputs, puzzle.outputs, widths);
    let acc = targets::accuracy(&ways, &puzzle.layers);
    let time = targets::total_time(
        targets::base_time(&ways, &puzzle.layers),
        puzzle.modules,
        puzzle.indicators,
    );

    if acc < puzzle.required_accuracy {
        if time <= puzzle.required_time {
            counts.lls += 1;
        } else {
            counts.lgs += 1;
        }
    } else if time <= puzzle.required_time {
        counts.gls += 1;
    } else {
        counts.ggs += 1;
    }
}
