// Generates one perceptron sizing puzzle, prints its statement, then sweeps
// the full candidate space and reports how the candidates split against the
// required accuracy and time. Set RUST_LOG=debug to see the hidden answer.
use std::io::{self, Write};

use perceptron_gen::{classify, generate_puzzle, report};

fn main() -> io::Result<()> {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let puzzle = generate_puzzle(&mut rng);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::write_puzzle(&mut out, &puzzle)?;

    let counts = classify(&puzzle);
    report::write_buckets(&mut out, &counts)?;
    out.flush()
}
