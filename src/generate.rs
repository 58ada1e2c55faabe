use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Difficulty, Operator, Pin, Round};

/// Correct node values are drawn from this range.
const VALUE_MIN: i32 = 1;
const VALUE_MAX: i32 = 12;

/// Decoy options may reach a little past the value range.
const DECOY_MIN: i32 = 1;
const DECOY_MAX: i32 = 15;

const TARGET_MIN: i32 = 24;
const TARGET_MAX: i32 = 100;

/// No intermediate result may go negative or past this cap.
const RESULT_CAP: i32 = 1000;

const OPTIONS_PER_PIN: usize = 3;

/// Bound on rejection sampling; for the ranges above a candidate is
/// accepted within a few dozen draws.
const MAX_CANDIDATES: u32 = 100_000;

/// Generates a round by rejection sampling: draw random node values and
/// operators, evaluate the chain left-to-right, and retry until the result
/// is a clean integer in the target range.
pub fn generate_round<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Result<Round, String> {
    let count = difficulty.pin_count();

    for _ in 0..MAX_CANDIDATES {
        let values: Vec<i32> = (0..count).map(|_| rng.gen_range(VALUE_MIN..=VALUE_MAX)).collect();
        let operators: Vec<Operator> = (1..count)
            .map(|_| Operator::ALL[rng.gen_range(0..Operator::ALL.len())])
            .collect();

        let target = match chain_value(&values, &operators) {
            Some(t) => t,
            None => continue,
        };
        if !(TARGET_MIN..=TARGET_MAX).contains(&target) {
            continue;
        }

        let pins = values
            .iter()
            .map(|&value| Pin {
                correct_value: value,
                options: pin_options(value, rng),
                selected_value: None,
            })
            .collect();

        return Ok(Round { target, pins, operators });
    }

    Err(format!(
        "round generation exhausted after {} candidates",
        MAX_CANDIDATES
    ))
}

/// Evaluates the chain left-to-right, or `None` if the candidate is invalid:
/// a division that doesn't divide exactly, or an intermediate result outside
/// [0, RESULT_CAP].
fn chain_value(values: &[i32], operators: &[Operator]) -> Option<i32> {
    let mut result = values[0];
    for (op, &next) in operators.iter().zip(&values[1..]) {
        if *op == Operator::Divide && (next == 0 || result % next != 0) {
            return None;
        }
        result = op.apply(result, next);
        if result < 0 || result > RESULT_CAP {
            return None;
        }
    }
    Some(result)
}

/// Builds the option set for one node: the correct value plus distinct
/// decoys, in shuffled order.
fn pin_options<R: Rng>(correct_value: i32, rng: &mut R) -> Vec<i32> {
    let mut options = vec![correct_value];
    while options.len() < OPTIONS_PER_PIN {
        let decoy = rng.gen_range(DECOY_MIN..=DECOY_MAX);
        if !options.contains(&decoy) {
            options.push(decoy);
        }
    }
    options.shuffle(rng);
    options
}
