use crate::models::{Operator, Pin};

/// Returned when any node has no selection yet. Targets are confined to
/// [24, 100], so this can never collide with a real result.
pub const INCOMPLETE_GUESS: i32 = -1;

/// Computes the player's chain left-to-right over their current selections.
/// Pure and idempotent; never panics. Division by zero yields 0, so a wrong
/// guess produces a mismatching value rather than a fault.
pub fn check_guess(pins: &[Pin], operators: &[Operator]) -> i32 {
    let mut selected = Vec::with_capacity(pins.len());
    for pin in pins {
        match pin.selected_value {
            Some(value) => selected.push(value),
            None => return INCOMPLETE_GUESS,
        }
    }

    let (first, rest) = match selected.split_first() {
        Some(parts) => parts,
        None => return INCOMPLETE_GUESS,
    };

    let mut result = *first;
    for (op, &next) in operators.iter().zip(rest) {
        result = op.apply(result, next);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(correct: i32, selected: Option<i32>) -> Pin {
        Pin {
            correct_value: correct,
            options: vec![correct, correct + 1, correct + 2],
            selected_value: selected,
        }
    }

    #[test]
    fn test_correct_selections_hit_target() {
        let pins = vec![pin(6, Some(6)), pin(5, Some(5)), pin(2, Some(2))];
        let ops = vec![Operator::Multiply, Operator::Add];
        assert_eq!(check_guess(&pins, &ops), 32);
    }

    #[test]
    fn test_wrong_selection_mismatches() {
        let pins = vec![pin(6, Some(6)), pin(5, Some(4)), pin(2, Some(2))];
        let ops = vec![Operator::Multiply, Operator::Add];
        assert_eq!(check_guess(&pins, &ops), 26);
    }

    #[test]
    fn test_unset_selection_returns_sentinel() {
        let pins = vec![pin(6, Some(6)), pin(5, None), pin(2, Some(2))];
        let ops = vec![Operator::Multiply, Operator::Add];
        assert_eq!(check_guess(&pins, &ops), INCOMPLETE_GUESS);
    }

    #[test]
    fn test_empty_pins_return_sentinel() {
        assert_eq!(check_guess(&[], &[]), INCOMPLETE_GUESS);
    }

    #[test]
    fn test_division_by_zero_yields_zero() {
        let mut zero_pin = pin(4, Some(0));
        zero_pin.options = vec![0, 4, 9];
        let pins = vec![pin(8, Some(8)), zero_pin];
        let ops = vec![Operator::Divide];
        assert_eq!(check_guess(&pins, &ops), 0);
    }

    #[test]
    fn test_idempotent_for_fixed_input() {
        let pins = vec![pin(9, Some(9)), pin(3, Some(3)), pin(4, Some(4))];
        let ops = vec![Operator::Divide, Operator::Multiply];
        let first = check_guess(&pins, &ops);
        let second = check_guess(&pins, &ops);
        assert_eq!(first, second);
        assert_eq!(first, 12);
    }
}
