use rand::Rng;

use crate::models::Round;

/// Produces a short cryptic clue for the current board. Reveals the true
/// value of at most one node whose selection is unset or wrong; the hidden
/// operators are never disclosed. One-way query, no effect on game state.
pub fn decryption_hint<R: Rng>(round: &Round, rng: &mut R) -> String {
    let suspects: Vec<(usize, i32)> = round
        .pins
        .iter()
        .enumerate()
        .filter(|(_, pin)| pin.selected_value != Some(pin.correct_value))
        .map(|(index, pin)| (index, pin.correct_value))
        .collect();

    if suspects.is_empty() {
        return "UPLINK CLEAN. NODE SEQUENCE VERIFIED. EXECUTE THE BYPASS.".to_string();
    }

    let (index, value) = suspects[rng.gen_range(0..suspects.len())];
    let node = format!("NODE_{:02}", index + 1);

    match rng.gen_range(0..4) {
        0 => format!("INTERCEPT: {} LEAKS VALUE {}. PATCH YOUR UPLINK.", node, value),
        1 => format!("PACKET CORRUPTION ON {}. TRUE PAYLOAD READS {}.", node, value),
        2 => format!("BIT-FLIP TRACED. {} RESOLVES TO {}.", node, value),
        _ => format!("MAINFRAME WHISPERS: INJECT {} INTO {}.", value, node),
    }
}
