//! Answer checking for choice and drag-drop games.

use super::types::MiniGame;

/// A picked choice is right when it equals the answer after trimming.
pub fn choice_matches(choice: &str, correct_answer: &str) -> bool {
    choice.trim() == correct_answer.trim()
}

/// Lowercase with every whitespace character removed.
fn squash(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Check a drag-drop arrangement, most exact rule first:
///
/// 1. identical to `drag_correct_order`
/// 2. same tokens as `drag_correct_order` ignoring case and whitespace
/// 3. without a correct order, the joined tokens match `correct_answer`
///    ignoring case and whitespace
pub fn arrangement_matches(arrangement: &[String], game: &MiniGame) -> bool {
    let order = &game.drag_correct_order;

    if !order.is_empty() {
        if arrangement == order.as_slice() {
            return true;
        }
        return arrangement.len() == order.len()
            && arrangement
                .iter()
                .zip(order.iter())
                .all(|(placed, expected)| squash(placed) == squash(expected));
    }

    let expected = squash(&game.correct_answer);
    if expected.is_empty() {
        return false;
    }
    // Squashing makes the space-joined and concatenated forms identical
    squash(&arrangement.concat()) == expected
}
