use super::grid::{merged, Card, Score};

/// Slide a single line toward index 0: pack the cards, merge each adjacent equal pair once in a
/// single forward pass and pack again. Returns the new line and the sum of the merged values.
pub fn reduce(line: &[Card]) -> (Vec<Card>, Score) {
    let mut reduced = compress(line);
    let mut score: Score = 0;

    let mut j = 0;
    while j + 1 < reduced.len() {
        // a zeroed cmp can't merge with anything further along, and a doubled pivot is never
        // revisited because j only moves forward
        if let Some(card) = merged(reduced[j], reduced[j + 1]) {
            reduced[j] = card;
            reduced[j + 1] = 0;
            score += Score::from(card);
        }
        j += 1;
    }

    (compress(&reduced), score)
}

/// Drop the empty slots, keeping card order, and pad the line back out with zeros.
pub(crate) fn compress(line: &[Card]) -> Vec<Card> {
    let mut packed: Vec<Card> = line.iter().copied().filter(|card| *card != 0).collect();
    packed.resize(line.len(), 0);
    packed
}
