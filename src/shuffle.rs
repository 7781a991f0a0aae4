use rand::Rng;

/// Returns a uniformly shuffled copy of `cards` (Fisher-Yates). The input is
/// left untouched; empty and single-element inputs come back as-is.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(cards: &[T], rng: &mut R) -> Vec<T> {
    let mut next = cards.to_vec();

    for index in (1..next.len()).rev() {
        let swap_index = rng.random_range(0..=index);
        next.swap(index, swap_index);
    }

    next
}
