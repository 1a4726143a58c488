//! Edit-distance string similarity.

/// Levenshtein distance counted in characters.
#[must_use]
pub fn levenshtein(left: &str, right: &str) -> usize {
    let right_chars: Vec<char> = right.chars().collect();
    let mut previous: Vec<usize> = (0..=right_chars.len()).collect();
    let mut current = Vec::with_capacity(previous.len());
    for (row, left_char) in left.chars().enumerate() {
        current.clear();
        current.push(row + 1);
        for ((diagonal, above), right_char) in previous
            .iter()
            .zip(previous.iter().skip(1))
            .zip(&right_chars)
        {
            let beside = current.last().copied().unwrap_or(row + 1);
            let substitution = diagonal + usize::from(left_char != *right_char);
            current.push(substitution.min(above + 1).min(beside + 1));
        }
        std::mem::swap(&mut previous, &mut current);
    }
    previous.last().copied().unwrap_or(0)
}

/// Similarity in `[0, 1]`: one minus the edit distance over the longer
/// length. Two empty strings are identical.
///
/// # Examples
/// ```
/// use barhop_nlu::similarity;
///
/// assert_eq!(similarity("atomic", "atomic"), 1.0);
/// assert_eq!(similarity("abcd", "abce"), 0.75);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "normalising a distance")]
pub fn similarity(left: &str, right: &str) -> f64 {
    let longest = left.chars().count().max(right.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = u32::try_from(levenshtein(left, right)).unwrap_or(u32::MAX);
    let length = u32::try_from(longest).unwrap_or(u32::MAX);
    1.0 - f64::from(distance) / f64::from(length)
}
