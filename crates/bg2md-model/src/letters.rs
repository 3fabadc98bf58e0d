/// Letter case for footnote (lowercase) and cross-reference (uppercase) labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Lower,
    Upper,
}

/// Label for the `n`th entry (1-based) in bijective base-26:
/// 1 → a, 26 → z, 27 → aa, 52 → az, 53 → ba, 702 → zz, 703 → aaa.
///
/// Returns an empty string for 0, which has no label.
pub fn letter_label(n: usize, case: LetterCase) -> String {
    let base = match case {
        LetterCase::Lower => b'a',
        LetterCase::Upper => b'A',
    };

    let mut digits = Vec::new();
    let mut rest = n;
    while rest > 0 {
        rest -= 1;
        digits.push(char::from(base + (rest % 26) as u8));
        rest /= 26;
    }

    digits.iter().rev().collect()
}
