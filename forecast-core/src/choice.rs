/// Outcome of reading a disambiguation-menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Zero-based index of a valid pick.
    Selected(usize),
    /// An integer outside `1..=count`.
    OutOfRange,
    NotANumber,
}

impl Choice {
    /// Index to use; both fallbacks land on the first candidate.
    pub fn index(self) -> usize {
        match self {
            Choice::Selected(i) => i,
            Choice::OutOfRange | Choice::NotANumber => 0,
        }
    }
}

/// Interpret a 1-based menu answer for a menu of `count` entries.
pub fn parse_choice(input: &str, count: usize) -> Choice {
    let Ok(n) = input.trim().parse::<i64>() else {
        return Choice::NotANumber;
    };

    match usize::try_from(n) {
        Ok(n) if (1..=count).contains(&n) => Choice::Selected(n - 1),
        _ => Choice::OutOfRange,
    }
}
