//! Ordinal words used to name per-root-view accessors (`firstView`, ...)

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ordinal {
    /// 1-based position.
    pub number: usize,
    pub word: &'static str,
}

pub const ORDINALS: [Ordinal; 20] = [
    Ordinal { number: 1, word: "first" },
    Ordinal { number: 2, word: "second" },
    Ordinal { number: 3, word: "third" },
    Ordinal { number: 4, word: "fourth" },
    Ordinal { number: 5, word: "fifth" },
    Ordinal { number: 6, word: "sixth" },
    Ordinal { number: 7, word: "seventh" },
    Ordinal { number: 8, word: "eighth" },
    Ordinal { number: 9, word: "ninth" },
    Ordinal { number: 10, word: "tenth" },
    Ordinal { number: 11, word: "eleventh" },
    Ordinal { number: 12, word: "twelfth" },
    Ordinal { number: 13, word: "thirteenth" },
    Ordinal { number: 14, word: "fourteenth" },
    Ordinal { number: 15, word: "fifteenth" },
    Ordinal { number: 16, word: "sixteenth" },
    Ordinal { number: 17, word: "seventeenth" },
    Ordinal { number: 18, word: "eighteenth" },
    Ordinal { number: 19, word: "nineteenth" },
    Ordinal { number: 20, word: "twentieth" },
];
