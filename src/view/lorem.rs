//! Deterministic filler text for the demo list.

const WORDS: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris", "nisi",
    "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
];

/// Seed used by the binary so every run shows the same list.
pub const DEFAULT_SEED: u64 = 0x5eed_1157;

/// SplitMix64: small, fast and good enough to vary paragraph lengths.
#[derive(Debug, Clone)]
struct SplitMix64(u64);

impl SplitMix64 {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    fn below(&mut self, bound: usize) -> usize {
        (self.next() % bound as u64) as usize
    }
}

/// Generate `count` paragraphs of varying length.
///
/// Each paragraph starts with `#<index>` so rows are easy to tell apart.
/// The same `seed` always yields the same text.
pub fn paragraphs(count: usize, seed: u64) -> Vec<String> {
    let mut rng = SplitMix64(seed);
    (0..count)
        .map(|index| {
            // Mostly short paragraphs with the occasional long one
            let words = if rng.below(8) == 0 {
                40 + rng.below(80)
            } else {
                3 + rng.below(25)
            };
            let mut text = format!("#{index}");
            for _ in 0..words {
                text.push(' ');
                text.push_str(WORDS[rng.below(WORDS.len())]);
            }
            text
        })
        .collect()
}
