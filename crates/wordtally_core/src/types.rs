/// Maximum number of characters a tallied word keeps; longer input is cut.
pub const MAX_WORD_LEN: usize = 10;

/// One row of a statistics snapshot: a normalized word and how many times
/// it has been added.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordCount {
    pub word: String,
    pub count: u32,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}
