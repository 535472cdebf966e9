use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Storage key holding the best score
pub const HIGH_SCORE_KEY: &str = "echo_highscore";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "storage unavailable"),
            Self::WriteFailed(msg) => write!(f, "failed to write best score: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

/// Durable home of the best score
pub trait ScoreStore {
    /// Stored best score; anything missing or unreadable counts as 0
    fn load(&self) -> u32;
    fn save(&mut self, best: u32) -> Result<(), StorageError>;
}

/// Parse a stored best score. Leading digits win, like a lenient integer
/// parse, and one leading `+` is allowed; anything else is 0.
pub fn parse_best(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return 0;
    };
    let raw = raw.trim_start();
    let digits: String = raw
        .strip_prefix('+')
        .unwrap_or(raw)
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// In-memory store, shared through `Rc` so a test can watch what the game wrote
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Rc<Cell<Option<u32>>>,
    saves: Rc<Cell<u32>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        let store = Self::new();
        store.value.set(Some(best));
        store
    }

    pub fn stored(&self) -> Option<u32> {
        self.value.get()
    }

    pub fn save_count(&self) -> u32 {
        self.saves.get()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&self) -> u32 {
        self.value.get().unwrap_or(0)
    }

    fn save(&mut self, best: u32) -> Result<(), StorageError> {
        self.value.set(Some(best));
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
