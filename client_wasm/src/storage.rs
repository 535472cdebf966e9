//! `localStorage` home for the best score

use game_core::{parse_best, ScoreStore, StorageError, HIGH_SCORE_KEY};
use web_sys::Storage;

pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn new() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            crate::console_log!("localStorage unavailable, best score will not persist");
        }
        Self { storage }
    }
}

impl ScoreStore for LocalStore {
    fn load(&self) -> u32 {
        let raw = self
            .storage
            .as_ref()
            .and_then(|s| s.get_item(HIGH_SCORE_KEY).ok().flatten());
        parse_best(raw.as_deref())
    }

    fn save(&mut self, best: u32) -> Result<(), StorageError> {
        let storage = self.storage.as_ref().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(HIGH_SCORE_KEY, &best.to_string())
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }
}
