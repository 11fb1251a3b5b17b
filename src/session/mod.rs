use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use rocket::serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::guard::SessionToken;
use crate::model::item_types::ItemTypes;
use crate::model::repository::User;


/// the one item shown in the content panel
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[serde(crate = "rocket::serde")]
pub struct SelectedItem {
    pub id: u32,
    #[serde(rename = "type")]
    pub item_type: ItemTypes,
}

/// ui state for a single logged-in token. Nothing in here is persisted; it all goes away on logout
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: u32,
    pub email: String,
    selected: Option<SelectedItem>,
    expanded_folders: HashSet<u32>,
}

impl Session {
    pub fn new(user_id: u32, email: &str) -> Session {
        Session {
            user_id,
            email: email.to_string(),
            selected: None,
            expanded_folders: HashSet::new(),
        }
    }

    pub fn selected(&self) -> Option<SelectedItem> {
        self.selected
    }

    /// replaces whatever was selected before
    pub fn select(&mut self, id: u32, item_type: ItemTypes) {
        self.selected = Some(SelectedItem { id, item_type });
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn is_selected(&self, id: u32, item_type: ItemTypes) -> bool {
        self.selected == Some(SelectedItem { id, item_type })
    }

    /// clears the selection only if it points at the passed item
    pub fn deselect(&mut self, id: u32, item_type: ItemTypes) {
        if self.is_selected(id, item_type) {
            self.selected = None;
        }
    }

    /// flips the folder between expanded and collapsed, returning `true` if it is now expanded
    pub fn toggle_folder(&mut self, folder_id: u32) -> bool {
        if self.expanded_folders.remove(&folder_id) {
            false
        } else {
            self.expanded_folders.insert(folder_id);
            true
        }
    }

    pub fn is_expanded(&self, folder_id: u32) -> bool {
        self.expanded_folders.contains(&folder_id)
    }

    /// drops the expanded flag for folders that no longer exist
    pub fn forget_folders(&mut self, folder_ids: &[u32]) {
        for id in folder_ids {
            self.expanded_folders.remove(id);
        }
    }

    /// the expanded folder ids, lowest first
    pub fn expanded_folders(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.expanded_folders.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// every live session, keyed by the sha256 of its token so that raw tokens are never held on to.
///
/// The map lock is only held long enough to find a session. Each session has its own lock, so
/// requests for the same token run one at a time while other sessions carry on.
///
/// This is managed by rocket and handed to handlers as `&State<SessionStore>`
#[derive(Default)]
pub struct SessionStore {
    sessions: Mutex<HashMap<String, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    /// starts a new session for the user and returns the token that refers to it
    pub fn create(&self, user: &User) -> String {
        let mut bytes = [0u8; 32];
        OsRng.fill_bytes(&mut bytes);
        let token = URL_SAFE_NO_PAD.encode(bytes);
        let session = Arc::new(Mutex::new(Session::new(user.id, &user.email)));
        self.lock().insert(hash_token(&token), session);
        log::info!("Started a session for user {}", user.id);
        token
    }

    /// runs `action` against the session the token refers to.
    ///
    /// Returns `None` if there is no such session, which handlers treat as not being logged in
    pub fn with_session<T>(
        &self,
        token: &SessionToken,
        action: impl FnOnce(&mut Session) -> T,
    ) -> Option<T> {
        let entry = self.lock().get(&hash_token(&token.0)).cloned()?;
        let mut session = recover(&entry);
        Some(action(&mut *session))
    }

    /// returns a copy of the session without holding on to the lock
    pub fn get(&self, token: &SessionToken) -> Option<Session> {
        self.with_session(token, |session| session.clone())
    }

    /// ends the session, returning `false` if it didn't exist
    pub fn remove(&self, token: &SessionToken) -> bool {
        let removed = self.lock().remove(&hash_token(&token.0));
        match removed {
            Some(session) => {
                log::info!("Ended the session for user {}", recover(&session).user_id);
                true
            }
            None => false,
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Arc<Mutex<Session>>>> {
        recover(&self.sessions)
    }
}

fn recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| {
        log::warn!("A session mutex was poisoned! Recovering...");
        mutex.clear_poison();
        PoisonError::into_inner(e)
    })
}

fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
