//! Process-wide client state: the session store and the navigation
//! controller, owned together by the application shell.
//!
//! Nothing here is reachable ambiently; every flow receives the state by
//! reference. Each mutation advances a generation counter so that a network
//! completion issued under an older generation can be recognized and
//! discarded instead of clobbering newer state.
use crate::domain::navigation::{NavPayload, Navigator, View};
use crate::domain::profile::CitizenProfile;
use crate::domain::session::{Identity, Role, Session};
use crate::storage::{
    KEY_PROFILE, KEY_TOKEN, KEY_USER, KEY_USER_TYPE, KeyValueStorage, StorageResult,
};

/// Holds the current authenticated identity and persists it across reloads.
#[derive(Debug)]
pub struct SessionStore<S> {
    storage: S,
    session: Option<Session>,
}

impl<S: KeyValueStorage> SessionStore<S> {
    /// Creates an empty store over the given storage without reading it.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            session: None,
        }
    }

    /// Reads durable storage at process start. A session is reconstructed iff
    /// both a token and an identity are present; this is the only point where
    /// persisted state is trusted without re-validation against the backend.
    pub fn restore(storage: S) -> Self {
        let session = Self::read_persisted(&storage);
        Self { storage, session }
    }

    fn read_persisted(storage: &S) -> Option<Session> {
        let token = read_key(storage, KEY_TOKEN)?;
        let identity_raw = read_key(storage, KEY_USER)?;
        let identity: Identity = match serde_json::from_str(&identity_raw) {
            Ok(identity) => identity,
            Err(err) => {
                log::warn!("Discarding unreadable persisted identity: {err}");
                return None;
            }
        };
        let role = read_key(storage, KEY_USER_TYPE)
            .map(|value| Role::from_storage_str(&value))
            .unwrap_or(Role::Citizen);
        Some(Session::new(identity, role, token))
    }

    /// Stores the identity, token and role, persisting them immediately.
    pub fn login(&mut self, identity: Identity, token: String, role: Role) -> StorageResult<()> {
        self.storage.set(KEY_TOKEN, &token)?;
        self.storage.set(KEY_USER_TYPE, role.as_storage_str())?;
        self.storage.set(KEY_USER, &serde_json::to_string(&identity)?)?;
        self.session = Some(Session::new(identity, role, token));
        Ok(())
    }

    /// Clears the session and every persisted key, including the cached
    /// profile.
    pub fn logout(&mut self) -> StorageResult<()> {
        for key in [KEY_TOKEN, KEY_USER_TYPE, KEY_USER, KEY_PROFILE] {
            self.storage.remove(key)?;
        }
        self.session = None;
        Ok(())
    }

    pub fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    /// Returns the locally cached profile, if one deserializes.
    pub fn cached_profile(&self) -> Option<CitizenProfile> {
        let raw = read_key(&self.storage, KEY_PROFILE)?;
        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(err) => {
                log::warn!("Discarding unreadable cached profile: {err}");
                None
            }
        }
    }

    pub fn cache_profile(&self, profile: &CitizenProfile) -> StorageResult<()> {
        self.storage.set(KEY_PROFILE, &serde_json::to_string(profile)?)
    }

    pub fn clear_cached_profile(&self) -> StorageResult<()> {
        self.storage.remove(KEY_PROFILE)
    }
}

fn read_key<S: KeyValueStorage>(storage: &S, key: &str) -> Option<String> {
    match storage.get(key) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("Failed to read storage key {key}: {err}");
            None
        }
    }
}

/// Aggregate client state owned by the application shell: session store,
/// navigation controller and the state generation counter.
#[derive(Debug)]
pub struct AppState<S> {
    sessions: SessionStore<S>,
    nav: Navigator,
    generation: u64,
}

impl<S: KeyValueStorage> AppState<S> {
    /// Fresh state with an empty session, at the `home` view.
    pub fn new(storage: S) -> Self {
        Self {
            sessions: SessionStore::new(storage),
            nav: Navigator::new(),
            generation: 0,
        }
    }

    /// State for process start: restores the persisted session synchronously
    /// before the first render.
    pub fn restore(storage: S) -> Self {
        Self {
            sessions: SessionStore::restore(storage),
            nav: Navigator::new(),
            generation: 0,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.sessions.current()
    }

    pub fn token(&self) -> Option<&str> {
        self.sessions.token()
    }

    pub fn view(&self) -> View {
        self.nav.current()
    }

    pub fn payload(&self) -> Option<&NavPayload> {
        self.nav.payload()
    }

    /// Generation active right now. Flows capture this when issuing a request
    /// and check it again with [`AppState::is_current`] before applying the
    /// completion.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a completion issued under `issued` may still be applied.
    pub fn is_current(&self, issued: u64) -> bool {
        self.generation == issued
    }

    /// Guarded navigation. The guard re-runs after the transition, so a
    /// forbidden target settles on its redirect before this returns.
    pub fn navigate(&mut self, view: View, payload: Option<NavPayload>) {
        self.nav.navigate(view, payload);
        self.bump();
        self.run_guard();
    }

    pub fn login(&mut self, identity: Identity, token: String, role: Role) -> StorageResult<()> {
        self.sessions.login(identity, token, role)?;
        self.bump();
        self.run_guard();
        Ok(())
    }

    pub fn logout(&mut self) -> StorageResult<()> {
        self.sessions.logout()?;
        self.bump();
        self.run_guard();
        Ok(())
    }

    pub fn cached_profile(&self) -> Option<CitizenProfile> {
        self.sessions.cached_profile()
    }

    pub fn cache_profile(&self, profile: &CitizenProfile) -> StorageResult<()> {
        self.sessions.cache_profile(profile)
    }

    pub fn clear_cached_profile(&self) -> StorageResult<()> {
        self.sessions.clear_cached_profile()
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    fn run_guard(&mut self) {
        if let Some(forced) = self.nav.enforce_guard(self.sessions.current()) {
            log::debug!("Navigation guard redirected to {forced}");
            self.bump();
        }
    }
}
