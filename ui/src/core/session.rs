//! Guest navigation state and its mirror in device storage.
//!
//! Three values survive a reload: the checked-in flag, the list of document
//! previews and the "documents sent" flag. Each is written whenever it
//! changes and read back once at startup. Last write wins.

use dioxus::logger::tracing::{debug, warn};
use uuid::Uuid;

use super::storage::{
    read_json, write_json, KeyValueStore, StorageError, KEY_CHECKED_IN, KEY_DOCUMENTS,
    KEY_DOCUMENTS_SENT,
};

/// Screen selected by the guest. Ignored while checked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    UploadId,
    PropertyInfo,
}

/// One selected identity document, shown as a preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDocument {
    pub id: Uuid,
    pub preview_url: String,
}

impl UploadedDocument {
    pub fn new(preview_url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            preview_url: preview_url.into(),
        }
    }
}

/// The values mirrored into storage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersistedSession {
    pub checked_in: bool,
    pub documents: Vec<String>,
    pub documents_sent: bool,
}

impl PersistedSession {
    /// Read every key independently; absent or unreadable keys keep their default.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self {
            checked_in: load_or_default(store, KEY_CHECKED_IN),
            documents: load_or_default(store, KEY_DOCUMENTS),
            documents_sent: load_or_default(store, KEY_DOCUMENTS_SENT),
        }
    }
}

fn load_or_default<T: serde::de::DeserializeOwned + Default>(
    store: &dyn KeyValueStore,
    key: &str,
) -> T {
    match read_json(store, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(err) => {
            warn!("[session] {err}; using default");
            T::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuestSession {
    page: Page,
    checked_in: bool,
    documents: Vec<UploadedDocument>,
    documents_sent: bool,
}

impl GuestSession {
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let stored = PersistedSession::load(store);
        let session = Self::from_persisted(stored);
        debug!(
            "[session] restored checked_in={} documents={} sent={}",
            session.checked_in,
            session.documents.len(),
            session.documents_sent
        );
        session
    }

    /// Object URLs (`blob:`) belong to the page instance that created them and
    /// cannot be shown after a reload, so only self-contained previews are kept.
    pub fn from_persisted(stored: PersistedSession) -> Self {
        let documents = stored
            .documents
            .into_iter()
            .filter(|url| !url.starts_with("blob:"))
            .map(UploadedDocument::new)
            .collect();

        Self {
            page: Page::Home,
            checked_in: stored.checked_in,
            documents,
            documents_sent: stored.documents_sent,
        }
    }

    pub fn persisted(&self) -> PersistedSession {
        PersistedSession {
            checked_in: self.checked_in,
            documents: self
                .documents
                .iter()
                .map(|doc| doc.preview_url.clone())
                .collect(),
            documents_sent: self.documents_sent,
        }
    }

    /// The page actually shown. Checked-in guests always land on property info.
    pub fn rendered_page(&self) -> Page {
        if self.checked_in {
            Page::PropertyInfo
        } else {
            self.page
        }
    }

    pub fn is_checked_in(&self) -> bool {
        self.checked_in
    }

    pub fn documents(&self) -> &[UploadedDocument] {
        &self.documents
    }

    pub fn documents_sent(&self) -> bool {
        self.documents_sent
    }

    pub fn choose_check_in(&mut self, new_guest: bool) {
        if new_guest {
            self.page = Page::UploadId;
        } else {
            self.page = Page::PropertyInfo;
            self.checked_in = true;
        }
    }

    pub fn add_documents<I>(&mut self, preview_urls: I)
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.documents
            .extend(preview_urls.into_iter().map(UploadedDocument::new));
        self.documents_sent = false;
    }

    /// Any removal attempt invalidates a previous send.
    pub fn remove_document(&mut self, index: usize) -> Option<UploadedDocument> {
        self.documents_sent = false;
        (index < self.documents.len()).then(|| self.documents.remove(index))
    }

    pub fn mark_documents_sent(&mut self) {
        self.documents_sent = true;
    }

    pub fn can_continue(&self) -> bool {
        self.documents_sent
    }

    /// Returns whether navigation happened.
    pub fn continue_to_property_info(&mut self) -> bool {
        if !self.can_continue() {
            return false;
        }
        self.page = Page::PropertyInfo;
        true
    }
}

/// Writes each mirrored value to storage when it differs from the last write.
///
/// Keys are independent: a rejected write is retried on the next sync and
/// never holds back the other keys.
#[derive(Debug, Default)]
pub struct PersistenceMirror {
    checked_in: Option<bool>,
    documents: Option<Vec<String>>,
    documents_sent: Option<bool>,
}

impl PersistenceMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many keys were written. The first sync writes all three.
    /// Every changed key is attempted; the first failure is returned afterwards.
    pub fn sync(
        &mut self,
        current: &PersistedSession,
        store: &mut dyn KeyValueStore,
    ) -> Result<usize, StorageError> {
        let mut written = 0;
        let mut first_error = None;

        mirror_key(
            store,
            KEY_CHECKED_IN,
            &current.checked_in,
            &mut self.checked_in,
            &mut written,
            &mut first_error,
        );
        mirror_key(
            store,
            KEY_DOCUMENTS,
            &current.documents,
            &mut self.documents,
            &mut written,
            &mut first_error,
        );
        mirror_key(
            store,
            KEY_DOCUMENTS_SENT,
            &current.documents_sent,
            &mut self.documents_sent,
            &mut written,
            &mut first_error,
        );

        match first_error {
            Some(err) => Err(err),
            None => Ok(written),
        }
    }
}

fn mirror_key<T: serde::Serialize + Clone + PartialEq>(
    store: &mut dyn KeyValueStore,
    key: &str,
    value: &T,
    last: &mut Option<T>,
    written: &mut usize,
    first_error: &mut Option<StorageError>,
) {
    if last.as_ref() == Some(value) {
        return;
    }
    match write_json(store, key, value) {
        Ok(()) => {
            *last = Some(value.clone());
            *written += 1;
        }
        Err(err) => {
            warn!("[session] {err}");
            first_error.get_or_insert(err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;

    fn synced(session: &GuestSession, store: &mut MemoryStore) {
        PersistenceMirror::new()
            .sync(&session.persisted(), store)
            .unwrap();
    }

    #[test]
    fn fresh_store_starts_at_home() {
        let session = GuestSession::restore(&MemoryStore::new());
        assert_eq!(session.rendered_page(), Page::Home);
        assert!(!session.is_checked_in());
        assert!(session.documents().is_empty());
        assert!(!session.documents_sent());
    }

    #[test]
    fn returning_guest_is_checked_in() {
        let mut session = GuestSession::default();
        session.choose_check_in(false);
        assert!(session.is_checked_in());
        assert_eq!(session.rendered_page(), Page::PropertyInfo);
    }

    #[test]
    fn new_guest_goes_to_upload_without_checking_in() {
        let mut session = GuestSession::default();
        session.choose_check_in(true);
        assert_eq!(session.rendered_page(), Page::UploadId);
        assert!(!session.is_checked_in());
    }

    #[test]
    fn checked_in_survives_reload() {
        let mut store = MemoryStore::new();
        let mut session = GuestSession::default();
        session.choose_check_in(false);
        synced(&session, &mut store);

        let reloaded = GuestSession::restore(&store);
        assert!(reloaded.is_checked_in());
        assert_eq!(reloaded.rendered_page(), Page::PropertyInfo);
    }

    #[test]
    fn upload_and_remove_clear_sent_flag() {
        let mut session = GuestSession::default();
        session.add_documents(["data:image/png;base64,AAAA"]);
        session.mark_documents_sent();
        assert!(session.documents_sent());

        session.add_documents(["data:image/png;base64,BBBB"]);
        assert!(!session.documents_sent());

        session.mark_documents_sent();
        let removed = session.remove_document(0);
        assert!(removed.is_some());
        assert!(!session.documents_sent());
        assert_eq!(session.documents().len(), 1);
    }

    #[test]
    fn out_of_range_removal_still_clears_sent_flag() {
        let mut session = GuestSession::default();
        session.add_documents(["data:a"]);
        session.mark_documents_sent();
        assert!(session.remove_document(5).is_none());
        assert_eq!(session.documents().len(), 1);
        assert!(!session.documents_sent());
    }

    #[test]
    fn continue_requires_sent_documents() {
        let mut session = GuestSession::default();
        session.choose_check_in(true);
        session.add_documents(["data:a"]);
        assert!(!session.continue_to_property_info());
        assert_eq!(session.rendered_page(), Page::UploadId);

        session.mark_documents_sent();
        assert!(session.continue_to_property_info());
        assert_eq!(session.rendered_page(), Page::PropertyInfo);
        assert!(!session.is_checked_in());
    }

    #[test]
    fn object_urls_are_dropped_on_restore_but_sent_flag_is_not() {
        let stored = PersistedSession {
            checked_in: false,
            documents: vec!["blob:https://app/1234".into(), "data:image/jpeg;base64,AA".into()],
            documents_sent: true,
        };
        let session = GuestSession::from_persisted(stored);
        assert_eq!(session.documents().len(), 1);
        assert_eq!(session.documents()[0].preview_url, "data:image/jpeg;base64,AA");
        assert!(session.documents_sent());
    }

    #[test]
    fn mirror_writes_only_changed_keys() {
        let mut store = MemoryStore::new();
        let mut mirror = PersistenceMirror::new();
        let mut session = GuestSession::default();

        assert_eq!(mirror.sync(&session.persisted(), &mut store).unwrap(), 3);
        assert_eq!(mirror.sync(&session.persisted(), &mut store).unwrap(), 0);

        session.add_documents(["data:a"]);
        // documents changed, sent flag was already false
        assert_eq!(mirror.sync(&session.persisted(), &mut store).unwrap(), 1);

        session.mark_documents_sent();
        assert_eq!(mirror.sync(&session.persisted(), &mut store).unwrap(), 1);
        assert_eq!(store.get(KEY_DOCUMENTS_SENT).unwrap().as_deref(), Some("true"));
    }

    /// Accepts every key except one.
    struct RejectingStore {
        inner: MemoryStore,
        rejected: &'static str,
    }

    impl KeyValueStore for RejectingStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if key == self.rejected {
                return Err(StorageError::Write {
                    key: key.to_string(),
                    reason: "quota exceeded".into(),
                });
            }
            self.inner.set(key, value)
        }
    }

    #[test]
    fn failed_key_does_not_block_the_others() {
        let mut store = RejectingStore {
            inner: MemoryStore::new(),
            rejected: KEY_DOCUMENTS,
        };
        let mut mirror = PersistenceMirror::new();
        let mut session = GuestSession::default();
        session.choose_check_in(false);
        session.mark_documents_sent();

        let err = mirror.sync(&session.persisted(), &mut store).unwrap_err();
        assert!(matches!(err, StorageError::Write { ref key, .. } if key == KEY_DOCUMENTS));
        assert_eq!(store.get(KEY_CHECKED_IN).unwrap().as_deref(), Some("true"));
        assert_eq!(store.get(KEY_DOCUMENTS_SENT).unwrap().as_deref(), Some("true"));

        // The rejected key is retried; the accepted ones are not rewritten.
        store.rejected = "";
        assert_eq!(mirror.sync(&session.persisted(), &mut store).unwrap(), 1);
        assert_eq!(store.get(KEY_DOCUMENTS).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn empty_selection_still_clears_sent_flag() {
        let mut session = GuestSession::default();
        session.add_documents(["data:a"]);
        session.mark_documents_sent();
        session.add_documents(Vec::<String>::new());
        assert!(!session.documents_sent());
        assert_eq!(session.documents().len(), 1);
    }

    #[test]
    fn unreadable_values_fall_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set(KEY_CHECKED_IN, "not json").unwrap();
        store.set(KEY_DOCUMENTS_SENT, "true").unwrap();

        let stored = PersistedSession::load(&store);
        assert!(!stored.checked_in);
        assert!(stored.documents.is_empty());
        assert!(stored.documents_sent);
    }
}
