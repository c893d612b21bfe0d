//! Item Collection Controller
//!
//! Mediates every mutation: marks the operation in flight, awaits the remote
//! call, then reconciles the session with the outcome. Session state is
//! reached only through a [`SessionHandle`] and is never borrowed across an
//! `.await`.

use std::cell::RefCell;

use crate::client::ItemApi;
use crate::models::{ItemPatch, NewItem};
use crate::notice::Notice;
use crate::session::{Operation, SessionState};

/// Access to the session state owned by the caller
pub trait SessionHandle {
    fn with_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R;
}

impl SessionHandle for RefCell<SessionState> {
    fn with_session<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

/// Controller over a remote store client.
///
/// Each action returns the notice its outcome produced, or `None` when the
/// action was not issued (its own operation already in flight, nothing
/// selected for edit, blank search id).
#[derive(Debug, Clone)]
pub struct ItemController<A> {
    api: A,
}

impl<A: ItemApi> ItemController<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn create(&self, session: &impl SessionHandle, item: NewItem) -> Option<Notice> {
        if !session.with_session(|s| s.pending.begin(Operation::Create)) {
            log::debug!("create already in flight");
            return None;
        }

        let result = self.api.create(&item).await;

        Some(session.with_session(|s| {
            s.pending.finish(&Operation::Create);
            s.apply_created(result)
        }))
    }

    /// Update the item currently selected for edit
    pub async fn update(&self, session: &impl SessionHandle, patch: ItemPatch) -> Option<Notice> {
        let id = session.with_session(|s| {
            let id = s.editing.as_ref()?.id.clone();
            s.pending.begin(Operation::Update).then_some(id)
        })?;

        let result = self.api.update(&id, &patch).await;

        Some(session.with_session(|s| {
            s.pending.finish(&Operation::Update);
            s.apply_updated(result)
        }))
    }

    /// Delete by id. The caller has already obtained the user's confirmation.
    pub async fn delete(&self, session: &impl SessionHandle, id: &str) -> Option<Notice> {
        let op = Operation::Delete(id.to_string());
        if !session.with_session(|s| s.pending.begin(op.clone())) {
            log::debug!("delete of {} already in flight", id);
            return None;
        }

        let result = self.api.delete(id).await;

        Some(session.with_session(|s| {
            s.pending.finish(&op);
            s.apply_deleted(id, result)
        }))
    }

    /// Fetch by id and merge into the collection (first seen wins)
    pub async fn search(&self, session: &impl SessionHandle, id: &str) -> Option<Notice> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        if !session.with_session(|s| s.pending.begin(Operation::Search)) {
            return None;
        }

        let result = self.api.fetch_by_id(id).await;

        Some(session.with_session(|s| {
            s.pending.finish(&Operation::Search);
            s.apply_fetched(result)
        }))
    }
}
