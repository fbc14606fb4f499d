//! In-memory booking session store.
//!
//! One wizard instance per session, keyed by a time-ordered UUID. Nothing is
//! persisted; completing or abandoning a session simply drops its state.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;
use uuid::{Timestamp, Uuid};

use stayfinder_http::error::AppError;

use super::wizard::{BookingDraft, DraftValueError, Field, Progress, WizardState};

/// A live wizard bound to the hotel it is booking.
#[derive(Debug, Clone)]
pub struct BookingSession {
    pub hotel_id: String,
    pub state: WizardState,
}

/// Point-in-time copy of a session handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub hotel_id: String,
    pub state: WizardState,
}

/// Outcome of a Next action on a session.
#[derive(Debug, Clone)]
pub enum NextResult {
    /// Validation failed; the session stays on its current step.
    Stayed(Snapshot),
    /// The session advanced to the next step.
    Advanced(Snapshot),
    /// The final step validated. The session has been removed; the draft is
    /// handed over exactly once to build the confirmation.
    Completed {
        hotel_id: String,
        draft: BookingDraft,
    },
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("booking session '{0}' not found")]
    NotFound(Uuid),
    #[error(transparent)]
    Value(#[from] DraftValueError),
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NotFound(_) => AppError::not_found(err.to_string()),
            SessionError::Value(_) => AppError::bad_request(err.to_string()),
        }
    }
}

/// Concurrent map of live booking sessions.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, BookingSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Open a fresh wizard for the given hotel and return its session id.
    pub fn create(&self, hotel_id: &str) -> Uuid {
        let id = Uuid::new_v7(Timestamp::now(uuid::NoContext));
        let session = BookingSession {
            hotel_id: hotel_id.to_string(),
            state: WizardState::new(),
        };

        self.sessions
            .write()
            .expect("session lock poisoned")
            .insert(id, session);

        tracing::info!(session_id = %id, hotel_id, "booking session created");
        id
    }

    pub fn len(&self) -> usize {
        self.sessions.read().expect("session lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current state of a session.
    pub fn snapshot(&self, id: Uuid) -> Result<Snapshot, SessionError> {
        let sessions = self.sessions.read().expect("session lock poisoned");
        let session = sessions.get(&id).ok_or(SessionError::NotFound(id))?;
        Ok(Snapshot {
            hotel_id: session.hotel_id.clone(),
            state: session.state.clone(),
        })
    }

    /// Write a field value into a session's draft.
    pub fn update_field(
        &self,
        id: Uuid,
        field: Field,
        value: &str,
    ) -> Result<Snapshot, SessionError> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;

        session.state.update_field(field, value)?;
        Ok(Snapshot {
            hotel_id: session.hotel_id.clone(),
            state: session.state.clone(),
        })
    }

    /// Run the current step's gate. On completion the session is removed and
    /// its draft returned; the store never signals completion twice.
    pub fn go_next(&self, id: Uuid) -> Result<NextResult, SessionError> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;

        match session.state.go_next() {
            Progress::Stayed => Ok(NextResult::Stayed(Snapshot {
                hotel_id: session.hotel_id.clone(),
                state: session.state.clone(),
            })),
            Progress::Advanced(_) => Ok(NextResult::Advanced(Snapshot {
                hotel_id: session.hotel_id.clone(),
                state: session.state.clone(),
            })),
            Progress::Completed => {
                let session = sessions.remove(&id).expect("session vanished under lock");
                tracing::info!(session_id = %id, hotel_id = session.hotel_id, "booking completed");
                Ok(NextResult::Completed {
                    hotel_id: session.hotel_id,
                    draft: session.state.draft().clone(),
                })
            }
        }
    }

    /// Drop a session without completing it: the navigate-away abort path.
    /// The draft is discarded; there is nothing to clean up beyond the entry.
    pub fn remove(&self, id: Uuid) -> Result<(), SessionError> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        sessions.remove(&id).ok_or(SessionError::NotFound(id))?;

        tracing::info!(session_id = %id, "booking session abandoned");
        Ok(())
    }

    /// Step a session backward; a no-op on the first step.
    pub fn go_back(&self, id: Uuid) -> Result<Snapshot, SessionError> {
        let mut sessions = self.sessions.write().expect("session lock poisoned");
        let session = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;

        session.state.go_back();
        Ok(Snapshot {
            hotel_id: session.hotel_id.clone(),
            state: session.state.clone(),
        })
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::booking::wizard::Step;

    fn complete_all_steps(store: &SessionStore, id: Uuid) {
        store.update_field(id, Field::CheckIn, "2024-03-01").unwrap();
        store.update_field(id, Field::CheckOut, "2024-03-04").unwrap();
        store.go_next(id).unwrap();
        store.update_field(id, Field::FirstName, "John").unwrap();
        store.update_field(id, Field::LastName, "Doe").unwrap();
        store
            .update_field(id, Field::Email, "john.doe@example.com")
            .unwrap();
        store.update_field(id, Field::Phone, "+1 555 0100").unwrap();
        store.go_next(id).unwrap();
        store.update_field(id, Field::CardNumber, "4242").unwrap();
        store.update_field(id, Field::ExpiryDate, "12/27").unwrap();
        store.update_field(id, Field::Cvv, "123").unwrap();
        store
            .update_field(id, Field::CardholderName, "John Doe")
            .unwrap();
    }

    #[test]
    fn create_and_snapshot() {
        let store = SessionStore::new();
        let id = store.create("1");

        let snapshot = store.snapshot(id).unwrap();
        assert_eq!(snapshot.hotel_id, "1");
        assert_eq!(snapshot.state.step(), Step::Dates);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_session_is_reported() {
        let store = SessionStore::new();
        let missing = Uuid::new_v4();

        assert!(matches!(
            store.snapshot(missing),
            Err(SessionError::NotFound(_))
        ));
        assert!(matches!(
            store.go_next(missing),
            Err(SessionError::NotFound(_))
        ));
    }

    #[test]
    fn completion_discards_the_session_and_yields_the_real_draft() {
        let store = SessionStore::new();
        let id = store.create("2");
        complete_all_steps(&store, id);

        let result = store.go_next(id).unwrap();
        match result {
            NextResult::Completed { hotel_id, draft } => {
                assert_eq!(hotel_id, "2");
                assert_eq!(draft.first_name, "John");
                assert_eq!(draft.email, "john.doe@example.com");
            }
            other => panic!("expected completion, got {:?}", other),
        }

        // Exactly one completion signal: the session is gone afterwards.
        assert!(store.is_empty());
        assert!(matches!(store.go_next(id), Err(SessionError::NotFound(_))));
    }

    #[test]
    fn abandoned_session_is_discarded() {
        let store = SessionStore::new();
        let id = store.create("1");
        store
            .update_field(id, Field::CheckIn, "2024-03-01")
            .unwrap();

        store.remove(id).unwrap();

        assert!(store.is_empty());
        assert!(matches!(
            store.snapshot(id),
            Err(SessionError::NotFound(_))
        ));
        // A second abandon reports the session as already gone.
        assert!(matches!(store.remove(id), Err(SessionError::NotFound(_))));
    }

    #[test]
    fn failed_gate_keeps_the_session_alive() {
        let store = SessionStore::new();
        let id = store.create("3");

        match store.go_next(id).unwrap() {
            NextResult::Stayed(snapshot) => {
                assert_eq!(snapshot.state.step(), Step::Dates);
                assert!(!snapshot.state.field_errors().is_empty());
            }
            other => panic!("expected stay, got {:?}", other),
        }
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sessions_are_independent() {
        let store = SessionStore::new();
        let first = store.create("1");
        let second = store.create("2");

        store
            .update_field(first, Field::FirstName, "Ada")
            .unwrap();

        let snapshot = store.snapshot(second).unwrap();
        assert!(snapshot.state.draft().first_name.is_empty());
        assert_ne!(first, second);
    }
}
