//! # Sequential Journal
//!
//! Durable persistence for the four append-only collections: one JSON
//! line per append event, written in operation order. Replaying a journal
//! from the top reconstructs the exact store state — same ids, same
//! indices, same timestamps — because the collections themselves are
//! nothing but their append histories.
//!
//! The journal is the persistence the ledger core offers; a real
//! persistence engine (database, replicated log) remains an external
//! collaborator that can consume the same event stream.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::attestation::SignRecord;
use crate::credential::Credential;
use crate::disclosure::DisclosureRecord;
use crate::store::InMemoryStore;
use crate::user::User;

/// One append event, as journaled. Covers every mutation the ledger can
/// perform; read operations never reach the journal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LedgerEvent {
    /// A user was registered.
    UserAdded {
        /// The full record as stored, id included.
        user: User,
    },
    /// A credential was recorded.
    CredentialAdded {
        /// The full record as stored, position-id included.
        credential: Credential,
    },
    /// A disclosure request or reveal was appended.
    DisclosureAppended {
        /// The appended record.
        record: DisclosureRecord,
    },
    /// A sign or unsign was appended.
    SignAppended {
        /// The appended record.
        record: SignRecord,
    },
}

/// Errors from journal IO and replay.
#[derive(Error, Debug)]
pub enum JournalError {
    /// Filesystem failure.
    #[error("journal io error: {0}")]
    Io(#[from] std::io::Error),

    /// An event failed to serialize on append.
    #[error("journal encode error: {source}")]
    Encode {
        /// The underlying serialization failure.
        source: serde_json::Error,
    },

    /// A journal line failed to parse as an event.
    #[error("malformed journal entry at line {line}: {source}")]
    Malformed {
        /// One-based line number of the offending entry.
        line: usize,
        /// The underlying parse failure.
        source: serde_json::Error,
    },
}

/// Append-only JSON-lines journal writer.
///
/// Every append is flushed before returning, so a journal never trails
/// the committed state by more than the write in progress.
#[derive(Debug)]
pub struct Journal {
    writer: BufWriter<File>,
}

impl Journal {
    /// Open a journal for appending, creating the file if absent.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, JournalError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Append one event as a JSON line and flush.
    pub fn append(&mut self, event: &LedgerEvent) -> Result<(), JournalError> {
        // to_writer cannot emit newlines for these types, so one line per
        // event holds.
        serde_json::to_writer(&mut self.writer, event)
            .map_err(|source| JournalError::Encode { source })?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }

    /// Read every event from a journal file, in order.
    ///
    /// # Errors
    ///
    /// [`JournalError::Malformed`] names the first unparseable line;
    /// replay stops there rather than skipping.
    pub fn replay(path: impl AsRef<Path>) -> Result<Vec<LedgerEvent>, JournalError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut events = Vec::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let event = serde_json::from_str(&line)
                .map_err(|source| JournalError::Malformed { line: idx + 1, source })?;
            events.push(event);
        }
        Ok(events)
    }

    /// Replay a journal file into a store.
    pub fn replay_into(
        path: impl AsRef<Path>,
        store: &mut InMemoryStore,
    ) -> Result<usize, JournalError> {
        let events = Self::replay(path)?;
        let count = events.len();
        for event in events {
            store.apply(event);
        }
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LedgerStore;
    use vouch_core::{Address, CredentialId, RecordIndex, Role, Timestamp, UserId};

    fn addr(s: &str) -> Address {
        Address::new(s).unwrap()
    }

    fn sample_events() -> Vec<LedgerEvent> {
        let owner = addr("0xA");
        let issuer = addr("0xB");
        let verifier = addr("0xC");
        let ts = Timestamp::parse("2026-03-01T09:00:00Z").unwrap();
        vec![
            LedgerEvent::UserAdded {
                user: User {
                    id: UserId(0),
                    address: owner.clone(),
                    name: "John Carter".into(),
                    password_hash: "h0".into(),
                    role: Role::Owner,
                    registered_at: ts,
                },
            },
            LedgerEvent::CredentialAdded {
                credential: Credential {
                    id: CredentialId(0),
                    owner: owner.clone(),
                    issuer: issuer.clone(),
                    title: "SSN".into(),
                    description: "Social Security Number".into(),
                    recorded_at: ts,
                },
            },
            LedgerEvent::DisclosureAppended {
                record: DisclosureRecord {
                    owner: owner.clone(),
                    verifier,
                    credential: CredentialId(0),
                    revealed: false,
                    recorded_at: ts,
                },
            },
            LedgerEvent::SignAppended {
                record: SignRecord {
                    owner,
                    issuer,
                    credential: CredentialId(0),
                    signed: true,
                    recorded_at: ts,
                },
            },
        ]
    }

    #[test]
    fn test_append_then_replay_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.jsonl");

        let events = sample_events();
        let mut journal = Journal::open(&path).unwrap();
        for event in &events {
            journal.append(event).unwrap();
        }
        drop(journal);

        let replayed = Journal::replay(&path).unwrap();
        assert_eq!(replayed, events);
    }

    #[test]
    fn test_replay_into_restores_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.jsonl");

        let mut journal = Journal::open(&path).unwrap();
        for event in &sample_events() {
            journal.append(event).unwrap();
        }
        drop(journal);

        let mut store = InMemoryStore::new();
        let count = Journal::replay_into(&path, &mut store).unwrap();
        assert_eq!(count, 4);
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.role_of(&addr("0xA")), Some(Role::Owner));
        assert!(store.has_credential(&addr("0xA"), CredentialId(0)));
        assert!(!store.disclosure(&addr("0xA"), RecordIndex(0)).unwrap().revealed);
        assert!(store.sign_record(&addr("0xA"), RecordIndex(0)).unwrap().signed);
    }

    #[test]
    fn test_reopen_appends_rather_than_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.jsonl");
        let events = sample_events();

        let mut journal = Journal::open(&path).unwrap();
        journal.append(&events[0]).unwrap();
        drop(journal);

        let mut journal = Journal::open(&path).unwrap();
        journal.append(&events[1]).unwrap();
        drop(journal);

        assert_eq!(Journal::replay(&path).unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_line_reported_with_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.jsonl");

        let mut journal = Journal::open(&path).unwrap();
        journal.append(&sample_events()[0]).unwrap();
        drop(journal);
        std::fs::write(
            &path,
            format!("{}\nnot json\n", std::fs::read_to_string(&path).unwrap().trim_end()),
        )
        .unwrap();

        let err = Journal::replay(&path).unwrap_err();
        assert!(matches!(err, JournalError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_event_serde_is_tagged() {
        let json = serde_json::to_string(&sample_events()[3]).unwrap();
        assert!(json.contains(r#""event":"sign_appended""#));
    }
}
