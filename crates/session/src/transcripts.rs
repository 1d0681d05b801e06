//! Chat transcript persistence for the dashboard's service panels.
//!
//! Each service keeps its own history artifact under the transcript directory,
//! named `<service>_history.json`. Histories are value types; panels load one,
//! mutate it in memory and save it back whole.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::artifact;
use crate::error::Result;

const TARGET: &str = "hangar.transcripts";

/// Identifier of one chat within a service's history.
pub type ChatId = String;

/// One message of a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
	pub role: String,
	pub content: String,
}

/// One named chat and its messages, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTranscript {
	pub name: String,
	#[serde(default)]
	pub messages: Vec<ChatMessage>,
}

/// Every chat recorded for one service, keyed by chat id.
///
/// Serializes as a bare map so the artifact stays hand-inspectable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory {
	chats: BTreeMap<ChatId, ChatTranscript>,
}

impl ChatHistory {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts an empty chat under a fresh id and returns the id.
	pub fn new_chat(&mut self, name: impl Into<String>) -> ChatId {
		let id = Uuid::new_v4().to_string();
		self.chats.insert(
			id.clone(),
			ChatTranscript {
				name: name.into(),
				messages: Vec::new(),
			},
		);
		id
	}

	/// Appends a message to `id`. Returns `false` when the chat is unknown.
	pub fn append(&mut self, id: &str, role: impl Into<String>, content: impl Into<String>) -> bool {
		let Some(chat) = self.chats.get_mut(id) else {
			return false;
		};
		chat.messages.push(ChatMessage {
			role: role.into(),
			content: content.into(),
		});
		true
	}

	pub fn get(&self, id: &str) -> Option<&ChatTranscript> {
		self.chats.get(id)
	}

	/// Drops the chat stored under `id`, if any.
	pub fn remove(&mut self, id: &str) -> Option<ChatTranscript> {
		self.chats.remove(id)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ChatTranscript)> {
		self.chats.iter().map(|(id, chat)| (id.as_str(), chat))
	}

	pub fn len(&self) -> usize {
		self.chats.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chats.is_empty()
	}
}

/// Stores one history artifact per service under a fixed directory.
#[derive(Debug)]
pub struct TranscriptStore {
	dir: PathBuf,
}

impl TranscriptStore {
	pub fn open(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// Loads the history recorded for `service`; empty when none exists or
	/// the artifact is damaged.
	pub fn history(&self, service: &str) -> ChatHistory {
		artifact::read_or_default(&self.artifact_path(service), TARGET)
	}

	/// Persists `history` for `service`, replacing the previous artifact.
	pub fn save(&self, service: &str, history: &ChatHistory) -> Result<()> {
		artifact::write_atomic(&self.artifact_path(service), history)?;
		debug!(target = "hangar.transcripts", service, chats = history.len(), "history saved");
		Ok(())
	}

	fn artifact_path(&self, service: &str) -> PathBuf {
		self.dir.join(format!("{service}_history.json"))
	}
}
