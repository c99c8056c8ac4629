//! Per-sequence change notifications.

use std::fmt;

use super::Sequence;

/// Change reported to the observers of a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceEvent {
	/// `animating` switched from `false` to `true`
	Started,
	/// `animating` switched from `true` to `false`
	Stopped,
	/// `reverse` changed
	PlayDirectionChanged,
}

/// Handle returned by [`Sequence::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

/// Callback invoked synchronously from the setter that caused the change.
///
/// The sequence is passed by shared reference, already reflecting the new state.
pub type SequenceObserver = Box<dyn FnMut(SequenceEvent, &Sequence) + Send>;

/// Registered observers of one sequence.
#[derive(Default)]
pub(crate) struct Observers {
	next_id: u64,
	entries: Vec<(ObserverId, SequenceObserver)>,
}

impl Observers {
	pub(crate) fn subscribe(&mut self, observer: SequenceObserver) -> ObserverId {
		let id = ObserverId(self.next_id);
		self.next_id += 1;
		self.entries.push((id, observer));
		id
	}

	pub(crate) fn unsubscribe(&mut self, id: ObserverId) -> bool {
		let before = self.entries.len();
		self.entries.retain(|(entry_id, _)| *entry_id != id);
		self.entries.len() != before
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Calls every observer in subscription order.
	pub(crate) fn dispatch(&mut self, event: SequenceEvent, sequence: &Sequence) {
		for (_, observer) in &mut self.entries {
			observer(event, sequence);
		}
	}
}

impl fmt::Debug for Observers {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Observers").field("count", &self.entries.len()).finish()
	}
}
