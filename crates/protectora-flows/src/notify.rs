//! Change notification for controller observers.
//!
//! The presentation layer subscribes here and re-renders from the
//! [`FormSnapshot`] it receives; nothing else crosses the boundary.
//! Receivers run synchronously on the thread that caused the change.

use crate::controller::FormSnapshot;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

type ReceiverFn = Arc<dyn Fn(&FormSnapshot) + Send + Sync>;

/// Handle returned by [`ChangeNotifier::subscribe`], used to disconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

struct Receiver {
	id: u64,
	callback: ReceiverFn,
}

/// Dispatches snapshots to connected receivers.
///
/// # Examples
///
/// ```
/// use protectora_flows::ChangeNotifier;
///
/// let notifier = ChangeNotifier::new();
/// let id = notifier.subscribe(|snapshot| {
///     println!("form is now {:?}", snapshot.state);
/// });
/// assert_eq!(notifier.receiver_count(), 1);
///
/// assert!(notifier.disconnect(id));
/// assert_eq!(notifier.receiver_count(), 0);
/// ```
#[derive(Clone, Default)]
pub struct ChangeNotifier {
	receivers: Arc<RwLock<Vec<Receiver>>>,
	next_id: Arc<AtomicU64>,
}

impl ChangeNotifier {
	pub fn new() -> Self {
		Self::default()
	}

	/// Connect a receiver; it is called after every controller change.
	pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
	where
		F: Fn(&FormSnapshot) + Send + Sync + 'static,
	{
		let id = self.next_id.fetch_add(1, Ordering::Relaxed);
		self.receivers.write().push(Receiver {
			id,
			callback: Arc::new(callback),
		});
		SubscriptionId(id)
	}

	/// Disconnect a receiver. Returns `false` if it was already gone.
	pub fn disconnect(&self, id: SubscriptionId) -> bool {
		let mut receivers = self.receivers.write();
		let before = receivers.len();
		receivers.retain(|r| r.id != id.0);
		receivers.len() != before
	}

	pub fn receiver_count(&self) -> usize {
		self.receivers.read().len()
	}

	/// Deliver one snapshot to every connected receiver.
	pub(crate) fn emit(&self, snapshot: &FormSnapshot) {
		// Clone out so receivers can subscribe/disconnect reentrantly
		let receivers: Vec<ReceiverFn> = self
			.receivers
			.read()
			.iter()
			.map(|r| Arc::clone(&r.callback))
			.collect();
		for callback in receivers {
			callback(snapshot);
		}
	}
}
