//=========================================================================
// Event Collector
//=========================================================================
//
// Collaborator event intake with bounded draining.
//
// Architecture:
//   Sender<CollaboratorEvent> (cloned to collaborators)
//        ↓ bounded channel
//   Receiver → collect() → batch → take_batch() → session dispatch
//
// At most `max_per_pump` events are drained per call so one pump never
// starves the caller; the rest waits for the next pump.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::CollaboratorEvent;

//=== EventCollector ======================================================

/// Owns the collaborator channel and drains it in bounded batches.
pub(crate) struct EventCollector {
    sender: Sender<CollaboratorEvent>,
    receiver: Receiver<CollaboratorEvent>,
    batch: Vec<CollaboratorEvent>,
    max_per_pump: usize,
}

impl EventCollector {
    /// Creates the channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0` or `max_per_pump == 0`.
    pub(crate) fn new(capacity: usize, max_per_pump: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        assert!(max_per_pump > 0, "Pump limit must be positive");

        let (sender, receiver) = bounded(capacity);
        Self {
            sender,
            receiver,
            batch: Vec::with_capacity(max_per_pump.min(16)),
            max_per_pump,
        }
    }

    /// Returns a sender for a collaborator.
    pub(crate) fn sender(&self) -> Sender<CollaboratorEvent> {
        self.sender.clone()
    }

    /// Drains pending events into the batch. Returns how many were taken.
    pub(crate) fn collect(&mut self) -> usize {
        self.batch.clear();

        while self.batch.len() < self.max_per_pump {
            match self.receiver.try_recv() {
                Ok(event) => self.batch.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        if self.batch.len() >= self.max_per_pump && !self.receiver.is_empty() {
            warn!(
                "Collaborator backlog: drained {} events, {} still queued",
                self.batch.len(),
                self.receiver.len()
            );
        }

        self.batch.len()
    }

    /// Takes the collected batch, leaving an empty one.
    pub(crate) fn take_batch(&mut self) -> Vec<CollaboratorEvent> {
        std::mem::take(&mut self.batch)
    }

    /// Events waiting in the channel.
    pub(crate) fn pending(&self) -> usize {
        self.receiver.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::bridge::PurchaseOutcome;

    #[test]
    fn collect_handles_empty_channel() {
        let mut collector = EventCollector::new(8, 4);

        assert_eq!(collector.collect(), 0);
        assert!(collector.take_batch().is_empty());
    }

    #[test]
    fn collect_preserves_arrival_order() {
        let mut collector = EventCollector::new(8, 4);
        let tx = collector.sender();

        tx.send(CollaboratorEvent::ItemPlaced).unwrap();
        tx.send(CollaboratorEvent::Purchase(PurchaseOutcome::Succeeded {
            placeable_count: 1,
        }))
        .unwrap();

        assert_eq!(collector.collect(), 2);
        let batch = collector.take_batch();
        assert_eq!(batch[0], CollaboratorEvent::ItemPlaced);
        assert!(matches!(batch[1], CollaboratorEvent::Purchase(_)));
    }

    #[test]
    fn collect_is_bounded_per_call() {
        let mut collector = EventCollector::new(16, 3);
        let tx = collector.sender();
        for _ in 0..5 {
            tx.send(CollaboratorEvent::ItemPlaced).unwrap();
        }

        assert_eq!(collector.collect(), 3);
        assert_eq!(collector.pending(), 2);
        assert_eq!(collector.collect(), 2);
        assert_eq!(collector.pending(), 0);
    }

    #[test]
    fn collect_clears_previous_batch() {
        let mut collector = EventCollector::new(8, 4);
        let tx = collector.sender();

        tx.send(CollaboratorEvent::ItemPlaced).unwrap();
        collector.collect();

        assert_eq!(collector.collect(), 0);
        assert!(collector.take_batch().is_empty());
    }

    #[test]
    fn sender_is_bounded() {
        let collector = EventCollector::new(1, 1);
        let tx = collector.sender();

        assert!(tx.try_send(CollaboratorEvent::ItemPlaced).is_ok());
        assert!(tx.try_send(CollaboratorEvent::ItemPlaced).is_err());
    }
}
