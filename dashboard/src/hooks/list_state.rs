use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

/// Sequence number of a fetch cycle. Later cycles get larger epochs.
pub type Epoch = u64;

/// What happens to already loaded items when a fetch cycle fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Keep showing the items of the last successful cycle.
    #[default]
    KeepStale,
    /// Drop the items so the view falls back to its empty state.
    Clear,
}

/// Hands out strictly increasing epochs for one consumer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpochCounter(Rc<Cell<Epoch>>);

impl EpochCounter {
    pub fn next(&self) -> Epoch {
        let epoch = self.0.get() + 1;
        self.0.set(epoch);
        epoch
    }
}

pub enum ListAction<T> {
    /// A fetch cycle with this epoch went out.
    Started(Epoch),
    /// The cycle settled with these items.
    Loaded(Epoch, Vec<T>),
    /// The cycle settled with a display message.
    Failed(Epoch, String),
    /// Local mutation without a round trip.
    Replace(Vec<T>),
}

/// State of one list consumer.
///
/// Only the most recently started cycle may settle the state: a response
/// from an older cycle that arrives late is dropped, so a quick sequence of
/// dependency changes always ends on the data of the last one.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    latest: Epoch,
    policy: FailurePolicy,
}

impl<T> ListState<T> {
    /// Initial state. Loading, since the mount fetch goes out in the first
    /// commit.
    pub fn new(policy: FailurePolicy) -> Self {
        Self {
            items: Vec::new(),
            is_loading: true,
            error: None,
            latest: 0,
            policy,
        }
    }

    pub fn latest_epoch(&self) -> Epoch {
        self.latest
    }

    /// Apply an action, returning whether anything changed.
    pub fn apply(&mut self, action: ListAction<T>) -> bool {
        match action {
            ListAction::Started(epoch) => {
                self.latest = self.latest.max(epoch);
                self.is_loading = true;
                self.error = None;
                true
            }
            ListAction::Loaded(epoch, items) => {
                if !self.is_current(epoch) {
                    return false;
                }
                self.items = items;
                self.error = None;
                self.is_loading = false;
                true
            }
            ListAction::Failed(epoch, message) => {
                if !self.is_current(epoch) {
                    return false;
                }
                if self.policy == FailurePolicy::Clear {
                    self.items.clear();
                }
                self.error = Some(message);
                self.is_loading = false;
                true
            }
            ListAction::Replace(items) => {
                self.items = items;
                true
            }
        }
    }

    fn is_current(&self, epoch: Epoch) -> bool {
        if epoch != self.latest {
            tracing::debug!(
                "Dropping result of fetch cycle {epoch}, cycle {} is newer",
                self.latest
            );
            return false;
        }
        true
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self::new(FailurePolicy::default())
    }
}

impl<T: Clone> Reducible for ListState<T> {
    type Action = ListAction<T>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(items: &[u32]) -> ListState<u32> {
        let mut state = ListState::default();
        state.apply(ListAction::Started(1));
        state.apply(ListAction::Loaded(1, items.to_vec()));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ListState::<u32>::default();
        assert!(state.items.is_empty());
        assert!(state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.latest_epoch(), 0);
    }

    #[test]
    fn test_success_cycle() {
        let mut state = ListState::default();
        assert!(state.apply(ListAction::Started(1)));
        assert!(state.is_loading);
        assert!(state.apply(ListAction::Loaded(1, vec![1, 2, 3])));
        assert_eq!(state.items, vec![1, 2, 3]);
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_keeps_stale_items() {
        let mut state = loaded(&[4, 5]);
        state.apply(ListAction::Started(2));
        assert_eq!(state.error, None);
        state.apply(ListAction::Failed(2, "boom".to_string()));
        assert_eq!(state.items, vec![4, 5]);
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_failure_clears_items_when_asked() {
        let mut state = ListState::new(FailurePolicy::Clear);
        state.apply(ListAction::Started(1));
        state.apply(ListAction::Loaded(1, vec![4, 5]));
        state.apply(ListAction::Started(2));
        state.apply(ListAction::Failed(2, "boom".to_string()));
        assert!(state.items.is_empty());
        assert_eq!(state.error.as_deref(), Some("boom"));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_first_load_failure_leaves_items_empty() {
        for policy in [FailurePolicy::KeepStale, FailurePolicy::Clear] {
            let mut state = ListState::<u32>::new(policy);
            state.apply(ListAction::Started(1));
            state.apply(ListAction::Failed(1, "boom".to_string()));
            assert!(state.items.is_empty());
            assert!(state.error.is_some());
        }
    }

    #[test]
    fn test_new_cycle_clears_previous_error() {
        let mut state = ListState::<u32>::default();
        state.apply(ListAction::Started(1));
        state.apply(ListAction::Failed(1, "boom".to_string()));
        state.apply(ListAction::Started(2));
        assert_eq!(state.error, None);
        assert!(state.is_loading);
        state.apply(ListAction::Loaded(2, vec![9]));
        assert_eq!(state.items, vec![9]);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_stale_cycle_cannot_overwrite_newer_one() {
        let mut state = ListState::default();
        state.apply(ListAction::Started(1));
        state.apply(ListAction::Started(2));

        // The newer cycle settles first.
        assert!(state.apply(ListAction::Loaded(2, vec![2])));
        assert!(!state.apply(ListAction::Loaded(1, vec![1])));
        assert!(!state.apply(ListAction::Failed(1, "late".to_string())));

        assert_eq!(state.items, vec![2]);
        assert_eq!(state.error, None);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_settlement_does_not_end_loading() {
        let mut state = ListState::default();
        state.apply(ListAction::Started(1));
        state.apply(ListAction::Started(2));
        state.apply(ListAction::Loaded(1, vec![1]));
        assert!(state.is_loading);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_replace_leaves_status_alone() {
        let mut state = loaded(&[1, 2]);
        state.apply(ListAction::Started(2));
        state.apply(ListAction::Replace(vec![2]));
        assert_eq!(state.items, vec![2]);
        assert!(state.is_loading);

        // The in-flight cycle still lands on top of the local edit.
        state.apply(ListAction::Loaded(2, vec![1, 2, 3]));
        assert_eq!(state.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_reduce_returns_same_rc_for_dropped_action() {
        let state = Rc::new(loaded(&[1]));
        let next = state.clone().reduce(ListAction::Loaded(0, vec![7]));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(ListAction::Replace(vec![7]));
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(next.items, vec![7]);
        assert_eq!(state.items, vec![1]);
    }

    #[test]
    fn test_epoch_counter_is_shared_and_increasing() {
        let counter = EpochCounter::default();
        let other = counter.clone();
        assert_eq!(counter.next(), 1);
        assert_eq!(other.next(), 2);
        assert_eq!(counter.next(), 3);
    }
}
