use payloads::ListResponse;
use std::cell::Cell;
use std::fmt::Display;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use yew::prelude::*;

use super::list_state::{
    EpochCounter, FailurePolicy, ListAction, ListState,
};

/// Shown when a list could not be loaded and the hook has no more specific
/// message.
pub const DEFAULT_ERROR_MESSAGE: &str =
    "Erreur lors du chargement des données";

/// How a list hook reports failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchOptions {
    /// Fixed message surfaced to the view when a cycle fails. The
    /// underlying cause only goes to the logs.
    pub error_message: &'static str,
    pub on_failure: FailurePolicy,
}

impl FetchOptions {
    pub fn new(error_message: &'static str) -> Self {
        Self {
            error_message,
            on_failure: FailurePolicy::default(),
        }
    }

    pub fn clear_on_failure(mut self) -> Self {
        self.on_failure = FailurePolicy::Clear;
        self
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self::new(DEFAULT_ERROR_MESSAGE)
    }
}

/// Generic list hook return type
pub struct ListHookReturn<T> {
    pub data: Vec<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
    pub set_data: Callback<Vec<T>>,
}

impl<T> ListHookReturn<T> {
    /// Render based on list state with contextual loading/error messages.
    ///
    /// - Empty + loading: "Chargement des {context}..."
    /// - Empty + error: the error message
    /// - Empty otherwise: an empty-state line
    /// - Has items: `render_fn(items, is_loading, error)`, where `error`
    ///   comes from a failed refetch and the items are those of the last
    ///   successful one.
    pub fn render<F>(&self, context: &str, render_fn: F) -> Html
    where
        F: Fn(&[T], bool, Option<&String>) -> Html,
    {
        if !self.data.is_empty() {
            return render_fn(&self.data, self.is_loading, self.error.as_ref());
        }

        if self.is_loading {
            html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Chargement des {}...", context)}
                    </p>
                </div>
            }
        } else if let Some(error) = &self.error {
            html! {
                <div class="p-4 rounded-md bg-red-50 \
                           dark:bg-red-900/20 border \
                           border-red-200 dark:border-red-800">
                    <p class="text-sm text-red-700 dark:text-red-400">
                        {error}
                    </p>
                </div>
            }
        } else {
            html! {
                <div class="text-center py-12">
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {format!("Aucun résultat pour les {}", context)}
                    </p>
                </div>
            }
        }
    }
}

/// Await one retrieval and normalize its outcome.
///
/// Both accepted body shapes become a plain list and an unrecognized body
/// becomes an empty one. A failure is logged with its cause and reported as
/// `error_message` only.
pub async fn settle<T, E, Fut>(
    request: Fut,
    error_message: &str,
) -> Result<Vec<T>, String>
where
    Fut: Future<Output = Result<ListResponse<T>, E>>,
    E: Display,
{
    match request.await {
        Ok(response) => {
            if !response.is_recognized() {
                tracing::warn!(
                    "List response had neither a bare array nor a data \
                     array, treating it as empty"
                );
            }
            Ok(response.into_items())
        }
        Err(e) => {
            tracing::error!("List fetch failed: {e}");
            Err(error_message.to_string())
        }
    }
}

/// Generic list fetch hook.
///
/// Fetches on mount and whenever `deps` changes, passing the current deps to
/// `fetch_fn`. Every cycle is tagged with a fresh epoch and only the most
/// recently started one may settle the state, so overlapping cycles cannot
/// leave stale data behind. Results arriving after the consumer unmounted
/// are dropped.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_vehicles() -> ListHookReturn<responses::Vehicle> {
///     use_list_fetch((), FetchOptions::default(), |_| async move {
///         get_api_client().list_vehicles().await
///     })
/// }
/// ```
#[hook]
pub fn use_list_fetch<T, D, F, Fut, E>(
    deps: D,
    options: FetchOptions,
    fetch_fn: F,
) -> ListHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<ListResponse<T>, E>> + 'static,
    E: Display + 'static,
{
    let policy = options.on_failure;
    let state = use_reducer(move || ListState::<T>::new(policy));
    let epochs = use_state(EpochCounter::default);
    let mounted = use_state(|| Rc::new(Cell::new(true)));

    {
        let mounted = (*mounted).clone();
        use_effect_with((), move |_| move || mounted.set(false));
    }

    let refetch = {
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action: ListAction<T>| state.dispatch(action))
        };
        let cycles = FetchCycles::new(
            fetch_fn,
            (*epochs).clone(),
            (*mounted).clone(),
            options.error_message,
            dispatch,
        );

        use_callback(deps.clone(), move |_, deps| {
            yew::platform::spawn_local(cycles.start(deps.clone()));
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        use_effect_with(deps, move |_| {
            refetch.emit(());
        });
    }

    let set_data = {
        let state = state.clone();
        Callback::from(move |items: Vec<T>| {
            state.dispatch(ListAction::Replace(items));
        })
    };

    ListHookReturn {
        data: state.items.clone(),
        is_loading: state.is_loading,
        error: state.error.clone(),
        refetch,
        set_data,
    }
}

/// Settlement of one started cycle, to be run on the local executor.
pub type CycleTask = Pin<Box<dyn Future<Output = ()>>>;

/// Starts fetch cycles for one consumer.
///
/// `start` takes the next epoch, marks the state loading and issues the
/// request right away. The returned task awaits it and dispatches the
/// outcome, unless `alive` was cleared in the meantime.
pub struct FetchCycles<T, F> {
    fetch_fn: Rc<F>,
    epochs: EpochCounter,
    alive: Rc<Cell<bool>>,
    error_message: &'static str,
    dispatch: Callback<ListAction<T>>,
}

impl<T: 'static, F> FetchCycles<T, F> {
    pub fn new(
        fetch_fn: F,
        epochs: EpochCounter,
        alive: Rc<Cell<bool>>,
        error_message: &'static str,
        dispatch: Callback<ListAction<T>>,
    ) -> Self {
        Self {
            fetch_fn: Rc::new(fetch_fn),
            epochs,
            alive,
            error_message,
            dispatch,
        }
    }

    pub fn start<D, Fut, E>(&self, deps: D) -> CycleTask
    where
        F: Fn(D) -> Fut,
        Fut: Future<Output = Result<ListResponse<T>, E>> + 'static,
        E: Display + 'static,
    {
        let epoch = self.epochs.next();
        self.dispatch.emit(ListAction::Started(epoch));

        let request = (self.fetch_fn)(deps);
        let alive = self.alive.clone();
        let dispatch = self.dispatch.clone();
        let error_message = self.error_message;

        Box::pin(async move {
            let outcome = settle(request, error_message).await;

            if !alive.get() {
                tracing::debug!(
                    "Consumer unmounted, dropping fetch cycle {epoch}"
                );
                return;
            }

            dispatch.emit(match outcome {
                Ok(items) => ListAction::Loaded(epoch, items),
                Err(message) => ListAction::Failed(epoch, message),
            });
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use futures::future::{Ready, ready};
    use payloads::{CenterType, ClientError};
    use std::cell::RefCell;

    const MESSAGE: &str = "Erreur lors du chargement des centres";

    fn ok(
        response: ListResponse<u32>,
    ) -> impl Future<Output = Result<ListResponse<u32>, String>> {
        ready(Ok(response))
    }

    #[test]
    fn test_bare_list_is_returned_as_is() {
        let items =
            block_on(settle(ok(ListResponse::Bare(vec![3, 1, 2])), MESSAGE));
        assert_eq!(items, Ok(vec![3, 1, 2]));
    }

    #[test]
    fn test_envelope_is_unwrapped() {
        let items =
            block_on(settle(ok(ListResponse::Envelope(vec![5])), MESSAGE));
        assert_eq!(items, Ok(vec![5]));
    }

    #[test]
    fn test_unrecognized_body_reads_as_empty() {
        let items = block_on(settle(ok(ListResponse::Unrecognized), MESSAGE));
        assert_eq!(items, Ok(vec![]));
    }

    #[test]
    fn test_failure_reports_fixed_message_only() {
        let request = ready(Err::<ListResponse<u32>, _>(ClientError::Decode(
            serde_json::from_str::<serde_json::Value>("{").unwrap_err(),
        )));
        let outcome = block_on(settle(request, MESSAGE));
        assert_eq!(outcome, Err(MESSAGE.to_string()));
    }

    #[test]
    fn test_repeated_cycles_are_idempotent() {
        let fetch = || ok(ListResponse::Envelope(vec![1, 2]));
        let first = block_on(settle(fetch(), MESSAGE));
        let second = block_on(settle(fetch(), MESSAGE));
        assert_eq!(first, second);
    }

    #[test]
    fn test_cycle_feeds_list_state() {
        let epochs = EpochCounter::default();
        let mut state = ListState::default();

        let epoch = epochs.next();
        state.apply(ListAction::Started(epoch));
        match block_on(settle(ok(ListResponse::Bare(vec![1])), MESSAGE)) {
            Ok(items) => state.apply(ListAction::Loaded(epoch, items)),
            Err(message) => state.apply(ListAction::Failed(epoch, message)),
        };
        assert_eq!(state.items, vec![1]);

        let epoch = epochs.next();
        state.apply(ListAction::Started(epoch));
        let request = ready(Err::<ListResponse<u32>, _>("timeout"));
        match block_on(settle(request, MESSAGE)) {
            Ok(items) => state.apply(ListAction::Loaded(epoch, items)),
            Err(message) => state.apply(ListAction::Failed(epoch, message)),
        };
        assert_eq!(state.items, vec![1]);
        assert_eq!(state.error.as_deref(), Some(MESSAGE));
        assert!(!state.is_loading);
    }

    type CenterFetch =
        Ready<Result<ListResponse<String>, String>>;

    /// Cycles over centers whose fetch records its argument and answers with
    /// the endpoint it would have hit.
    fn recording_cycles(
        calls: Rc<RefCell<Vec<CenterType>>>,
        state: Rc<RefCell<ListState<String>>>,
        alive: Rc<Cell<bool>>,
    ) -> FetchCycles<String, impl Fn(CenterType) -> CenterFetch> {
        let dispatch = Callback::from(move |action: ListAction<String>| {
            state.borrow_mut().apply(action);
        });
        let fetch = move |center_type: CenterType| {
            calls.borrow_mut().push(center_type);
            ready(Ok::<_, String>(ListResponse::Bare(vec![
                center_type.endpoint().to_string(),
            ])))
        };
        FetchCycles::new(
            fetch,
            EpochCounter::default(),
            alive,
            MESSAGE,
            dispatch,
        )
    }

    #[test]
    fn test_each_deps_value_fetches_its_own_endpoint() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let state = Rc::new(RefCell::new(ListState::default()));
        let cycles = recording_cycles(
            calls.clone(),
            state.clone(),
            Rc::new(Cell::new(true)),
        );

        block_on(cycles.start(CenterType::All));
        assert_eq!(state.borrow().items, vec!["centers".to_string()]);

        block_on(cycles.start(CenterType::Exam));
        assert_eq!(*calls.borrow(), vec![CenterType::All, CenterType::Exam]);
        assert_eq!(state.borrow().items, vec!["centers/exam".to_string()]);
        assert_eq!(state.borrow().latest_epoch(), 2);
        assert!(!state.borrow().is_loading);
    }

    #[test]
    fn test_refetch_starts_a_new_epoch_with_same_deps() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let state = Rc::new(RefCell::new(ListState::default()));
        let cycles = recording_cycles(
            calls.clone(),
            state.clone(),
            Rc::new(Cell::new(true)),
        );

        block_on(cycles.start(CenterType::Formation));
        let first = state.borrow().latest_epoch();
        block_on(cycles.start(CenterType::Formation));

        assert_eq!(state.borrow().latest_epoch(), first + 1);
        assert_eq!(
            *calls.borrow(),
            vec![CenterType::Formation, CenterType::Formation]
        );
        assert_eq!(state.borrow().items, vec!["centers/formation".to_string()]);
    }

    #[test]
    fn test_out_of_order_settlement_keeps_latest_deps() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let state = Rc::new(RefCell::new(ListState::default()));
        let cycles = recording_cycles(
            calls.clone(),
            state.clone(),
            Rc::new(Cell::new(true)),
        );

        let all = cycles.start(CenterType::All);
        let exam = cycles.start(CenterType::Exam);
        block_on(exam);
        block_on(all);

        assert_eq!(state.borrow().items, vec!["centers/exam".to_string()]);
        assert!(!state.borrow().is_loading);
        assert_eq!(calls.borrow().len(), 2);
    }

    #[test]
    fn test_nothing_settles_after_unmount() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let state = Rc::new(RefCell::new(ListState::default()));
        let alive = Rc::new(Cell::new(true));
        let cycles =
            recording_cycles(calls.clone(), state.clone(), alive.clone());

        let task = cycles.start(CenterType::All);
        // The request is issued when the cycle starts, not when it is polled
        assert_eq!(*calls.borrow(), vec![CenterType::All]);
        assert!(state.borrow().is_loading);

        alive.set(false);
        block_on(task);

        assert!(state.borrow().items.is_empty());
        assert!(state.borrow().error.is_none());
        assert!(state.borrow().is_loading);
    }

    #[test]
    fn test_options() {
        let options = FetchOptions::default();
        assert_eq!(options.error_message, DEFAULT_ERROR_MESSAGE);
        assert_eq!(options.on_failure, FailurePolicy::KeepStale);
        let options = FetchOptions::new(MESSAGE).clear_on_failure();
        assert_eq!(options.error_message, MESSAGE);
        assert_eq!(options.on_failure, FailurePolicy::Clear);
    }
}
