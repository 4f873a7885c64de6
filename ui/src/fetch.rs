use std::future::Future;

use api::{RankingSource, TargetDate};

use crate::store::StoreHandle;

/// Starts a ranking fetch for `target`.
///
/// The store is marked loading before this returns; the returned future
/// performs the request and settles the store, resolving to `false` when the
/// outcome was discarded because a newer fetch had been issued meanwhile.
pub fn fetch_ranking<S, H>(
    source: S,
    target: TargetDate,
    mut store: H,
) -> impl Future<Output = bool>
where
    S: RankingSource,
    H: StoreHandle,
{
    let ticket = store.update(|state| state.begin(target.clone()));

    async move {
        let outcome = source.daily_ranking(&target).await;
        if let Err(err) = &outcome {
            tracing::warn!(target_dt = %target, error = %err, "ranking fetch failed");
        }
        store.update(|state| state.settle(ticket, outcome))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::{HashMap, VecDeque};
    use std::rc::Rc;

    use api::{FetchError, RankingEntry, RankingResult};
    use futures::channel::oneshot;
    use futures::executor::block_on;

    use super::*;
    use crate::store::{Phase, RankingStore};
    use crate::view_model::{derive_series, table_rows};

    /// Answers each call with the next scripted outcome.
    struct ScriptedSource {
        outcomes: RefCell<VecDeque<Result<RankingResult, FetchError>>>,
        observed_loading: Cell<Option<bool>>,
        store: Rc<RefCell<RankingStore>>,
    }

    impl ScriptedSource {
        fn new(store: &Rc<RefCell<RankingStore>>) -> Self {
            Self {
                outcomes: RefCell::new(VecDeque::new()),
                observed_loading: Cell::new(None),
                store: store.clone(),
            }
        }

        fn push(&self, outcome: Result<RankingResult, FetchError>) {
            self.outcomes.borrow_mut().push_back(outcome);
        }
    }

    impl RankingSource for ScriptedSource {
        async fn daily_ranking(&self, _target: &TargetDate) -> Result<RankingResult, FetchError> {
            self.observed_loading
                .set(Some(self.store.borrow().is_loading()));
            self.outcomes
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(FetchError::Network("no scripted outcome".into())))
        }
    }

    type Gate = oneshot::Receiver<Result<RankingResult, FetchError>>;

    /// Resolves a date's request only when its sender fires, so tests control
    /// completion order independently of issue order.
    struct GatedSource {
        gates: RefCell<HashMap<TargetDate, Gate>>,
    }

    impl RankingSource for GatedSource {
        async fn daily_ranking(&self, target: &TargetDate) -> Result<RankingResult, FetchError> {
            let gate = self.gates.borrow_mut().remove(target);
            match gate {
                Some(rx) => rx
                    .await
                    .unwrap_or_else(|_| Err(FetchError::Network("cancelled".into()))),
                None => Err(FetchError::Network("no gate".into())),
            }
        }
    }

    fn date(raw: &str) -> TargetDate {
        TargetDate::from_input(raw).unwrap()
    }

    fn sample(n: usize) -> RankingResult {
        RankingResult {
            entries: (0..n)
                .map(|idx| RankingEntry {
                    rank: idx as u32 + 1,
                    movie_title: format!("Movie {}", idx + 1),
                    admission_count: 12345 * (n - idx) as u64,
                    open_date: "2024-02-22".into(),
                })
                .collect(),
            show_range: None,
        }
    }

    fn shared_store() -> Rc<RefCell<RankingStore>> {
        Rc::new(RefCell::new(RankingStore::new(date("2024-03-14"))))
    }

    #[test]
    fn loading_is_set_before_the_request_runs() {
        let store = shared_store();
        let source = ScriptedSource::new(&store);
        source.push(Ok(sample(3)));

        let pending = fetch_ranking(&source, date("2024-03-15"), store.clone());
        assert!(store.borrow().is_loading());
        assert_eq!(store.borrow().target_date().as_str(), "20240315");

        assert!(block_on(pending));
        assert_eq!(source.observed_loading.get(), Some(true));
        assert!(!store.borrow().is_loading());
    }

    #[test]
    fn success_feeds_table_and_chart_in_order() {
        let store = shared_store();
        let source = ScriptedSource::new(&store);
        source.push(Ok(sample(10)));

        block_on(fetch_ranking(&source, date("2024-03-15"), store.clone()));

        let state = store.borrow();
        let data = state.data().map(|d| d.as_ref());
        let rows = table_rows(data);
        let series = derive_series(data);
        assert_eq!(rows.len(), 10);
        assert_eq!(series.len(), 10);
        for (idx, row) in rows.iter().enumerate() {
            assert_eq!(row.rank, idx as u32 + 1);
            assert_eq!(series.labels[idx], row.title);
        }
    }

    #[test]
    fn failure_leaves_nothing_to_render_and_stops_loading() {
        let store = shared_store();
        let source = ScriptedSource::new(&store);
        source.push(Err(FetchError::HttpStatus {
            status: 503,
            body: "busy".into(),
        }));

        block_on(fetch_ranking(&source, date("2024-03-15"), store.clone()));

        let state = store.borrow();
        assert_eq!(state.phase(), Phase::Failed);
        assert!(!state.is_loading());
        assert!(state.error().unwrap().to_string().contains("503"));
        assert!(table_rows(state.data().map(|d| d.as_ref())).is_empty());
    }

    #[test]
    fn same_date_twice_yields_identical_results() {
        let store = shared_store();
        let source = ScriptedSource::new(&store);
        source.push(Ok(sample(5)));
        source.push(Ok(sample(5)));

        block_on(fetch_ranking(&source, date("2024-03-15"), store.clone()));
        let first = store.borrow().data().cloned().unwrap();
        block_on(fetch_ranking(&source, date("2024-03-15"), store.clone()));
        let second = store.borrow().data().cloned().unwrap();

        assert_eq!(*first, *second);
        assert_eq!(derive_series(Some(first.as_ref())), derive_series(Some(second.as_ref())));
    }

    #[test]
    fn empty_ranking_is_not_an_error() {
        let store = shared_store();
        let source = ScriptedSource::new(&store);
        source.push(Ok(sample(0)));

        block_on(fetch_ranking(&source, date("2024-03-15"), store.clone()));

        let state = store.borrow();
        assert_eq!(state.phase(), Phase::Ready);
        let data = state.data().map(|d| d.as_ref());
        assert!(table_rows(data).is_empty());
        assert!(derive_series(data).is_empty());
    }

    #[test]
    fn slower_earlier_request_cannot_overwrite_newer_one() {
        let store = shared_store();
        let (old_tx, old_rx) = oneshot::channel();
        let (new_tx, new_rx) = oneshot::channel();
        let source = GatedSource {
            gates: RefCell::new(HashMap::from([
                (date("2024-03-14"), old_rx),
                (date("2024-03-15"), new_rx),
            ])),
        };

        let old = fetch_ranking(&source, date("2024-03-14"), store.clone());
        let new = fetch_ranking(&source, date("2024-03-15"), store.clone());

        // `old` is polled first and stays in flight until `new` has settled.
        let (old_applied, new_applied) = block_on(async {
            futures::join!(old, async {
                new_tx.send(Ok(sample(2))).ok();
                let applied = new.await;
                {
                    let state = store.borrow();
                    assert!(!state.is_loading());
                    assert_eq!(state.data().unwrap().len(), 2);
                }
                old_tx.send(Ok(sample(7))).ok();
                applied
            })
        });

        assert!(new_applied);
        assert!(!old_applied);

        let state = store.borrow();
        assert_eq!(state.data().unwrap().len(), 2);
        assert_eq!(state.data().unwrap().entries[0].movie_title, "Movie 1");
        assert_eq!(state.target_date().as_str(), "20240315");
        assert!(!state.is_loading());
    }
}
