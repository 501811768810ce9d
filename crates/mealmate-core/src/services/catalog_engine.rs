//! Reactive catalog engine.
//!
//! Holds the latest snapshot of the whole collection plus the user's
//! filter, search and selection state, and publishes three derived views
//! through `watch` cells:
//!
//! - the filtered list (category + tried status, order-preserving)
//! - search suggestions (global, not narrowed by the filters)
//! - the selected dish
//!
//! # Ordering
//!
//! All state lives behind one mutex. Filter changes and snapshot ingestion
//! take the lock, recompute, and publish before releasing it, so observers
//! never see a view computed from a half-applied update. Snapshots carry
//! the store revision they were read at and older ones are dropped.
//!
//! Writes go through the repository and become visible when the next
//! snapshot arrives, either from the ingestion task spawned by
//! [`CatalogEngine::start`] or from an explicit [`CatalogEngine::refresh`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::catalog_repository::CatalogRepository;
use super::views::{filter_dishes, search_dishes};
use crate::domain::{CategoryFilter, Dish, NewDish, RestaurantHeadline, Tasting, now_millis};
use crate::events::CatalogEvent;
use crate::ports::{CatalogEventEmitter, CoreError, DishQuery, RepositoryError, Snapshot};

/// Shared, immutable list published to observers.
pub type DishList = Arc<[Dish]>;

#[derive(Debug, Default)]
struct EngineState {
    all_dishes: Vec<Dish>,
    /// Revision of the last ingested snapshot.
    revision: Option<u64>,
    category_filter: CategoryFilter,
    tried_filter: bool,
    search_query: String,
    selected_id: Option<i64>,
}

impl EngineState {
    fn filtered(&self) -> DishList {
        filter_dishes(&self.all_dishes, &self.category_filter, self.tried_filter).into()
    }

    fn suggestions(&self) -> DishList {
        search_dishes(&self.all_dishes, &self.search_query).into()
    }

    fn find(&self, id: i64) -> Option<&Dish> {
        self.all_dishes.iter().find(|d| d.id == id)
    }
}

/// Catalog state holder and derived-view publisher.
///
/// Each instance owns its own filter, search and selection state. Build one
/// per presentation surface.
pub struct CatalogEngine {
    repo: CatalogRepository,
    emitter: Arc<dyn CatalogEventEmitter>,
    state: Mutex<EngineState>,
    all_tx: watch::Sender<DishList>,
    filtered_tx: watch::Sender<DishList>,
    suggestions_tx: watch::Sender<DishList>,
    selected_tx: watch::Sender<Option<Dish>>,
}

/// Replace the cell's value only when it differs, so receivers are not
/// woken for no-op recomputes.
fn publish<T: PartialEq>(tx: &watch::Sender<T>, value: T) {
    tx.send_if_modified(|current| {
        if *current == value {
            false
        } else {
            *current = value;
            true
        }
    });
}

/// `NotFound` becomes `Ok(false)`; every other failure propagates.
fn found(result: Result<(), CoreError>, op: &str, id: i64) -> Result<bool, CoreError> {
    match result {
        Ok(()) => Ok(true),
        Err(CoreError::Repository(RepositoryError::NotFound(_))) => {
            warn!(dish_id = id, op, "Dish not found, nothing changed");
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

impl CatalogEngine {
    pub fn new(repo: CatalogRepository, emitter: Arc<dyn CatalogEventEmitter>) -> Arc<Self> {
        let empty: DishList = Arc::from(Vec::new());
        Arc::new(Self {
            repo,
            emitter,
            state: Mutex::new(EngineState::default()),
            all_tx: watch::channel(Arc::clone(&empty)).0,
            filtered_tx: watch::channel(Arc::clone(&empty)).0,
            suggestions_tx: watch::channel(empty).0,
            selected_tx: watch::channel(None).0,
        })
    }

    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Snapshot ingestion
    // ─────────────────────────────────────────────────────────────────────

    /// Spawn the task that follows the store's live "all dishes" query.
    ///
    /// The task ends when `cancel` fires or the store shuts down.
    pub fn start(self: &Arc<Self>, cancel: CancellationToken) -> JoinHandle<()> {
        let engine = Arc::clone(self);
        let mut live = self.repo.get_all();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    biased;
                    () = cancel.cancelled() => {
                        debug!("Catalog ingestion cancelled");
                        break;
                    }
                    next = live.next() => match next {
                        Some(Ok(snapshot)) => {
                            engine.ingest(snapshot);
                        }
                        Some(Err(e)) => {
                            warn!(error = %e, "Failed to load catalog snapshot");
                        }
                        None => {
                            debug!("Dish store closed, catalog ingestion finished");
                            break;
                        }
                    },
                }
            }
        })
    }

    /// Replace the collection with `snapshot` and recompute every view.
    ///
    /// Returns `false` if the snapshot is older than the one already held.
    pub fn ingest(&self, snapshot: Snapshot) -> bool {
        let mut state = self.lock();
        if let Some(held) = state.revision
            && snapshot.revision < held
        {
            debug!(
                held,
                received = snapshot.revision,
                "Dropping stale catalog snapshot"
            );
            return false;
        }

        state.revision = Some(snapshot.revision);
        state.all_dishes = snapshot.dishes;

        if let Some(id) = state.selected_id
            && state.find(id).is_none()
        {
            debug!(dish_id = id, "Selected dish no longer exists, clearing selection");
            state.selected_id = None;
        }
        let selected = state.selected_id.and_then(|id| state.find(id).cloned());

        publish(&self.all_tx, Arc::from(state.all_dishes.as_slice()));
        publish(&self.filtered_tx, state.filtered());
        publish(&self.suggestions_tx, state.suggestions());
        publish(&self.selected_tx, selected);

        debug!(
            revision = snapshot.revision,
            dishes = state.all_dishes.len(),
            "Ingested catalog snapshot"
        );
        true
    }

    /// Read the collection once and ingest it.
    ///
    /// A storage failure leaves every view untouched.
    pub async fn refresh(&self) -> Result<(), CoreError> {
        let snapshot = self.repo.snapshot(DishQuery::All).await?;
        self.ingest(snapshot);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Filters and search
    // ─────────────────────────────────────────────────────────────────────

    /// Set the category criterion. Only the filtered list is recomputed.
    pub fn set_category_filter(&self, filter: CategoryFilter) {
        let mut state = self.lock();
        debug!(filter = filter.tag(), "Category filter changed");
        state.category_filter = filter;
        publish(&self.filtered_tx, state.filtered());
    }

    /// Set the category criterion from a raw tag. Unknown or empty tags
    /// match nothing.
    pub fn set_category_tag(&self, tag: &str) {
        self.set_category_filter(CategoryFilter::from_tag(tag));
    }

    /// Switch between the "to try" (`false`) and "tried" (`true`) lists.
    pub fn set_tried_filter(&self, tried: bool) {
        let mut state = self.lock();
        debug!(tried, "Tried filter changed");
        state.tried_filter = tried;
        publish(&self.filtered_tx, state.filtered());
    }

    /// Set the search text. Only the suggestions are recomputed.
    pub fn set_search_query(&self, query: impl Into<String>) {
        let mut state = self.lock();
        state.search_query = query.into();
        publish(&self.suggestions_tx, state.suggestions());
    }

    pub fn category_filter(&self) -> CategoryFilter {
        self.lock().category_filter.clone()
    }

    pub fn tried_filter(&self) -> bool {
        self.lock().tried_filter
    }

    pub fn search_query(&self) -> String {
        self.lock().search_query.clone()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Writes
    // ─────────────────────────────────────────────────────────────────────

    /// Validate and insert a draft. Returns the new id.
    pub async fn add_dish(&self, mut draft: NewDish) -> Result<i64, CoreError> {
        draft.normalize()?;
        let id = self.repo.insert(&draft).await?;
        info!(dish_id = id, name = %draft.name, "Dish added");
        self.emitter.emit(CatalogEvent::dish_added(id, draft.name));
        Ok(id)
    }

    /// Validate and save the editable fields of a dish.
    ///
    /// Tried status, tasting details and both timestamps stay as stored;
    /// only [`CatalogEngine::mark_tried`] changes them. Returns `false` if
    /// the id is unknown.
    pub async fn update_dish(&self, mut dish: Dish) -> Result<bool, CoreError> {
        dish.normalize()?;
        let updated = found(self.repo.update(&dish).await, "update", dish.id)?;
        if updated {
            info!(dish_id = dish.id, "Dish updated");
            self.emitter.emit(CatalogEvent::dish_updated(dish.id));
        }
        Ok(updated)
    }

    /// Delete a dish, clearing the selection if it pointed at it. Returns
    /// `false` if the id is unknown.
    pub async fn delete_dish(&self, dish: &Dish) -> Result<bool, CoreError> {
        let deleted = found(self.repo.delete(dish).await, "delete", dish.id)?;
        // Gone either way: removed now or by an earlier writer.
        {
            let mut state = self.lock();
            if state.selected_id == Some(dish.id) {
                state.selected_id = None;
                publish(&self.selected_tx, None);
            }
        }
        if deleted {
            info!(dish_id = dish.id, "Dish removed");
            self.emitter.emit(CatalogEvent::dish_removed(dish.id));
        }
        Ok(deleted)
    }

    /// Record a tasting for `id` and refresh the views.
    ///
    /// Overwrites any earlier tasting. The tried timestamp never precedes
    /// the dish's `date_added`. Returns `false` if the id is unknown.
    pub async fn mark_tried(&self, id: i64, tasting: Tasting) -> Result<bool, CoreError> {
        tasting.validate()?;

        let Some(dish) = self.repo.get_by_id(id).await? else {
            warn!(dish_id = id, op = "mark_tried", "Dish not found, nothing changed");
            return Ok(false);
        };
        let tried_at = now_millis().max(dish.date_added);

        if !found(
            self.repo.mark_tried(id, &tasting, tried_at).await,
            "mark_tried",
            id,
        )? {
            return Ok(false);
        }

        info!(dish_id = id, rating = tasting.rating, "Dish marked tried");
        self.emitter.emit(CatalogEvent::dish_tried(id, tasting.rating));

        // The write is committed; a failed re-read only delays the views.
        if let Err(e) = self.refresh().await {
            warn!(dish_id = id, error = %e, "Dish marked tried but catalog refresh failed");
        }
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Selection
    // ─────────────────────────────────────────────────────────────────────

    /// Track `id` as the currently viewed dish.
    ///
    /// Looks in the held snapshot first, then asks the store. An unknown id
    /// clears the selection and returns `None`.
    pub async fn select_dish(&self, id: i64) -> Result<Option<Dish>, CoreError> {
        let cached = self.lock().find(id).cloned();
        let dish = match cached {
            Some(dish) => Some(dish),
            None => self.repo.get_by_id(id).await?,
        };

        let mut state = self.lock();
        state.selected_id = dish.as_ref().map(|d| d.id);
        publish(&self.selected_tx, dish.clone());
        Ok(dish)
    }

    pub fn clear_selection(&self) {
        let mut state = self.lock();
        state.selected_id = None;
        publish(&self.selected_tx, None);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Observation
    // ─────────────────────────────────────────────────────────────────────

    pub fn subscribe_filtered(&self) -> watch::Receiver<DishList> {
        self.filtered_tx.subscribe()
    }

    pub fn subscribe_suggestions(&self) -> watch::Receiver<DishList> {
        self.suggestions_tx.subscribe()
    }

    pub fn subscribe_selected(&self) -> watch::Receiver<Option<Dish>> {
        self.selected_tx.subscribe()
    }

    pub fn subscribe_all(&self) -> watch::Receiver<DishList> {
        self.all_tx.subscribe()
    }

    pub fn filtered(&self) -> DishList {
        Arc::clone(&self.filtered_tx.borrow())
    }

    pub fn suggestions(&self) -> DishList {
        Arc::clone(&self.suggestions_tx.borrow())
    }

    pub fn selected(&self) -> Option<Dish> {
        self.selected_tx.borrow().clone()
    }

    pub fn all_dishes(&self) -> DishList {
        Arc::clone(&self.all_tx.borrow())
    }

    /// Venue summary for the catalog header.
    pub fn headline(&self) -> RestaurantHeadline {
        RestaurantHeadline::from_dishes(&self.all_tx.borrow())
    }

    /// The suggestion a "go to first match" action would open.
    pub fn first_suggestion(&self) -> Option<Dish> {
        self.suggestions_tx.borrow().first().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, DEFAULT_RESTAURANT, DishValidationError};
    use crate::ports::{DishStore, MockDishStore, NoopEmitter};
    use crate::testing::InMemoryDishStore;
    use chrono::Duration;
    use std::time::Duration as StdDuration;

    #[derive(Default)]
    struct RecordingEmitter {
        events: Mutex<Vec<CatalogEvent>>,
    }

    impl CatalogEventEmitter for RecordingEmitter {
        fn emit(&self, event: CatalogEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn engine_over(store: Arc<dyn DishStore>) -> Arc<CatalogEngine> {
        CatalogEngine::new(CatalogRepository::new(store), Arc::new(NoopEmitter::new()))
    }

    fn ids(list: &[Dish]) -> Vec<i64> {
        list.iter().map(|d| d.id).collect()
    }

    /// Record 1: MAIN, untried. Record 2: MAIN, tried with 4.0, added later.
    fn two_mains() -> Vec<Dish> {
        let base = now_millis() - Duration::hours(1);
        let first = NewDish::new("Pork Bowl", "Crispy pork belly", Category::Main)
            .with_date_added(base)
            .into_dish(1);
        let mut second = NewDish::new("Lamb Skewer", "Lamb backstrap", Category::Main)
            .with_date_added(base + Duration::minutes(1))
            .into_dish(2);
        second.is_tried = true;
        second.rating = 4.0;
        second.date_tried = Some(base + Duration::minutes(2));
        vec![first, second]
    }

    fn snapshot(revision: u64, dishes: Vec<Dish>) -> Snapshot {
        Snapshot { revision, dishes }
    }

    #[tokio::test]
    async fn test_end_to_end_mark_tried_moves_dish_between_views() {
        let store = Arc::new(InMemoryDishStore::with_dishes(two_mains()));
        let engine = engine_over(store);
        engine.refresh().await.unwrap();

        engine.set_category_filter(CategoryFilter::Only(Category::Main));
        engine.set_tried_filter(false);
        assert_eq!(ids(&engine.filtered()), vec![1]);

        let tasting = Tasting::new(5.0, "great", None);
        assert!(engine.mark_tried(1, tasting).await.unwrap());
        assert!(engine.filtered().is_empty());

        engine.set_tried_filter(true);
        assert_eq!(ids(&engine.filtered()), vec![2, 1]);

        let tried = engine.select_dish(1).await.unwrap().unwrap();
        assert!(tried.is_tried);
        assert!((tried.rating - 5.0).abs() < f32::EPSILON);
        assert_eq!(tried.tasting_notes, "great");
        assert!(tried.photo_path.is_none());
        assert!(tried.date_tried.unwrap() >= tried.date_added);
    }

    #[tokio::test]
    async fn test_mark_tried_overwrites_previous_tasting() {
        let store = Arc::new(InMemoryDishStore::with_dishes(two_mains()));
        let engine = engine_over(store);

        let tasting = Tasting::new(1.5, "too salty", Some("/tmp/p.jpg".to_string()));
        assert!(engine.mark_tried(2, tasting).await.unwrap());

        let dish = engine.select_dish(2).await.unwrap().unwrap();
        assert!((dish.rating - 1.5).abs() < f32::EPSILON);
        assert_eq!(dish.tasting_notes, "too salty");
        assert_eq!(dish.photo_path.as_deref(), Some("/tmp/p.jpg"));
    }

    #[tokio::test]
    async fn test_mark_tried_rejects_out_of_range_rating() {
        let store = Arc::new(InMemoryDishStore::with_dishes(two_mains()));
        let engine = engine_over(store.clone());

        let err = engine
            .mark_tried(1, Tasting::new(7.0, "", None))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(DishValidationError::RatingOutOfRange(_))
        ));
        assert!(!store.get_by_id(1).await.unwrap().unwrap().is_tried);
    }

    #[tokio::test]
    async fn test_missing_ids_are_no_ops() {
        let store = Arc::new(InMemoryDishStore::with_dishes(two_mains()));
        let engine = engine_over(store);
        let ghost = NewDish::new("x", "y", Category::Side).into_dish(99);

        assert!(!engine.mark_tried(99, Tasting::new(3.0, "", None)).await.unwrap());
        assert!(!engine.update_dish(ghost.clone()).await.unwrap());
        assert!(!engine.delete_dish(&ghost).await.unwrap());
        assert!(engine.select_dish(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_deleting_selected_dish_clears_selection() {
        let store = Arc::new(InMemoryDishStore::with_dishes(two_mains()));
        let engine = engine_over(store);
        engine.refresh().await.unwrap();

        let dish = engine.select_dish(1).await.unwrap().unwrap();
        assert_eq!(engine.selected().map(|d| d.id), Some(1));

        assert!(engine.delete_dish(&dish).await.unwrap());
        assert!(engine.selected().is_none());

        engine.refresh().await.unwrap();
        assert!(!ids(&engine.all_dishes()).contains(&1));
        assert!(engine.selected().is_none());
    }

    #[tokio::test]
    async fn test_deleting_already_removed_selected_dish_clears_selection() {
        let store = Arc::new(InMemoryDishStore::with_dishes(two_mains()));
        let engine = engine_over(store.clone());
        engine.refresh().await.unwrap();

        let dish = engine.select_dish(1).await.unwrap().unwrap();
        store.delete(&dish).await.unwrap();

        assert!(!engine.delete_dish(&dish).await.unwrap());
        assert!(engine.selected().is_none());
    }

    #[tokio::test]
    async fn test_deleting_other_dish_keeps_selection() {
        let store = Arc::new(InMemoryDishStore::with_dishes(two_mains()));
        let engine = engine_over(store);
        engine.refresh().await.unwrap();

        engine.select_dish(1).await.unwrap();
        let other = engine.all_dishes().iter().find(|d| d.id == 2).cloned().unwrap();
        assert!(engine.delete_dish(&other).await.unwrap());
        assert_eq!(engine.selected().map(|d| d.id), Some(1));
    }

    #[tokio::test]
    async fn test_snapshot_without_selected_dish_clears_selection() {
        let engine = engine_over(Arc::new(InMemoryDishStore::new()));
        engine.ingest(snapshot(1, two_mains()));
        engine.select_dish(2).await.unwrap();

        let remaining: Vec<Dish> = two_mains().into_iter().filter(|d| d.id == 1).collect();
        assert!(engine.ingest(snapshot(2, remaining)));
        assert!(engine.selected().is_none());
    }

    #[tokio::test]
    async fn test_selection_follows_new_snapshots() {
        let engine = engine_over(Arc::new(InMemoryDishStore::new()));
        engine.ingest(snapshot(1, two_mains()));
        engine.select_dish(1).await.unwrap();

        let mut renamed = two_mains();
        renamed[0].name = "Pork Bowl XL".to_string();
        engine.ingest(snapshot(2, renamed));
        assert_eq!(engine.selected().unwrap().name, "Pork Bowl XL");
    }

    #[test]
    fn test_stale_snapshot_is_dropped() {
        let engine = engine_over(Arc::new(InMemoryDishStore::new()));
        assert!(engine.ingest(snapshot(5, two_mains())));
        assert!(!engine.ingest(snapshot(3, Vec::new())));
        assert_eq!(engine.all_dishes().len(), 2);
        // Same revision is a re-read, not a regression.
        assert!(engine.ingest(snapshot(5, two_mains())));
    }

    #[test]
    fn test_unrecognized_category_tag_matches_nothing() {
        let engine = engine_over(Arc::new(InMemoryDishStore::new()));
        engine.ingest(snapshot(1, two_mains()));

        engine.set_category_tag("BRUNCH");
        assert!(engine.filtered().is_empty());
        engine.set_category_tag("");
        assert!(engine.filtered().is_empty());
        engine.set_category_tag("ALL");
        assert_eq!(ids(&engine.filtered()), vec![1]);
    }

    #[test]
    fn test_search_recomputes_suggestions_only() {
        let engine = engine_over(Arc::new(InMemoryDishStore::new()));
        engine.ingest(snapshot(1, two_mains()));
        let mut filtered = engine.subscribe_filtered();
        filtered.borrow_and_update();

        engine.set_search_query("LAMB");
        assert_eq!(ids(&engine.suggestions()), vec![2]);
        assert_eq!(engine.first_suggestion().map(|d| d.id), Some(2));
        assert!(!filtered.has_changed().unwrap());

        // Suggestions ignore the tried filter.
        engine.set_search_query("pork");
        assert_eq!(ids(&engine.suggestions()), vec![1]);

        engine.set_search_query("  ");
        assert!(engine.suggestions().is_empty());
        assert!(engine.first_suggestion().is_none());
    }

    #[test]
    fn test_filter_change_leaves_suggestions_alone() {
        let engine = engine_over(Arc::new(InMemoryDishStore::new()));
        engine.ingest(snapshot(1, two_mains()));
        engine.set_search_query("lamb");
        let mut suggestions = engine.subscribe_suggestions();
        suggestions.borrow_and_update();

        engine.set_tried_filter(true);
        engine.set_category_tag("DESSERT");
        assert!(!suggestions.has_changed().unwrap());
    }

    #[test]
    fn test_headline_follows_collection() {
        let engine = engine_over(Arc::new(InMemoryDishStore::new()));
        assert_eq!(engine.headline(), RestaurantHeadline::Placeholder);
        engine.ingest(snapshot(1, two_mains()));
        assert_eq!(
            engine.headline(),
            RestaurantHeadline::Single(DEFAULT_RESTAURANT.to_string())
        );
    }

    #[tokio::test]
    async fn test_add_dish_validates_and_emits() {
        let store = Arc::new(InMemoryDishStore::new());
        let emitter = Arc::new(RecordingEmitter::default());
        let engine = CatalogEngine::new(CatalogRepository::new(store.clone()), emitter.clone());

        let err = engine
            .add_dish(NewDish::new("   ", "desc", Category::Main))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(DishValidationError::MissingName)
        ));

        let id = engine
            .add_dish(NewDish::new("  Pavlova ", "Meringue", Category::Dessert).with_restaurant(""))
            .await
            .unwrap();
        let stored = store.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Pavlova");
        assert_eq!(stored.restaurant, DEFAULT_RESTAURANT);

        let events = emitter.events.lock().unwrap();
        assert_eq!(events.as_slice(), &[CatalogEvent::dish_added(id, "Pavlova")]);
    }

    #[tokio::test]
    async fn test_storage_failure_leaves_state_unchanged() {
        let held = two_mains();
        let lookup = held[0].clone();

        let mut store = MockDishStore::new();
        store
            .expect_get_by_id()
            .returning(move |_| Ok(Some(lookup.clone())));
        store
            .expect_mark_tried()
            .returning(|_, _, _| Err(RepositoryError::Storage("disk full".to_string())));
        store
            .expect_query()
            .returning(|_| Err(RepositoryError::Storage("disk full".to_string())));

        let engine = engine_over(Arc::new(store));
        engine.ingest(snapshot(1, held));
        let before = engine.filtered();

        let err = engine
            .mark_tried(1, Tasting::new(4.0, "", None))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Repository(RepositoryError::Storage(_))));
        assert!(engine.refresh().await.is_err());
        assert_eq!(engine.filtered(), before);
        assert_eq!(engine.all_dishes().len(), 2);
    }

    #[tokio::test]
    async fn test_mark_tried_reports_success_when_refresh_fails() {
        let held = two_mains();
        let lookup = held[0].clone();

        let mut store = MockDishStore::new();
        store
            .expect_get_by_id()
            .returning(move |_| Ok(Some(lookup.clone())));
        store
            .expect_mark_tried()
            .times(1)
            .returning(|_, _, _| Ok(()));
        store
            .expect_query()
            .returning(|_| Err(RepositoryError::Storage("database is locked".to_string())));

        let emitter = Arc::new(RecordingEmitter::default());
        let engine = CatalogEngine::new(CatalogRepository::new(Arc::new(store)), emitter.clone());
        engine.ingest(snapshot(1, held));
        let before = engine.all_dishes();

        assert!(engine.mark_tried(1, Tasting::new(4.0, "", None)).await.unwrap());
        assert_eq!(engine.all_dishes(), before);
        assert_eq!(
            emitter.events.lock().unwrap().as_slice(),
            &[CatalogEvent::dish_tried(1, 4.0)]
        );
    }

    #[tokio::test]
    async fn test_update_keeps_status_and_timestamps() {
        let store = Arc::new(InMemoryDishStore::with_dishes(two_mains()));
        let engine = engine_over(store.clone());
        let stored = store.get_by_id(1).await.unwrap().unwrap();

        let mut edit = stored.clone();
        edit.name = "Pork Bowl XL".to_string();
        edit.is_tried = true;
        edit.rating = 5.0;
        edit.date_added = stored.date_added + Duration::days(1);
        edit.date_tried = Some(stored.date_added - Duration::days(1));
        assert!(engine.update_dish(edit).await.unwrap());

        let saved = store.get_by_id(1).await.unwrap().unwrap();
        assert_eq!(saved.name, "Pork Bowl XL");
        assert!(!saved.is_tried);
        assert!(saved.rating.abs() < f32::EPSILON);
        assert_eq!(saved.date_added, stored.date_added);
        assert!(saved.date_tried.is_none());
    }

    #[tokio::test]
    async fn test_ingestion_task_follows_store_writes() {
        let store = Arc::new(InMemoryDishStore::new());
        let engine = engine_over(store);
        let cancel = CancellationToken::new();
        let handle = engine.start(cancel.clone());

        let mut filtered = engine.subscribe_filtered();
        engine
            .add_dish(NewDish::new("Scallop", "Roe-off scallops", Category::Starter))
            .await
            .unwrap();

        tokio::time::timeout(StdDuration::from_secs(5), filtered.wait_for(|d| d.len() == 1))
            .await
            .unwrap()
            .unwrap();

        cancel.cancel();
        handle.await.unwrap();
    }
}
