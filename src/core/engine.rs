// File: src/core/engine.rs
use crate::builder::BuilderSelection;
use crate::config::EngineConfig;
use crate::core::catalog::{apply_live_input, filter_by_category, render_batch, Catalog, ALL_KEY, FAV_KEY};
use crate::core::dedup::Probes;
use crate::core::registry::Registries;
use crate::core::types::{CanonicalStyle, CustomStyleRecipe, StyleId};
use crate::dictation::{Dictation, TranscriptSegment};
use crate::favorites::LikedSet;
use crate::persistence::{load_customs, save_customs, KeyValueStore};
use crate::scheduler::{ClockScheduler, Scheduler, VisibilityObserver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::sync::Arc;

/// One user's live view over the catalog: active category, loaded batches,
/// current input, likes and saved custom styles.
///
/// Everything runs on the caller's thread. Time enters only through the
/// scheduler and viewport signals only through `near_edge`.
pub struct Session<S: KeyValueStore> {
    registries: Arc<Registries>,
    config: EngineConfig,
    probes: Probes,
    catalog: Catalog,
    liked: LikedSet,
    customs: Vec<CustomStyleRecipe>,
    store: S,
    scheduler: Box<dyn Scheduler>,
    observer: Option<Box<dyn VisibilityObserver>>,
    observing: bool,
    epoch: u64,
    active_key: String,
    active: Vec<Arc<CanonicalStyle>>,
    loaded: usize,
    input: String,
    dictation: Dictation,
}

impl<S: KeyValueStore> Session<S> {
    /// Wall-clock debounce, no observer: every category loads in full.
    pub fn open(registries: Arc<Registries>, config: EngineConfig, store: S) -> Self {
        Self::open_with(registries, config, store, Box::new(ClockScheduler::new()), None)
    }

    /// Builds the catalog, restores likes and custom styles, and shows `all`.
    pub fn open_with(
        registries: Arc<Registries>,
        config: EngineConfig,
        store: S,
        scheduler: Box<dyn Scheduler>,
        observer: Option<Box<dyn VisibilityObserver>>,
    ) -> Self {
        let probes = config.probes();
        let mut rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut catalog = Catalog::assemble(&registries, &probes, config.catalog_cap, &mut rng);

        let liked = LikedSet::load(&store);
        let customs = load_customs(&store);
        catalog.rehydrate(&registries, &customs, &probes);
        log::info!("Session opened: {} styles, {} liked, {} custom", catalog.len(), liked.len(), customs.len());

        let mut session = Self {
            registries,
            config,
            probes,
            catalog,
            liked,
            customs,
            store,
            scheduler,
            observer,
            observing: false,
            epoch: 0,
            active_key: ALL_KEY.to_string(),
            active: Vec::new(),
            loaded: 0,
            input: String::new(),
            dictation: Dictation::new(),
        };
        session.select_category(ALL_KEY);
        session
    }

    pub fn registries(&self) -> &Arc<Registries> {
        &self.registries
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn liked(&self) -> &LikedSet {
        &self.liked
    }

    pub fn customs(&self) -> &[CustomStyleRecipe] {
        &self.customs
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn active_category(&self) -> &str {
        &self.active_key
    }

    /// The whole filtered list, loaded or not.
    pub fn active_styles(&self) -> &[Arc<CanonicalStyle>] {
        &self.active
    }

    /// The prefix of the active list currently on screen.
    pub fn loaded_styles(&self) -> &[Arc<CanonicalStyle>] {
        &self.active[..self.loaded]
    }

    /// Epoch the current observer was started with.
    pub fn observer_epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_exhausted(&self) -> bool {
        self.loaded >= self.active.len()
    }

    /// Rebuilds the active list and starts loading it from the top. Any
    /// running observer is stopped and replaced by one on a fresh epoch.
    pub fn select_category(&mut self, key: &str) {
        self.active_key = key.to_string();
        self.active = filter_by_category(&self.catalog, key, &self.liked);
        self.loaded = 0;

        if self.observing {
            if let Some(observer) = self.observer.as_mut() {
                observer.stop();
            }
            self.observing = false;
        }
        self.epoch += 1;

        self.load_next();
        if self.observer.is_none() {
            while !self.is_exhausted() {
                self.load_next();
            }
        } else if !self.is_exhausted() {
            if let Some(observer) = self.observer.as_mut() {
                observer.observe(self.epoch);
            }
            self.observing = true;
        }
        log::debug!(
            "Category '{}': {} styles, {} loaded, epoch {}",
            key,
            self.active.len(),
            self.loaded,
            self.epoch
        );
    }

    /// Handles one near-edge signal. Signals from an earlier epoch, or after
    /// the list ran out, are ignored. Returns how many styles were appended.
    pub fn near_edge(&mut self, epoch: u64) -> usize {
        if epoch != self.epoch || !self.observing {
            log::debug!("Ignoring near-edge signal for epoch {} (current {})", epoch, self.epoch);
            return 0;
        }
        let before = self.loaded;
        self.load_next();
        if self.loaded >= self.active.len() {
            if let Some(observer) = self.observer.as_mut() {
                observer.stop();
            }
            self.observing = false;
        }
        self.loaded - before
    }

    fn load_next(&mut self) {
        let end = (self.loaded + self.config.batch()).min(self.active.len());
        self.loaded = end;
    }

    /// `(id, rendered)` for every loaded style on the current input.
    pub fn rendered(&self) -> Vec<(StyleId, String)> {
        let loaded = self.loaded_styles();
        let texts = render_batch(loaded, 0, loaded.len(), &self.input, &self.config.placeholder);
        loaded.iter().map(|s| s.id()).zip(texts).collect()
    }

    /// Queues a re-render for `text`, replacing any queued one.
    pub fn edit_input(&mut self, text: &str) {
        self.scheduler.cancel_pending();
        self.scheduler.schedule(self.config.debounce(), text.to_string());
    }

    pub fn has_pending_render(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Fires the queued re-render if its quiet period is over.
    pub fn tick(&mut self) -> Option<HashMap<StyleId, String>> {
        let text = self.scheduler.take_due()?;
        Some(self.set_input_now(&text))
    }

    /// Applies `text` immediately and re-renders the loaded styles.
    pub fn set_input_now(&mut self, text: &str) -> HashMap<StyleId, String> {
        self.input = text.to_string();
        apply_live_input(self.loaded_styles(), &self.input, &self.config.placeholder)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    /// Flips the like on `id`, persists it, and refreshes the `fav` view if
    /// it is showing. Returns the new state.
    pub fn toggle_like(&mut self, id: &str) -> bool {
        let now_liked = self.liked.toggle(id);
        self.persist_liked();
        if self.active_key == FAV_KEY {
            self.select_category(FAV_KEY);
        }
        now_liked
    }

    pub fn start_dictation(&mut self) {
        let current = self.input.clone();
        self.dictation.start(&current);
    }

    pub fn stop_dictation(&mut self) {
        self.dictation.stop();
    }

    pub fn is_dictating(&self) -> bool {
        self.dictation.is_listening()
    }

    /// Feeds recognition results in; the resulting text goes through the
    /// same debounce as typing. Returns that text.
    pub fn dictation_result(&mut self, segments: &[TranscriptSegment]) -> String {
        let text = self.dictation.on_results(segments);
        self.edit_input(&text);
        text
    }

    pub fn builder_preview(&self, selection: &BuilderSelection) -> String {
        selection.preview(&self.registries, &self.input, &self.config.placeholder)
    }

    pub fn is_custom_saved(&self, selection: &BuilderSelection) -> bool {
        self.liked.contains(&selection.id(&self.registries))
    }

    /// Saves or unsaves the builder's current style. Saving likes it, puts it
    /// at the front of the catalog and records the recipe; unsaving reverses
    /// the like and drops the recipe. Returns whether it is now saved.
    pub fn toggle_save_custom(&mut self, selection: &BuilderSelection) -> bool {
        let recipe = selection.recipe(&self.registries);
        let id = selection.id(&self.registries);
        self.catalog.ensure_custom(&self.registries, &recipe, &self.probes);

        let saved = if self.liked.contains(&id) {
            self.liked.unlike(&id);
            self.customs.retain(|c| c.name != recipe.name);
            false
        } else {
            self.liked.like(&id);
            if !self.customs.iter().any(|c| c.name == recipe.name) {
                self.customs.insert(0, recipe);
            }
            true
        };
        self.persist_liked();
        self.persist_customs();

        if self.active_key == FAV_KEY {
            self.select_category(FAV_KEY);
        }
        saved
    }

    fn persist_liked(&mut self) {
        if let Err(e) = self.liked.save(&mut self.store) {
            log::error!("Failed to save liked styles: {}", e);
        }
    }

    fn persist_customs(&mut self) {
        if let Err(e) = save_customs(&mut self.store, &self.customs) {
            log::error!("Failed to save custom styles: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{BaseStyle, Transform};
    use crate::core::wrappers::{WrapperCategory, WrapperPlan};
    use crate::persistence::{MemoryStore, CUSTOM_KEY, LIKED_KEY};
    use crate::scheduler::{ManualClock, ManualScheduler, ObserverEvent, RecordingObserver};
    use std::time::Duration;

    /// 3 bases x (5 boxes + identity) = 18 distinct styles.
    fn registries() -> Arc<Registries> {
        let bases = vec![
            BaseStyle::new("Spaced", Transform::Spaced),
            BaseStyle::new("Loud", Transform::LowercaseSubstitute(crate::core::converter::build_map(
                "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            ))),
            BaseStyle::new("Stars", Transform::Substitute(crate::core::converter::build_map(
                "a★b★c★d★e★f★g★h★i★j★k★l★m★n★o★p★q★r★s★t★u★v★w★x★y★z★",
            ))),
        ];
        let cats = vec![WrapperCategory::new(
            "BOX",
            "Boxes",
            &[("【 ", " 】"), ("『", "』"), ("「", "」"), ("〔", "〕"), ("《", "》")],
        )];
        let plan = WrapperPlan { repeats: vec![("BOX".to_string(), 1)], pairs: vec![] };
        Arc::new(Registries::new(bases, cats, &plan))
    }

    fn config() -> EngineConfig {
        EngineConfig { batch_size: 4, shuffle_seed: Some(11), ..EngineConfig::default() }
    }

    struct Harness {
        session: Session<MemoryStore>,
        clock: ManualClock,
        observer: RecordingObserver,
    }

    fn harness_with(store: MemoryStore) -> Harness {
        let clock = ManualClock::new();
        let observer = RecordingObserver::new();
        let session = Session::open_with(
            registries(),
            config(),
            store,
            Box::new(ManualScheduler::with_clock(clock.clone())),
            Some(Box::new(observer.clone())),
        );
        Harness { session, clock, observer }
    }

    fn harness() -> Harness {
        harness_with(MemoryStore::new())
    }

    #[test]
    fn opens_on_all_with_one_batch() {
        let h = harness();
        assert_eq!(h.session.active_category(), "all");
        assert_eq!(h.session.active_styles().len(), 18);
        assert_eq!(h.session.loaded_styles().len(), 4);
        assert_eq!(h.observer.drain(), vec![ObserverEvent::Observe(1)]);
    }

    #[test]
    fn near_edge_appends_batches_until_exhausted() {
        let mut h = harness();
        h.observer.drain();
        let epoch = h.session.observer_epoch();
        let mut total = h.session.loaded_styles().len();
        while !h.session.is_exhausted() {
            total += h.session.near_edge(epoch);
        }
        assert_eq!(total, 18);
        assert_eq!(h.observer.drain(), vec![ObserverEvent::Stop]);
        // Further signals do nothing once stopped.
        assert_eq!(h.session.near_edge(epoch), 0);
    }

    #[test]
    fn stale_epochs_are_ignored_after_switching() {
        let mut h = harness();
        let old = h.session.observer_epoch();
        h.session.select_category("boxed");
        assert_eq!(h.observer.drain(), vec![ObserverEvent::Observe(1), ObserverEvent::Stop, ObserverEvent::Observe(2)]);
        assert_eq!(h.session.near_edge(old), 0);
        assert_eq!(h.session.loaded_styles().len(), 4);
        assert_eq!(h.session.near_edge(h.session.observer_epoch()), 4);
    }

    #[test]
    fn switching_resets_progress() {
        let mut h = harness();
        let epoch = h.session.observer_epoch();
        h.session.near_edge(epoch);
        assert_eq!(h.session.loaded_styles().len(), 8);
        h.session.select_category("all");
        assert_eq!(h.session.loaded_styles().len(), 4);
    }

    #[test]
    fn zero_batch_size_pages_one_at_a_time() {
        let zero = EngineConfig { batch_size: 0, ..config() };
        let eager = Session::open_with(
            registries(),
            zero.clone(),
            MemoryStore::new(),
            Box::new(ManualScheduler::with_clock(ManualClock::new())),
            None,
        );
        assert_eq!(eager.loaded_styles().len(), 18);

        let observer = RecordingObserver::new();
        let mut lazy = Session::open_with(
            registries(),
            zero,
            MemoryStore::new(),
            Box::new(ManualScheduler::with_clock(ManualClock::new())),
            Some(Box::new(observer.clone())),
        );
        assert_eq!(lazy.loaded_styles().len(), 1);
        assert_eq!(lazy.near_edge(lazy.observer_epoch()), 1);
    }

    #[test]
    fn short_lists_never_start_an_observer() {
        let mut h = harness();
        h.observer.drain();
        h.session.select_category("fav");
        assert!(h.session.active_styles().is_empty());
        assert_eq!(h.observer.drain(), vec![ObserverEvent::Stop]);
    }

    #[test]
    fn without_an_observer_everything_loads() {
        let session = Session::open(registries(), config(), MemoryStore::new());
        assert_eq!(session.loaded_styles().len(), 18);
    }

    #[test]
    fn only_the_last_edit_renders() {
        let mut h = harness();
        h.session.edit_input("h");
        h.clock.advance(Duration::from_millis(30));
        h.session.edit_input("hi");
        h.clock.advance(Duration::from_millis(59));
        assert!(h.session.tick().is_none());
        assert!(h.session.has_pending_render());
        h.clock.advance(Duration::from_millis(1));
        let rendered = h.session.tick().unwrap();
        assert_eq!(rendered.len(), 4);
        assert_eq!(h.session.input(), "hi");
        assert!(!h.session.has_pending_render());
        assert!(h.session.tick().is_none());
    }

    #[test]
    fn rendered_uses_placeholder_until_input_arrives() {
        let mut h = harness();
        let first = h.session.loaded_styles()[0].clone();
        assert_eq!(h.session.rendered()[0].1, first.render("Type something…"));
        h.session.set_input_now("ok");
        assert_eq!(h.session.rendered()[0], (first.id(), first.render("ok")));
    }

    #[test]
    fn likes_persist_and_refresh_fav() {
        let mut h = harness();
        let id = h.session.loaded_styles()[0].id();
        h.session.select_category("fav");
        assert!(h.session.toggle_like(&id));
        assert_eq!(h.session.active_styles().len(), 1);
        assert!(h.session.store().get(LIKED_KEY).unwrap().contains(&id));

        assert!(!h.session.toggle_like(&id));
        assert!(h.session.active_styles().is_empty());
        assert_eq!(h.session.store().get(LIKED_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn likes_survive_a_new_session() {
        let mut h = harness();
        let id = h.session.loaded_styles()[2].id();
        h.session.toggle_like(&id);
        let store = h.session.store().clone();

        let mut again = harness_with(store);
        assert!(again.session.is_liked(&id));
        again.session.select_category("fav");
        assert_eq!(again.session.active_styles()[0].id(), id);
    }

    #[test]
    fn dictation_goes_through_the_debounce() {
        let mut h = harness();
        h.session.set_input_now("Hi");
        h.session.start_dictation();
        assert!(h.session.is_dictating());
        let text = h.session.dictation_result(&[TranscriptSegment::confirmed("there")]);
        assert_eq!(text, "Hi there");
        assert_eq!(h.session.input(), "Hi");
        h.clock.advance(Duration::from_millis(60));
        h.session.tick().unwrap();
        assert_eq!(h.session.input(), "Hi there");
        h.session.stop_dictation();
        assert!(!h.session.is_dictating());
    }

    #[test]
    fn saving_a_custom_style() {
        let mut h = harness();
        let sel = BuilderSelection::new(1, "BOX", 1);
        assert!(!h.session.is_custom_saved(&sel));
        assert_eq!(h.session.builder_preview(&sel), "『TYPE SOMETHING…』");

        assert!(h.session.toggle_save_custom(&sel));
        assert!(h.session.is_custom_saved(&sel));
        assert_eq!(h.session.catalog().styles()[0].name, "Custom Loud + BOX #2");
        assert_eq!(h.session.catalog().len(), 19);
        assert_eq!(h.session.customs().len(), 1);
        assert!(h.session.store().get(CUSTOM_KEY).unwrap().contains("\"baseIdx\":1"));

        assert!(!h.session.toggle_save_custom(&sel));
        assert!(h.session.customs().is_empty());
        assert_eq!(h.session.store().get(CUSTOM_KEY).as_deref(), Some("[]"));
        // The style stays in this session's catalog.
        assert_eq!(h.session.catalog().len(), 19);
    }

    #[test]
    fn saved_customs_come_back_first() {
        let mut h = harness();
        h.session.toggle_save_custom(&BuilderSelection::new(0, "BOX", 0));
        h.session.toggle_save_custom(&BuilderSelection::new(2, "NONE", 0));
        let store = h.session.store().clone();

        let again = harness_with(store);
        let names: Vec<&str> = again.session.catalog().styles()[..2].iter().map(|s| s.name.as_str()).collect();
        // Stored newest first, then each is prepended in turn.
        assert_eq!(names, vec!["Custom Spaced + BOX #1", "Custom Stars + NONE #1"]);
        assert!(again.session.catalog().styles()[0].has_tag("custom"));
    }
}
