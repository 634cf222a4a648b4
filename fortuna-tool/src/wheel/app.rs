use std::sync::Arc;

use fortuna_core::{Coordinate, OptionSet, SpinEngine, SPIN_DURATION};
use fortuna_nominatim::{NominatimClient, PlaceResult, SearchError};
use rand::thread_rng;
use tokio::sync::{oneshot, Mutex};

use crate::locate::{GeoLocator, LocateOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Manual,
    Search,
    Spinning,
    Winner,
}

pub struct WheelApp {
    pub mode: AppMode,
    pub should_quit: bool,
    pub options: OptionSet,
    pub engine: SpinEngine,
    pub entry: String,
    pub entry_cursor: usize,
    pub keyword: String,
    pub keyword_cursor: usize,
    pub results: Vec<PlaceResult>,
    pub result_selected: usize,
    pub option_selected: usize,
    pub location: Option<Coordinate>,
    pub location_warning: Option<String>,
    pub last_error: Option<String>,
    pub client: Arc<NominatimClient>,
    pub locator: Arc<Mutex<GeoLocator>>,
    pub search_rx: Option<oneshot::Receiver<Result<Vec<PlaceResult>, SearchError>>>,
    pub locate_rx: Option<oneshot::Receiver<LocateOutcome>>,
    pub settle_rx: Option<oneshot::Receiver<()>>,

    // Tab to return to once a spin or the winner popup is done
    previous_tab: AppMode,
}

impl WheelApp {
    pub fn new(client: NominatimClient, locator: GeoLocator, seed_options: Vec<String>) -> Self {
        let mut options = OptionSet::new();
        for text in &seed_options {
            options.add(text);
        }

        Self {
            mode: AppMode::Manual,
            should_quit: false,
            options,
            engine: SpinEngine::new(),
            entry: String::new(),
            entry_cursor: 0,
            keyword: String::new(),
            keyword_cursor: 0,
            results: Vec::new(),
            result_selected: 0,
            option_selected: 0,
            location: None,
            location_warning: None,
            last_error: None,
            client: Arc::new(client),
            locator: Arc::new(Mutex::new(locator)),
            search_rx: None,
            locate_rx: None,
            settle_rx: None,
            previous_tab: AppMode::Manual,
        }
    }

    // --- tabs ---

    pub fn switch_tab(&mut self) {
        self.mode = match self.mode {
            AppMode::Manual => AppMode::Search,
            AppMode::Search => AppMode::Manual,
            other => other,
        };
        if self.mode == AppMode::Search {
            self.ensure_location();
        }
    }

    // --- option list ---

    pub fn add_entry(&mut self) {
        if self.options.add(&self.entry).is_some() {
            self.entry.clear();
            self.entry_cursor = 0;
        }
    }

    pub fn remove_selected_option(&mut self) {
        if let Some(id) = self.options.get(self.option_selected).map(|o| o.id) {
            self.options.remove(id);
            if self.option_selected >= self.options.len() && self.option_selected > 0 {
                self.option_selected -= 1;
            }
        }
    }

    pub fn clear_options(&mut self) {
        self.options.clear();
        self.option_selected = 0;
    }

    pub fn option_up(&mut self) {
        if self.option_selected > 0 {
            self.option_selected -= 1;
        }
    }

    pub fn option_down(&mut self) {
        if self.option_selected + 1 < self.options.len() {
            self.option_selected += 1;
        }
    }

    // --- spinning ---

    pub fn start_spin(&mut self) {
        if !self.engine.spin(&self.options, &mut thread_rng()) {
            return;
        }

        self.previous_tab = match self.mode {
            AppMode::Search => AppMode::Search,
            AppMode::Winner => self.previous_tab,
            _ => AppMode::Manual,
        };
        self.mode = AppMode::Spinning;
        self.last_error = None;

        // The settlement timer; the engine resolves the winner when it fires.
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            tokio::time::sleep(SPIN_DURATION).await;
            let _ = tx.send(());
        });
        self.settle_rx = Some(rx);
    }

    pub fn poll_settlement(&mut self) {
        let Some(ref mut rx) = self.settle_rx else {
            return;
        };
        match rx.try_recv() {
            Err(oneshot::error::TryRecvError::Empty) => {}
            // A dropped timer still settles the wheel rather than leaving it
            // spinning forever.
            Ok(()) | Err(oneshot::error::TryRecvError::Closed) => {
                self.settle_rx = None;
                if self.engine.settle(&self.options).is_some() {
                    self.mode = AppMode::Winner;
                } else {
                    // Options vanished mid-spin; nothing to present.
                    self.mode = self.previous_tab;
                }
            }
        }
    }

    pub fn dismiss_winner(&mut self) {
        self.engine.dismiss();
        self.mode = self.previous_tab;
    }

    pub fn respin(&mut self) {
        // Settled -> Spinning directly, no dismissal in between.
        self.start_spin();
    }

    // --- nearby search ---

    pub fn is_searching(&self) -> bool {
        self.search_rx.is_some()
    }

    pub fn submit_search(&mut self) {
        if self.search_rx.is_some() {
            // One outstanding request at a time; the UI keeps re-submission
            // disabled while this is pending.
            return;
        }
        let keyword = self.keyword.trim().to_string();
        if keyword.is_empty() {
            return;
        }
        let Some(origin) = self.location else {
            // No position yet: resolve it first, the user retries after.
            self.ensure_location();
            return;
        };

        self.results.clear();
        self.result_selected = 0;
        self.last_error = None;

        let (tx, rx) = oneshot::channel();
        let client = Arc::clone(&self.client);
        tokio::spawn(async move {
            let result = client.search(&keyword, origin).await;
            let _ = tx.send(result);
        });
        self.search_rx = Some(rx);
    }

    pub fn poll_search(&mut self) {
        let Some(ref mut rx) = self.search_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(results)) => {
                self.results = results;
                self.result_selected = 0;
                self.search_rx = None;
            }
            Ok(Err(e)) => {
                self.last_error = Some(format!("搜尋發生錯誤，請檢查網路連線（{e}）"));
                self.search_rx = None;
            }
            Err(oneshot::error::TryRecvError::Empty) => {
                // Still waiting
            }
            Err(oneshot::error::TryRecvError::Closed) => {
                self.last_error = Some("搜尋中斷".to_string());
                self.search_rx = None;
            }
        }
    }

    pub fn add_selected_result(&mut self) {
        if let Some(place) = self.results.get(self.result_selected) {
            let name = place.name.clone();
            self.options.add(&name);
        }
    }

    pub fn result_up(&mut self) {
        if self.result_selected > 0 {
            self.result_selected -= 1;
        }
    }

    pub fn result_down(&mut self) {
        if self.result_selected + 1 < self.results.len() {
            self.result_selected += 1;
        }
    }

    // --- location ---

    pub fn is_locating(&self) -> bool {
        self.locate_rx.is_some()
    }

    /// Resolves the position if none is known yet; reuses the cache.
    pub fn ensure_location(&mut self) {
        if self.location.is_none() {
            self.spawn_locate(false);
        }
    }

    /// Explicit re-locate: drops the cached position and queries again.
    pub fn relocate(&mut self) {
        self.spawn_locate(true);
    }

    fn spawn_locate(&mut self, force: bool) {
        if self.locate_rx.is_some() {
            return;
        }
        let (tx, rx) = oneshot::channel();
        let locator = Arc::clone(&self.locator);
        tokio::spawn(async move {
            let mut locator = locator.lock().await;
            let outcome = if force {
                locator.relocate().await
            } else {
                locator.resolve().await
            };
            let _ = tx.send(outcome);
        });
        self.locate_rx = Some(rx);
    }

    pub fn poll_locate(&mut self) {
        let Some(ref mut rx) = self.locate_rx else {
            return;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.location = Some(outcome.coordinate);
                self.location_warning = outcome
                    .warning
                    .map(|w| format!("{w}，已改用預設位置（台北）"));
                self.locate_rx = None;
            }
            Err(oneshot::error::TryRecvError::Empty) => {}
            Err(oneshot::error::TryRecvError::Closed) => {
                self.locate_rx = None;
            }
        }
    }

    // --- text input ---

    fn active_input(&mut self) -> Option<(&mut String, &mut usize)> {
        match self.mode {
            AppMode::Manual => Some((&mut self.entry, &mut self.entry_cursor)),
            AppMode::Search => Some((&mut self.keyword, &mut self.keyword_cursor)),
            _ => None,
        }
    }

    pub fn input_char(&mut self, c: char) {
        if let Some((input, cursor)) = self.active_input() {
            input.insert(*cursor, c);
            *cursor += c.len_utf8();
        }
    }

    pub fn input_backspace(&mut self) {
        if let Some((input, cursor)) = self.active_input() {
            if *cursor > 0 {
                let prev_char_boundary = input[..*cursor]
                    .char_indices()
                    .next_back()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                input.remove(prev_char_boundary);
                *cursor = prev_char_boundary;
            }
        }
    }

    pub fn input_delete(&mut self) {
        if let Some((input, cursor)) = self.active_input() {
            if *cursor < input.len() {
                input.remove(*cursor);
            }
        }
    }

    pub fn input_left(&mut self) {
        if let Some((input, cursor)) = self.active_input() {
            if *cursor > 0 {
                *cursor = input[..*cursor]
                    .char_indices()
                    .next_back()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
            }
        }
    }

    pub fn input_right(&mut self) {
        if let Some((input, cursor)) = self.active_input() {
            if *cursor < input.len() {
                *cursor = input[*cursor..]
                    .char_indices()
                    .nth(1)
                    .map(|(i, _)| *cursor + i)
                    .unwrap_or(input.len());
            }
        }
    }

    pub fn input_home(&mut self) {
        if let Some((_, cursor)) = self.active_input() {
            *cursor = 0;
        }
    }

    pub fn input_end(&mut self) {
        if let Some((input, cursor)) = self.active_input() {
            *cursor = input.len();
        }
    }

    /// Tab shown as active in the tab bar; stable through spins and the
    /// winner popup.
    pub fn active_tab(&self) -> AppMode {
        match self.mode {
            AppMode::Manual | AppMode::Search => self.mode,
            _ => self.previous_tab,
        }
    }
}
