use crate::errors::{LoadError, ViewError};
use crate::models::{Dataset, ViewResponse, ViewStatus};
use crate::render::Grid;
use chrono::{DateTime, Local};
use tracing::{debug, error, info};

/// A timeframe link in the page nav. The key is emitted as the
/// `data-timeframe` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    pub timeframe: String,
    pub label: String,
    pub active: bool,
}

impl Selector {
    fn new(timeframe: &str) -> Self {
        Self {
            timeframe: timeframe.to_string(),
            label: title_case(timeframe),
            active: false,
        }
    }
}

#[derive(Debug, Clone)]
pub enum LoadStatus {
    Loading,
    Ready {
        dataset: Dataset,
        loaded_at: DateTime<Local>,
    },
    Failed {
        message: String,
    },
}

/// Owns the page state: the loaded dataset, the selected timeframe, the
/// selector markers and the card grid.
#[derive(Debug, Clone)]
pub struct Dashboard {
    status: LoadStatus,
    selected: String,
    selectors: Vec<Selector>,
    grid: Grid,
}

impl Dashboard {
    pub fn new<S: AsRef<str>>(timeframes: &[S], default: &str) -> Self {
        let mut selectors: Vec<Selector> = timeframes
            .iter()
            .map(|key| Selector::new(key.as_ref()))
            .collect();
        for selector in &mut selectors {
            selector.active = selector.timeframe == default;
        }

        let mut grid = Grid::default();
        grid.show_loading();

        Self {
            status: LoadStatus::Loading,
            selected: default.to_string(),
            selectors,
            grid,
        }
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        match &self.status {
            LoadStatus::Ready { dataset, .. } => Some(dataset),
            _ => None,
        }
    }

    pub fn finish_load(&mut self, result: Result<Dataset, LoadError>) {
        match result {
            Ok(dataset) => {
                info!(activities = dataset.len(), "activity data loaded");
                self.status = LoadStatus::Ready {
                    dataset,
                    loaded_at: Local::now(),
                };
                self.redraw();
            }
            Err(err) => {
                error!("could not fetch activity data: {err}");
                let message = format!("Could not load data: {err}");
                self.grid.show_error(&message);
                self.status = LoadStatus::Failed { message };
            }
        }
    }

    /// Switches the view to `key`. Returns `Ok(false)` when `key` is already
    /// selected; nothing is touched in that case.
    pub fn select_timeframe(&mut self, key: &str) -> Result<bool, ViewError> {
        if !self.selectors.iter().any(|s| s.timeframe == key) {
            return Err(ViewError::UnknownTimeframe(key.to_string()));
        }
        if key == self.selected {
            debug!("timeframe {key} already selected");
            return Ok(false);
        }

        for selector in &mut self.selectors {
            selector.active = false;
        }
        if let Some(selector) = self.selectors.iter_mut().find(|s| s.timeframe == key) {
            selector.active = true;
        }

        info!(from = %self.selected, to = %key, "timeframe switched");
        self.selected = key.to_string();
        self.redraw();
        Ok(true)
    }

    pub fn view(&self, changed: bool) -> ViewResponse {
        let (status, loaded_at) = match &self.status {
            LoadStatus::Loading => (ViewStatus::Loading, None),
            LoadStatus::Ready { loaded_at, .. } => (ViewStatus::Ready, Some(loaded_at.to_rfc3339())),
            LoadStatus::Failed { .. } => (ViewStatus::Failed, None),
        };
        ViewResponse {
            timeframe: self.selected.clone(),
            status,
            changed,
            loaded_at,
            grid: self.grid.content().to_string(),
            cards: self.grid.cards().to_vec(),
        }
    }

    // Placeholders stay up until data is ready.
    fn redraw(&mut self) {
        if let LoadStatus::Ready { dataset, .. } = &self.status {
            self.grid.render(dataset, &self.selected);
        }
    }
}

fn title_case(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
