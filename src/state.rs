use std::path::{Path, PathBuf};

use crate::data::error::DataError;
use crate::data::filter::{filter_equals, selector_options, Selection};
use crate::data::loader::{self, DatasetSchema};
use crate::data::model::Table;
use crate::view;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard's tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Breeds,
    Diet,
    Health,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Breeds, Tab::Diet, Tab::Health];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Breeds => "📊 Breed Stats",
            Tab::Diet => "🍎 Diet Analysis",
            Tab::Health => "🩺 Health Risks",
        }
    }
}

/// Message shown in the top bar, coloured by severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Warning(String),
    Error(String),
}

/// The full UI state, independent of rendering.
///
/// Each dataset slot holds either its table or the load error; a failed
/// slot halts its own tab and leaves the others untouched. Tables are
/// immutable for the session once loaded.
pub struct AppState {
    /// Directory the input CSVs are resolved against.
    pub data_dir: PathBuf,

    pub breeds: Result<Table, DataError>,
    pub diet: Result<Table, DataError>,
    pub health: Result<Table, DataError>,

    /// Choices for the grooming selector, computed once per load.
    pub grooming_options: Vec<Selection>,

    /// Current grooming selection; persists across tab switches.
    pub grooming_selection: Selection,

    pub active_tab: Tab,

    /// Background image found in the data directory, if any.
    pub background: Option<PathBuf>,

    /// Status / error message shown in the top bar.
    pub status: Option<StatusMessage>,
}

impl AppState {
    /// Create the state and load every dataset from `data_dir`.
    pub fn load(data_dir: PathBuf) -> Self {
        let not_loaded = |schema: &DatasetSchema| {
            Err(DataError::FileNotFound {
                path: data_dir.join(schema.file_name),
            })
        };
        let mut state = Self {
            breeds: not_loaded(&loader::BREEDS),
            diet: not_loaded(&loader::DIET),
            health: not_loaded(&loader::HEALTH),
            data_dir,
            grooming_options: vec![Selection::All],
            grooming_selection: Selection::All,
            active_tab: Tab::Breeds,
            background: None,
            status: None,
        };
        state.reload();
        state
    }

    /// Re-read all three datasets and the optional background image.
    ///
    /// The grooming selection is kept when it is still among the
    /// recomputed options, otherwise it falls back to `All`.
    pub fn reload(&mut self) {
        self.status = None;
        self.breeds = load_slot(&self.data_dir, &loader::BREEDS);
        self.diet = load_slot(&self.data_dir, &loader::DIET);
        self.health = load_slot(&self.data_dir, &loader::HEALTH);

        self.grooming_options = match &self.breeds {
            Ok(table) => selector_options(table, view::GROOMING_COLUMN)
                .unwrap_or_else(|_| vec![Selection::All]),
            Err(_) => vec![Selection::All],
        };
        if !self.grooming_options.contains(&self.grooming_selection) {
            self.grooming_selection = Selection::All;
        }

        self.background = find_background(&self.data_dir);
        if self.background.is_none() {
            log::warn!(
                "no background image in {}, running without one",
                self.data_dir.display()
            );
            self.status = Some(StatusMessage::Warning(
                "Background image file not found. Running without background image.".to_string(),
            ));
        }
    }

    /// Point the session at a new data directory and reload.
    pub fn set_data_dir(&mut self, dir: PathBuf) {
        self.data_dir = dir;
        self.reload();
    }

    /// (loaded, visible) breed counts for the top bar, when the breeds
    /// table is available.
    pub fn breed_counts(&self) -> Option<(usize, usize)> {
        let table = self.breeds.as_ref().ok()?;
        let visible = filter_equals(table, view::GROOMING_COLUMN, &self.grooming_selection)
            .map(|t| t.len())
            .unwrap_or(0);
        Some((table.len(), visible))
    }
}

fn load_slot(dir: &Path, schema: &DatasetSchema) -> Result<Table, DataError> {
    match loader::load_dataset(dir, schema) {
        Ok(table) => {
            log::info!(
                "loaded {}: {} rows × {} columns",
                schema.file_name,
                table.len(),
                table.columns().len()
            );
            Ok(table)
        }
        Err(e) => {
            log::error!("failed to load {}: {e}", schema.file_name);
            Err(e)
        }
    }
}

fn find_background(dir: &Path) -> Option<PathBuf> {
    ["background.png", "background.jpg"]
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}
