//! View state shared by every command.
//!
//! `DashboardState` is an immutable value; each [`DashboardAction`] produces
//! a new state via [`DashboardState::reduce`]. Commands build the initial
//! state from the dataset and the command-line flags, then read the
//! selected layer and events through it.

use frontline_data::filter::{filter_by_date_range, filter_events_by_date_range};
use frontline_data::layer::extract_layer_with;
use frontline_data::ProcessingConfig;
use frontline_types::{DailyArea, DateRange, LayerSeries, LayerType, MilitaryEvent};

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    /// Currently selected range; `None` means no filtering.
    pub date_range: Option<DateRange>,
    /// Span of the whole export.
    pub full_date_range: Option<DateRange>,
    /// Event names chosen for the overlay.
    pub selected_events: Vec<String>,
    /// Whether charts show the interpolated series or the raw snapshots.
    pub show_interpolation: bool,
    pub highlighted_event: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    SetDateRange(DateRange),
    /// Also resets the selected range to the full span.
    SetFullDateRange(DateRange),
    /// Add the event to the selection, or remove it if already selected.
    ToggleEvent(String),
    SetSelectedEvents(Vec<String>),
    ToggleInterpolation,
    SetHighlightedEvent(Option<String>),
}

impl Default for DashboardState {
    fn default() -> Self {
        DashboardState {
            date_range: None,
            full_date_range: None,
            selected_events: Vec::new(),
            show_interpolation: true,
            highlighted_event: None,
        }
    }
}

impl DashboardState {
    pub fn reduce(self, action: DashboardAction) -> DashboardState {
        match action {
            DashboardAction::SetDateRange(range) => DashboardState {
                date_range: Some(range),
                ..self
            },
            DashboardAction::SetFullDateRange(range) => DashboardState {
                date_range: Some(range),
                full_date_range: Some(range),
                ..self
            },
            DashboardAction::ToggleEvent(name) => {
                let mut selected = self.selected_events;
                if let Some(pos) = selected.iter().position(|e| *e == name) {
                    selected.remove(pos);
                } else {
                    selected.push(name);
                }
                DashboardState {
                    selected_events: selected,
                    ..self
                }
            }
            DashboardAction::SetSelectedEvents(names) => DashboardState {
                selected_events: names,
                ..self
            },
            DashboardAction::ToggleInterpolation => DashboardState {
                show_interpolation: !self.show_interpolation,
                ..self
            },
            DashboardAction::SetHighlightedEvent(name) => DashboardState {
                highlighted_event: name,
                ..self
            },
        }
    }

    /// Apply a sequence of actions in order.
    pub fn reduce_all<I>(self, actions: I) -> DashboardState
    where
        I: IntoIterator<Item = DashboardAction>,
    {
        actions.into_iter().fold(self, DashboardState::reduce)
    }

    /// Restrict `areas` to the selected range and extract one layer.
    pub fn select_layer(
        &self,
        areas: &[DailyArea],
        layer: &LayerType,
        config: &ProcessingConfig,
    ) -> LayerSeries {
        match &self.date_range {
            Some(range) => extract_layer_with(&filter_by_date_range(areas, range), layer, config),
            None => extract_layer_with(areas, layer, config),
        }
    }

    /// Events inside the selected range, regardless of selection.
    pub fn events_in_range(&self, events: &[MilitaryEvent]) -> Vec<MilitaryEvent> {
        match &self.date_range {
            Some(range) => filter_events_by_date_range(events, range),
            None => events.to_vec(),
        }
    }

    /// Selected events inside the selected range.
    pub fn visible_events(&self, events: &[MilitaryEvent]) -> Vec<MilitaryEvent> {
        self.events_in_range(events)
            .into_iter()
            .filter(|e| self.selected_events.contains(&e.name))
            .collect()
    }
}
