//! Selection reducer for the searchable combobox.
//!
//! [`SelectionState`] is the single source of truth for one widget instance: the text query,
//! whether the candidate list is open, and a mirror of the caller-owned selected value. Every
//! interaction is fed through [`SelectionState::apply`], which mutates the state and returns
//! [`ComboEffect`] intents for the view layer to execute (notify the caller, arm a timer).
//!
//! Blur and option clicks race in the browser: the input loses focus before the click handler
//! of a candidate row runs. Blur therefore only schedules a reset tagged with the current
//! generation; any later transition bumps the generation and the stale reset is dropped.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::ComboboxConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One selectable candidate.
pub struct ComboOption {
    /// Unique key reported to the caller on commit.
    pub value: String,
    /// Display text, also written into the input on commit.
    pub label: String,
    /// Secondary line rendered under the label; searchable.
    #[serde(default)]
    pub description: Option<String>,
    /// Extra search terms that are never rendered.
    #[serde(default)]
    pub keywords: Option<String>,
}

impl ComboOption {
    /// Creates an option with only a value and a label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            keywords: None,
        }
    }

    /// Sets the description line.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the hidden search keywords.
    pub fn with_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.keywords = Some(keywords.into());
        self
    }

    fn haystack(&self) -> String {
        let mut haystack = self.label.clone();
        for extra in [&self.description, &self.keywords].into_iter().flatten() {
            haystack.push(' ');
            haystack.push_str(extra);
        }
        haystack.to_lowercase()
    }
}

/// Returns the options whose label, description, or keywords contain `query`.
///
/// Matching is a case-insensitive substring test against the trimmed query. An empty query keeps
/// every option. Original order is preserved; there is no ranking.
pub fn filter_options<'a>(options: &'a [ComboOption], query: &str) -> Vec<&'a ComboOption> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return options.iter().collect();
    }
    options
        .iter()
        .filter(|option| option.haystack().contains(&needle))
        .collect()
}

/// Label of the option keyed by `value`, if any.
pub fn label_for<'a>(options: &'a [ComboOption], value: &str) -> Option<&'a str> {
    if value.is_empty() {
        return None;
    }
    options
        .iter()
        .find(|option| option.value == value)
        .map(|option| option.label.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Interaction and sync events accepted by [`SelectionState::apply`].
pub enum ComboAction {
    /// The input gained focus.
    Focus,
    /// The input text changed.
    Input(String),
    /// Enter was pressed in the input.
    Enter,
    /// Escape was pressed in the input.
    Escape,
    /// The input lost focus.
    Blur,
    /// The blur grace timer armed by [`ComboEffect::ScheduleBlurReset`] fired.
    BlurElapsed {
        /// Generation captured when the timer was armed.
        generation: u64,
    },
    /// A candidate row was clicked.
    Pick(String),
    /// The clear affordance was used.
    Clear,
    /// The caller supplied a new option set.
    SetOptions(Vec<ComboOption>),
    /// The caller's selected value changed.
    SyncValue(String),
    /// The caller's disabled flag changed.
    SetDisabled(bool),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`SelectionState::apply`].
pub enum ComboEffect {
    /// Notify the caller that the selected value is now this key (empty when cleared).
    Commit(String),
    /// Dispatch [`ComboAction::BlurElapsed`] with `generation` after `delay`.
    ScheduleBlurReset {
        /// Generation the reset is valid for.
        generation: u64,
        /// Grace delay before the reset.
        delay: Duration,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Reducer failures. None of these reach the widget's caller.
pub enum ComboError {
    /// A row was picked whose value is not in the current option set.
    #[error("picked option `{0}` is not in the current option set")]
    UnknownOption(String),
}

#[derive(Debug, Clone, PartialEq)]
/// Authoritative state of one searchable combobox.
pub struct SelectionState {
    query: String,
    open: bool,
    selected_value: String,
    options: Vec<ComboOption>,
    disabled: bool,
    generation: u64,
    config: ComboboxConfig,
}

impl SelectionState {
    /// Creates a closed state seeded from the caller's current value.
    pub fn new(options: Vec<ComboOption>, selected_value: impl Into<String>) -> Self {
        Self::with_config(options, selected_value, ComboboxConfig::default())
    }

    /// Same as [`SelectionState::new`] with explicit tunables.
    pub fn with_config(
        options: Vec<ComboOption>,
        selected_value: impl Into<String>,
        config: ComboboxConfig,
    ) -> Self {
        let mut state = Self {
            query: String::new(),
            open: false,
            selected_value: selected_value.into(),
            options,
            disabled: false,
            generation: 0,
            config,
        };
        state.settle();
        state
    }

    /// Current input text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the candidate list is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Mirror of the caller-owned selected value.
    pub fn selected_value(&self) -> &str {
        &self.selected_value
    }

    /// Option matching the selected value, if it is in the current set.
    pub fn selected_option(&self) -> Option<&ComboOption> {
        self.options
            .iter()
            .find(|option| !self.selected_value.is_empty() && option.value == self.selected_value)
    }

    /// Current option set.
    pub fn options(&self) -> &[ComboOption] {
        &self.options
    }

    /// Whether the widget is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Generation used to validate pending blur resets.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Widget tunables.
    pub fn config(&self) -> &ComboboxConfig {
        &self.config
    }

    /// Options matching the current query, in original order.
    pub fn filtered(&self) -> Vec<&ComboOption> {
        filter_options(&self.options, &self.query)
    }

    /// Whether the clear affordance should be rendered.
    pub fn show_clear(&self) -> bool {
        !self.disabled && !self.query.is_empty()
    }

    /// Applies one action and returns the effects the view layer must execute.
    ///
    /// # Errors
    ///
    /// Returns [`ComboError::UnknownOption`] when a picked value is no longer in the option set;
    /// the state is left untouched in that case.
    pub fn apply(&mut self, action: ComboAction) -> Result<Vec<ComboEffect>, ComboError> {
        let mut effects = Vec::new();
        match action {
            ComboAction::Focus => {
                if !self.disabled {
                    self.supersede();
                    self.open = true;
                }
            }
            ComboAction::Input(text) => {
                self.supersede();
                self.query = text;
                self.open = true;
            }
            ComboAction::Enter => {
                let first = self.filtered().first().map(|option| (*option).clone());
                if let (true, Some(first)) = (self.open, first) {
                    self.supersede();
                    effects.push(self.commit(first));
                }
            }
            ComboAction::Escape => {
                if self.open {
                    self.supersede();
                    self.settle();
                }
            }
            ComboAction::Blur => effects.push(ComboEffect::ScheduleBlurReset {
                generation: self.generation,
                delay: self.config.blur_grace(),
            }),
            ComboAction::BlurElapsed { generation } => {
                if generation == self.generation {
                    self.supersede();
                    self.settle();
                }
            }
            ComboAction::Pick(value) => {
                if self.open {
                    let option = self
                        .options
                        .iter()
                        .find(|option| option.value == value)
                        .cloned()
                        .ok_or(ComboError::UnknownOption(value))?;
                    self.supersede();
                    effects.push(self.commit(option));
                }
            }
            ComboAction::Clear => {
                if !self.disabled && !self.query.is_empty() {
                    self.supersede();
                    self.selected_value.clear();
                    self.query.clear();
                    self.open = false;
                    effects.push(ComboEffect::Commit(String::new()));
                }
            }
            ComboAction::SetOptions(options) => {
                self.options = options;
                if !self.open {
                    self.settle();
                }
            }
            ComboAction::SyncValue(value) => {
                self.selected_value = value;
                if !self.open {
                    self.settle();
                }
            }
            ComboAction::SetDisabled(disabled) => {
                self.disabled = disabled;
                if disabled && self.open {
                    self.supersede();
                    self.settle();
                }
            }
        }
        Ok(effects)
    }

    fn commit(&mut self, option: ComboOption) -> ComboEffect {
        self.selected_value = option.value.clone();
        self.query = option.label;
        self.open = false;
        ComboEffect::Commit(option.value)
    }

    /// Closes the list and restores the committed label (or empty when unmatched).
    fn settle(&mut self) {
        self.query = label_for(&self.options, &self.selected_value)
            .map(str::to_string)
            .unwrap_or_default();
        self.open = false;
    }

    fn supersede(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn fruit() -> Vec<ComboOption> {
        vec![
            ComboOption::new("a", "Apple"),
            ComboOption::new("b", "Banana"),
        ]
    }

    fn materials() -> Vec<ComboOption> {
        vec![
            ComboOption::new("m-1", "Wheat flour")
                .with_description("Type 550")
                .with_keywords("grain bakery"),
            ComboOption::new("m-2", "Cane sugar").with_keywords("sweetener"),
            ComboOption::new("m-3", "Sea salt").with_description("Fine grain"),
        ]
    }

    fn values(options: &[&ComboOption]) -> Vec<String> {
        options.iter().map(|option| option.value.clone()).collect()
    }

    #[test]
    fn seeds_query_from_selected_label() {
        let state = SelectionState::new(fruit(), "b");
        assert_eq!(state.query(), "Banana");
        assert!(!state.is_open());
    }

    #[test]
    fn unmatched_selected_value_seeds_empty_query() {
        let state = SelectionState::new(fruit(), "zzz");
        assert_eq!(state.query(), "");
        assert_eq!(state.selected_option(), None);
    }

    #[test]
    fn typing_then_enter_commits_first_match() {
        let mut state = SelectionState::new(fruit(), "b");

        let effects = state.apply(ComboAction::Input("ap".to_string())).unwrap();
        assert!(effects.is_empty());
        assert!(state.is_open());
        assert_eq!(values(&state.filtered()), vec!["a".to_string()]);

        let effects = state.apply(ComboAction::Enter).unwrap();
        assert_eq!(effects, vec![ComboEffect::Commit("a".to_string())]);
        assert_eq!(state.query(), "Apple");
        assert_eq!(state.selected_value(), "a");
        assert!(!state.is_open());
    }

    #[test]
    fn escape_discards_typed_text() {
        let mut state = SelectionState::new(fruit(), "b");
        state.apply(ComboAction::Focus).unwrap();
        state.apply(ComboAction::Input("app".to_string())).unwrap();

        let effects = state.apply(ComboAction::Escape).unwrap();
        assert!(effects.is_empty());
        assert_eq!(state.query(), "Banana");
        assert_eq!(state.selected_value(), "b");
        assert!(!state.is_open());
    }

    #[test]
    fn enter_with_no_matches_is_noop() {
        let mut state = SelectionState::new(fruit(), "");
        state.apply(ComboAction::Input("kiwi".to_string())).unwrap();

        assert!(state.filtered().is_empty());
        assert!(state.apply(ComboAction::Enter).unwrap().is_empty());
        assert!(state.is_open());
        assert_eq!(state.query(), "kiwi");
    }

    #[test]
    fn enter_and_escape_while_closed_do_nothing() {
        let mut state = SelectionState::new(fruit(), "a");
        let before = state.clone();

        assert!(state.apply(ComboAction::Enter).unwrap().is_empty());
        assert!(state.apply(ComboAction::Escape).unwrap().is_empty());
        assert_eq!(state, before);
    }

    #[test]
    fn blur_reset_restores_label_when_generation_is_current() {
        let mut state = SelectionState::new(fruit(), "a");
        state.apply(ComboAction::Focus).unwrap();
        state.apply(ComboAction::Input("ban".to_string())).unwrap();

        let effects = state.apply(ComboAction::Blur).unwrap();
        let [ComboEffect::ScheduleBlurReset { generation, delay }] = effects.as_slice() else {
            panic!("expected a single blur reset, got {effects:?}");
        };
        assert_eq!(*delay, Duration::from_millis(120));
        assert_eq!(*generation, state.generation());
        assert!(state.is_open(), "blur waits for the grace delay");

        state
            .apply(ComboAction::BlurElapsed {
                generation: *generation,
            })
            .unwrap();
        assert_eq!(state.query(), "Apple");
        assert!(!state.is_open());
    }

    #[test]
    fn click_during_blur_grace_wins_over_stale_reset() {
        let mut state = SelectionState::new(fruit(), "a");
        state.apply(ComboAction::Input("b".to_string())).unwrap();

        let effects = state.apply(ComboAction::Blur).unwrap();
        let [ComboEffect::ScheduleBlurReset { generation, .. }] = effects.as_slice() else {
            panic!("expected a single blur reset, got {effects:?}");
        };
        let stale = *generation;

        let effects = state.apply(ComboAction::Pick("b".to_string())).unwrap();
        assert_eq!(effects, vec![ComboEffect::Commit("b".to_string())]);

        let after_pick = state.clone();
        assert!(state
            .apply(ComboAction::BlurElapsed { generation: stale })
            .unwrap()
            .is_empty());
        assert_eq!(state, after_pick);
        assert_eq!(state.query(), "Banana");
    }

    #[test]
    fn blur_reset_uses_the_configured_grace_delay() {
        let config = ComboboxConfig {
            blur_grace_ms: 300,
            ..ComboboxConfig::default()
        };
        let mut state = SelectionState::with_config(fruit(), "a", config.clone());
        assert_eq!(state.config(), &config);

        let before = state.generation();
        state.apply(ComboAction::Focus).unwrap();
        assert_eq!(state.generation(), before.wrapping_add(1));

        assert_eq!(
            state.apply(ComboAction::Blur).unwrap(),
            vec![ComboEffect::ScheduleBlurReset {
                generation: state.generation(),
                delay: Duration::from_millis(300),
            }]
        );
    }

    #[test]
    fn refocus_before_timer_keeps_edit() {
        let mut state = SelectionState::new(fruit(), "a");
        state.apply(ComboAction::Input("ban".to_string())).unwrap();
        let effects = state.apply(ComboAction::Blur).unwrap();
        let [ComboEffect::ScheduleBlurReset { generation, .. }] = effects.as_slice() else {
            panic!("expected a single blur reset, got {effects:?}");
        };
        let stale = *generation;

        state.apply(ComboAction::Focus).unwrap();
        state
            .apply(ComboAction::BlurElapsed { generation: stale })
            .unwrap();

        assert!(state.is_open());
        assert_eq!(state.query(), "ban");
    }

    #[test]
    fn pick_unknown_option_errors_without_mutation() {
        let mut state = SelectionState::new(fruit(), "a");
        state.apply(ComboAction::Focus).unwrap();
        let before = state.clone();

        assert_eq!(
            state.apply(ComboAction::Pick("gone".to_string())),
            Err(ComboError::UnknownOption("gone".to_string()))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn pick_while_closed_is_ignored() {
        let mut state = SelectionState::new(fruit(), "a");
        assert!(state
            .apply(ComboAction::Pick("b".to_string()))
            .unwrap()
            .is_empty());
        assert_eq!(state.selected_value(), "a");
    }

    #[test]
    fn clear_commits_empty_value() {
        let mut state = SelectionState::new(fruit(), "a");
        assert!(state.show_clear());

        let effects = state.apply(ComboAction::Clear).unwrap();
        assert_eq!(effects, vec![ComboEffect::Commit(String::new())]);
        assert_eq!(state.query(), "");
        assert_eq!(state.selected_value(), "");
        assert!(!state.is_open());
        assert!(!state.show_clear());
        assert!(state.apply(ComboAction::Clear).unwrap().is_empty());
    }

    #[test]
    fn disabled_widget_ignores_focus_and_clear() {
        let mut state = SelectionState::new(fruit(), "a");
        state.apply(ComboAction::SetDisabled(true)).unwrap();
        assert!(state.is_disabled());

        state.apply(ComboAction::Focus).unwrap();
        assert!(!state.is_open());
        assert!(!state.show_clear());
        assert!(state.apply(ComboAction::Clear).unwrap().is_empty());
        assert_eq!(state.selected_value(), "a");
    }

    #[test]
    fn disabling_while_open_discards_edit() {
        let mut state = SelectionState::new(fruit(), "a");
        state.apply(ComboAction::Input("ban".to_string())).unwrap();
        state.apply(ComboAction::SetDisabled(true)).unwrap();

        assert!(!state.is_open());
        assert_eq!(state.query(), "Apple");
    }

    #[test]
    fn new_options_while_open_refilter_with_existing_query() {
        let mut state = SelectionState::new(fruit(), "");
        state.apply(ComboAction::Input("an".to_string())).unwrap();
        assert_eq!(values(&state.filtered()), vec!["b".to_string()]);

        state
            .apply(ComboAction::SetOptions(vec![
                ComboOption::new("c", "Mango"),
                ComboOption::new("d", "Cherry"),
                ComboOption::new("e", "Orange"),
            ]))
            .unwrap();
        assert_eq!(state.query(), "an");
        assert!(state.is_open());
        assert_eq!(state.options().len(), 3);
        assert_eq!(
            values(&state.filtered()),
            vec!["c".to_string(), "e".to_string()]
        );
    }

    #[test]
    fn new_options_while_closed_reseed_query() {
        let mut state = SelectionState::new(fruit(), "a");
        state
            .apply(ComboAction::SetOptions(vec![ComboOption::new("a", "Green apple")]))
            .unwrap();
        assert_eq!(state.query(), "Green apple");

        state
            .apply(ComboAction::SetOptions(vec![ComboOption::new("b", "Banana")]))
            .unwrap();
        assert_eq!(state.query(), "");
    }

    #[test]
    fn external_value_change_reseeds_only_while_closed() {
        let mut state = SelectionState::new(fruit(), "a");
        state.apply(ComboAction::SyncValue("b".to_string())).unwrap();
        assert_eq!(state.query(), "Banana");

        state.apply(ComboAction::Input("ap".to_string())).unwrap();
        state.apply(ComboAction::SyncValue("a".to_string())).unwrap();
        assert_eq!(state.query(), "ap");
        assert_eq!(state.selected_value(), "a");
    }

    #[test]
    fn empty_query_keeps_full_list_in_order() {
        let options = materials();
        assert_eq!(
            values(&filter_options(&options, "   ")),
            vec!["m-1".to_string(), "m-2".to_string(), "m-3".to_string()]
        );
    }

    #[test]
    fn filter_matches_description_and_keywords_case_insensitively() {
        let options = materials();
        assert_eq!(
            values(&filter_options(&options, "GRAIN")),
            vec!["m-1".to_string(), "m-3".to_string()]
        );
        assert_eq!(
            values(&filter_options(&options, " Sweet ")),
            vec!["m-2".to_string()]
        );
        assert_eq!(
            values(&filter_options(&options, "flour type")),
            vec!["m-1".to_string()]
        );
    }

    #[test]
    fn every_substring_of_a_searchable_field_matches() {
        let options = materials();
        for option in &options {
            let fields = [
                Some(option.label.as_str()),
                option.description.as_deref(),
                option.keywords.as_deref(),
            ];
            for field in fields.into_iter().flatten() {
                for start in 0..field.len() {
                    for end in start + 1..=field.len() {
                        let needle = field[start..end].to_uppercase();
                        assert!(
                            filter_options(&options, &needle)
                                .iter()
                                .any(|hit| hit.value == option.value),
                            "`{needle}` should match {}",
                            option.value
                        );
                    }
                }
            }
        }
    }
}
