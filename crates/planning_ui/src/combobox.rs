//! Searchable combobox view over the core selection reducer.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use leptos::ev::KeyboardEvent;
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use planning_core::{ComboAction, ComboEffect, ComboOption, ComboboxConfig, SelectionState};
use ui_primitives::prelude::*;

static NEXT_COMBOBOX_ID: AtomicUsize = AtomicUsize::new(1);

/// Arms a one-shot timer that runs the callback after the delay.
type ArmTimer = fn(Box<dyn FnOnce()>, Duration) -> Result<TimeoutHandle, String>;

fn browser_timer(fire: Box<dyn FnOnce()>, delay: Duration) -> Result<TimeoutHandle, String> {
    set_timeout_with_handle(fire, delay).map_err(|err| format!("{err:?}"))
}

/// Signals and callbacks one widget instance dispatches through.
#[derive(Clone, Copy)]
struct ComboboxRuntime {
    state: RwSignal<SelectionState>,
    on_change: Callback<String>,
    pending_blur: StoredValue<Option<TimeoutHandle>>,
    arm_timer: ArmTimer,
}

impl ComboboxRuntime {
    fn dispatch(self, action: ComboAction) {
        // Timers can outlive the component; a disposed signal means there is nothing to update.
        let Some(mut next) = self.state.try_get_untracked() else {
            return;
        };

        match next.apply(action) {
            Ok(effects) => {
                if self.state.with_untracked(|current| *current != next) {
                    self.state.set(next);
                }
                for effect in effects {
                    self.run_effect(effect);
                }
            }
            Err(err) => logging::warn!("combobox reducer error: {err}"),
        }
    }

    fn run_effect(self, effect: ComboEffect) {
        match effect {
            ComboEffect::Commit(value) => self.on_change.call(value),
            ComboEffect::ScheduleBlurReset { generation, delay } => {
                self.clear_pending_blur();
                let fire = move || self.dispatch(ComboAction::BlurElapsed { generation });
                match (self.arm_timer)(Box::new(fire), delay) {
                    Ok(handle) => {
                        self.pending_blur.try_set_value(Some(handle));
                    }
                    Err(err) => {
                        logging::warn!("combobox blur timer failed: {err}");
                        self.dispatch(ComboAction::BlurElapsed { generation });
                    }
                }
            }
        }
    }

    fn clear_pending_blur(self) {
        if let Some(Some(handle)) = self.pending_blur.try_update_value(Option::take) {
            handle.clear();
        }
    }
}

/// Maps an input keydown to the reducer action it triggers.
fn key_action(key: &str) -> Option<ComboAction> {
    match key {
        "Enter" => Some(ComboAction::Enter),
        "Escape" => Some(ComboAction::Escape),
        _ => None,
    }
}

/// DOM id for an option row, derived from the listbox id and the option value.
fn option_dom_id(listbox_id: &str, value: &str) -> String {
    let slug: String = value
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '-' })
        .collect();
    format!("{listbox_id}-option-{slug}")
}

#[component]
/// Text input with a filtered candidate list.
///
/// The caller owns `value` and receives every committed key (or an empty string after the
/// clear action) through `on_change`. Typing filters `options` by label, description, and
/// keywords; Enter commits the first match, Escape discards the edit, and losing focus discards
/// it after the configured grace delay unless a row click commits first.
pub fn SearchableCombobox(
    /// Caller-owned selected key.
    #[prop(into)]
    value: MaybeSignal<String>,
    /// Full candidate set, in display order.
    #[prop(into)]
    options: MaybeSignal<Vec<ComboOption>>,
    /// Receives the committed key.
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] empty_text: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] config: Option<ComboboxConfig>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            logging::warn!("combobox config rejected, using defaults: {err}");
            ComboboxConfig::default()
        }
    };
    let placeholder = placeholder
        .or_else(|| config.placeholder.clone())
        .unwrap_or_default();
    let empty_text = empty_text.unwrap_or_else(|| config.empty_text.clone());
    let input_id = id.unwrap_or_else(|| {
        format!(
            "planner-combobox-{}",
            NEXT_COMBOBOX_ID.fetch_add(1, Ordering::Relaxed)
        )
    });
    let listbox_id = format!("{input_id}-listbox");

    let runtime = ComboboxRuntime {
        state: create_rw_signal(SelectionState::with_config(
            options.get_untracked(),
            value.get_untracked(),
            config,
        )),
        on_change,
        pending_blur: store_value(None),
        arm_timer: browser_timer,
    };
    let state = runtime.state;

    create_effect(move |_| runtime.dispatch(ComboAction::SetOptions(options.get())));
    create_effect(move |_| runtime.dispatch(ComboAction::SyncValue(value.get())));
    create_effect(move |_| runtime.dispatch(ComboAction::SetDisabled(disabled.get())));
    on_cleanup(move || runtime.clear_pending_blur());

    let is_open = Signal::derive(move || state.with(SelectionState::is_open));
    let query = Signal::derive(move || state.with(|state| state.query().to_string()));

    let rows = {
        let listbox_id = listbox_id.clone();
        move || {
            let (options, selected) = state.with(|state| {
                (
                    state.filtered().into_iter().cloned().collect::<Vec<_>>(),
                    state.selected_value().to_string(),
                )
            });
            if options.is_empty() {
                let empty_text = empty_text.clone();
                return view! {
                    <ListboxOption layout_class="planner-combobox-empty" disabled=true>
                        {empty_text.clone()}
                    </ListboxOption>
                }
                .into_view();
            }
            options
                .into_iter()
                .map(|option| {
                    let row_id = option_dom_id(&listbox_id, &option.value);
                    let is_selected = option.value == selected;
                    let value = option.value;
                    view! {
                        <ListboxOption
                            id=row_id
                            selected=is_selected
                            on_click=Callback::new(move |_| {
                                runtime.dispatch(ComboAction::Pick(value.clone()))
                            })
                        >
                            <span data-ui-slot="label">{option.label}</span>
                            {option.description.map(|description| view! {
                                <span data-ui-slot="description">{description}</span>
                            })}
                        </ListboxOption>
                    }
                })
                .collect_view()
        }
    };

    view! {
        <div
            class="planner-combobox"
            data-ui-kind="combobox"
            data-ui-open=move || if is_open.get() { "true" } else { "false" }
        >
            <div data-ui-slot="control">
                <TextField
                    id=input_id
                    role="combobox"
                    aria_label=aria_label.unwrap_or_else(|| "Search options".to_string())
                    aria_controls=listbox_id.clone()
                    aria_expanded=is_open
                    placeholder=placeholder
                    autocomplete="off"
                    spellcheck=false
                    value=query
                    disabled=disabled
                    on_input=Callback::new(move |ev| {
                        runtime.dispatch(ComboAction::Input(event_target_value(&ev)))
                    })
                    on_keydown=Callback::new(move |ev: KeyboardEvent| {
                        if let Some(action) = key_action(&ev.key()) {
                            if state.with_untracked(SelectionState::is_open) {
                                ev.prevent_default();
                            }
                            runtime.dispatch(action);
                        }
                    })
                    on_focus=Callback::new(move |_| runtime.dispatch(ComboAction::Focus))
                    on_blur=Callback::new(move |_| runtime.dispatch(ComboAction::Blur))
                />
                <Show when=move || state.with(SelectionState::show_clear) fallback=|| ()>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        ui_slot="clear"
                        aria_label="Clear selection"
                        tabindex=-1
                        on_click=Callback::new(move |_| runtime.dispatch(ComboAction::Clear))
                    >
                        "\u{00d7}"
                    </Button>
                </Show>
            </div>
            <Show when=move || is_open.get() fallback=|| ()>
                {
                    let rows = rows.clone();
                    view! {
                        <Listbox id=listbox_id.clone() aria_label="Matching options">
                            {rows}
                        </Listbox>
                    }
                }
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn unavailable_timer(_: Box<dyn FnOnce()>, _: Duration) -> Result<TimeoutHandle, String> {
        Err("no window".to_string())
    }

    fn fruit_runtime(selected: &str) -> (ComboboxRuntime, RwSignal<Vec<String>>) {
        let committed = create_rw_signal(Vec::<String>::new());
        let runtime = ComboboxRuntime {
            state: create_rw_signal(SelectionState::new(
                vec![ComboOption::new("a", "Apple"), ComboOption::new("b", "Banana")],
                selected,
            )),
            on_change: Callback::new(move |value: String| {
                committed.update(|values| values.push(value))
            }),
            pending_blur: store_value(None),
            arm_timer: unavailable_timer,
        };
        (runtime, committed)
    }

    #[test]
    fn committed_value_reaches_on_change() {
        let owner = create_runtime();
        let (runtime, committed) = fruit_runtime("a");

        runtime.dispatch(ComboAction::Input("ban".to_string()));
        runtime.dispatch(ComboAction::Enter);

        assert_eq!(committed.get_untracked(), vec!["b".to_string()]);
        assert_eq!(
            runtime.state.with_untracked(|state| state.query().to_string()),
            "Banana"
        );
        owner.dispose();
    }

    #[test]
    fn state_signal_is_written_only_on_change() {
        let owner = create_runtime();
        let (runtime, committed) = fruit_runtime("a");
        let writes = Rc::new(Cell::new(0));
        create_effect({
            let writes = Rc::clone(&writes);
            move |_| {
                runtime.state.with(|_| ());
                writes.set(writes.get() + 1);
            }
        });
        assert_eq!(writes.get(), 1);

        runtime.dispatch(ComboAction::Escape);
        runtime.dispatch(ComboAction::Pick("b".to_string()));
        assert_eq!(writes.get(), 1, "no-op actions leave the signal alone");

        runtime.dispatch(ComboAction::Focus);
        runtime.dispatch(ComboAction::Pick("gone".to_string()));
        assert_eq!(writes.get(), 2, "a rejected pick is logged, not written");
        assert!(committed.get_untracked().is_empty());
        owner.dispose();
    }

    #[test]
    fn unavailable_timer_resets_immediately() {
        let owner = create_runtime();
        let (runtime, committed) = fruit_runtime("a");

        runtime.dispatch(ComboAction::Focus);
        runtime.dispatch(ComboAction::Input("ban".to_string()));
        runtime.dispatch(ComboAction::Blur);

        runtime.state.with_untracked(|state| {
            assert!(!state.is_open());
            assert_eq!(state.query(), "Apple");
            assert_eq!(state.selected_value(), "a");
        });
        assert!(committed.get_untracked().is_empty());
        assert!(runtime.pending_blur.with_value(Option::is_none));
        owner.dispose();
    }

    #[test]
    fn only_enter_and_escape_reach_the_reducer() {
        assert_eq!(key_action("Enter"), Some(ComboAction::Enter));
        assert_eq!(key_action("Escape"), Some(ComboAction::Escape));
        assert_eq!(key_action("ArrowDown"), None);
        assert_eq!(key_action("a"), None);
    }

    #[test]
    fn option_ids_are_dom_safe() {
        assert_eq!(
            option_dom_id("planner-combobox-1-listbox", "m/flour 25kg"),
            "planner-combobox-1-listbox-option-m-flour-25kg"
        );
    }
}
