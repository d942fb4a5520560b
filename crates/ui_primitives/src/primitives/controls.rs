use super::*;

#[component]
/// Push button. `busy` disables it and marks it `aria-busy` while an action is in flight.
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional)] size: ButtonSize,
    #[prop(optional)] button_type: ButtonType,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] tabindex: Option<i32>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let inert = move || disabled.get() || busy.get();

    view! {
        <button
            type=button_type.token()
            class="ui-button"
            aria-label=aria_label
            aria-busy=move || flag(busy.get())
            tabindex=tabindex
            disabled=inert
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-disabled=move || flag(inert())
            on:click=forward(on_click)
        >
            {children()}
        </button>
    }
}

#[component]
/// Label wrapping one control with a title and an optional hint line.
pub fn FieldGroup(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <label class="ui-field-group" data-ui-kind="field-group">
            <span data-ui-slot="title">{title}</span>
            {description.map(|hint| view! { <span data-ui-slot="description">{hint}</span> })}
            <span data-ui-slot="control">{children()}</span>
        </label>
    }
}

#[component]
/// Single-line input.
///
/// `role`, `aria_controls` and `aria_expanded` let a composite widget such as a combobox
/// describe its popup on the input element itself.
pub fn TextField(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_controls: Option<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_invalid: MaybeSignal<bool>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] spellcheck: Option<bool>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    #[prop(optional)] on_focus: Option<Callback<FocusEvent>>,
    #[prop(optional)] on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    view! {
        <input
            class="ui-field"
            type=input_type.unwrap_or("text")
            id=id
            name=name
            placeholder=placeholder
            aria-label=aria_label
            role=role
            aria-controls=aria_controls
            aria-expanded=move || aria_expanded.as_ref().map(|expanded| flag(expanded.get()))
            aria-invalid=move || flag(aria_invalid.get())
            autocomplete=autocomplete
            spellcheck=spellcheck
            required=required
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-kind="text-field"
            on:input=forward(on_input)
            on:keydown=forward(on_keydown)
            on:focus=forward(on_focus)
            on:blur=forward(on_blur)
        />
    }
}

#[component]
/// Multi-line input for free-form notes.
pub fn TextArea(
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = 3)] rows: u32,
    #[prop(into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    view! {
        <textarea
            class="ui-textarea"
            id=id
            rows=rows
            prop:value=move || value.get()
            data-ui-kind="text-area"
            on:input=forward(on_input)
        ></textarea>
    }
}
