use super::*;

#[component]
/// Modal dialog rendered over a backdrop while `open` is true.
///
/// Clicking the backdrop or pressing Escape inside the dialog calls `on_close`; the caller owns
/// the open flag.
pub fn Dialog(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(into)] id: String,
    #[prop(into)] title: String,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let title_id = format!("{id}-title");
    let close = move || {
        if let Some(on_close) = on_close {
            on_close.call(());
        }
    };

    move || {
        open.get().then(|| {
            view! {
                <div class="ui-dialog-backdrop" on:click=move |_| close()>
                    <div
                        class="ui-dialog"
                        id=id.clone()
                        role="dialog"
                        aria-modal="true"
                        aria-labelledby=title_id.clone()
                        data-ui-kind="dialog"
                        on:click=|ev: MouseEvent| ev.stop_propagation()
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Escape" {
                                ev.prevent_default();
                                close();
                            }
                        }
                    >
                        <h2 id=title_id.clone() data-ui-slot="title">{title.clone()}</h2>
                        <div data-ui-slot="body">{children()}</div>
                    </div>
                </div>
            }
        })
    }
}

#[component]
/// Hint bubble shown on hover or focus of its children.
pub fn Tooltip(#[prop(into)] text: String, children: Children) -> impl IntoView {
    view! {
        <span class="ui-tooltip" data-ui-kind="tooltip">
            <span data-ui-slot="anchor">{children()}</span>
            <span role="tooltip" data-ui-slot="bubble">{text}</span>
        </span>
    }
}

#[component]
/// Popup list with `role="listbox"`.
pub fn Listbox(
    #[prop(into)] id: String,
    #[prop(into)] aria_label: String,
    children: Children,
) -> impl IntoView {
    view! {
        <ul class="ui-listbox" id=id role="listbox" aria-label=aria_label data-ui-kind="listbox">
            {children()}
        </ul>
    }
}

#[component]
/// One row of a [`Listbox`]. Clicks on a disabled row are swallowed.
pub fn ListboxOption(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] selected: bool,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let on_click = on_click.filter(|_| !disabled);

    view! {
        <li
            class=class_with("ui-listbox-option", layout_class)
            id=id
            role="option"
            aria-selected=flag(selected)
            aria-disabled=flag(disabled)
            data-ui-kind="listbox-option"
            on:click=forward(on_click)
        >
            {children()}
        </li>
    }
}
