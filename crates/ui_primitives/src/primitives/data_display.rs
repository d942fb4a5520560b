use super::*;

#[component]
/// Raised panel around one screen section.
pub fn Card(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=class_with("ui-card", layout_class) aria-label=aria_label data-ui-kind="card">
            {children()}
        </section>
    }
}

#[component]
/// Inline text run.
pub fn Text(#[prop(optional)] tone: TextTone, children: Children) -> impl IntoView {
    view! {
        <span class="ui-text" data-ui-kind="text" data-ui-tone=tone.token()>
            {children()}
        </span>
    }
}

#[component]
/// Section title.
pub fn Heading(children: Children) -> impl IntoView {
    view! { <h2 class="ui-heading" data-ui-kind="heading">{children()}</h2> }
}

#[component]
/// Short status label; `title` becomes the native hover text.
pub fn Badge(
    #[prop(default = TextTone::Secondary)] tone: TextTone,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <span class="ui-badge" title=title data-ui-kind="badge" data-ui-tone=tone.token()>
            {children()}
        </span>
    }
}

#[component]
/// Placeholder shown where a list or table has nothing to render.
pub fn EmptyState(children: Children) -> impl IntoView {
    view! {
        <p class="ui-empty-state" role="status" data-ui-kind="empty-state">
            {children()}
        </p>
    }
}

#[component]
/// Table shell; callers supply the `thead`/`tbody` rows.
pub fn DataTable(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <table
            class=class_with("ui-data-table", layout_class)
            aria-label=aria_label
            data-ui-kind="data-table"
        >
            {children()}
        </table>
    }
}
