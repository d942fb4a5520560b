use super::*;

#[component]
/// Column of children separated by `gap`.
pub fn Stack(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] padding: LayoutPadding,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=class_with("ui-stack", layout_class)
            data-ui-kind="stack"
            data-ui-gap=gap.token()
            data-ui-padding=padding.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Wrapping row of children, vertically centred.
pub fn Cluster(
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] justify: LayoutJustify,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-cluster" data-ui-kind="cluster" data-ui-gap=gap.token() data-ui-justify=justify.token()>
            {children()}
        </div>
    }
}
