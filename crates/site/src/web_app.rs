use leptos::logging;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use planning_core::{calc_materials, format_quantity, sum_material_rows, Catalog, MaterialRow};
use planning_ui::{
    DurationBadge, LoginCredentials, LoginScreen, MaterialBreakdown, SearchableCombobox,
    UpdatedAtBadge,
};
use ui_primitives::prelude::*;

use crate::catalog::{demo_catalog, item_picker_config};

#[derive(Clone, Debug, PartialEq)]
struct PlanEntry {
    item_id: String,
    amount: f64,
    note: String,
}

/// Parses the amount field; only finite, positive values are plannable.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Material totals for every entry of the plan, merged by material and unit.
fn plan_totals(entries: &[PlanEntry], catalog: &Catalog) -> Vec<MaterialRow> {
    let materials = catalog.material_map();
    sum_material_rows(entries.iter().flat_map(|entry| {
        catalog
            .item(&entry.item_id)
            .map(|item| calc_materials(item, entry.amount, &materials))
            .unwrap_or_default()
    }))
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Production Planner" />
        <Meta name="description" content="Plan production runs and the materials they consume." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=|| view! { <PlannerEntry /> } />
                    <Route path="/items/:id" view=ItemRoute />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Login gate in front of the planner page.
pub fn PlannerEntry(#[prop(optional, into)] initial_item: Option<String>) -> impl IntoView {
    let session = create_rw_signal(None::<String>);
    let initial_item = initial_item.unwrap_or_default();

    // The demo accepts any non-blank credentials.
    let on_login = Callback::new(move |credentials: LoginCredentials| {
        logging::log!("planner session opened for {}", credentials.user_id);
        session.set(Some(credentials.user_id));
    });

    view! {
        <Show
            when=move || session.with(Option::is_some)
            fallback=move || view! { <LoginScreen on_submit=on_login title="Production Planner" /> }
        >
            <PlannerPage
                user_id=Signal::derive(move || session.get().unwrap_or_default())
                initial_item=initial_item.clone()
                on_logout=Callback::new(move |_| session.set(None))
            />
        </Show>
    }
}

#[component]
fn ItemRoute() -> impl IntoView {
    let params = use_params_map();
    let item_id = params.with_untracked(|map| map.get("id").cloned().unwrap_or_default());

    view! { <PlannerEntry initial_item=item_id /> }
}

#[component]
fn PlannerPage(
    #[prop(into)] user_id: Signal<String>,
    initial_item: String,
    on_logout: Callback<()>,
) -> impl IntoView {
    let catalog = store_value(demo_catalog());
    let picker_config = item_picker_config();

    let known_initial = catalog.with_value(|catalog| catalog.item(&initial_item).is_some());
    if !initial_item.is_empty() && !known_initial {
        logging::warn!("unknown item in link: {initial_item}");
    }
    let selected = create_rw_signal(if known_initial {
        initial_item
    } else {
        String::new()
    });
    let amount_text = create_rw_signal("1".to_string());
    let notes = create_rw_signal(String::new());
    let plan = create_rw_signal(Vec::<PlanEntry>::new());
    let review_open = create_rw_signal(false);

    let item_options = catalog.with_value(Catalog::item_options);
    let material_map = catalog.with_value(Catalog::material_map);
    let selected_item =
        Signal::derive(move || catalog.with_value(|catalog| catalog.item(&selected.get()).cloned()));
    let amount = Signal::derive(move || amount_text.with(|raw| parse_amount(raw)));
    let totals =
        create_memo(move |_| plan.with(|entries| catalog.with_value(|catalog| plan_totals(entries, catalog))));

    let add_to_plan = Callback::new(move |_| {
        let item_id = selected.get_untracked();
        match amount.get_untracked() {
            Some(amount) if !item_id.is_empty() => {
                let note = notes.get_untracked().trim().to_string();
                plan.update(|entries| entries.push(PlanEntry { item_id, amount, note }));
                notes.set(String::new());
            }
            _ => logging::warn!("plan entry rejected: item `{item_id}` amount invalid or missing"),
        }
    });

    view! {
        <Stack gap=LayoutGap::Lg padding=LayoutPadding::Md layout_class="planner-page">
            <Cluster justify=LayoutJustify::Between>
                <Heading>"Production plan"</Heading>
                <Cluster gap=LayoutGap::Sm>
                    <Text tone=TextTone::Secondary>{move || user_id.get()}</Text>
                    <Button
                        variant=ButtonVariant::Quiet
                        on_click=Callback::new(move |_| on_logout.call(()))
                    >
                        "Sign out"
                    </Button>
                </Cluster>
            </Cluster>

            <Card aria_label="Plan entry">
                <Stack>
                    <FieldGroup title="Item">
                        <SearchableCombobox
                            value=selected
                            options=item_options
                            on_change=Callback::new(move |value: String| selected.set(value))
                            config=picker_config
                            id="planner-item"
                            aria_label="Item"
                        />
                    </FieldGroup>
                    <FieldGroup title="Amount" description="Units to produce">
                        <TextField
                            id="planner-amount"
                            input_type="number"
                            value=amount_text
                            aria_invalid=Signal::derive(move || amount.get().is_none())
                            on_input=Callback::new(move |ev| amount_text.set(event_target_value(&ev)))
                        />
                    </FieldGroup>
                    <FieldGroup title="Notes" description="Stored with the next plan entry">
                        <TextArea
                            id="planner-notes"
                            rows=3
                            value=notes
                            on_input=Callback::new(move |ev| notes.set(event_target_value(&ev)))
                        />
                    </FieldGroup>
                    {move || {
                        selected_item
                            .get()
                            .map(|item| {
                                view! {
                                    <Cluster gap=LayoutGap::Sm>
                                        <DurationBadge length=item.production_length density=item.density />
                                        <UpdatedAtBadge value=item.updated_at.clone() />
                                        {item.note.clone().map(|note| view! { <Text tone=TextTone::Secondary>{note}</Text> })}
                                    </Cluster>
                                }
                            })
                    }}
                    <MaterialBreakdown
                        item=selected_item
                        amount=Signal::derive(move || amount.get().unwrap_or(0.0))
                        materials=material_map
                    />
                    <Cluster justify=LayoutJustify::End>
                        <Button
                            variant=ButtonVariant::Primary
                            disabled=Signal::derive(move || {
                                selected.with(String::is_empty) || amount.get().is_none()
                            })
                            on_click=add_to_plan
                        >
                            "Add to plan"
                        </Button>
                        <Button
                            disabled=Signal::derive(move || plan.with(Vec::is_empty))
                            on_click=Callback::new(move |_| review_open.set(true))
                        >
                            {move || format!("Review plan ({})", plan.with(Vec::len))}
                        </Button>
                    </Cluster>
                </Stack>
            </Card>

            <Dialog
                open=review_open
                title="Plan totals"
                id="planner-review"
                on_close=Callback::new(move |_| review_open.set(false))
            >
                <Stack>
                    <ul class="planner-entries">
                        {move || {
                            plan.get()
                                .into_iter()
                                .map(|entry| {
                                    let name = catalog.with_value(|catalog| {
                                        catalog
                                            .item(&entry.item_id)
                                            .map(|item| item.name.clone())
                                            .unwrap_or_else(|| entry.item_id.clone())
                                    });
                                    let line = if entry.note.is_empty() {
                                        format!("{} x {}", name, format_quantity(entry.amount))
                                    } else {
                                        format!("{} x {} ({})", name, format_quantity(entry.amount), entry.note)
                                    };
                                    view! { <li>{line}</li> }
                                })
                                .collect_view()
                        }}
                    </ul>
                    <DataTable aria_label="Material totals">
                        <thead>
                            <tr>
                                <th scope="col">"Material"</th>
                                <th scope="col">"Total"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                totals
                                    .get()
                                    .into_iter()
                                    .map(|row| {
                                        let quantity = row.quantity_label();
                                        view! {
                                            <tr>
                                                <td>{row.material_name}</td>
                                                <td>{quantity}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </DataTable>
                    <Cluster justify=LayoutJustify::End>
                        <Button on_click=Callback::new(move |_| plan.set(Vec::new()))>"Clear plan"</Button>
                    </Cluster>
                </Stack>
            </Dialog>
        </Stack>
    }
}
