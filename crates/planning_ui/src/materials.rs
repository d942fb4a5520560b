//! Views over the quantity formatters and recipe material computation.

use leptos::*;
use planning_core::{
    calc_materials, duration_label, format_quantity, format_updated_at, Density, Item, MaterialMap,
    MaterialRow, NOT_UPDATED_LABEL,
};
use ui_primitives::prelude::*;

#[component]
/// Table of material requirements for producing `amount` units of `item`.
pub fn MaterialBreakdown(
    #[prop(into)] item: MaybeSignal<Option<Item>>,
    #[prop(into)] amount: MaybeSignal<f64>,
    #[prop(into)] materials: MaybeSignal<MaterialMap>,
) -> impl IntoView {
    let rows = create_memo(move |_| {
        item.with(|item| {
            item.as_ref().map(|item| {
                materials.with(|materials| {
                    calc_materials(item, amount.get(), materials)
                        .into_iter()
                        .map(|row| {
                            let registered = materials.contains_key(&row.material_id);
                            (row, registered)
                        })
                        .collect::<Vec<(MaterialRow, bool)>>()
                })
            })
        })
    });

    move || match rows.get() {
        None => view! {
            <EmptyState>"Select an item to see its materials."</EmptyState>
        }
        .into_view(),
        Some(rows) if rows.is_empty() => view! {
            <EmptyState>"This item has no recipe lines."</EmptyState>
        }
        .into_view(),
        Some(rows) => view! {
            <DataTable layout_class="planner-materials" aria_label="Required materials">
                <thead>
                    <tr>
                        <th scope="col">"Material"</th>
                        <th scope="col">"Quantity"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(row, registered)| {
                            let quantity = row.quantity_label();
                            view! {
                                <tr data-material-id=row.material_id.clone()>
                                    <td>
                                        {if registered {
                                            view! { <Text>{row.material_name}</Text> }.into_view()
                                        } else {
                                            view! {
                                                <Badge tone=TextTone::Warning title=row.material_id>
                                                    {row.material_name}
                                                </Badge>
                                            }
                                            .into_view()
                                        }}
                                    </td>
                                    <td data-ui-slot="quantity">{quantity}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </DataTable>
        }
        .into_view(),
    }
}

#[component]
/// Badge showing when an item was last updated.
pub fn UpdatedAtBadge(#[prop(into)] value: MaybeSignal<Option<String>>) -> impl IntoView {
    move || {
        let label = value.with(|value| format_updated_at(value.as_deref()));
        let tone = if label == NOT_UPDATED_LABEL {
            TextTone::Warning
        } else {
            TextTone::Secondary
        };
        view! { <Badge tone=tone>{label}</Badge> }
    }
}

#[component]
/// Badge showing a production length, with the raw slot count in a tooltip.
pub fn DurationBadge(length: f64, density: Density) -> impl IntoView {
    let hint = format!(
        "{} slot(s) of {} hour(s)",
        format_quantity(length),
        density.hours_per_slot()
    );
    view! {
        <Tooltip text=hint>
            <Badge tone=TextTone::Accent>{duration_label(length, density)}</Badge>
        </Tooltip>
    }
}
