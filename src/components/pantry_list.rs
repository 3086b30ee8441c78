//! Pantry List Component
//!
//! "In House" panel: add form, sort projection, per-item quantity
//! controls, move-to-shopping-list and delete, plus drag reorder
//! when no sort projection is active.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_mousedown, make_on_mouseleave,
    make_on_slot_mouseenter,
};

use crate::lists;
use crate::models::{new_item_id, PantryItem, SortOption, Unit, CATEGORIES};
use crate::store::{
    store_add_pantry_item, store_move_to_shopping_list, store_remove_pantry_item,
    store_reorder_pantry, store_update_pantry_item, use_app_store, AppStateStoreFields,
};

#[component]
pub fn PantryList() -> impl IntoView {
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (new_category, set_new_category) = signal(CATEGORIES[0].to_string());
    let (new_quantity, set_new_quantity) = signal(1.0f64);
    let (new_unit, set_new_unit) = signal(Unit::Pcs);
    let (sort_option, set_sort_option) = signal(SortOption::Default);

    // Drag reorder; only meaningful while the default order is shown
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged_id, slot| {
        if sort_option.get_untracked() != SortOption::Default {
            return;
        }
        let ids: Vec<String> = store
            .pantry_items()
            .get_untracked()
            .into_iter()
            .map(|item| item.id)
            .collect();
        if let Some(order) = lists::order_after_drag(&ids, &dragged_id, slot) {
            store_reorder_pantry(&store, &order);
        }
    });

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        store_add_pantry_item(
            &store,
            PantryItem {
                id: new_item_id(),
                name,
                category: new_category.get(),
                quantity: new_quantity.get(),
                unit: new_unit.get(),
            },
        );
        set_new_name.set(String::new());
        set_new_quantity.set(1.0);
    };

    let on_sort_change = move |ev: web_sys::Event| {
        set_sort_option.set(match event_target_value(&ev).as_str() {
            "Name" => SortOption::Name,
            "Category" => SortOption::Category,
            _ => SortOption::Default,
        });
    };

    view! {
        <section class="list-panel">
            <h2>"In House"</h2>

            <form class="add-item-form" on:submit=add_item>
                <input
                    type="text"
                    class="full-row"
                    placeholder="Item name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || new_category.get()
                    on:change=move |ev| set_new_category.set(event_target_value(&ev))
                >
                    {CATEGORIES.iter().map(|category| view! {
                        <option value=*category>{*category}</option>
                    }).collect_view()}
                </select>
                <div class="quantity-field">
                    <input
                        type="number"
                        min="1"
                        placeholder="Qty"
                        prop:value=move || new_quantity.get().to_string()
                        on:input=move |ev| {
                            if let Ok(quantity) = event_target_value(&ev).parse::<f64>() {
                                set_new_quantity.set(quantity);
                            }
                        }
                    />
                    <select
                        prop:value=move || new_unit.get().label()
                        on:change=move |ev| {
                            let unit = if event_target_value(&ev) == "g" { Unit::G } else { Unit::Pcs };
                            set_new_unit.set(unit);
                        }
                    >
                        <option value="pcs">"pcs"</option>
                        <option value="g">"g"</option>
                    </select>
                </div>
                <button type="submit" class="primary-btn full-row">"Add Item"</button>
            </form>

            <div class="sort-row">
                <select class="sort-select" on:change=on_sort_change>
                    <option value="Default">"Sort: Default"</option>
                    <option value="Name">"Sort: Name"</option>
                    <option value="Category">"Sort: Category"</option>
                </select>
            </div>

            <div class="item-list">
                {move || {
                    let items = lists::sorted(&store.pantry_items().get(), sort_option.get());
                    if items.is_empty() {
                        return view! { <p class="empty-state">"Your pantry is empty."</p> }.into_any();
                    }
                    let draggable = sort_option.get() == SortOption::Default;
                    items.into_iter().enumerate().map(|(index, item)| {
                        let drag_id = item.id.clone();
                        let row_id = item.id.clone();
                        let move_id = item.id.clone();
                        let delete_id = item.id.clone();
                        let dec_id = item.id.clone();
                        let inc_id = item.id.clone();
                        let qty_id = item.id.clone();
                        let unit_id = item.id.clone();

                        let on_mousedown = make_on_mousedown(dnd, drag_id);
                        let on_mouseenter = make_on_slot_mouseenter(dnd, index);
                        let on_mouseleave = make_on_mouseleave(dnd);
                        let is_dragging = move || dnd.dragging_id_read.get().as_deref() == Some(row_id.as_str());
                        let is_drop_target = move || draggable && dnd.drop_slot_read.get() == Some(index);

                        view! {
                            <div
                                class="list-row"
                                class:draggable=draggable
                                class:dragging=is_dragging
                                class:drop-target=is_drop_target
                                on:mousedown=move |ev| { if draggable { on_mousedown(ev); } }
                                on:mouseenter=on_mouseenter
                                on:mouseleave=on_mouseleave
                            >
                                <div class="row-main">
                                    <div>
                                        <p class="item-name">{item.name.clone()}</p>
                                        <span class="item-category">{item.category.clone()}</span>
                                    </div>
                                    <div class="row-actions">
                                        <button
                                            class="icon-btn"
                                            title="Move to shopping list"
                                            on:click=move |_| store_move_to_shopping_list(&store, &move_id)
                                        >
                                            "🛒"
                                        </button>
                                        <button
                                            class="icon-btn danger"
                                            title="Delete"
                                            on:click=move |_| store_remove_pantry_item(&store, &delete_id)
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                </div>
                                <div class="quantity-row">
                                    <button
                                        class="step-btn"
                                        on:click=move |_| store_update_pantry_item(&store, &dec_id, |item| {
                                            item.quantity = (item.quantity - 1.0).max(0.0);
                                        })
                                    >
                                        "−"
                                    </button>
                                    <input
                                        type="number"
                                        class="quantity-input"
                                        prop:value=item.quantity.to_string()
                                        on:change=move |ev| {
                                            // Direct entry is deliberately not clamped
                                            if let Ok(quantity) = event_target_value(&ev).parse::<f64>() {
                                                store_update_pantry_item(&store, &qty_id, move |item| item.quantity = quantity);
                                            }
                                        }
                                    />
                                    <button
                                        class="step-btn"
                                        on:click=move |_| store_update_pantry_item(&store, &inc_id, |item| {
                                            item.quantity += 1.0;
                                        })
                                    >
                                        "+"
                                    </button>
                                    <select
                                        on:change=move |ev| {
                                            let unit = if event_target_value(&ev) == "g" { Unit::G } else { Unit::Pcs };
                                            store_update_pantry_item(&store, &unit_id, move |item| item.unit = unit);
                                        }
                                    >
                                        <option value="pcs" selected={item.unit == Unit::Pcs}>"pcs"</option>
                                        <option value="g" selected={item.unit == Unit::G}>"g"</option>
                                    </select>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </section>
    }
}
