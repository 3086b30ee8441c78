//! Shopping List Component
//!
//! Add form, sort projection, mark-as-purchased and delete, plus drag
//! reorder when no sort projection is active.

use leptos::prelude::*;
use leptos_dragdrop::{
    bind_global_mouseup, create_dnd_signals, make_on_mousedown, make_on_mouseleave,
    make_on_slot_mouseenter,
};

use crate::lists;
use crate::models::{new_item_id, ShoppingListItem, SortOption, CATEGORIES};
use crate::store::{
    store_add_shopping_item, store_mark_as_purchased, store_remove_shopping_item,
    store_reorder_shopping, use_app_store, AppStateStoreFields,
};

#[component]
pub fn ShoppingList() -> impl IntoView {
    let store = use_app_store();

    let (new_name, set_new_name) = signal(String::new());
    let (new_category, set_new_category) = signal(CATEGORIES[0].to_string());
    let (sort_option, set_sort_option) = signal(SortOption::Default);

    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |dragged_id, slot| {
        if sort_option.get_untracked() != SortOption::Default {
            return;
        }
        let ids: Vec<String> = store
            .shopping_list_items()
            .get_untracked()
            .into_iter()
            .map(|item| item.id)
            .collect();
        if let Some(order) = lists::order_after_drag(&ids, &dragged_id, slot) {
            store_reorder_shopping(&store, &order);
        }
    });

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get().trim().to_string();
        if name.is_empty() {
            return;
        }
        store_add_shopping_item(
            &store,
            ShoppingListItem {
                id: new_item_id(),
                name,
                category: new_category.get(),
            },
        );
        set_new_name.set(String::new());
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
            <h2>"Shopping List"</h2>

            <form class="add-item-form" on:submit=add_item>
                <input
                    type="text"
                    class="full-row"
                    placeholder="Item name"
                    prop:value=move || new_name.get()
                    on:input=move |ev| set_new_name.set(event_target_value(&ev))
                />
                <select
                    class="full-row"
                    prop:value=move || new_category.get()
                    on:change=move |ev| set_new_category.set(event_target_value(&ev))
                >
                    {CATEGORIES.iter().map(|category| view! {
                        <option value=*category>{*category}</option>
                    }).collect_view()}
                </select>
                <button type="submit" class="secondary-btn full-row">"Add Item"</button>
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
                    let items = lists::sorted(&store.shopping_list_items().get(), sort_option.get());
                    if items.is_empty() {
                        return view! { <p class="empty-state">"Your shopping list is empty."</p> }.into_any();
                    }
                    let draggable = sort_option.get() == SortOption::Default;
                    items.into_iter().enumerate().map(|(index, item)| {
                        let drag_id = item.id.clone();
                        let row_id = item.id.clone();
                        let purchase_id = item.id.clone();
                        let delete_id = item.id.clone();

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
                                            title="Mark as purchased"
                                            on:click=move |_| store_mark_as_purchased(&store, &purchase_id)
                                        >
                                            "✓"
                                        </button>
                                        <button
                                            class="icon-btn danger"
                                            title="Delete"
                                            on:click=move |_| store_remove_shopping_item(&store, &delete_id)
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </section>
    }
}
