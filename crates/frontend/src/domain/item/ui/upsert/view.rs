use leptos::prelude::*;

use super::view_model::UpsertViewModel;
use crate::layout::global_context::AppGlobalContext;

#[component]
pub fn UpsertForm() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = UpsertViewModel::new(ctx);

    view! {
        <div style="margin: 20px 20px 0;">
            <div style="border-bottom: 1px solid #e5e7eb; padding-bottom: 20px;">
                <h1 style="margin: 0; font-size: 1rem; font-weight: 600;">"Insert/Update Inventory"</h1>

                <div style="margin-top: 12px; max-width: 480px;">
                    <label for="name" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                        "Name"
                    </label>
                    <input
                        id="name"
                        type="text"
                        placeholder="e.g. Notebook"
                        prop:value=move || vm.name.get()
                        on:input=move |ev| vm.edit_name(event_target_value(&ev))
                        style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                    />
                    {move || {
                        vm.name_error.get().map(|msg| {
                            view! {
                                <p style="margin-top: 4px; font-size: 0.875rem; color: #f87171; font-weight: 500;">{msg}</p>
                            }
                        })
                    }}
                </div>

                <div style="margin-top: 12px; max-width: 480px;">
                    <label for="price" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                        "Price"
                    </label>
                    <div style="display: flex; align-items: center; gap: 8px;">
                        <span style="color: #6b7280; font-size: 0.875rem;">"SGD"</span>
                        <input
                            id="price"
                            type="number"
                            step="0.01"
                            placeholder="e.g. 3.50"
                            prop:value=move || vm.price.get()
                            on:input=move |ev| vm.edit_price(event_target_value(&ev))
                            style="flex: 1; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                        />
                    </div>
                    {move || {
                        vm.price_error.get().map(|msg| {
                            view! {
                                <p style="margin-top: 4px; font-size: 0.875rem; color: #f87171; font-weight: 500;">{msg}</p>
                            }
                        })
                    }}
                </div>

                <div style="margin-top: 12px; max-width: 480px;">
                    <label for="category" style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                        "Category"
                    </label>
                    <input
                        id="category"
                        type="text"
                        placeholder="e.g. Stationary"
                        prop:value=move || vm.category.get()
                        on:input=move |ev| vm.edit_category(event_target_value(&ev))
                        style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px;"
                    />
                    {move || {
                        vm.category_error.get().map(|msg| {
                            view! {
                                <p style="margin-top: 4px; font-size: 0.875rem; color: #f87171; font-weight: 500;">{msg}</p>
                            }
                        })
                    }}
                </div>

                <button
                    on:click=move |_| vm.save_command()
                    disabled=move || vm.saving.get()
                    style="margin-top: 24px; padding: 8px 12px; background: #4f46e5; color: white; border: none; border-radius: 6px; font-weight: 600; cursor: pointer;"
                >
                    "Save"
                </button>

                <div style="margin-top: 16px;">
                    {move || {
                        vm.server_error.get().map(|err| {
                            view! {
                                <p style="color: #f87171; font-weight: 600;">{err}</p>
                            }
                        })
                    }}
                    {move || {
                        vm.saved_item_id().map(|id| {
                            view! {
                                <p style="color: #16a34a; font-weight: 600;">
                                    {format!("Successfully stored item: ID-{}", id)}
                                </p>
                            }
                        })
                    }}
                </div>
            </div>
        </div>
    }
}
