use leptos::prelude::*;

/// Static banner above the forms.
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header style="margin: 20px 20px 0; border-bottom: 1px solid #e5e7eb; padding-bottom: 16px;">
            <h1 style="margin: 0; font-size: 1.5rem; font-weight: 600;">
                "Inventory Management System"
            </h1>
            <p style="margin: 4px 0 0; font-size: 0.875rem; color: #6b7280;">
                "This is an inventory management system that allows you to insert, update and retrieve your inventory."
            </p>
        </header>
    }
}
