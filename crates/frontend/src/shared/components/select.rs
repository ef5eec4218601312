use leptos::prelude::*;

/// Select component with label support.
///
/// Options double as their own display text, which fits every dropdown in
/// this app: category names and the sort codes are shown verbatim.
#[component]
pub fn Select(
    /// Label text above the control
    label: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    on_change: Callback<String>,
    /// Option list; each entry is both value and label
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Disabled state
    #[prop(optional)]
    disabled: bool,
) -> impl IntoView {
    view! {
        <div style="margin-top: 12px; max-width: 480px;">
            <label style="display: block; font-size: 0.875rem; font-weight: 500; margin-bottom: 4px;">
                {label}
            </label>
            <select
                style="width: 100%; padding: 6px 8px; border: 1px solid #d1d5db; border-radius: 6px; background: #fff;"
                disabled=disabled
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option: String| option_row(option, value)
                />
            </select>
        </div>
    }
}

/// One `<option>`; the string is cloned apart before the view so each use
/// owns its copy.
fn option_row(option: String, value: Signal<String>) -> impl IntoView {
    let label = option.clone();
    let option_value = option.clone();
    let is_selected = move || value.get() == option_value;
    view! {
        <option value=option selected=is_selected>
            {label}
        </option>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Building the row off-DOM is what native tests can do; mounting needs
    // a browser.
    #[test]
    fn test_option_row_builds_from_one_string() {
        let (value, _set_value) = signal("Food".to_string());
        let _selected = option_row("Food".to_string(), value.into());
        let _other = option_row("Stationary".to_string(), value.into());
    }
}
