use leptos::prelude::*;

use contracts::domain::item::UpsertRequest;

use crate::domain::item::api;
use crate::layout::global_context::AppGlobalContext;

/// ViewModel for the insert/update form.
///
/// Field values stay raw strings until submit; the price is only parsed
/// when building the request. `Copy` lets the view capture it freely.
#[derive(Clone, Copy)]
pub struct UpsertViewModel {
    ctx: AppGlobalContext,
    pub name: RwSignal<String>,
    pub price: RwSignal<String>,
    pub category: RwSignal<String>,
    pub name_error: RwSignal<Option<String>>,
    pub price_error: RwSignal<Option<String>>,
    pub category_error: RwSignal<Option<String>>,
    pub server_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl UpsertViewModel {
    pub fn new(ctx: AppGlobalContext) -> Self {
        Self {
            ctx,
            name: RwSignal::new(String::new()),
            price: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            name_error: RwSignal::new(None),
            price_error: RwSignal::new(None),
            category_error: RwSignal::new(None),
            server_error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    /// Field edits drop the stale confirmation from the last save.
    pub fn edit_name(&self, value: String) {
        self.name.set(value);
        self.ctx.clear_saved_item();
    }

    pub fn edit_price(&self, value: String) {
        self.price.set(value);
        self.ctx.clear_saved_item();
    }

    pub fn edit_category(&self, value: String) {
        self.category.set(value);
        self.ctx.clear_saved_item();
    }

    /// Saved-item id for the confirmation line (reactive read).
    pub fn saved_item_id(&self) -> Option<i64> {
        self.ctx.last_item_id.get()
    }

    /// Validate the three fields, filling the inline error lines. Returns
    /// the request to send when everything passes.
    pub fn validated_request(&self) -> Option<UpsertRequest> {
        let name = self.name.get_untracked();
        let price_raw = self.price.get_untracked();
        let category = self.category.get_untracked();

        let name_ok = !name.trim().is_empty();
        self.name_error
            .set((!name_ok).then(|| "Name is a required field.".to_string()));

        let price = price_raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite());
        self.price_error
            .set(price.is_none().then(|| "Price is a required field.".to_string()));

        let category_ok = !category.trim().is_empty();
        self.category_error
            .set((!category_ok).then(|| "Category is a required field.".to_string()));

        match (name_ok, price, category_ok) {
            (true, Some(price), true) => Some(UpsertRequest {
                name,
                price,
                category,
            }),
            _ => None,
        }
    }

    /// A save that went through: show the id and hand the form back empty.
    pub fn apply_success(&self, id: i64) {
        self.ctx.record_saved_item(id);
        self.name.set(String::new());
        self.price.set(String::new());
        self.category.set(String::new());
        self.name_error.set(None);
        self.price_error.set(None);
        self.category_error.set(None);
        self.server_error.set(None);
    }

    /// A save that failed: no confirmation, field values stay put.
    pub fn apply_failure(&self, message: String) {
        self.ctx.clear_saved_item();
        self.server_error.set(Some(message));
    }

    /// Validate and, if clean, send the upsert. At most one request runs
    /// at a time.
    pub fn save_command(&self) {
        let request = match self.validated_request() {
            Some(request) => request,
            None => return,
        };
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);
        self.server_error.set(None);

        let vm = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::upsert_item(&request).await {
                Ok(response) => {
                    log::info!("stored item {}", response.id);
                    vm.apply_success(response.id);
                }
                Err(e) => {
                    log::error!("upsert failed: {}", e);
                    vm.apply_failure(e.to_string());
                }
            }
            vm.saving.set(false);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vm() -> UpsertViewModel {
        UpsertViewModel::new(AppGlobalContext::new())
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let vm = vm();
        assert!(vm.validated_request().is_none());
        assert_eq!(
            vm.name_error.get_untracked().as_deref(),
            Some("Name is a required field.")
        );
        assert_eq!(
            vm.price_error.get_untracked().as_deref(),
            Some("Price is a required field.")
        );
        assert_eq!(
            vm.category_error.get_untracked().as_deref(),
            Some("Category is a required field.")
        );
    }

    #[test]
    fn test_unparseable_price_blocks_submit() {
        let vm = vm();
        vm.edit_name("Pen".to_string());
        vm.edit_price("abc".to_string());
        vm.edit_category("Stationary".to_string());
        assert!(vm.validated_request().is_none());
        assert!(vm.name_error.get_untracked().is_none());
        assert_eq!(
            vm.price_error.get_untracked().as_deref(),
            Some("Price is a required field.")
        );
    }

    #[test]
    fn test_valid_fields_build_request() {
        let vm = vm();
        vm.edit_name("Pen".to_string());
        vm.edit_price("1.5".to_string());
        vm.edit_category("Stationary".to_string());

        let request = vm.validated_request().unwrap();
        assert_eq!(request.name, "Pen");
        assert_eq!(request.price, 1.5);
        assert_eq!(request.category, "Stationary");
        assert!(vm.price_error.get_untracked().is_none());
    }

    #[test]
    fn test_success_records_id_and_resets_fields() {
        let vm = vm();
        vm.edit_name("Pen".to_string());
        vm.edit_price("1.5".to_string());
        vm.edit_category("Stationary".to_string());

        vm.apply_success(7);
        assert_eq!(vm.saved_item_id(), Some(7));
        assert_eq!(vm.name.get_untracked(), "");
        assert_eq!(vm.price.get_untracked(), "");
        assert_eq!(vm.category.get_untracked(), "");
        assert!(vm.server_error.get_untracked().is_none());
    }

    #[test]
    fn test_edit_after_success_clears_confirmation() {
        let vm = vm();
        vm.apply_success(7);
        vm.edit_name("P".to_string());
        assert_eq!(vm.saved_item_id(), None);
    }

    #[test]
    fn test_failure_clears_confirmation_and_keeps_fields() {
        let vm = vm();
        vm.edit_name("Pen".to_string());
        vm.edit_price("1.5".to_string());
        vm.edit_category("Stationary".to_string());

        vm.apply_failure("Error: 500 - boom".to_string());
        assert_eq!(vm.saved_item_id(), None);
        assert_eq!(
            vm.server_error.get_untracked().as_deref(),
            Some("Error: 500 - boom")
        );
        // A failed save keeps what the user typed.
        assert_eq!(vm.name.get_untracked(), "Pen");
        assert_eq!(vm.price.get_untracked(), "1.5");
    }
}
