//! Presentation layer boundary.
//!
//! The controllers render by calling these traits; implementations
//! own the actual UI (DOM, TUI, logs, test recorders). Methods take
//! `&self` so implementations handle their own interior mutability.

use crate::domain::{Product, Store};
use crate::query::{SortDirection, SortHeader, StatusFilter};
use crate::validate::FieldError;

/// Rendering surface for the store sidebar and detail pane.
pub trait StorePresenter {
    fn render_list(&self, stores: &[Store]);
    fn render_detail(&self, store: &Store);
    fn clear_detail(&self);
    fn show_loader(&self);
    fn hide_loader(&self);
    /// The selected or URL-supplied store id is not in the loaded
    /// collection.
    fn show_not_found(&self);
    /// Surface validation failures inline on the create form.
    fn show_form_errors(&self, errors: &[FieldError]);
    /// User-facing notice (outcome of a create/delete).
    fn notify(&self, message: &str);
}

/// Rendering surface for the product table and its forms.
pub trait ProductPresenter {
    fn render_list(&self, products: &[Product]);
    fn show_loader(&self);
    fn hide_loader(&self);
    fn update_status_styles(&self, filter: StatusFilter);
    fn update_sort_indicators(&self, header: SortHeader, direction: SortDirection);
    fn show_form_errors(&self, errors: &[FieldError]);
    fn close_add_form(&self);
    fn close_edit_form(&self);
    fn close_delete_confirmation(&self);
}
