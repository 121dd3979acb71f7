//! Inventory list editor core.
//!
//! In-memory record store, the filtered/sorted table projection, and the
//! add/edit form state machine, tied together by [`EditorSession`]. Pure
//! in-process state: no IO, no persistence, no rendering.

pub mod form;
pub mod record;
pub mod session;
pub mod store;
pub mod view;

pub use form::{Field, FormController, FormState, StagedFields, Submission};
pub use record::{CURRENCY_SYMBOL, InventoryRecord, Price, Quantity, RecordDraft};
pub use session::EditorSession;
pub use store::RecordStore;
pub use view::{
    FilterState, LOW_STOCK_THRESHOLD, SortDirection, ViewState, categories, is_low_stock,
    is_low_stock_at, project,
};
