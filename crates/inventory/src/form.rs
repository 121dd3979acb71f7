//! Add/edit form state machine.
//!
//! `Closed -> Creating | Editing(id)` on open, back to `Closed` on cancel or
//! submit. Staged values are kept as the raw text the user typed; they are
//! coerced to numbers only on submit, and coercion never fails.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stocklist_core::{DomainError, DomainResult, RecordId};

use crate::record::{InventoryRecord, Price, Quantity, RecordDraft};

/// One editable field of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Category,
    Quantity,
    Price,
    Description,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Category,
        Field::Quantity,
        Field::Price,
        Field::Description,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Category => "category",
            Field::Quantity => "quantity",
            Field::Price => "price",
            Field::Description => "description",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Field::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::validation(format!("unknown field '{s}'")))
    }
}

/// Text values staged in the form, not yet committed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedFields {
    pub name: String,
    pub category: String,
    pub quantity: String,
    pub price: String,
    pub description: String,
}

impl StagedFields {
    /// Blank form: empty text, `0` for the numbers.
    pub fn for_create() -> Self {
        Self {
            quantity: "0".to_string(),
            price: "0".to_string(),
            ..Self::default()
        }
    }

    /// Form pre-populated from an existing record.
    pub fn from_record(record: &InventoryRecord) -> Self {
        Self {
            name: record.name().to_string(),
            category: record.category().to_string(),
            quantity: record.quantity().to_string(),
            price: record.price().to_input_text(),
            description: record.description().to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Category => &self.category,
            Field::Quantity => &self.quantity,
            Field::Price => &self.price,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Category => &mut self.category,
            Field::Quantity => &mut self.quantity,
            Field::Price => &mut self.price,
            Field::Description => &mut self.description,
        };
        *slot = value.into();
    }

    /// Coerce the staged text into a draft. Unparseable numbers become NaN.
    pub fn parse(&self) -> RecordDraft {
        RecordDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            quantity: Quantity::parse_lenient(&self.quantity),
            price: Price::parse_lenient(&self.price),
            description: self.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Creating(StagedFields),
    Editing { id: RecordId, fields: StagedFields },
}

/// What a submitted form asks the store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(RecordDraft),
    Update(RecordId, RecordDraft),
}

/// Transient create/edit state. At most one of creating/editing is active.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, FormState::Closed)
    }

    pub fn editing_id(&self) -> Option<RecordId> {
        match &self.state {
            FormState::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    pub fn staged(&self) -> Option<&StagedFields> {
        match &self.state {
            FormState::Closed => None,
            FormState::Creating(fields) | FormState::Editing { fields, .. } => Some(fields),
        }
    }

    /// Label of the submit action for the open form.
    pub fn submit_label(&self) -> Option<&'static str> {
        match self.state {
            FormState::Closed => None,
            FormState::Creating(_) => Some("Add Item"),
            FormState::Editing { .. } => Some("Update Item"),
        }
    }

    pub fn open_create(&mut self) -> DomainResult<()> {
        self.ensure_closed()?;
        self.state = FormState::Creating(StagedFields::for_create());
        Ok(())
    }

    pub fn open_edit(&mut self, record: &InventoryRecord) -> DomainResult<()> {
        self.ensure_closed()?;
        self.state = FormState::Editing {
            id: record.record_id(),
            fields: StagedFields::from_record(record),
        };
        Ok(())
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> DomainResult<()> {
        match &mut self.state {
            FormState::Closed => Err(DomainError::invalid_transition(
                "cannot edit a field while the form is closed",
            )),
            FormState::Creating(fields) | FormState::Editing { fields, .. } => {
                fields.set(field, value);
                Ok(())
            }
        }
    }

    /// Discard staged fields. Returns whether a form was open.
    pub fn cancel(&mut self) -> bool {
        let was_open = self.is_open();
        self.state = FormState::Closed;
        was_open
    }

    /// Close the form and hand back the parsed submission.
    pub fn submit(&mut self) -> DomainResult<Submission> {
        match core::mem::take(&mut self.state) {
            FormState::Closed => Err(DomainError::invalid_transition(
                "cannot submit while the form is closed",
            )),
            FormState::Creating(fields) => Ok(Submission::Create(fields.parse())),
            FormState::Editing { id, fields } => Ok(Submission::Update(id, fields.parse())),
        }
    }

    fn ensure_closed(&self) -> DomainResult<()> {
        match &self.state {
            FormState::Closed => Ok(()),
            FormState::Creating(_) => Err(DomainError::conflict("an item is already being added")),
            FormState::Editing { id, .. } => {
                Err(DomainError::conflict(format!("item {id} is already being edited")))
            }
        }
    }
}
