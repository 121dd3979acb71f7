//! Table and form rendering.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use stocklist_inventory::{
    EditorSession, Field, FormController, InventoryRecord, SortDirection, is_low_stock_at,
};

const DESCRIPTION_WIDTH: u16 = 40;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
}

/// The inventory table for already-projected rows.
pub fn inventory_table(
    rows: &[&InventoryRecord],
    direction: SortDirection,
    low_stock_threshold: i64,
) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Name"),
        Cell::new("Category"),
        Cell::new(format!("Quantity {}", direction.arrow())),
        Cell::new("Price"),
        Cell::new("Description"),
        Cell::new("Stock"),
        Cell::new("Id"),
    ]);
    apply_table_style(&mut table);

    for (index, record) in rows.iter().enumerate() {
        let low = is_low_stock_at(record, low_stock_threshold);
        let quantity = Cell::new(record.quantity());
        let (quantity, stock) = if low {
            (
                quantity.fg(Color::Red).add_attribute(Attribute::Bold),
                Cell::new("LOW").fg(Color::Red),
            )
        } else {
            (quantity, Cell::new(""))
        };

        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(record.name()),
            Cell::new(record.category()).fg(Color::Blue),
            quantity,
            Cell::new(record.price().display()),
            Cell::new(record.description()),
            stock,
            Cell::new(record.record_id()),
        ]);
    }

    for index in [0, 3, 4] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    if let Some(column) = table.column_mut(5) {
        column.set_constraint(ColumnConstraint::UpperBoundary(Width::Fixed(DESCRIPTION_WIDTH)));
    }

    table
}

/// Full screen: filter line, table (or an empty notice), and the open form.
pub fn screen(session: &EditorSession, low_stock_threshold: i64) -> String {
    let rows = session.rows();
    let filter = session.view().filter.category().unwrap_or("All Categories");

    let mut out = format!("Inventory Management  [filter: {filter}]\n");
    if rows.is_empty() {
        out.push_str("No items to show.\n");
    } else {
        let table = inventory_table(&rows, session.view().sort, low_stock_threshold);
        out.push_str(&format!("{table}\n"));
    }

    if let Some(form) = form_table(session.form()) {
        out.push_str(&format!("{form}\n"));
    }

    out
}

/// Staged values of the open form, titled with its submit action.
pub fn form_table(form: &FormController) -> Option<Table> {
    let (label, staged) = (form.submit_label()?, form.staged()?);

    let mut table = Table::new();
    table.set_header(vec![
        Cell::new(label).add_attribute(Attribute::Bold),
        Cell::new("(set <field> <value>, save, cancel)"),
    ]);
    apply_table_style(&mut table);

    for field in Field::ALL {
        table.add_row(vec![Cell::new(field), Cell::new(staged.get(field))]);
    }

    Some(table)
}

/// Filter choices, with the active one marked.
pub fn category_list(categories: &[String], active: Option<&str>) -> String {
    let mark = |selected: bool| if selected { "*" } else { " " };

    let mut out = format!("{} All Categories\n", mark(active.is_none()));
    for category in categories {
        out.push_str(&format!("{} {category}\n", mark(active == Some(category.as_str()))));
    }
    out
}
