// tests/grid_pipeline.rs
//! End-to-end exercises of the catalog state machine: load, format, edit,
//! filter, clear, discard — without the UI or the network.

use serde_json::json;

use cardgrid::grid::columns::ColumnLayout;
use cardgrid::grid::config::GridConfig;
use cardgrid::grid::definitions::{rows_from_json, CardRow, CellKind, ERROR_SENTINEL};
use cardgrid::grid::formatter::cell_record;
use cardgrid::grid::patcher::patch_cell;
use cardgrid::grid::resources::{CardCatalog, CatalogLoadState, ViewMode};
use cardgrid::grid::search::search_rows;

fn fetched_cards() -> Vec<CardRow> {
    rows_from_json(vec![
        json!({
            "name": "Ajani, Sleeper Agent",
            "mana_cost": "{1}{G/W/P}{W}",
            "cmc": 3.0,
            "type_line": "Legendary Planeswalker — Ajani",
            "power": null,
            "toughness": null,
            "set": "dmu",
            "collector_number": "192",
            "oracle_text": "Compleated",
            "flavor_text": null
        }),
        json!({
            "name": "Arcane Signet",
            "mana_cost": "{2}",
            "cmc": 2.0,
            "type_line": "Artifact",
            "power": null,
            "toughness": null,
            "set": "clb",
            "collector_number": "306",
            "oracle_text": "{T}: Add one mana of any color in your commander's color identity.",
            "flavor_text": null
        }),
        json!({
            "name": "Young Blue Dragon",
            "mana_cost": "{4}{U}",
            "cmc": 5.0,
            "type_line": "Creature — Dragon",
            "power": "3",
            "toughness": "4",
            "set": "clb",
            "collector_number": "102",
            "oracle_text": "Flying",
            "flavor_text": "Still learning."
        }),
    ])
}

fn loaded_catalog() -> (CardCatalog, ColumnLayout) {
    let mut catalog = CardCatalog::default();
    catalog.install_snapshot(fetched_cards());
    let layout = ColumnLayout::from_config(&GridConfig::card_catalog());
    (catalog, layout)
}

fn edit(catalog: &mut CardCatalog, layout: &ColumnLayout, cell: (usize, usize), value: serde_json::Value) {
    let (rows, row) = patch_cell(&value, cell, &catalog.rendered, &layout.field_ids())
        .expect("cell within the grid");
    catalog.record_edit(rows, row);
}

#[test]
fn fetched_rows_format_per_column_kind() {
    let (catalog, layout) = loaded_catalog();
    assert_eq!(catalog.load_state, CatalogLoadState::Ready);

    let ajani = &catalog.rendered[0];
    let columns = layout.columns();

    // cmc column: decimal with two fixed fraction digits, editable.
    let cmc = cell_record(ajani.field("cmc"), &columns[2]);
    assert_eq!(cmc.display_data, "3.00");
    assert!(!cmc.read_only);

    // power is null for a planeswalker: numeric null counts as zero.
    let pow = cell_record(ajani.field("power"), &columns[4]);
    assert_eq!(pow.display_data, "0");
    assert_eq!(pow.kind, CellKind::Integer);

    // string-typed collector numbers parse through the integer path.
    let number = cell_record(ajani.field("collector_number"), &columns[7]);
    assert_eq!(number.display_data, "192");
    assert!(!number.read_only);

    // text cells are read-only and show the raw string.
    let name = cell_record(ajani.field("name"), &columns[0]);
    assert!(name.read_only);
    assert_eq!(name.display_data, "Ajani, Sleeper Agent");
}

#[test]
fn sentinel_values_survive_the_whole_pipeline() {
    let (mut catalog, layout) = loaded_catalog();
    edit(&mut catalog, &layout, (4, 2), json!(ERROR_SENTINEL));

    let record = cell_record(catalog.rendered[2].field("power"), &layout.columns()[4]);
    assert_eq!(record.display_data, ERROR_SENTINEL);
    assert_eq!(record.kind, CellKind::Integer);
}

#[test]
fn edit_search_clear_discard_cycle() {
    let (mut catalog, layout) = loaded_catalog();

    // Edit the dragon's power.
    edit(&mut catalog, &layout, (4, 2), json!(7));
    assert_eq!(catalog.pending.len(), 1);
    assert_eq!(catalog.rendered[2].field("power"), &json!(7));

    // Filter to the clb set; the edited row stays visible with its edit.
    catalog.restore();
    catalog.rendered = search_rows("clb", &catalog.rendered);
    catalog.view_mode = ViewMode::Filtered;
    assert_eq!(catalog.rendered.len(), 2);
    let dragon = catalog
        .rendered
        .iter()
        .find(|r| r.field("name") == &json!("Young Blue Dragon"))
        .expect("edited row visible under the filter");
    assert_eq!(dragon.field("power"), &json!(7));

    // Clear the filter: full list back, edit intact.
    catalog.restore();
    assert_eq!(catalog.view_mode, ViewMode::Idle);
    assert_eq!(catalog.rendered.len(), 3);
    assert_eq!(catalog.rendered[2].field("power"), &json!(7));
    assert_eq!(catalog.pending.len(), 1);

    // Discard: back to exactly the load snapshot.
    catalog.discard();
    assert!(catalog.pending.is_empty());
    assert_eq!(catalog.rendered, fetched_cards());
}

#[test]
fn edits_made_under_a_filter_survive_clearing_it() {
    let (mut catalog, layout) = loaded_catalog();

    catalog.restore();
    catalog.rendered = search_rows("dragon", &catalog.rendered);
    catalog.view_mode = ViewMode::Filtered;
    assert_eq!(catalog.rendered.len(), 1);

    // Row index 0 in the filtered view is the dragon, not Ajani.
    edit(&mut catalog, &layout, (5, 0), json!(9));
    let pending_row = catalog.pending.values().next().expect("one pending edit");
    assert_eq!(pending_row.field("name"), &json!("Young Blue Dragon"));

    catalog.restore();
    assert_eq!(catalog.rendered.len(), 3);
    assert_eq!(catalog.rendered[2].field("toughness"), &json!(9));
}

#[test]
fn duplicate_rows_keep_independent_edits() {
    let mut catalog = CardCatalog::default();
    catalog.install_snapshot(rows_from_json(vec![
        json!({"name": "Plains", "cmc": 0.0}),
        json!({"name": "Plains", "cmc": 0.0}),
    ]));
    let layout = ColumnLayout::from_config(
        &GridConfig::new(vec![
            cardgrid::grid::config::ColumnSpec::new("Name", "name", 120.0, CellKind::Text),
            cardgrid::grid::config::ColumnSpec::new("CMC", "cmc", 80.0, CellKind::Decimal)
                .with_decimal_point(2),
        ])
        .unwrap(),
    );

    edit(&mut catalog, &layout, (1, 1), json!(1.5));
    assert_eq!(catalog.rendered[0].field("cmc"), &json!(0.0));
    assert_eq!(catalog.rendered[1].field("cmc"), &json!(1.5));

    catalog.restore();
    assert_eq!(catalog.rendered[0].field("cmc"), &json!(0.0));
    assert_eq!(catalog.rendered[1].field("cmc"), &json!(1.5));
}

#[test]
fn repeated_edits_to_one_row_keep_a_single_overlay_entry() {
    let (mut catalog, layout) = loaded_catalog();

    edit(&mut catalog, &layout, (4, 2), json!(5));
    edit(&mut catalog, &layout, (5, 2), json!(6));
    assert_eq!(catalog.pending.len(), 1);

    let pending_row = catalog.pending.values().next().unwrap();
    assert_eq!(pending_row.field("power"), &json!(5));
    assert_eq!(pending_row.field("toughness"), &json!(6));
}
