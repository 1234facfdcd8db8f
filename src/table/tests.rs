use serde_json::json;

use super::*;
use crate::error::ReportError;

const RECORD_TABLE: &str =
    "+----+----+\n| id | nm |\n+----+----+\n| 0  | a  |\n| 1  | b  |\n+----+----+";
const DICTIONARY_TABLE: &str = "+-----+---+\n| id  | 0 |\n| name| a |\n+-----+---+";
const SINGLE_ROW_TABLE: &str = "+-----+---+\n| id  | 0 |\n+-----+---+";

fn assert_malformed(result: Result<ParsedTable>) {
    match result {
        Err(ReportError::MalformedTable { .. }) => {}
        other => panic!("expected malformed table error, got {other:?}"),
    }
}

#[test]
fn cell_grid_drops_borders_and_header_divider() {
    let grid = CellGrid::parse(RECORD_TABLE).expect("record table parses");

    assert!(grid.had_divider());
    assert_eq!(grid.row_count(), 3);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(grid.rows()[0], vec!["id", "nm"]);
    assert_eq!(grid.rows()[2], vec!["1", "b"]);
}

#[test]
fn cell_grid_keeps_second_row_when_it_is_content() {
    let grid = CellGrid::parse(DICTIONARY_TABLE).expect("dictionary table parses");

    assert!(!grid.had_divider());
    assert_eq!(grid.rows(), &[vec!["id", "0"], vec!["name", "a"]]);
}

#[test]
fn cell_grid_preserves_interior_whitespace() {
    let grid = CellGrid::parse("+---+\n|  Slice LUTs   |  10 \t |\n+---+").expect("grid parses");

    assert_eq!(grid.rows()[0], vec!["Slice LUTs", "10"]);
}

#[test]
fn cell_grid_tolerates_crlf_line_endings() {
    let crlf = RECORD_TABLE.replace('\n', "\r\n");
    let grid = CellGrid::parse(&crlf).expect("crlf table parses");
    let expected = CellGrid::parse(RECORD_TABLE).expect("lf table parses");

    assert_eq!(grid, expected);
}

#[test]
fn cell_grid_rejects_blocks_without_borders() {
    let error = CellGrid::parse("+--+\n|only one line|\n").expect_err("missing bottom border");
    assert!(matches!(error, ReportError::MalformedTable { .. }));

    let error = CellGrid::parse("| a | b |\n+---+---+").expect_err("missing top border");
    assert!(matches!(error, ReportError::MalformedTable { .. }));
}

#[test]
fn cell_grid_rejects_blocks_with_fewer_than_three_lines() {
    let error = CellGrid::parse("+---+\n+---+").expect_err("two lines only");
    assert!(
        error.to_string().contains("at least"),
        "unexpected error: {error}"
    );
}

#[test]
fn cell_grid_rejects_ragged_rows() {
    let error = CellGrid::parse("+---+---+\n| a | b |\n| c |\n+---+---+")
        .expect_err("ragged rows should fail");
    assert!(
        error.to_string().contains("row 1 has 1"),
        "unexpected error: {error}"
    );
}

#[test]
fn record_table_becomes_list_of_field_maps() {
    let table = parse_table(RECORD_TABLE, TableKind::Dictionary).expect("table parses");

    assert_eq!(
        serde_json::to_value(&table).expect("serializes"),
        json!([{"id": "0", "nm": "a"}, {"id": "1", "nm": "b"}])
    );
}

#[test]
fn record_keys_keep_header_order() {
    let table = parse_table(
        "+---+---+---+\n| z | a | m |\n+---+---+---+\n| 1 | 2 | 3 |\n+---+---+---+",
        TableKind::Dictionary,
    )
    .expect("table parses");

    let records = table.as_records().expect("record table");
    let keys = records[0].keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn dictionary_table_becomes_single_map() {
    let table = parse_table(DICTIONARY_TABLE, TableKind::Record).expect("table parses");

    assert_eq!(table.kind(), TableKind::Dictionary);
    assert_eq!(
        serde_json::to_value(&table).expect("serializes"),
        json!({"id": "0", "name": "a"})
    );
}

#[test]
fn dictionary_duplicate_keys_keep_last_value() {
    let table = parse_table(
        "+---+---+\n| k | 1 |\n| j | 2 |\n| k | 3 |\n+---+---+",
        TableKind::Dictionary,
    )
    .expect("table parses");

    let entries = table.as_dictionary().expect("dictionary table");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get("k").map(String::as_str), Some("3"));
}

#[test]
fn ambiguous_table_follows_configured_strategy() {
    let as_dictionary =
        parse_table(SINGLE_ROW_TABLE, TableKind::Dictionary).expect("dictionary strategy");
    assert_eq!(
        serde_json::to_value(&as_dictionary).expect("serializes"),
        json!({"id": "0"})
    );

    let as_records = parse_table(SINGLE_ROW_TABLE, TableKind::Record).expect("record strategy");
    assert_eq!(as_records, ParsedTable::Records(Vec::new()));
}

#[test]
fn wide_single_row_table_is_always_records() {
    let table = parse_table("+---+---+---+\n| a | b | c |\n+---+---+---+", TableKind::Dictionary)
        .expect("table parses");

    assert_eq!(table, ParsedTable::Records(Vec::new()));
}

#[test]
fn header_only_table_with_divider_is_empty_record_list() {
    let table = parse_table(
        "+------+------+\n| Ref  | Used |\n+------+------+\n+------+------+",
        TableKind::Dictionary,
    )
    .expect("table parses");

    assert_eq!(table, ParsedTable::Records(Vec::new()));
}

#[test]
fn dictionary_shaped_table_must_have_two_columns() {
    assert_malformed(parse_table(
        "+---+---+---+\n| a | b | c |\n| d | e | f |\n+---+---+---+",
        TableKind::Dictionary,
    ));
    assert_malformed(parse_table("+---+\n| a |\n+---+", TableKind::Dictionary));
}

#[test]
fn second_row_of_empty_cells_still_marks_a_dictionary() {
    let grid = CellGrid::parse("+---+---+\n| a | 1 |\n|   |   |\n+---+---+").expect("grid parses");

    assert_eq!(
        resolve_kind(&grid, TableKind::Record).expect("kind resolves"),
        TableKind::Dictionary
    );
}

#[test]
fn pipe_bordered_divider_row_is_left_to_column_count() {
    let grid = CellGrid::parse("+---+---+---+\n| a | b | c |\n|---|---|---|\n+---+---+---+")
        .expect("grid parses");

    assert!(!grid.had_divider());
    assert_eq!(
        resolve_kind(&grid, TableKind::Dictionary).expect("kind resolves"),
        TableKind::Record
    );
}

#[test]
fn cells_never_carry_outer_whitespace() {
    let table = parse_table(
        "+------------+-----------+\n|  Site Type |  Used     |\n+------------+-----------+\n|   Slice LUTs | 10 |\n+------------+-----------+",
        TableKind::Dictionary,
    )
    .expect("table parses");

    for record in table.as_records().expect("record table") {
        for (key, value) in record {
            assert_eq!(key.trim(), key);
            assert_eq!(value.trim(), value);
        }
    }
}
