use crate::table::{Column, Row, Table};

/// Show rows where any column contains `query`, ignoring case. An empty
/// query shows everything.
pub fn search(table: &mut Table, query: &str) {
    let needle = query.to_lowercase();
    for row in table.rows_mut() {
        row.visible = matches(row, &needle);
    }
    log::debug!(
        "search {:?}: {} of {} rows visible",
        query,
        table.visible_count(),
        table.len()
    );
}

/// Make every row visible again.
pub fn clear(table: &mut Table) {
    for row in table.rows_mut() {
        row.visible = true;
    }
}

/// Whether any text cell of `row` contains `needle`. `needle` must already
/// be lower-cased. Stops at the first matching column.
pub fn matches(row: &Row, needle: &str) -> bool {
    Column::ALL
        .into_iter()
        .filter_map(|column| row.cell_text(column))
        .any(|text| text.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::tests::record;

    fn table_of(names: &[&str]) -> (tempfile::TempDir, Table) {
        let dir = tempfile::tempdir().unwrap();
        let records = names
            .iter()
            .enumerate()
            .map(|(i, name)| record(&format!("guid-{i}"), name))
            .collect();
        let table = Table::populate(records, dir.path(), 64);
        (dir, table)
    }

    fn visibility(table: &Table) -> Vec<bool> {
        table.rows().iter().map(|r| r.visible).collect()
    }

    #[test]
    fn search_then_clear() {
        let (_dir, mut table) = table_of(&["Tree01", "tree_bark", "Rock02"]);

        search(&mut table, "tree");
        assert_eq!(visibility(&table), [true, true, false]);
        assert_eq!(table.visible_count(), 2);

        clear(&mut table);
        assert_eq!(visibility(&table), [true, true, true]);
    }

    #[test]
    fn query_case_is_ignored() {
        let (_dir, mut table) = table_of(&["Tree01", "tree_bark", "Rock02"]);

        search(&mut table, "ROCK");
        assert_eq!(visibility(&table), [false, false, true]);
    }

    #[test]
    fn match_in_later_column_keeps_row() {
        let dir = tempfile::tempdir().unwrap();
        let mut by_modifier = record("m", "Crate");
        by_modifier.last_edit = "Priya".to_string();
        let mut by_date = record("d", "Barrel");
        by_date.modified = "2023-12-24".to_string();
        let plain = record("p", "Lamp");
        let mut table = Table::populate(vec![by_modifier, by_date, plain], dir.path(), 64);

        search(&mut table, "priya");
        assert_eq!(visibility(&table), [true, false, false]);

        search(&mut table, "12-24");
        assert_eq!(visibility(&table), [false, true, false]);
    }

    #[test]
    fn empty_query_shows_all() {
        let (_dir, mut table) = table_of(&["Tree01", "Rock02"]);

        search(&mut table, "rock");
        assert_eq!(visibility(&table), [false, true]);

        search(&mut table, "");
        assert_eq!(visibility(&table), [true, true]);
    }

    #[test]
    fn clear_restores_after_any_query() {
        let (_dir, mut table) = table_of(&["Tree01", "tree_bark", "Rock02"]);

        for query in ["zzz", "tree", "", "Ryan Amos"] {
            search(&mut table, query);
            clear(&mut table);
            assert_eq!(table.visible_count(), 3, "after {query:?}");
        }
    }

    #[test]
    fn no_match_hides_everything() {
        let (_dir, mut table) = table_of(&["Tree01", "Rock02"]);

        search(&mut table, "nothing-like-this");
        assert_eq!(table.visible_count(), 0);
    }

    #[test]
    fn matches_ignores_image_column() {
        let (_dir, table) = table_of(&["Tree01"]);
        let row = &table.rows()[0];

        // The thumbnail path contains the guid, but only text cells count.
        assert!(!matches(row, "guid-0"));
        assert!(matches(row, "tree"));
    }
}
