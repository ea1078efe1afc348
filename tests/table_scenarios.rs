use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;

use taskgrid::model::config::SeedLists;
use taskgrid::model::row::Field;
use taskgrid::table::controller::TableController;
use taskgrid::table::seed::seed_rows;
use taskgrid::table::selection::{Selection, SelectionMode};

fn seeded_table(projects: &[&str], count: usize) -> TableController {
    let lists = SeedLists {
        projects: projects.iter().map(|p| p.to_string()).collect(),
        ..SeedLists::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    TableController::new(seed_rows(&lists, count, &mut rng))
}

#[test]
fn editing_one_task_leaves_the_rest_untouched() {
    let mut table = seeded_table(&["project0"], 10);
    let before = table.rows().to_vec();

    table.update_field(3, Field::Task, "Write spec");

    assert_eq!(table.len(), 10);
    assert_eq!(table.row(3).unwrap().task, "Write spec");
    for (i, row) in table.rows().iter().enumerate() {
        if i != 3 {
            assert_eq!(*row, before[i]);
        }
    }
}

#[test]
fn bulk_apply_rewrites_every_project() {
    let mut table = seeded_table(&["project0"], 10);
    let mut selection = Selection::new(SelectionMode::Multiple);
    assert!(table.rows().iter().all(|r| r.project == "project0"));

    table.set_selected_project("project2");
    table.apply_project_to_all(&mut selection);

    assert!(table.rows().iter().all(|r| r.project == "project2"));
}

#[test]
fn bulk_apply_clears_the_selection() {
    let mut table = seeded_table(&["project0"], 10);
    let mut selection = Selection::new(SelectionMode::Multiple);
    for i in [1, 4, 7] {
        selection.toggle(i);
    }
    assert_eq!(selection.count(), 3);

    table.apply_project_to_all(&mut selection);

    assert_eq!(selection.count(), 0);
}

#[test]
fn expand_toggle_returns_to_where_it_started() {
    let mut table = seeded_table(&["project0"], 5);
    table.toggle_description_expanded(2);
    assert!(table.row(2).unwrap().description_expanded);
    table.toggle_description_expanded(2);
    assert!(!table.row(2).unwrap().description_expanded);
}

#[test]
fn keys_stay_unique_through_a_session_of_edits() {
    let mut table = seeded_table(&["project0", "project1"], 10);
    let mut selection = Selection::new(SelectionMode::Multiple);

    table.update_field(0, Field::Project, "project9");
    table.update_field(5, Field::Description, "rewritten");
    table.toggle_description_expanded(5);
    table.set_selected_project("project1");
    table.apply_project_to_all(&mut selection);

    let mut keys: Vec<&str> = table.rows().iter().map(|r| r.key.as_str()).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 10);
}
