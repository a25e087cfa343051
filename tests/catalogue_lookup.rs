use taskorder::{Catalogue, Task};
use taskorder_test_utils::builders::CatalogueBuilder;
use taskorder_test_utils::chores;

#[test]
fn lookup_returns_declared_dependencies_in_order() {
    let catalogue = Catalogue::from_tasks(&chores());

    assert_eq!(catalogue.len(), 8);
    assert!(catalogue.contains("mow lawn"));
    assert_eq!(
        catalogue.dependencies_of("build fence"),
        ["buy supplies", "mow lawn"]
    );
    assert!(catalogue.dependencies_of("get out of bed").is_empty());
}

#[test]
fn unknown_name_has_no_dependencies() {
    let catalogue = Catalogue::from_tasks(&chores());

    assert!(!catalogue.contains("nap"));
    assert!(catalogue.dependencies_of("nap").is_empty());
}

#[test]
fn duplicates_keep_first_position_and_last_dependencies() {
    let tasks = CatalogueBuilder::new()
        .task("a", &["x"])
        .task("b", &[])
        .task("a", &["b"])
        .build();
    let catalogue = Catalogue::from(tasks.as_slice());

    assert_eq!(catalogue.len(), 2);
    assert_eq!(catalogue.task_names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(catalogue.dependencies_of("a"), ["b"]);
}

#[test]
fn empty_task_list_builds_empty_catalogue() {
    let catalogue = Catalogue::from_tasks(&[]);

    assert!(catalogue.is_empty());
    assert_eq!(catalogue.task_names().count(), 0);
}

#[test]
fn task_new_accepts_str_and_string() {
    let a = Task::new("a", ["b", "c"]);
    let b = Task::new(String::from("a"), vec![String::from("b"), String::from("c")]);

    assert_eq!(a, b);
    assert_eq!(a.dependencies, vec!["b".to_string(), "c".to_string()]);
}
