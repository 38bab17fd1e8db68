use crate::FieldChangeBuilder;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_unchanged_value_when_tracked_then_no_change_recorded() {
    let mut changes = FieldChangeBuilder::new();

    changes.track("title", "Same", "Same");

    assert!(changes.is_empty());
}

#[test]
fn given_changed_value_when_tracked_then_old_and_new_recorded() {
    let mut changes = FieldChangeBuilder::new();

    changes.track("status", "todo", "done");
    let built = changes.build();

    assert_that!(built.len(), eq(1));
    assert_eq!(built[0].field_name, "status");
    assert_eq!(built[0].old_value.as_deref(), Some("todo"));
    assert_eq!(built[0].new_value.as_deref(), Some("done"));
}

#[test]
fn given_value_cleared_when_tracked_option_then_new_value_is_none() {
    let mut changes = FieldChangeBuilder::new();

    changes.track_option("story_points", &Some(5), &None);
    let built = changes.build();

    assert_that!(built.len(), eq(1));
    assert_eq!(built[0].old_value.as_deref(), Some("5"));
    assert_eq!(built[0].new_value, None);
}
