use super::*;

#[test]
fn edits_multibyte_text_by_char() {
    let mut input = Input::default();
    for c in "café".chars() {
        input.insert_char(c);
    }
    assert_eq!(input.cursor, 4);
    input.backspace();
    assert_eq!(input.buf, "caf");

    input.move_left();
    input.insert_char('ü');
    assert_eq!(input.buf, "caüf");
    input.move_right();
    input.move_right();
    assert_eq!(input.cursor, 4);
}

#[test]
fn delete_at_end_is_noop() {
    let mut input = Input::default();
    input.set("ab".to_string());
    input.delete();
    assert_eq!(input.buf, "ab");
    input.move_left();
    input.delete();
    assert_eq!(input.buf, "a");
}

#[test]
fn history_walks_back_and_forward() {
    let mut input = Input::default();
    input.push_history("group-by pane");
    input.push_history("group-by pane");
    input.push_history("  ");
    input.push_history("expand-level 2");
    assert_eq!(input.history.len(), 2);

    input.history_up();
    assert_eq!(input.buf, "expand-level 2");
    input.history_up();
    assert_eq!(input.buf, "group-by pane");
    input.history_up();
    assert_eq!(input.buf, "group-by pane");

    input.history_down();
    assert_eq!(input.buf, "expand-level 2");
    input.history_down();
    assert_eq!(input.buf, "");
    assert_eq!(input.history_pos, None);
}
