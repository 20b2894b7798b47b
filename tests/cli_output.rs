//! Output formatting tests for the CLI.

use trelloapi::{Board, Entity, Label, PrettyPrint};

fn make_test_board() -> Board {
    Board::from_json(serde_json::json!({
        "id": "b1",
        "name": "Roadmap",
        "desc": "Q3 plans",
        "url": "https://trello.com/b/aaa/roadmap",
        "shortUrl": "https://trello.com/b/aaa"
    }))
    .unwrap()
}

#[test]
fn test_json_output_uses_wire_names() {
    let board = make_test_board();
    let json_output = serde_json::to_string_pretty(&board).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json_output).unwrap();
    assert_eq!(parsed["desc"], "Q3 plans");
    assert_eq!(parsed["shortUrl"], "https://trello.com/b/aaa");
}

#[test]
fn test_json_output_parses_back() {
    let board = make_test_board();
    let value = serde_json::to_value(&board).unwrap();
    assert_eq!(Board::from_json(value).unwrap(), board);
}

#[test]
fn test_default_output_is_not_json() {
    let board = make_test_board();
    let pretty_output = board.pretty_print();

    let parse_result: Result<serde_json::Value, _> = serde_json::from_str(&pretty_output);
    assert!(parse_result.is_err());
    assert!(pretty_output.starts_with("Board: Roadmap"));
    assert!(pretty_output.contains("Description:    Q3 plans"));
}

#[test]
fn test_label_pretty_print_shows_color() {
    let label = Label::from_json(serde_json::json!({
        "id": "lb1",
        "name": "Bug",
        "color": "red",
        "uses": 2,
        "idBoard": "b1"
    }))
    .unwrap();

    let output = label.pretty_print();
    assert!(output.starts_with("Label: Bug"));
    assert!(output.contains("Color:          red"));
    assert!(output.contains("Uses:           2"));
}
