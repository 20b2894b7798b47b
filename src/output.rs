//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use crate::{Board, Card, Label, List};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn divider(header: &str) -> String {
    "─".repeat(header.chars().count().max(30))
}

impl PrettyPrint for Board {
    fn pretty_print(&self) -> String {
        let header = format!("Board: {}", self.name);

        let mut lines = vec![
            header.clone(),
            divider(&header),
            format!("ID:             {}", self.id),
            format!("URL:            {}", self.short_url),
        ];

        if !self.description.is_empty() {
            lines.push(format!("Description:    {}", self.description));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for List {
    fn pretty_print(&self) -> String {
        let header = format!("List: {}", self.name);

        let mut lines = vec![
            header.clone(),
            divider(&header),
            format!("ID:             {}", self.id),
            format!("Board:          {}", self.board_id),
            format!("Position:       {}", self.position),
        ];

        if self.closed {
            lines.push("State:          archived".to_string());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Card {
    fn pretty_print(&self) -> String {
        let header = format!("Card: {}", self.name);

        let mut lines = vec![
            header.clone(),
            divider(&header),
            format!("ID:             {}", self.id),
            format!("List:           {}", self.list_id),
            format!("URL:            {}", self.short_url),
            format!("Position:       {}", self.position),
            format!("Complete:       {}", if self.completed { "yes" } else { "no" }),
        ];

        if !self.label_ids.is_empty() {
            lines.push(format!("Labels:         {}", self.label_ids.join(", ")));
        }

        if self.closed {
            lines.push("State:          archived".to_string());
        }

        if !self.description.is_empty() {
            lines.push(String::new());
            lines.push(self.description.clone());
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Label {
    fn pretty_print(&self) -> String {
        let header = if self.name.is_empty() {
            format!("Label #{}", self.id)
        } else {
            format!("Label: {}", self.name)
        };

        vec![
            header.clone(),
            divider(&header),
            format!("ID:             {}", self.id),
            format!("Color:          {}", self.color),
            format!("Uses:           {}", self.uses),
            format!("Board:          {}", self.board_id),
        ]
        .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Entity;

    #[test]
    fn test_card_pretty_print_format() {
        let card = Card::from_json(serde_json::json!({
            "id": "c1",
            "name": "Write docs",
            "desc": "",
            "shortUrl": "https://trello.com/c/xyz",
            "url": "https://trello.com/c/xyz/1-write-docs",
            "closed": false,
            "pos": 1024,
            "idList": "l1",
            "idBoard": "b1",
            "dueComplete": false,
            "labels": ["lb1", "lb2"]
        }))
        .unwrap();

        let output = card.pretty_print();
        assert!(output.starts_with("Card: Write docs"));
        assert!(output.contains("Labels:         lb1, lb2"));
        assert!(!output.contains("archived"));
    }

    #[test]
    fn test_unnamed_label_uses_id() {
        let label = Label::from_json(serde_json::json!({
            "id": "lb1",
            "name": "",
            "color": "sky",
            "uses": 0,
            "idBoard": "b1"
        }))
        .unwrap();

        let output = label.pretty_print();
        assert!(output.starts_with("Label #lb1"));
        assert!(output.contains("Color:          sky"));
    }
}
