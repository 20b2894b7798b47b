//! Basic example demonstrating the Trello API client.
//!
//! Run with:
//! ```
//! TRELLO_API_KEY=your-key TRELLO_API_TOKEN=your-token cargo run --example basic
//! ```

use trelloapi::{get_random_label_color, CardCreate, CardUpdate, LabelCreate, Position, TrelloClient};

#[tokio::main]
async fn main() -> trelloapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    println!("Creating Trello client...");
    let mut client = TrelloClient::from_env()?;
    let api = client.enter()?;
    println!("Connected to: {}", api.base_url());

    println!("\n--- Boards ---");
    let boards = api.get_boards().await?;
    for board in &boards {
        println!("  - {} ({})", board.name, board.id);
    }

    let Some(board) = boards.first() else {
        println!("No boards found");
        return Ok(());
    };

    println!("\n--- Lists on {} ---", board.name);
    let mut lists = api.get_board_lists(&board.id).await?;
    lists.sort_by(|a, b| a.position.total_cmp(&b.position));
    for list in &lists {
        let cards = api.get_list_cards(&list.id).await?;
        println!("  {} ({} cards)", list.name, cards.len());
    }

    let Some(list) = lists.first() else {
        return Ok(());
    };

    println!("\n--- Creating a labelled card ---");
    let label = api
        .create_label(&LabelCreate::new("demo", get_random_label_color(), &board.id)?)
        .await?;
    println!("Label: {} ({})", label.name, label.color);

    let create = CardCreate::new("Try the trelloapi crate", &list.id)?
        .description("Created by the basic example")
        .position(Position::TOP)
        .label_ids([label.id.clone()]);
    let card = api.create_card(&create).await?;
    println!("Card: {} -> {}", card.name, card.short_url);

    let update = CardUpdate::new(&card.id)?.completed(true).closed(true);
    let card = api.update_card(&update).await?;
    println!("Archived: {}", card.closed);

    api.delete_card(&card.id).await?;
    api.delete_label(&label.id).await?;

    println!("\nDone!");
    Ok(())
}
