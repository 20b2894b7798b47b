//! Trello API CLI binary.
//!
//! A command-line interface for interacting with the Trello API.

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing::Level;
use trelloapi::cli::{CardFields, Cli, Command};
use trelloapi::{
    generate_oauth_url, Board, Card, CardCreate, CardUpdate, Label, LabelColor, LabelCreate, List,
    OAuthRequest, PrettyPrint, TrelloClient,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    // The OAuth URL only needs the application key.
    if let Command::OauthUrl {
        key,
        return_url,
        scope,
        expiration,
        callback_method,
    } = cli.command
    {
        let request = OAuthRequest {
            callback_method,
            return_url,
            scopes: scope,
            expiration,
            key,
        };
        return match generate_oauth_url(&request) {
            Ok(url) => {
                println!("{url}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut client = match TrelloClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set TRELLO_API_KEY and TRELLO_API_TOKEN environment variables");
            return ExitCode::FAILURE;
        }
    };

    let result = match client.enter() {
        Ok(api) => run(&api, cli.command, cli.json).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &TrelloClient, command: Command, json: bool) -> trelloapi::Result<()> {
    match command {
        Command::Boards => {
            let boards = client.get_boards().await?;
            output_list(&boards, json, |b| BoardRow::from(b))?;
        }
        Command::Lists { board_id } => {
            let lists = client.get_board_lists(&board_id).await?;
            output_list(&lists, json, |l| ListRow::from(l))?;
        }
        Command::Labels { board_id } => {
            let labels = client.get_board_labels(&board_id).await?;
            output_list(&labels, json, |l| LabelRow::from(l))?;
        }
        Command::Cards { list_id } => {
            let cards = client.get_list_cards(&list_id).await?;
            output_list(&cards, json, |c| CardRow::from(c))?;
        }
        Command::CreateCard {
            list_id,
            name,
            fields,
        } => {
            let create = apply_create_fields(CardCreate::new(name, list_id)?, fields);
            let card = client.create_card(&create).await?;
            output_single(&card, json)?;
        }
        Command::UpdateCard {
            id,
            name,
            list_id,
            fields,
        } => {
            let mut update = apply_update_fields(CardUpdate::new(id)?, fields);
            update.name = name;
            update.list_id = list_id;
            let card = client.update_card(&update).await?;
            output_single(&card, json)?;
        }
        Command::DeleteCard { id } => {
            client.delete_card(&id).await?;
            eprintln!("Deleted card {id}");
        }
        Command::CreateLabel {
            board_id,
            name,
            color,
        } => {
            let color = color.unwrap_or_else(LabelColor::random);
            let label = client
                .create_label(&LabelCreate::new(name, color, board_id)?)
                .await?;
            output_single(&label, json)?;
        }
        Command::DeleteLabel { id } => {
            client.delete_label(&id).await?;
            eprintln!("Deleted label {id}");
        }
        Command::OauthUrl { .. } => unreachable!("handled before the client is built"),
    }
    Ok(())
}

fn label_list(labels: Vec<String>) -> Vec<String> {
    labels.into_iter().filter(|l| !l.is_empty()).collect()
}

fn apply_create_fields(mut create: CardCreate, fields: CardFields) -> CardCreate {
    create.description = fields.description;
    create.position = fields.position;
    create.closed = fields.closed;
    create.completed = fields.completed;
    create.label_ids = fields.labels.map(label_list);
    create
}

fn apply_update_fields(mut update: CardUpdate, fields: CardFields) -> CardUpdate {
    update.description = fields.description;
    update.position = fields.position;
    update.closed = fields.closed;
    update.completed = fields.completed;
    update.label_ids = fields.labels.map(label_list);
    update
}

fn output_single<T: Serialize + PrettyPrint>(item: &T, json: bool) -> trelloapi::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(item)?);
    } else {
        println!("{}", item.pretty_print());
    }
    Ok(())
}

fn output_list<T, R, F>(items: &[T], json: bool, to_row: F) -> trelloapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        println!("\n{} total", items.len());
    }
    Ok(())
}

// Table row types for non-JSON output

#[derive(Tabled)]
struct BoardRow {
    id: String,
    name: String,
    url: String,
}

impl From<&Board> for BoardRow {
    fn from(b: &Board) -> Self {
        Self {
            id: b.id.clone(),
            name: b.name.clone(),
            url: b.short_url.clone(),
        }
    }
}

#[derive(Tabled)]
struct ListRow {
    id: String,
    name: String,
    closed: bool,
}

impl From<&List> for ListRow {
    fn from(l: &List) -> Self {
        Self {
            id: l.id.clone(),
            name: l.name.clone(),
            closed: l.closed,
        }
    }
}

#[derive(Tabled)]
struct CardRow {
    id: String,
    name: String,
    done: bool,
    labels: String,
}

impl From<&Card> for CardRow {
    fn from(c: &Card) -> Self {
        Self {
            id: c.id.clone(),
            name: c.name.clone(),
            done: c.completed,
            labels: c.label_ids.join(", "),
        }
    }
}

#[derive(Tabled)]
struct LabelRow {
    id: String,
    name: String,
    color: String,
    uses: u64,
}

impl From<&Label> for LabelRow {
    fn from(l: &Label) -> Self {
        Self {
            id: l.id.clone(),
            name: l.name.clone(),
            color: l.color.to_string(),
            uses: l.uses,
        }
    }
}
