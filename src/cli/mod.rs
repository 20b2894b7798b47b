//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the trelloapi binary.

use clap::{Args, Parser, Subcommand};

use crate::{LabelColor, OAuthCallbackMethod, OAuthExpiration, OAuthScope, Position};

/// Trello API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "trelloapi", about = "Trello API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    /// Log requests to stderr.
    #[arg(short, long, global = true, default_value = "false")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List boards of the authenticated member.
    Boards,

    /// List the lists on a board.
    Lists {
        /// Board id.
        board_id: String,
    },

    /// List the labels on a board.
    Labels {
        /// Board id.
        board_id: String,
    },

    /// List the cards in a list.
    Cards {
        /// List id.
        list_id: String,
    },

    /// Create a card.
    CreateCard {
        /// List to create the card in.
        list_id: String,

        /// Card title.
        name: String,

        #[command(flatten)]
        fields: CardFields,
    },

    /// Update a card. Only the given options are changed.
    UpdateCard {
        /// Card id.
        id: String,

        /// New title.
        #[arg(long)]
        name: Option<String>,

        /// Move the card to this list.
        #[arg(long = "list")]
        list_id: Option<String>,

        #[command(flatten)]
        fields: CardFields,
    },

    /// Delete a card.
    DeleteCard {
        /// Card id.
        id: String,
    },

    /// Create a label on a board.
    CreateLabel {
        /// Board id.
        board_id: String,

        /// Label text.
        name: String,

        /// Label color (random when omitted).
        #[arg(long)]
        color: Option<LabelColor>,
    },

    /// Delete a label.
    DeleteLabel {
        /// Label id.
        id: String,
    },

    /// Print the OAuth authorization URL for an API key.
    OauthUrl {
        /// Application API key.
        #[arg(long, env = "TRELLO_API_KEY")]
        key: String,

        /// Where Trello redirects after authorization.
        #[arg(long)]
        return_url: String,

        /// Requested scopes (comma-separated).
        #[arg(long, value_delimiter = ',', default_value = "read")]
        scope: Vec<OAuthScope>,

        /// Token lifetime.
        #[arg(long, default_value = "30days")]
        expiration: OAuthExpiration,

        /// How the token is handed back.
        #[arg(long, default_value = "fragment")]
        callback_method: OAuthCallbackMethod,
    },
}

/// Optional card fields shared by create and update.
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct CardFields {
    /// Card description.
    #[arg(long)]
    pub description: Option<String>,

    /// `top`, `bottom` or a positive rank.
    #[arg(long)]
    pub position: Option<Position>,

    /// Archived flag (`true` or `false`).
    #[arg(long)]
    pub closed: Option<bool>,

    /// Due-complete flag (`true` or `false`).
    #[arg(long)]
    pub completed: Option<bool>,

    /// Label ids (comma-separated). Pass an empty value to clear.
    #[arg(long, value_delimiter = ',', num_args = 0..)]
    pub labels: Option<Vec<String>>,
}
