//! JerseyKraft storefront CLI.
//!
//! Holds the jersey design state for one session, renders front/back
//! previews, and talks to the JerseyKraft backend for roster import, AI
//! logo generation, and checkout. Each command is one user action: validate
//! input locally, issue at most one request, display the typed outcome.

pub mod backend;
pub mod cli;
pub mod commands;
pub mod domain;
pub mod services;

pub use backend::{
    Backend, BackendConfig, BackendError, DesignPayload, LogoRequest, LogoResult, OrderPayload,
    OrderResult, RosterImportResult,
};
pub use cli::{
    Cli, Commands, LogoCommands, OrderCommands, PaymentMethod, RosterCommands, DEFAULT_API_BASE,
};
pub use commands::handle_commands;
pub use domain::models::{
    BuyerDetails, ColorParseError, DesignState, HexColor, JerseyPreview, JsonOut, PreviewPanel,
    RosterCheckReport,
};
pub use services::audit::audit;
pub use services::config::{load_config, resolve_backend, resolve_team_metadata, ConfigFile};
pub use services::output::{print_failure, print_one, print_rows};
pub use services::preview::render_preview;
pub use services::roster::{load_roster_file, RosterFile};
pub use services::session::{RequestSlot, RequestState, Studio};
