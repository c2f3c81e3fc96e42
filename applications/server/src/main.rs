/// Onslaught Server - Bungie player search and Onslaught history proxy
use clap::{Parser, Subcommand};
use onslaught_server::{api, config::ServerConfig, state::AppState};
use std::{net::SocketAddr, path::PathBuf};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "onslaught-server")]
#[command(about = "Destiny 2 player search and Onslaught history server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Search players by display name prefix and print them as JSON
    Search {
        /// Display name prefix
        name: String,
        /// Result page
        #[arg(short, long, default_value_t = 0)]
        page: u32,
    },
    /// Print a player's Onslaught history as JSON
    History {
        membership_id: String,
        membership_type: i32,
        /// Character ids to include
        #[arg(required = true)]
        character_ids: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "onslaught_server=info,bungie_client=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::Search { name, page } => {
            search(&config, &name, page).await?;
        }
        Commands::History {
            membership_id,
            membership_type,
            character_ids,
        } => {
            history(&config, &membership_id, membership_type, &character_ids).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Onslaught Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);
    tracing::info!("Bungie API root: {}", config.bungie.api_root);

    let app_state = AppState::from_config(&config)?;

    let app = api::create_router(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(false)),
        )
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn search(config: &ServerConfig, name: &str, page: u32) -> anyhow::Result<()> {
    let app_state = AppState::from_config(config)?;
    let users = app_state.players.resolve_by_name(name, page, true).await?;

    println!("{}", serde_json::to_string_pretty(&users)?);
    Ok(())
}

async fn history(
    config: &ServerConfig,
    membership_id: &str,
    membership_type: i32,
    character_ids: &[String],
) -> anyhow::Result<()> {
    let app_state = AppState::from_config(config)?;
    let activities = app_state
        .activities
        .resolve_onslaught_history(membership_id, membership_type, character_ids)
        .await?;

    println!("{}", serde_json::to_string_pretty(&activities)?);
    Ok(())
}
