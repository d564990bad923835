use clap::Parser;
use mailgate_api::AppState;
use mailgate_domain::config::CliOverrides;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "mailgate")]
#[command(version)]
#[command(about = "Mailgate - email-domain allow-list gate for account registration")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Database path
    #[arg(long)]
    database: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        database_path: cli.database.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting Mailgate v{}", env!("CARGO_PKG_VERSION"));

    let database_url = format!("sqlite:{}", config.database.path);
    let pool = bootstrap::init_database(&database_url, &config.database).await?;

    let repos = di::Repositories::new(pool);
    let use_cases = di::UseCases::new(&repos);

    let app_state = AppState {
        get_whitelist: use_cases.get_whitelist,
        add_domain: use_cases.add_domain,
        remove_domain: use_cases.remove_domain,
        evaluate_registration: use_cases.evaluate_registration,
        admin_api_key: config.admin.api_key.as_deref().map(Arc::from),
    };

    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    server::start_web_server(web_addr, app_state).await
}
