pub mod health;
pub mod help;
pub mod load;
pub mod navigate;
pub mod news;
pub mod render;
pub mod show;

use pricecast::api::prediction::PredictionClient;
use pricecast::{ChartSession, Config, PricecastError};
use tracing::{error, info, warn};

/// State shared by all commands of one interactive session
pub struct App {
    pub config: Config,
    pub client: PredictionClient,
    pub session: ChartSession,
    /// Symbol (or file name) of the loaded series
    pub symbol: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let client = PredictionClient::new(config.api_url.clone());
        Self {
            config,
            client,
            session: ChartSession::default(),
            symbol: None,
        }
    }

    /// The loaded symbol, or an error telling the user to load one first
    pub fn require_series(&self) -> Result<&str, PricecastError> {
        self.symbol.as_deref().ok_or_else(|| {
            PricecastError::Usage("No series loaded. Use `load <stock>` or `open <file>` first.".to_string())
        })
    }
}

/// What the loop should do after a command
#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Nothing,
    Quit,
}

/// Run one command line against `app`
pub async fn execute_line(app: &mut App, line: &str) -> Result<Reply, PricecastError> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return Ok(Reply::Nothing);
    }

    let command = parts[0].to_lowercase();
    let args = &parts[1..];

    let text = match command.as_str() {
        "load" | "predict" => load::execute(app, args).await?,
        "open" | "file" => load::execute_open(app, args)?,
        "next" | "n" => navigate::execute_next(app)?,
        "prev" | "previous" | "p" => navigate::execute_previous(app)?,
        "click" | "zoom" => navigate::execute_click(app, args)?,
        "show" | "ls" => show::execute(app)?,
        "months" => show::execute_months(app)?,
        "render" | "chart" => render::execute(app, args)?,
        "news" => news::execute(app, args).await?,
        "health" | "ping" => health::execute(app).await?,
        "help" | "?" => help::execute(),
        "quit" | "exit" | "q" => return Ok(Reply::Quit),
        _ => format!("Unknown command `{}`. Type `help` for the list of commands.", parts[0]),
    };

    Ok(Reply::Text(text))
}

/// Run one line and print its outcome; returns false when the user quits
pub async fn handle_line(app: &mut App, line: &str) -> bool {
    match execute_line(app, line).await {
        Ok(Reply::Text(text)) => {
            println!("{}", text);
            true
        }
        Ok(Reply::Nothing) => true,
        Ok(Reply::Quit) => {
            info!("Quit requested");
            false
        }
        Err(PricecastError::Usage(message)) => {
            warn!("Command `{}` rejected: {}", line.trim(), message);
            eprintln!("{}", message);
            true
        }
        Err(e) => {
            error!("Error executing command `{}`: {}", line.trim(), e);
            eprintln!("Error: {}", e);
            true
        }
    }
}
