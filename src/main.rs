mod common;
mod config;
mod dashboard;
mod headless;
mod simulator;
mod ui;

use chrono::Utc;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use tokio::runtime::Handle;
use ui::DashboardApp;

use crate::config::AppConfig;
use crate::simulator::ChatSession;

#[derive(Parser)]
#[command(
    name = "messaging_dashboard",
    version,
    about = "Demo dashboard for an instant-messaging platform"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Mode {
    /// Run a conversation without a window and print the transcript
    Simulate {
        /// Message to send; repeat for more. Reads stdin lines when omitted.
        #[arg(long = "message", short = 'm', value_name = "TEXT")]
        messages: Vec<String>,
        /// Print one JSON object per message
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration to the --config path
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);

    match cli.mode {
        Some(Mode::Simulate { messages, json }) => {
            let settings = app_config.simulator_settings();
            if let Err(err) = headless::run(&settings, messages, json).await {
                log::error!("Simulation failed: {err}");
            }
            Ok(())
        }
        Some(Mode::InitConfig) => {
            match config::save_config(&cli.config, &AppConfig::default()) {
                Ok(()) => log::info!("Wrote default config to {}", cli.config),
                Err(err) => log::error!("Failed to write config {}: {err}", cli.config),
            }
            Ok(())
        }
        None => run_dashboard(app_config),
    }
}

fn run_dashboard(app_config: AppConfig) -> Result<(), eframe::Error> {
    let settings = app_config.simulator_settings();
    let history = if app_config.seed_history {
        ui::state::seed_conversation(Utc::now())
    } else {
        Vec::new()
    };
    let session = ChatSession::with_history(Handle::current(), &settings, history);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };
    let title = app_config.window_title.clone();

    eframe::run_native(
        &app_config.window_title,
        options,
        Box::new(move |cc| {
            log::info!(
                "Dashboard started ({} canned replies, {} seeded messages)",
                session.canned_replies().len(),
                session.messages().len()
            );

            Ok(Box::new(DashboardApp::new(cc, session, title)))
        }),
    )
}
