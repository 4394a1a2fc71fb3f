//! # housepanelctl — command-line panel client
//!
//! Composition root that wires the adapters together and runs one panel
//! action.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env vars) and CLI arguments
//! - Initialize tracing
//! - Construct the reqwest transport, UI change bus, and alert sink
//! - Construct the controller, injecting the adapters via port traits
//! - Run the requested action and check the unload guard before exiting
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no panel logic belongs here.

mod config;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use housepanel_adapter_http_reqwest::ReqwestTransport;
use housepanel_app::controller::PanelController;
use housepanel_app::ports::AlertSink;
use housepanel_app::ui_bus::InProcessUiBus;
use housepanel_app::unload::UnloadGuard;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(
    name = "housepanelctl",
    about = "Send remote-control, light-scene, and switch commands to the house panel server"
)]
struct Cli {
    /// Override the configured API endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Press a remote button once.
    Press {
        /// Device the button belongs to (e.g. `tv`).
        device: String,
        /// Button name (e.g. `power`).
        button: String,
    },
    /// Press and hold a remote button, re-sending until released.
    Hold {
        /// Device the button belongs to.
        device: String,
        /// Button name.
        button: String,
        /// How long to hold, in milliseconds.
        #[arg(long, default_value_t = 1500)]
        ms: u64,
    },
    /// Activate a light scene.
    Scene {
        /// Scene name (e.g. `movie night`).
        name: String,
    },
    /// Turn a switch on.
    On {
        /// Switch name.
        name: String,
    },
    /// Turn a switch off.
    Off {
        /// Switch name.
        name: String,
    },
}

/// Console alert surface — the terminal stand-in for the browser alert box.
struct ConsoleAlerts;

impl AlertSink for ConsoleAlerts {
    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    let cli = Cli::parse();
    let endpoint = cli.endpoint.or(config.api.endpoint);
    if let Some(endpoint) = &endpoint {
        tracing::debug!(endpoint = %endpoint, "using api endpoint");
    }

    let ui = Arc::new(InProcessUiBus::new());
    let controller = PanelController::new(
        endpoint,
        ReqwestTransport::new(),
        Arc::clone(&ui),
        Arc::new(ConsoleAlerts),
    );
    let guard = UnloadGuard::new(controller.saves());

    match cli.command {
        Command::Press { device, button } => {
            controller.remote_button_press(&device, &button).await;
        }
        Command::Hold { device, button, ms } => {
            let mut changes = ui.subscribe();
            controller.remote_button_down(&device, &button);
            tokio::time::sleep(Duration::from_millis(ms)).await;

            controller.remote_button_up();
            // wait for the in-flight response so the repeat loop winds down
            let _ = changes.borrow_and_update();
            let _ = tokio::time::timeout(Duration::from_secs(2), changes.changed()).await;
        }
        Command::Scene { name } => controller.set_light_scene(&name).await,
        Command::On { name } => controller.turn_on_switch(&name).await,
        Command::Off { name } => controller.turn_off_switch(&name).await,
    }

    if let Some(warning) = guard.warning() {
        eprintln!("{warning}");
        let _ = tokio::time::timeout(Duration::from_secs(5), async {
            while guard.warning().is_some() {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
        })
        .await;
    }

    Ok(())
}
