use anyhow::{anyhow, Result};
use eframe::egui;
use egui::ViewportBuilder;
use std::sync::Arc;
use std::time::Duration;

use hn_search::config::Config;
use hn_search::db::{KeyValueStore, MemoryStore, SqliteStore};
use hn_search::hn_client::HackerNewsClient;
use hn_search::logging::init_logging;
use hn_search::runtime::Runtime;
use hn_search::state::Msg;
use hn_search::theme::AppTheme;
use hn_search::view;

fn main() -> Result<()> {
    let config = match Config::default_path() {
        Ok(path) => Config::load_or_default(&path),
        Err(_) => Config::default(),
    };
    init_logging(&config.log_level);

    let store = open_store(&config);
    let client = HackerNewsClient::new(&config.endpoint, config.request_timeout())?;
    tracing::info!(endpoint = client.endpoint(), "starting HN Search");

    // Captured once at launch; later clock changes do not flip the theme
    let light_on = config
        .theme
        .initial_light_on(chrono::Local::now().time());

    let mut runtime = Runtime::new(Arc::new(client), store, light_on);
    runtime.dispatch(Msg::Startup);

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 400.0])
            .with_title("HN Search"),
        ..Default::default()
    };

    eframe::run_native(
        "HN Search",
        options,
        Box::new(move |_cc| Ok(Box::new(HnSearchApp::new(runtime)))),
    )
    .map_err(|e| anyhow!("failed to run window: {}", e))
}

/// Falls back to an in-memory slot when the settings database is unusable,
/// so the app still works, just without remembering the search.
fn open_store(config: &Config) -> Box<dyn KeyValueStore> {
    let opened = config
        .data_dir()
        .map_err(|e| e.to_string())
        .and_then(|dir| SqliteStore::open_in(&dir).map_err(|e| e.to_string()));

    match opened {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "settings database unavailable, search term will not persist");
            Box::new(MemoryStore::default())
        }
    }
}

struct HnSearchApp {
    runtime: Runtime,
    filter_input: String,
}

impl HnSearchApp {
    fn new(runtime: Runtime) -> Self {
        Self {
            runtime,
            filter_input: String::new(),
        }
    }
}

impl eframe::App for HnSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.runtime.poll();

        let theme = AppTheme::for_mode(self.runtime.state().light_on);
        theme.apply_to_ctx(ctx);

        let mut msgs = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            msgs = view::render(ui, self.runtime.state(), &theme, &mut self.filter_input);
        });

        for msg in msgs {
            self.runtime.dispatch(msg);
        }

        // Keep polling while a fetch is in flight
        if self.runtime.state().loading {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
