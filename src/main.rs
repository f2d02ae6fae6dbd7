//! Canary entry point
//!
//! Native: command line access to the saved ads list in a JSON preference file.
//! Web: opens LocalStorage and saves any deep link passed in the URL fragment.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use anyhow::{Context, Result, bail};
    use clap::{Parser, Subcommand};

    use canary::ad_unit::keys;
    use canary::persistence::FileStore;
    use canary::{AdFormat, AdUnitRecord, LogLevel, SavedAdsStore, Settings, parse_deep_link};

    #[derive(Parser)]
    #[command(name = "canary")]
    #[command(version = env!("CARGO_PKG_VERSION"))]
    #[command(about = "Manage saved ad units", long_about = None)]
    struct Cli {
        /// Preference file holding saved ads and settings
        #[arg(long, global = true, env = "CANARY_STORE", default_value = "canary-store.json")]
        store: PathBuf,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Subcommand)]
    enum Commands {
        /// List saved ad units
        List,

        /// Open a mopub://load deep link
        Open {
            url: String,

            /// Only validate and print the ad unit
            #[arg(long)]
            no_save: bool,
        },

        /// Save an ad unit
        Add {
            id: String,
            name: String,

            /// Ad format used to pick the rendering screen
            #[arg(short, long, default_value = "Banner")]
            format: String,

            #[arg(long)]
            keywords: Option<String>,

            #[arg(long)]
            user_data_keywords: Option<String>,

            #[arg(long)]
            custom_data: Option<String>,

            /// Rendering screen to use instead of the format default
            #[arg(long)]
            override_class: Option<String>,
        },

        /// Remove a saved ad unit by id
        Remove { id: String },

        /// Show or change the console log level
        LogLevel { level: Option<String> },
    }

    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        let mut storage = FileStore::new(&cli.store);
        let settings = Settings::load(&storage);
        init_logging(settings.log_level);

        match cli.command {
            Commands::LogLevel { level } => match level {
                None => println!("{}", settings.log_level.as_str()),
                Some(raw) => {
                    let Some(log_level) = LogLevel::from_str(&raw) else {
                        bail!("unknown log level `{raw}`");
                    };
                    let updated = Settings { log_level };
                    updated.save(&mut storage);
                    println!("{}", log_level.as_str());
                }
            },
            command => run_saved_ads(command, SavedAdsStore::new(storage))?,
        }
        Ok(())
    }

    fn run_saved_ads(command: Commands, mut store: SavedAdsStore<FileStore>) -> Result<()> {
        store.load_all();
        log::debug!(
            "{} saved ad units in {}",
            store.records().len(),
            store.storage().path().display()
        );

        match command {
            Commands::List => {
                for record in store.records() {
                    print_record(record);
                }
            }
            Commands::Open { url, no_save } => {
                let link = parse_deep_link(&url).with_context(|| format!("cannot open {url}"))?;
                print_record(&link.record);
                if !no_save {
                    store.add(link.record);
                }
            }
            Commands::Add {
                id,
                name,
                format,
                keywords,
                user_data_keywords,
                custom_data,
                override_class,
            } => {
                let Some(format) = AdFormat::from_str(&format) else {
                    bail!("unknown ad format `{format}`");
                };
                let info: HashMap<String, String> = [
                    (keys::ID, Some(id)),
                    (keys::NAME, Some(name)),
                    (keys::KEYWORDS, keywords),
                    (keys::USER_DATA_KEYWORDS, user_data_keywords),
                    (keys::CUSTOM_DATA, custom_data),
                    (keys::OVERRIDE_CLASS, override_class),
                ]
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
                .collect();

                let record = AdUnitRecord::from_info(&info, format.rendering_view_controller())
                    .context("ad unit needs an id and a name")?;
                store.add(record);
            }
            Commands::Remove { id } => store.remove_id(&id),
            Commands::LogLevel { .. } => {}
        }

        if store.last_persist_failed() {
            log::warn!("Saved ads could not be written; changes are lost on exit");
        }
        Ok(())
    }

    fn print_record(record: &AdUnitRecord) {
        println!(
            "{}\t{}\t{}",
            record.id, record.name, record.view_controller_class_name
        );
    }

    fn init_logging(level: LogLevel) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(level.to_filter());
        // RUST_LOG overrides the saved level
        builder.parse_default_env();
        builder.init();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    use canary::persistence::LocalStore;
    use canary::{SavedAdsStore, Settings, parse_deep_link};

    console_error_panic_hook::set_once();

    let storage = match LocalStore::open() {
        Ok(storage) => storage,
        Err(e) => {
            web_sys::console::error_1(&format!("Canary: {e}").into());
            return;
        }
    };

    let settings = Settings::load(&storage);
    if let Some(level) = settings.log_level.to_filter().to_level() {
        let _ = console_log::init_with_level(level);
    }

    let mut store = SavedAdsStore::new(storage);
    store.load_all();

    // Deep link is passed as the URL fragment: page.html#mopub://load?...
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    if let Some(link) = hash.strip_prefix('#').filter(|h| !h.is_empty()) {
        match parse_deep_link(link) {
            Ok(link) => store.add(link.record),
            Err(e) => log::warn!("Ignoring deep link: {e}"),
        }
    }

    log::info!("Canary ready ({} saved ad units)", store.records().len());
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
