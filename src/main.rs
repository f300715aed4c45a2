use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use toolbox_settings::color::{self, Color, ColorTuple};
use toolbox_settings::lists::PercentPresets;
use toolbox_settings::output;
use toolbox_settings::settings::{self, SettingsStore};
use toolbox_settings::state::{self, PlatformSignals};
use toolbox_settings::uri::Uri;

fn version_string() -> &'static str {
    let tagged = env!("TOOLBOX_RELEASE_TAG");
    if tagged == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("TOOLBOX_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "toolbox-settings")]
#[command(about = "Inspect and edit image toolbox settings")]
#[command(long_about = "\
Inspect and edit image toolbox settings

Settings live in a sparse TOML file. Missing keys take stock defaults and
unknown keys are ignored. Compound values use compact encodings:

  app_color_tuple    = \"<primary>/<secondary>/<tertiary>/<surface>\"
  color_tuple_list   = \"<tuple>*<tuple>*...\"
  presets            = \"500,400,300\"

Colors are signed decimal ARGB integers (0xFF8FDB3A is -7349446).

Run 'toolbox-settings gen-settings' to print a documented settings.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Settings file
    #[arg(long, default_value = "settings.toml", global = true)]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive and print the UI state
    Show {
        /// JSON array of available emoji references
        #[arg(long)]
        emojis: Option<PathBuf>,
        /// Pretend the platform is in dark mode
        #[arg(long)]
        dark: bool,
        /// Print the full state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set one raw setting (value is parsed as TOML, else taken as a string)
    Set { key: String, value: String },
    /// Record an application launch
    Open,
    /// Encode a color tuple from ARGB hex or decimal colors
    EncodeTuple {
        primary: String,
        secondary: Option<String>,
        tertiary: Option<String>,
        surface: Option<String>,
    },
    /// Decode a persisted color tuple
    DecodeTuple { raw: String },
    /// Decode a persisted color tuple list
    DecodeTupleList { raw: String },
    /// Print a stock settings.toml with all options documented
    GenSettings,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Command::Show { emojis, dark, json } => {
            let store = SettingsStore::open(&cli.settings)?;
            let emojis = match emojis {
                Some(path) => load_emojis(&path)?,
                None => Vec::new(),
            };
            let signals = PlatformSignals { system_dark: dark };
            let ui = state::derive_ui_state(store.snapshot(), &emojis, &signals, &PercentPresets);
            if json {
                println!("{}", serde_json::to_string_pretty(&ui)?);
            } else {
                for line in output::format_ui_state(&ui) {
                    println!("{line}");
                }
            }
        }
        Command::Set { key, value } => {
            let mut store = SettingsStore::open(&cli.settings)?;
            store.set_value(&key, parse_value(&key, &value))?;
            println!("{key} updated in {}", store.path().display());
        }
        Command::Open => {
            let mut store = SettingsStore::open(&cli.settings)?;
            let count = store.register_app_open()?.app_open_count;
            println!("Opened {count} time(s)");
            println!("First launch (approximate): {}", state::is_first_launch(count, true));
            println!("First launch (exact): {}", state::is_first_launch(count, false));
        }
        Command::EncodeTuple {
            primary,
            secondary,
            tertiary,
            surface,
        } => {
            let parse = |raw: Option<String>| raw.as_deref().map(parse_color).transpose();
            let tuple = ColorTuple {
                primary: parse_color(&primary)?,
                secondary: parse(secondary)?,
                tertiary: parse(tertiary)?,
                surface: parse(surface)?,
            };
            println!("{}", tuple.encode());
        }
        Command::DecodeTuple { raw } => {
            let tuple = ColorTuple::decode(Some(&raw));
            println!("{}", output::format_tuple(&tuple));
        }
        Command::DecodeTupleList { raw } => {
            for tuple in color::decode_tuple_list(Some(&raw)) {
                println!("{}", output::format_tuple(&tuple));
            }
        }
        Command::GenSettings => {
            print!("{}", settings::stock_settings_toml());
        }
    }

    Ok(())
}

/// Read a JSON array of emoji references.
fn load_emojis(path: &Path) -> Result<Vec<Uri>, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;
    let raw: Vec<String> = serde_json::from_str(&content)?;
    Ok(raw.iter().map(|r| Uri::parse(r)).collect())
}

/// Parse a CLI value as a TOML scalar, falling back to a plain string.
///
/// Text keys always take the value verbatim so encoded colors like
/// `-7349446` aren't read as integers.
fn parse_value(key: &str, raw: &str) -> toml::Value {
    if settings::TEXT_KEYS.contains(&key) {
        return toml::Value::String(raw.to_string());
    }
    toml::from_str::<toml::Table>(&format!("v = {raw}"))
        .ok()
        .and_then(|mut t| t.remove("v"))
        .unwrap_or_else(|| toml::Value::String(raw.to_string()))
}

/// Accepts `#AARRGGBB`, `0xAARRGGBB`, or the persisted decimal form.
fn parse_color(raw: &str) -> Result<Color, String> {
    let hex = raw
        .strip_prefix('#')
        .or_else(|| raw.strip_prefix("0x"));
    let parsed = match hex {
        Some(digits) => u32::from_str_radix(digits, 16).ok().map(Color),
        None => Color::parse(raw),
    };
    parsed.ok_or_else(|| format!("invalid color: {raw}"))
}
