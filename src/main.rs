use anyhow::{Context, Result};
use clap::Parser;
use pointer_accuracy::core::{load_or_default, load_settings, settings_path};
use pointer_accuracy::{ClassifierSettings, FixedCapabilities, PointerClassifier, PointerMode};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Classify a described environment as a fine or coarse pointer
#[derive(Parser, Debug)]
#[command(name = "pointer-accuracy", version, about)]
struct Cli {
    /// `(pointer: fine)` matches
    #[arg(long)]
    fine: bool,

    /// `(pointer: coarse)` matches
    #[arg(long)]
    coarse: bool,

    /// `ontouchstart` is present
    #[arg(long)]
    touch: bool,

    /// `onmsgesturechange` is present
    #[arg(long)]
    legacy_touch: bool,

    /// Viewport width in CSS pixels
    #[arg(long)]
    width: Option<f64>,

    /// Device pixel ratio
    #[arg(long)]
    dpr: Option<f64>,

    /// Enable the screen-size / pixel-density tier
    #[arg(long)]
    resolution_tiers: bool,

    /// Settings file; defaults to the user config directory
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize, Debug, PartialEq)]
struct Report {
    native: Option<PointerMode>,
    mode: PointerMode,
    touch: bool,
}

impl Cli {
    fn capabilities(&self) -> FixedCapabilities {
        FixedCapabilities {
            pointer_fine: self.fine,
            pointer_coarse: self.coarse,
            touch: self.touch,
            legacy_touch: self.legacy_touch,
            width: self.width,
            dpr: self.dpr,
        }
    }

    /// `--resolution-tiers` overrides whatever the settings file says
    fn report(&self, mut settings: ClassifierSettings) -> Report {
        if self.resolution_tiers {
            settings.resolution_tiers = true;
        }
        let mut classifier = PointerClassifier::with_settings(self.capabilities(), settings);
        let mode = classifier.init();
        Report {
            native: classifier.native_mode(),
            mode,
            touch: classifier.has_touch_support(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // An explicit settings file must load; the implicit one may be absent
    let settings = match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => load_or_default(&settings_path()),
    };

    let report = cli.report(settings);
    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report.mode);
    }
    Ok(())
}
