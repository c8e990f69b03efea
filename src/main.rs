use std::fs;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;

use mediakit::platform::PLATFORMS;
use mediakit::{
    export_document, templates, Action, BuiltinIcons, Controller, DirectorySink, EditorState,
    InputEvent, KitConfig, KitDocument, TEMPLATES,
};

#[derive(Parser)]
#[command(name = "mediakit", version, about = "Build and export creator media kits")]
struct Cli {
    /// JSON file with a partial `KitConfig`
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new saved document
    New {
        creator: String,
        #[arg(long)]
        template: Option<String>,
        /// Defaults to stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export a saved document to `<slug>-mediakit.html`
    Export {
        doc: PathBuf,
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// Print the HTML instead of writing a file
        #[arg(long)]
        stdout: bool,
    },
    /// Apply JSON-lines actions and input events to a saved document
    Replay {
        doc: PathBuf,
        /// Defaults to stdin
        #[arg(long)]
        script: Option<PathBuf>,
        /// Defaults to stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// List built-in templates
    Templates,
    /// List supported social platforms
    Platforms,
}

/// One replay line: a raw input event or a direct action.
#[derive(Deserialize)]
#[serde(untagged)]
enum Step {
    Event(InputEvent),
    Action(Action),
}

fn load_config(path: Option<&Path>) -> Result<KitConfig> {
    match path {
        None => Ok(KitConfig::default()),
        Some(p) => {
            let text = fs::read_to_string(p).with_context(|| format!("reading {}", p.display()))?;
            KitConfig::from_json(&text).with_context(|| format!("parsing {}", p.display()))
        }
    }
}

fn load_state(path: &Path) -> Result<EditorState> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc: KitDocument =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))?;
    Ok(EditorState::from_document(doc)?)
}

fn write_state(state: &EditorState, out: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(&state.to_document())?;
    match out {
        Some(p) => fs::write(p, json).with_context(|| format!("writing {}", p.display()))?,
        None => println!("{}", json),
    }
    Ok(())
}

fn replay(mut controller: Controller, input: impl BufRead) -> Result<Controller> {
    for (n, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<Step>(&line) {
            Ok(Step::Event(e)) => controller.handle(e),
            Ok(Step::Action(a)) => controller.dispatch(a),
            Err(e) => log::warn!("line {}: skipping ({})", n + 1, e),
        }
    }
    Ok(controller)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::New { creator, template, out } => {
            let state = match template {
                Some(name) => templates::find(&name)?.instantiate(&config),
                None => EditorState::new(&config),
            };
            write_state(&state.set_creator_name(creator), out.as_deref())?;
        }
        Command::Export { doc, out_dir, stdout } => {
            let state = load_state(&doc)?;
            let exported = export_document(&state, &config.attribution, &BuiltinIcons::new());
            log::info!("sha256 {}", exported.digest());
            if stdout {
                let mut out = io::stdout().lock();
                out.write_all(exported.html.as_bytes())?;
                out.flush()?;
            } else {
                exported
                    .deliver(&DirectorySink::new(&out_dir))
                    .with_context(|| format!("writing into {}", out_dir.display()))?;
                println!("{}", out_dir.join(&exported.file_name).display());
            }
        }
        Command::Replay { doc, script, out } => {
            let controller = Controller::with_state(load_state(&doc)?, &config);
            let controller = match script {
                Some(p) => {
                    let f = fs::File::open(&p).with_context(|| format!("opening {}", p.display()))?;
                    replay(controller, BufReader::new(f))?
                }
                None => replay(controller, io::stdin().lock())?,
            };
            write_state(controller.state(), out.as_deref())?;
        }
        Command::Templates => {
            for t in TEMPLATES {
                println!("{:<22} {}  {} ({} elements)", t.name, t.background_color, t.description, t.elements.len());
            }
        }
        Command::Platforms => {
            for p in PLATFORMS {
                println!("{:<10} {:<12} {}  {}", p.id, p.name, p.color, p.placeholder);
            }
        }
    }
    Ok(())
}
