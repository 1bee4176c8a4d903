use clap::Parser;
use std::sync::Arc;
use themely::cli::{build_patch, CliArgs, CliCommand, SavedAction};
use themely::controller::ThemeController;
use themely::registry::{ColorKey, FontKey, GradientKey};
use themely::sink::MemorySink;
use themely::store::{ConfigStore, LocalStore, NullRepository};

/// Entry point: parse arguments, initialize the engine against the local
/// config directory (no remote profile is wired up in the CLI; the
/// repository trait is for embedders), run one subcommand, and print the
/// outcome.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Initialize logger (set RUST_LOG env var to control verbosity)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let local = match args.config_dir {
        Some(dir) => LocalStore::with_dir(dir),
        None => LocalStore::new(),
    };
    let store = ConfigStore::new(local, Arc::new(NullRepository));
    let mut controller = ThemeController::new(store, MemorySink::new());
    controller.initialize().await;

    match args.command {
        CliCommand::Show => {
            let (_, json) = controller.export()?;
            println!("{}", json);
            println!();
            for (key, value) in controller.sink().entries() {
                println!("{:<20} {}", key, value);
            }
        }
        CliCommand::Presets => {
            println!("Colors:");
            for key in ColorKey::ALL {
                let swatch = key.swatch();
                println!(
                    "  {:<8} {:<12} {} / {} / {}",
                    key.as_str(),
                    key.display_name(),
                    swatch.primary,
                    swatch.secondary,
                    swatch.accent
                );
            }
            println!("Gradients:");
            for key in GradientKey::ALL {
                println!("  {:<8} {}", key.as_str(), key.gradient());
            }
            println!("Fonts:");
            for key in FontKey::ALL {
                println!("  {:<8} {:<16} {}", key.as_str(), key.display_name(), key.font_stack());
            }
        }
        CliCommand::Apply {
            color,
            gradient,
            font,
            base_size,
        } => {
            let patch = build_patch(
                color.as_deref(),
                gradient.as_deref(),
                font.as_deref(),
                base_size,
                controller.committed(),
            )
            .map_err(|e| anyhow::anyhow!(e))?;
            if patch.is_empty() {
                eprintln!("Nothing to apply; pass at least one of --color/--gradient/--font/--base-size");
                std::process::exit(1);
            }
            controller.begin_edit(patch);
            controller.commit().await;
            report_warning(&mut controller);
            println!("Theme applied.");
        }
        CliCommand::Reset => {
            controller.reset().await;
            report_warning(&mut controller);
            println!("Theme reset to default.");
        }
        CliCommand::Export { out } => {
            let (name, json) = controller.export()?;
            let dir = out.unwrap_or_else(|| std::path::PathBuf::from("."));
            let path = dir.join(name);
            tokio::fs::write(&path, json).await?;
            println!("Exported to {}", path.display());
        }
        CliCommand::Saved { action } => match action {
            SavedAction::List => {
                let entries = controller.named_themes();
                if entries.is_empty() {
                    println!("No saved themes.");
                }
                for entry in entries {
                    println!(
                        "{:<4} {:<20} {} ({})",
                        entry.id,
                        entry.name,
                        entry.description,
                        entry.created_at.format("%Y-%m-%d")
                    );
                }
            }
            SavedAction::Save { name, description } => {
                let entry = controller.save_as_named(
                    &name,
                    &description,
                    controller.committed().clone(),
                )?;
                println!("Saved '{}' as #{}", entry.name, entry.id);
            }
            SavedAction::Delete { id } => {
                controller.delete_named(id)?;
                println!("Deleted #{}", id);
            }
            SavedAction::Apply { id } => {
                let entry = controller
                    .named_themes()
                    .into_iter()
                    .find(|e| e.id == id)
                    .ok_or_else(|| anyhow::anyhow!("no saved theme with id {}", id))?;
                controller.apply_named(&entry).await;
                report_warning(&mut controller);
                println!("Applied '{}'.", entry.name);
            }
        },
    }

    Ok(())
}

fn report_warning(controller: &mut ThemeController<MemorySink>) {
    if let Some(warning) = controller.take_warning() {
        eprintln!("warning: {:?}", warning);
    }
}
