use clap::{ArgAction, Parser};
use std::path::PathBuf;

use inkpad::config::Config;
use inkpad::export::default_export_dir;
use inkpad::session::{
    FileStore, SnapshotStore, StorageOptions, decode_snapshot, options_from_config,
};

#[derive(Parser, Debug)]
#[command(name = "inkpad")]
#[command(version, about = "Freehand drawing pad core with undo, persistence, and PNG export")]
struct Cli {
    /// Describe the persisted drawing (dimensions and encoded size)
    #[arg(long, action = ArgAction::SetTrue)]
    inspect: bool,

    /// Export the persisted drawing as drawing.png
    #[arg(long, action = ArgAction::SetTrue)]
    export: bool,

    /// Directory to export into (defaults to the configured directory)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Delete the persisted drawing
    #[arg(long, action = ArgAction::SetTrue)]
    clear: bool,

    /// Override the snapshot storage directory
    #[arg(long, value_name = "DIR")]
    state_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = Config::load().unwrap_or_else(|err| {
        log::warn!("Failed to load config, using defaults: {:#}", err);
        Config::default()
    });

    let options = match &cli.state_dir {
        Some(dir) => {
            let mut options = StorageOptions::new(dir.clone());
            options.key = config.storage.key.clone();
            options
        }
        None => options_from_config(&config.storage, &Config::config_dir()?)?,
    };
    let mut store = FileStore::new(options);

    if cli.inspect {
        inspect(&store)?;
    } else if cli.export {
        let directory = cli
            .dir
            .clone()
            .or_else(|| config.export.directory.as_ref().map(PathBuf::from))
            .unwrap_or_else(default_export_dir);
        export(&store, &directory)?;
    } else if cli.clear {
        store.remove()?;
        println!("Persisted drawing cleared.");
    } else {
        // No flags: show usage
        println!("inkpad: Freehand drawing pad core");
        println!();
        println!("Usage:");
        println!("  inkpad --inspect             Describe the persisted drawing");
        println!("  inkpad --export [--dir DIR]  Export the drawing as drawing.png");
        println!("  inkpad --clear               Delete the persisted drawing");
        println!("  inkpad --help                Show help");
        println!();
        println!("The drawing itself is produced by an embedding frontend; this");
        println!("binary only operates on the persisted snapshot.");
    }

    Ok(())
}

fn inspect(store: &FileStore) -> anyhow::Result<()> {
    match store.load()? {
        Some(snapshot) => {
            let image = decode_snapshot(&snapshot)?;
            println!(
                "Persisted drawing: {}x{} px, {} encoded bytes",
                image.width(),
                image.height(),
                snapshot.len()
            );
            println!("State file: {}", store.state_file_path().display());
        }
        None => {
            println!("No persisted drawing found.");
            println!("State file would be: {}", store.state_file_path().display());
        }
    }
    Ok(())
}

fn export(store: &FileStore, directory: &std::path::Path) -> anyhow::Result<()> {
    let Some(snapshot) = store.load()? else {
        anyhow::bail!("no persisted drawing to export");
    };
    let image = decode_snapshot(&snapshot)?;
    let path = inkpad::export::export_drawing(&image, directory)?;
    println!("Exported {}", path.display());
    Ok(())
}
