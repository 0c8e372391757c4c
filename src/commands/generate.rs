//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::Generator;
use crate::Blog;

/// Quiet period before a burst of file events triggers a rebuild
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Generate the static site
pub fn run(blog: &Blog) -> Result<()> {
    let start = std::time::Instant::now();

    let generator = Generator::new(blog)?;
    generator.generate()?;

    let duration = start.elapsed();
    tracing::info!(
        "Generated {:?} in {:.2}s",
        blog.public_dir,
        duration.as_secs_f64()
    );

    Ok(())
}

/// Watch for changes until interrupted, regenerating after each burst
pub async fn watch(blog: &Blog) -> Result<()> {
    let blog = blog.clone();
    tracing::info!("Watching for changes. Press Ctrl+C to stop.");
    tokio::task::spawn_blocking(move || watch_blocking(&blog, || {})).await?
}

/// Block on debounced events from `_config.yml` and the source directory.
///
/// Every burst of events ends in exactly one rebuild once the files have been
/// quiet for [`DEBOUNCE`]; `on_rebuild` runs after each successful one.
/// Returns when the watcher shuts down.
pub fn watch_blocking<F: FnMut()>(blog: &Blog, mut on_rebuild: F) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(DEBOUNCE, tx)?;

    if blog.source_dir.exists() {
        debouncer
            .watcher()
            .watch(&blog.source_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", blog.source_dir);
    }

    let config_path = blog.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    for result in rx {
        match result {
            Ok(events) => {
                let relevant: Vec<_> = events
                    .iter()
                    .filter(|e| {
                        let path_str = e.path.to_string_lossy();
                        !path_str.contains(".DS_Store") && !path_str.ends_with('~')
                    })
                    .collect();

                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                match reload_and_run(blog) {
                    Ok(()) => on_rebuild(),
                    Err(e) => tracing::error!("Generation failed: {}", e),
                }
            }
            Err(e) => {
                tracing::error!("Watch error: {:?}", e);
            }
        }
    }

    Ok(())
}

/// Re-read `_config.yml` before regenerating so edits take effect
pub fn reload_and_run(blog: &Blog) -> Result<()> {
    let reloaded = Blog::new(&blog.base_dir)?;
    run(&reloaded)
}
