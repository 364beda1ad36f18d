use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info, warn};

/// Live-reload trigger for the config file.
///
/// The file's directory is watched rather than the file itself, so creating
/// the file after startup or replacing it by rename still fires.  Bursts of
/// events collapse into one pending notification.  Dropping the handle
/// stops the watch.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_watcher, mut changes) = vtop_config::ConfigWatcher::spawn("/home/user/.config/vtop/vtop.toml");
/// while changes.recv().await.is_some() {
///     println!("config changed, reloading");
/// }
/// # }
/// ```
#[derive(Debug)]
pub struct ConfigWatcher {
    path: PathBuf,
    task: JoinHandle<()>,
}

impl ConfigWatcher {
    /// Start watching `path`.  Must be called from within a Tokio runtime.
    pub fn spawn(path: impl AsRef<Path>) -> (Self, mpsc::Receiver<()>) {
        let (changes, rx) = mpsc::channel(1);
        let path = resolve(path.as_ref());
        let task = tokio::spawn(watch_dir(path.clone(), changes));
        (Self { path, task }, rx)
    }

    /// The config file being watched, with its directory made absolute.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ConfigWatcher {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Absolute form of `path`, so it compares equal to the paths notify
/// reports.  The file itself need not exist.
fn resolve(path: &Path) -> PathBuf {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    match (std::fs::canonicalize(dir), path.file_name()) {
        (Ok(dir), Some(name)) => dir.join(name),
        _ => path.to_path_buf(),
    }
}

fn concerns(event: &Event, path: &Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event.paths.iter().any(|p| p == path)
}

async fn watch_dir(path: PathBuf, changes: mpsc::Sender<()>) {
    let (events_tx, mut events) = mpsc::unbounded_channel::<notify::Result<Event>>();
    let watcher = RecommendedWatcher::new(
        move |res| {
            let _ = events_tx.send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    );
    let mut watcher = match watcher {
        Ok(w) => w,
        Err(e) => {
            warn!("config reload disabled: {e}");
            return;
        }
    };

    let Some(dir) = path.parent() else {
        warn!("config reload disabled: '{}' has no directory", path.display());
        return;
    };
    if let Err(e) = watcher.watch(dir, RecursiveMode::NonRecursive) {
        warn!("config reload disabled: cannot watch '{}': {e}", dir.display());
        return;
    }
    info!(path = %path.display(), "watching config");

    while let Some(event) = events.recv().await {
        match event {
            Ok(event) if concerns(&event, &path) => {
                debug!(kind = ?event.kind, "config changed");
                if let Err(mpsc::error::TrySendError::Closed(_)) = changes.try_send(()) {
                    break;
                }
            }
            Ok(_) => {}
            Err(e) => warn!("config watch error: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{CreateKind, ModifyKind, RemoveKind};

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vtop-watch-{tag}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::canonicalize(dir).unwrap()
    }

    #[test]
    fn only_writes_to_the_config_file_count() {
        let path = PathBuf::from("/cfg/vtop.toml");
        let create = Event::new(EventKind::Create(CreateKind::File)).add_path(path.clone());
        let modify = Event::new(EventKind::Modify(ModifyKind::Any)).add_path(path.clone());
        let remove = Event::new(EventKind::Remove(RemoveKind::File)).add_path(path.clone());
        let sibling = Event::new(EventKind::Modify(ModifyKind::Any)).add_path("/cfg/other.toml".into());

        assert!(concerns(&create, &path));
        assert!(concerns(&modify, &path));
        assert!(!concerns(&remove, &path));
        assert!(!concerns(&sibling, &path));
    }

    #[test]
    fn missing_file_resolves_inside_its_directory() {
        let dir = scratch_dir("resolve");
        let path = resolve(&dir.join("absent.toml"));
        assert_eq!(path, dir.join("absent.toml"));
        assert_eq!(resolve(Path::new("vtop.toml")).file_name().unwrap(), "vtop.toml");
        assert!(resolve(Path::new("vtop.toml")).is_absolute());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn creating_the_file_after_spawn_triggers_reload() {
        let dir = scratch_dir("create");
        let path = dir.join("vtop.toml");
        let (watcher, mut changes) = ConfigWatcher::spawn(&path);
        assert_eq!(watcher.path(), path);

        // Let the watch task register before touching the file.
        tokio::time::sleep(Duration::from_millis(300)).await;
        std::fs::write(&path, "theme = \"brew\"\n").unwrap();

        let fired = tokio::time::timeout(Duration::from_secs(10), changes.recv()).await;
        assert_eq!(fired.ok().flatten(), Some(()));

        drop(watcher);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
