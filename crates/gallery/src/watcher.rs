//! Directory watcher subscription

use cosmic::iced::Subscription;
use gallery_nav::is_supported_image;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum WatcherEvent {
    Created(PathBuf),
    Removed(PathBuf),
    Modified(PathBuf),
    Error(String),
}

/// Watch the open directory for external changes to image files.
///
/// Only events whose paths carry a supported image extension are forwarded;
/// directory churn from temp files, sidecars and the like never triggers a
/// rescan. The subscription restarts whenever the directory changes because
/// the dir is the subscription id.
pub fn watch_directory(dir: Option<PathBuf>) -> Subscription<WatcherEvent> {
    Subscription::run_with_id(
        dir.clone(),
        cosmic::iced::stream::channel(100, move |mut output| async move {
            use cosmic::iced_futures::futures::SinkExt;

            let Some(dir) = dir else {
                // Nothing open; stay idle
                return std::future::pending().await;
            };

            let (tx, mut rx) = mpsc::channel(100);

            let watcher_result = RecommendedWatcher::new(
                move |res: Result<Event, notify::Error>| {
                    let _ = tx.blocking_send(res);
                },
                Config::default(),
            );

            let mut watcher = match watcher_result {
                Ok(watcher) => watcher,
                Err(e) => {
                    let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                    return std::future::pending().await;
                }
            };

            if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
                let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                return std::future::pending().await;
            }

            // Keep the watcher alive and forward image events
            while let Some(event_result) = rx.recv().await {
                let event = match event_result {
                    Ok(event) => event,
                    Err(e) => {
                        let _ = output.send(WatcherEvent::Error(e.to_string())).await;
                        continue;
                    }
                };

                let wrap: fn(PathBuf) -> WatcherEvent = match event.kind {
                    EventKind::Create(_) => WatcherEvent::Created,
                    EventKind::Remove(_) => WatcherEvent::Removed,
                    EventKind::Modify(_) => WatcherEvent::Modified,
                    _ => continue,
                };

                for path in event.paths {
                    // The extension check never touches the filesystem, so
                    // it also holds for paths that no longer exist.
                    if is_supported_image(&path) {
                        let _ = output.send(wrap(path)).await;
                    }
                }
            }

            std::future::pending().await
        }),
    )
}
