// SPDX-License-Identifier: MPL-2.0
//! Event loop driving a [`Gallery`] against a [`MediaSource`].
//!
//! All state mutation happens on the task that owns the runtime. Effects run
//! as tasks in a [`JoinSet`] that only talk to the media source and return
//! their result as a [`Message`]. Completions therefore arrive in whatever
//! order the server answers; the gallery's fetch tickets and detail requests
//! sort out which ones still apply.
//!
//! An effect that panics still completes: it is reported as the matching
//! failure message, so the gallery leaves its loading or scanning state.

use super::{Effect, Gallery, Message};
use crate::application::port::MediaSource;
use crate::domain::error::{FetchError, ScanError};
use std::sync::Arc;
use tokio::task::{JoinError, JoinSet};

/// Owns the gallery and executes the effects its updates request.
pub struct Runtime<S: MediaSource> {
    gallery: Gallery,
    source: Arc<S>,
    tasks: JoinSet<Message>,
}

impl<S: MediaSource> Runtime<S> {
    #[must_use]
    pub fn new(gallery: Gallery, source: S) -> Self {
        Self {
            gallery,
            source: Arc::new(source),
            tasks: JoinSet::new(),
        }
    }

    /// Applies a message and spawns the resulting effects.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&mut self, message: Message) {
        for effect in self.gallery.update(message) {
            self.spawn(effect);
        }
    }

    /// Runs the startup effects.
    pub fn boot(&mut self) {
        for effect in self.gallery.boot() {
            self.spawn(effect);
        }
    }

    fn spawn(&mut self, effect: Effect) {
        log::debug!("spawning {effect:?}");
        let source = Arc::clone(&self.source);

        self.tasks.spawn(async move {
            let fallback = effect.clone();
            match tokio::spawn(async move { run_effect(source.as_ref(), effect).await }).await {
                Ok(message) => message,
                Err(err) => {
                    log::error!("effect {fallback:?} failed: {err}");
                    failure(fallback, &err)
                }
            }
        });
    }

    /// Waits for the next effect completion and applies it.
    ///
    /// Returns `false` when nothing is in flight.
    pub async fn step(&mut self) -> bool {
        match self.tasks.join_next().await {
            Some(Ok(message)) => {
                self.dispatch(message);
                true
            }
            Some(Err(err)) => {
                log::error!("effect task ended without a result: {err}");
                true
            }
            None => false,
        }
    }

    /// Applies completions until no effect is in flight, including effects
    /// requested by the completions themselves.
    pub async fn settle(&mut self) {
        while self.step().await {}
    }

    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    #[must_use]
    pub fn into_gallery(self) -> Gallery {
        self.gallery
    }
}

async fn run_effect<S: MediaSource>(source: &S, effect: Effect) -> Message {
    match effect {
        Effect::FetchCollection(ticket) => Message::CollectionFetched {
            ticket,
            result: source.fetch_collection().await,
        },
        Effect::RequestScan(directory) => {
            Message::ScanFinished(source.request_scan(&directory).await)
        }
        Effect::FetchDate { request, day } => Message::DetailFetched {
            request,
            result: source.fetch_by_date(day).await,
        },
        Effect::FetchAlbum { request, name } => Message::DetailFetched {
            request,
            result: source.fetch_by_album(&name).await,
        },
    }
}

/// The completion reported for an effect whose task did not finish.
fn failure(effect: Effect, err: &JoinError) -> Message {
    let reason = format!("effect task failed: {err}");
    match effect {
        Effect::FetchCollection(ticket) => Message::CollectionFetched {
            ticket,
            result: Err(FetchError::Transport(reason)),
        },
        Effect::RequestScan(_) => Message::ScanFinished(Err(ScanError::Request(reason))),
        Effect::FetchDate { request, .. } | Effect::FetchAlbum { request, .. } => {
            Message::DetailFetched {
                request,
                result: Err(FetchError::Transport(reason)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewSettings;
    use crate::application::port::{ScanReport, ScanStatus};
    use crate::domain::media::{DayBoundary, DayKey, MediaItem};
    use crate::domain::ui::{BusyDayThreshold, DisplayCap, PageSize};
    use crate::infrastructure::http::MediaUrls;

    /// Source whose every call panics.
    struct PanickingSource;

    impl MediaSource for PanickingSource {
        async fn fetch_collection(&self) -> Result<Vec<MediaItem>, FetchError> {
            panic!("collection backend crashed")
        }

        async fn request_scan(&self, _directory: &str) -> Result<ScanReport, ScanError> {
            panic!("scan backend crashed")
        }

        async fn scan_status(&self) -> Result<ScanStatus, FetchError> {
            panic!("status backend crashed")
        }

        async fn fetch_by_date(&self, _day: DayKey) -> Result<Vec<MediaItem>, FetchError> {
            panic!("date backend crashed")
        }

        async fn fetch_by_album(&self, _name: &str) -> Result<Vec<MediaItem>, FetchError> {
            panic!("album backend crashed")
        }
    }

    fn gallery() -> Gallery {
        Gallery::new(
            ViewSettings {
                page_size: PageSize::new(10),
                display_cap: DisplayCap::new(2),
                busy_day: BusyDayThreshold::new(3),
                day_boundary: DayBoundary::Utc,
                preview_capacity: 16,
            },
            MediaUrls::new("http://media.test"),
        )
    }

    #[tokio::test]
    async fn panicking_fetch_settles_as_a_failed_load() {
        let mut runtime = Runtime::new(gallery(), PanickingSource);
        runtime.boot();
        assert_eq!(runtime.in_flight(), 1);

        runtime.settle().await;

        assert_eq!(runtime.in_flight(), 0);
        let gallery = runtime.gallery();
        assert!(!gallery.store().is_loaded());
        assert!(matches!(
            gallery.store().last_error(),
            Some(FetchError::Transport(reason)) if reason.starts_with("effect task failed")
        ));
        assert!(gallery
            .status()
            .is_some_and(|status| status.starts_with("Failed to load media")));
    }

    #[tokio::test]
    async fn panicking_scan_clears_the_scanning_flag() {
        let mut runtime = Runtime::new(gallery(), PanickingSource);
        runtime.dispatch(Message::ScanRequested("/photos".to_string()));
        runtime.settle().await;

        assert_eq!(runtime.in_flight(), 0);
        let scan = runtime.gallery().scan();
        assert!(!scan.is_scanning);
        assert!(scan
            .message
            .as_deref()
            .is_some_and(|message| message.starts_with("Scan failed: effect task failed")));
    }
}
