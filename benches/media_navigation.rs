// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the collection derivations.
//!
//! Measures the performance of:
//! - Smart album classification over the whole collection
//! - Date grouping of a timeline window
//! - Paging a window through the collection
//! - Lightbox navigation over a large list

use criterion::{criterion_group, criterion_main, Criterion};
use smart_gallery::application::query::{DateGrouper, LightboxNavigator, PaginationWindow};
use smart_gallery::domain::media::{DayBoundary, MediaItem, MediaType, SmartAlbums, SourceType};
use smart_gallery::domain::ui::PageSize;
use std::hint::black_box;
use std::sync::Arc;

const COLLECTION_SIZE: i64 = 10_000;

/// A synthetic collection: a few items per hour over a couple of months,
/// mixed sources, one video in ten.
fn collection() -> Arc<[Arc<MediaItem>]> {
    (0..COLLECTION_SIZE)
        .map(|n| {
            let mut item = MediaItem::new(n, format!("/photos/{n}.jpg"));
            let day = 1 + (n / 200) % 28;
            let month = 1 + (n / 5600) % 12;
            item.created_at = Some(format!("2024-{month:02}-{day:02}T{:02}:00:00Z", n % 24));
            item.source_type = match n % 4 {
                0 => SourceType::Screenshot,
                1 => SourceType::Web,
                _ => SourceType::Camera,
            };
            if n % 10 == 0 {
                item.media_type = MediaType::Video;
            }
            Arc::new(item)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let items = collection();

    group.bench_function("classify_smart_albums", |b| {
        b.iter(|| black_box(SmartAlbums::classify(black_box(&items))));
    });

    group.finish();
}

fn bench_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let items = collection();
    let grouper = DateGrouper::new(DayBoundary::Utc);

    group.bench_function("group_first_page", |b| {
        b.iter(|| black_box(grouper.group(black_box(&items[..50]))));
    });

    group.bench_function("group_whole_collection", |b| {
        b.iter(|| black_box(grouper.group(black_box(&items))));
    });

    group.finish();
}

/// Pages through the whole collection, regrouping after each advance like
/// the timeline does.
fn bench_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let items = collection();
    let grouper = DateGrouper::new(DayBoundary::Utc);

    group.bench_function("page_and_regroup", |b| {
        b.iter(|| {
            let mut window = PaginationWindow::new(PageSize::new(500));
            window.reset(Arc::clone(&items));
            while window.advance() {
                black_box(grouper.group(window.current_window()));
            }
            black_box(window.window_len());
        });
    });

    group.finish();
}

fn bench_lightbox(c: &mut Criterion) {
    let mut group = c.benchmark_group("media_navigation");
    let items = collection();

    group.bench_function("lightbox_full_cycle", |b| {
        b.iter(|| {
            let mut navigator: LightboxNavigator<Arc<MediaItem>> = LightboxNavigator::new();
            if navigator.open(Arc::clone(&items), 0).is_ok() {
                for _ in 0..items.len() {
                    black_box(navigator.next());
                }
            }
            black_box(navigator.current_index());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_classify, bench_group, bench_window, bench_lightbox);
criterion_main!(benches);
