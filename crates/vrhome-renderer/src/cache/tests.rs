//! Tests for the texture and button caches.

use super::*;
use crate::test_support::StubSource;
use futures_util::future::{FutureExt, Shared};
use std::rc::Rc;
use vrhome_common::Color;

const URL: &str = "https://cdn.example/pano.jpg";

#[tokio::test]
async fn pending_load_is_shared() {
    let source = StubSource::new();
    let cache = TextureCache::new(source.clone(), true);

    let first = cache.get_texture(URL);
    let second = cache.get_texture(URL);
    assert!(Shared::ptr_eq(&first, &second));
    assert_eq!(source.calls().len(), 1);

    let texture = source.resolve(URL);
    assert_eq!(first.await.unwrap(), texture);
    assert_eq!(second.await.unwrap(), texture);
}

#[tokio::test]
async fn resolved_entry_skips_producer() {
    let source = StubSource::immediate();
    let cache = TextureCache::new(source.clone(), true);

    let loaded = cache.get_texture(URL).await.unwrap();
    let again = cache
        .get_or_produce(CacheKey::url(URL), || panic!("producer called on a hit"))
        .await
        .unwrap();
    assert_eq!(loaded, again);
    assert_eq!(source.calls().len(), 1);
}

#[tokio::test]
async fn disabled_cache_evicts_after_resolving() {
    let source = StubSource::new();
    let cache = TextureCache::new(source.clone(), false);

    let first = cache.get_texture(URL);
    let second = cache.get_texture(URL);
    assert!(Shared::ptr_eq(&first, &second));

    source.resolve(URL);
    first.await.unwrap();
    assert!(!cache.contains(&CacheKey::url(URL)));

    let third = cache.get_texture(URL);
    assert!(!Shared::ptr_eq(&second, &third));
    assert_eq!(source.calls().len(), 2);
}

#[tokio::test]
async fn failed_entry_is_retried() {
    let source = StubSource::new();
    let cache = TextureCache::new(source.clone(), true);

    let failed = cache.get_texture(URL);
    source.fail(URL);
    assert!(failed.clone().await.is_err());
    assert!(cache.contains(&CacheKey::url(URL)));

    let retry = cache.get_texture(URL);
    assert!(!Shared::ptr_eq(&failed, &retry));
    assert_eq!(source.calls().len(), 2);
    source.resolve(URL);
    assert!(retry.await.is_ok());
}

#[test]
fn distinct_urls_get_distinct_entries() {
    let source = StubSource::new();
    let cache = TextureCache::new(source.clone(), true);
    let a = cache.get_texture("a.png");
    let b = cache.get_texture("b.png");
    assert!(!Shared::ptr_eq(&a, &b));
    assert_eq!(cache.len(), 2);
    assert!(a.now_or_never().is_none());
}

fn style(fill: &str, border: &str) -> ButtonStyle {
    ButtonStyle {
        width_m: 2.0,
        height_m: 0.5,
        fill: vrhome_config::colors::parse_color(fill).unwrap(),
        border: vrhome_config::colors::parse_color(border).unwrap(),
        radius_px: 15.0,
    }
}

#[test]
fn button_keys_normalize_colors() {
    let named = CacheKey::button(&style("#F8D5B7", "yellow"));
    let lower = CacheKey::button(&style("#f8d5b7", "#ffff00"));
    let upper = CacheKey::button(&style("#F8D5B7", "#FFFF00"));
    assert_eq!(named, lower);
    assert_eq!(lower, upper);
    assert_eq!(named.as_str(), "button:2:0.5:#f8d5b7:#ffff00:15");
}

#[test]
fn negative_zero_is_canonical() {
    let mut a = style("#000", "#fff");
    let mut b = a;
    a.radius_px = 0.0;
    b.radius_px = -0.0;
    assert_eq!(CacheKey::button(&a), CacheKey::button(&b));
}

#[test]
fn url_keys_are_trimmed() {
    assert_eq!(CacheKey::url(" a.png "), CacheKey::url("a.png"));
    assert_ne!(CacheKey::url("a.png"), CacheKey::url("b.png"));
}

#[test]
fn button_cache_dedups_when_enabled() {
    let buttons = ButtonCache::new(true);
    let a = buttons.get_button(&style("#F8D5B7", "#2D1A10"));
    let b = buttons.get_button(&style("#f8d5b7", "#2d1a10"));
    assert_eq!(a, b);
    assert_eq!(buttons.len(), 1);
}

#[test]
fn button_cache_regenerates_when_disabled() {
    let buttons = ButtonCache::new(false);
    let a = buttons.get_button(&style("#F8D5B7", "#2D1A10"));
    let b = buttons.get_button(&style("#F8D5B7", "#2D1A10"));
    assert_ne!(a, b);
    assert!(buttons.is_empty());
}

#[test]
fn rasterized_button_geometry() {
    assert_eq!(margin_px(), 4);
    let image = rasterize_button(&style("yellow", "#2D1A10"));
    assert_eq!(image.dimensions(), (416, 104));

    // Margin stays transparent.
    assert_eq!(image.get_pixel(0, 0).0[3], 0);
    assert_eq!(image.get_pixel(1, 52).0[3], 0);
    // Interior is the fill color.
    assert_eq!(image.get_pixel(208, 52).0, [255, 255, 0, 255]);
    // The stroke sits on the margin edge.
    let border = Color::from_rgb_u32(0x2D1A10);
    assert_eq!(image.get_pixel(4, 52).0, [border.r, border.g, border.b, 255]);
}

#[test]
fn detail_button_size_truncates() {
    let mut detail = style("#F8D5B7", "#2D1A10");
    detail.width_m = 2.0 * 1.8;
    detail.height_m = 0.5 * 0.55;
    detail.radius_px = 8.0;
    let image = rasterize_button(&detail);
    assert_eq!(image.dimensions(), (748, 57));
}

#[test]
fn shared_source_is_kept() {
    let source = StubSource::new();
    let cache = TextureCache::new(source.clone(), true);
    assert!(cache.is_enabled());
    let as_dyn: Rc<dyn crate::source::TextureSource> = source;
    assert!(Rc::ptr_eq(cache.source(), &as_dyn));
}
