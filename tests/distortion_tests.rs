// Host-side tests for the scroll distortion math mirrored from post.wgsl.
// The main crate is wasm-only, so we pull the pure core in by path.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::config::GalleryConfig;
use crate::core::distortion::{distort_uv, fade_weight, smoothstep, CompositeUniforms};

fn uniforms(speed: f32) -> CompositeUniforms {
    CompositeUniforms {
        scroll_speed: speed,
        ..CompositeUniforms::from_config(&GalleryConfig::default())
    }
}

fn grid() -> impl Iterator<Item = [f32; 2]> {
    (0..=10).flat_map(|i| (0..=10).map(move |j| [i as f32 / 10.0, j as f32 / 10.0]))
}

#[test]
fn no_shift_when_not_scrolling() {
    let u = uniforms(0.0);
    for uv in grid() {
        assert_eq!(distort_uv(uv, &u), uv);
    }
}

#[test]
fn no_shift_at_or_above_fade_edge() {
    for speed in [-1.0, -0.3, 0.5, 1.0] {
        let u = uniforms(speed);
        for uv in grid().filter(|uv| uv[1] >= u.fade_edge) {
            assert_eq!(distort_uv(uv, &u), uv, "uv {uv:?} speed {speed}");
        }
    }
}

#[test]
fn shift_is_horizontal_only_and_linear_in_speed() {
    let uv = [0.9, 0.0];
    let a = distort_uv(uv, &uniforms(0.5));
    let b = distort_uv(uv, &uniforms(1.0));
    assert_eq!(a[1], uv[1]);
    let da = uv[0] - a[0];
    let db = uv[0] - b[0];
    assert!(da > 0.0);
    assert!((db - 2.0 * da).abs() < 1e-6);
    // (0.9 - 0.5) * 0.1 * 1 * 1
    assert!((db - 0.04).abs() < 1e-6);
}

#[test]
fn centre_column_never_moves() {
    let u = uniforms(1.0);
    for j in 0..=10 {
        let uv = [0.5, j as f32 / 10.0];
        assert_eq!(distort_uv(uv, &u), uv);
    }
}

#[test]
fn fade_matches_reversed_smoothstep() {
    // smoothstep(edge, 0, y) written as 1 - smoothstep(0, edge, y)
    for j in 0..=20 {
        let y = j as f32 / 20.0;
        let t = ((y - 0.4) / (0.0 - 0.4)).clamp(0.0, 1.0);
        let reversed = t * t * (3.0 - 2.0 * t);
        assert!((fade_weight(y, 0.4) - reversed).abs() < 1e-6);
    }
    assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
}

#[test]
fn composite_raw_matches_uniform_layout() {
    let raw = uniforms(0.25).to_raw();
    assert_eq!(std::mem::size_of_val(&raw), 16);
    assert_eq!(raw.scroll_speed, 0.25);
    assert_eq!(raw.distortion, 0.1);
    assert_eq!(raw.fade_edge, 0.4);
}
