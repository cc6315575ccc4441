// Host-side tests for the sketch context and frame driver, stepping
// synthetic frames against a recording renderer.
// The main crate is wasm-only, so we pull the pure core in by path.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;

use crate::core::layout::mesh_position;
use crate::core::registry::TrackedImage;
use crate::core::{
    FrameDriver, FrameView, GalleryConfig, LayoutRect, Lifecycle, ManualClock, SceneRenderer,
    Sketch, SketchError, Viewport,
};
use glam::Vec3;

const FRAME: f64 = 1.0 / 60.0;

/// Image handle for tests: an id plus the rectangle the "DOM" reports.
#[derive(Clone, Debug, PartialEq)]
struct FakeImage {
    id: u32,
    rect: LayoutRect,
}

#[derive(Default)]
struct Recorder {
    created: Vec<u32>,
    fail_ids: Vec<u32>,
    resizes: Vec<Viewport>,
    positions: Vec<Vec<Vec3>>,
    times: Vec<Vec<f32>>,
    hover_states: Vec<Vec<f32>>,
    speeds: Vec<f32>,
    fail_render: bool,
}

impl SceneRenderer<FakeImage> for Recorder {
    fn add_mesh(&mut self, mesh: &TrackedImage<FakeImage>) -> anyhow::Result<()> {
        if self.fail_ids.contains(&mesh.handle.id) {
            anyhow::bail!("upload failed for {}", mesh.handle.id);
        }
        self.created.push(mesh.handle.id);
        Ok(())
    }

    fn resize(&mut self, viewport: &Viewport) {
        self.resizes.push(*viewport);
    }

    fn render(&mut self, frame: &FrameView<'_, FakeImage>) -> anyhow::Result<()> {
        self.positions
            .push(frame.meshes.iter().map(|m| m.position).collect());
        self.times
            .push(frame.meshes.iter().map(|m| m.material.time).collect());
        self.hover_states
            .push(frame.meshes.iter().map(|m| m.material.hover_state).collect());
        self.speeds.push(frame.composite.scroll_speed);
        if self.fail_render {
            anyhow::bail!("device lost");
        }
        Ok(())
    }
}

fn image(id: u32, top: f32, left: f32, width: f32, height: f32) -> FakeImage {
    FakeImage {
        id,
        rect: LayoutRect::new(top, left, width, height),
    }
}

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn started(images: Vec<FakeImage>) -> (Sketch<FakeImage>, Recorder) {
    let mut sketch = Sketch::new(GalleryConfig::default(), viewport());
    let mut r = Recorder::default();
    sketch
        .start(images, |img| img.rect, &mut r)
        .expect("start");
    (sketch, r)
}

#[test]
fn start_binds_each_image_once_at_worked_position() {
    let (sketch, r) = started(vec![image(1, 100.0, 50.0, 200.0, 300.0)]);
    assert_eq!(sketch.lifecycle(), Lifecycle::Running);
    assert_eq!(r.created, vec![1]);
    let m = &sketch.registry().meshes()[0];
    assert_eq!(m.position, Vec3::new(-250.0, 50.0, 0.0));
    assert_eq!(m.material.hover, [0.5, 0.5]);
}

#[test]
fn degenerate_and_failing_images_are_skipped() {
    let mut sketch = Sketch::new(GalleryConfig::default(), viewport());
    let mut r = Recorder {
        fail_ids: vec![3],
        ..Default::default()
    };
    let bound = sketch
        .start(
            vec![
                image(1, 0.0, 0.0, 100.0, 100.0),
                image(2, 0.0, 0.0, 0.0, 100.0),
                image(3, 0.0, 0.0, 100.0, 100.0),
                image(4, 200.0, 0.0, 100.0, 100.0),
            ],
            |img| img.rect,
            &mut r,
        )
        .unwrap();
    assert_eq!(bound, 2);
    assert_eq!(r.created, vec![1, 4]);
    let ids: Vec<u32> = sketch.registry().meshes().iter().map(|m| m.handle.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn rects_are_read_once_at_bind_time() {
    let mut sketch = Sketch::new(GalleryConfig::default(), viewport());
    let mut r = Recorder::default();
    let mut reads = 0;
    sketch
        .start(vec![image(1, 0.0, 0.0, 10.0, 10.0)], |img| {
            reads += 1;
            img.rect
        }, &mut r)
        .unwrap();
    for _ in 0..5 {
        sketch.frame(FRAME as f32, 0.0, &mut r).unwrap();
    }
    assert_eq!(reads, 1);
}

#[test]
fn lifecycle_rejects_double_start_and_start_after_dispose() {
    let (mut sketch, mut r) = started(vec![image(1, 0.0, 0.0, 10.0, 10.0)]);
    let again = sketch.start(vec![image(2, 0.0, 0.0, 10.0, 10.0)], |i| i.rect, &mut r);
    assert_eq!(again, Err(SketchError::AlreadyStarted));
    assert_eq!(sketch.registry().len(), 1);

    sketch.dispose();
    assert_eq!(sketch.lifecycle(), Lifecycle::Disposed);
    assert!(sketch.registry().is_empty());
    let after = sketch.start(vec![image(3, 0.0, 0.0, 10.0, 10.0)], |i| i.rect, &mut r);
    assert_eq!(after, Err(SketchError::Disposed));
}

#[test]
fn frames_before_start_or_after_dispose_render_nothing() {
    let mut sketch: Sketch<FakeImage> = Sketch::new(GalleryConfig::default(), viewport());
    let mut r = Recorder::default();
    sketch.frame(FRAME as f32, 0.0, &mut r).unwrap();
    assert!(r.positions.is_empty());

    let (mut sketch, mut r) = started(vec![image(1, 0.0, 0.0, 10.0, 10.0)]);
    sketch.dispose();
    sketch.frame(FRAME as f32, 0.0, &mut r).unwrap();
    assert!(r.positions.is_empty());
}

#[test]
fn rendered_positions_use_this_frames_scroll_offset() {
    let (mut sketch, mut r) = started(vec![image(1, 100.0, 50.0, 200.0, 300.0)]);
    sketch.on_native_scroll(300.0);
    for _ in 0..3 {
        sketch.frame(FRAME as f32, 0.0, &mut r).unwrap();
        let offset = sketch.scroll().rendered();
        assert!(offset > 0.0);
        let rect = LayoutRect::new(100.0, 50.0, 200.0, 300.0);
        let expected = mesh_position(&rect, offset, &viewport());
        assert_eq!(*r.positions.last().unwrap(), vec![expected]);
        assert_eq!(*r.speeds.last().unwrap(), sketch.scroll().normalized_speed());
    }
    // scrolling down moves the offset forward, so the speed is negative
    assert!(r.speeds.iter().all(|s| *s < 0.0));
}

#[test]
fn time_advances_by_fixed_step_per_frame_for_every_material() {
    let (mut sketch, mut r) = started(vec![
        image(1, 0.0, 0.0, 10.0, 10.0),
        image(2, 20.0, 0.0, 10.0, 10.0),
    ]);
    for _ in 0..4 {
        sketch.frame(FRAME as f32, 0.0, &mut r).unwrap();
    }
    let step = GalleryConfig::default().time_step;
    for (i, frame) in r.times.iter().enumerate() {
        for t in frame {
            assert!((t - step * (i as f32 + 1.0)).abs() < 1e-6);
        }
    }
}

#[test]
fn hover_is_per_mesh_and_follows_the_wall_clock() {
    let (mut sketch, mut r) = started(vec![
        image(1, 0.0, 0.0, 10.0, 10.0),
        image(2, 20.0, 0.0, 10.0, 10.0),
    ]);
    sketch.hover_enter(0, 0.0);
    sketch.frame(FRAME as f32, 0.5, &mut r).unwrap();
    sketch.frame(FRAME as f32, 2.0, &mut r).unwrap();
    let mid = &r.hover_states[0];
    assert!(mid[0] > 0.0 && mid[0] < 1.0);
    assert_eq!(mid[1], 0.0);
    assert_eq!(r.hover_states[1], vec![1.0, 0.0]);

    sketch.hover_leave(0, 2.0);
    sketch.frame(FRAME as f32, 3.0, &mut r).unwrap();
    assert_eq!(r.hover_states[2], vec![0.0, 0.0]);
}

#[test]
fn hover_on_unknown_index_is_ignored() {
    let (mut sketch, mut r) = started(vec![image(1, 0.0, 0.0, 10.0, 10.0)]);
    sketch.hover_enter(7, 0.0);
    sketch.hover_leave(9, 0.0);
    sketch.frame(FRAME as f32, 1.0, &mut r).unwrap();
    assert_eq!(r.hover_states[0], vec![0.0]);
}

#[test]
fn pointer_move_without_meshes_changes_nothing() {
    let mut sketch: Sketch<FakeImage> = Sketch::new(GalleryConfig::default(), viewport());
    let scroll_before = sketch.scroll().clone();
    let composite_before = sketch.composite().clone();
    assert_eq!(sketch.on_pointer_move(150.0, 250.0), None);
    assert_eq!(sketch.on_pointer_move(f32::NAN, 0.0), None);
    assert!(sketch.registry().is_empty());
    assert_eq!(*sketch.scroll(), scroll_before);
    assert_eq!(*sketch.composite(), composite_before);
    assert_eq!(sketch.lifecycle(), Lifecycle::Constructed);
}

#[test]
fn pointer_hit_writes_uv_and_miss_keeps_it() {
    let (mut sketch, _r) = started(vec![image(1, 100.0, 50.0, 200.0, 300.0)]);
    assert_eq!(sketch.on_pointer_move(100.0, 175.0), Some(0));
    let uv = sketch.registry().meshes()[0].material.hover;
    assert!((uv[0] - 0.25).abs() < 1e-3 && (uv[1] - 0.75).abs() < 1e-3);

    assert_eq!(sketch.on_pointer_move(700.0, 500.0), None);
    assert_eq!(sketch.registry().meshes()[0].material.hover, uv);
}

#[test]
fn resize_twice_equals_resize_once() {
    let images = vec![image(1, 100.0, 50.0, 200.0, 300.0), image(2, 900.0, 400.0, 320.0, 240.0)];
    let (mut once, mut r1) = started(images.clone());
    let (mut twice, mut r2) = started(images);
    once.on_native_scroll(250.0);
    twice.on_native_scroll(250.0);
    once.frame(FRAME as f32, 0.0, &mut r1).unwrap();
    twice.frame(FRAME as f32, 0.0, &mut r2).unwrap();

    let vp = Viewport::new(1280.0, 720.0);
    once.on_resize(vp, &mut r1);
    twice.on_resize(vp, &mut r2);
    twice.on_resize(vp, &mut r2);
    assert_eq!(once.camera(), twice.camera());

    for _ in 0..10 {
        once.frame(FRAME as f32, 0.0, &mut r1).unwrap();
        twice.frame(FRAME as f32, 0.0, &mut r2).unwrap();
    }
    assert_eq!(r1.positions.last(), r2.positions.last());
    assert_eq!(*r2.resizes.last().unwrap(), vp);
}

#[test]
fn resize_repositions_against_new_viewport_immediately() {
    let (mut sketch, mut r) = started(vec![image(1, 100.0, 50.0, 200.0, 300.0)]);
    sketch.on_resize(Viewport::new(1000.0, 800.0), &mut r);
    let p = sketch.registry().meshes()[0].position;
    assert_eq!(p, Vec3::new(50.0 - 500.0 + 100.0, 0.0 - 100.0 + 400.0 - 150.0, 0.0));
}

#[test]
fn jump_scroll_places_meshes_without_easing() {
    let (mut sketch, mut r) = started(vec![image(1, 100.0, 50.0, 200.0, 300.0)]);
    sketch.jump_scroll_to(400.0);
    sketch.frame(FRAME as f32, 0.0, &mut r).unwrap();
    assert_eq!(sketch.scroll().rendered(), 400.0);
    assert_eq!(r.positions[0][0].y, 400.0 - 100.0 + 300.0 - 150.0);
    assert_eq!(r.speeds[0], 0.0);
}

#[test]
fn driver_steps_synthetic_frames_with_measured_dt() {
    let (mut sketch, mut r) = started(vec![image(1, 100.0, 50.0, 200.0, 300.0)]);
    let clock = ManualClock::new(0.0);
    let mut driver = FrameDriver::new(&clock);
    sketch.on_native_scroll(600.0);

    // first tick has no previous frame: dt = 0, nothing moves
    assert!(driver.tick(&mut sketch, &mut r));
    assert_eq!(sketch.scroll().rendered(), 0.0);

    for _ in 0..120 {
        clock.advance(FRAME);
        assert!(driver.tick(&mut sketch, &mut r));
    }
    assert_eq!(driver.frames(), 121);
    assert_eq!(r.positions.len(), 121);
    assert!(sketch.scroll().rendered() > 590.0);
}

#[test]
fn driver_keeps_running_through_render_errors() {
    let (mut sketch, mut r) = started(vec![image(1, 0.0, 0.0, 10.0, 10.0)]);
    r.fail_render = true;
    let clock = ManualClock::new(0.0);
    let mut driver = FrameDriver::new(&clock);
    for _ in 0..5 {
        clock.advance(FRAME);
        assert!(driver.tick(&mut sketch, &mut r));
    }
    assert_eq!(driver.frames(), 5);
    assert_eq!(r.positions.len(), 5);
}

#[test]
fn stopped_driver_does_not_tick() {
    let (mut sketch, mut r) = started(vec![image(1, 0.0, 0.0, 10.0, 10.0)]);
    let clock = ManualClock::new(0.0);
    let mut driver = FrameDriver::new(&clock);
    assert!(driver.tick(&mut sketch, &mut r));
    driver.stop();
    assert!(!driver.is_running());
    clock.advance(FRAME);
    assert!(!driver.tick(&mut sketch, &mut r));
    assert_eq!(driver.frames(), 1);
    assert_eq!(r.positions.len(), 1);
}

#[test]
fn catch_up_resize_after_start_repairs_a_stale_viewport() {
    let images = vec![image(1, 100.0, 50.0, 200.0, 300.0)];
    let fresh_vp = Viewport::new(1280.0, 720.0);

    // built against the size seen before the async device request
    let (mut stale, mut r1) = started(images.clone());
    stale.on_resize(fresh_vp, &mut r1);

    let mut fresh = Sketch::new(GalleryConfig::default(), fresh_vp);
    let mut r2 = Recorder::default();
    fresh.start(images, |img| img.rect, &mut r2).unwrap();

    assert_eq!(stale.camera(), fresh.camera());
    assert_eq!(stale.viewport(), fresh.viewport());
    assert_eq!(
        stale.registry().meshes()[0].position,
        fresh.registry().meshes()[0].position
    );
    assert_eq!(*r1.resizes.last().unwrap(), fresh_vp);
}

#[test]
fn pointer_in_surface_coordinates_hits_scrolled_mesh_under_cursor() {
    // image sits 600px down the page; after scrolling 500px it is drawn
    // 100px below the top of the fixed surface
    let (mut sketch, _r) = started(vec![image(1, 600.0, 50.0, 200.0, 300.0)]);
    sketch.jump_scroll_to(500.0);
    assert_eq!(sketch.on_pointer_move(150.0, 250.0), Some(0));
    let uv = sketch.registry().meshes()[0].material.hover;
    assert!((uv[0] - 0.5).abs() < 1e-3 && (uv[1] - 0.5).abs() < 1e-3);

    // page-relative y (client y + scroll) lands below the drawn mesh
    assert_eq!(sketch.on_pointer_move(150.0, 750.0), None);
}
