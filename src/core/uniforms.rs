use crate::core::distortion::CompositeUniforms;
use crate::core::registry::MeshRegistry;

/// Once-per-frame uniform writes: shader clock, hover cross-fade and the
/// distortion strength. Runs after repositioning and before rendering.
pub fn push<H>(
    registry: &mut MeshRegistry<H>,
    composite: &mut CompositeUniforms,
    time_step: f32,
    scroll_speed: f32,
    now: f64,
) {
    registry.for_each_material_mut(|material, hover| {
        material.time += time_step;
        material.hover_state = hover.value(now);
    });
    composite.scroll_speed = if scroll_speed.is_finite() {
        scroll_speed
    } else {
        0.0
    };
}
