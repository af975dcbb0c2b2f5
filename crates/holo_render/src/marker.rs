use glam::{vec3, Vec3};

use crate::material::{Material, Rgba8};
use crate::picking::PickShape;
use crate::scene::{NodeId, NodeKind, SceneGraph, Transform};

pub const INDICATOR_RADIUS: f32 = 0.5;
pub const INDICATOR_PULSE_SPEED: f64 = 3.0;
pub const BEAM_RADIUS: f32 = 0.1;
pub const BEAM_HEIGHT: f32 = 15.0;
pub const RING_INNER_RADIUS: f32 = 1.0;
pub const RING_OUTER_RADIUS: f32 = 1.5;
/// Rings float just above the ground plane to avoid z-fighting the terrain.
pub const RING_LIFT: f32 = 0.1;
pub const ACCENT_OPACITY: f32 = 0.3;
/// Angular rate of the idle marker spin, rad/s about +Y.
pub const MARKER_SPIN_RATE: f32 = 0.6;

/// Node ids of one location marker composite.
///
/// The indicator is the only sub-object meant to be associated with a
/// location by the caller's registry; beam and ring are visual cues and
/// never resolve to anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerVisual {
    pub group: NodeId,
    pub indicator: NodeId,
    pub beam: NodeId,
    pub ring: NodeId,
}

impl MarkerVisual {
    /// Spawns the composite into the scene: a spinning group anchored at
    /// `anchor` with a glowing indicator sphere at its origin, a vertical
    /// beam above it, and a flat ring on the ground.
    pub fn build(scene: &mut SceneGraph, anchor: Vec3, color: Rgba8) -> Self {
        let group = scene.spawn(None, NodeKind::Group);
        {
            let node = scene.get_mut(group).expect("node spawned above");
            node.transform = Transform::from_translation(anchor);
            node.spin_rate = MARKER_SPIN_RATE;
        }

        let indicator = scene.spawn(Some(group), NodeKind::MarkerIndicator);
        {
            let node = scene.get_mut(indicator).expect("node spawned above");
            node.shape = PickShape::Sphere {
                radius: INDICATOR_RADIUS,
            };
            node.material = Some(Material::pulsing(color, INDICATOR_PULSE_SPEED).additive());
        }

        let beam = scene.spawn(Some(group), NodeKind::MarkerBeam);
        {
            let node = scene.get_mut(beam).expect("node spawned above");
            node.transform = Transform::from_translation(vec3(0.0, BEAM_HEIGHT * 0.5, 0.0));
            node.shape = PickShape::Aabb {
                min: vec3(-BEAM_RADIUS, -BEAM_HEIGHT * 0.5, -BEAM_RADIUS),
                max: vec3(BEAM_RADIUS, BEAM_HEIGHT * 0.5, BEAM_RADIUS),
            };
            node.material = Some(Material::basic(color).with_opacity(ACCENT_OPACITY).additive());
        }

        let ring = scene.spawn(Some(group), NodeKind::MarkerRing);
        {
            let node = scene.get_mut(ring).expect("node spawned above");
            node.transform = Transform::from_translation(vec3(0.0, RING_LIFT, 0.0));
            node.shape = PickShape::Annulus {
                inner: RING_INNER_RADIUS,
                outer: RING_OUTER_RADIUS,
            };
            node.material = Some(Material::basic(color).with_opacity(ACCENT_OPACITY).additive());
        }

        Self {
            group,
            indicator,
            beam,
            ring,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::rgb;
    use glam::Vec3;

    #[test]
    fn composite_hangs_off_one_group() {
        let mut scene = SceneGraph::new();
        let visual = MarkerVisual::build(&mut scene, vec3(2.0, 0.0, -19.0), rgb(0xff00ff));

        let group = scene.get(visual.group).unwrap();
        assert_eq!(
            group.children(),
            &[visual.indicator, visual.beam, visual.ring]
        );
        assert_eq!(group.transform.translation, vec3(2.0, 0.0, -19.0));
        assert!(group.spin_rate > 0.0);
    }

    #[test]
    fn indicator_sits_at_the_anchor() {
        let mut scene = SceneGraph::new();
        let anchor = vec3(-7.0, 0.0, 4.0);
        let visual = MarkerVisual::build(&mut scene, anchor, rgb(0x00ffff));

        let world = scene.world_transform(visual.indicator);
        assert_eq!(world.transform_point3(Vec3::ZERO), anchor);
    }

    #[test]
    fn only_the_indicator_is_a_sphere_target() {
        let mut scene = SceneGraph::new();
        let visual = MarkerVisual::build(&mut scene, Vec3::ZERO, rgb(0x00ff00));

        assert!(matches!(
            scene.get(visual.indicator).unwrap().shape,
            PickShape::Sphere { .. }
        ));
        assert!(matches!(
            scene.get(visual.beam).unwrap().shape,
            PickShape::Aabb { .. }
        ));
        assert!(matches!(
            scene.get(visual.ring).unwrap().shape,
            PickShape::Annulus { .. }
        ));
    }
}
