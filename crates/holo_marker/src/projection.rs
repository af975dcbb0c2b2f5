use glam::{vec3, Vec3};
use holo_api::Dms;

/// Extent of the map plane in scene units; positions land in
/// `[-MAP_SIZE/2, MAP_SIZE/2]` on both axes.
pub const MAP_SIZE: f32 = 100.0;

/// A point on the map plane. Elevation is always zero; markers sit on the
/// ground and grow upward from there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenePosition {
    pub x: f32,
    pub z: f32,
}

impl ScenePosition {
    pub fn to_vec3(self) -> Vec3 {
        vec3(self.x, 0.0, self.z)
    }
}

/// Projects a DMS position onto the map plane.
///
/// Plain equirectangular mapping: decimal degrees scaled onto the map
/// extent, latitude negated so geographic north points toward -Z (the
/// camera's forward). Deliberately not geodesically accurate: marker
/// placement across the whole dataset depends on exactly this convention,
/// so keep it bit-for-bit stable.
pub fn project(dms: &Dms) -> ScenePosition {
    let lat = dms.decimal_lat();
    let lng = dms.decimal_lng();
    ScenePosition {
        x: ((lng / 180.0) * MAP_SIZE as f64 * 0.5) as f32,
        z: (-(lat / 90.0) * MAP_SIZE as f64 * 0.5) as f32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn solis_lands_where_expected() {
        let dms = Dms {
            lat: [35.0, 0.0, 0.0],
            lng: [10.0, 0.0, 0.0],
        };
        let pos = project(&dms);
        assert!((pos.x - 2.777_778).abs() < 1e-4);
        assert!((pos.z - -19.444_445).abs() < 1e-4);
    }

    #[rstest]
    #[case([90.0, 0.0, 0.0], [180.0, 0.0, 0.0], 50.0, -50.0)]
    #[case([-90.0, 0.0, 0.0], [-180.0, 0.0, 0.0], -50.0, 50.0)]
    #[case([0.0, 0.0, 0.0], [0.0, 0.0, 0.0], 0.0, 0.0)]
    fn extremes_map_to_the_map_edge(
        #[case] lat: [f64; 3],
        #[case] lng: [f64; 3],
        #[case] x: f32,
        #[case] z: f32,
    ) {
        let pos = project(&Dms { lat, lng });
        assert_eq!(pos.x, x);
        assert_eq!(pos.z, z);
    }

    #[test]
    fn projection_is_deterministic() {
        let dms = Dms {
            lat: [12.0, 34.0, 56.0],
            lng: [-98.0, 7.0, 6.0],
        };
        assert_eq!(project(&dms), project(&dms));
    }

    #[test]
    fn minutes_and_seconds_shift_the_result() {
        let whole = Dms {
            lat: [35.0, 0.0, 0.0],
            lng: [10.0, 0.0, 0.0],
        };
        let finer = Dms {
            lat: [35.0, 30.0, 0.0],
            lng: [10.0, 0.0, 30.0],
        };
        let a = project(&whole);
        let b = project(&finer);
        assert!(b.z < a.z); // further north, further toward -Z
        assert!(b.x > a.x);
    }
}
