/// sRGBA8 color, the layout the render backend uploads directly.
pub type Rgba8 = [u8; 4];

/// Expands a packed `0xRRGGBB` literal into an opaque [Rgba8].
pub const fn rgb(hex: u32) -> Rgba8 {
    [
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
        0xff,
    ]
}

/// Periodic brightness modulation, evaluated by the backend as
/// `sin(time * speed)` around the base color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    pub speed: f64,
}

/// Everything the backend needs to shade one node.
///
/// `time` is a plain uniform value; the per-frame animation pass writes it
/// for every pulsing material so the backend never reads a global clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgba8,
    /// Secondary color for height-mixed surfaces (terrain). None elsewhere.
    pub accent: Option<Rgba8>,
    pub opacity: f32,
    pub additive: bool,
    pub wireframe: bool,
    pub pulse: Option<Pulse>,
    pub time: f64,
}

impl Material {
    pub fn basic(color: Rgba8) -> Self {
        Self {
            color,
            accent: None,
            opacity: 1.0,
            additive: false,
            wireframe: false,
            pulse: None,
            time: 0.0,
        }
    }

    pub fn pulsing(color: Rgba8, speed: f64) -> Self {
        Self {
            pulse: Some(Pulse { speed }),
            ..Self::basic(color)
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn additive(mut self) -> Self {
        self.additive = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_unpacks_channels() {
        assert_eq!(rgb(0x00ffff), [0x00, 0xff, 0xff, 0xff]);
        assert_eq!(rgb(0xff8800), [0xff, 0x88, 0x00, 0xff]);
    }

    #[test]
    fn builders_compose() {
        let m = Material::pulsing(rgb(0x00ccff), 2.0)
            .with_opacity(0.3)
            .additive();
        assert_eq!(m.opacity, 0.3);
        assert!(m.additive);
        assert_eq!(m.pulse, Some(Pulse { speed: 2.0 }));
    }
}
