use glam::Vec3;
use rand::Rng;

/// Colour scheme of the hero. The site always ships the dark variant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Material colours for one theme, already converted to linear RGB.
#[derive(Clone, Copy, Debug)]
pub struct ThemePalette {
    pub emblem_color: Vec3,
    pub emblem_emissive: Vec3,
    pub node_color: Vec3,
    pub node_emissive: Vec3,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ThemePalette {
        match self {
            Theme::Dark => ThemePalette {
                emblem_color: srgb_hex(0x6366f1),
                emblem_emissive: srgb_hex(0x4f46e5),
                node_color: srgb_hex(0x0ea5e9),
                node_emissive: srgb_hex(0x0284c7),
            },
            Theme::Light => ThemePalette {
                emblem_color: srgb_hex(0x4f46e5),
                emblem_emissive: srgb_hex(0x3730a3),
                node_color: srgb_hex(0x06b6d4),
                node_emissive: srgb_hex(0x0891b2),
            },
        }
    }

    /// Draw one particle colour. Channels are sampled in r, g, b order.
    pub fn particle_color<R: Rng + ?Sized>(self, rng: &mut R) -> Vec3 {
        match self {
            Theme::Dark => {
                let r = 0.4 + rng.gen::<f32>() * 0.6;
                let g = 0.5 + rng.gen::<f32>() * 0.5;
                Vec3::new(r, g, 1.0)
            }
            Theme::Light => {
                let r = 0.2 + rng.gen::<f32>() * 0.4;
                let g = 0.3 + rng.gen::<f32>() * 0.4;
                let b = 0.8 + rng.gen::<f32>() * 0.2;
                Vec3::new(r, g, b)
            }
        }
    }
}

/// Convert a `0xRRGGBB` sRGB colour to linear RGB.
pub fn srgb_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
    Vec3::new(channel(16), channel(8), channel(0))
}

#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c < 0.04045 {
        c * 0.0773993808
    } else {
        (c * 0.9478672986 + 0.0521327014).powf(2.4)
    }
}
