use raylib::prelude::*;

use crate::error::ReelError;

pub mod palette {
    use raylib::prelude::Color;

    pub const ROSE: Color = Color { r: 255, g: 214, b: 224, a: 255 };
    pub const MINT: Color = Color { r: 212, g: 245, b: 233, a: 255 };
    pub const PEACH: Color = Color { r: 255, g: 225, b: 198, a: 255 };
    pub const BLUE: Color = Color { r: 214, g: 232, b: 255, a: 255 };
    pub const LAVENDER: Color = Color { r: 230, g: 220, b: 255, a: 255 };

    pub const PAPER: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    pub const MIST: Color = Color { r: 246, g: 247, b: 251, a: 255 };
    pub const INK: Color = Color { r: 58, g: 62, b: 84, a: 255 };

    /// Same colour with its alpha replaced.
    pub fn with_alpha(color: Color, alpha: u8) -> Color {
        Color { a: alpha, ..color }
    }
}

/// A soft radial glow, positioned in panel fractions.
#[derive(Debug, Clone, Copy)]
pub struct Glow {
    pub anchor: Vector2,
    pub radius: f32, // fraction of the panel height
    pub color: Color,
}

/// Background paint of a panel: a vertical gradient under two pastel glows.
#[derive(Debug, Clone, Copy)]
pub struct Backdrop {
    pub top: Color,
    pub bottom: Color,
    pub glows: [Glow; 2],
}

impl Backdrop {
    fn pastel(first: (f32, f32, Color), second: (f32, f32, Color)) -> Self {
        let glow = |(x, y, color): (f32, f32, Color)| Glow {
            anchor: Vector2::new(x, y),
            radius: 1.2,
            color,
        };
        Self {
            top: palette::PAPER,
            bottom: palette::MIST,
            glows: [glow(first), glow(second)],
        }
    }
}

/// Foreground drawn above a scene's backdrop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Linen,     // Soft diagonal fabric stripes
    Coffee,    // Cup on a saucer with rising steam
    Bathroom,  // Glass bottles on a shelf
    Droplets,  // Falling water droplets
    Breakfast, // Milk stream and falling fruit
}

#[derive(Debug, Clone)]
pub struct Scene {
    pub id: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    pub backdrop: Backdrop,
    pub foreground: Option<Decoration>,
}

impl Scene {
    /// Text read out for the scene instead of its visuals.
    pub fn description(&self) -> String {
        format!("{}. {}", self.title, self.caption)
    }
}

/// The fixed, non-empty list of scenes of a reel.
#[derive(Debug, Clone)]
pub struct Scenes(Box<[Scene]>);

impl Scenes {
    pub fn new(scenes: Vec<Scene>) -> Result<Self, ReelError> {
        if scenes.is_empty() {
            return Err(ReelError::NoScenes);
        }
        Ok(Self(scenes.into_boxed_slice()))
    }

    /// The five morning scenes.
    pub fn morning() -> Self {
        use palette::*;

        Self(Box::new([
            Scene {
                id: "bed",
                title: "Freshly made bed",
                caption: "Hands smoothing soft fabric, slow and gentle.",
                backdrop: Backdrop::pastel((0.1, 0.1, ROSE), (1.0, 0.0, MINT)),
                foreground: Some(Decoration::Linen),
            },
            Scene {
                id: "coffee",
                title: "Warm morning coffee",
                caption: "Sunlight kisses the cup; steam drifts in the air.",
                backdrop: Backdrop::pastel((0.8, 0.1, PEACH), (0.0, 1.0, BLUE)),
                foreground: Some(Decoration::Coffee),
            },
            Scene {
                id: "bathroom",
                title: "Clean, aesthetic bathroom",
                caption: "Glass bottles and soft towels glow in the sun.",
                backdrop: Backdrop::pastel((0.9, 0.8, LAVENDER), (0.0, 0.0, BLUE)),
                foreground: Some(Decoration::Bathroom),
            },
            Scene {
                id: "wash",
                title: "Refreshing cold water",
                caption: "Droplets sparkle in the sunlight.",
                backdrop: Backdrop::pastel((0.2, 0.0, BLUE), (1.0, 0.6, MINT)),
                foreground: Some(Decoration::Droplets),
            },
            Scene {
                id: "breakfast",
                title: "Calm breakfast prep",
                caption: "Milk pours; fruits fall in soft natural light.",
                backdrop: Backdrop::pastel((0.8, 0.0, PEACH), (0.0, 1.0, ROSE)),
                foreground: Some(Decoration::Breakfast),
            },
        ]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Scene> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Scenes {
    type Output = Scene;

    fn index(&self, index: usize) -> &Scene {
        &self.0[index]
    }
}
