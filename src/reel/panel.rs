use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use raylib::prelude::*;

use crate::constants::*;
use crate::particle::{Particle, ParticleKind, Phase};
use crate::scene::{Backdrop, Decoration, Scene, palette};

const PANEL_W: f32 = RENDER_WIDTH as f32;
const PANEL_H: f32 = RENDER_HEIGHT as f32;

const CAPTION_SIZE: i32 = 34;
const TITLE_SIZE: i32 = 60;
const CAPTION_CHARS: usize = 40;
const TITLE_CHARS: usize = 24;

const GRAIN_SEED: u64 = 0x9e37_79b9;
const GRAIN_POINTS: usize = 320;

/// Fixed speckle pattern laid over every panel.
pub struct Grain {
    points: Vec<Vector2>,
}

impl Grain {
    pub fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(GRAIN_SEED);
        let points = (0..GRAIN_POINTS)
            .map(|_| Vector2::new(rng.random_range(0.0..PANEL_W), rng.random_range(0.0..PANEL_H)))
            .collect();
        Self { points }
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    fn draw(&self, d: &mut RaylibDrawHandle, left: f32) {
        let color = palette::with_alpha(palette::INK, 10);
        for point in &self.points {
            d.draw_circle_v(Vector2::new(left + point.x, point.y), 1.5, color);
        }
    }
}

impl Default for Grain {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws one scene panel whose left edge sits at `left` in the render texture.
pub fn draw_panel(
    d: &mut RaylibDrawHandle,
    scene: &Scene,
    particles: &[Particle],
    grain: &Grain,
    left: f32,
    clock: f32,
) {
    draw_backdrop(d, &scene.backdrop, left);
    grain.draw(d, left);
    draw_flare(d, left, clock);

    match scene.foreground {
        Some(Decoration::Linen) => draw_linen(d, left),
        Some(Decoration::Coffee) => draw_coffee(d, left, clock),
        Some(Decoration::Bathroom) => draw_bathroom(d, left),
        Some(Decoration::Droplets) => draw_particles(d, particles, left),
        Some(Decoration::Breakfast) => {
            draw_milk_stream(d, left, clock);
            draw_particles(d, particles, left);
        }
        None => {}
    }

    draw_card(d, scene, left);
}

fn draw_backdrop(d: &mut RaylibDrawHandle, backdrop: &Backdrop, left: f32) {
    d.draw_rectangle_gradient_v(
        left as i32,
        0,
        RENDER_WIDTH,
        RENDER_HEIGHT,
        backdrop.top,
        backdrop.bottom,
    );
    for glow in backdrop.glows.iter() {
        d.draw_circle_gradient(
            (left + glow.anchor.x * PANEL_W) as i32,
            (glow.anchor.y * PANEL_H) as i32,
            glow.radius * PANEL_W,
            palette::with_alpha(glow.color, 230),
            palette::with_alpha(glow.color, 0),
        );
    }
}

fn draw_flare(d: &mut RaylibDrawHandle, left: f32, clock: f32) {
    let pulse = 0.85 + 0.15 * (clock * 0.6).sin();
    d.draw_circle_gradient(
        (left + PANEL_W * 0.82) as i32,
        (PANEL_H * 0.14) as i32,
        PANEL_W * 0.38 * pulse,
        palette::with_alpha(palette::PAPER, 150),
        palette::with_alpha(palette::PAPER, 0),
    );
}

/// Clips the stripe `x = top_x - slope * y` to the panel `[left, right] x [0, height]`.
pub fn clip_stripe(
    top_x: f32,
    slope: f32,
    left: f32,
    right: f32,
    height: f32,
) -> Option<(Vector2, Vector2)> {
    let y_start = ((top_x - right) / slope).max(0.0);
    let y_end = ((top_x - left) / slope).min(height);
    if y_start >= y_end {
        return None;
    }
    Some((
        Vector2::new(top_x - slope * y_start, y_start),
        Vector2::new(top_x - slope * y_end, y_end),
    ))
}

fn draw_linen(d: &mut RaylibDrawHandle, left: f32) {
    // 115deg fabric stripes
    let slope = 25f32.to_radians().tan();
    let spacing = 60.0;
    let stripes = ((PANEL_W + slope * PANEL_H) / spacing) as i32 + 1;
    for k in 0..stripes {
        let top_x = left + k as f32 * spacing;
        if let Some((start, end)) = clip_stripe(top_x, slope, left, left + PANEL_W, PANEL_H) {
            let alpha = if k % 2 == 0 { 178 } else { 140 };
            d.draw_line_ex(start, end, 30.0, palette::with_alpha(palette::PAPER, alpha));
        }
    }
    d.draw_rectangle_gradient_v(
        left as i32,
        0,
        RENDER_WIDTH,
        RENDER_HEIGHT,
        palette::with_alpha(palette::PAPER, 128),
        palette::with_alpha(palette::PAPER, 0),
    );
}

fn draw_coffee(d: &mut RaylibDrawHandle, left: f32, clock: f32) {
    let scale = 3.0;
    let origin = Vector2::new(left + (PANEL_W - 220.0 * scale) * 0.5, PANEL_H * 0.42);
    let rect = |x: f32, y: f32, w: f32, h: f32| {
        let (x, y) = (origin.x + (20.0 + x) * scale, origin.y + (20.0 + y) * scale);
        Rectangle::new(x, y, w * scale, h * scale)
    };
    let cup_top = Color { r: 241, g: 245, b: 255, a: 255 };
    let saucer = Color { r: 233, g: 238, b: 252, a: 255 };

    let handle = palette::with_alpha(palette::PAPER, 204);
    d.draw_rectangle_rounded(rect(135.0, 55.0, 50.0, 50.0), 0.8, 16, handle);
    let body = rect(15.0, 40.0, 150.0, 80.0);
    d.draw_rectangle_rounded(body, 0.45, 16, palette::PAPER);
    d.draw_rectangle_gradient_v(
        (body.x + 20.0) as i32,
        (body.y + body.height * 0.5) as i32,
        (body.width - 40.0) as i32,
        (body.height * 0.4) as i32,
        palette::PAPER,
        cup_top,
    );
    d.draw_rectangle_rec(rect(0.0, 110.0, 180.0, 10.0), saucer);

    // Steam: three wisps of fading puffs rising above the cup
    for wisp in 0..3 {
        let base_x = body.x + body.width * (0.3 + 0.2 * wisp as f32);
        for puff in 0..8 {
            let rise = ((clock * 0.35 + wisp as f32 * 0.33 + puff as f32 / 8.0) % 1.0) * 260.0;
            let sway = ((clock + puff as f32 * 0.7 + wisp as f32) * 1.3).sin() * 14.0;
            let alpha = (120.0 * (1.0 - rise / 260.0)) as u8;
            d.draw_circle_v(
                Vector2::new(base_x + sway, body.y - 20.0 - rise),
                10.0 + rise * 0.05,
                palette::with_alpha(palette::PAPER, alpha),
            );
        }
    }
}

fn draw_bathroom(d: &mut RaylibDrawHandle, left: f32) {
    let scale = 3.0;
    let origin = Vector2::new(left + (PANEL_W - 280.0 * scale) * 0.5, PANEL_H * 0.4);
    let rect = |x: f32, y: f32, w: f32, h: f32| {
        let (x, y) = (origin.x + (10.0 + x) * scale, origin.y + (20.0 + y) * scale);
        Rectangle::new(x, y, w * scale, h * scale)
    };
    let glass_top = palette::with_alpha(palette::PAPER, 217);
    let glass_bottom = Color { r: 223, g: 233, b: 255, a: 153 };
    let shelf = Color { r: 234, g: 239, b: 255, a: 255 };

    let bottles = [(10.0, 40.0, 40.0, 80.0), (80.0, 25.0, 50.0, 95.0), (160.0, 35.0, 60.0, 85.0)];
    for (x, y, w, h) in bottles {
        let bottle = rect(x, y, w, h);
        d.draw_rectangle_rounded(bottle, 0.3, 12, glass_bottom);
        d.draw_rectangle_rounded(
            Rectangle::new(bottle.x, bottle.y, bottle.width, bottle.height * 0.55),
            0.3,
            12,
            glass_top,
        );
        // Cap and a sunlit edge
        d.draw_rectangle_rounded(
            Rectangle::new(
                bottle.x + bottle.width * 0.3,
                bottle.y - 18.0,
                bottle.width * 0.4,
                24.0,
            ),
            0.5,
            8,
            shelf,
        );
        d.draw_rectangle_rec(
            Rectangle::new(bottle.x + 8.0, bottle.y + 16.0, 6.0, bottle.height - 32.0),
            palette::with_alpha(palette::PAPER, 200),
        );
    }
    d.draw_rectangle_rec(rect(0.0, 125.0, 240.0, 8.0), shelf);
}

fn draw_milk_stream(d: &mut RaylibDrawHandle, left: f32, clock: f32) {
    let wobble = (clock * 2.1).sin() * 4.0;
    let stream = Rectangle::new(left + PANEL_W * 0.5 - 14.0 + wobble, 0.0, 28.0, PANEL_H * 0.58);
    d.draw_rectangle_rounded(stream, 1.0, 12, palette::with_alpha(palette::PAPER, 215));
    d.draw_ellipse(
        (stream.x + stream.width * 0.5) as i32,
        (stream.y + stream.height) as i32,
        60.0,
        16.0,
        palette::with_alpha(palette::PAPER, 180),
    );
}

fn draw_particles(d: &mut RaylibDrawHandle, particles: &[Particle], left: f32) {
    let droplet = Color { r: 168, g: 204, b: 255, a: 200 };
    let peach = Color { r: 255, g: 179, b: 138, a: 235 };
    let berry = Color { r: 155, g: 107, b: 214, a: 235 };

    for particle in particles {
        // Nothing is drawn before the delay elapses or after the fall ends
        let Phase::Falling(progress) = particle.phase() else {
            continue;
        };
        let x = left + particle.x * PANEL_W;
        let y = -0.05 * PANEL_H + progress * 1.1 * PANEL_H;
        match particle.kind {
            ParticleKind::Droplet => {
                d.draw_ellipse(x as i32, y as i32, 7.0, 11.0, droplet);
                let glint = palette::with_alpha(palette::PAPER, 220);
                d.draw_circle_v(Vector2::new(x - 2.0, y - 4.0), 2.0, glint);
            }
            ParticleKind::Peach => d.draw_circle_v(Vector2::new(x, y), 22.0, peach),
            ParticleKind::Berry => d.draw_circle_v(Vector2::new(x, y), 13.0, berry),
        }
    }
}

/// Greedy word wrap on character count.
pub fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

// Frosted card with the caption above the title
fn draw_card(d: &mut RaylibDrawHandle, scene: &Scene, left: f32) {
    let caption = wrap(scene.caption, CAPTION_CHARS);
    let title = wrap(scene.title, TITLE_CHARS);

    let padding = 48.0;
    let caption_line = CAPTION_SIZE as f32 * 1.4;
    let title_line = TITLE_SIZE as f32 * 1.2;
    let text_height = caption.len() as f32 * caption_line + 16.0 + title.len() as f32 * title_line;
    let height = padding * 2.0 + text_height;
    let card = Rectangle::new(left + 60.0, PANEL_H - 220.0 - height, PANEL_W - 120.0, height);

    d.draw_rectangle_rounded(card, 0.18, 16, palette::with_alpha(palette::PAPER, 150));

    let mut y = card.y + padding;
    for line in caption.iter() {
        let ink = palette::with_alpha(palette::INK, 190);
        d.draw_text(line, (card.x + padding) as i32, y as i32, CAPTION_SIZE, ink);
        y += caption_line;
    }
    y += 16.0;
    for line in title.iter() {
        d.draw_text(line, (card.x + padding) as i32, y as i32, TITLE_SIZE, palette::INK);
        y += title_line;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_words_whole() {
        let lines = wrap("Sunlight kisses the cup; steam drifts in the air.", 40);
        assert_eq!(lines, ["Sunlight kisses the cup; steam drifts in", "the air."]);
        assert!(lines.iter().all(|l| l.len() <= 40));
    }

    #[test]
    fn short_text_is_one_line() {
        assert_eq!(wrap("Calm breakfast prep", 24), ["Calm breakfast prep"]);
    }

    #[test]
    fn stripe_is_clipped_to_the_panel() {
        let (start, end) = clip_stripe(500.0, 0.5, 0.0, 1080.0, 1920.0).unwrap();
        assert_eq!(start, Vector2::new(500.0, 0.0));
        assert_eq!(end, Vector2::new(0.0, 1000.0));
    }

    #[test]
    fn stripe_right_of_panel_enters_lower_down() {
        let (start, end) = clip_stripe(1580.0, 0.5, 0.0, 1080.0, 1920.0).unwrap();
        assert_eq!(start, Vector2::new(1080.0, 1000.0));
        assert_eq!(end, Vector2::new(620.0, 1920.0));
    }

    #[test]
    fn stripe_outside_panel_is_skipped() {
        assert!(clip_stripe(3000.0, 0.5, 0.0, 1080.0, 1920.0).is_none());
    }

    #[test]
    fn grain_is_the_same_every_time() {
        let (a, b) = (Grain::new(), Grain::new());
        assert_eq!(a.points().len(), 320);
        assert_eq!(a.points(), b.points());
    }

    #[test]
    fn grain_stays_inside_the_panel() {
        let grain = Grain::new();
        assert!(grain.points().iter().all(|p| (0.0..PANEL_W).contains(&p.x)));
        assert!(grain.points().iter().all(|p| (0.0..PANEL_H).contains(&p.y)));
    }
}
