use macroquad::prelude::*;

use crate::canvas::Canvas;
use crate::lifecycle::PhaseKind;
use crate::simulation::Simulation;
use crate::stats::CellStats;

const BG_COLOR: Color = Color::new(0.02, 0.03, 0.08, 1.0);
const GLOW_LAYERS: usize = 4;

/// Draws straight to the macroquad window in screen space.
#[derive(Default)]
pub struct ScreenCanvas;

impl Canvas for ScreenCanvas {
    fn clear(&mut self) {
        set_default_camera();
        clear_background(BG_COLOR);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius > 0.0 {
            draw_circle(center.x, center.y, radius, color);
        }
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, thickness: f32, color: Color) {
        if radius > 0.0 {
            draw_circle_lines(center.x, center.y, radius, thickness, color);
        }
    }

    // No shadow blur in macroquad: stack faint discs that fall off with distance.
    fn glow(&mut self, center: Vec2, radius: f32, blur: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        for layer in (1..=GLOW_LAYERS).rev() {
            let t = layer as f32 / GLOW_LAYERS as f32;
            let alpha = color.a * 0.12 * (1.0 - t * 0.5);
            draw_circle(
                center.x,
                center.y,
                radius + blur * t,
                Color::new(color.r, color.g, color.b, alpha),
            );
        }
    }
}

pub fn draw_hud(sim: &Simulation, stats: &CellStats) {
    let tc = Color::new(0.7, 0.75, 0.8, 1.0);
    let sh = Color::new(0.0, 0.0, 0.0, 0.5);

    let census = PhaseKind::ALL
        .iter()
        .map(|kind| format!("{} {}", kind.label(), sim.pool.count_in(*kind)))
        .collect::<Vec<_>>()
        .join(" | ");
    let lines = [
        format!("FPS: {}", get_fps()),
        format!("Cells: {}", sim.pool.len()),
        census,
        format!(
            "Births: {} (+{})  Deaths: {} (+{})",
            stats.total.births,
            stats.births.last().unwrap_or(0.0),
            stats.total.deaths,
            stats.deaths.last().unwrap_or(0.0),
        ),
        format!("Frame: {}  ({:.1}s)", sim.frame, sim.elapsed().as_secs_f32()),
    ];

    for (i, text) in lines.iter().enumerate() {
        let y = 20.0 + i as f32 * 20.0;
        draw_text(text, 11.0, y + 1.0, 18.0, sh);
        draw_text(text, 10.0, y, 18.0, tc);
    }

    draw_census_graph(stats);
}

/// Small stacked line graph of the phase census, bottom-left corner.
fn draw_census_graph(stats: &CellStats) {
    let w = 200.0;
    let h = 60.0;
    let x0 = 10.0;
    let y0 = screen_height() - h - 10.0;
    draw_rectangle(x0, y0, w, h, Color::new(0.0, 0.0, 0.0, 0.35));

    let series = [
        (&stats.growing, Color::new(0.3, 0.9, 0.4, 0.8)),
        (&stats.mature, Color::new(0.3, 0.6, 1.0, 0.8)),
        (&stats.decaying, Color::new(1.0, 0.4, 0.3, 0.8)),
    ];
    let peak = series
        .iter()
        .flat_map(|(buf, _)| buf.iter())
        .fold(1.0f32, f32::max);

    for (buf, color) in series {
        let n = buf.len();
        if n < 2 {
            continue;
        }
        let step = w / (n - 1) as f32;
        let points: Vec<Vec2> = buf
            .iter()
            .enumerate()
            .map(|(i, v)| vec2(x0 + i as f32 * step, y0 + h - v / peak * h))
            .collect();
        for pair in points.windows(2) {
            draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, 1.0, color);
        }
    }
}
