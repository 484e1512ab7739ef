use macroquad::prelude::*;
use ::rand::Rng;

use crate::canvas::{Bounds, Canvas};
use crate::color::CellColor;
use crate::config;
use crate::events::{CellId, LifecycleEvent};
use crate::lifecycle::{Advance, Lifespan, PhaseKind, PhaseSpan};

/// Starting values for a cell. Motion values and radius are truncated to whole
/// pixels when the cell is built.
#[derive(Clone, Copy, Debug)]
pub struct CellInit {
    pub id: CellId,
    pub pos: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: CellColor,
}

impl CellInit {
    /// Random cell anywhere inside `bounds`.
    pub fn random(id: CellId, bounds: &Bounds, rng: &mut impl Rng) -> Self {
        let speed = config::CELL_SPAWN_SPEED;
        Self {
            id,
            pos: bounds.random_point(rng),
            velocity: vec2(
                rng.gen::<f32>() * speed * 2.0 - speed,
                rng.gen::<f32>() * speed * 2.0 - speed,
            ),
            radius: config::CELL_BASE_RADIUS,
            color: CellColor::random(rng),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Cell {
    pub id: CellId,
    pub pos: Vec2,
    pub velocity: Vec2,
    pub base_radius: f32,
    pub radius: f32,
    fill_color: Color,
    glow_color: Color,
    stroke_color: Color,
    lifespan: Lifespan,
    lifeticker: u32,
    alive: bool,
}

impl Cell {
    pub fn new(init: CellInit, rng: &mut impl Rng) -> Self {
        Self::with_lifespan(init, Lifespan::random(rng))
    }

    pub fn with_lifespan(init: CellInit, lifespan: Lifespan) -> Self {
        let radius = init.radius.trunc().max(0.0);
        Self {
            id: init.id,
            pos: init.pos.trunc(),
            velocity: init.velocity.trunc(),
            base_radius: radius,
            radius,
            fill_color: init.color.into(),
            glow_color: init.color.darken(1.0).into(),
            stroke_color: init.color.lighten(1.0).into(),
            lifespan,
            lifeticker: 0,
            alive: false,
        }
    }

    #[cfg(test)]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Current phase, `None` until the cell is born.
    pub fn phase(&self) -> Option<PhaseSpan> {
        self.lifespan.current()
    }

    #[cfg(test)]
    pub fn phase_index(&self) -> Option<usize> {
        self.lifespan.phase_index()
    }

    #[cfg(test)]
    pub fn lifeticker(&self) -> u32 {
        self.lifeticker
    }

    pub fn lifespan(&self) -> &Lifespan {
        &self.lifespan
    }

    pub fn birth(&mut self, events: &mut Vec<LifecycleEvent>) {
        self.alive = true;
        self.enter_next_phase();
        events.push(LifecycleEvent::birth(self.id));
    }

    pub fn death(&mut self, events: &mut Vec<LifecycleEvent>) {
        self.alive = false;
        events.push(LifecycleEvent::death(self.id));
    }

    fn enter_next_phase(&mut self) -> Advance {
        self.lifeticker = 0;
        self.lifespan.advance()
    }

    /// One animation frame: move, resize, reflect, draw, then maybe change phase.
    pub fn update(
        &mut self,
        rng: &mut impl Rng,
        bounds: &Bounds,
        canvas: &mut impl Canvas,
        events: &mut Vec<LifecycleEvent>,
    ) {
        let Some(span) = self.phase() else {
            return;
        };

        self.lifeticker += 1;
        match span.kind {
            PhaseKind::Growing => self.update_growing(span, bounds),
            PhaseKind::Mature => self.update_mature(rng, bounds),
            PhaseKind::Decaying => self.update_decaying(span),
        }

        if span.kind.is_alive() {
            self.draw_alive(canvas);
        } else {
            self.draw_decaying(canvas);
        }

        self.check_for_next_phase(span, events);
    }

    fn progress(&self, span: PhaseSpan) -> f32 {
        self.lifeticker as f32 / span.cycles.max(1) as f32
    }

    fn update_growing(&mut self, span: PhaseSpan, bounds: &Bounds) {
        if !self.alive {
            return;
        }
        self.pos += self.velocity;
        self.radius = (self.base_radius * self.progress(span))
            .trunc()
            .clamp(0.0, self.base_radius);
        self.apply_constraints(bounds);
    }

    fn update_mature(&mut self, rng: &mut impl Rng, bounds: &Bounds) {
        if !self.alive {
            return;
        }
        let rnd: f32 = rng.gen();
        let jitter = rnd * config::MATURE_POSITION_JITTER * 2.0 - config::MATURE_POSITION_JITTER;
        self.pos += (Vec2::splat(jitter) + self.velocity).trunc();
        self.radius = (self.base_radius + rnd * config::MATURE_RADIUS_JITTER * 2.0
            - config::MATURE_RADIUS_JITTER)
            .max(0.0)
            .trunc();
        self.apply_constraints(bounds);
    }

    fn update_decaying(&mut self, span: PhaseSpan) {
        self.radius = (self.base_radius - self.base_radius * self.progress(span))
            .max(0.0)
            .trunc();
    }

    /// Reverse velocity on any axis where the center touches or passes an edge.
    fn apply_constraints(&mut self, bounds: &Bounds) {
        if self.pos.x <= 0.0 || self.pos.x >= bounds.width {
            self.velocity.x = -self.velocity.x;
        }
        if self.pos.y <= 0.0 || self.pos.y >= bounds.height {
            self.velocity.y = -self.velocity.y;
        }
    }

    fn draw_alive(&self, canvas: &mut impl Canvas) {
        let halo = config::HALO_SCALE * self.radius;
        canvas.glow(self.pos, halo, config::GLOW_BLUR, WHITE);
        canvas.fill_circle(self.pos, halo, self.fill_color);
        canvas.fill_circle(self.pos, self.radius, self.glow_color);
        canvas.stroke_circle(self.pos, self.radius, config::OUTLINE_WIDTH, self.stroke_color);
    }

    fn draw_decaying(&self, canvas: &mut impl Canvas) {
        canvas.stroke_circle(
            self.pos,
            config::HALO_SCALE * self.radius,
            config::OUTLINE_WIDTH,
            self.stroke_color,
        );
    }

    fn check_for_next_phase(&mut self, span: PhaseSpan, events: &mut Vec<LifecycleEvent>) {
        if self.lifeticker <= span.cycles {
            return;
        }
        let advance = self.enter_next_phase();
        events.push(LifecycleEvent::phase_end(self.id));
        if advance.wrapped {
            // Decay finished: the cell dies and is reborn in place.
            self.death(events);
            self.alive = true;
            events.push(LifecycleEvent::birth(self.id));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::testing::{DrawOp, RecordingCanvas};
    use crate::events::EventKey;
    use crate::lifecycle::PHASE_COUNT;
    use ::rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn bounds() -> Bounds {
        Bounds::new(100.0, 80.0)
    }

    fn init(pos: Vec2, velocity: Vec2) -> CellInit {
        CellInit {
            id: 7,
            pos,
            velocity,
            radius: 10.0,
            color: CellColor::new(100, 150, 200, 1.0),
        }
    }

    fn fixed_lifespan(cycles: [u32; PHASE_COUNT]) -> Lifespan {
        let kinds = [
            PhaseKind::Growing,
            PhaseKind::Mature,
            PhaseKind::Mature,
            PhaseKind::Decaying,
        ];
        Lifespan::from_spans(std::array::from_fn(|i| PhaseSpan {
            kind: kinds[i],
            cycles: cycles[i],
        }))
    }

    fn born(pos: Vec2, velocity: Vec2, cycles: [u32; PHASE_COUNT]) -> Cell {
        let mut cell = Cell::with_lifespan(init(pos, velocity), fixed_lifespan(cycles));
        cell.birth(&mut Vec::new());
        cell
    }

    #[test]
    fn birth_enters_growing_and_emits_birth() {
        let mut cell =
            Cell::with_lifespan(init(vec2(50.0, 40.0), Vec2::ZERO), fixed_lifespan([5; 4]));
        assert_eq!(cell.phase(), None);

        let mut events = Vec::new();
        cell.birth(&mut events);
        assert!(cell.is_alive());
        assert_eq!(cell.phase().unwrap().kind, PhaseKind::Growing);
        assert_eq!(cell.phase_index(), Some(0));
        assert_eq!(events, vec![LifecycleEvent::birth(7)]);
    }

    #[test]
    fn unborn_cell_does_not_update() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut canvas = RecordingCanvas::default();
        let mut cell = Cell::new(init(vec2(50.0, 40.0), vec2(1.0, 1.0)), &mut rng);
        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        assert_eq!(cell.pos, vec2(50.0, 40.0));
        assert_eq!(cell.lifeticker(), 0);
        assert!(canvas.ops.is_empty());
    }

    #[test]
    fn motion_values_are_truncated_to_integers() {
        let cell = Cell::with_lifespan(
            CellInit {
                radius: 10.9,
                ..init(vec2(12.7, 3.2), vec2(1.7, -1.7))
            },
            fixed_lifespan([5; 4]),
        );
        assert_eq!(cell.pos, vec2(12.0, 3.0));
        assert_eq!(cell.velocity, vec2(1.0, -1.0));
        assert_eq!(cell.base_radius, 10.0);
    }

    #[test]
    fn growing_radius_ramps_to_base() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut canvas = RecordingCanvas::default();
        let mut cell = born(vec2(50.0, 40.0), Vec2::ZERO, [4, 20, 20, 4]);

        let mut radii = Vec::new();
        for _ in 0..4 {
            cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
            radii.push(cell.radius);
        }
        assert_eq!(radii, vec![2.0, 5.0, 7.0, 10.0]);

        // One tick past the budget still clamps to the base radius.
        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        assert_eq!(cell.radius, 10.0);
        assert_eq!(cell.phase().unwrap().kind, PhaseKind::Mature);
    }

    #[test]
    fn reflects_horizontal_velocity_at_left_edge() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut canvas = RecordingCanvas::default();
        let mut cell = born(vec2(1.0, 40.0), vec2(-1.0, 1.0), [10; 4]);

        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        assert_eq!(cell.pos.x, 0.0);
        assert_eq!(cell.velocity, vec2(1.0, 1.0));
    }

    #[test]
    fn reflects_both_axes_at_far_corner() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut canvas = RecordingCanvas::default();
        let mut cell = born(vec2(99.0, 79.0), vec2(1.0, 1.0), [10; 4]);

        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        assert_eq!(cell.pos, vec2(100.0, 80.0));
        assert_eq!(cell.velocity, vec2(-1.0, -1.0));

        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        assert_eq!(cell.pos, vec2(99.0, 79.0));
        assert_eq!(cell.velocity, vec2(-1.0, -1.0));
    }

    #[test]
    fn mature_cell_reflects_after_jittered_step() {
        let mut canvas = RecordingCanvas::default();
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut cell = born(vec2(50.0, 40.0), Vec2::ZERO, [0, 10, 10, 4]);
            cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
            assert_eq!(cell.phase().unwrap().kind, PhaseKind::Mature);

            // trunc(jitter - 1) with jitter in [-2, 2) never moves the cell right.
            cell.pos = vec2(0.0, 40.0);
            cell.velocity = vec2(-1.0, 0.0);
            cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
            assert!(cell.pos.x <= 0.0 && cell.pos.x >= -3.0);
            assert_eq!(cell.velocity.x, 1.0);

            // trunc(jitter + 1) never moves it left.
            cell.pos = vec2(100.0, 40.0);
            cell.velocity = vec2(1.0, 0.0);
            cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
            assert!(cell.pos.x >= 100.0 && cell.pos.x <= 102.0);
            assert_eq!(cell.velocity.x, -1.0);
            canvas.take();
        }
    }

    #[test]
    fn decaying_cell_holds_position_and_shrinks() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut canvas = RecordingCanvas::default();
        let mut cell = born(vec2(50.0, 40.0), vec2(1.0, 1.0), [0, 0, 0, 4]);
        // Three frames each to burn through the zero-budget phases.
        for _ in 0..3 {
            cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        }
        assert_eq!(cell.phase().unwrap().kind, PhaseKind::Decaying);

        let pos = cell.pos;
        let mut radii = Vec::new();
        for _ in 0..4 {
            cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
            radii.push(cell.radius);
        }
        assert_eq!(cell.pos, pos);
        assert_eq!(radii, vec![7.0, 5.0, 2.0, 0.0]);
    }

    #[test]
    fn draw_style_depends_on_phase() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        let mut canvas = RecordingCanvas::default();
        let mut cell = born(vec2(50.0, 40.0), Vec2::ZERO, [0, 0, 0, 5]);

        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        let alive_ops = canvas.take();
        assert_eq!(alive_ops.len(), 4);
        assert!(matches!(alive_ops[0], DrawOp::Glow { blur, .. } if blur == config::GLOW_BLUR));
        assert!(matches!(alive_ops[1], DrawOp::Fill { .. }));
        assert!(matches!(alive_ops[2], DrawOp::Fill { .. }));
        assert!(matches!(alive_ops[3], DrawOp::Stroke { .. }));

        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        canvas.take();
        cell.update(&mut rng, &bounds(), &mut canvas, &mut Vec::new());
        let decay_ops = canvas.take();
        assert_eq!(decay_ops.len(), 1);
        match decay_ops[0] {
            DrawOp::Stroke { radius, .. } => {
                assert!((radius - config::HALO_SCALE * cell.radius).abs() < 1e-4)
            }
            ref other => panic!("expected a stroked ring, got {other:?}"),
        }
    }

    #[test]
    fn full_cycle_wraps_with_death_and_rebirth() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut canvas = RecordingCanvas::default();
        let mut cell = born(vec2(50.0, 40.0), Vec2::ZERO, [1, 1, 1, 1]);

        let mut events = Vec::new();
        let mut indices = Vec::new();
        for _ in 0..8 {
            cell.update(&mut rng, &bounds(), &mut canvas, &mut events);
            indices.push(cell.phase_index().unwrap());
        }

        assert_eq!(indices, vec![0, 1, 1, 2, 2, 3, 3, 0]);
        let keys: Vec<EventKey> = events.iter().map(|e| e.key).collect();
        assert_eq!(
            keys,
            vec![
                EventKey::PhaseEnd,
                EventKey::PhaseEnd,
                EventKey::PhaseEnd,
                EventKey::PhaseEnd,
                EventKey::Death,
                EventKey::Birth,
            ]
        );
        assert!(events.iter().all(|e| e.cell_id == 7));
        assert!(cell.is_alive());
        assert_eq!(cell.lifeticker(), 0);
    }

    #[test]
    fn radius_never_negative_or_above_base_plus_jitter() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let mut canvas = RecordingCanvas::default();
        let b = bounds();
        for id in 0..20 {
            let mut cell = Cell::new(CellInit::random(id, &b, &mut rng), &mut rng);
            cell.birth(&mut Vec::new());
            for _ in 0..500 {
                cell.update(&mut rng, &b, &mut canvas, &mut Vec::new());
                assert!(cell.radius >= 0.0);
                assert!(cell.radius <= cell.base_radius + config::MATURE_RADIUS_JITTER);
            }
            canvas.take();
        }
    }
}
