//! Random figures (radial jitter + replay tokens).
//!
//! Model
//! - Pentagon/hexagon vertices sit on sorted jittered angles around a drawn
//!   center, so the vertex list always traces a simple polygon.
//! - Rhombi are built from a center, two diagonal half-lengths, and an
//!   orientation, so the four points form a true rhombus with p1–p3 and
//!   p2–p4 as the diagonals.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Figure, FigureKind, Hexagon, Pentagon, Point, Rhombus};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct SampleCfg {
    /// Half-extent of the uniform box the figure center is drawn from.
    /// If <= 0, centers at the origin.
    pub center_spread: f64,
    /// Vertex radius range (pentagon/hexagon), also the diagonal half-length
    /// range for rhombi.
    pub radius_min: f64,
    pub radius_max: f64,
    /// Angular jitter as a fraction of the base spacing 2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}

impl Default for SampleCfg {
    fn default() -> Self {
        Self {
            center_spread: 2.0,
            radius_min: 0.5,
            radius_max: 1.5,
            angle_jitter_frac: 0.3,
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random figure of the given kind. Same token ⇒ identical figure.
pub fn draw_figure(kind: FigureKind, cfg: SampleCfg, tok: ReplayToken) -> Figure {
    let mut rng = tok.to_std_rng();
    let center = draw_center(cfg, &mut rng);
    match kind {
        FigureKind::Rhombus => Figure::Rhombus(draw_rhombus(center, cfg, &mut rng)),
        FigureKind::Pentagon => {
            Figure::Pentagon(Pentagon::new(ring_vertices(center, cfg, &mut rng)))
        }
        FigureKind::Hexagon => Figure::Hexagon(Hexagon::new(ring_vertices(center, cfg, &mut rng))),
    }
}

fn draw_center<R: Rng>(cfg: SampleCfg, rng: &mut R) -> Vector2<f64> {
    let spread = cfg.center_spread;
    if spread <= 0.0 {
        return Vector2::zeros();
    }
    Vector2::new(
        rng.gen_range(-spread..spread),
        rng.gen_range(-spread..spread),
    )
}

#[inline]
fn radius_range(cfg: SampleCfg) -> (f64, f64) {
    let lo = cfg.radius_min.max(1e-6);
    let hi = cfg.radius_max.max(lo);
    (lo, hi)
}

fn draw_rhombus<R: Rng>(center: Vector2<f64>, cfg: SampleCfg, rng: &mut R) -> Rhombus {
    let (lo, hi) = radius_range(cfg);
    let theta = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let a = rng.gen_range(lo..=hi);
    let b = rng.gen_range(lo..=hi);
    let u = Vector2::new(theta.cos(), theta.sin());
    let v = Vector2::new(-theta.sin(), theta.cos());
    // Interleaved so that p1–p3 and p2–p4 are the diagonals.
    Rhombus::new(
        Point::from(center + u * a),
        Point::from(center + v * b),
        Point::from(center - u * a),
        Point::from(center - v * b),
    )
}

fn ring_vertices<const N: usize, R: Rng>(
    center: Vector2<f64>,
    cfg: SampleCfg,
    rng: &mut R,
) -> [Point; N] {
    let (lo, hi) = radius_range(cfg);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let delta = std::f64::consts::TAU / (N as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    let mut angles = [0.0f64; N];
    for (k, th) in angles.iter_mut().enumerate() {
        let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
        *th = phase + (k as f64) * delta + jitter;
    }
    // Jitter is below half the spacing, but sort anyway so the traversal
    // order is monotone in angle and the polygon stays simple.
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut out = [Point::default(); N];
    for (k, th) in angles.iter().enumerate() {
        let r = rng.gen_range(lo..=hi);
        out[k] = Point::from(center + Vector2::new(th.cos(), th.sin()) * r);
    }
    out
}
