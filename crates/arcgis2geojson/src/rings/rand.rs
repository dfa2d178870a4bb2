//! Random star-shaped rings and nested ring sets (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic inputs for property tests and benchmarks of
//!   `assemble_polygons`: a row of disjoint exteriors, each with disjoint holes
//!   placed well inside it.
//!
//! Model
//! - `n` angles equally spaced on [0, 2π) with bounded angular jitter, sorted,
//!   radii `r·(1+u)` with `u ∈ [-radial_jitter, radial_jitter]`. Sorted angles
//!   give a simple, counter-clockwise ring.
//! - Holes sit on a circle of half the inner radius; with the default jitter
//!   they never touch each other or their exterior.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{Point, Ring};

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    /// Vertices per ring (clamped to at least 8).
    pub vertex_count: usize,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.3].
    pub angle_jitter_frac: f64,
    /// Relative radial jitter. Clamped to [0, 0.25].
    pub radial_jitter: f64,
}

impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: 12,
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
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

/// Closed counter-clockwise star-shaped ring around `center`.
pub fn draw_ring_radial<R: Rng>(cfg: RadialCfg, center: Point, radius: f64, rng: &mut R) -> Ring {
    let n = cfg.vertex_count.max(8);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.3);
    let rj = cfg.radial_jitter.clamp(0.0, 0.25);
    let delta = std::f64::consts::TAU / (n as f64);
    let mut angles: Vec<f64> = (0..n)
        .map(|k| (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta)
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut ring: Ring = angles
        .into_iter()
        .map(|theta| {
            let r = radius * (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj);
            Point::new(center.x + r * theta.cos(), center.y + r * theta.sin())
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// Untagged ArcGIS-style ring set: `exteriors` clockwise rings in a row, each
/// followed by `holes_per` counter-clockwise rings inside it.
///
/// Holes per exterior are capped at 6 so they stay disjoint.
pub fn draw_nested_rings(
    cfg: RadialCfg,
    exteriors: usize,
    holes_per: usize,
    tok: ReplayToken,
) -> Vec<Ring> {
    let mut rng = tok.to_std_rng();
    let holes_per = holes_per.min(6);
    let radius = 1.0;
    let r_in = radius * (1.0 - cfg.radial_jitter.clamp(0.0, 0.25));
    let mut out = Vec::with_capacity(exteriors * (1 + holes_per));
    for e in 0..exteriors {
        let center = Point::new(3.0 * radius * e as f64, 0.0);
        let mut ext = draw_ring_radial(cfg, center, radius, &mut rng);
        ext.reverse();
        out.push(ext);
        for h in 0..holes_per {
            let phi = std::f64::consts::TAU * (h as f64) / (holes_per as f64);
            let c = Point::new(
                center.x + 0.5 * r_in * phi.cos(),
                center.y + 0.5 * r_in * phi.sin(),
            );
            out.push(draw_ring_radial(cfg, c, 0.12 * r_in, &mut rng));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rings::is_clockwise;

    #[test]
    fn draws_are_replayable() {
        let tok = ReplayToken { seed: 7, index: 3 };
        let a = draw_nested_rings(RadialCfg::default(), 2, 3, tok);
        let b = draw_nested_rings(RadialCfg::default(), 2, 3, tok);
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
    }

    #[test]
    fn exteriors_clockwise_holes_not() {
        let rings = draw_nested_rings(RadialCfg::default(), 1, 2, ReplayToken { seed: 1, index: 0 });
        assert!(is_clockwise(&rings[0]));
        assert!(!is_clockwise(&rings[1]));
        assert!(!is_clockwise(&rings[2]));
        assert!(rings.iter().all(|r| r.first() == r.last()));
    }
}
