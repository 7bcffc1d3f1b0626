//! Seeded weighted point samplers (uniform + clustered "fishing grounds").
//!
//! Purpose
//! - Provide small, deterministic point clouds for benches, property tests,
//!   examples and the CLI `sample` command.
//!
//! Model
//! - Uniform: positions uniform in `bounds`, weights uniform in `[weight_min, weight_max]`.
//! - Clustered: `clusters` centres drawn uniformly in `bounds`; each point either
//!   joins a random cluster (approximate Gaussian offset, sum of four uniforms scaled
//!   by `spread`) or, with probability `background_frac`, lands uniformly in `bounds`.
//!   Positions are clamped into `bounds`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use super::types::{Rect, WeightedPoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Errors surfaced by the samplers.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid sampler params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

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

/// Uniform sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct UniformCfg {
    pub bounds: Rect,
    pub weight_min: f64,
    pub weight_max: f64,
}
impl Default for UniformCfg {
    fn default() -> Self {
        Self {
            bounds: unit_square(),
            weight_min: 1.0,
            weight_max: 1.0,
        }
    }
}

/// Clustered sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct ClusteredCfg {
    pub bounds: Rect,
    pub clusters: usize,
    /// Cluster radius scale, in the units of `bounds`.
    pub spread: f64,
    /// Fraction of points drawn uniformly instead of from a cluster. Must lie in [0, 1].
    pub background_frac: f64,
    pub weight_min: f64,
    pub weight_max: f64,
}
impl Default for ClusteredCfg {
    fn default() -> Self {
        Self {
            bounds: unit_square(),
            clusters: 5,
            spread: 0.05,
            background_frac: 0.2,
            weight_min: 0.5,
            weight_max: 10.0,
        }
    }
}

fn unit_square() -> Rect {
    Rect {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
    }
}

fn validate_common(bounds: &Rect, weight_min: f64, weight_max: f64) -> Result<(), SampleError> {
    let finite = [bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(SampleError::invalid("bounds must be finite"));
    }
    if bounds.x_min > bounds.x_max || bounds.y_min > bounds.y_max {
        return Err(SampleError::invalid("bounds must satisfy min <= max"));
    }
    if !(weight_min.is_finite() && weight_max.is_finite()) {
        return Err(SampleError::invalid("weight range must be finite"));
    }
    if weight_min > weight_max {
        return Err(SampleError::invalid("weight_min <= weight_max required"));
    }
    Ok(())
}

#[inline]
fn draw_in<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..=hi)
    } else {
        lo
    }
}

fn draw_uniform_point<R: Rng>(rng: &mut R, b: &Rect, w_lo: f64, w_hi: f64) -> WeightedPoint {
    let x = draw_in(rng, b.x_min, b.x_max);
    let y = draw_in(rng, b.y_min, b.y_max);
    WeightedPoint::new(x, y, draw_in(rng, w_lo, w_hi))
}

/// Draw `n` points uniformly in `cfg.bounds`.
pub fn sample_uniform(
    n: usize,
    cfg: UniformCfg,
    tok: ReplayToken,
) -> Result<Vec<WeightedPoint>, SampleError> {
    validate_common(&cfg.bounds, cfg.weight_min, cfg.weight_max)?;
    let mut rng = tok.to_std_rng();
    Ok((0..n)
        .map(|_| draw_uniform_point(&mut rng, &cfg.bounds, cfg.weight_min, cfg.weight_max))
        .collect())
}

/// Draw `n` points around `cfg.clusters` random centres plus uniform background.
pub fn sample_clustered(
    n: usize,
    cfg: ClusteredCfg,
    tok: ReplayToken,
) -> Result<Vec<WeightedPoint>, SampleError> {
    validate_common(&cfg.bounds, cfg.weight_min, cfg.weight_max)?;
    if cfg.clusters == 0 {
        return Err(SampleError::invalid("need at least one cluster"));
    }
    if !(cfg.spread.is_finite() && cfg.spread >= 0.0) {
        return Err(SampleError::invalid("spread must be finite and >= 0"));
    }
    if !(0.0..=1.0).contains(&cfg.background_frac) {
        return Err(SampleError::invalid("background_frac must lie in [0, 1]"));
    }
    let b = cfg.bounds;
    let mut rng = tok.to_std_rng();
    let centres: Vec<(f64, f64)> = (0..cfg.clusters)
        .map(|_| {
            (
                draw_in(&mut rng, b.x_min, b.x_max),
                draw_in(&mut rng, b.y_min, b.y_max),
            )
        })
        .collect();
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        if rng.gen::<f64>() < cfg.background_frac {
            out.push(draw_uniform_point(&mut rng, &b, cfg.weight_min, cfg.weight_max));
            continue;
        }
        let (cx, cy) = centres[rng.gen_range(0..centres.len())];
        let dx = bell(&mut rng) * cfg.spread;
        let dy = bell(&mut rng) * cfg.spread;
        let x = (cx + dx).clamp(b.x_min, b.x_max);
        let y = (cy + dy).clamp(b.y_min, b.y_max);
        let w = draw_in(&mut rng, cfg.weight_min, cfg.weight_max);
        out.push(WeightedPoint::new(x, y, w));
    }
    Ok(out)
}

/// Sum of four centred uniforms: bell-shaped on [-2, 2], variance 1/3.
#[inline]
fn bell<R: Rng>(rng: &mut R) -> f64 {
    (0..4).map(|_| rng.gen::<f64>() - 0.5).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reproducible_draw() {
        let tok = ReplayToken { seed: 42, index: 7 };
        let a = sample_clustered(200, ClusteredCfg::default(), tok).unwrap();
        let b = sample_clustered(200, ClusteredCfg::default(), tok).unwrap();
        assert_eq!(a, b);
        let tok2 = ReplayToken { seed: 42, index: 8 };
        let other = sample_clustered(200, ClusteredCfg::default(), tok2).unwrap();
        assert_ne!(a, other);
    }

    #[test]
    fn uniform_stays_in_bounds() {
        let cfg = UniformCfg {
            bounds: Rect::new(-5.0, 5.0, 10.0, 12.0).unwrap(),
            weight_min: 0.0,
            weight_max: 3.0,
        };
        let pts = sample_uniform(500, cfg, ReplayToken { seed: 1, index: 0 }).unwrap();
        assert_eq!(pts.len(), 500);
        for p in &pts {
            assert!(cfg.bounds.contains(p.pos));
            assert!((0.0..=3.0).contains(&p.weight));
        }
    }

    #[test]
    fn clustered_clamps_into_bounds() {
        let cfg = ClusteredCfg {
            spread: 10.0,
            ..ClusteredCfg::default()
        };
        let pts = sample_clustered(300, cfg, ReplayToken { seed: 3, index: 1 }).unwrap();
        assert!(pts.iter().all(|p| cfg.bounds.contains(p.pos)));
    }

    #[test]
    fn invalid_params_are_rejected() {
        let tok = ReplayToken { seed: 0, index: 0 };
        let bad_weights = UniformCfg {
            weight_min: 2.0,
            weight_max: 1.0,
            ..UniformCfg::default()
        };
        assert!(matches!(
            sample_uniform(10, bad_weights, tok),
            Err(SampleError::InvalidParams { .. })
        ));
        let no_clusters = ClusteredCfg {
            clusters: 0,
            ..ClusteredCfg::default()
        };
        assert!(sample_clustered(10, no_clusters, tok).is_err());
        let bad_frac = ClusteredCfg {
            background_frac: 1.5,
            ..ClusteredCfg::default()
        };
        assert!(sample_clustered(10, bad_frac, tok).is_err());
    }
}
