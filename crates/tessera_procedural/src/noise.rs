//! # Terrain Noise
//!
//! Deterministic coherent noise for the tile world.
//!
//! Two layers:
//!
//! - [`SimplexNoise`]: a single seeded 2D simplex gradient field.
//! - [`NoiseField`]: the terrain-facing contract. Divides world
//!   coordinates by `scale` and sums `octaves` simplex layers, octave `i`
//!   weighted `persistence^i` at frequency `lacunarity^i`.
//!
//! ## Determinism Guarantee
//!
//! Given the same `WorldSeed` and `NoiseParams`, sampling produces
//! **exactly** the same values on any platform, any time. Negative
//! coordinates are first-class: the lattice uses a true floor, so there
//! is no seam at the origin.

use serde::{Deserialize, Serialize};

use crate::error::{ProceduralError, ProceduralResult};

/// World seed for deterministic generation.
///
/// All procedural generation derives from this seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldSeed(u64);

impl WorldSeed {
    /// Creates a new world seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Derives a sub-seed for a specific purpose (terrain, trees, ...).
    #[inline]
    #[must_use]
    pub const fn derive(self, purpose: u64) -> Self {
        let mut hash = self.0;
        hash ^= purpose;
        hash = hash.wrapping_mul(0x517c_c1b7_2722_0a95);
        hash ^= hash >> 32;
        Self(hash)
    }
}

impl Default for WorldSeed {
    fn default() -> Self {
        Self(0x7E55_E8A0_0D1E_5EED)
    }
}

/// Shuffled lattice hash plus the 2D gradient set.
struct Lattice {
    /// 256 shuffled entries, doubled so `i + perm[j]` never wraps.
    perm: [u8; 512],
}

impl Lattice {
    /// Gradient directions for 2D simplex corners.
    const GRADIENTS: [[i8; 2]; 12] = [
        [1, 0], [1, 1], [0, 1], [-1, 1],
        [-1, 0], [-1, -1], [0, -1], [1, -1],
        [1, 0], [0, 1], [-1, 0], [0, -1],
    ];

    fn new(seed: WorldSeed) -> Self {
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().take(256).enumerate() {
            *slot = i as u8;
        }

        // Fisher-Yates driven by xorshift64; zero state would never move.
        let mut state = seed.value() | 1;
        for i in (1..256).rev() {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let j = (state % (i as u64 + 1)) as usize;
            perm.swap(i, j);
        }

        let (low, high) = perm.split_at_mut(256);
        high.copy_from_slice(low);

        Self { perm }
    }

    #[inline]
    fn hash(&self, index: usize) -> u8 {
        self.perm[index & 511]
    }

    #[inline]
    fn gradient(hash: u8) -> [i8; 2] {
        Self::GRADIENTS[(hash % 12) as usize]
    }
}

/// 2D Simplex noise generator.
///
/// Produces smooth, continuous values in the range [-1, 1].
pub struct SimplexNoise {
    lattice: Lattice,
}

impl SimplexNoise {
    /// Skewing factor for 2D simplex grid: (sqrt(3) - 1) / 2.
    const F2: f64 = 0.366_025_403_784_439;
    /// Unskewing factor for 2D simplex grid: (3 - sqrt(3)) / 6.
    const G2: f64 = 0.211_324_865_405_187;

    /// Creates a new simplex noise generator from a seed.
    #[must_use]
    pub fn new(seed: WorldSeed) -> Self {
        Self {
            lattice: Lattice::new(seed),
        }
    }

    /// Samples 2D simplex noise at the given coordinates.
    ///
    /// # Returns
    ///
    /// A value in the range [-1, 1].
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let skew = (x + y) * Self::F2;
        let i = floor_to_i64(x + skew);
        let j = floor_to_i64(y + skew);

        let unskew = (i + j) as f64 * Self::G2;
        let x0 = x - (i as f64 - unskew);
        let y0 = y - (j as f64 - unskew);

        // Upper or lower triangle of the skewed cell.
        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - f64::from(i1) + Self::G2;
        let y1 = y0 - f64::from(j1) + Self::G2;
        let x2 = x0 - 1.0 + 2.0 * Self::G2;
        let y2 = y0 - 1.0 + 2.0 * Self::G2;

        let ii = (i & 255) as usize;
        let jj = (j & 255) as usize;
        let (i1, j1) = (i1 as usize, j1 as usize);

        let h0 = self.lattice.hash(ii + self.lattice.hash(jj) as usize);
        let h1 = self.lattice.hash(ii + i1 + self.lattice.hash(jj + j1) as usize);
        let h2 = self.lattice.hash(ii + 1 + self.lattice.hash(jj + 1) as usize);

        let n = corner(x0, y0, h0) + corner(x1, y1, h1) + corner(x2, y2, h2);

        // 70 maps the summed kernel peak onto [-1, 1].
        (70.0 * n).clamp(-1.0, 1.0)
    }

    /// Generates octaved (fractal) noise.
    ///
    /// # Arguments
    ///
    /// * `x`, `y` - Coordinates in noise space
    /// * `octaves` - Number of noise layers
    /// * `persistence` - Amplitude multiplier per octave
    /// * `lacunarity` - Frequency multiplier per octave
    ///
    /// # Returns
    ///
    /// The amplitude-normalized sum, in [-1, 1]. Zero octaves yields 0.
    #[must_use]
    pub fn octaved(&self, x: f64, y: f64, octaves: u32, persistence: f64, lacunarity: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_amplitude = 0.0;

        for _ in 0..octaves {
            total += self.sample(x * frequency, y * frequency) * amplitude;
            max_amplitude += amplitude;
            amplitude *= persistence;
            frequency *= lacunarity;
        }

        if max_amplitude == 0.0 {
            return 0.0;
        }
        total / max_amplitude
    }
}

/// Contribution of one simplex corner.
#[inline]
fn corner(x: f64, y: f64, hash: u8) -> f64 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let grad = Lattice::gradient(hash);
    let t2 = t * t;
    t2 * t2 * (x * f64::from(grad[0]) + y * f64::from(grad[1]))
}

/// Floor that stays correct below zero (plain `as` truncates toward zero).
#[inline]
fn floor_to_i64(x: f64) -> i64 {
    let xi = x as i64;
    if x < xi as f64 { xi - 1 } else { xi }
}

/// Parameters of the terrain noise field.
///
/// Fixed at startup and immutable for a session.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseParams {
    /// World units per noise unit. Larger = broader features.
    pub scale: f64,
    /// Number of layered octaves.
    pub octaves: u32,
    /// Amplitude decay per octave.
    pub persistence: f64,
    /// Frequency growth per octave.
    pub lacunarity: f64,
}

impl NoiseParams {
    /// Default feature scale.
    pub const DEFAULT_SCALE: f64 = 100.0;
    /// Default octave count.
    pub const DEFAULT_OCTAVES: u32 = 6;
    /// Default persistence.
    pub const DEFAULT_PERSISTENCE: f64 = 0.5;
    /// Default lacunarity.
    pub const DEFAULT_LACUNARITY: f64 = 2.0;

    /// Checks that the parameters describe a usable field.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::InvalidNoiseParams`] if `scale` is not a
    /// positive finite number, `octaves` is zero, or either multiplier is
    /// not finite.
    pub fn validate(&self) -> ProceduralResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ProceduralError::InvalidNoiseParams(format!(
                "scale must be positive and finite, got {}",
                self.scale
            )));
        }
        if self.octaves == 0 {
            return Err(ProceduralError::InvalidNoiseParams(
                "octaves must be at least 1".to_string(),
            ));
        }
        if !self.persistence.is_finite() || !self.lacunarity.is_finite() {
            return Err(ProceduralError::InvalidNoiseParams(format!(
                "persistence ({}) and lacunarity ({}) must be finite",
                self.persistence, self.lacunarity
            )));
        }
        Ok(())
    }
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            scale: Self::DEFAULT_SCALE,
            octaves: Self::DEFAULT_OCTAVES,
            persistence: Self::DEFAULT_PERSISTENCE,
            lacunarity: Self::DEFAULT_LACUNARITY,
        }
    }
}

/// The terrain scalar field sampled in world units.
///
/// Pure: no interior state changes on sampling.
pub struct NoiseField {
    noise: SimplexNoise,
    params: NoiseParams,
}

impl NoiseField {
    /// Seed purpose tag for the terrain field.
    const TERRAIN_PURPOSE: u64 = 1;

    /// Creates a field from a session seed and validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ProceduralError::InvalidNoiseParams`] if `params` fails
    /// [`NoiseParams::validate`].
    pub fn new(seed: WorldSeed, params: NoiseParams) -> ProceduralResult<Self> {
        params.validate()?;
        Ok(Self {
            noise: SimplexNoise::new(seed.derive(Self::TERRAIN_PURPOSE)),
            params,
        })
    }

    /// Samples the field at world coordinates.
    ///
    /// # Returns
    ///
    /// A value in [-1, 1].
    #[inline]
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let p = &self.params;
        self.noise
            .octaved(x / p.scale, y / p.scale, p.octaves, p.persistence, p.lacunarity)
    }

    /// Returns the parameters this field was built with.
    #[must_use]
    pub const fn params(&self) -> &NoiseParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(seed: u64) -> NoiseField {
        NoiseField::new(WorldSeed::new(seed), NoiseParams::default()).unwrap()
    }

    #[test]
    fn test_determinism() {
        let noise1 = SimplexNoise::new(WorldSeed::new(12345));
        let noise2 = SimplexNoise::new(WorldSeed::new(12345));

        for i in 0..100 {
            let x = f64::from(i) * 0.1 - 5.0;
            let y = f64::from(i) * 0.17 - 8.5;
            assert_eq!(noise1.sample(x, y), noise2.sample(x, y));
        }
    }

    #[test]
    fn test_different_seeds_different_results() {
        let a = field(1);
        let b = field(2);

        let differs = (0..64).any(|i| {
            let x = f64::from(i) * 37.0;
            a.sample(x, -x) != b.sample(x, -x)
        });
        assert!(differs, "Different seeds should produce different fields");
    }

    #[test]
    fn test_range() {
        let noise = SimplexNoise::new(WorldSeed::new(42));

        for i in 0..10_000 {
            let x = f64::from(i) * 0.1 - 500.0;
            let y = f64::from(i) * 0.13 - 650.0;
            let value = noise.sample(x, y);
            assert!((-1.0..=1.0).contains(&value), "Value {value} out of range at ({x}, {y})");
        }
    }

    #[test]
    fn test_field_continuous_across_origin() {
        let f = field(42);

        // Adjacent integer tiles around zero must vary smoothly.
        for x in -20..20 {
            let here = f.sample(f64::from(x), 0.0);
            let next = f.sample(f64::from(x + 1), 0.0);
            assert!(
                (here - next).abs() < 0.2,
                "Seam between x={x} and x={} ({here} vs {next})",
                x + 1
            );
        }
        for y in -20..20 {
            let here = f.sample(0.0, f64::from(y));
            let next = f.sample(0.0, f64::from(y + 1));
            assert!((here - next).abs() < 0.2, "Seam between y={y} and y={}", y + 1);
        }
    }

    #[test]
    fn test_field_range_with_negatives() {
        let f = field(7);
        for i in -500..500 {
            let v = f.sample(f64::from(i) * 3.0, f64::from(-i) * 5.0);
            assert!((-1.0..=1.0).contains(&v), "Field value {v} out of range");
        }
    }

    #[test]
    fn test_scale_divides_coordinates() {
        let seed = WorldSeed::new(9);
        let coarse = NoiseField::new(seed, NoiseParams { scale: 200.0, ..NoiseParams::default() }).unwrap();
        let fine = NoiseField::new(seed, NoiseParams { scale: 100.0, ..NoiseParams::default() }).unwrap();

        // Same seed: (2x, 2y) at scale 200 is (x, y) at scale 100.
        for i in -10..10 {
            let x = f64::from(i) * 13.0;
            let y = f64::from(i) * -7.0;
            assert_eq!(coarse.sample(2.0 * x, 2.0 * y), fine.sample(x, y));
        }
    }

    #[test]
    fn test_single_octave_matches_raw_simplex() {
        let seed = WorldSeed::new(3);
        let params = NoiseParams { octaves: 1, ..NoiseParams::default() };
        let f = NoiseField::new(seed, params).unwrap();
        let raw = SimplexNoise::new(seed.derive(1));

        assert_eq!(f.sample(250.0, -75.0), raw.sample(2.5, -0.75));
    }

    #[test]
    fn test_octaved_zero_octaves_is_flat() {
        let noise = SimplexNoise::new(WorldSeed::new(42));
        assert_eq!(noise.octaved(1.5, 2.5, 0, 0.5, 2.0), 0.0);
    }

    #[test]
    fn test_params_validation() {
        assert!(NoiseParams::default().validate().is_ok());

        let bad_scale = NoiseParams { scale: 0.0, ..NoiseParams::default() };
        assert!(matches!(bad_scale.validate(), Err(ProceduralError::InvalidNoiseParams(_))));

        let bad_octaves = NoiseParams { octaves: 0, ..NoiseParams::default() };
        assert!(bad_octaves.validate().is_err());

        let bad_lacunarity = NoiseParams { lacunarity: f64::NAN, ..NoiseParams::default() };
        assert!(bad_lacunarity.validate().is_err());

        assert!(NoiseField::new(WorldSeed::default(), bad_scale).is_err());
    }

    #[test]
    fn test_seed_derivation() {
        let base = WorldSeed::new(42);
        assert_ne!(base.derive(1), base.derive(2));
        assert_eq!(base.derive(1), base.derive(1));
        assert_ne!(base.derive(1), base);
    }
}
