//! Pattern configuration and builder
//!
//! This module provides configuration types for deterministic pattern generation.

use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use glam::DVec2;

use crate::error::{PatternError, Result};

/// Point distribution used to fill the canvas interior
///
/// Every distribution is preceded by the four canvas corner points, and may be
/// topped up with uniform-random filler points (see
/// [`PatternConfig::random_points_factor`]).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    /// Golden-angle spiral out from the canvas center
    GoldenSpiral,
    /// A few random cluster centers, points scattered around each
    Clustered,
    /// Grid-bucketed rejection sampling for an even spread
    Uniform,
    /// Concentric rings of growing radius around an anchor point
    RadialGradient,
}

impl Distribution {
    /// Get the name this distribution is selected by in saved widget options
    pub fn name(self) -> &'static str {
        match self {
            Distribution::GoldenSpiral => "goldenSpiral",
            Distribution::Clustered => "clustered",
            Distribution::Uniform => "uniform",
            Distribution::RadialGradient => "radialGradient",
        }
    }
}

impl FromStr for Distribution {
    type Err = PatternError;

    /// Parse a distribution name
    ///
    /// Unknown names are a configuration error, never silently defaulted.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "goldenSpiral" => Ok(Distribution::GoldenSpiral),
            "clustered" => Ok(Distribution::Clustered),
            "uniform" => Ok(Distribution::Uniform),
            "radialGradient" => Ok(Distribution::RadialGradient),
            other => Err(PatternError::UnknownDistribution(other.to_string())),
        }
    }
}

/// Anchor position for the radial-gradient distribution
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// Canvas center
    #[default]
    Center,
    /// Corner (0, 0)
    TopLeft,
    /// Corner (width, 0)
    TopRight,
    /// Corner (0, height)
    BottomLeft,
    /// Corner (width, height)
    BottomRight,
}

impl Anchor {
    /// Resolve the anchor to canvas coordinates
    pub fn position(self, width: f64, height: f64) -> DVec2 {
        match self {
            Anchor::Center => DVec2::new(width / 2.0, height / 2.0),
            Anchor::TopLeft => DVec2::new(0.0, 0.0),
            Anchor::TopRight => DVec2::new(width, 0.0),
            Anchor::BottomLeft => DVec2::new(0.0, height),
            Anchor::BottomRight => DVec2::new(width, height),
        }
    }
}

impl FromStr for Anchor {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "center" => Ok(Anchor::Center),
            "topLeft" => Ok(Anchor::TopLeft),
            "topRight" => Ok(Anchor::TopRight),
            "bottomLeft" => Ok(Anchor::BottomLeft),
            "bottomRight" => Ok(Anchor::BottomRight),
            other => Err(PatternError::InvalidConfig(format!(
                "unknown anchor position: {}",
                other
            ))),
        }
    }
}

/// Configuration for deterministic pattern generation
///
/// The same configuration and canvas size will always produce the identical
/// point set, triangulation and cell layout — required so that re-rendering on
/// resize does not make the pattern drift.
///
/// # Serialization
///
/// Only the configuration is serialized (with the `serde` feature), never the
/// generated geometry. A widget regenerates its pattern from the stored
/// configuration.
///
/// # Example
///
/// ```rust
/// use voronoi_pattern::*;
///
/// let config = PatternConfigBuilder::new()
///     .seed(42)
///     .distribution(Distribution::GoldenSpiral)
///     .point_count(50)
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(config.seed, 42);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternConfig {
    /// Random seed for deterministic generation
    ///
    /// Every random draw is a pure function of this seed, so the same seed
    /// (with the same other options) always yields an identical point set.
    pub seed: u32,

    /// Number of interior points the selected distribution aims for
    pub point_count: usize,

    /// Which interior distribution to use
    pub distribution: Distribution,

    /// Uniform-random filler points, as a fraction of `point_count`
    ///
    /// `floor(point_count * random_points_factor)` extra points are appended
    /// after the distribution. Zero disables the filler.
    pub random_points_factor: f64,

    /// Number of cluster centers for [`Distribution::Clustered`]
    pub cluster_count: usize,

    /// Cluster scatter radius as a fraction of `min(width, height)`
    pub cluster_spread: f64,

    /// Anchor point for [`Distribution::RadialGradient`]
    pub anchor: Anchor,

    /// Ring radius growth factor for [`Distribution::RadialGradient`]
    ///
    /// Each ring's radius is the previous radius times this factor; must be
    /// greater than 1 so the rings actually grow outward.
    pub spacing_factor: f64,

    /// Minimum number of points placed on each radial ring
    pub min_points_per_ring: usize,
}

impl PatternConfig {
    /// Derive a full configuration from a seed alone
    ///
    /// Draws the point count (20 to 100) and the distribution from the seed
    /// stream, so a widget that only stores a daily seed still gets a varied
    /// but reproducible look. The radial-gradient distribution is never
    /// derived; it is only used when asked for explicitly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use voronoi_pattern::PatternConfig;
    ///
    /// let a = PatternConfig::derive(72340);
    /// let b = PatternConfig::derive(72340);
    /// assert_eq!(a, b);
    /// assert!((20..=100).contains(&a.point_count));
    /// ```
    pub fn derive(seed: u32) -> Self {
        use rand::Rng;
        use rand::SeedableRng;

        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(seed as u64);
        let point_count = rng.gen_range(20..=100);
        let distribution = match rng.gen_range(0..3) {
            0 => Distribution::GoldenSpiral,
            1 => Distribution::Clustered,
            _ => Distribution::Uniform,
        };

        let mut config = PatternConfigBuilder::new().seed(seed).build().unwrap();
        config.point_count = point_count;
        config.distribution = distribution;
        config
    }
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfigBuilder::new().build().unwrap()
    }
}

/// Builder for creating [`PatternConfig`] with validation
///
/// # Example
///
/// ```rust
/// use voronoi_pattern::*;
///
/// // Use defaults (random seed)
/// let config = PatternConfigBuilder::new().build().unwrap();
///
/// // Customize
/// let config = PatternConfigBuilder::new()
///     .seed(12345)
///     .distribution_name("radialGradient")
///     .unwrap()
///     .anchor(Anchor::BottomLeft)
///     .spacing_factor(1.3)
///     .unwrap()
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PatternConfigBuilder {
    seed: Option<u32>,
    point_count: usize,
    distribution: Distribution,
    random_points_factor: f64,
    cluster_count: usize,
    cluster_spread: f64,
    anchor: Anchor,
    spacing_factor: f64,
    min_points_per_ring: usize,
}

impl PatternConfigBuilder {
    /// Create a new builder with default values
    ///
    /// Defaults:
    /// - seed: Random (drawn at `build()` time)
    /// - point_count: 50
    /// - distribution: GoldenSpiral
    /// - random_points_factor: 1/3
    /// - cluster_count: 3, cluster_spread: 0.4
    /// - anchor: Center, spacing_factor: 1.21, min_points_per_ring: 8
    pub fn new() -> Self {
        Self {
            seed: None,
            point_count: 50,
            distribution: Distribution::GoldenSpiral,
            random_points_factor: 1.0 / 3.0,
            cluster_count: 3,
            cluster_spread: 0.4,
            anchor: Anchor::Center,
            spacing_factor: 1.21,
            min_points_per_ring: 8,
        }
    }

    /// Set the random seed
    ///
    /// Using the same seed with the same other options produces an identical
    /// pattern every time.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the interior point count
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the count is zero.
    pub fn point_count(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(PatternError::InvalidConfig(
                "point count must be at least 1".to_string(),
            ));
        }
        self.point_count = count;
        Ok(self)
    }

    /// Set the interior distribution
    pub fn distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Set the interior distribution by name
    ///
    /// # Errors
    ///
    /// Returns `UnknownDistribution` for names this crate does not implement.
    pub fn distribution_name(self, name: &str) -> Result<Self> {
        Ok(self.distribution(name.parse()?))
    }

    /// Set the uniform-random filler fraction
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the factor is negative or not finite.
    pub fn random_points_factor(mut self, factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(PatternError::InvalidConfig(format!(
                "random points factor must be finite and >= 0 (got {})",
                factor
            )));
        }
        self.random_points_factor = factor;
        Ok(self)
    }

    /// Set the cluster count for the clustered distribution
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the count is zero.
    pub fn cluster_count(mut self, count: usize) -> Result<Self> {
        if count == 0 {
            return Err(PatternError::InvalidConfig(
                "cluster count must be at least 1".to_string(),
            ));
        }
        self.cluster_count = count;
        Ok(self)
    }

    /// Set the cluster scatter radius fraction
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the spread is not strictly positive.
    pub fn cluster_spread(mut self, spread: f64) -> Result<Self> {
        if !spread.is_finite() || spread <= 0.0 {
            return Err(PatternError::InvalidConfig(format!(
                "cluster spread must be positive (got {})",
                spread
            )));
        }
        self.cluster_spread = spread;
        Ok(self)
    }

    /// Set the radial-gradient anchor
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set the ring spacing factor for the radial-gradient distribution
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` unless the factor is greater than 1 — at 1 or
    /// below the ring radius would never grow and ring placement would not
    /// terminate.
    pub fn spacing_factor(mut self, factor: f64) -> Result<Self> {
        if !factor.is_finite() || factor <= 1.0 {
            return Err(PatternError::InvalidConfig(format!(
                "spacing factor must be > 1 (got {})",
                factor
            )));
        }
        self.spacing_factor = factor;
        Ok(self)
    }

    /// Set the minimum points per radial ring
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the minimum is zero.
    pub fn min_points_per_ring(mut self, min: usize) -> Result<Self> {
        if min == 0 {
            return Err(PatternError::InvalidConfig(
                "minimum points per ring must be at least 1".to_string(),
            ));
        }
        self.min_points_per_ring = min;
        Ok(self)
    }

    /// Build the configuration
    ///
    /// If no seed was provided, draws a random one, so the built configuration
    /// is always explicit and reproducible afterwards.
    pub fn build(self) -> Result<PatternConfig> {
        let seed = self.seed.unwrap_or_else(rand::random);

        Ok(PatternConfig {
            seed,
            point_count: self.point_count,
            distribution: self.distribution,
            random_points_factor: self.random_points_factor,
            cluster_count: self.cluster_count,
            cluster_spread: self.cluster_spread,
            anchor: self.anchor,
            spacing_factor: self.spacing_factor,
            min_points_per_ring: self.min_points_per_ring,
        })
    }
}

impl Default for PatternConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distribution_names_round_trip() {
        for dist in [
            Distribution::GoldenSpiral,
            Distribution::Clustered,
            Distribution::Uniform,
            Distribution::RadialGradient,
        ] {
            assert_eq!(dist.name().parse::<Distribution>().unwrap(), dist);
        }
    }

    #[test]
    fn test_unknown_distribution_rejected() {
        let err = "spiralGalaxy".parse::<Distribution>().unwrap_err();
        match err {
            PatternError::UnknownDistribution(name) => assert_eq!(name, "spiralGalaxy"),
            other => panic!("expected UnknownDistribution, got {:?}", other),
        }
    }

    #[test]
    fn test_anchor_positions() {
        assert_eq!(Anchor::Center.position(100.0, 60.0), DVec2::new(50.0, 30.0));
        assert_eq!(Anchor::TopLeft.position(100.0, 60.0), DVec2::new(0.0, 0.0));
        assert_eq!(Anchor::TopRight.position(100.0, 60.0), DVec2::new(100.0, 0.0));
        assert_eq!(Anchor::BottomLeft.position(100.0, 60.0), DVec2::new(0.0, 60.0));
        assert_eq!(
            Anchor::BottomRight.position(100.0, 60.0),
            DVec2::new(100.0, 60.0)
        );
    }

    #[test]
    fn test_unknown_anchor_rejected() {
        assert!("middle".parse::<Anchor>().is_err());
    }

    #[test]
    fn test_builder_defaults() {
        let config = PatternConfigBuilder::new().build().unwrap();
        assert_eq!(config.point_count, 50);
        assert_eq!(config.distribution, Distribution::GoldenSpiral);
        assert!((config.random_points_factor - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(config.cluster_count, 3);
        assert!((config.cluster_spread - 0.4).abs() < 1e-12);
        assert_eq!(config.anchor, Anchor::Center);
        assert!((config.spacing_factor - 1.21).abs() < 1e-12);
        assert_eq!(config.min_points_per_ring, 8);
    }

    #[test]
    fn test_builder_custom() {
        let config = PatternConfigBuilder::new()
            .seed(42)
            .distribution(Distribution::Clustered)
            .point_count(80)
            .unwrap()
            .cluster_count(5)
            .unwrap()
            .cluster_spread(0.25)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(config.seed, 42);
        assert_eq!(config.distribution, Distribution::Clustered);
        assert_eq!(config.point_count, 80);
        assert_eq!(config.cluster_count, 5);
        assert!((config.cluster_spread - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_builder_rejects_invalid_values() {
        assert!(PatternConfigBuilder::new().point_count(0).is_err());
        assert!(PatternConfigBuilder::new().random_points_factor(-0.1).is_err());
        assert!(PatternConfigBuilder::new()
            .random_points_factor(f64::NAN)
            .is_err());
        assert!(PatternConfigBuilder::new().cluster_count(0).is_err());
        assert!(PatternConfigBuilder::new().cluster_spread(0.0).is_err());
        assert!(PatternConfigBuilder::new().spacing_factor(1.0).is_err());
        assert!(PatternConfigBuilder::new().spacing_factor(0.9).is_err());
        assert!(PatternConfigBuilder::new().min_points_per_ring(0).is_err());
    }

    #[test]
    fn test_distribution_name_setter() {
        let config = PatternConfigBuilder::new()
            .distribution_name("uniform")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(config.distribution, Distribution::Uniform);

        assert!(PatternConfigBuilder::new()
            .distribution_name("hexGrid")
            .is_err());
    }

    #[test]
    fn test_derive_is_deterministic() {
        let a = PatternConfig::derive(42);
        let b = PatternConfig::derive(42);
        assert_eq!(a, b);
        assert_eq!(a.seed, 42);
    }

    #[test]
    fn test_derive_stays_in_range() {
        for seed in [0, 1, 42, 72340, u32::MAX] {
            let config = PatternConfig::derive(seed);
            assert!((20..=100).contains(&config.point_count));
            assert_ne!(config.distribution, Distribution::RadialGradient);
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_serialization() {
        let config = PatternConfigBuilder::new()
            .seed(12345)
            .distribution(Distribution::RadialGradient)
            .anchor(Anchor::BottomLeft)
            .build()
            .unwrap();

        let json = serde_json::to_string(&config).unwrap();
        let restored: PatternConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, restored);
    }
}
