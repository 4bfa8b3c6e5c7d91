//! GRASP configuration.

/// Configuration for a GRASP run.
///
/// # RCL width
///
/// `alpha` controls how greedy the construction is: the restricted
/// candidate list holds every candidate scoring within
/// `min + alpha * (max - min)`. `alpha = 0` degenerates to pure greedy
/// (only candidates tied at the minimum), `alpha = 1` to uniform random
/// choice over the whole pool.
///
/// # Examples
///
/// ```
/// use crew_grasp::grasp::GraspConfig;
///
/// let config = GraspConfig::default()
///     .with_alpha(0.15)
///     .with_per_task_bonus(300.0)
///     .with_max_iterations(200)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
pub struct GraspConfig {
    /// RCL width, in [0, 1].
    pub alpha: f64,

    /// Greedy score reward per task a rotation covers.
    ///
    /// Larger values favor rotations covering more tasks, pushing
    /// construction toward full coverage with fewer rotations.
    pub per_task_bonus: f64,

    /// Magnitude of the uniform random perturbation added to each greedy
    /// score, for tie-breaking and diversification across restarts.
    /// `0.0` keeps scoring deterministic.
    pub perturbation_radius: f64,

    /// Number of independent construction restarts.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GraspConfig {
    fn default() -> Self {
        Self {
            alpha: 0.3,
            per_task_bonus: 0.0,
            perturbation_radius: 0.0,
            max_iterations: 100,
            seed: None,
        }
    }
}

impl GraspConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_per_task_bonus(mut self, bonus: f64) -> Self {
        self.per_task_bonus = bonus;
        self
    }

    pub fn with_perturbation_radius(mut self, radius: f64) -> Self {
        self.perturbation_radius = radius;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(format!("alpha must be in [0, 1], got {}", self.alpha));
        }
        if !self.per_task_bonus.is_finite() {
            return Err(format!(
                "per_task_bonus must be finite, got {}",
                self.per_task_bonus
            ));
        }
        if !self.perturbation_radius.is_finite() || self.perturbation_radius < 0.0 {
            return Err(format!(
                "perturbation_radius must be non-negative, got {}",
                self.perturbation_radius
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GraspConfig::default();
        assert!((config.alpha - 0.3).abs() < 1e-10);
        assert_eq!(config.per_task_bonus, 0.0);
        assert_eq!(config.perturbation_radius, 0.0);
        assert_eq!(config.max_iterations, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(GraspConfig::default().validate().is_ok());
        assert!(GraspConfig::default().with_alpha(0.0).validate().is_ok());
        assert!(GraspConfig::default().with_alpha(1.0).validate().is_ok());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(GraspConfig::default().with_alpha(-0.1).validate().is_err());
        assert!(GraspConfig::default().with_alpha(1.5).validate().is_err());
        assert!(GraspConfig::default()
            .with_alpha(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_bad_perturbation() {
        assert!(GraspConfig::default()
            .with_perturbation_radius(-1.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(GraspConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = GraspConfig::default()
            .with_alpha(0.1)
            .with_per_task_bonus(300.0)
            .with_perturbation_radius(2.5)
            .with_max_iterations(50)
            .with_seed(7);
        assert!((config.alpha - 0.1).abs() < 1e-10);
        assert!((config.per_task_bonus - 300.0).abs() < 1e-10);
        assert!((config.perturbation_radius - 2.5).abs() < 1e-10);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.seed, Some(7));
    }
}
