//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::training_engine::error::{DrillError, DrillResult};
use crate::training_engine::models::{AdvancePolicy, GameRules};

/// Overrides applied on top of a game's [`GameRules`].
///
/// Every field is optional so a partial JSON document is enough:
///
/// ```
/// use hijri_drill_gen::GameConfig;
///
/// let cfg = GameConfig::from_json(r#"{ "seed": 7, "time_limit_secs": 10 }"#).unwrap();
/// assert_eq!(cfg.seed, Some(7));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// RNG seed for reproducible sessions; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Countdown length; only meaningful for timed games.
    #[serde(default)]
    pub time_limit_secs: Option<u32>,

    /// Feedback delay for auto-advancing games.
    #[serde(default)]
    pub advance_delay_ms: Option<u64>,

    /// Probability of targeting today's month (0.0-1.0).
    #[serde(default)]
    pub today_bias: Option<f64>,
}

impl GameConfig {
    /// Parse a JSON config document and validate it.
    pub fn from_json(json: &str) -> DrillResult<Self> {
        let cfg: GameConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the countdown length (at least one second).
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = Some(secs.max(1));
        self
    }

    /// Set the auto-advance delay.
    pub fn with_advance_delay(mut self, delay_ms: u64) -> Self {
        self.advance_delay_ms = Some(delay_ms);
        self
    }

    /// Set the today-month bias (clamped to 0.0-1.0).
    pub fn with_today_bias(mut self, bias: f64) -> Self {
        self.today_bias = Some(bias.clamp(0.0, 1.0));
        self
    }

    fn validate(&self) -> DrillResult<()> {
        if let Some(bias) = self.today_bias {
            if !(0.0..=1.0).contains(&bias) {
                return Err(DrillError::InvalidConfig(format!(
                    "today_bias must be within 0.0..=1.0, got {bias}"
                )));
            }
        }
        if self.time_limit_secs == Some(0) {
            return Err(DrillError::InvalidConfig(
                "time_limit_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Apply the overrides to `rules`.
    ///
    /// Time limits only apply to games that are timed to begin with, and the
    /// advance delay only to auto-advancing ones.
    pub fn apply(&self, rules: GameRules) -> GameRules {
        let mut out = rules;
        if let (Some(secs), Some(_)) = (self.time_limit_secs, rules.time_limit_secs) {
            out.time_limit_secs = Some(secs);
        }
        if let (Some(delay_ms), AdvancePolicy::Auto { .. }) = (self.advance_delay_ms, rules.advance) {
            out.advance = AdvancePolicy::Auto { delay_ms };
        }
        if let Some(bias) = self.today_bias {
            out.today_bias = bias;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training_engine::models::GameKind;

    #[test]
    fn default_config_changes_nothing() {
        let rules = GameKind::TimeChallenge.default_rules();
        assert_eq!(GameConfig::default().apply(rules), rules);
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(123)
            .with_time_limit(45)
            .with_advance_delay(100)
            .with_today_bias(0.9);
        assert_eq!(cfg.seed, Some(123));
        assert_eq!(cfg.time_limit_secs, Some(45));
        assert_eq!(cfg.advance_delay_ms, Some(100));
        assert_eq!(cfg.today_bias, Some(0.9));
    }

    #[test]
    fn bias_clamped() {
        assert_eq!(GameConfig::default().with_today_bias(3.0).today_bias, Some(1.0));
        assert_eq!(GameConfig::default().with_today_bias(-1.0).today_bias, Some(0.0));
    }

    #[test]
    fn time_limit_ignored_for_untimed_games() {
        let cfg = GameConfig::default().with_time_limit(10);
        let rules = cfg.apply(GameKind::PositionQuiz.default_rules());
        assert_eq!(rules.time_limit_secs, None);
        let rules = cfg.apply(GameKind::QuickSort.default_rules());
        assert_eq!(rules.time_limit_secs, Some(10));
    }

    #[test]
    fn advance_delay_ignored_for_manual_games() {
        let cfg = GameConfig::default().with_advance_delay(5);
        let rules = cfg.apply(GameKind::FillGap.default_rules());
        assert_eq!(rules.advance, AdvancePolicy::Manual);
        let rules = cfg.apply(GameKind::BeforeAfter.default_rules());
        assert_eq!(rules.advance, AdvancePolicy::Auto { delay_ms: 5 });
    }

    #[test]
    fn from_json_accepts_partial_documents() {
        let cfg = GameConfig::from_json("{}").unwrap();
        assert_eq!(cfg, GameConfig::default());
        let cfg = GameConfig::from_json(r#"{"today_bias": 0.4}"#).unwrap();
        assert_eq!(cfg.today_bias, Some(0.4));
    }

    #[test]
    fn from_json_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{"today_bias": 1.5}"#),
            Err(DrillError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"time_limit_secs": 0}"#),
            Err(DrillError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(DrillError::Serialization(_))
        ));
    }
}
