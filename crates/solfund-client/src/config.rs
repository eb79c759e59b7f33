use backoff::ExponentialBackoff;
use solana_sdk::commitment_config::CommitmentConfig;
use std::time::Duration;

/// Transaction submission settings for [`crate::SolfundClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Maximum number of send attempts after the first failure
    pub max_retries: usize,

    /// Backoff strategy for retry delays
    pub retry_backoff: ExponentialBackoff,

    /// Commitment used for reads and transaction confirmation
    pub commitment: CommitmentConfig,

    /// Whether to skip the preflight simulation. Program errors then surface
    /// from the confirmed transaction instead of the simulation.
    pub skip_preflight: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            max_retries: 5,
            retry_backoff: ExponentialBackoff {
                initial_interval: Duration::from_millis(500),
                max_interval: Duration::from_secs(30),
                max_elapsed_time: Some(Duration::from_secs(300)), // 5 minutes total
                multiplier: 2.0,
                ..Default::default()
            },
            commitment: CommitmentConfig::confirmed(),
            skip_preflight: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.max_retries, 5);
        assert_eq!(config.commitment, CommitmentConfig::confirmed());
        assert_eq!(
            config.retry_backoff.initial_interval,
            Duration::from_millis(500)
        );
        assert!(!config.skip_preflight);
    }
}
