//! Application configuration loaded from environment variables.

use std::env;

use agora_core::domain::{Capability, PostPolicy};
use agora_infra::JwtConfig;

#[cfg(feature = "postgres")]
use agora_infra::DatabaseConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    pub jwt: JwtConfig,
    pub policy: PostPolicy,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        #[cfg(feature = "postgres")]
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            #[cfg(feature = "postgres")]
            database,
            jwt: JwtConfig::from_env(),
            policy: Self::parse_policy(
                env::var("POSTS_REQUIRE_PROFILE_ON_DELETE").ok().as_deref(),
                env::var("POSTS_REMOVE_COMMENT_POLICY").ok().as_deref(),
            ),
        }
    }

    /// Build the post policy from its two settings.
    /// `require_profile`: `true`/`1` turns on the profile check.
    /// `remove_comment`: `author` restricts removal to the comment author.
    fn parse_policy(require_profile: Option<&str>, remove_comment: Option<&str>) -> PostPolicy {
        let defaults = PostPolicy::default();

        let require_profile_on_delete = require_profile
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.require_profile_on_delete);

        let remove_comment = match remove_comment.map(str::to_lowercase).as_deref() {
            Some("author") => Capability::AuthorOnly,
            Some("anyone") => Capability::Anyone,
            Some(other) => {
                tracing::warn!(value = %other, "Unknown POSTS_REMOVE_COMMENT_POLICY, using default");
                defaults.remove_comment
            }
            None => defaults.remove_comment,
        };

        PostPolicy {
            require_profile_on_delete,
            remove_comment,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_defaults() {
        let policy = AppConfig::parse_policy(None, None);

        assert_eq!(policy, PostPolicy::default());
        assert!(!policy.require_profile_on_delete);
    }

    #[test]
    fn test_policy_overrides() {
        let policy = AppConfig::parse_policy(Some("true"), Some("Author"));

        assert!(policy.require_profile_on_delete);
        assert_eq!(policy.remove_comment, Capability::AuthorOnly);
        assert_eq!(policy.delete_post, Capability::AuthorOnly);
    }

    #[test]
    fn test_policy_unknown_value_falls_back() {
        let policy = AppConfig::parse_policy(Some("yes"), Some("everybody"));

        assert!(!policy.require_profile_on_delete);
        assert_eq!(policy.remove_comment, Capability::Anyone);
    }
}
