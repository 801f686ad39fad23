//! Content validator entry points

use super::rules::ModerationRules;
use super::scanner::analyze;
use super::types::{ContentContext, SkillViolation, ValidationResult};
use crate::config::{AuditConfig, CacheConfig, Config};
use crate::core::audit::{AuditRecord, AuditSink, NoopAuditSink};
use crate::core::cache_manager::{CacheKey, CacheStats, ValidationCache};
use crate::utils::error::Result;
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::{debug, error, info};

static DEFAULT_RULES: Lazy<Arc<ModerationRules>> = Lazy::new(|| Arc::new(ModerationRules::default()));

/// Rule-based moderation engine for user-submitted text.
///
/// Cheap to share behind an `Arc`; every entry point takes `&self`.
pub struct ContentValidator {
    rules: Arc<ModerationRules>,
    cache: Option<ValidationCache>,
    audit: Arc<dyn AuditSink>,
    audit_config: AuditConfig,
}

impl ContentValidator {
    /// Validator with built-in rules, default cache and no audit trail
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Start configuring a validator
    pub fn builder() -> ContentValidatorBuilder {
        ContentValidatorBuilder::default()
    }

    /// Wire rules, cache and audit sink from configuration.
    ///
    /// Redis is used for the audit trail when enabled. If it cannot be
    /// reached the validator keeps running and records are dropped.
    pub async fn from_config(config: &Config) -> Result<Self> {
        info!("Creating content validator from configuration");

        let rules = Arc::new(ModerationRules::from_config(config.rules()));
        let builder = Self::builder()
            .rules(rules)
            .cache_config(config.cache().clone())
            .audit_config(config.audit().clone());

        let builder = if config.audit().enabled && config.redis().enabled {
            builder.audit_sink(Self::redis_sink(config).await)
        } else {
            builder
        };

        builder.build()
    }

    #[cfg(feature = "redis")]
    async fn redis_sink(config: &Config) -> Arc<dyn AuditSink> {
        use crate::core::audit::RedisAuditSink;
        use crate::storage::redis::RedisPool;
        use tracing::warn;

        let pool = match RedisPool::new(config.redis()).await {
            Ok(pool) => pool,
            Err(e) => {
                warn!("Redis connection failed, audit records will be dropped: {}", e);
                RedisPool::create_noop()
            }
        };
        Arc::new(RedisAuditSink::new(Arc::new(pool), config.audit()))
    }

    #[cfg(not(feature = "redis"))]
    async fn redis_sink(_config: &Config) -> Arc<dyn AuditSink> {
        tracing::warn!("Built without the redis feature, audit records will be dropped");
        Arc::new(NoopAuditSink)
    }

    /// Validate `content` for `context`.
    ///
    /// Identical content and context return the same cached verdict. When a
    /// user id is given and violations were found, an audit record is written;
    /// a failed write is logged and does not affect the verdict.
    pub async fn validate_content(
        &self,
        content: &str,
        context: &ContentContext,
        user_id: Option<&str>,
    ) -> Arc<ValidationResult> {
        if *context == ContentContext::PrivateMessage {
            return Arc::new(ValidationResult::pass_through(content));
        }

        let result = self.scan_cached(content, context);

        if let Some(user_id) = user_id {
            if !result.violations.is_empty() {
                self.log_violation(user_id, content, context, &result).await;
            }
        }

        result
    }

    /// Validate a username
    pub async fn validate_username(&self, name: &str, user_id: Option<&str>) -> Arc<ValidationResult> {
        self.validate_content(name, &ContentContext::Profile, user_id)
            .await
    }

    /// Validate a profile bio
    pub async fn validate_bio(&self, bio: &str, user_id: Option<&str>) -> Arc<ValidationResult> {
        self.validate_content(bio, &ContentContext::Profile, user_id)
            .await
    }

    /// Validate each skill as profile text, returning only the ones that fail
    pub async fn validate_skills<S: AsRef<str>>(
        &self,
        skills: &[S],
        user_id: Option<&str>,
    ) -> Vec<SkillViolation> {
        let mut failing = Vec::new();
        for skill in skills {
            let skill = skill.as_ref();
            let result = self
                .validate_content(skill, &ContentContext::Profile, user_id)
                .await;
            if !result.is_valid {
                failing.push(SkillViolation {
                    skill: skill.to_string(),
                    result,
                });
            }
        }
        failing
    }

    /// Scan without touching the cache or the audit trail
    pub fn analyze(&self, content: &str, context: &ContentContext) -> ValidationResult {
        analyze(&self.rules, content, context)
    }

    /// Rules this validator scans with
    pub fn rules(&self) -> &ModerationRules {
        &self.rules
    }

    /// Cache statistics, `None` when caching is disabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ValidationCache::stats)
    }

    /// Drop every cached verdict
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    fn scan_cached(&self, content: &str, context: &ContentContext) -> Arc<ValidationResult> {
        let Some(cache) = &self.cache else {
            return Arc::new(self.analyze(content, context));
        };

        let key = CacheKey::new(content, context);
        if let Some(hit) = cache.get(&key) {
            return hit;
        }

        let result = Arc::new(self.analyze(content, context));
        cache.put(key, Arc::clone(&result));
        result
    }

    async fn log_violation(
        &self,
        user_id: &str,
        content: &str,
        context: &ContentContext,
        result: &ValidationResult,
    ) {
        if !self.audit_config.enabled {
            return;
        }

        let record = AuditRecord::new(
            user_id,
            context.as_str(),
            content,
            result,
            self.audit_config.content_preview_chars,
        );
        match self.audit.record(&record).await {
            Ok(()) => debug!(
                "Audited {} violations for user {} in {}",
                record.violations.len(),
                user_id,
                context
            ),
            Err(e) => error!("Failed to write audit record for user {}: {}", user_id, e),
        }
    }
}

impl std::fmt::Debug for ContentValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentValidator")
            .field("cache", &self.cache)
            .field("audit_config", &self.audit_config)
            .finish_non_exhaustive()
    }
}

/// Builder for [`ContentValidator`]
#[derive(Default)]
pub struct ContentValidatorBuilder {
    rules: Option<Arc<ModerationRules>>,
    cache_config: Option<CacheConfig>,
    audit_sink: Option<Arc<dyn AuditSink>>,
    audit_config: Option<AuditConfig>,
}

impl ContentValidatorBuilder {
    /// Scan with these rules instead of the built-in set
    pub fn rules(mut self, rules: Arc<ModerationRules>) -> Self {
        self.rules = Some(rules);
        self
    }

    /// Cache settings; `enabled: false` turns caching off
    pub fn cache_config(mut self, config: CacheConfig) -> Self {
        self.cache_config = Some(config);
        self
    }

    /// Where audit records go
    pub fn audit_sink(mut self, sink: Arc<dyn AuditSink>) -> Self {
        self.audit_sink = Some(sink);
        self
    }

    /// Audit trail settings
    pub fn audit_config(mut self, config: AuditConfig) -> Self {
        self.audit_config = Some(config);
        self
    }

    /// Build the validator
    pub fn build(self) -> Result<ContentValidator> {
        let cache_config = self.cache_config.unwrap_or_default();
        let cache = if cache_config.enabled {
            Some(ValidationCache::new(&cache_config)?)
        } else {
            debug!("Verdict cache disabled");
            None
        };

        Ok(ContentValidator {
            rules: self.rules.unwrap_or_else(|| Arc::clone(&DEFAULT_RULES)),
            cache,
            audit: self.audit_sink.unwrap_or_else(|| Arc::new(NoopAuditSink)),
            audit_config: self.audit_config.unwrap_or_default(),
        })
    }
}
