//! Generation pipeline.
//!
//! Runs one cycle: resolve input, validate, decorate, combine, post-process,
//! and record the cycle in the session history.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::GenerationConfig;
use crate::domain::{
    CustomHandles, GenerateRequest, GenerationRecord, HandleSelection, PhoneInput, PhonePartition,
    Template,
};
use crate::error::{AppError, Result};
use crate::service::combinator::{self, Decoration};
use crate::service::postprocess::{postprocess, unique_count};
use crate::service::session::Session;
use crate::service::input;

/// Summary counts for a generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Valid phone numbers combined.
    pub phone_count: usize,
    /// Handles combined.
    pub handle_count: usize,
    /// Identifiers returned.
    pub total_vpas: usize,
    /// Distinct identifiers returned.
    pub unique_vpas: usize,
}

/// Output of one generation cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// When the cycle ran.
    pub generated_at: DateTime<Utc>,
    /// Summary counts.
    pub summary: GenerationSummary,
    /// Generated identifiers, post-processed.
    pub vpas: Vec<String>,
    /// Accepted phone numbers, before decoration.
    pub valid_numbers: Vec<String>,
    /// Rejected raw tokens.
    pub invalid_numbers: Vec<String>,
    /// Handles combined.
    pub handles: Vec<String>,
}

/// Service running the generation pipeline.
pub struct GeneratorService {
    limits: GenerationConfig,
}

impl GeneratorService {
    /// Create a new generator service.
    #[must_use]
    pub fn new(config: &GenerationConfig) -> Self {
        Self {
            limits: config.clone(),
        }
    }

    /// Resolve and validate phone input without generating.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` for an invalid range or too many tokens.
    pub fn validate(&self, phone_input: &PhoneInput) -> Result<PhonePartition> {
        let tokens = input::resolve(phone_input, &self.limits)?;
        Ok(PhonePartition::partition(&tokens))
    }

    /// Resolve a handle selection against the session's custom handles.
    ///
    /// # Errors
    ///
    /// Returns `BadRequest` if the selection exceeds the handle limit.
    pub fn select_handles(
        &self,
        selection: &HandleSelection,
        custom: &CustomHandles,
    ) -> Result<Vec<String>> {
        let handles = selection.resolve(custom);
        if handles.len() > self.limits.max_handles {
            return Err(AppError::BadRequest(format!(
                "too many handles: {} (max {})",
                handles.len(),
                self.limits.max_handles
            )));
        }
        Ok(handles)
    }

    /// Run one generation cycle inside a session.
    ///
    /// On success the result becomes the session's last result and one
    /// history record is appended. An empty template counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` when no phone numbers or no handles are supplied
    /// (nothing is recorded), or `BadRequest` when limits are exceeded.
    pub fn run(
        &self,
        request: &GenerateRequest,
        session: &mut Session,
    ) -> Result<Arc<GenerationResult>> {
        let tokens = input::resolve(&request.input, &self.limits)?;
        if tokens.is_empty() {
            return Err(AppError::EmptyInput("phone numbers".to_string()));
        }

        let handles = self.select_handles(&request.selection, &session.custom_handles)?;
        if handles.is_empty() {
            return Err(AppError::EmptyInput("handles".to_string()));
        }

        let partition = PhonePartition::partition(&tokens);
        let decoration = Decoration::new(request.prefix.clone(), request.suffix.clone());
        let numbers = decoration.apply_all(&partition.valid);
        let template = request
            .template
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(Template::parse);

        let generated = combinator::generate(&numbers, &handles, template.as_ref());
        let generated_count = generated.len();
        let vpas = postprocess(generated, request.dedupe, request.sort);

        let summary = GenerationSummary {
            phone_count: numbers.len(),
            handle_count: handles.len(),
            total_vpas: vpas.len(),
            unique_vpas: unique_count(&vpas),
        };

        session.history.append(GenerationRecord::now(
            summary.phone_count,
            summary.handle_count,
            summary.total_vpas,
        ));

        metrics::counter!("vpagen_generations_total").increment(1);
        metrics::counter!("vpagen_identifiers_generated_total").increment(vpas.len() as u64);
        metrics::counter!("vpagen_invalid_numbers_total")
            .increment(partition.invalid.len() as u64);

        info!(
            tokens = partition.total(),
            phones = summary.phone_count,
            invalid = partition.invalid.len(),
            handles = summary.handle_count,
            generated = generated_count,
            returned = summary.total_vpas,
            dedupe = request.dedupe,
            sort = %request.sort,
            "VPAs generated"
        );

        let result = Arc::new(GenerationResult {
            generated_at: Utc::now(),
            summary,
            vpas,
            valid_numbers: partition.valid,
            invalid_numbers: partition.invalid,
            handles,
        });

        session.last_result = Some(Arc::clone(&result));
        Ok(result)
    }
}
