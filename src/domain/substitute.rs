//! Ordered placeholder substitution over template text.
//!
//! The rules form a fixed pipeline; each stage scans only text that came
//! from the template. Text inserted by an earlier stage is never rescanned,
//! so a parameter value containing another rule's token cannot trigger a
//! second, recursive substitution.

use crate::domain::params::ValidatedParams;
use crate::domain::template::{self, TemplateSource};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Global replacement of `[PREFIX]` across the whole document.
    PrefixTokens,
    /// Global replacement of `[GOOGLE_DRIVE_FOLDER_ID]`.
    FolderIdToken,
    /// Scoped single replacement of the system-prompt field, located by
    /// field name plus sentinel value.
    SystemMessage,
    /// Single replacement of the default display-name literal.
    DisplayName,
    /// Global replacement of the default model literal; skipped when no
    /// model override is supplied.
    ModelId,
}

impl Rule {
    pub const fn name(self) -> &'static str {
        match self {
            Rule::PrefixTokens => "prefix tokens",
            Rule::FolderIdToken => "folder id token",
            Rule::SystemMessage => "system message",
            Rule::DisplayName => "display name",
            Rule::ModelId => "model id",
        }
    }

    /// Whether a zero-replacement outcome is a finding worth surfacing.
    pub const fn required(self) -> bool {
        !matches!(self, Rule::ModelId)
    }
}

/// Outcome of one pipeline stage.
#[derive(Debug, Clone, Copy)]
pub struct RuleOutcome {
    pub rule: Rule,
    pub replacements: usize,
    /// False when an optional stage was skipped entirely.
    pub applied: bool,
}

/// Per-rule replacement counts for one substitution run.
#[derive(Debug, Clone, Default)]
pub struct ReplacementReport {
    outcomes: Vec<RuleOutcome>,
}

impl ReplacementReport {
    fn record(&mut self, rule: Rule, replacements: usize) {
        self.outcomes.push(RuleOutcome { rule, replacements, applied: true });
    }

    fn skip(&mut self, rule: Rule) {
        self.outcomes.push(RuleOutcome { rule, replacements: 0, applied: false });
    }

    pub fn outcomes(&self) -> &[RuleOutcome] {
        &self.outcomes
    }

    pub fn count(&self, rule: Rule) -> usize {
        self.outcomes
            .iter()
            .find(|outcome| outcome.rule == rule)
            .map(|outcome| outcome.replacements)
            .unwrap_or(0)
    }

    /// Required rules that ran and matched nothing. A stale template or a
    /// caller error; the pipeline may still proceed unless strict mode
    /// escalates.
    pub fn missed_rules(&self) -> Vec<Rule> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.applied && outcome.rule.required() && outcome.replacements == 0)
            .map(|outcome| outcome.rule)
            .collect()
    }
}

/// A piece of the working text during substitution.
enum Segment {
    /// Carried over from the template; still eligible for matching.
    Template(String),
    /// Produced by a rule; never rescanned.
    Replaced(String),
}

impl Segment {
    fn into_string(self) -> String {
        match self {
            Segment::Template(text) | Segment::Replaced(text) => text,
        }
    }
}

/// Apply the full ordered rule set to `template`.
///
/// Pure and deterministic: two runs over identical inputs yield
/// byte-identical text. The escaped prompt is supplied by the caller so the
/// engine itself never escapes anything.
pub fn substitute(
    template: &TemplateSource,
    params: &ValidatedParams,
    escaped_prompt: &str,
) -> (String, ReplacementReport) {
    let mut segments = vec![Segment::Template(template.text.clone())];
    let mut report = ReplacementReport::default();

    report.record(
        Rule::PrefixTokens,
        replace_all(&mut segments, template::PREFIX_TOKEN, params.prefix().as_str()),
    );
    report.record(
        Rule::FolderIdToken,
        replace_all(&mut segments, template::FOLDER_ID_TOKEN, params.folder_id()),
    );

    let sentinel = TemplateSource::system_message_sentinel_pattern();
    let replacement =
        format!("\"{}\": \"{}\"", template::SYSTEM_MESSAGE_FIELD, escaped_prompt);
    report.record(Rule::SystemMessage, replace_first(&mut segments, &sentinel, &replacement));

    report.record(
        Rule::DisplayName,
        replace_first(&mut segments, template::DEFAULT_DISPLAY_NAME, params.display_name()),
    );

    match params.model_id() {
        Some(model) => {
            report.record(Rule::ModelId, replace_all(&mut segments, template::DEFAULT_MODEL_ID, model));
        }
        None => report.skip(Rule::ModelId),
    }

    let text: String = segments.into_iter().map(Segment::into_string).collect();
    (text, report)
}

/// Replace every occurrence of `pattern` in template segments. Returns the
/// replacement count.
fn replace_all(segments: &mut Vec<Segment>, pattern: &str, replacement: &str) -> usize {
    let mut replaced = 0;
    let mut next = Vec::with_capacity(segments.len());

    for segment in segments.drain(..) {
        match segment {
            Segment::Replaced(text) => next.push(Segment::Replaced(text)),
            Segment::Template(text) => {
                let mut rest = text.as_str();
                while let Some(at) = rest.find(pattern) {
                    if at > 0 {
                        next.push(Segment::Template(rest[..at].to_string()));
                    }
                    next.push(Segment::Replaced(replacement.to_string()));
                    rest = &rest[at + pattern.len()..];
                    replaced += 1;
                }
                if !rest.is_empty() {
                    next.push(Segment::Template(rest.to_string()));
                }
            }
        }
    }

    *segments = next;
    replaced
}

/// Replace the first occurrence of `pattern` in template segments, leaving
/// later occurrences untouched. Returns 0 or 1.
fn replace_first(segments: &mut Vec<Segment>, pattern: &str, replacement: &str) -> usize {
    let mut replaced = 0;
    let mut next = Vec::with_capacity(segments.len());

    for segment in segments.drain(..) {
        match segment {
            Segment::Replaced(text) => next.push(Segment::Replaced(text)),
            Segment::Template(text) => {
                if replaced == 0
                    && let Some(at) = text.find(pattern)
                {
                    if at > 0 {
                        next.push(Segment::Template(text[..at].to_string()));
                    }
                    next.push(Segment::Replaced(replacement.to_string()));
                    let rest = &text[at + pattern.len()..];
                    if !rest.is_empty() {
                        next.push(Segment::Template(rest.to_string()));
                    }
                    replaced = 1;
                } else {
                    next.push(Segment::Template(text));
                }
            }
        }
    }

    *segments = next;
    replaced
}
