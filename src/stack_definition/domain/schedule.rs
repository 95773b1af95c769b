use crate::shared::error::SynthError;
use crate::shared::Result;

/// Monthly on the 1st at 00:00
pub const MONTHLY_SCHEDULE: &str = "0 0 1 * *";

/// Characters allowed inside a single cron field
fn is_cron_field_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '*' | ',' | '-' | '/' | '?' | '#')
}

/// Validated pipeline schedule expression
///
/// Accepts a bare five-field cron string (`0 0 1 * *`) or the wrapped
/// six-field `cron(...)` form; image pipelines do not take `rate(...)`.
/// The expression is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleExpression(String);

impl ScheduleExpression {
    pub fn new(expression: impl Into<String>) -> Result<Self> {
        let expression = expression.into();
        let trimmed = expression.trim();

        if trimmed.is_empty() {
            return Err(invalid(&expression, "Schedule expression cannot be empty"));
        }

        if trimmed.starts_with("rate(") {
            return Err(invalid(
                &expression,
                "Image pipelines only accept cron schedules, not rate(...)",
            ));
        }

        if let Some(inner) = wrapped(trimmed, "cron(") {
            check_fields(&expression, inner, 6)?;
        } else {
            check_fields(&expression, trimmed, 5)?;
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn monthly() -> Self {
        Self(MONTHLY_SCHEDULE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ScheduleExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn wrapped<'a>(expression: &'a str, prefix: &str) -> Option<&'a str> {
    expression.strip_prefix(prefix)?.strip_suffix(')')
}

fn check_fields(expression: &str, body: &str, expected: usize) -> Result<()> {
    let fields: Vec<&str> = body.split_whitespace().collect();
    if fields.len() != expected {
        return Err(invalid(
            expression,
            &format!("Expected {} fields, found {}", expected, fields.len()),
        ));
    }
    if let Some(field) = fields.iter().find(|f| !f.chars().all(is_cron_field_char)) {
        return Err(invalid(
            expression,
            &format!("Field '{}' contains invalid characters", field),
        ));
    }
    Ok(())
}

fn invalid(expression: &str, reason: &str) -> anyhow::Error {
    SynthError::InvalidSchedule {
        expression: expression.to_string(),
        reason: reason.to_string(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_schedule() {
        assert_eq!(ScheduleExpression::monthly().as_str(), "0 0 1 * *");
        assert_eq!(
            ScheduleExpression::new(MONTHLY_SCHEDULE).unwrap(),
            ScheduleExpression::monthly()
        );
    }

    #[test]
    fn test_wrapped_forms() {
        assert!(ScheduleExpression::new("cron(0 0 1 * ? *)").is_ok());
        assert!(ScheduleExpression::new("cron(0 12 ? * MON-FRI *)").is_ok());
    }

    #[test]
    fn test_expression_is_trimmed() {
        let schedule = ScheduleExpression::new("  0 6 * * MON  ").unwrap();
        assert_eq!(schedule.as_str(), "0 6 * * MON");
    }

    #[test]
    fn test_empty_expression() {
        let err = ScheduleExpression::new("  ").unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_wrong_field_count() {
        let err = ScheduleExpression::new("0 0 1 *").unwrap_err();
        assert!(err.to_string().contains("Expected 5 fields, found 4"));

        let err = ScheduleExpression::new("cron(0 0 1 * *)").unwrap_err();
        assert!(err.to_string().contains("Expected 6 fields, found 5"));
    }

    #[test]
    fn test_invalid_characters() {
        let err = ScheduleExpression::new("0 0 1 * $").unwrap_err();
        assert!(err.to_string().contains("invalid characters"));
    }

    #[test]
    fn test_rate_expressions_are_rejected() {
        for expression in ["rate(7 days)", "rate(1 hour)", "  rate(30 minutes) "] {
            let err = ScheduleExpression::new(expression).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<SynthError>(),
                Some(SynthError::InvalidSchedule { .. })
            ));
            assert!(err.to_string().contains("only accept cron"));
        }
    }
}
