//! Plain-text renderer

use std::fmt::{self, Display, Formatter};

use crate::view::{ErrorPanel, FormView, ResultPanel, ResultTone, SubmitButtonView};

const EMPTY_VALUE: &str = "(empty)";

/// Draws a view for a terminal
pub fn render_text(view: &FormView) -> String {
    view.to_string()
}

impl Display for FormView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.len()))?;

        let label_width = self.fields.iter().map(|field| field.label.len()).max().unwrap_or(0);
        for field in &self.fields {
            let value = if field.value.is_empty() { EMPTY_VALUE } else { field.value.as_str() };
            writeln!(
                f,
                "  {:<label_width$}  {:<12}  ({})",
                field.label, value, field.hint
            )?;
        }

        writeln!(f)?;
        writeln!(f, "{}", self.submit)?;

        if !self.warnings.is_empty() {
            writeln!(f)?;
            writeln!(f, "Warnings:")?;
            for warning in &self.warnings {
                writeln!(f, "  ! {warning}")?;
            }
        }

        if let Some(error) = &self.error {
            writeln!(f)?;
            write!(f, "{error}")?;
        }

        if let Some(result) = &self.result {
            writeln!(f)?;
            write!(f, "{result}")?;
        }

        Ok(())
    }
}

impl Display for SubmitButtonView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.busy {
            write!(f, "[ * {} ]", self.label)?;
        } else {
            write!(f, "[ {} ]", self.label)?;
        }
        if self.disabled {
            write!(f, " (disabled)")?;
        }
        Ok(())
    }
}

impl Display for ErrorPanel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "+-- {} --", self.heading)?;
        writeln!(f, "| {}", self.message)
    }
}

impl Display for ResultPanel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let tag = match self.tone {
            ResultTone::Fraud => "FRAUD",
            ResultTone::NoFraud => "NO FRAUD",
        };
        writeln!(f, "+-- {} [{tag}] --", self.heading)?;
        writeln!(f, "| Cluster: {}", self.cluster)?;
        writeln!(f, "| Fraud Probability: {}", self.probability)?;
        writeln!(f, "| Conclusion: {}", self.conclusion)?;
        writeln!(f, "| Risk Level: {} - {}", self.risk_level, self.recommended_action)?;

        if let Some(factors) = &self.risk_factors {
            writeln!(f, "| {}", crate::view::RISK_FACTORS_HEADING)?;
            for factor in factors {
                writeln!(f, "|   - {factor}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{FieldView, RESULT_HEADING, FRAUD_CONCLUSION, NO_FRAUD_CONCLUSION};
    use domain_claims::{ClaimField, RiskLevel};

    fn panel(risk_factors: Option<Vec<String>>) -> ResultPanel {
        ResultPanel {
            tone: ResultTone::Fraud,
            heading: RESULT_HEADING,
            cluster: "2 - High-risk cluster".to_string(),
            probability: "91.00%".to_string(),
            conclusion: FRAUD_CONCLUSION,
            risk_level: RiskLevel::High,
            recommended_action: "Immediate investigation required".to_string(),
            risk_factors,
        }
    }

    #[test]
    fn test_result_panel_lines() {
        let text = panel(Some(vec!["Unusual claim timing".to_string()])).to_string();
        assert_eq!(
            text,
            "+-- Fraud Detection Result [FRAUD] --\n\
             | Cluster: 2 - High-risk cluster\n\
             | Fraud Probability: 91.00%\n\
             | Conclusion: Potential Fraud Detected\n\
             | Risk Level: High - Immediate investigation required\n\
             | Key Risk Factors:\n\
             |   - Unusual claim timing\n"
        );
    }

    #[test]
    fn test_no_factor_section_without_factors() {
        let mut no_fraud = panel(None);
        no_fraud.tone = ResultTone::NoFraud;
        no_fraud.conclusion = NO_FRAUD_CONCLUSION;

        let text = no_fraud.to_string();
        assert!(text.contains("[NO FRAUD]"));
        assert!(!text.contains("Key Risk Factors"));
    }

    #[test]
    fn test_busy_button() {
        let button = SubmitButtonView { label: "Processing...", busy: true, disabled: true };
        assert_eq!(button.to_string(), "[ * Processing... ] (disabled)");
    }

    #[test]
    fn test_form_lists_empty_fields() {
        let view = FormView {
            title: "T",
            fields: vec![FieldView {
                field: ClaimField::Age,
                label: "Age",
                value: String::new(),
                hint: "integer, 18 to 100".to_string(),
            }],
            submit: SubmitButtonView { label: "Check for Fraud", busy: false, disabled: false },
            warnings: vec![],
            error: Some(ErrorPanel { heading: "Error", message: "Model unavailable".to_string() }),
            result: None,
        };

        let text = render_text(&view);
        assert!(text.contains("Age  (empty)"));
        assert!(text.contains("[ Check for Fraud ]\n"));
        assert!(text.contains("+-- Error --\n| Model unavailable\n"));
    }
}
