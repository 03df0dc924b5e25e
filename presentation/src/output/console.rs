//! Console output formatter for classification results

use colored::{ColoredString, Colorize};
use quadrant_application::ClassifyTaskOutput;
use quadrant_domain::{Quadrant, QuadrantFlags, RuleSet, TaskBoard};
use serde::Serialize;

/// JSON view of a classification
#[derive(Serialize)]
struct ClassificationView<'a> {
    title: &'a str,
    quadrant: Quadrant,
    confidence: u8,
    reasoning: &'a str,
    urgent: bool,
    important: bool,
    scores: &'a quadrant_domain::QuadrantScores,
}

impl<'a> From<&'a ClassifyTaskOutput> for ClassificationView<'a> {
    fn from(output: &'a ClassifyTaskOutput) -> Self {
        Self {
            title: &output.title,
            quadrant: output.result.quadrant,
            confidence: output.result.confidence,
            reasoning: &output.result.reasoning,
            urgent: output.flags.urgent,
            important: output.flags.important,
            scores: &output.scores,
        }
    }
}

/// Formats classification results, boards and rule sets for the console
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Full result: quadrant, confidence, reasoning, flags and scores
    pub fn format(output: &ClassifyTaskOutput) -> String {
        let result = &output.result;
        let mut text = String::new();

        text.push_str(&format!("{} {}\n", "Task:".cyan().bold(), output.title));
        text.push_str(&format!(
            "{} {}  {}\n",
            "Quadrant:".cyan().bold(),
            Self::quadrant_label(result.quadrant),
            format!("confidence {}%", result.confidence).dimmed()
        ));
        text.push_str(&format!(
            "{} {}\n",
            "Reasoning:".cyan().bold(),
            result.reasoning
        ));
        text.push_str(&format!(
            "{} {}\n",
            "Flags:".cyan().bold(),
            Self::flags_text(output.flags)
        ));

        let scores = output
            .scores
            .iter()
            .map(|(q, score)| format!("{}={}", q, score))
            .collect::<Vec<_>>()
            .join("  ");
        text.push_str(&format!("{} {}\n", "Scores:".cyan().bold(), scores.dimmed()));

        text
    }

    /// One line: `A 95% 決済バグ修正`
    pub fn format_plain(output: &ClassifyTaskOutput) -> String {
        format!(
            "{} {:>3}% {}",
            Self::quadrant_letter(output.result.quadrant),
            output.result.confidence,
            output.title
        )
    }

    /// Format many results as a JSON array
    pub fn format_json(outputs: &[ClassifyTaskOutput]) -> String {
        let views: Vec<ClassificationView<'_>> = outputs.iter().map(Into::into).collect();
        serde_json::to_string_pretty(&views).unwrap_or_else(|_| "[]".to_string())
    }

    /// Flags of a quadrant
    pub fn format_flags(quadrant: Quadrant) -> String {
        format!(
            "{}  {}",
            Self::quadrant_label(quadrant),
            Self::flags_text(quadrant.flags())
        )
    }

    pub fn format_flags_json(quadrant: Quadrant) -> String {
        serde_json::json!({
            "quadrant": quadrant,
            "urgent": quadrant.flags().urgent,
            "important": quadrant.flags().important,
        })
        .to_string()
    }

    /// The four quadrants with their tasks
    pub fn format_board(board: &TaskBoard) -> String {
        let mut text = Self::header("Eisenhower Board");
        text.push('\n');

        for quadrant in Quadrant::ALL {
            let tasks = board.tasks(quadrant);
            text.push_str(&format!(
                "\n{} {}\n",
                Self::quadrant_label(quadrant),
                format!("({})", tasks.len()).dimmed()
            ));
            if tasks.is_empty() {
                text.push_str(&format!("  {}\n", "-".dimmed()));
            }
            for task in tasks {
                let stored = if task.quadrant.is_some() { "" } else { " *" };
                text.push_str(&format!("  * {}{}\n", task.title, stored.dimmed()));
            }
        }

        text.push_str(&format!(
            "\n{}\n",
            "* placed by urgent/important flags".dimmed()
        ));
        text
    }

    pub fn format_board_json(board: &TaskBoard) -> String {
        serde_json::to_string_pretty(board).unwrap_or_else(|_| "{}".to_string())
    }

    /// Keyword rules, grouped by quadrant
    pub fn format_rules(rules: &RuleSet) -> String {
        let mut text = Self::header("Keyword Rules");
        text.push('\n');

        for rule in rules.rules() {
            text.push_str(&format!(
                "\n{} {}\n",
                Self::quadrant_label(rule.quadrant),
                format!("- {}", rule.description).dimmed()
            ));
            for group in &rule.categories {
                let name = group.category.as_deref().unwrap_or("keywords");
                text.push_str(&format!(
                    "  {} {}: {}\n",
                    format!("[{}]", group.weight).yellow(),
                    name.bold(),
                    group.keywords.join(", ")
                ));
            }
        }

        text
    }

    pub fn format_rules_json(rules: &RuleSet) -> String {
        let rules: Vec<_> = rules.rules().collect();
        serde_json::to_string_pretty(&rules).unwrap_or_else(|_| "[]".to_string())
    }

    fn quadrant_letter(quadrant: Quadrant) -> ColoredString {
        let letter = quadrant.as_str().bold();
        match quadrant {
            Quadrant::A => letter.red(),
            Quadrant::B => letter.green(),
            Quadrant::C => letter.yellow(),
            Quadrant::D => letter.dimmed(),
        }
    }

    fn quadrant_label(quadrant: Quadrant) -> String {
        format!("{}: {}", Self::quadrant_letter(quadrant), quadrant.title().bold())
    }

    fn flags_text(flags: QuadrantFlags) -> String {
        format!("urgent={} important={}", flags.urgent, flags.important)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadrant_application::{ClassifyTaskInput, ClassifyTaskUseCase};
    use quadrant_domain::QuadrantClassifier;
    use std::sync::Arc;

    fn output(title: &str) -> ClassifyTaskOutput {
        let (result, scores) = QuadrantClassifier::standard().classify_with_scores(title);
        ClassifyTaskOutput {
            title: title.to_string(),
            flags: result.flags(),
            scores,
            result,
        }
    }

    #[test]
    fn test_plain_line() {
        colored::control::set_override(false);
        assert_eq!(
            ConsoleFormatter::format_plain(&output("決済バグ修正")),
            "A  95% 決済バグ修正"
        );
    }

    #[test]
    fn test_full_contains_reasoning_and_scores() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format(&output("A/Bテスト"));
        assert!(text.contains("B: Validate / Grow"));
        assert!(text.contains("confidence 80%"));
        assert!(text.contains("urgent=false important=true"));
        assert!(text.contains("B=4"));
        assert!(text.contains("C=1"));
    }

    #[test]
    fn test_json_array() {
        let json = ConsoleFormatter::format_json(&[output("決済バグ修正"), output("ランチ")]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["quadrant"], "A");
        assert_eq!(value[0]["urgent"], true);
        assert_eq!(value[0]["scores"]["A"], 8);
        assert_eq!(value[1]["quadrant"], "D");
        assert_eq!(value[1]["confidence"], 30);
    }

    #[test]
    fn test_flags_json() {
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_flags_json(Quadrant::C)).unwrap();
        assert_eq!(value["urgent"], true);
        assert_eq!(value["important"], false);
    }

    #[test]
    fn test_rules_listing_includes_every_quadrant() {
        colored::control::set_override(false);
        let text = ConsoleFormatter::format_rules(&RuleSet::standard());
        for quadrant in Quadrant::ALL {
            assert!(text.contains(quadrant.title()));
        }
        assert!(text.contains("[3] blocker"));
    }

    #[tokio::test]
    async fn test_formats_use_case_output() {
        let use_case = ClassifyTaskUseCase::new(Arc::new(QuadrantClassifier::standard()));
        let out = use_case
            .execute(ClassifyTaskInput::new("README 整理"))
            .await
            .unwrap();
        let json = ConsoleFormatter::format_json(std::slice::from_ref(&out));
        assert!(json.contains("\"C\""));
    }
}
