#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::config::{OutcomeValue, StepConfig};
    use crate::outcome::Outcome;
    use crate::shared::Secret;

    fn base_config() -> StepConfig {
        StepConfig {
            webhook_url: Secret::new("https://example.com/webhook"),
            card_style: OutcomeValue::new("good").with_error("attention"),
            card_headline: OutcomeValue::new("Build succeeded").with_error("Build failed"),
            ..Default::default()
        }
    }

    fn main_items(card: &AdaptiveCard) -> &[Element] {
        match &card.body[1] {
            Element::Container(container) => &container.items,
            other => panic!("Expected main container, got {:?}", other),
        }
    }

    fn banner(card: &AdaptiveCard) -> (&Container, &TextBlock) {
        match &card.body[0] {
            Element::Container(container) => match &container.items[0] {
                Element::TextBlock(headline) => (container, headline),
                other => panic!("Expected headline, got {:?}", other),
            },
            other => panic!("Expected banner container, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_content_yields_banner_only() {
        let composed = compose_card(Outcome::Succeeded, &base_config());

        assert_eq!(composed.card.body.len(), 1);
        assert!(composed.diagnostics.is_empty());

        let (container, headline) = banner(&composed.card);
        assert_eq!(container.style, "good");
        assert_eq!(container.spacing, "None");
        assert!(container.separator);
        assert_eq!(headline.text, "Build succeeded");
        assert_eq!(headline.color, "good");
    }

    #[test]
    fn test_banner_present_with_empty_headline() {
        let composed = compose_card(Outcome::Succeeded, &StepConfig::default());

        assert_eq!(composed.card.body.len(), 1);
        let (_, headline) = banner(&composed.card);
        assert_eq!(headline.text, "");
    }

    #[test]
    fn test_banner_uses_error_values_on_failure() {
        let composed = compose_card(Outcome::Failed, &base_config());

        let (container, headline) = banner(&composed.card);
        assert_eq!(container.style, "attention");
        assert_eq!(headline.text, "Build failed");
        assert_eq!(headline.color, "attention");
    }

    #[test]
    fn test_banner_falls_back_when_error_values_missing() {
        let config = StepConfig {
            card_style: OutcomeValue::new("good"),
            card_headline: OutcomeValue::new("Done"),
            ..base_config()
        };
        let composed = compose_card(Outcome::Failed, &config);

        let (container, headline) = banner(&composed.card);
        assert_eq!(container.style, "good");
        assert_eq!(headline.text, "Done");
    }

    #[test]
    fn test_facts_keep_order() {
        let config = StepConfig {
            fields: "Branch|main\nCommit|abcd".to_string(),
            ..base_config()
        };
        let composed = compose_card(Outcome::Succeeded, &config);

        assert_eq!(composed.card.body.len(), 2);
        let items = main_items(&composed.card);
        assert_eq!(items.len(), 1);
        match &items[0] {
            Element::FactSet(facts) => {
                assert_eq!(
                    facts.facts,
                    vec![Fact::new("Branch", "main"), Fact::new("Commit", "abcd")]
                );
            }
            other => panic!("Expected fact set, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_fact_is_reported_and_skipped() {
        let config = StepConfig {
            fields: "Branch|main\nBranch|dev\nCommit|abcd".to_string(),
            ..base_config()
        };
        let composed = compose_card(Outcome::Succeeded, &config);

        match &main_items(&composed.card)[0] {
            Element::FactSet(facts) => assert_eq!(facts.facts.len(), 2),
            other => panic!("Expected fact set, got {:?}", other),
        }
        assert_eq!(composed.diagnostics.len(), 1);
        assert_eq!(composed.diagnostics[0].section, Section::Facts);
        assert_eq!(composed.diagnostics[0].label, "Branch");
    }

    #[test]
    fn test_main_section_order() {
        let config = StepConfig {
            title: OutcomeValue::new("Deploy").with_error("Deploy broke"),
            author_name: "Jamie".to_string(),
            subject: "Fix flaky test".to_string(),
            fields: "Branch|main".to_string(),
            ..base_config()
        };
        let composed = compose_card(Outcome::Failed, &config);

        let items = main_items(&composed.card);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0], Element::from(TextBlock::new("Deploy broke", false)));
        assert_eq!(items[1], Element::from(TextBlock::new("Jamie", false)));
        assert_eq!(items[2], Element::from(TextBlock::new("Fix flaky test", true)));
        assert!(matches!(items[3], Element::FactSet(_)));
    }

    #[test]
    fn test_author_and_subject_ignore_outcome() {
        let config = StepConfig {
            author_name: "Jamie".to_string(),
            ..base_config()
        };

        for outcome in [Outcome::Succeeded, Outcome::Failed] {
            let composed = compose_card(outcome, &config);
            assert_eq!(
                main_items(&composed.card),
                &[Element::from(TextBlock::new("Jamie", false))]
            );
        }
    }

    #[test]
    fn test_images_selected_by_outcome() {
        let config = StepConfig {
            images: OutcomeValue::new("ok|https://example.com/ok.png")
                .with_error("broken|https://example.com/broken.png"),
            ..base_config()
        };

        let composed = compose_card(Outcome::Failed, &config);
        assert_eq!(composed.card.body.len(), 2);
        match &composed.card.body[1] {
            Element::Container(container) => {
                assert_eq!(
                    container.items,
                    vec![Element::from(Image::large("https://example.com/broken.png"))]
                );
            }
            other => panic!("Expected image container, got {:?}", other),
        }
    }

    #[test]
    fn test_non_http_links_are_kept() {
        let config = StepConfig {
            images: OutcomeValue::new("dot|data:image/png;base64,iVBORw0KGgo=\nshot|screenshot.png"),
            buttons: OutcomeValue::new(
                "Mail|mailto:team@example.com\nBuild|ci.example.com/builds/42",
            ),
            ..base_config()
        };
        let composed = compose_card(Outcome::Succeeded, &config);

        assert!(composed.diagnostics.is_empty());
        assert_eq!(composed.card.body.len(), 3);
        match &composed.card.body[1] {
            Element::Container(container) => {
                assert_eq!(
                    container.items,
                    vec![
                        Element::from(Image::large("data:image/png;base64,iVBORw0KGgo=")),
                        Element::from(Image::large("screenshot.png")),
                    ]
                );
            }
            other => panic!("Expected image container, got {:?}", other),
        }
        match &composed.card.body[2] {
            Element::ActionSet(set) => {
                assert_eq!(
                    set.actions,
                    vec![
                        Action::open_url("Mail", "mailto:team@example.com").unwrap(),
                        Action::open_url("Build", "ci.example.com/builds/42").unwrap(),
                    ]
                );
            }
            other => panic!("Expected action set, got {:?}", other),
        }
    }

    #[test]
    fn test_buttons_become_open_url_actions() {
        let config = StepConfig {
            buttons: OutcomeValue::new("Build|https://ci.example.com/1\nbroken\nRepo|https://git.example.com"),
            ..base_config()
        };
        let composed = compose_card(Outcome::Failed, &config);

        assert_eq!(composed.card.body.len(), 2);
        match &composed.card.body[1] {
            Element::ActionSet(set) => {
                assert_eq!(
                    set.actions,
                    vec![
                        Action::open_url("Build", "https://ci.example.com/1").unwrap(),
                        Action::open_url("Repo", "https://git.example.com").unwrap(),
                    ]
                );
            }
            other => panic!("Expected action set, got {:?}", other),
        }
    }

    #[test]
    fn test_section_order_with_everything() {
        let config = StepConfig {
            title: OutcomeValue::new("Nightly"),
            fields: "Branch|main".to_string(),
            images: OutcomeValue::new("a|https://example.com/a.png"),
            buttons: OutcomeValue::new("Open|https://ci.example.com"),
            ..base_config()
        };
        let composed = compose_card(Outcome::Succeeded, &config);

        let kinds: Vec<&str> = composed
            .card
            .body
            .iter()
            .map(|e| match e {
                Element::Container(_) => "container",
                Element::ActionSet(_) => "actions",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["container", "container", "container", "actions"]);
    }

    #[test]
    fn test_serialized_card_round_trip() {
        let config = StepConfig {
            title: OutcomeValue::new("Nightly"),
            author_name: "Jamie".to_string(),
            subject: "Bump deps".to_string(),
            fields: "Branch|main\nCommit|abcd".to_string(),
            images: OutcomeValue::new("a|https://example.com/a.png"),
            buttons: OutcomeValue::new("Open|https://ci.example.com/"),
            ..base_config()
        };
        let composed = compose_card(Outcome::Succeeded, &config);

        let json = serde_json::to_string(&composed.card).unwrap();
        let parsed: AdaptiveCard = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, composed.card);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["body"][0]["style"], "good");
        assert_eq!(value["body"][0]["items"][0]["text"], "Build succeeded");
        assert_eq!(value["body"][1]["items"][3]["facts"][1]["title"], "Commit");
        assert_eq!(value["body"][2]["items"][0]["url"], "https://example.com/a.png");
        assert_eq!(value["body"][3]["actions"][0]["url"], "https://ci.example.com/");
    }
}
