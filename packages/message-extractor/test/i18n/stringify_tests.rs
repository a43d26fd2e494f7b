//! Message Builder Tests

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::{el, extract, humanize_messages, parse, text};
    use i18n_message_extractor::expression_parser::SyntaxChecker;
    use i18n_message_extractor::i18n::{partition, stringify, stringify_nodes, I18nErrorKind};
    use indexmap::IndexSet;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn content(html: &str) -> String {
        let (content, errors) = stringify_nodes(&parse(html), &SyntaxChecker::new());
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        content
    }

    #[rstest]
    #[case::plain_text("Hello world", "Hello world")]
    #[case::element("Hello <b>world</b>", "Hello <ph name=\"e0\">world</ph>")]
    #[case::self_closing("<br/>", "<ph name=\"e0\"/>")]
    #[case::void_element("a<br>b", "a<ph name=\"e0\"/>b")]
    #[case::wrapped_interpolation("Hi {{name}}!", "<ph name=\"t0\">Hi <ph name=\"i1\"/>!</ph>")]
    #[case::sole_child_text(
        "<b>{{a}} and {{b}}</b>",
        "<ph name=\"e0\"><ph name=\"i1\"/> and <ph name=\"i2\"/></ph>"
    )]
    #[case::text_among_siblings(
        "<b>x<!-- c -->{{a}}</b>",
        "<ph name=\"e0\">x<ph name=\"t1\"><ph name=\"i2\"/></ph></ph>"
    )]
    #[case::comments_do_not_count_as_siblings(
        "<b><!-- note -->{{a}}</b>",
        "<ph name=\"e0\"><ph name=\"i1\"/></ph>"
    )]
    #[case::nested_elements(
        "<a><b>x</b><i>y</i></a>",
        "<ph name=\"e0\"><ph name=\"e1\">x</ph><ph name=\"e2\">y</ph></ph>"
    )]
    #[case::comments_are_dropped("a<!-- c -->b", "ab")]
    #[case::custom_placeholder_names(
        "{{count // i18n(ph=\"n\")}} of {{total // i18n(ph=\"n\")}}",
        "<ph name=\"t0\"><ph name=\"n\"/> of <ph name=\"n_1\"/></ph>"
    )]
    #[case::custom_name_taken_by_an_element(
        "<b>x</b>{{a // i18n(ph=\"e0\")}}",
        "<ph name=\"e0\">x</ph><ph name=\"t1\"><ph name=\"e0_1\"/></ph>"
    )]
    #[case::element_name_taken_by_a_custom_name(
        "{{a // i18n(ph=\"e2\")}}<b>x</b>",
        "<ph name=\"t0\"><ph name=\"e2\"/></ph><ph name=\"e2_1\">x</ph>"
    )]
    fn should_stringify(#[case] html: &str, #[case] expected: &str) {
        assert_eq!(content(html), expected);
    }

    #[test]
    fn should_number_placeholders_left_to_right_inside_the_marked_element() {
        let result = extract("<b i18n><a>A{{i}}</a></b>");
        assert_eq!(
            humanize_messages(&result),
            vec![[
                "<ph name=\"e0\">A<ph name=\"i1\"/></ph>".to_string(),
                String::new(),
                String::new()
            ]]
        );
    }

    #[test]
    fn should_not_wrap_the_only_text_of_the_marked_element() {
        let result = extract("<p i18n>Hi {{name}}</p><div i18n><p>Hi {{name}}</p></div>");
        assert_eq!(
            humanize_messages(&result),
            vec![
                ["Hi <ph name=\"i0\"/>".to_string(), String::new(), String::new()],
                [
                    "<ph name=\"e0\">Hi <ph name=\"i1\"/></ph>".to_string(),
                    String::new(),
                    String::new()
                ],
            ]
        );

        let result = extract("<p i18n><!-- note -->Hi {{name}}</p><p i18n>Hi {{name}}<br></p>");
        assert_eq!(result.messages[0].content, "Hi <ph name=\"i0\"/>");
        assert_eq!(
            result.messages[1].content,
            "<ph name=\"t0\">Hi <ph name=\"i1\"/></ph><ph name=\"e2\"/>"
        );
    }

    #[test]
    fn should_keep_placeholder_names_unique_within_a_message() {
        let result = extract("<p i18n><b>x</b>{{a // i18n(ph=\"e0\")}}</p>");
        assert!(result.errors.is_empty());
        assert_eq!(
            result.messages[0].content,
            "<ph name=\"e0\">x</ph><ph name=\"t1\"><ph name=\"e0_1\"/></ph>"
        );
    }

    #[test]
    fn should_be_deterministic() {
        let html = concat!(
            "<p i18n=\"m|d\">",
            "Hi <b>{{user.name}}</b>, you have {{count}} <i>new</i> items",
            "</p>"
        );
        let nodes = parse(html);
        let (parts, _) = partition(&nodes, &IndexSet::new());
        let checker = SyntaxChecker::new();

        let (first, _) = stringify(&parts[0], &checker);
        let (second, _) = stringify(&parts[0], &checker);
        assert_eq!(first, second);
        assert_eq!(
            first.content,
            concat!(
                "Hi <ph name=\"e0\"><ph name=\"i1\"/></ph>",
                "<ph name=\"t2\">, you have <ph name=\"i3\"/> </ph>",
                "<ph name=\"e4\">new</ph> items"
            )
        );
        assert_eq!(first.meaning, "m");
        assert_eq!(first.description, "d");

        let reparsed = parse(html);
        let (parts, _) = partition(&reparsed, &IndexSet::new());
        assert_eq!(stringify(&parts[0], &checker).0.content, first.content);
    }

    #[test]
    fn should_report_expression_errors_and_keep_the_content() {
        let (content, errors) = stringify_nodes(&[text("{{a + )}}")], &SyntaxChecker::new());
        assert_eq!(content, "<ph name=\"t0\"><ph name=\"i1\"/></ph>");
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0].kind, I18nErrorKind::ExpressionSyntax(_)));
    }

    #[test]
    fn should_restart_the_counter_per_message() {
        let nodes = vec![
            el("p", &[("i18n", "")], vec![el("b", &[], vec![])]),
            el("p", &[("i18n", "")], vec![el("i", &[], vec![])]),
        ];
        let (parts, _) = partition(&nodes, &IndexSet::new());
        let checker = SyntaxChecker::new();
        assert_eq!(stringify(&parts[0], &checker).0.content, "<ph name=\"e0\"/>");
        assert_eq!(stringify(&parts[1], &checker).0.content, "<ph name=\"e0\"/>");
    }
}
