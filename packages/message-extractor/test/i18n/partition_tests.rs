//! Partitioner Tests

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::{comment, el, text};
    use i18n_message_extractor::i18n::{partition, I18nErrorKind, Part};
    use i18n_message_extractor::ml_parser::Node;
    use indexmap::IndexSet;
    use pretty_assertions::assert_eq;

    fn no_implicit_tags() -> IndexSet<String> {
        IndexSet::new()
    }

    fn error_kinds(errors: &[i18n_message_extractor::I18nError]) -> Vec<I18nErrorKind> {
        errors.iter().map(|e| e.kind.clone()).collect()
    }

    /// `(translatable, has_root, member count)` per part.
    fn shape(parts: &[Part<'_>]) -> Vec<(bool, bool, usize)> {
        parts
            .iter()
            .map(|p| (p.translatable, p.root.is_some(), p.nodes.len()))
            .collect()
    }

    fn reference_example() -> Vec<Node> {
        vec![
            el("a", &[], vec![text("A")]),
            el("b", &[("i18n", "")], vec![text("B")]),
            comment("i18n"),
            el("c", &[], vec![text("C")]),
            text("D"),
            comment("/i18n"),
            text("E"),
        ]
    }

    #[test]
    fn should_partition_the_reference_example() {
        let nodes = reference_example();
        let (parts, errors) = partition(&nodes, &no_implicit_tags());

        assert!(errors.is_empty());
        assert_eq!(
            shape(&parts),
            vec![(false, true, 1), (true, true, 1), (true, false, 2), (false, true, 1)]
        );
        assert!(std::ptr::eq(parts[0].root.unwrap(), &nodes[0]));
        assert!(std::ptr::eq(parts[1].root.unwrap(), &nodes[1]));
        assert!(std::ptr::eq(&parts[2].nodes[0], &nodes[3]));
        assert!(std::ptr::eq(&parts[2].nodes[1], &nodes[4]));
        assert!(std::ptr::eq(parts[3].root.unwrap(), &nodes[6]));
    }

    #[test]
    fn should_reproduce_the_input_without_marker_comments() {
        let nodes = vec![
            text("lead"),
            comment("just a note"),
            comment("i18n: block"),
            el("span", &[], vec![]),
            comment("/i18n"),
            el("p", &[("i18n", "m|d")], vec![]),
            comment("/i18n"),
            text("tail"),
            comment("i18n"),
            text("open"),
        ];
        let (parts, _) = partition(&nodes, &no_implicit_tags());

        let regrouped: Vec<*const Node> = parts
            .iter()
            .flat_map(|p| p.nodes.iter().map(|n| n as *const Node))
            .collect();
        let expected: Vec<*const Node> = [0, 1, 3, 5, 7, 9]
            .iter()
            .map(|&i| &nodes[i] as *const Node)
            .collect();
        assert_eq!(regrouped, expected);
    }

    #[test]
    fn should_capture_unclosed_blocks_and_report_once() {
        let nodes = vec![text("before"), comment("i18n"), text("a"), el("b", &[], vec![])];
        let (parts, errors) = partition(&nodes, &no_implicit_tags());

        assert_eq!(shape(&parts), vec![(false, true, 1), (true, false, 2)]);
        assert_eq!(error_kinds(&errors), vec![I18nErrorKind::UnmatchedMarker]);
        assert_eq!(errors[0].msg(), "Missing closing 'i18n' comment.");
    }

    #[test]
    fn should_report_stray_closing_comments() {
        let nodes = vec![text("a"), comment("/i18n"), text("b")];
        let (parts, errors) = partition(&nodes, &no_implicit_tags());

        assert_eq!(shape(&parts), vec![(false, true, 1), (false, true, 1)]);
        assert_eq!(error_kinds(&errors), vec![I18nErrorKind::UnexpectedClosingMarker]);
    }

    #[test]
    fn should_let_the_enclosing_block_win_over_an_element_marker() {
        let nodes = vec![
            comment("i18n"),
            el("p", &[("i18n", "inner")], vec![text("x")]),
            comment("/i18n"),
        ];
        let (parts, errors) = partition(&nodes, &no_implicit_tags());

        assert!(errors.is_empty());
        assert_eq!(shape(&parts), vec![(true, false, 1)]);
        assert_eq!(parts[0].meta.meaning, "");
    }

    #[test]
    fn should_report_nested_opening_comments() {
        let nodes = vec![
            comment("i18n"),
            text("a"),
            comment("i18n"),
            text("b"),
            comment("/i18n"),
            text("c"),
            comment("/i18n"),
        ];
        let (parts, errors) = partition(&nodes, &no_implicit_tags());

        assert_eq!(shape(&parts), vec![(true, false, 3), (false, true, 1)]);
        assert!(matches!(errors[0].kind, I18nErrorKind::Marker(_)));
        assert_eq!(errors[1].kind, I18nErrorKind::UnexpectedClosingMarker);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn should_keep_empty_blocks() {
        let nodes = vec![comment("i18n"), comment("/i18n")];
        let (parts, errors) = partition(&nodes, &no_implicit_tags());

        assert!(errors.is_empty());
        assert_eq!(shape(&parts), vec![(true, false, 0)]);
    }

    #[test]
    fn should_mark_implicit_tags() {
        let nodes = vec![el("h1", &[], vec![text("Title")]), el("div", &[], vec![])];
        let implicit: IndexSet<String> = ["h1".to_string()].into_iter().collect();
        let (parts, _) = partition(&nodes, &implicit);

        assert_eq!(shape(&parts), vec![(true, true, 1), (false, true, 1)]);
    }

    #[test]
    fn should_read_meaning_and_description_from_the_marker() {
        let nodes = vec![el("p", &[("i18n", "greeting|on the login page")], vec![])];
        let (parts, _) = partition(&nodes, &no_implicit_tags());

        assert_eq!(parts[0].meta.meaning, "greeting");
        assert_eq!(parts[0].meta.description, "on the login page");
    }

    #[test]
    fn should_reject_markers_on_void_elements() {
        let nodes = vec![el("img", &[("i18n", "")], vec![])];
        let (parts, errors) = partition(&nodes, &no_implicit_tags());

        assert_eq!(shape(&parts), vec![(false, true, 1)]);
        assert!(matches!(errors[0].kind, I18nErrorKind::Marker(_)));
    }

    #[test]
    fn should_reject_malformed_meta_but_keep_implicit_marking() {
        let nodes = vec![el("p", &[("i18n", "a|b|c")], vec![])];

        let (parts, errors) = partition(&nodes, &no_implicit_tags());
        assert_eq!(shape(&parts), vec![(false, true, 1)]);
        assert_eq!(errors.len(), 1);

        let implicit: IndexSet<String> = ["p".to_string()].into_iter().collect();
        let (parts, errors) = partition(&nodes, &implicit);
        assert_eq!(shape(&parts), vec![(true, true, 1)]);
        assert_eq!(parts[0].meta.meaning, "");
        assert_eq!(errors.len(), 1);
    }
}
