//! Message Bundle Tests

#[path = "util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::extractor;
    use i18n_message_extractor::i18n::{message_id, ExtractorConfig, MessageBundle};
    use pretty_assertions::assert_eq;

    fn bundle() -> MessageBundle {
        MessageBundle::new(extractor(ExtractorConfig::default()))
    }

    #[test]
    fn should_collect_messages_across_templates() {
        let mut bundle = bundle();
        assert!(bundle.update_from_template("<p i18n=\"m|first\">Hello</p>", "a.html").is_empty());
        assert!(bundle
            .update_from_template("<p i18n=\"m|second\">Hello</p><p i18n>Bye</p>", "b.html")
            .is_empty());

        assert_eq!(bundle.get_messages().len(), 3);

        let unique = bundle.unique_messages();
        let humanized: Vec<(&str, &str, &str)> = unique
            .iter()
            .map(|m| (m.content.as_str(), m.meaning.as_str(), m.description.as_str()))
            .collect();
        assert_eq!(humanized, vec![("Hello", "m", "first"), ("Bye", "", "")]);
    }

    #[test]
    fn should_keep_messages_that_differ_in_meaning() {
        let mut bundle = bundle();
        bundle.update_from_template("<p i18n=\"noun\">Book</p><p i18n=\"verb\">Book</p>", "a.html");

        let unique = bundle.unique_messages();
        assert_eq!(unique.len(), 2);
        assert_ne!(message_id(&unique[0]), message_id(&unique[1]));
    }

    #[test]
    fn should_skip_templates_with_errors() {
        let mut bundle = bundle();
        let errors = bundle.update_from_template("<p i18n>kept?</p><!-- /i18n -->", "bad.html");
        assert_eq!(errors.len(), 1);
        assert!(bundle.get_messages().is_empty());

        let errors = bundle.update_from_template("<div>", "broken.html");
        assert!(errors[0].is_fatal());
        assert!(bundle.get_messages().is_empty());

        assert!(bundle.update_from_template("<p i18n>ok</p>", "good.html").is_empty());
        assert_eq!(bundle.get_messages().len(), 1);
    }
}
