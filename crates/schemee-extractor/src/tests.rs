//! Traversal tests against real HTML trees

#[cfg(test)]
mod tests {
    use crate::{Extractor, ExtractorConfig, ExtractorError, MissingFieldPolicy};
    use schemee_compiler::{compile, strip_annotations};
    use schemee_domain::{Blueprint, StructuralError};
    use schemee_html::HtmlDocument;
    use serde_json::{json, Value};

    fn blueprint(sample: &str) -> Blueprint {
        compile::<HtmlDocument>("test", sample).unwrap()
    }

    fn extract_with(config: ExtractorConfig, sample: &str, document: &str) -> Result<Value, ExtractorError> {
        let extractor = Extractor::<HtmlDocument>::new(config).unwrap();
        extractor.extract(&blueprint(sample), document)
    }

    fn extract(sample: &str, document: &str) -> Value {
        extract_with(ExtractorConfig::default(), sample, document).unwrap()
    }

    #[test]
    fn test_root_level_values() {
        let value = extract(
            "<h1>{$title}Hello</h1><p>{$body}Some text</p>",
            "<h1>World</h1><p>Other text</p>",
        );

        assert_eq!(value, json!({ "title": "World", "body": "Other text" }));
    }

    #[test]
    fn test_list_collects_every_repetition() {
        let sample = "<ul>{::people}\
            <li><b>{$name}Ann</b><i>{$age}31</i></li>\
            <li><b>Bob</b><i>42</i></li>\
            <li><b>Cid</b><i>27</i></li>\
            {::}</ul>";
        let document = "<ul>
            <li><b>Dee</b><i>1</i></li>
            <li><b>Eve</b><i>2</i></li>
            <li><b>Fay</b><i>3</i></li>
            <li><b>Gus</b><i>4</i></li>
            <li><b>Hal</b><i>5</i></li>
        </ul>";

        let value = extract(sample, document);
        let people = value["people"].as_array().unwrap();

        assert_eq!(people.len(), 5);
        assert_eq!(people[0], json!({ "name": "Dee", "age": "1" }));
        assert_eq!(people[4], json!({ "name": "Hal", "age": "5" }));
    }

    #[test]
    fn test_nested_object_and_list() {
        let sample = "<main>{:article}<article>\
            <h2>{$headline}Title</h2>\
            <ul>{::tags}<li>{$tag}rust</li><li>html</li>{::}</ul>\
            </article>{:}</main>";
        let document = "<main><article><h2>News</h2>\
            <ul><li>a</li><li>b</li><li>c</li></ul></article></main>";

        let value = extract(sample, document);

        assert_eq!(
            value,
            json!({
                "article": {
                    "headline": "News",
                    "tags": [{ "tag": "a" }, { "tag": "b" }, { "tag": "c" }]
                }
            })
        );
    }

    #[test]
    fn test_object_inside_list_items() {
        let sample = "<ol>{::links}<li>{:link}<a>{$text}Home</a>{:}</li><li><a>Docs</a></li>{::}</ol>";
        let document = "<ol><li><a>One</a></li><li><a>Two</a></li></ol>";

        let value = extract(sample, document);

        assert_eq!(
            value,
            json!({
                "links": [
                    { "link": { "text": "One" } },
                    { "link": { "text": "Two" } }
                ]
            })
        );
    }

    #[test]
    fn test_sample_without_annotations_round_trips() {
        let sample = "<h1>{$title}Catalog</h1>\
            <ul>{::items}<li><span>{$label}Tea</span><em>{$price}3</em></li>\
            <li><span>Coffee</span><em>4</em></li>{::}</ul>";
        let stripped = strip_annotations(sample).unwrap();

        let value = extract(sample, &stripped);

        assert_eq!(
            value,
            json!({
                "title": "Catalog",
                "items": [
                    { "label": "Tea", "price": "3" },
                    { "label": "Coffee", "price": "4" }
                ]
            })
        );
    }

    #[test]
    fn test_annotated_sample_yields_its_literal_values() {
        let sample = "<h1>{$title}Catalog</h1>\
            <ul>{::items}<li><span>{$label}Tea</span><em>{$price} 3</em></li>\
            <li><span>Coffee</span><em>4</em></li>{::}</ul>";

        let value = extract(sample, sample);

        assert_eq!(
            value,
            json!({
                "title": "Catalog",
                "items": [
                    { "label": "Tea", "price": "3" },
                    { "label": "Coffee", "price": "4" }
                ]
            })
        );
    }

    #[test]
    fn test_unterminated_brace_in_document_is_plain_text() {
        let value = extract("<p>{$text}sample</p>", "<p>{$note}a { b</p>");
        assert_eq!(value, json!({ "text": "a { b" }));
    }

    #[test]
    fn test_values_use_direct_text_only() {
        let value = extract("<p>{$text}sample</p>", "<p>Hello <b>bold</b>world</p>");
        assert_eq!(value, json!({ "text": "Hello world" }));
    }

    #[test]
    fn test_missing_field_fails_by_default() {
        let sample = "<ul>{::items}<li><b>{$name}a</b></li>{::}</ul>";
        let document = "<ul><li><b>x</b></li><li>no bold here</li></ul>";

        let err = extract_with(ExtractorConfig::default(), sample, document).unwrap_err();

        assert!(matches!(
            err,
            ExtractorError::Structural(StructuralError::NodeNotFound { ref field, .. }) if field == "name"
        ));
    }

    #[test]
    fn test_missing_field_skipped_when_lenient() {
        let sample = "<ul>{::items}<li><b>{$name}a</b></li>{::}</ul>";
        let document = "<ul><li><b>x</b></li><li>no bold here</li></ul>";

        let value = extract_with(ExtractorConfig::lenient(), sample, document).unwrap();

        assert_eq!(value, json!({ "items": [{ "name": "x" }, {}] }));
    }

    #[test]
    fn test_missing_list_skipped_when_lenient() {
        let sample = "<h1>{$title}t</h1><ul>{::items}<li>{$name}a</li>{::}</ul>";
        let document = "<h1>Only a title</h1>";

        let value = extract_with(ExtractorConfig::lenient(), sample, document).unwrap();

        assert_eq!(value, json!({ "title": "Only a title", "items": [] }));
    }

    #[test]
    fn test_list_without_repetitions() {
        let sample = "<ul>{::items}<li>{$name}a</li>{::}</ul>";

        let err = extract_with(ExtractorConfig::default(), sample, "<ul></ul>").unwrap_err();
        assert!(matches!(
            err,
            ExtractorError::Structural(StructuralError::NodeNotFound { ref field, .. }) if field == "items"
        ));

        let value = extract_with(ExtractorConfig::lenient(), sample, "<ul></ul>").unwrap();
        assert_eq!(value, json!({ "items": [] }));
    }

    #[test]
    fn test_list_is_capped() {
        let config = ExtractorConfig {
            max_list_items: 2,
            ..ExtractorConfig::default()
        };
        let value = extract_with(
            config,
            "<ul>{::items}<li>{$v}a</li>{::}</ul>",
            "<ul><li>1</li><li>2</li><li>3</li><li>4</li></ul>",
        )
        .unwrap();

        assert_eq!(value, json!({ "items": [{ "v": "1" }, { "v": "2" }] }));
    }

    #[test]
    fn test_sibling_with_other_tag_ends_list() {
        let sample = "<div>{::items}<span>{$v}a</span>{::}<p>tail</p></div>";
        let document = "<div><span>a</span><span>b</span><p>c</p></div>";

        let value = extract(sample, document);
        assert_eq!(value, json!({ "items": [{ "v": "a" }, { "v": "b" }] }));

        let config = ExtractorConfig {
            match_sibling_tag: false,
            ..ExtractorConfig::default()
        };
        let value = extract_with(config, sample, document).unwrap();
        assert_eq!(
            value,
            json!({ "items": [{ "v": "a" }, { "v": "b" }, { "v": "c" }] })
        );
    }

    #[test]
    fn test_trim_values_can_be_disabled() {
        let config = ExtractorConfig {
            trim_values: false,
            ..ExtractorConfig::default()
        };
        let value = extract_with(config, "<p>{$v}x</p>", "<p>  padded  </p>").unwrap();

        assert_eq!(value, json!({ "v": "  padded  " }));
    }

    #[test]
    fn test_document_too_long() {
        let config = ExtractorConfig {
            max_document_length: 8,
            ..ExtractorConfig::default()
        };
        let err = extract_with(config, "<p>{$v}x</p>", "<p>far too long</p>").unwrap_err();

        assert_eq!(err, ExtractorError::DocumentTooLong(19, 8));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = ExtractorConfig {
            max_list_items: 0,
            ..ExtractorConfig::default()
        };
        let result = Extractor::<HtmlDocument>::new(config);

        assert!(matches!(result, Err(ExtractorError::Config(_))));
    }

    #[test]
    fn test_result_keeps_declared_order() {
        let value = extract(
            "<p>{$zeta}z</p><p>{$alpha}a</p>",
            "<p>last</p><p>first</p>",
        );

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_same_blueprint_serves_many_documents() {
        let blueprint = blueprint("<h1>{$title}x</h1>");
        let extractor = Extractor::<HtmlDocument>::new(ExtractorConfig::default()).unwrap();

        for title in ["one", "two", "three"] {
            let document = format!("<h1>{}</h1>", title);
            let value = extractor.extract(&blueprint, &document).unwrap();
            assert_eq!(value, json!({ "title": title }));
        }
    }

    #[test]
    fn test_policy_is_exposed() {
        let extractor = Extractor::<HtmlDocument>::new(ExtractorConfig::lenient()).unwrap();
        assert_eq!(extractor.config().missing_field, MissingFieldPolicy::Skip);
    }
}
