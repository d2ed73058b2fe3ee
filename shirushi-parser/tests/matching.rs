use shirushi_core::{array::LabelArray, label::Label};
use shirushi_parser::{parse_label_array, parse_select_label_array};


fn endpoint_labels() -> LabelArray {
    parse_label_array([
        "k8s:app=web",
        "k8s:io.kubernetes.pod.namespace=default",
        "container:user=bob",
        "$host",
    ])
}

#[test]
fn endpoint_contains_required_labels() {
    setup::init_basic_logging();

    let lbls = endpoint_labels();
    let required = parse_label_array(["container:user=bob", "k8s:app=web"]);

    assert!(lbls.contains(&required));
    assert!(!required.contains(&lbls));
    assert!(lbls.lacks(&required).is_empty());
}

#[test]
fn endpoint_lacks_missing_labels() {
    setup::init_basic_logging();

    let lbls = endpoint_labels();
    let required = parse_label_array(["k8s:app=web", "k8s:tier=frontend", "container:app=web"]);

    assert!(!lbls.contains(&required));
    assert_eq!(
        lbls.lacks(&required),
        LabelArray::new(vec![
            Label::new("tier", "frontend", "k8s"),
            Label::new("app", "web", "container"),
        ])
    );
}

#[test]
fn select_labels_are_not_contained_exactly() {
    setup::init_basic_logging();

    let lbls = endpoint_labels();
    let selector = parse_select_label_array(["app=web"]);

    assert!(!lbls.contains(&selector));
    assert!(selector
        .iter()
        .all(|wanted| lbls.iter().any(|label| wanted.matches(label))));
}

#[test]
fn qualified_lookup_on_parsed_labels() {
    setup::init_basic_logging();

    let lbls = endpoint_labels();

    assert!(lbls.has("app"));
    assert!(lbls.has("k8s.app"));
    assert!(lbls.has("any.app"));
    assert!(!lbls.has("container.app"));
    assert!(lbls.has("k8s.io.kubernetes.pod.namespace"));
    assert!(lbls.has("reserved.host"));
    assert!(!lbls.has("reserved:host"));
    assert!(!lbls.has("$host"));
}
