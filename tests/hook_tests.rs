use doc_hooks::{
    default_plugins, dispatch_click, parse_document, resolve_path, AnchorScroller, ClickBinding,
    HookError, RecordingViewport, Renderer, Route, SCROLL_DEBOUNCE_TICKS,
};
use pretty_assertions::assert_eq;

fn guide_route() -> Route {
    Route::new(
        "https://docs.example.org/#/guide/install",
        "https://docs.example.org",
    )
}

const PAGE: &str = r##"
tag: body
children:
  - tag: img
    classes: [path-append]
    attrs:
      src: assets/logo.png
  - tag: a
    id: api-link
    classes: [path-append]
    attrs:
      href: "#/api/index"
  - tag: a
    id: report
    classes: [download]
    attrs:
      href: files/report.pdf
  - tag: a
    id: see-refs
    classes: [refer]
    attrs:
      href: "#/guide/references"
  - tag: a
    id: jump
    classes: [module-object-refer]
    text: fiber.Fiber
  - tag: div
    id: refer-anchor
"##;

// --- Resolver properties ---

#[test]
fn resolver_is_identity_on_normalized_paths() {
    for p in ["a/b/c", "guide/assets/logo.png", "x"] {
        assert_eq!(resolve_path(p), p);
    }
}

#[test]
fn resolver_is_idempotent() {
    for p in ["a/b/../c", "./a", "../x/y", "a//b", ""] {
        let once = resolve_path(p);
        assert_eq!(resolve_path(&once), once);
    }
}

#[test]
fn resolver_handles_dot_segments_and_blanks() {
    assert_eq!(resolve_path("a/b/../c"), "a/c");
    assert_eq!(resolve_path("a/./b"), "a/b");
    assert_eq!(resolve_path("../a"), "a");
    assert_eq!(resolve_path(""), "");
    assert_eq!(resolve_path("a//b"), "a//b");
}

// --- Full pipeline ---

#[test]
fn default_plugins_decorate_a_full_page() {
    let mut doc = parse_document(PAGE).unwrap();
    let mut renderer = Renderer::new(&default_plugins());
    renderer.render(&mut doc, &guide_route());

    // path-append: src rebased under the route directory
    let img = &doc.root.children[0];
    assert_eq!(img.attr("src"), Some("guide/assets/logo.png"));

    // path-append: hash-route href keeps its prefix
    let api = doc.element_by_id("api-link").unwrap();
    assert_eq!(api.attr("href"), Some("#/guide/api/index"));

    // download: attribute filled with the file name
    let report = doc.element_by_id("report").unwrap();
    assert_eq!(report.attr("download"), Some("report.pdf"));

    // refer: rewired before path-append could matter — href neutralized
    let refs = doc.element_by_id("see-refs").unwrap();
    assert_eq!(refs.attr("href"), Some("#"));
    assert_eq!(refs.binding, Some(ClickBinding::ReferAnchor));

    // module-object: dotted name captured from the anchor text
    let jump = doc.element_by_id("jump").unwrap();
    assert_eq!(
        jump.binding,
        Some(ClickBinding::ModuleObject {
            name: "fiber.Fiber".to_string()
        })
    );
}

#[test]
fn rendering_twice_is_stable() {
    let mut doc = parse_document(PAGE).unwrap();
    let mut renderer = Renderer::new(&default_plugins());
    let route = guide_route();
    renderer.render(&mut doc, &route);
    let after_first = doc.clone();
    renderer.render(&mut doc, &route);

    // The second pass re-rebases already-rebased links; the refer and
    // download decorations must stay put.
    let refs = doc.element_by_id("see-refs").unwrap();
    assert_eq!(refs.attr("href"), Some("#"));
    assert_eq!(
        doc.element_by_id("report").unwrap().attr("download"),
        after_first.element_by_id("report").unwrap().attr("download"),
    );
}

#[test]
fn clicks_flow_through_the_debounced_scroller() {
    let mut doc = parse_document(PAGE).unwrap();
    let mut renderer = Renderer::new(&default_plugins());
    let route = guide_route();
    renderer.render(&mut doc, &route);

    let mut scroller = AnchorScroller::new();
    let mut viewport = RecordingViewport::new();

    // Three rapid clicks on the refer anchor, then one on the module link.
    for now in [0, 5, 10] {
        dispatch_click(&doc, &route, "see-refs", now, &mut scroller, &mut viewport).unwrap();
    }
    dispatch_click(&doc, &route, "jump", 20, &mut scroller, &mut viewport).unwrap();

    // Navigation is immediate; scrolling waits out the debounce window and
    // only the last request survives.
    assert_eq!(
        viewport.navigations,
        vec!["https://docs.example.org/#/fiber".to_string()]
    );
    assert_eq!(viewport.scrolls, Vec::<(String, bool)>::new());

    scroller.tick(20 + SCROLL_DEBOUNCE_TICKS, &mut viewport);
    assert_eq!(viewport.scrolls, vec![("Fiber".to_string(), true)]);
}

#[test]
fn clicking_an_unknown_element_is_an_error() {
    let mut doc = parse_document(PAGE).unwrap();
    let route = guide_route();
    Renderer::with_default_plugins().render(&mut doc, &route);

    let mut scroller = AnchorScroller::new();
    let mut viewport = RecordingViewport::new();
    let result = dispatch_click(&doc, &route, "missing", 0, &mut scroller, &mut viewport);
    assert!(matches!(result, Err(HookError::UnknownElement { .. })));
}

// --- Parser edges ---

#[test]
fn parser_rejects_duplicate_ids() {
    let yaml = r#"
tag: body
children:
  - tag: a
    id: twice
  - tag: a
    id: twice
"#;
    assert!(matches!(
        parse_document(yaml),
        Err(HookError::DuplicateId { .. })
    ));
}

#[test]
fn parser_rejects_empty_input() {
    assert!(matches!(parse_document(""), Err(HookError::EmptyDocument)));
}

#[test]
fn serialized_document_omits_runtime_bindings() {
    let mut doc = parse_document(PAGE).unwrap();
    let route = guide_route();
    Renderer::with_default_plugins().render(&mut doc, &route);

    let yaml = serde_yaml::to_string(&doc).unwrap();
    assert!(!yaml.contains("binding"));

    // Round back through the parser: attribute rewrites survive, bindings
    // do not.
    let reparsed = parse_document(&yaml).unwrap();
    assert_eq!(
        reparsed.element_by_id("report").unwrap().attr("download"),
        Some("report.pdf")
    );
    assert_eq!(reparsed.element_by_id("see-refs").unwrap().binding, None);
}
