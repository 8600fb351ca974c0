use tabledom::{Content, Document, Element, Event, NodeId, ObserverId, Px};

fn attached_block(doc: &mut Document, width: f32, height: f32) -> NodeId {
    let node = doc.create(Element::block().content(Content::fixed(width, height)));
    let root = doc.root();
    doc.append_child(root, node);
    node
}

fn resized(doc: &mut Document) -> Vec<(NodeId, ObserverId)> {
    doc.collect_resize_notifications()
        .into_iter()
        .filter_map(|event| match event {
            Event::Resize { target, observer } => Some((target, observer)),
            Event::Scroll { .. } => None,
        })
        .collect()
}

#[test]
fn test_fires_once_after_initial_layout() {
    let mut doc = Document::new();
    let node = attached_block(&mut doc, 10.0, 10.0);
    let observer = doc.observe(node);

    assert_eq!(resized(&mut doc), vec![(node, observer)]);
    assert!(resized(&mut doc).is_empty(), "nothing changed since");
}

#[test]
fn test_fires_on_size_change() {
    let mut doc = Document::new();
    let node = attached_block(&mut doc, 10.0, 10.0);
    let observer = doc.observe(node);
    resized(&mut doc);

    doc.set_style(node, |s| s.min_width = Some(Px(40.0)));

    assert_eq!(resized(&mut doc), vec![(node, observer)]);
}

#[test]
fn test_unchanged_write_does_not_fire() {
    let mut doc = Document::new();
    let node = attached_block(&mut doc, 10.0, 10.0);
    doc.observe(node);
    resized(&mut doc);

    // Still smaller than the content
    doc.set_style(node, |s| s.min_width = Some(Px(5.0)));

    assert!(resized(&mut doc).is_empty());
}

#[test]
fn test_detached_node_waits_until_attached() {
    let mut doc = Document::new();
    let node = doc.create(Element::block().content(Content::fixed(10.0, 10.0)));
    let observer = doc.observe(node);

    assert!(resized(&mut doc).is_empty());

    let root = doc.root();
    doc.append_child(root, node);
    assert_eq!(resized(&mut doc), vec![(node, observer)]);
}

#[test]
fn test_registration_order() {
    let mut doc = Document::new();
    let a = attached_block(&mut doc, 10.0, 10.0);
    let b = attached_block(&mut doc, 20.0, 20.0);
    let first = doc.observe(b);
    let second = doc.observe(a);

    assert_eq!(resized(&mut doc), vec![(b, first), (a, second)]);
}

#[test]
fn test_unobserve() {
    let mut doc = Document::new();
    let node = attached_block(&mut doc, 10.0, 10.0);
    let observer = doc.observe(node);

    assert!(doc.unobserve(observer));
    assert!(!doc.unobserve(observer));
    assert_eq!(doc.observed(observer), None);
    assert!(resized(&mut doc).is_empty());
}

#[test]
fn test_removed_node_is_forgotten() {
    let mut doc = Document::new();
    let node = attached_block(&mut doc, 10.0, 10.0);
    let observer = doc.observe(node);

    doc.remove(node);

    assert_eq!(doc.observed(observer), None);
    assert!(resized(&mut doc).is_empty());
}

#[test]
fn test_poll_delivers_resize_notifications() {
    let mut doc = Document::new();
    let node = attached_block(&mut doc, 10.0, 10.0);
    let observer = doc.observe(node);

    let events = doc.poll_events();

    assert_eq!(
        events,
        vec![Event::Resize {
            target: node,
            observer
        }]
    );
    assert_eq!(events[0].target(), node);
}
