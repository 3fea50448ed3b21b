// Integration tests for Selection over the in-memory Dom
//
// The fixture mirrors this markup, appended to <body>:
//
// <div id="test-parent">
//   <div id="page"></div>
//   <div class="foobar"></div>
//   <div class="foobar"></div>
// </div>

use dollar::dom::{Dom, NodeId};
use dollar::{Operation, Selection, Selector, select};

struct Fixture {
    dom: Dom,
    parent: NodeId,
    page: NodeId,
    foobars: [NodeId; 2],
}

fn fixture() -> anyhow::Result<Fixture> {
    let mut dom = Dom::new();
    let body = dom.body().expect("skeleton should have a body");

    let parent = dom.create_element("div")?;
    let page = dom.create_element("div")?;
    let first = dom.create_element("div")?;
    let second = dom.create_element("div")?;
    dom.set_id(parent, "test-parent")?;
    dom.set_id(page, "page")?;
    dom.set_class_name(first, "foobar")?;
    dom.set_class_name(second, "foobar")?;
    dom.append_child(parent, page)?;
    dom.append_child(body, parent)?;
    dom.append_child(parent, first)?;
    dom.append_child(parent, second)?;

    Ok(Fixture {
        dom,
        parent,
        page,
        foobars: [first, second],
    })
}

#[test]
fn test_class_selector_collects_all_matches() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let elements = Selection::new(&mut fx.dom, ".foobar").into_elements();

    assert_eq!(elements, fx.foobars.to_vec());
    for el in &elements {
        assert_eq!(fx.dom.class_name(*el).as_deref(), Some("foobar"));
    }
    Ok(())
}

#[test]
fn test_id_selector_wraps_single_element() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let selection = Selection::new(&mut fx.dom, "#page");

    assert_eq!(selection.len(), 1);
    assert_eq!(selection.elements(), &[fx.page]);
    assert_eq!(selection.document().id(fx.page), Some("page"));
    Ok(())
}

#[test]
fn test_missing_id_yields_empty_selection() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let selection = Selection::new(&mut fx.dom, "#nope");

    assert!(selection.is_empty());
    assert_eq!(selection.len(), 0);
    Ok(())
}

#[test]
fn test_tag_selector_counts_nested_elements() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    // Six more divs nested three deep inside #page, for ten in total.
    let mut current = fx.page;
    for _ in 0..3 {
        let child = fx.dom.create_element("div")?;
        let sibling = fx.dom.create_element("div")?;
        fx.dom.append_child(current, child)?;
        fx.dom.append_child(current, sibling)?;
        current = child;
    }

    let selection = Selection::new(&mut fx.dom, "div");
    assert_eq!(selection.len(), 10);
    for el in selection.iter() {
        assert_eq!(selection.document().tag_name(*el).as_deref(), Some("DIV"));
    }
    Ok(())
}

#[test]
fn test_elements_follow_document_order() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let elements = Selection::new(&mut fx.dom, "div").into_elements();

    assert_eq!(elements, vec![fx.parent, fx.page, fx.foobars[0], fx.foobars[1]]);
    Ok(())
}

#[test]
fn test_hide_sets_display_none() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, ".foobar").hide();

    for el in fx.foobars {
        assert_eq!(fx.dom.style_property(el, "display"), Some("none"));
    }
    assert_eq!(fx.dom.style_property(fx.page, "display"), None);
    Ok(())
}

#[test]
fn test_show_sets_display_inherit() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, ".foobar").show();

    for el in fx.foobars {
        assert_eq!(fx.dom.style_property(el, "display"), Some("inherit"));
    }
    Ok(())
}

#[test]
fn test_add_class_name() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, ".foobar").add_class_name("baz");

    for el in fx.foobars {
        assert!(fx.dom.has_class(el, "baz"));
        assert!(fx.dom.has_class(el, "foobar"));
    }
    Ok(())
}

#[test]
fn test_add_class_name_is_idempotent() -> anyhow::Result<()> {
    let mut once = fixture()?;
    let mut twice = fixture()?;
    Selection::new(&mut once.dom, ".foobar").add_class_name("baz");
    Selection::new(&mut twice.dom, ".foobar")
        .add_class_name("baz")
        .add_class_name("baz");

    for (a, b) in once.foobars.into_iter().zip(twice.foobars) {
        assert_eq!(once.dom.class_list(a), twice.dom.class_list(b));
    }
    Ok(())
}

#[test]
fn test_remove_class_name() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, ".foobar").remove_class_name("foobar");

    for el in fx.foobars {
        assert!(!fx.dom.has_class(el, "foobar"));
    }
    Ok(())
}

#[test]
fn test_add_then_remove_restores_membership() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    for class in ["baz", "qux", "x-1"] {
        Selection::new(&mut fx.dom, ".foobar")
            .add_class_name(class)
            .remove_class_name(class);
        for el in fx.foobars {
            assert!(!fx.dom.has_class(el, class));
        }
    }
    Ok(())
}

#[test]
fn test_remove_missing_class_is_noop() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, "#page").remove_class_name("never");

    assert!(fx.dom.class_list(fx.page).is_empty());
    Ok(())
}

#[test]
fn test_text_appends_text_node() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, ".foobar").text("Hello World");

    for el in fx.foobars {
        assert_eq!(fx.dom.text_content(el), "Hello World");
    }
    Ok(())
}

#[test]
fn test_text_keeps_existing_children() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, "#page")
        .add_child("span")
        .text("a")
        .text("b");

    assert_eq!(fx.dom.inner_html(fx.page), "<span></span>ab");
    assert_eq!(fx.dom.children(fx.page).len(), 3);
    Ok(())
}

#[test]
fn test_add_child_appends_empty_element() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, ".foobar").add_child("h1");

    for el in fx.foobars {
        assert_eq!(fx.dom.inner_html(el), "<h1></h1>");
    }
    Ok(())
}

#[test]
fn test_chaining_final_state() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    Selection::new(&mut fx.dom, ".foobar")
        .add_class_name("bar")
        .remove_class_name("foobar")
        .show()
        .hide();

    for el in fx.foobars {
        assert!(fx.dom.has_class(el, "bar"));
        assert!(!fx.dom.has_class(el, "foobar"));
        assert_eq!(fx.dom.style_property(el, "display"), Some("none"));
    }
    Ok(())
}

#[test]
fn test_every_operation_returns_same_instance() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let mut selection = Selection::new(&mut fx.dom, ".foobar");
    let this: *const Selection<'_, Dom> = &selection;

    assert!(std::ptr::eq(selection.hide(), this));
    assert!(std::ptr::eq(selection.show(), this));
    assert!(std::ptr::eq(selection.add_class_name("a"), this));
    assert!(std::ptr::eq(selection.remove_class_name("a"), this));
    assert!(std::ptr::eq(selection.text("t"), this));
    assert!(std::ptr::eq(selection.add_child("i"), this));
    assert!(std::ptr::eq(selection.apply(&Operation::Hide), this));
    assert!(std::ptr::eq(selection.apply_all(&[]), this));
    Ok(())
}

#[test]
fn test_chaining_on_empty_selection_is_safe() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let before = fx.dom.to_html();

    let mut selection = Selection::new(&mut fx.dom, ".missing");
    selection
        .hide()
        .show()
        .add_class_name("a")
        .remove_class_name("b")
        .text("c")
        .add_child("d");
    assert!(selection.is_empty());

    assert_eq!(fx.dom.to_html(), before);
    Ok(())
}

#[test]
fn test_selection_is_a_snapshot() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let mut selection = Selection::new(&mut fx.dom, ".foobar");
    // New matching children created through the selection are not picked up.
    selection.add_child("div").add_class_name("marker");

    assert_eq!(selection.len(), 2);
    let new_divs: Vec<NodeId> = fx
        .dom
        .elements()
        .filter(|&el| fx.dom.parent(el).is_some_and(|p| fx.foobars.contains(&p)))
        .collect();
    assert_eq!(new_divs.len(), 2);
    for el in new_divs {
        assert!(!fx.dom.has_class(el, "marker"));
    }
    Ok(())
}

#[test]
fn test_compound_selector_falls_through_to_tag_lookup() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let selection = Selection::new(&mut fx.dom, "div.foobar");

    assert_eq!(selection.selector(), &Selector::ByTag("div.foobar".into()));
    assert!(selection.is_empty());
    Ok(())
}

#[test]
fn test_apply_all_runs_operations_in_order() -> anyhow::Result<()> {
    let mut fx = fixture()?;
    let ops: Vec<Operation> = ["add-class=bar", "remove-class=foobar", "show", "hide", "add-child=h1"]
        .iter()
        .map(|s| s.parse::<Operation>())
        .collect::<Result<Vec<_>, _>>()?;

    select(&mut fx.dom, ".foobar").apply_all(&ops);

    for el in fx.foobars {
        assert_eq!(
            fx.dom.outer_html(el),
            r#"<div class="bar" style="display: none;"><h1></h1></div>"#
        );
    }
    Ok(())
}

#[test]
fn test_parsed_document_matches_programmatic_fixture() -> anyhow::Result<()> {
    let fx = fixture()?;
    let mut parsed = Dom::parse_html(
        r#"<div id="test-parent"><div id="page"></div><div class="foobar"></div><div class="foobar"></div></div>"#,
    );

    assert_eq!(parsed.to_html(), fx.dom.to_html());
    assert_eq!(select(&mut parsed, ".foobar").len(), 2);
    Ok(())
}
