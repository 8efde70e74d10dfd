//! Tests for the list model.

use super::*;
use crate::style::DefaultStyle;

fn style() -> Rc<dyn StyleStrategy> {
    Rc::new(DefaultStyle::default())
}

fn sample_root() -> Root {
    let style = style();
    Root::new(style.clone())
        .with_caption("Demos")
        .with_section(
            Section::new(SectionId::new(1))
                .with_header("Login")
                .with_element(Element::new(ElementId::new(10), style.clone()).with_caption("Name"))
                .with_element(
                    Element::new(ElementId::new(11), style.clone())
                        .with_caption("Password")
                        .supporting_captions(),
                ),
        )
        .with_section(
            Section::new(SectionId::new(2))
                .with_element(Element::new(ElementId::new(20), style.clone())),
        )
}

#[test]
fn push_sets_parent_reference() {
    let root = sample_root();
    let element = root.element(ElementId::new(11)).unwrap();
    assert_eq!(element.parent(), Some(SectionId::new(1)));
}

#[test]
fn remove_detaches_element() {
    let mut root = sample_root();
    let section = root.section_mut(SectionId::new(1)).unwrap();
    let removed = section.remove(ElementId::new(10)).unwrap();
    assert_eq!(removed.parent(), None);
    assert_eq!(section.len(), 1);
}

#[test]
fn row_resolves_element_and_section() {
    let root = sample_root();
    let row = root.row(ElementId::new(11)).unwrap();
    assert_eq!(row.section().id(), SectionId::new(1));
    assert_eq!(row.element().caption(), Some("Password"));
    assert_eq!(row.row_type(), RowType::Bot);
}

#[test]
fn row_of_unknown_element_fails() {
    let root = sample_root();
    assert_eq!(
        root.row(ElementId::new(404)).unwrap_err(),
        ModelError::UnknownElement(ElementId::new(404))
    );
}

#[test]
fn alignment_caption_requires_capability() {
    let root = sample_root();
    assert_eq!(
        root.element(ElementId::new(10)).unwrap().alignment_caption(),
        None
    );
    assert_eq!(
        root.element(ElementId::new(11)).unwrap().alignment_caption(),
        Some("Password")
    );
}

#[test]
fn new_section_has_zero_alignment() {
    let section = Section::new(SectionId::new(5));
    assert_eq!(section.entry_alignment(), Size::ZERO);
    assert!(section.is_empty());
}

#[test]
fn root_caption_and_headers_are_kept() {
    let root = sample_root();
    assert_eq!(root.caption(), Some("Demos"));
    assert_eq!(root.sections()[0].header(), Some("Login"));
    assert_eq!(root.sections()[1].header(), None);
}
