//! End-to-end host pipeline: structural changes, relayout loops and
//! container lifetime.

use crate::keyboard::{FixedScreen, KeyboardHub, KeyboardNotification, KeyboardResize};
use crate::layout::{CellLayoutController, LayoutPass};
use crate::model::{Element, ElementId, Point, Rect, Root, RowContext, Section, SectionId, Size};
use crate::style::{ContactsStyle, CustomStyle, StyleError, StyleStrategy};
use crate::view::{stack_cells, TerminalMeasurer, TerminalPositioning};
use crate::view_state::{CellView, ListView};
use ratatui::style::Color;
use std::cell::Cell;
use std::rc::Rc;

fn captioned(style: &Rc<dyn StyleStrategy>, id: u32, caption: &str) -> Element {
    Element::new(ElementId::new(id), style.clone())
        .with_caption(caption)
        .supporting_captions()
}

/// Strategy whose post-positioning hook always asks for another pass, the
/// way a row that resizes its own label would.
#[derive(Debug, Default)]
struct Restless {
    passes: Cell<u32>,
}

impl StyleStrategy for Restless {
    fn layout_cell(&self, _cell: &mut CellView, _row: RowContext<'_>) -> Result<(), StyleError> {
        self.passes.set(self.passes.get() + 1);
        Ok(())
    }
}

#[test]
fn structural_change_renormalizes_contacts_column() {
    let contacts = Rc::new(ContactsStyle::default());
    let style: Rc<dyn StyleStrategy> = contacts.clone();
    let mut root = Root::new(style.clone())
        .with_section(Section::new(SectionId::new(1)).with_element(captioned(&style, 1, "Phone")));

    root.compute_entry_alignment(&TerminalMeasurer);
    assert_eq!(contacts.column_width(), 10.0, "floor wins over short captions");

    root.push_section(
        Section::new(SectionId::new(2)).with_element(captioned(&style, 2, "Home page URL")),
    );
    root.compute_entry_alignment(&TerminalMeasurer);

    assert_eq!(contacts.column_width(), 13.0);
    assert!(root
        .sections()
        .iter()
        .all(|s| s.entry_alignment() == Size::new(13.0, 1.0)));
}

#[test]
fn relayout_loop_terminates_at_threshold() {
    let restless = Rc::new(Restless::default());
    let style: Rc<dyn StyleStrategy> = restless.clone();
    let root = Root::new(style.clone())
        .with_section(Section::new(SectionId::new(1)).with_element(captioned(&style, 1, "Name")));
    let row = root.row(ElementId::new(1)).unwrap();
    let mut cells = stack_cells(&root, 30.0).unwrap();
    let cell = &mut cells[0];
    let mut controller = CellLayoutController::new(10);

    let mut rounds = 0;
    while controller
        .layout(cell, row, TerminalPositioning::new(row.row_type(), None).into_fn())
        .unwrap()
        == LayoutPass::Styled
    {
        rounds += 1;
        assert!(rounds <= 10, "layout never settled");
    }

    assert_eq!(restless.passes.get(), 10);
}

#[test]
fn resized_cell_is_styled_after_saturation() {
    let style: Rc<dyn StyleStrategy> = Rc::new(ContactsStyle::default());
    let root = Root::new(style.clone())
        .with_section(Section::new(SectionId::new(1)).with_element(captioned(&style, 1, "Name")));
    let row = root.row(ElementId::new(1)).unwrap();
    let mut cell = CellView::new(Rect::new(0.0, 0.0, 30.0, 3.0));
    let mut controller = CellLayoutController::new(2);

    for _ in 0..4 {
        controller.layout(&mut cell, row, |_| {}).unwrap();
    }
    assert!(controller.is_saturated());

    cell.frame = Rect::new(0.0, 0.0, 40.0, 3.0);
    assert_eq!(
        controller.layout(&mut cell, row, |_| {}).unwrap(),
        LayoutPass::Styled
    );
    assert_eq!(cell.decorations().len(), 1);
}

#[test]
fn dropped_dialog_stops_receiving_keyboard_events() {
    let hub = KeyboardHub::new();
    let style = CustomStyle::new(Rc::new(ContactsStyle::default()))
        .with_background(Color::Black, hub.registrar());
    let poster = hub.poster();

    let mut view = style.setup_view(ListView::new(Rect::new(0.0, 0.0, 320.0, 460.0)));
    let container = view.container_mut().unwrap();
    container.attach(Point::new(0.0, 20.0));

    poster
        .post(KeyboardNotification::will_show(
            Rect::new(0.0, 480.0, 320.0, 216.0),
            Rect::new(0.0, 264.0, 320.0, 216.0),
        ))
        .unwrap();
    assert_eq!(hub.dispatch(), 1);
    let resizes = container.process_notifications(&FixedScreen(Rect::new(0.0, 0.0, 320.0, 480.0)));
    assert!(matches!(resizes.as_slice(), [KeyboardResize::Animated(_)]));

    drop(view);

    poster.post(KeyboardNotification::did_hide()).unwrap();
    assert_eq!(hub.dispatch(), 0);
    assert_eq!(hub.subscriber_count(), 0);
}

#[test]
fn poster_works_from_another_thread() {
    let hub = KeyboardHub::new();
    let style = CustomStyle::new(Rc::new(ContactsStyle::default()))
        .with_background(Color::Black, hub.registrar());
    let mut view = style.setup_view(ListView::new(Rect::new(0.0, 0.0, 320.0, 460.0)));
    let poster = hub.poster();

    std::thread::spawn(move || {
        let keyboard = Rect::new(0.0, 264.0, 320.0, 216.0);
        poster
            .post(KeyboardNotification::will_show(keyboard, keyboard))
            .unwrap();
    })
    .join()
    .unwrap();

    hub.dispatch();
    let container = view.container_mut().unwrap();
    container.process_notifications(&FixedScreen(Rect::new(0.0, 0.0, 320.0, 480.0)));

    assert_eq!(container.keyboard_intrusion(), 216.0);
    assert_eq!(view.list().frame.height(), 244.0);
}
