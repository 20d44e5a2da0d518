use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlSelectElement};

use crate::services::catalog_service::{availability_label, ActivityCardView, ParticipantView};
use crate::ui::events::Subscription;
use crate::ui::handlers::{self, AppContext, UnregisterTarget};
use crate::ui::page::Page;

pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet.";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const FETCH_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

// A finished render owns its unregister handlers; replacing it on the
// next refresh is what disposes them.
pub struct RenderedView {
    pub subscriptions: Vec<Subscription>,
}

pub struct CardSlots {
    pub spots: Element,
    pub list: Element,
    pub entries: Vec<ParticipantSlot>,
}

pub struct ParticipantSlot {
    pub identifier: String,
    pub item: Element,
    pub button: Option<Element>,
}

// Full clear-then-repopulate of both regions. Stale cards and duplicate
// selector options cannot survive a refresh because nothing is reused.
pub fn clear_and_render(
    ctx: &AppContext,
    cards: &[ActivityCardView],
) -> Result<RenderedView, JsValue> {
    let page = &ctx.page;
    page.list.set_inner_html("");
    populate_selector(&page.document, &page.select, cards)?;

    let mut subscriptions = Vec::new();
    for card in cards {
        let (element, slots) = build_card(&page.document, card, true)?;
        page.list.append_child(&element)?;

        for entry in slots.entries {
            let Some(button) = entry.button else {
                continue;
            };
            let target = UnregisterTarget {
                activity: card.name.clone(),
                email: entry.identifier,
                max_participants: card.max_participants,
                entry: entry.item,
                list: slots.list.clone(),
                spots: slots.spots.clone(),
            };
            let handler = handlers::unregister_click(ctx.clone(), target);
            subscriptions.push(Subscription::listen(&button, "click", handler)?);
        }
    }

    Ok(RenderedView { subscriptions })
}

// The selector is rebuilt from scratch every refresh; repeated fetches
// must not accumulate options.
pub fn populate_selector(
    document: &Document,
    select: &HtmlSelectElement,
    cards: &[ActivityCardView],
) -> Result<(), JsValue> {
    select.set_inner_html("");

    let placeholder = document.create_element("option")?;
    placeholder.set_attribute("value", "")?;
    placeholder.set_text_content(Some(SELECT_PLACEHOLDER));
    select.append_child(&placeholder)?;

    for card in cards {
        let option = document.create_element("option")?;
        option.set_attribute("value", &card.name)?;
        option.set_text_content(Some(&card.name));
        select.append_child(&option)?;
    }
    Ok(())
}

pub fn build_card(
    document: &Document,
    card: &ActivityCardView,
    with_unregister: bool,
) -> Result<(Element, CardSlots), JsValue> {
    let root = document.create_element("div")?;
    root.set_class_name("activity-card");

    let title = document.create_element("h4")?;
    title.set_text_content(Some(&card.name));
    root.append_child(&title)?;

    let description = document.create_element("p")?;
    description.set_text_content(Some(&card.description));
    root.append_child(&description)?;

    root.append_child(&labelled_line(document, "Schedule:", &card.schedule)?.into())?;

    let availability = document.create_element("p")?;
    availability.set_class_name("availability");
    availability.append_child(&bold_label(document, "Availability:")?.into())?;
    availability.append_child(&document.create_text_node(" "))?;
    let spots = document.create_element("span")?;
    spots.set_class_name("spots-left");
    spots.set_text_content(Some(&card.availability_label));
    availability.append_child(&spots)?;
    root.append_child(&availability)?;

    let section = document.create_element("div")?;
    section.set_class_name("participants");
    let heading = document.create_element("h5")?;
    heading.set_text_content(Some("Participants"));
    section.append_child(&heading)?;

    let list = document.create_element("ul")?;
    list.set_class_name("participant-list");

    let mut entries = Vec::new();
    if card.participants.is_empty() {
        list.append_child(&no_participants_item(document)?.into())?;
    } else {
        for participant in &card.participants {
            let (item, button) = participant_item(document, participant, with_unregister)?;
            list.append_child(&item)?;
            entries.push(ParticipantSlot {
                identifier: participant.identifier.clone(),
                item,
                button,
            });
        }
    }
    section.append_child(&list)?;
    root.append_child(&section)?;

    Ok((
        root,
        CardSlots {
            spots,
            list,
            entries,
        },
    ))
}

// Unreachable or undecodable catalog: show the fallback line and leave
// the selector empty rather than rendering partial data.
pub fn render_fetch_failure(page: &Page) -> Result<(), JsValue> {
    page.list.set_inner_html("");
    let fallback = page.document.create_element("p")?;
    fallback.set_text_content(Some(FETCH_FAILURE_TEXT));
    page.list.append_child(&fallback)?;
    page.select.set_inner_html("");
    Ok(())
}

// Applied only after the server confirmed the unregister. Capacity is
// recounted from the DOM the handler closed over, so overlapping
// removals on the same card stay consistent.
pub fn remove_participant_entry(
    document: &Document,
    target: &UnregisterTarget,
) -> Result<(), JsValue> {
    target.entry.remove();

    let remaining = target
        .list
        .get_elements_by_class_name("participant-item")
        .length();
    let spots = target.max_participants.saturating_sub(remaining);
    target.spots.set_text_content(Some(&availability_label(spots)));

    if remaining == 0 {
        target.list.append_child(&no_participants_item(document)?.into())?;
    }
    Ok(())
}

fn participant_item(
    document: &Document,
    participant: &ParticipantView,
    with_unregister: bool,
) -> Result<(Element, Option<Element>), JsValue> {
    let item = document.create_element("li")?;
    item.set_class_name("participant-item");

    let badge = document.create_element("span")?;
    badge.set_class_name("participant-badge");
    badge.set_text_content(Some(&participant.badge));
    item.append_child(&badge)?;

    let name = document.create_element("span")?;
    name.set_class_name("participant-name");
    name.set_text_content(Some(&participant.identifier));
    item.append_child(&name)?;

    let button = if with_unregister {
        let button = document.create_element("button")?;
        button.set_class_name("unregister-btn");
        button.set_attribute("type", "button")?;
        button.set_attribute(
            "aria-label",
            &format!("Unregister {}", participant.identifier),
        )?;
        button.set_text_content(Some("✖"));
        item.append_child(&button)?;
        Some(button)
    } else {
        None
    };

    Ok((item, button))
}

fn no_participants_item(document: &Document) -> Result<Element, JsValue> {
    let item = document.create_element("li")?;
    item.set_class_name("no-participants");
    item.set_text_content(Some(NO_PARTICIPANTS_TEXT));
    Ok(item)
}

fn labelled_line(document: &Document, label: &str, text: &str) -> Result<Element, JsValue> {
    let line = document.create_element("p")?;
    line.append_child(&bold_label(document, label)?.into())?;
    line.append_child(&document.create_text_node(&format!(" {}", text)))?;
    Ok(line)
}

fn bold_label(document: &Document, label: &str) -> Result<Element, JsValue> {
    let strong = document.create_element("strong")?;
    strong.set_text_content(Some(label));
    Ok(strong)
}
