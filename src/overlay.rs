use crate::constants::{
    MESSAGE_IDS, SHEET_CONTENT_ID, SHEET_ID, SHEET_START_CLASS, STRAP_ID, STRAP_SHOWN_CLASS,
    VISIBLE_CLASS, WRITING_HIDDEN_CLASS, WRITING_ID,
};
use crate::core::{Cue, TypeStep};
use web_sys as web;

#[inline]
fn add_class(document: &web::Document, id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().add_1(class);
    }
}

#[inline]
fn remove_class(document: &web::Document, id: &str, class: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        _ = el.class_list().remove_1(class);
    }
}

fn show_strap(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STRAP_ID) {
        _ = el.class_list().add_1(STRAP_SHOWN_CLASS);
        // fallback for environments without the stylesheet
        _ = el.set_attribute("style", "display:block");
    }
}

fn hide_strap(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STRAP_ID) {
        _ = el.set_attribute("style", "display:block; opacity:0; pointer-events:none");
    }
}

fn show_sheet(document: &web::Document) {
    remove_class(document, SHEET_ID, SHEET_START_CLASS);
    add_class(document, SHEET_ID, VISIBLE_CLASS);
    if let Some(el) = document.get_element_by_id(SHEET_CONTENT_ID) {
        el.set_inner_html("");
    }
}

fn type_step(document: &web::Document, step: &TypeStep) {
    let Some(content) = document.get_element_by_id(SHEET_CONTENT_ID) else {
        return;
    };
    match step {
        TypeStep::StartLine(_) => {
            if let Ok(p) = document.create_element("p") {
                _ = content.append_child(&p);
            }
        }
        TypeStep::Append { ch, .. } => {
            if let Some(p) = content.last_element_child() {
                let mut text = p.text_content().unwrap_or_default();
                text.push(*ch);
                p.set_text_content(Some(&text));
            }
        }
    }
}

/// Apply one reveal cue to the page.
pub fn apply(document: &web::Document, cue: &Cue) {
    match cue {
        Cue::ShowWriting => remove_class(document, WRITING_ID, WRITING_HIDDEN_CLASS),
        Cue::ShowStrap => show_strap(document),
        Cue::HideStrap => hide_strap(document),
        Cue::ShowMessage(i) => {
            if let Some(id) = MESSAGE_IDS.get(*i) {
                add_class(document, id, VISIBLE_CLASS);
            }
        }
        Cue::HideMessage(i) => {
            if let Some(id) = MESSAGE_IDS.get(*i) {
                remove_class(document, id, VISIBLE_CLASS);
            }
        }
        Cue::ShowSheet => show_sheet(document),
        Cue::Type(step) => type_step(document, step),
        // handled inside the sequence itself
        Cue::StartTrail | Cue::StartTyping => {}
    }
}

/// The strap stays hidden until the sequence reveals it.
pub fn hide_strap_initially(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STRAP_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}
