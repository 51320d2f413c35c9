//! Server-side rendering of page components into complete HTML documents.

use dioxus::prelude::*;
use store::Note;

use crate::views::{
    AddNoteView, DashboardProps, DashboardView, LoginView, RegisterView, UpdateNoteProps,
    UpdateNoteView,
};

const STYLE: &str = "body{font-family:system-ui,sans-serif;max-width:40rem;margin:2rem auto;padding:0 1rem}\
.stack{display:flex;flex-direction:column;gap:.5rem}\
.note{border:1px solid #ddd;border-radius:4px;padding:.5rem 1rem;margin:.5rem 0;list-style:none}\
.notes{padding:0}";

fn document(title: &str, mut vdom: VirtualDom) -> String {
    vdom.rebuild_in_place();
    let body = dioxus_ssr::render(&vdom);
    format!(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head><body>{body}</body></html>"
    )
}

pub fn login_page() -> String {
    document("Log in", VirtualDom::new(LoginView))
}

pub fn register_page() -> String {
    document("Register", VirtualDom::new(RegisterView))
}

pub fn dashboard_page(username: String, email: String, notes: Vec<Note>) -> String {
    let props = DashboardProps {
        username,
        email,
        notes,
    };
    document("Dashboard", VirtualDom::new_with_props(DashboardView, props))
}

pub fn add_note_page() -> String {
    document("Add note", VirtualDom::new(AddNoteView))
}

pub fn update_note_page(note: Note) -> String {
    document(
        "Edit note",
        VirtualDom::new_with_props(UpdateNoteView, UpdateNoteProps { note }),
    )
}
