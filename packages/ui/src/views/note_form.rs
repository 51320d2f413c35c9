//! Note creation and update forms.

use dioxus::prelude::*;
use store::Note;

/// Empty form posting `title` and `content` to `/add-note`.
#[component]
pub fn AddNoteView() -> Element {
    rsx! {
        main {
            class: "note-form",

            h1 { "Add note" }

            form {
                method: "post",
                action: "/add-note",
                class: "stack",

                input { r#type: "text", name: "title", placeholder: "Title" }
                textarea { name: "content", rows: "8", placeholder: "Content" }

                button { r#type: "submit", "Save" }
            }

            a { href: "/dashboard", "Back" }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct UpdateNoteProps {
    pub note: Note,
}

/// Form pre-filled with an existing note, posting to `/update/{id}`.
#[allow(non_snake_case)]
pub fn UpdateNoteView(props: UpdateNoteProps) -> Element {
    let note = &props.note;

    rsx! {
        main {
            class: "note-form",

            h1 { "Edit note" }

            form {
                method: "post",
                action: "/update/{note.id}",
                class: "stack",

                input { r#type: "text", name: "title", value: "{note.title}" }
                textarea { name: "content", rows: "8", "{note.content}" }

                button { r#type: "submit", "Update" }
            }

            a { href: "/dashboard", "Back" }
        }
    }
}
