//! Dashboard: the logged-in user's details and notes.

use dioxus::prelude::*;
use store::Note;

#[derive(Props, Clone, PartialEq)]
pub struct DashboardProps {
    pub username: String,
    pub email: String,
    /// Notes of the current user, oldest first.
    pub notes: Vec<Note>,
}

/// Dashboard component listing notes with edit and delete actions.
#[allow(non_snake_case)]
pub fn DashboardView(props: DashboardProps) -> Element {
    rsx! {
        main {
            class: "dashboard",

            header {
                h1 { "Welcome, {props.username}" }
                p { class: "email", "{props.email}" }
                nav {
                    a { href: "/add-note", "Add note" }
                    " | "
                    a { href: "/logout", "Log out" }
                }
            }

            if props.notes.is_empty() {
                p { class: "empty", "No notes yet." }
            }

            ul {
                class: "notes",

                for note in props.notes.iter() {
                    li {
                        key: "{note.id}",
                        class: "note",

                        h2 { "{note.title}" }
                        p { "{note.content}" }

                        a { href: "/update/{note.id}", "Edit" }

                        form {
                            method: "post",
                            action: "/delete/{note.id}",
                            button { r#type: "submit", "Delete" }
                        }
                    }
                }
            }
        }
    }
}
