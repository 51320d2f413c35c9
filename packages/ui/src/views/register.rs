//! Registration page with username/email/password form.

use dioxus::prelude::*;

/// Register page component. Posts `username`, `email` and `password` to `/register`.
#[component]
pub fn RegisterView() -> Element {
    rsx! {
        main {
            class: "auth",

            h1 { "Create Account" }

            form {
                method: "post",
                action: "/register",
                class: "stack",

                input {
                    r#type: "text",
                    name: "username",
                    placeholder: "Username",
                    autocomplete: "username",
                }

                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "Email",
                    autocomplete: "email",
                }

                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    autocomplete: "new-password",
                }

                button { r#type: "submit", "Register" }
            }

            p {
                "Already registered? "
                a { href: "/login", "Log in" }
            }
        }
    }
}
