//! Login page with email/password form.

use dioxus::prelude::*;

/// Login page component. Posts `email` and `password` to `/login`.
#[component]
pub fn LoginView() -> Element {
    rsx! {
        main {
            class: "auth",

            h1 { "Log in" }

            form {
                method: "post",
                action: "/login",
                class: "stack",

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
                    autocomplete: "current-password",
                }

                button { r#type: "submit", "Log in" }
            }

            p {
                "No account yet? "
                a { href: "/register", "Register" }
            }
        }
    }
}
