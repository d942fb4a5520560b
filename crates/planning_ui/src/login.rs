//! Login form that hands credentials to an external authentication callback.

use std::fmt;

use leptos::ev::SubmitEvent;
use leptos::*;
use serde::{Deserialize, Serialize};
use ui_primitives::prelude::*;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Credentials collected by [`LoginScreen`].
pub struct LoginCredentials {
    /// Trimmed user id.
    pub user_id: String,
    /// Password exactly as typed.
    pub password: String,
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("user_id", &self.user_id)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl LoginCredentials {
    /// Builds credentials from raw field values; `None` while either field is blank.
    pub fn from_fields(user_id: &str, password: &str) -> Option<Self> {
        let user_id = user_id.trim();
        if user_id.is_empty() || password.is_empty() {
            return None;
        }
        Some(Self {
            user_id: user_id.to_string(),
            password: password.to_string(),
        })
    }
}

#[component]
/// Sign-in card. Authentication itself belongs to `on_submit`; the screen only collects input
/// and reflects the caller's `pending` and `error` state.
pub fn LoginScreen(
    on_submit: Callback<LoginCredentials>,
    #[prop(optional, into)] pending: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let user_id = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let credentials =
        Signal::derive(move || LoginCredentials::from_fields(&user_id.get(), &password.get()));
    let title = title.unwrap_or_else(|| "Sign in".to_string());

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        match credentials.get_untracked() {
            Some(credentials) => {
                logging::log!("login submitted");
                on_submit.call(credentials);
            }
            None => logging::warn!("login submit ignored: user id and password are required"),
        }
    };

    view! {
        <div class="planner-login" data-ui-kind="login-screen">
            <Card layout_class="planner-login-card" aria_label=title.clone()>
                <form on:submit=submit>
                    <Stack gap=LayoutGap::Md>
                        <Heading>{title}</Heading>
                        <FieldGroup title="User ID">
                            <TextField
                                name="user_id"
                                autocomplete="username"
                                required=true
                                value=user_id
                                disabled=pending
                                on_input=Callback::new(move |ev| user_id.set(event_target_value(&ev)))
                            />
                        </FieldGroup>
                        <FieldGroup title="Password">
                            <TextField
                                name="password"
                                input_type="password"
                                autocomplete="current-password"
                                required=true
                                value=password
                                disabled=pending
                                on_input=Callback::new(move |ev| password.set(event_target_value(&ev)))
                            />
                        </FieldGroup>
                        {move || error.get().map(|message| view! {
                            <div role="alert">
                                <Text tone=TextTone::Danger>{message}</Text>
                            </div>
                        })}
                        <Button
                            variant=ButtonVariant::Primary
                            button_type=ButtonType::Submit
                            busy=pending
                            disabled=Signal::derive(move || credentials.get().is_none())
                        >
                            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                        </Button>
                    </Stack>
                </form>
            </Card>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_fields_do_not_produce_credentials() {
        assert_eq!(LoginCredentials::from_fields("", "secret"), None);
        assert_eq!(LoginCredentials::from_fields("   ", "secret"), None);
        assert_eq!(LoginCredentials::from_fields("planner", ""), None);
    }

    #[test]
    fn user_id_is_trimmed_but_password_is_not() {
        assert_eq!(
            LoginCredentials::from_fields(" planner ", " pw "),
            Some(LoginCredentials {
                user_id: "planner".to_string(),
                password: " pw ".to_string(),
            })
        );
    }

    #[test]
    fn debug_output_redacts_password() {
        let credentials = LoginCredentials::from_fields("planner", "hunter2").expect("credentials");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("planner"));
        assert!(!rendered.contains("hunter2"));
    }
}
