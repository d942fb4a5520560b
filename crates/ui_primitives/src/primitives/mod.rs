//! Planner primitives and the design tokens they publish as `data-ui-*` attributes.

use leptos::ev::{FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod layout;
mod overlays;

pub use controls::{Button, FieldGroup, TextArea, TextField};
pub use data_display::{Badge, Card, DataTable, EmptyState, Heading, Text};
pub use layout::{Cluster, Stack};
pub use overlays::{Dialog, Listbox, ListboxOption, Tooltip};

/// Declares a closed token enum whose variants render as fixed attribute strings.
macro_rules! tokens {
    ($(#[$meta:meta])* $name:ident { $($(#[$variant_meta:meta])* $variant:ident => $token:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            pub(crate) fn token(self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }
    };
}

tokens! {
    /// Visual weight of a [`Button`].
    ButtonVariant {
        #[default]
        Standard => "standard",
        Primary => "primary",
        Quiet => "quiet",
    }
}

tokens! {
    /// Size of a [`Button`].
    ButtonSize {
        Sm => "sm",
        #[default]
        Md => "md",
    }
}

tokens! {
    /// HTML `type` of a [`Button`].
    ButtonType {
        #[default]
        Button => "button",
        Submit => "submit",
    }
}

tokens! {
    /// Text color role shared by [`Text`] and [`Badge`].
    TextTone {
        #[default]
        Primary => "primary",
        Secondary => "secondary",
        Accent => "accent",
        Warning => "warning",
        Danger => "danger",
    }
}

tokens! {
    /// Spacing between children of [`Stack`] and [`Cluster`].
    LayoutGap {
        Sm => "sm",
        #[default]
        Md => "md",
        Lg => "lg",
    }
}

tokens! {
    /// Inner padding of a [`Stack`].
    LayoutPadding {
        #[default]
        None => "none",
        Md => "md",
    }
}

tokens! {
    /// Main-axis distribution inside a [`Cluster`].
    LayoutJustify {
        #[default]
        Start => "start",
        Between => "between",
        End => "end",
    }
}

/// `base` followed by the caller's extra class, if any.
pub(crate) fn class_with(base: &'static str, extra: Option<&'static str>) -> String {
    match extra.filter(|extra| !extra.is_empty()) {
        Some(extra) => format!("{base} {extra}"),
        None => base.to_string(),
    }
}

pub(crate) fn flag(on: bool) -> &'static str {
    if on {
        "true"
    } else {
        "false"
    }
}

/// DOM handler that hands the event to `callback` when one was supplied.
pub(crate) fn forward<E: 'static>(callback: Option<Callback<E>>) -> impl Fn(E) + 'static {
    move |ev| {
        if let Some(callback) = callback {
            callback.call(ev);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn extra_class_is_appended_only_when_present() {
        assert_eq!(class_with("ui-card", None), "ui-card");
        assert_eq!(class_with("ui-card", Some("")), "ui-card");
        assert_eq!(
            class_with("ui-card", Some("planner-login-card")),
            "ui-card planner-login-card"
        );
    }

    #[test]
    fn token_defaults_match_the_unstyled_look() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(ButtonType::Submit.token(), "submit");
        assert_eq!(TextTone::default().token(), "primary");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutPadding::default().token(), "none");
        assert_eq!(LayoutJustify::Between.token(), "between");
        assert_eq!(flag(true), "true");
        assert_eq!(flag(false), "false");
    }
}
