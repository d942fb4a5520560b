//! Shared UI primitives for the planner screens.
//!
//! Stateless Leptos components (badge, button, card, dialog, text inputs, tooltip, listbox,
//! layout) that publish their look through `data-ui-*` attributes for the planner stylesheet.
//! Screens compose these instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonType, ButtonVariant, Card, Cluster, DataTable, Dialog,
    EmptyState, FieldGroup, Heading, LayoutGap, LayoutJustify, LayoutPadding, Listbox,
    ListboxOption, Stack, Text, TextArea, TextField, TextTone, Tooltip,
};

/// Convenience imports for crates composing the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonType, ButtonVariant, Card, Cluster, DataTable, Dialog,
        EmptyState, FieldGroup, Heading, LayoutGap, LayoutJustify, LayoutPadding, Listbox,
        ListboxOption, Stack, Text, TextArea, TextField, TextTone, Tooltip,
    };
}
