use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

impl ButtonVariant {
    pub const fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => {
                "w-full rounded-md px-4 py-2 text-sm font-medium bg-gray-900 text-white hover:bg-gray-800"
            }
            ButtonVariant::Outline => {
                "w-full rounded-md px-4 py-2 text-sm font-medium border border-gray-300 bg-transparent hover:bg-gray-100"
            }
        }
    }
}

/// Pressable primitive. Navigation is left to whatever wraps it.
#[component]
pub fn Button(#[prop(optional)] variant: ButtonVariant, children: Children) -> impl IntoView {
    view! {
        <button type="button" class=variant.class()>
            {children()}
        </button>
    }
}
