use crate::frontend::{
    components::button::{Button, ButtonVariant},
    navigation::{Destination, NavAction},
};
use leptos::prelude::*;

pub const HEADING: &str = "Payment Successful!";
pub const BODY: &str =
    "Thank you for your purchase. Your transaction has been completed successfully.";
pub const DISCLAIMER: &str = "This is a demo. No actual payment was processed.";

pub const ACTIONS: [NavAction; 2] = [
    NavAction {
        label: "Return to Home",
        destination: Destination::Home,
        variant: ButtonVariant::Default,
    },
    NavAction {
        label: "Back to Checkout",
        destination: Destination::Checkout,
        variant: ButtonVariant::Outline,
    },
];

/// Shown after a simulated checkout completes. No payment is processed.
#[component]
pub fn ConfirmationView() -> impl IntoView {
    let actions = ACTIONS
        .into_iter()
        .map(|action| {
            view! {
                <a href=action.request().path class="block">
                    <Button variant=action.variant>{action.label}</Button>
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="container max-w-md mx-auto py-8 px-4 text-center">
            <div class="bg-white dark:bg-gray-800 p-6 rounded-lg shadow-md">
                <div class="w-16 h-16 bg-green-100 dark:bg-green-900 rounded-full flex items-center justify-center mx-auto mb-4">
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        class="h-8 w-8 text-green-500 dark:text-green-300"
                        fill="none"
                        viewBox="0 0 24 24"
                        stroke="currentColor"
                    >
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d="M5 13l4 4L19 7"
                        />
                    </svg>
                </div>
                <h1 class="text-2xl font-bold mb-2">{HEADING}</h1>
                <p class="text-gray-600 dark:text-gray-400 mb-6">{BODY}</p>
                <div class="space-y-4">{actions}</div>
                <div class="mt-6 text-sm text-gray-500">{DISCLAIMER}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::navigation::NavigationRequest;

    fn render() -> String {
        Owner::new().with(|| view! { <ConfirmationView/> }.to_html())
    }

    #[test]
    fn single_heading_and_disclaimer() {
        let html = render();

        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches(HEADING).count(), 1);
        assert_eq!(html.matches(DISCLAIMER).count(), 1);
        assert!(html.contains(BODY));
        assert!(html.contains("d=\"M5 13l4 4L19 7\""));
    }

    #[test]
    fn exactly_two_labelled_links() {
        let html = render();

        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(html.matches("<button").count(), 2);
        assert_eq!(html.matches("Return to Home").count(), 1);
        assert_eq!(html.matches("Back to Checkout").count(), 1);
    }

    #[test]
    fn links_point_at_home_then_checkout() {
        let html = render();

        let home_href = html.find("href=\"/\"").unwrap();
        let home_label = html.find("Return to Home").unwrap();
        let checkout_href = html.find("href=\"/checkout\"").unwrap();
        let checkout_label = html.find("Back to Checkout").unwrap();

        assert!(home_href < home_label);
        assert!(home_label < checkout_href);
        assert!(checkout_href < checkout_label);
    }

    #[test]
    fn only_second_button_is_outlined() {
        assert_eq!(ACTIONS[0].variant, ButtonVariant::Default);
        assert_eq!(ACTIONS[1].variant, ButtonVariant::Outline);

        let html = render();
        assert_eq!(html.matches(ButtonVariant::Outline.class()).count(), 1);
        assert_eq!(html.matches(ButtonVariant::Default.class()).count(), 1);
    }

    #[test]
    fn render_is_idempotent() {
        assert_eq!(render(), render());
    }

    #[test]
    fn return_home_requests_root_once() {
        let html = render();

        assert_eq!(html.matches("href=\"/\"").count(), 1);
        assert_eq!(ACTIONS[0].request(), NavigationRequest { path: "/" });
    }

    #[test]
    fn back_to_checkout_requests_checkout_once() {
        let html = render();

        assert_eq!(html.matches("href=\"/checkout\"").count(), 1);
        assert_eq!(ACTIONS[1].request(), NavigationRequest { path: "/checkout" });
    }

    #[test]
    fn no_other_navigation_targets() {
        let html = render();

        assert_eq!(html.matches("href=").count(), 2);
        assert!(!html.contains("<form"));
        assert!(!html.contains("on:click"));
    }
}
