use dioxus::prelude::*;
use ui::PageHeader;

#[component]
pub fn Settings() -> Element {
    rsx! {
        div {
            PageHeader {
                title: "Settings",
                subtitle: "Manage your account settings and preferences.",
            }
            div { class: "card empty-state",
                p { class: "text-muted", "Coming Soon..." }
            }
        }
    }
}
