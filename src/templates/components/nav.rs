use crate::domain::LandingState;
use crate::templates::components::icons;
use maud::{html, Markup};

const SECTION_LINKS: [(&str, &str); 4] = [
    ("#benefits", "Benefits"),
    ("#how-it-works", "How It Works"),
    ("#testimonials", "Reviews"),
    ("#faq", "FAQ"),
];

/// "Buy Smart" switches the visitor to the search view.
pub fn buy_smart_button(label: &str, class: &str, with_arrow: bool) -> Markup {
    html! {
        form method="post" action="/navigate/search" class="inline-form" {
            button type="submit" class=(class) {
                (label)
                @if with_arrow {
                    (icons::arrow_right("icon icon-sm"))
                }
            }
        }
    }
}

/// Landing navigation bar. Re-rendered on its own when the mobile menu toggles.
pub fn nav_bar(state: &LandingState) -> Markup {
    let open = state.mobile_menu_open();

    html! {
        nav id="site-nav" class="site-nav" {
            div class="nav-inner" {
                a href="/" class="brand" {
                    (icons::shopping_bag("icon icon-lg"))
                    span { "WisePick" }
                }

                div class="nav-links desktop-only" {
                    @for (href, label) in SECTION_LINKS {
                        a href=(href) { (label) }
                    }
                    (buy_smart_button("Buy Smart", "btn btn-primary", false))
                }

                form
                    method="post"
                    action="/menu"
                    hx-post="/menu"
                    hx-target="#site-nav"
                    hx-swap="outerHTML"
                    class="mobile-only"
                {
                    button
                        type="submit"
                        class="icon-button"
                        aria-label=(if open { "Close menu" } else { "Open menu" })
                        aria-expanded=(if open { "true" } else { "false" })
                    {
                        (icons::menu(open, "icon"))
                    }
                }
            }

            @if open {
                div class="mobile-menu mobile-only" {
                    @for (href, label) in SECTION_LINKS {
                        a href=(href) { (label) }
                    }
                    (buy_smart_button("Buy Smart", "btn btn-primary btn-block", false))
                }
            }
        }
    }
}
