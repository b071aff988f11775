// templates/pages/search.rs

use crate::domain::SearchForm;
use crate::templates::components::{icons, result_panel, search_card};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn search_page(user_name: &str, form: &SearchForm) -> Markup {
    desktop_layout(
        "WisePick | Search",
        html! {
            header class="search-header" {
                div class="container" {
                    div class="brand" {
                        (icons::shopping_bag("icon icon-lg"))
                        span { "WisePick" }
                    }
                    div class="greeting" {
                        "Welcome back, " strong { (user_name) }
                    }
                }
            }

            main class="container" {
                div class="search-intro" {
                    h1 { "Hi " (user_name) ", ready to shop smarter?" }
                    p class="lead" { "Tell us what you need and WisePick will find the best deals for you." }
                }

                (search_workspace(form))
            }

            footer class="search-footer" {
                div class="container" {
                    div class="brand" {
                        (icons::shopping_bag("icon"))
                        span { "WisePick" }
                        span class="muted" { "Shop smarter, every time." }
                    }
                    div class="footer-links" {
                        a href="#" { "Profile" }
                        a href="#" { "Home" }
                        a href="#" { "Help" }
                    }
                }
            }
        },
    )
}

/// The form plus the result panel; swapped as a unit on submission.
pub fn search_workspace(form: &SearchForm) -> Markup {
    html! {
        div id="search-workspace" {
            (search_card(form))

            section class="results" {
                h2 {
                    (icons::eye("icon"))
                    "Your Smart Recommendations"
                }
                (result_panel(form))
            }
        }
    }
}
