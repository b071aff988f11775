use crate::domain::content::FAQS;
use crate::domain::LandingState;
use crate::templates::components::icons;
use maud::{html, Markup};

/// Accordion of FAQ items; at most one answer is expanded.
pub fn faq_list(state: &LandingState) -> Markup {
    html! {
        div id="faq-list" class="faq-list" {
            @for (index, faq) in FAQS.iter().enumerate() {
                @let open = state.is_faq_open(index);
                div class=(if open { "faq-item open" } else { "faq-item" }) {
                    form
                        method="post"
                        action=(format!("/faq/{index}"))
                        hx-post=(format!("/faq/{index}"))
                        hx-target="#faq-list"
                        hx-swap="outerHTML"
                    {
                        button
                            type="submit"
                            class="faq-question"
                            aria-expanded=(if open { "true" } else { "false" })
                        {
                            span { (faq.question) }
                            (icons::chevron(open, "icon icon-sm"))
                        }
                    }
                    @if open {
                        div class="faq-answer" { (faq.answer) }
                    }
                }
            }
        }
    }
}
