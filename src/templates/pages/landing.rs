// templates/pages/landing.rs

use crate::domain::content::{BENEFITS, SHOWCASE, STEPS, TESTIMONIALS};
use crate::domain::LandingState;
use crate::templates::components::{buy_smart_button, faq_list, icons, nav_bar};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn landing_page(state: &LandingState) -> Markup {
    desktop_layout(
        "WisePick | See Reviews. See Prices. Decide Smarter.",
        html! {
            div class="landing" {
                (nav_bar(state))
                (hero())
                (benefits())
                (how_it_works())
                (testimonials())
                (faq(state))
                (closing_cta())
                (footer())
            }
        },
    )
}

fn section_heading(title: &str, lead: &str) -> Markup {
    html! {
        div class="section-heading" {
            h2 { (title) }
            p { (lead) }
        }
    }
}

fn showcase(class: &str) -> Markup {
    html! {
        div class=(class) {
            @for image in SHOWCASE {
                img src=(image.src) alt=(image.alt) loading="lazy";
            }
        }
    }
}

fn hero() -> Markup {
    html! {
        section class="hero" {
            (showcase("hero-images"))
            div class="hero-copy" {
                h1 {
                    "WisePick"
                    span class="tagline" { "See Reviews. See Prices. Decide Smarter." }
                }
                p class="lead" { "Smart decisions, simplified for every buyer to shop smarter." }
                p { "Easily compare reviews, prices and get personalized recommendations in one app." }
                div class="hero-actions" {
                    (buy_smart_button("Buy Smart", "btn btn-gradient btn-large", true))
                    button type="button" class="btn btn-outline btn-large" { "Watch Demo" }
                }
            }
        }
    }
}

fn benefits() -> Markup {
    html! {
        section id="benefits" class="section" {
            (section_heading(
                "Why Choose WisePick?",
                "Everything you need to make smarter shopping decisions, all in one place",
            ))
            div class="grid grid-3" {
                @for benefit in BENEFITS {
                    div class={ "benefit " (benefit.tone) } {
                        div class="benefit-icon" { (icons::icon(benefit.icon, "icon icon-lg")) }
                        h3 { (benefit.title) }
                        p { (benefit.description) }
                    }
                }
            }
            (showcase("benefit-images"))
        }
    }
}

fn how_it_works() -> Markup {
    html! {
        section id="how-it-works" class="section section-tinted" {
            (section_heading("How It Works", "Three simple steps to smarter shopping decisions"))
            div class="grid grid-3" {
                @for step in STEPS {
                    div class="step" {
                        div class="step-icon" { (icons::icon(step.icon, "icon icon-lg")) }
                        div class="step-number" { (step.number) }
                        h3 { (step.title) }
                        p { (step.description) }
                    }
                }
            }
        }
    }
}

fn testimonials() -> Markup {
    html! {
        section id="testimonials" class="section" {
            (section_heading(
                "What Shoppers Say About WisePick",
                "Real experiences from smart shoppers who transformed their buying decisions",
            ))
            div class="grid grid-3" {
                @for t in TESTIMONIALS {
                    figure class="testimonial" {
                        div class="rating" {
                            @for _ in 0..5 {
                                (icons::star(true, "icon icon-sm star star-filled"))
                            }
                        }
                        blockquote { "\u{201c}" (t.text) "\u{201d}" }
                        figcaption {
                            span class={ "avatar " (t.tone) } { (t.initial()) }
                            span class="author" {
                                strong { (t.author) }
                                span class="role" { (t.role) }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn faq(state: &LandingState) -> Markup {
    html! {
        section id="faq" class="section section-tinted" {
            (section_heading("Frequently Asked Questions", "Everything you need to know about WisePick"))
            (faq_list(state))
        }
    }
}

fn closing_cta() -> Markup {
    html! {
        section class="closing-cta" {
            h2 { "Ready to Shop Smarter?" }
            p { "Join thousands of smart shoppers who make better decisions with WisePick" }
            (buy_smart_button("Buy Smart - It's Free!", "btn btn-light btn-large", false))
        }
    }
}

fn footer() -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-grid" {
                div {
                    div class="brand" {
                        (icons::shopping_bag("icon icon-lg"))
                        span { "WisePick" }
                    }
                    p { "WisePick: Shop smarter, every time." }
                    p class="muted" { "Smart decisions, simplified for every buyer to shop smarter." }
                }
                div {
                    h3 { "Quick Links" }
                    ul {
                        @for link in ["About", "Contact", "Features", "Blog"] {
                            li { a href="#" { (link) } }
                        }
                    }
                }
                div {
                    h3 { "Legal" }
                    ul {
                        @for link in ["Privacy", "Terms", "Support"] {
                            li { a href="#" { (link) } }
                        }
                    }
                }
            }
            p class="copyright" { "© 2025 WisePick. All rights reserved." }
        }
    }
}
