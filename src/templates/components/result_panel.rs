use crate::domain::{ProductResult, ResultPanel, SearchForm};
use crate::templates::components::{icons, search_form::search_button};
use maud::{html, Markup};

/// How often the loading panel asks whether the lookup is done.
const POLL_TRIGGER: &str = "every 500ms";

/// Exactly one of prompt, loading, results or error.
pub fn result_panel(form: &SearchForm) -> Markup {
    match form.panel() {
        ResultPanel::Prompt => html! {
            div id="result-panel" class="result-panel panel-prompt" {
                (icons::shopping_bag("icon icon-xl muted"))
                p { "Your personalized product details and best deals will appear here." }
            }
        },
        ResultPanel::Loading => html! {
            div
                id="result-panel"
                class="result-panel panel-loading"
                hx-get="/search/results"
                hx-trigger=(POLL_TRIGGER)
                hx-swap="outerHTML"
            {
                (icons::loader("icon icon-xl spin accent"))
                p { "Finding the best deals for you..." }
            }
        },
        ResultPanel::Results(results) => html! {
            div id="result-panel" class="result-panel panel-results" {
                @for result in results {
                    (product_card(result))
                }
            }
        },
        ResultPanel::Error(err) => html! {
            div id="result-panel" class="result-panel panel-error" role="alert" {
                (icons::alert("icon icon-xl"))
                p { (err.to_string()) }
            }
        },
    }
}

/// Poll response: the panel plus the submit button, re-enabled once loading ends.
pub fn result_panel_update(form: &SearchForm) -> Markup {
    html! {
        (result_panel(form))
        (search_button(form.is_loading(), true))
    }
}

pub fn product_card(result: &ProductResult) -> Markup {
    let filled = result.filled_stars();

    html! {
        article class="product-card" data-product-id=(result.id) {
            div class="product-image" {
                img src=(result.image_url) alt=(result.name) loading="lazy";
                @if let Some(badge) = &result.deal_badge {
                    span class="deal-badge" { (badge) }
                }
            }

            div class="product-body" {
                div class="product-head" {
                    div {
                        h3 class="product-name" { (result.name) }
                        div class="rating" {
                            @for i in 0..5 {
                                @let class = if i < filled {
                                    "icon icon-sm star star-filled"
                                } else {
                                    "icon icon-sm star"
                                };
                                (icons::star(i < filled, class))
                            }
                            span class="rating-text" {
                                (result.rating) " (" (result.review_count_display()) " reviews)"
                            }
                        }
                        p class="retailer" { "Sold by " (result.retailer) }
                    }
                    div class="price-block" {
                        div class="price" { (result.price) }
                        @if let Some(original) = &result.original_price {
                            div class="original-price" { (original) }
                        }
                    }
                }

                div class="features" {
                    h4 { "Key Features:" }
                    div class="chips" {
                        @for feature in &result.key_features {
                            span class="chip" { (feature) }
                        }
                    }
                }

                div class="pros-cons" {
                    div {
                        h4 class="pros-title" { "Pros:" }
                        ul class="pros" {
                            @for pro in &result.pros {
                                li { (pro) }
                            }
                        }
                    }
                    div {
                        h4 class="cons-title" { "Cons:" }
                        ul class="cons" {
                            @for con in &result.cons {
                                li { (con) }
                            }
                        }
                    }
                }

                div class="product-actions" {
                    button type="button" class="btn btn-gradient" {
                        "View Deal"
                        (icons::external_link("icon icon-sm"))
                    }
                    button type="button" class="btn btn-outline" { "Read Full Review" }
                }
            }
        }
    }
}
