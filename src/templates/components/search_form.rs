use crate::domain::{Priority, SearchForm, Urgency};
use crate::templates::components::icons;
use maud::{html, Markup};
use std::collections::BTreeSet;

pub const SEARCH_FORM_ID: &str = "search-form";

/// The card holding every search field. Urgency and priority pickers are their own
/// forms, so the submit button points back at the main form with `form=`.
pub fn search_card(form: &SearchForm) -> Markup {
    let intent = form.intent();

    html! {
        div class="search-card" {
            form
                id=(SEARCH_FORM_ID)
                method="post"
                action="/search/submit"
                hx-post="/search/submit"
                hx-target="#search-workspace"
                hx-swap="outerHTML"
            {
                label for="query" class="field-label" { "What do you want to buy?" }
                div class="input-with-icon" {
                    (icons::search("icon icon-sm input-icon"))
                    input
                        type="text"
                        id="query"
                        name="query"
                        value=(intent.query)
                        placeholder="e.g., iPhone, Adidas running shoes"
                        autocomplete="off"
                        hx-post="/search/query"
                        hx-trigger="input changed delay:400ms"
                        hx-swap="none";
                }

                label for="details" class="field-label field-label-sub" {
                    "Product detailed description? (optional)"
                }
                textarea
                    id="details"
                    name="details"
                    rows="3"
                    placeholder="e.g., Apple iPhone 16 Pro 128 GB RAM Black Colour"
                    hx-post="/search/details"
                    hx-trigger="input changed delay:400ms"
                    hx-swap="none"
                { (intent.details) }
            }

            div class="field-group" {
                p class="field-label" { "How soon do you need it?" }
                (urgency_group(intent.urgency))
            }

            div class="field-group" {
                p class="field-label" { "What matters most in your decision?" }
                (priority_group(&intent.priorities))
            }

            @if let Some(err) = form.error() {
                div id="search-error" class="inline-error" role="alert" {
                    (icons::alert("icon icon-sm"))
                    span { (err.to_string()) }
                }
            }

            div class="submit-row" {
                (search_button(form.is_loading(), false))
                p class="microcopy" { "WisePick will instantly scan the web for your best options" }
            }
        }
    }
}

/// Single-choice urgency picker.
pub fn urgency_group(selected: Option<Urgency>) -> Markup {
    html! {
        div id="urgency-group" class="choice-grid choice-grid-3" {
            @for option in Urgency::ALL {
                @let active = selected == Some(option);
                form
                    method="post"
                    action="/search/urgency"
                    hx-post="/search/urgency"
                    hx-target="#urgency-group"
                    hx-swap="outerHTML"
                {
                    input type="hidden" name="urgency" value=(option.as_str());
                    button
                        type="submit"
                        class=(choice_class(active, &format!("urgency-{}", option.as_str())))
                        aria-pressed=(if active { "true" } else { "false" })
                    {
                        (icons::clock("icon"))
                        span class="choice-label" { (option.label()) }
                        span class="choice-hint" { (option.description()) }
                    }
                }
            }
        }
    }
}

/// Multi-select priority picker; each button toggles its own value.
pub fn priority_group(selected: &BTreeSet<Priority>) -> Markup {
    html! {
        div id="priority-group" class="choice-grid choice-grid-4" {
            @for option in Priority::ALL {
                @let active = selected.contains(&option);
                form
                    method="post"
                    action="/search/priority"
                    hx-post="/search/priority"
                    hx-target="#priority-group"
                    hx-swap="outerHTML"
                {
                    input type="hidden" name="priority" value=(option.as_str());
                    button
                        type="submit"
                        class=(choice_class(active, "priority"))
                        aria-pressed=(if active { "true" } else { "false" })
                    {
                        (icons::priority(option, "icon"))
                        span class="choice-label" { (option.label()) }
                    }
                }
            }
        }
    }
}

/// Disabled while a lookup is in flight. `oob` marks it for an htmx out-of-band swap.
pub fn search_button(loading: bool, oob: bool) -> Markup {
    html! {
        button
            type="submit"
            id="search-submit"
            form=(SEARCH_FORM_ID)
            class="btn btn-gradient btn-large"
            disabled[loading]
            hx-swap-oob=[oob.then_some("true")]
        {
            @if loading {
                (icons::loader("icon icon-sm spin"))
                "Searching..."
            } @else {
                "Search Smart"
                (icons::arrow_right("icon icon-sm"))
            }
        }
    }
}

fn choice_class(active: bool, variant: &str) -> String {
    if active {
        format!("choice choice-active {variant}")
    } else {
        "choice".to_string()
    }
}
